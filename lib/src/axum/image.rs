use std::io;

use axum::extract::{DefaultBodyLimit, Multipart, Path};
use axum::response::IntoResponse;
use axum::routing::{get, post};
use axum::Json;

use crate::error::ErrorKind;
use crate::image::{self, AvatarKind, UploadCandidate, UploadError, MAX_UPLOAD_BYTES};
use crate::{routes, Result};

use super::Router;

// Allow multipart overhead while keeping the actual payload policy at 5 MiB.
const UPLOAD_BODY_LIMIT: usize = MAX_UPLOAD_BYTES as usize + 1024 * 1024;

pub fn router() -> Router {
    Router::new()
        .route(routes::AVATAR, post(upload))
        .route_layer(DefaultBodyLimit::max(UPLOAD_BODY_LIMIT))
        .route("/avatar/default/:kind", get(default))
}

/// Accepts a multipart form holding an `image` part and answers with the
/// encoded reference. Validation rejections come back as 400s carrying the
/// operator-facing message.
pub async fn upload(mut multipart: Multipart) -> Result<impl IntoResponse> {
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| ErrorKind::BadInput(e.to_string()))?
    {
        if field.name() != Some("image") {
            continue;
        }

        let content_type = field
            .content_type()
            .ok_or_else(|| {
                ErrorKind::BadInput("image part is missing a content type".to_string())
            })?
            .to_string();

        let bytes = field.bytes().await.map_err(|e| {
            ErrorKind::Upload(UploadError::ReadFailure(io::Error::other(e)))
        })?;

        let reference = UploadCandidate::from_bytes(content_type, bytes.to_vec())
            .ingest()
            .await
            .map_err(ErrorKind::Upload)?;

        return Ok(Json(reference));
    }

    Err(ErrorKind::BadInput("missing image file field".to_string()).into())
}

pub async fn default(Path(kind): Path<AvatarKind>) -> Result<impl IntoResponse> {
    Ok(Json(image::select_default(kind)))
}
