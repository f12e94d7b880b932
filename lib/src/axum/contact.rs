use axum::response::IntoResponse;
use axum::routing::get;
use axum::{Extension, Json};

use crate::{contact, routes, ContactInfo, Result};

use super::{DbExt, Router};

pub fn router() -> Router {
    Router::new().route(routes::CONTACT, get(show).put(update))
}

pub async fn show(Extension(db): DbExt) -> Result<impl IntoResponse> {
    let info = contact::get(&db)?;
    Ok(Json(info))
}

pub async fn update(
    Extension(db): DbExt,
    Json(info): Json<ContactInfo>,
) -> Result<impl IntoResponse> {
    contact::update(&db, &info)?;
    Ok(Json(info))
}
