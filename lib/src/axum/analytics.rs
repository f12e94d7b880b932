use axum::response::IntoResponse;
use axum::routing::get;
use axum::{Extension, Json};
use chrono::Utc;

use crate::{admin, analytics, routes, Result};

use super::{ConfigExt, DbExt, Router};

pub fn router() -> Router {
    Router::new()
        .route(routes::HOME, get(home))
        .route(routes::ANALYTICS, get(series))
        .route(routes::STATS, get(stats))
}

/// Landing payload. Every hit bumps today's visitor counter, which is what
/// feeds the overview chart.
pub async fn home(
    Extension(db): DbExt,
    Extension(config): ConfigExt,
) -> Result<impl IntoResponse> {
    analytics::record_visit(&db, Utc::now().date_naive())?;
    Ok(Json(serde_json::json!({
        "name": config.company.name,
        "tagline": config.company.tagline,
    })))
}

pub async fn series(Extension(db): DbExt) -> Result<impl IntoResponse> {
    let days = analytics::series(&db)?;
    Ok(Json(days))
}

pub async fn stats(Extension(db): DbExt) -> Result<impl IntoResponse> {
    let stats = admin::stats(&db)?;
    Ok(Json(stats))
}
