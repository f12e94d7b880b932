use axum::extract::Path;
use axum::response::IntoResponse;
use axum::routing::{get, post, put};
use axum::{Extension, Json};
use uuid::Uuid;

use crate::{routes, service, Result, Service};

use super::{DbExt, Router};

pub fn router() -> Router {
    Router::new()
        .route(routes::SERVICES, get(list))
        .route(routes::SERVICE, post(create))
        .route("/service/:id", put(update).delete(remove))
}

pub async fn list(Extension(db): DbExt) -> Result<impl IntoResponse> {
    let services = db.get_collection::<Service>()?;
    Ok(Json(services))
}

pub async fn create(
    Extension(db): DbExt,
    Json(service): Json<Service>,
) -> Result<impl IntoResponse> {
    let created = service::create(&db, service)?;
    Ok(Json(created))
}

pub async fn update(
    Path(id): Path<Uuid>,
    Extension(db): DbExt,
    Json(mut service): Json<Service>,
) -> Result<impl IntoResponse> {
    service.id = id;
    service::update(&db, &service)?;
    Ok(Json(service))
}

pub async fn remove(Path(id): Path<Uuid>, Extension(db): DbExt) -> Result<impl IntoResponse> {
    service::delete(&db, id)?;
    Ok(())
}
