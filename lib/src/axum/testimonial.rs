use axum::extract::Path;
use axum::response::IntoResponse;
use axum::routing::{get, post, put};
use axum::{Extension, Json};
use uuid::Uuid;

use crate::{routes, testimonial, Result, Testimonial};

use super::{DbExt, Router};

pub fn router() -> Router {
    Router::new()
        .route(routes::TESTIMONIALS, get(list))
        .route(routes::TESTIMONIAL, post(create))
        .route("/testimonial/:id", put(update).delete(remove))
}

pub async fn list(Extension(db): DbExt) -> Result<impl IntoResponse> {
    let mut testimonials = db.get_collection::<Testimonial>()?;
    testimonials.sort_by_key(|t| t.date_added);
    Ok(Json(testimonials))
}

pub async fn create(
    Extension(db): DbExt,
    Json(testimonial): Json<Testimonial>,
) -> Result<impl IntoResponse> {
    let created = testimonial::create(&db, testimonial)?;
    Ok(Json(created))
}

pub async fn update(
    Path(id): Path<Uuid>,
    Extension(db): DbExt,
    Json(mut testimonial): Json<Testimonial>,
) -> Result<impl IntoResponse> {
    testimonial.id = id;
    testimonial::update(&db, &testimonial)?;
    Ok(Json(testimonial))
}

pub async fn remove(Path(id): Path<Uuid>, Extension(db): DbExt) -> Result<impl IntoResponse> {
    testimonial::delete(&db, id)?;
    Ok(())
}
