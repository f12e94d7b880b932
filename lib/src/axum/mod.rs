//! Pre-made http surface for the site content and the admin panel.
//!
//! The application composes its own router and then attaches the content
//! routers through [`router`]; [`start`] takes care of the db, initial
//! content and the listener.

pub mod analytics;
pub mod contact;
pub mod image;
pub mod service;
pub mod testimonial;

use std::sync::Arc;

use axum::Extension;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::db::Database;
use crate::{init, mock, Config, Result};

pub type Router = axum::Router;

pub type DbExt = Extension<Database>;
pub type ConfigExt = Extension<Arc<Config>>;

/// Attaches the pre-made content and admin routers to an application
/// router.
pub fn router(router: Router, _config: &Config) -> Router {
    router
        .merge(service::router())
        .merge(testimonial::router())
        .merge(contact::router())
        .merge(analytics::router())
        .merge(image::router())
}

/// Opens the database, initializes content and serves the application on
/// the configured address.
pub async fn start(mut router: Router, config: Config) -> Result<()> {
    if config.tracing.enabled {
        crate::tracing::init(&config)?;
    }

    let db = Database::open(&config.db.path)?;
    init::initialize(&config, &db)?;
    if config.dev.enabled && config.dev.mock {
        mock::generate(&config, &db)?;
    }

    if config.assets.serve {
        router = router.nest_service("/assets", ServeDir::new(&config.assets.path));
    }

    let router = router
        .layer(TraceLayer::new_for_http())
        .layer(Extension(db))
        .layer(Extension(Arc::new(config.clone())));

    tracing::info!("serving {} on http://{}", config.name, config.address);
    let listener = tokio::net::TcpListener::bind(config.address).await?;
    axum::serve(listener, router).await?;

    Ok(())
}
