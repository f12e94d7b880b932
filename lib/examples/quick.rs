//! Corner-cutting example to show off the shortest path to a usable site.
//!
//! Serves the starter content on a local port; the db and seed data are
//! handled behind the scenes.

use virtuserve::Config;

#[tokio::main]
async fn main() {
    let config = Config {
        address: "127.0.0.1:8001".parse().unwrap(),
        ..Default::default()
    };

    let router = virtuserve::axum::Router::new();
    let router = virtuserve::axum::router(router, &config);

    virtuserve::axum::start(router, config)
        .await
        .expect("failed to serve")
}
