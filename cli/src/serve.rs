use anyhow::Result;
use clap::{ArgMatches, Command};

use virtuserve::Config;

pub fn cmd() -> Command {
    Command::new("serve")
        .about("Serve the website and admin panel")
        .display_order(10)
}

pub async fn run(_matches: &ArgMatches, config: &Config) -> Result<()> {
    let router = virtuserve::axum::Router::new();
    let router = virtuserve::axum::router(router, config);

    tokio::select! {
        res = virtuserve::axum::start(router, config.clone()) => res?,
        _ = tokio::signal::ctrl_c() => println!("Initiating graceful shutdown..."),
    }

    Ok(())
}
