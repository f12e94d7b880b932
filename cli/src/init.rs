use anyhow::Result;
use clap::{ArgMatches, Command};

use virtuserve::{Config, Database};

pub fn cmd() -> Command {
    Command::new("init")
        .about("Populate an empty database with the starter content")
        .display_order(20)
}

pub async fn run(_matches: &ArgMatches, config: &Config) -> Result<()> {
    let db = Database::open(&config.db.path)?;
    virtuserve::init::initialize(config, &db)?;
    println!("initialized content at {}", config.db.path);

    Ok(())
}
