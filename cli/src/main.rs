#![allow(warnings)]

mod export;
mod init;
mod serve;

use clap::{Arg, ArgMatches, Command};
use virtuserve::{config, Config};

pub const VERSION: &'static str = env!("CARGO_PKG_VERSION");

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // If executed in a context where config file is available then it gets
    // picked up automatically. Otherwise the defaults apply, and a config
    // file path can still be provided through the `--config` argument.
    let mut config: Config = config::load().unwrap_or_default();

    let matches = cmd().get_matches();

    // Load the proper config if proper argument is provided.
    if let Some(config_path) = matches.get_one::<String>("config") {
        config = config::load_from(config_path)?;
    }

    match matches.subcommand() {
        Some(("serve", m)) => serve::run(m, &config).await?,
        Some(("init", m)) => init::run(m, &config).await?,
        Some(("export", m)) => export::run(m, &config).await?,
        _ => unimplemented!(),
    }

    Ok(())
}

pub fn cmd() -> Command {
    Command::new("virtuserve")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .infer_subcommands(true)
        .version(VERSION)
        .about("Business website with a local admin panel")
        .subcommand(serve::cmd())
        .subcommand(init::cmd())
        .subcommand(export::cmd())
        .arg(Arg::new("config").long("config").value_name("PATH"))
}
