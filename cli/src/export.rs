use anyhow::Result;
use clap::{Arg, ArgMatches, Command};
use uuid::Uuid;

use virtuserve::{Config, Database};

pub fn cmd() -> Command {
    Command::new("export")
        .about("Export information from the database")
        .display_order(70)
        .arg(
            Arg::new("collection")
                .display_order(11)
                .help("Provide collection name")
                .required(true),
        )
}

pub async fn run(matches: &ArgMatches, config: &Config) -> Result<()> {
    let db = Database::open(&config.db.path)?;

    if let Some(collection) = matches.get_one::<String>("collection") {
        match collection.as_str() {
            "services" => {
                let services = db.get_collection::<virtuserve::Service>()?;
                println!("{}", serde_json::to_string_pretty(&services)?);
            }
            "testimonials" => {
                let testimonials = db.get_collection::<virtuserve::Testimonial>()?;
                println!("{}", serde_json::to_string_pretty(&testimonials)?);
            }
            "contact" => {
                let info = db.get::<virtuserve::ContactInfo>(Uuid::nil())?;
                println!("{}", serde_json::to_string_pretty(&info)?);
            }
            "visitors" => {
                let days = db.get_collection::<virtuserve::VisitorDay>()?;
                println!("{}", serde_json::to_string_pretty(&days)?);
            }
            _ => unimplemented!(),
        }
    }

    Ok(())
}
