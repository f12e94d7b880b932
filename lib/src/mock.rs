//! Module tasked with generating mock data to populate the application
//! during development runs.

use chrono::{Duration, Utc};
use rand::Rng;
use uuid::Uuid;

use crate::analytics::VisitorDay;
use crate::{Config, Database, Result};

/// Generates and saves various mocking data in the database.
pub fn generate(config: &Config, db: &Database) -> Result<()> {
    if !db.is_empty::<VisitorDay>()? && !config.dev.mock_regen {
        return Ok(());
    }
    if config.dev.mock_regen {
        db.clear::<VisitorDay>()?;
    }
    visitor_days(db, 30)?;

    Ok(())
}

/// Fills the visitor series with a run of randomized days ending yesterday.
pub fn visitor_days(db: &Database, days: i64) -> Result<()> {
    let mut rng = rand::thread_rng();
    let today = Utc::now().date_naive();
    for offset in 1..=days {
        db.set(&VisitorDay {
            id: Uuid::new_v4(),
            date: today - Duration::days(offset),
            visitors: rng.gen_range(30..140),
        })?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mock_fills_the_requested_number_of_days() {
        let db = Database::temporary().unwrap();
        visitor_days(&db, 30).unwrap();
        assert_eq!(db.len::<VisitorDay>().unwrap(), 30);
    }

    #[test]
    fn generate_leaves_existing_data_alone_without_regen() {
        let db = Database::temporary().unwrap();
        visitor_days(&db, 5).unwrap();

        let config = Config::default();
        generate(&config, &db).unwrap();
        assert_eq!(db.len::<VisitorDay>().unwrap(), 5);
    }
}
