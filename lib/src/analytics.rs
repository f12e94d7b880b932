//! Daily visitor counts backing the overview chart. Nothing fancier than a
//! date-keyed series; aggregation happens at read time.

use chrono::NaiveDate;
use uuid::Uuid;

use crate::db::{Collectable, Database, Identifiable};
use crate::Result;

/// One day of visitor traffic.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct VisitorDay {
    #[serde(default = "Uuid::new_v4")]
    pub id: Uuid,

    pub date: NaiveDate,
    pub visitors: u32,
}

impl Collectable for VisitorDay {
    fn get_collection_name() -> &'static str {
        "visitor_data"
    }
}

impl Identifiable for VisitorDay {
    fn get_id(&self) -> Uuid {
        self.id
    }
}

/// The full series in chronological order.
pub fn series(db: &Database) -> Result<Vec<VisitorDay>> {
    let mut days = db.get_collection::<VisitorDay>()?;
    days.sort_by_key(|d| d.date);
    Ok(days)
}

pub fn total_visitors(days: &[VisitorDay]) -> u64 {
    days.iter().map(|d| d.visitors as u64).sum()
}

/// Bumps the counter for the given day, creating the entry on first visit.
/// Returns the new count.
pub fn record_visit(db: &Database, date: NaiveDate) -> Result<u32> {
    let mut day = db
        .get_collection::<VisitorDay>()?
        .into_iter()
        .find(|d| d.date == date)
        .unwrap_or(VisitorDay {
            id: Uuid::new_v4(),
            date,
            visitors: 0,
        });
    day.visitors += 1;
    db.set(&day)?;
    Ok(day.visitors)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(date: &str, visitors: u32) -> VisitorDay {
        VisitorDay {
            id: Uuid::new_v4(),
            date: date.parse().unwrap(),
            visitors,
        }
    }

    #[test]
    fn totals_sum_the_series() {
        let days = vec![day("2024-01-01", 45), day("2024-01-02", 52), day("2024-01-03", 38)];
        assert_eq!(total_visitors(&days), 135);
    }

    #[test]
    fn series_comes_back_sorted_by_date() {
        let db = Database::temporary().unwrap();
        db.set(&day("2024-01-03", 38)).unwrap();
        db.set(&day("2024-01-01", 45)).unwrap();
        db.set(&day("2024-01-02", 52)).unwrap();

        let days = series(&db).unwrap();
        let dates: Vec<_> = days.iter().map(|d| d.date.to_string()).collect();
        assert_eq!(dates, vec!["2024-01-01", "2024-01-02", "2024-01-03"]);
    }

    #[test]
    fn record_visit_creates_then_increments() {
        let db = Database::temporary().unwrap();
        let date: NaiveDate = "2024-02-01".parse().unwrap();

        assert_eq!(record_visit(&db, date).unwrap(), 1);
        assert_eq!(record_visit(&db, date).unwrap(), 2);
        assert_eq!(db.len::<VisitorDay>().unwrap(), 1);
    }
}
