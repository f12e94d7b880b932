use chrono::{NaiveDate, Utc};
use uuid::Uuid;

use crate::db::{Collectable, Database, Identifiable};
use crate::error::{ErrorKind, Result};
use crate::image::{select_default, AvatarKind, ImageReference};

/// A customer testimonial shown on the site.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct Testimonial {
    #[serde(default = "Uuid::new_v4")]
    pub id: Uuid,

    pub name: String,
    /// Job title or company of the author.
    pub designation: String,

    /// Star rating, 1 through 5.
    pub rating: u8,
    pub comment: String,

    /// Either a default avatar or an inlined custom upload; resolved and
    /// validated by the image module, opaque to this record.
    pub avatar: ImageReference,

    pub date_added: NaiveDate,
}

impl Default for Testimonial {
    fn default() -> Self {
        Self {
            id: Uuid::new_v4(),
            name: "".to_string(),
            designation: "".to_string(),
            rating: 5,
            comment: "".to_string(),
            avatar: select_default(AvatarKind::Female),
            date_added: Utc::now().date_naive(),
        }
    }
}

impl Collectable for Testimonial {
    fn get_collection_name() -> &'static str {
        "testimonials"
    }
}

impl Identifiable for Testimonial {
    fn get_id(&self) -> Uuid {
        self.id
    }
}

/// Validated insert. Requires an author name and a comment; the added date
/// is stamped here rather than taken from the caller.
pub fn create(db: &Database, mut testimonial: Testimonial) -> Result<Testimonial> {
    if testimonial.name.trim().is_empty() || testimonial.comment.trim().is_empty() {
        return Err(ErrorKind::BadInput(
            "a testimonial requires both a name and a comment".to_string(),
        )
        .into());
    }
    if !(1..=5).contains(&testimonial.rating) {
        return Err(ErrorKind::BadInput(format!(
            "rating must be between 1 and 5, got {}",
            testimonial.rating
        ))
        .into());
    }
    testimonial.date_added = Utc::now().date_naive();
    db.set(&testimonial)?;
    Ok(testimonial)
}

/// Replaces an existing testimonial. Unknown ids are an error.
pub fn update(db: &Database, testimonial: &Testimonial) -> Result<()> {
    db.get::<Testimonial>(testimonial.id)?;
    db.set(testimonial)
}

pub fn delete(db: &Database, id: Uuid) -> Result<()> {
    db.remove_by_id::<Testimonial>(id)
}

/// Mean rating across the given testimonials, `0.0` when there are none.
pub fn average_rating(testimonials: &[Testimonial]) -> f32 {
    if testimonials.is_empty() {
        return 0.0;
    }
    testimonials.iter().map(|t| t.rating as f32).sum::<f32>() / testimonials.len() as f32
}

#[cfg(test)]
mod tests {
    use super::*;

    fn with_rating(rating: u8) -> Testimonial {
        Testimonial {
            name: "A. Customer".to_string(),
            comment: "Very good".to_string(),
            rating,
            ..Default::default()
        }
    }

    #[test]
    fn average_rating_of_nothing_is_zero() {
        assert_eq!(average_rating(&[]), 0.0);
    }

    #[test]
    fn average_rating_is_the_mean() {
        let testimonials = vec![with_rating(5), with_rating(4), with_rating(3)];
        assert_eq!(average_rating(&testimonials), 4.0);
    }

    #[test]
    fn create_validates_rating_bounds() {
        let db = Database::temporary().unwrap();
        assert!(create(&db, with_rating(0)).is_err());
        assert!(create(&db, with_rating(6)).is_err());
        assert!(create(&db, with_rating(1)).is_ok());
        assert!(create(&db, with_rating(5)).is_ok());
    }

    #[test]
    fn create_rejects_blank_name_or_comment() {
        let db = Database::temporary().unwrap();

        let unnamed = Testimonial {
            comment: "Fine".to_string(),
            ..Default::default()
        };
        assert!(create(&db, unnamed).is_err());

        let silent = Testimonial {
            name: "B. Customer".to_string(),
            ..Default::default()
        };
        assert!(create(&db, silent).is_err());
    }

    #[test]
    fn new_testimonials_default_to_the_female_avatar() {
        use crate::image::ImageKind;

        let testimonial = Testimonial::default();
        assert_eq!(testimonial.avatar.kind(), ImageKind::DefaultFemale);
    }
}
