//! Initial content the site ships with.
//!
//! On startup, empty collections are populated with the entries below so a
//! fresh checkout renders a complete site without any manual data entry.
//! Collections that already hold data are left untouched, so operator edits
//! survive restarts.

use chrono::NaiveDate;
use uuid::Uuid;

use crate::analytics::VisitorDay;
use crate::contact::{BusinessHours, ContactInfo, SocialMedia};
use crate::image::ImageReference;
use crate::service::Service;
use crate::testimonial::Testimonial;
use crate::{Config, Database, Result};

/// Populates empty collections with the starter content.
pub fn initialize(config: &Config, db: &Database) -> Result<()> {
    if !config.init.enabled {
        return Ok(());
    }
    services(db)?;
    testimonials(db)?;
    contact_info(db)?;
    visitor_data(db)?;
    Ok(())
}

// (title, description, category)
const SERVICES: &[(&str, &str, &str)] = &[
    (
        "Data Management & Entry Services",
        "Precision data entry and typing solutions tailored to your needs.",
        "Service",
    ),
    (
        "Lead Generation & Data Extraction",
        "Strategic sourcing and extraction of high-quality leads for business growth.",
        "Service",
    ),
    (
        "Comprehensive Workbook Management",
        "Efficient management and organization of complex workbooks.",
        "Product",
    ),
    (
        "Advanced Spreadsheet Solutions",
        "Expertise in MS Office Suite and Google Sheets for optimized data handling.",
        "Product",
    ),
    (
        "Data Replication & Conversion Services",
        "Seamless copy-paste tasks and file format conversions for streamlined workflows.",
        "Service",
    ),
    (
        "Academic Typing & Document Preparation",
        "Specialized services for exam preparation, including multiple-choice questions and academic typing.",
        "Service",
    ),
    (
        "Professional CV & Resume Optimization",
        "Crafting and enhancing resumes to highlight your strengths and achieve your career goals.",
        "Service",
    ),
    (
        "Professional Call Handling",
        "Efficient management of business and client calls with clarity, professionalism, and care.",
        "Service",
    ),
    (
        "Presentation Creation",
        "Engaging and impactful presentations tailored for academic, corporate, or business needs.",
        "Product",
    ),
    (
        "LinkedIn Profile Creation",
        "Optimized LinkedIn profiles designed to highlight professional achievements and attract opportunities.",
        "Product",
    ),
    (
        "EBook Development",
        "Well-structured and professionally designed ebooks on diverse topics to showcase expertise and add value.",
        "Product",
    ),
    (
        "Design Services for Gem Business Owners",
        "Creative, industry-focused designs that enhance brand identity and appeal in the gem and jewelry sector.",
        "Service",
    ),
    (
        "Customized Sticker Creation",
        "Unique, high-quality stickers customized to suit personal, branding, or business requirements.",
        "Product",
    ),
    (
        "Customized Bookmarks",
        "Beautifully designed, printable bookmarks tailored with your favorite pictures, quotes, or themes.",
        "Product",
    ),
    (
        "Calligraphy Designs",
        "Elegant and artistic calligraphy creations, perfect for gifts, branding, and personalized projects.",
        "Product",
    ),
    (
        "Customized Instagram Highlights",
        "Aesthetic and personalized Instagram highlight covers designed to reflect your brand identity or personal style.",
        "Product",
    ),
];

// (name, designation, rating, comment, avatar, date added)
const TESTIMONIALS: &[(&str, &str, u8, &str, &str, &str)] = &[
    (
        "Sarah Johnson",
        "Marketing Director",
        5,
        "Virtu Serve transformed our data management process. Their attention to detail and quick turnaround exceeded our expectations.",
        "https://images.pexels.com/photos/774909/pexels-photo-774909.jpeg?auto=compress&cs=tinysrgb&w=150&h=150&fit=crop",
        "2024-01-15",
    ),
    (
        "Michael Chen",
        "Business Owner",
        5,
        "The resume optimization service helped me land my dream job. Professional, efficient, and results-driven.",
        "https://images.pexels.com/photos/1222271/pexels-photo-1222271.jpeg?auto=compress&cs=tinysrgb&w=150&h=150&fit=crop",
        "2024-01-16",
    ),
    (
        "Emily Rodriguez",
        "Startup Founder",
        5,
        "Their creative design services brought our brand vision to life. The custom stickers and branding materials are outstanding.",
        "https://images.pexels.com/photos/1239291/pexels-photo-1239291.jpeg?auto=compress&cs=tinysrgb&w=150&h=150&fit=crop",
        "2024-01-17",
    ),
    (
        "David Thompson",
        "Operations Manager",
        4,
        "Excellent lead generation services that significantly boosted our sales pipeline. Highly recommend their professional approach.",
        "https://images.pexels.com/photos/1681010/pexels-photo-1681010.jpeg?auto=compress&cs=tinysrgb&w=150&h=150&fit=crop",
        "2024-01-18",
    ),
    (
        "Lisa Park",
        "HR Director",
        5,
        "The presentation creation service delivered exactly what we needed for our board meeting. Professional and polished results.",
        "https://images.pexels.com/photos/1130626/pexels-photo-1130626.jpeg?auto=compress&cs=tinysrgb&w=150&h=150&fit=crop",
        "2024-01-19",
    ),
    (
        "Robert Kim",
        "Consultant",
        5,
        "Their LinkedIn profile optimization service was game-changing. Increased my profile views by 300% within a month.",
        "https://images.pexels.com/photos/1043471/pexels-photo-1043471.jpeg?auto=compress&cs=tinysrgb&w=150&h=150&fit=crop",
        "2024-01-20",
    ),
    (
        "Amanda Foster",
        "Content Creator",
        4,
        "The ebook development service exceeded expectations. Professional formatting and engaging content that resonates with readers.",
        "https://images.pexels.com/photos/1181686/pexels-photo-1181686.jpeg?auto=compress&cs=tinysrgb&w=150&h=150&fit=crop",
        "2024-01-21",
    ),
    (
        "James Wilson",
        "Jewelry Business Owner",
        5,
        "The gem business design services perfectly captured our brand essence. Beautiful, professional designs that attract customers.",
        "https://images.pexels.com/photos/1212984/pexels-photo-1212984.jpeg?auto=compress&cs=tinysrgb&w=150&h=150&fit=crop",
        "2024-01-22",
    ),
];

// (date, visitors)
const VISITOR_DATA: &[(&str, u32)] = &[
    ("2024-01-01", 45),
    ("2024-01-02", 52),
    ("2024-01-03", 38),
    ("2024-01-04", 67),
    ("2024-01-05", 73),
    ("2024-01-06", 89),
    ("2024-01-07", 95),
    ("2024-01-08", 82),
    ("2024-01-09", 76),
    ("2024-01-10", 91),
    ("2024-01-11", 103),
    ("2024-01-12", 118),
    ("2024-01-13", 125),
    ("2024-01-14", 134),
];

pub fn services(db: &Database) -> Result<()> {
    if !db.is_empty::<Service>()? {
        return Ok(());
    }
    for (title, description, category) in SERVICES {
        db.set(&Service {
            id: Uuid::new_v4(),
            title: title.to_string(),
            description: description.to_string(),
            category: category.to_string(),
        })?;
    }
    Ok(())
}

pub fn testimonials(db: &Database) -> Result<()> {
    if !db.is_empty::<Testimonial>()? {
        return Ok(());
    }
    for (name, designation, rating, comment, avatar, date) in TESTIMONIALS {
        db.set(&Testimonial {
            id: Uuid::new_v4(),
            name: name.to_string(),
            designation: designation.to_string(),
            rating: *rating,
            comment: comment.to_string(),
            avatar: ImageReference::from(*avatar),
            date_added: seed_date(date),
        })?;
    }
    Ok(())
}

pub fn contact_info(db: &Database) -> Result<()> {
    let current = crate::contact::get(db)?;
    if !current.phone.is_empty() {
        return Ok(());
    }
    db.set(&ContactInfo {
        phone: "+1 (555) 123-4567".to_string(),
        email: "contact@virtuserve.com".to_string(),
        address: "123 Business Ave\nSuite 100, City, ST 12345".to_string(),
        business_hours: BusinessHours {
            weekdays: "9:00 AM - 6:00 PM".to_string(),
            saturday: "10:00 AM - 4:00 PM".to_string(),
            sunday: "Closed".to_string(),
        },
        social_media: SocialMedia {
            email: "mailto:contact@virtuserve.com".to_string(),
            linkedin: "https://linkedin.com/company/virtuserve".to_string(),
            instagram: "https://instagram.com/virtuserve".to_string(),
            facebook: "https://facebook.com/virtuserve".to_string(),
            whatsapp: "https://wa.me/15551234567".to_string(),
            tiktok: "https://tiktok.com/@virtuserve".to_string(),
        },
    })
}

pub fn visitor_data(db: &Database) -> Result<()> {
    if !db.is_empty::<VisitorDay>()? {
        return Ok(());
    }
    for (date, visitors) in VISITOR_DATA {
        db.set(&VisitorDay {
            id: Uuid::new_v4(),
            date: seed_date(date),
            visitors: *visitors,
        })?;
    }
    Ok(())
}

fn seed_date(date: &str) -> NaiveDate {
    date.parse().expect("seed dates are well-formed")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::image::ImageKind;

    #[test]
    fn initialize_populates_every_collection() {
        let db = Database::temporary().unwrap();
        initialize(&Config::default(), &db).unwrap();

        assert_eq!(db.len::<Service>().unwrap(), 16);
        assert_eq!(db.len::<Testimonial>().unwrap(), 8);
        assert_eq!(db.len::<VisitorDay>().unwrap(), 14);
        assert_eq!(
            crate::contact::get(&db).unwrap().email,
            "contact@virtuserve.com"
        );
    }

    #[test]
    fn initialize_is_idempotent() {
        let db = Database::temporary().unwrap();
        initialize(&Config::default(), &db).unwrap();
        initialize(&Config::default(), &db).unwrap();

        assert_eq!(db.len::<Service>().unwrap(), 16);
        assert_eq!(db.len::<Testimonial>().unwrap(), 8);
    }

    #[test]
    fn initialize_respects_the_config_switch() {
        let db = Database::temporary().unwrap();
        let config = Config {
            init: crate::config::Init { enabled: false },
            ..Default::default()
        };
        initialize(&config, &db).unwrap();
        assert!(db.is_empty::<Service>().unwrap());
    }

    #[test]
    fn seeded_avatars_cover_both_defaults() {
        let db = Database::temporary().unwrap();
        testimonials(&db).unwrap();

        let kinds: Vec<_> = db
            .get_collection::<Testimonial>()
            .unwrap()
            .iter()
            .map(|t| t.avatar.kind())
            .collect();
        assert!(kinds.contains(&ImageKind::DefaultFemale));
        assert!(kinds.contains(&ImageKind::DefaultMale));
        assert!(kinds.contains(&ImageKind::Custom));
    }
}
