//! Build a small business website fast. Repeat.
//!
//! `virtuserve` bundles everything a service business site needs to run
//! locally: a services catalog, customer testimonials with avatar handling,
//! editable contact information and simple visitor analytics, all kept in an
//! embedded database and managed through an admin panel surface.
//!
//! The interesting part lives in [`image`]: uploaded avatar files are
//! validated and re-encoded into self-contained references instead of being
//! written out to disk or fetched from anywhere at render time.

#[macro_use]
extern crate serde_derive;

pub mod admin;
pub mod analytics;
#[cfg(feature = "axum")]
pub mod axum;
pub mod config;
pub mod contact;
pub mod db;
pub mod error;
pub mod image;
pub mod init;
pub mod mock;
pub mod routes;
pub mod service;
pub mod testimonial;
pub mod tracing;

pub use analytics::VisitorDay;
pub use config::Config;
pub use contact::ContactInfo;
pub use db::Database;
pub use error::{Error, ErrorKind, Result};
pub use image::{AvatarKind, ImageKind, ImageReference, UploadCandidate, UploadError};
pub use service::Service;
pub use testimonial::Testimonial;
