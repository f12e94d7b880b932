//! Ephemeral state backing one open admin panel.
//!
//! Nothing in this module is ever persisted: a session is created when the
//! operator opens the panel and dropped when they leave. Durable content
//! lives in the database and is only touched through the explicit
//! operations below.

use tokio::io::AsyncRead;
use uuid::Uuid;

use crate::analytics;
use crate::contact::{self, ContactInfo};
use crate::db::Database;
use crate::error::Result;
use crate::image::{self, AvatarKind, ImageReference, UploadCandidate};
use crate::service::{self, Service};
use crate::testimonial::{self, Testimonial};

/// Panel sections reachable from the sidebar.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize, strum::Display)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum Tab {
    #[default]
    Overview,
    Services,
    Testimonials,
    Contact,
}

/// Headline numbers for the overview tab.
#[derive(Clone, Debug, Serialize)]
pub struct Stats {
    pub total_visitors: u64,
    pub total_services: usize,
    pub average_rating: f32,
    pub testimonials: usize,
}

/// Computes the overview numbers from the current database state.
pub fn stats(db: &Database) -> Result<Stats> {
    let days = analytics::series(db)?;
    let testimonials = db.get_collection::<Testimonial>()?;
    Ok(Stats {
        total_visitors: analytics::total_visitors(&days),
        total_services: db.len::<Service>()?,
        average_rating: testimonial::average_rating(&testimonials),
        testimonials: testimonials.len(),
    })
}

/// Caller-side wrapper around the image pipeline.
///
/// The pipeline itself is stateless; what the picker owns is the advisory
/// error message shown next to the control. The message is cleared at the
/// start of every attempt and set again only on rejection, so it always
/// describes the most recent outcome. Accepted references and explicit
/// removals are handed back exactly once through the return value.
#[derive(Debug, Default)]
pub struct AvatarPicker {
    error: Option<String>,
}

impl AvatarPicker {
    /// Rejection message from the previous attempt, if it failed.
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn select_default(&mut self, kind: AvatarKind) -> ImageReference {
        self.error = None;
        image::select_default(kind)
    }

    /// Runs a candidate through validation and encoding. On acceptance the
    /// new reference is returned; on rejection `None` comes back and the
    /// message is retained until the next attempt.
    pub async fn upload<R>(&mut self, candidate: UploadCandidate<R>) -> Option<ImageReference>
    where
        R: AsyncRead + Unpin,
    {
        self.error = None;
        match candidate.ingest().await {
            Ok(reference) => Some(reference),
            Err(e) => {
                self.error = Some(e.to_string());
                None
            }
        }
    }

    /// Drops the current image, yielding the empty reference.
    pub fn remove(&mut self) -> ImageReference {
        self.error = None;
        ImageReference::none()
    }
}

/// State for one open admin panel: the selected tab, which rows are being
/// edited, and the buffers behind the two add forms.
#[derive(Debug, Default)]
pub struct AdminSession {
    pub active_tab: Tab,

    pub show_add_service: bool,
    pub show_add_testimonial: bool,

    pub editing_service: Option<Service>,
    pub editing_testimonial: Option<Testimonial>,

    pub new_service: Service,
    pub new_testimonial: Testimonial,

    pub avatar_picker: AvatarPicker,
}

impl AdminSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn select_tab(&mut self, tab: Tab) {
        self.active_tab = tab;
    }

    pub fn overview(&self, db: &Database) -> Result<Stats> {
        stats(db)
    }

    /// Commits the add-service form. On success the buffer is reset and the
    /// form closed; an invalid buffer is left in place so the operator can
    /// fix it.
    pub fn add_service(&mut self, db: &Database) -> Result<Service> {
        let created = service::create(db, self.new_service.clone())?;
        self.new_service = Service::default();
        self.show_add_service = false;
        Ok(created)
    }

    /// Commits the row currently being edited, if any, and leaves edit mode.
    pub fn update_service(&mut self, db: &Database) -> Result<()> {
        if let Some(service) = self.editing_service.take() {
            service::update(db, &service)?;
        }
        Ok(())
    }

    pub fn delete_service(&mut self, db: &Database, id: Uuid) -> Result<()> {
        service::delete(db, id)
    }

    /// Commits the add-testimonial form. Resets the buffer back to its
    /// defaults (including the default avatar) and clears any stale picker
    /// message.
    pub fn add_testimonial(&mut self, db: &Database) -> Result<Testimonial> {
        let created = testimonial::create(db, self.new_testimonial.clone())?;
        self.new_testimonial = Testimonial::default();
        self.avatar_picker = AvatarPicker::default();
        self.show_add_testimonial = false;
        Ok(created)
    }

    pub fn update_testimonial(&mut self, db: &Database) -> Result<()> {
        if let Some(testimonial) = self.editing_testimonial.take() {
            testimonial::update(db, &testimonial)?;
        }
        Ok(())
    }

    pub fn delete_testimonial(&mut self, db: &Database, id: Uuid) -> Result<()> {
        testimonial::delete(db, id)
    }

    /// Applies a picker result to whichever testimonial form is open: the
    /// row under edit if there is one, the add buffer otherwise. This is
    /// the single notification path for new image references.
    pub fn apply_image(&mut self, reference: ImageReference) {
        if let Some(editing) = self.editing_testimonial.as_mut() {
            editing.avatar = reference;
        } else {
            self.new_testimonial.avatar = reference;
        }
    }

    pub fn update_contact(&mut self, db: &Database, info: &ContactInfo) -> Result<()> {
        contact::update(db, info)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::image::ImageKind;

    #[tokio::test]
    async fn picker_reports_rejections_and_clears_on_next_attempt() {
        let mut picker = AvatarPicker::default();

        let rejected = picker
            .upload(UploadCandidate::from_bytes("image/svg+xml", vec![0u8; 8]))
            .await;
        assert!(rejected.is_none());
        assert_eq!(
            picker.error(),
            Some("Please upload a valid image file (JPG, PNG, or GIF)")
        );

        // The next attempt wipes the stale message before running.
        let accepted = picker
            .upload(UploadCandidate::from_bytes("image/png", vec![0u8; 8]))
            .await;
        assert!(accepted.is_some());
        assert!(picker.error().is_none());
    }

    #[tokio::test]
    async fn picker_default_selection_clears_the_error() {
        let mut picker = AvatarPicker::default();

        picker
            .upload(UploadCandidate::from_bytes("text/plain", vec![1]))
            .await;
        assert!(picker.error().is_some());

        let reference = picker.select_default(AvatarKind::Male);
        assert_eq!(reference.kind(), ImageKind::DefaultMale);
        assert!(picker.error().is_none());
    }

    #[test]
    fn picker_remove_yields_the_empty_reference() {
        let mut picker = AvatarPicker::default();
        assert!(picker.remove().is_none());
        assert!(picker.error().is_none());
    }

    #[test]
    fn add_service_resets_the_buffer_only_on_success() {
        let db = Database::temporary().unwrap();
        let mut session = AdminSession::new();
        session.show_add_service = true;

        // Invalid buffer: nothing stored, buffer kept for fixing up.
        session.new_service.title = "Only a title".to_string();
        assert!(session.add_service(&db).is_err());
        assert_eq!(session.new_service.title, "Only a title");
        assert!(session.show_add_service);

        session.new_service.description = "And now a description".to_string();
        let created = session.add_service(&db).unwrap();
        assert_eq!(created.title, "Only a title");
        assert!(session.new_service.title.is_empty());
        assert!(!session.show_add_service);
        assert_eq!(db.len::<Service>().unwrap(), 1);
    }

    #[test]
    fn apply_image_targets_the_open_form() {
        let mut session = AdminSession::new();

        // No row under edit: the add buffer receives the reference.
        session.apply_image(ImageReference::from("data:image/png;base64,AAAA"));
        assert_eq!(session.new_testimonial.avatar.kind(), ImageKind::Custom);

        // With a row under edit the buffer is left alone.
        session.editing_testimonial = Some(Testimonial::default());
        session.apply_image(ImageReference::none());
        assert!(session.editing_testimonial.as_ref().unwrap().avatar.is_none());
        assert_eq!(session.new_testimonial.avatar.kind(), ImageKind::Custom);
    }

    #[test]
    fn add_testimonial_resets_buffer_and_picker() {
        let db = Database::temporary().unwrap();
        let mut session = AdminSession::new();

        session.new_testimonial.name = "Sarah".to_string();
        session.new_testimonial.comment = "Delightful".to_string();
        session.new_testimonial.avatar = ImageReference::from("data:image/gif;base64,BBBB");

        let created = session.add_testimonial(&db).unwrap();
        assert_eq!(created.avatar.kind(), ImageKind::Custom);
        // Buffer back to defaults, including the stock avatar.
        assert_eq!(
            session.new_testimonial.avatar.kind(),
            ImageKind::DefaultFemale
        );
        assert!(session.new_testimonial.name.is_empty());
    }

    #[test]
    fn overview_reflects_database_state() {
        let db = Database::temporary().unwrap();
        let mut session = AdminSession::new();

        session.new_service.title = "Calligraphy".to_string();
        session.new_service.description = "Nice letters".to_string();
        session.add_service(&db).unwrap();

        session.new_testimonial.name = "Robert".to_string();
        session.new_testimonial.comment = "Five stars".to_string();
        session.new_testimonial.rating = 5;
        session.add_testimonial(&db).unwrap();

        session.new_testimonial.name = "Lisa".to_string();
        session.new_testimonial.comment = "Three stars".to_string();
        session.new_testimonial.rating = 3;
        session.add_testimonial(&db).unwrap();

        let stats = session.overview(&db).unwrap();
        assert_eq!(stats.total_services, 1);
        assert_eq!(stats.testimonials, 2);
        assert_eq!(stats.average_rating, 4.0);
        assert_eq!(stats.total_visitors, 0);
    }
}
