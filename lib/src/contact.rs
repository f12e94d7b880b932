use uuid::Uuid;
use validator::ValidateEmail;

use crate::db::{Collectable, Database, Identifiable};
use crate::error::{ErrorKind, Result};

/// Contact details shown across the site and edited from the admin panel.
/// Stored as a singleton record under the nil uuid.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ContactInfo {
    pub phone: String,
    pub email: String,
    /// Free-form, possibly multi-line postal address.
    pub address: String,

    pub business_hours: BusinessHours,
    pub social_media: SocialMedia,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct BusinessHours {
    pub weekdays: String,
    pub saturday: String,
    pub sunday: String,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SocialMedia {
    pub email: String,
    pub linkedin: String,
    pub instagram: String,
    pub facebook: String,
    pub whatsapp: String,
    pub tiktok: String,
}

impl Collectable for ContactInfo {
    fn get_collection_name() -> &'static str {
        "contact_info"
    }
}

impl Identifiable for ContactInfo {
    fn get_id(&self) -> Uuid {
        Uuid::nil()
    }
}

impl SocialMedia {
    fn links(&self) -> [(&'static str, &String); 6] {
        [
            ("email", &self.email),
            ("linkedin", &self.linkedin),
            ("instagram", &self.instagram),
            ("facebook", &self.facebook),
            ("whatsapp", &self.whatsapp),
            ("tiktok", &self.tiktok),
        ]
    }
}

/// The current contact record; an empty one if nothing was stored yet.
pub fn get(db: &Database) -> Result<ContactInfo> {
    db.get_or_create::<ContactInfo>(Uuid::nil())
}

/// Validated replace. The email must parse as one and every non-empty
/// social entry must be a well-formed url.
pub fn update(db: &Database, info: &ContactInfo) -> Result<()> {
    if !info.email.is_empty() && !info.email.validate_email() {
        return Err(ErrorKind::BadInput(format!("invalid contact email: {}", info.email)).into());
    }
    for (name, link) in info.social_media.links() {
        if link.is_empty() {
            continue;
        }
        url::Url::parse(link)
            .map_err(|e| ErrorKind::BadInput(format!("invalid {} link: {}", name, e)))?;
    }
    db.set(info)
}
