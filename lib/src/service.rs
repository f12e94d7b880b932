use uuid::Uuid;

use crate::db::{Collectable, Database, Identifiable};
use crate::error::{ErrorKind, Result};

/// A single entry in the services catalog.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct Service {
    #[serde(default = "Uuid::new_v4")]
    pub id: Uuid,

    pub title: String,
    pub description: String,

    /// Free-form grouping shown on the site, e.g. `Service` or `Product`.
    pub category: String,
}

impl Default for Service {
    fn default() -> Self {
        Self {
            id: Uuid::new_v4(),
            title: "".to_string(),
            description: "".to_string(),
            category: "Service".to_string(),
        }
    }
}

impl Collectable for Service {
    fn get_collection_name() -> &'static str {
        "services"
    }
}

impl Identifiable for Service {
    fn get_id(&self) -> Uuid {
        self.id
    }
}

/// Validated insert. A service needs at least a title and a description.
pub fn create(db: &Database, service: Service) -> Result<Service> {
    if service.title.trim().is_empty() || service.description.trim().is_empty() {
        return Err(ErrorKind::BadInput(
            "a service requires both a title and a description".to_string(),
        )
        .into());
    }
    db.set(&service)?;
    Ok(service)
}

/// Replaces an existing service. Unknown ids are an error rather than an
/// implicit insert.
pub fn update(db: &Database, service: &Service) -> Result<()> {
    db.get::<Service>(service.id)?;
    db.set(service)
}

pub fn delete(db: &Database, id: Uuid) -> Result<()> {
    db.remove_by_id::<Service>(id)
}
