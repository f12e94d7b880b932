use std::path::Path;

use serde::de::DeserializeOwned;
use serde::Serialize;
use uuid::Uuid;

use crate::{error::ErrorKind, Result};

use super::{decode, encode, Collectable, Identifiable};

/// Embedded key-value store. Each collection lives in its own tree, with
/// entries keyed by the item uuid.
#[derive(Clone, Debug)]
pub struct SledDb {
    inner: sled::Db,
}

impl SledDb {
    /// Opens the store at the default `./db` path.
    pub fn new() -> Result<Self> {
        Self::open("./db")
    }

    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let inner = sled::Config::default().path(path).open()?;
        Ok(Self { inner })
    }

    /// Memory-backed store that leaves nothing on disk. Used by tests and
    /// available for throwaway dev runs.
    pub fn temporary() -> Result<Self> {
        let inner = sled::Config::default().temporary(true).open()?;
        Ok(Self { inner })
    }

    /// Gets an item from the collection defined for the item type.
    pub fn get<T: DeserializeOwned + Collectable>(&self, id: Uuid) -> Result<T> {
        let tree = self.inner.open_tree(T::get_collection_name())?;
        match tree.get(id)? {
            Some(bytes) => decode(&bytes),
            None => Err(ErrorKind::NotFound(format!(
                "entity with id '{}' not found in collection {}",
                id,
                T::get_collection_name()
            ))
            .into()),
        }
    }

    /// Convenience function initializing a default if the target collection
    /// element is not found in the db.
    pub fn get_or_create<T>(&self, id: Uuid) -> Result<T>
    where
        T: Serialize + DeserializeOwned + Identifiable + Collectable + Default,
    {
        self.get::<T>(id).or_else(|_| {
            let default = T::default();
            self.set(&default).map(|_| default)
        })
    }

    /// Gets all entries from the collection defined for the type.
    pub fn get_collection<T: DeserializeOwned + Collectable>(&self) -> Result<Vec<T>> {
        let tree = self.inner.open_tree(T::get_collection_name())?;
        let mut out = Vec::new();
        for entry in tree.iter() {
            let (_, value_bytes) = entry?;
            let value: T = decode(&value_bytes)?;
            out.push(value);
        }
        Ok(out)
    }

    /// Returns the length of the collection as defined for the specified type.
    pub fn len<T: Collectable>(&self) -> Result<usize> {
        Ok(self.inner.open_tree(T::get_collection_name())?.len())
    }

    pub fn is_empty<T: Collectable>(&self) -> Result<bool> {
        Ok(self.len::<T>()? == 0)
    }

    pub fn set<T: Serialize + Identifiable + Collectable>(&self, value: &T) -> Result<()> {
        let tree = self.inner.open_tree(T::get_collection_name())?;
        let encoded = encode(value)?;
        tree.insert(value.get_id(), encoded)?;
        Ok(())
    }

    pub fn remove<T: Identifiable + Collectable>(&self, value: &T) -> Result<()> {
        self.remove_by_id::<T>(value.get_id())
    }

    pub fn remove_by_id<T: Collectable>(&self, id: Uuid) -> Result<()> {
        let tree = self.inner.open_tree(T::get_collection_name())?;
        tree.remove(id)?;
        Ok(())
    }

    pub fn clear<T: Collectable>(&self) -> Result<()> {
        let tree = self.inner.open_tree(T::get_collection_name())?;
        tree.clear()?;
        Ok(())
    }
}
