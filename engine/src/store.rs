//! EntryStore - durable persistence of the whole collection.
//!
//! The collection lives as a single JSON blob under one key. Every mutation is
//! a full read-modify-write of that blob, which is fine for the list sizes this
//! widget sees and for a single writer. There are no business rules here.

use crate::{error::Result, Entry, EntryCollection, KeyValueStore};

/// Key used when none is configured.
pub const DEFAULT_STORAGE_KEY: &str = "list";

/// Persistence wrapper over a key-value backend.
#[derive(Debug, Clone)]
pub struct EntryStore<K> {
    backend: K,
    key: String,
}

impl<K: KeyValueStore> EntryStore<K> {
    /// Create a store under [`DEFAULT_STORAGE_KEY`].
    pub fn new(backend: K) -> Self {
        Self::with_key(backend, DEFAULT_STORAGE_KEY)
    }

    /// Create a store under a custom key.
    pub fn with_key(backend: K, key: impl Into<String>) -> Self {
        Self {
            backend,
            key: key.into(),
        }
    }

    /// The key the blob is written under.
    pub fn key(&self) -> &str {
        &self.key
    }

    /// The backend.
    pub fn backend(&self) -> &K {
        &self.backend
    }

    /// Mutable access to the backend.
    pub fn backend_mut(&mut self) -> &mut K {
        &mut self.backend
    }

    /// Consume the store and hand back the backend.
    pub fn into_backend(self) -> K {
        self.backend
    }

    /// Read the collection, treating any failure as an empty list.
    pub fn load(&self) -> EntryCollection {
        match self.try_load() {
            Ok(collection) => collection,
            Err(e) => {
                tracing::warn!(key = %self.key, "Discarding unreadable list blob: {}", e);
                EntryCollection::new()
            }
        }
    }

    /// Read the collection, surfacing read and parse failures.
    ///
    /// A missing key is not a failure and yields an empty collection.
    pub fn try_load(&self) -> Result<EntryCollection> {
        match self.backend.get(&self.key)? {
            Some(blob) => EntryCollection::from_json(&blob),
            None => Ok(EntryCollection::new()),
        }
    }

    /// Overwrite the blob with `collection`.
    pub fn save_all(&mut self, collection: &EntryCollection) -> Result<()> {
        let blob = collection.to_json()?;
        self.backend.set(&self.key, blob)
    }

    /// Append one entry.
    pub fn add(&mut self, entry: Entry) -> Result<()> {
        let mut collection = self.load();
        collection.push(entry);
        self.save_all(&collection)
    }

    /// Drop the entry with `id`. Other entries are untouched.
    pub fn remove(&mut self, id: &str) -> Result<()> {
        let mut collection = self.load();
        collection.remove(id);
        self.save_all(&collection)
    }

    /// Replace the value of the entry with `id`.
    pub fn update_value(&mut self, id: &str, value: &str) -> Result<()> {
        let mut collection = self.load();
        collection.update_value(id, value);
        self.save_all(&collection)
    }

    /// Delete the blob entirely.
    pub fn clear(&mut self) -> Result<()> {
        self.backend.delete(&self.key)
    }
}
