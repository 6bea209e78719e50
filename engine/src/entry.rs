//! Entry types for the list.

use crate::{error::Result, EntryId, Error};
use serde::{Deserialize, Serialize};

/// One list item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entry {
    /// Unique identifier, assigned once at creation
    pub id: EntryId,
    /// Free-form text shown in the list
    pub value: String,
}

impl Entry {
    /// Create a new entry.
    pub fn new(id: impl Into<EntryId>, value: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            value: value.into(),
        }
    }
}

/// The full ordered set of entries.
///
/// Insertion order is preserved and never changes on edit. Serialized as a
/// plain JSON array of `{"id", "value"}` objects.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EntryCollection {
    entries: Vec<Entry>,
}

impl EntryCollection {
    /// Create an empty collection.
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Get an entry by ID.
    pub fn get(&self, id: &str) -> Option<&Entry> {
        self.entries.iter().find(|e| e.id == id)
    }

    /// Position of an entry in insertion order.
    pub fn position(&self, id: &str) -> Option<usize> {
        self.entries.iter().position(|e| e.id == id)
    }

    /// Check if an entry exists.
    pub fn contains(&self, id: &str) -> bool {
        self.get(id).is_some()
    }

    /// Append an entry at the end.
    pub fn push(&mut self, entry: Entry) {
        self.entries.push(entry);
    }

    /// Remove an entry by ID, returning it if it was present.
    pub fn remove(&mut self, id: &str) -> Option<Entry> {
        let index = self.position(id)?;
        Some(self.entries.remove(index))
    }

    /// Replace the value of an entry in place.
    ///
    /// Returns `false` if no entry has that ID.
    pub fn update_value(&mut self, id: &str, value: impl Into<String>) -> bool {
        match self.entries.iter_mut().find(|e| e.id == id) {
            Some(entry) => {
                entry.value = value.into();
                true
            }
            None => false,
        }
    }

    /// Remove every entry.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// All entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &Entry> {
        self.entries.iter()
    }

    /// Entries as a slice.
    pub fn as_slice(&self) -> &[Entry] {
        &self.entries
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if there are no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Largest ID that parses as a number, if any.
    ///
    /// Used to seed the ID generator so restored IDs are never handed out again.
    pub fn max_numeric_id(&self) -> Option<u64> {
        self.entries
            .iter()
            .filter_map(|e| e.id.parse::<u64>().ok())
            .max()
    }

    /// Serialize to the persisted JSON form.
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string(self).map_err(|e| Error::InvalidBlob(e.to_string()))
    }

    /// Deserialize from the persisted JSON form.
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(|e| Error::InvalidBlob(e.to_string()))
    }
}

impl From<Vec<Entry>> for EntryCollection {
    fn from(entries: Vec<Entry>) -> Self {
        Self { entries }
    }
}

impl FromIterator<Entry> for EntryCollection {
    fn from_iter<I: IntoIterator<Item = Entry>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a EntryCollection {
    type Item = &'a Entry;
    type IntoIter = std::slice::Iter<'a, Entry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
