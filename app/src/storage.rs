//! File-backed key-value store.
//!
//! All keys live in one JSON object on disk. Each write replaces the file
//! through a temporary sibling and a rename, so a crash mid-write leaves the
//! previous contents in place.

use shelf_engine::KeyValueStore;
use std::collections::BTreeMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Key-value store persisted to a single JSON file.
#[derive(Debug)]
pub struct FileStore {
    path: PathBuf,
    values: BTreeMap<String, String>,
}

impl FileStore {
    /// Open the store at `path`. A missing file starts empty.
    ///
    /// A file that is not a JSON object of strings is treated as empty and
    /// will be overwritten by the next write.
    pub fn open(path: impl Into<PathBuf>) -> io::Result<Self> {
        let path = path.into();
        let values = match fs::read_to_string(&path) {
            Ok(raw) => match serde_json::from_str(&raw) {
                Ok(values) => values,
                Err(e) => {
                    tracing::warn!(path = %path.display(), "Ignoring unreadable data file: {}", e);
                    BTreeMap::new()
                }
            },
            Err(e) if e.kind() == io::ErrorKind::NotFound => BTreeMap::new(),
            Err(e) => return Err(e),
        };

        tracing::debug!(path = %path.display(), keys = values.len(), "Opened data file");
        Ok(Self { path, values })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Write `values` to disk and adopt them only once the file is replaced.
    fn commit(&mut self, values: BTreeMap<String, String>) -> io::Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        let json = serde_json::to_string_pretty(&values)?;
        let tmp = self.path.with_extension("json.tmp");
        fs::write(&tmp, json)?;
        fs::rename(&tmp, &self.path)?;

        self.values = values;
        Ok(())
    }
}

fn storage_error(e: io::Error) -> shelf_engine::Error {
    shelf_engine::Error::Storage(e.to_string())
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> shelf_engine::error::Result<Option<String>> {
        Ok(self.values.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: String) -> shelf_engine::error::Result<()> {
        let mut values = self.values.clone();
        values.insert(key.to_string(), value);
        self.commit(values).map_err(storage_error)
    }

    fn delete(&mut self, key: &str) -> shelf_engine::error::Result<()> {
        if !self.values.contains_key(key) {
            return Ok(());
        }
        let mut values = self.values.clone();
        values.remove(key);
        self.commit(values).map_err(storage_error)
    }
}
