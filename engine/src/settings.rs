//! Controller settings.

use crate::store::DEFAULT_STORAGE_KEY;
use serde::{Deserialize, Serialize};

/// Tunables for [`crate::EntryController`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Settings {
    /// Key the list blob is stored under
    pub storage_key: String,
    /// How long a notice stays on screen
    pub notice_delay_ms: u64,
    /// Submit label while creating entries
    pub add_label: String,
    /// Submit label while editing an entry
    pub update_label: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            storage_key: DEFAULT_STORAGE_KEY.to_string(),
            notice_delay_ms: 1000,
            add_label: "Add".to_string(),
            update_label: "Update".to_string(),
        }
    }
}
