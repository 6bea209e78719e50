//! Edit session state.
//!
//! The session is a plain value. Transitions consume the old state and return
//! the new one, so the controller always replaces it wholesale.

use crate::EntryId;
use serde::{Deserialize, Serialize};

/// Whether the form is creating a new entry or updating an existing one.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "state", rename_all = "camelCase")]
pub enum EditSession {
    /// Submitting creates a new entry.
    #[default]
    Idle,
    /// Submitting replaces the value of `target_id`.
    #[serde(rename_all = "camelCase")]
    Editing { target_id: EntryId },
}

impl EditSession {
    /// Start editing `id`. An open session is retargeted.
    pub fn begin(self, id: impl Into<EntryId>) -> Self {
        EditSession::Editing {
            target_id: id.into(),
        }
    }

    /// Close the session.
    pub fn reset(self) -> Self {
        EditSession::Idle
    }

    /// Close the session only if it targets `id`.
    pub fn release(self, id: &str) -> Self {
        if self.targets(id) {
            EditSession::Idle
        } else {
            self
        }
    }

    /// Check if an edit is in progress.
    pub fn is_active(&self) -> bool {
        matches!(self, EditSession::Editing { .. })
    }

    /// The entry being edited, if any.
    pub fn target(&self) -> Option<&str> {
        match self {
            EditSession::Idle => None,
            EditSession::Editing { target_id } => Some(target_id),
        }
    }

    /// Check if the session targets `id`.
    pub fn targets(&self, id: &str) -> bool {
        self.target() == Some(id)
    }
}
