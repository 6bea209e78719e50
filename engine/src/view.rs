//! View command contract.
//!
//! The view is a projection of controller state. It receives commands and
//! never reads back into the engine or touches persistence.

use crate::{Entry, EntryId};
use serde::{Deserialize, Serialize};

/// Visual kind of a transient notice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NoticeKind {
    Success,
    Danger,
}

impl NoticeKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            NoticeKind::Success => "success",
            NoticeKind::Danger => "danger",
        }
    }
}

/// Rendering surface driven by the controller.
pub trait View {
    /// Add an entry at the end of the list.
    fn render_append(&mut self, entry: &Entry);

    /// Show a new value for an already rendered entry.
    fn render_update(&mut self, id: &str, value: &str);

    /// Remove one rendered entry.
    fn render_remove(&mut self, id: &str);

    /// Remove every rendered entry.
    fn render_remove_all(&mut self);

    /// Show or hide the list container.
    fn set_container_visible(&mut self, visible: bool);

    /// Display a transient notice.
    fn notify(&mut self, message: &str, kind: NoticeKind);

    /// Remove the notice text and its kind marker.
    fn clear_notice(&mut self);

    /// Change the submit button label.
    fn set_submit_label(&mut self, label: &str);

    /// Replace the contents of the input field.
    fn set_input(&mut self, value: &str);
}

/// A single command sent to a [`View`], in serializable form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum ViewCommand {
    RenderAppend { entry: Entry },
    RenderUpdate { id: EntryId, value: String },
    RenderRemove { id: EntryId },
    RenderRemoveAll,
    SetContainerVisible { visible: bool },
    Notify { message: String, kind: NoticeKind },
    ClearNotice,
    SetSubmitLabel { label: String },
    SetInput { value: String },
}

/// A view that records every command and keeps a projection of the screen.
///
/// Useful for headless hosts and for asserting controller behaviour.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecordingView {
    commands: Vec<ViewCommand>,
    rendered: Vec<Entry>,
    container_visible: bool,
    notice: Option<(String, NoticeKind)>,
    submit_label: String,
    input: String,
}

impl RecordingView {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every command received so far, oldest first.
    pub fn commands(&self) -> &[ViewCommand] {
        &self.commands
    }

    /// Drain recorded commands, keeping the projection.
    pub fn take_commands(&mut self) -> Vec<ViewCommand> {
        std::mem::take(&mut self.commands)
    }

    /// Entries as currently rendered.
    pub fn rendered(&self) -> &[Entry] {
        &self.rendered
    }

    pub fn container_visible(&self) -> bool {
        self.container_visible
    }

    /// The notice on screen, if any.
    pub fn notice(&self) -> Option<(&str, NoticeKind)> {
        self.notice.as_ref().map(|(m, k)| (m.as_str(), *k))
    }

    pub fn submit_label(&self) -> &str {
        &self.submit_label
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    /// Every notice message received, in order.
    pub fn notices(&self) -> Vec<(&str, NoticeKind)> {
        self.commands
            .iter()
            .filter_map(|c| match c {
                ViewCommand::Notify { message, kind } => Some((message.as_str(), *kind)),
                _ => None,
            })
            .collect()
    }
}

impl View for RecordingView {
    fn render_append(&mut self, entry: &Entry) {
        self.rendered.push(entry.clone());
        self.commands.push(ViewCommand::RenderAppend {
            entry: entry.clone(),
        });
    }

    fn render_update(&mut self, id: &str, value: &str) {
        if let Some(entry) = self.rendered.iter_mut().find(|e| e.id == id) {
            entry.value = value.to_string();
        }
        self.commands.push(ViewCommand::RenderUpdate {
            id: id.to_string(),
            value: value.to_string(),
        });
    }

    fn render_remove(&mut self, id: &str) {
        self.rendered.retain(|e| e.id != id);
        self.commands
            .push(ViewCommand::RenderRemove { id: id.to_string() });
    }

    fn render_remove_all(&mut self) {
        self.rendered.clear();
        self.commands.push(ViewCommand::RenderRemoveAll);
    }

    fn set_container_visible(&mut self, visible: bool) {
        self.container_visible = visible;
        self.commands
            .push(ViewCommand::SetContainerVisible { visible });
    }

    fn notify(&mut self, message: &str, kind: NoticeKind) {
        self.notice = Some((message.to_string(), kind));
        self.commands.push(ViewCommand::Notify {
            message: message.to_string(),
            kind,
        });
    }

    fn clear_notice(&mut self) {
        self.notice = None;
        self.commands.push(ViewCommand::ClearNotice);
    }

    fn set_submit_label(&mut self, label: &str) {
        self.submit_label = label.to_string();
        self.commands.push(ViewCommand::SetSubmitLabel {
            label: label.to_string(),
        });
    }

    fn set_input(&mut self, value: &str) {
        self.input = value.to_string();
        self.commands.push(ViewCommand::SetInput {
            value: value.to_string(),
        });
    }
}
