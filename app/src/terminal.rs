//! Terminal rendering of the list.
//!
//! [`TerminalView`] only updates an in-memory frame when the controller sends
//! commands. The event loop prints the frame afterwards, so view commands
//! themselves never fail on IO.

use shelf_engine::{Entry, NoticeKind, View};
use std::io::{self, Write};

/// Projection of the list for a line-based terminal.
#[derive(Debug, Clone)]
pub struct TerminalView {
    rows: Vec<Entry>,
    container_visible: bool,
    notice: Option<(String, NoticeKind)>,
    submit_label: String,
    input: String,
    status: Option<String>,
    dirty: bool,
}

impl TerminalView {
    pub fn new(submit_label: impl Into<String>) -> Self {
        Self {
            rows: Vec::new(),
            container_visible: false,
            notice: None,
            submit_label: submit_label.into(),
            input: String::new(),
            status: None,
            dirty: true,
        }
    }

    /// Host-level message shown once on the next frame.
    pub fn show_status(&mut self, message: impl Into<String>) {
        self.status = Some(message.into());
        self.dirty = true;
    }

    /// Force the next [`Self::render_if_dirty`] to draw.
    pub fn mark_dirty(&mut self) {
        self.dirty = true;
    }

    /// Draw the frame if anything changed since the last draw.
    pub fn render_if_dirty<W: Write>(&mut self, out: &mut W) -> io::Result<bool> {
        if !self.dirty {
            return Ok(false);
        }
        self.render(out)?;
        Ok(true)
    }

    /// Draw the full frame.
    pub fn render<W: Write>(&mut self, out: &mut W) -> io::Result<()> {
        writeln!(out)?;
        if self.container_visible {
            let width = self.rows.iter().map(|e| e.value.chars().count()).max().unwrap_or(0);
            for (i, entry) in self.rows.iter().enumerate() {
                writeln!(
                    out,
                    "{:>3}. {:<width$}  [{}]",
                    i + 1,
                    entry.value,
                    entry.id,
                    width = width
                )?;
            }
        } else {
            writeln!(out, "  (nothing on the list)")?;
        }

        if let Some((message, kind)) = &self.notice {
            writeln!(out, "[{}] {}", kind.as_str(), message)?;
        }
        if let Some(status) = self.status.take() {
            writeln!(out, "! {}", status)?;
        }

        if self.input.is_empty() {
            write!(out, "{}> ", self.submit_label)?;
        } else {
            write!(out, "{} (was: {})> ", self.submit_label, self.input)?;
        }
        out.flush()?;

        self.dirty = false;
        Ok(())
    }
}

impl View for TerminalView {
    fn render_append(&mut self, entry: &Entry) {
        self.rows.push(entry.clone());
        self.dirty = true;
    }

    fn render_update(&mut self, id: &str, value: &str) {
        if let Some(row) = self.rows.iter_mut().find(|e| e.id == id) {
            row.value = value.to_string();
        }
        self.dirty = true;
    }

    fn render_remove(&mut self, id: &str) {
        self.rows.retain(|e| e.id != id);
        self.dirty = true;
    }

    fn render_remove_all(&mut self) {
        self.rows.clear();
        self.dirty = true;
    }

    fn set_container_visible(&mut self, visible: bool) {
        self.container_visible = visible;
        self.dirty = true;
    }

    fn notify(&mut self, message: &str, kind: NoticeKind) {
        self.notice = Some((message.to_string(), kind));
        self.dirty = true;
    }

    fn clear_notice(&mut self) {
        self.notice = None;
        self.dirty = true;
    }

    fn set_submit_label(&mut self, label: &str) {
        self.submit_label = label.to_string();
        self.dirty = true;
    }

    fn set_input(&mut self, value: &str) {
        self.input = value.to_string();
        self.dirty = true;
    }
}
