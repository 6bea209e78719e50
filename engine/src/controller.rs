//! EntryController - edit session and CRUD orchestration.
//!
//! The controller is the only component that decides what is valid. It owns
//! the in-memory mirror of the list, persists every mutation through
//! [`EntryStore`] first, and only then projects the change onto the [`View`].
//! A failed write therefore leaves both the mirror and the view untouched.

use crate::{
    clock::{IdGenerator, TimeSource},
    error::Result,
    notice::{DeferredTask, Notifier, Scheduler},
    view::{NoticeKind, View},
    EditSession, Entry, EntryCollection, EntryId, EntryStore, Error, KeyValueStore, Settings,
};

/// Notice shown after a new entry is stored.
pub const MSG_ADDED: &str = "Item Added";
/// Notice shown after an entry value is replaced.
pub const MSG_UPDATED: &str = "Item Name Updated";
/// Notice shown when an empty value is submitted.
pub const MSG_EMPTY_VALUE: &str = "Please Enter Value";
/// Notice shown after an entry is deleted.
pub const MSG_REMOVED: &str = "Item Removed";
/// Notice shown after the whole list is cleared.
pub const MSG_CLEARED: &str = "Empty List";

/// What a successful submit did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// A new entry was created with this ID.
    Added(EntryId),
    /// The value of this entry was replaced.
    Updated(EntryId),
}

impl SubmitOutcome {
    pub fn id(&self) -> &str {
        match self {
            SubmitOutcome::Added(id) | SubmitOutcome::Updated(id) => id,
        }
    }
}

/// Binds the persisted list, its in-memory mirror and the view.
pub struct EntryController<K, V, S, C> {
    store: EntryStore<K>,
    view: V,
    scheduler: S,
    ids: IdGenerator<C>,
    notifier: Notifier,
    settings: Settings,
    entries: EntryCollection,
    session: EditSession,
}

impl<K, V, S, C> EntryController<K, V, S, C>
where
    K: KeyValueStore,
    V: View,
    S: Scheduler,
    C: TimeSource,
{
    /// Create a controller. Nothing is read or rendered until [`Self::rehydrate`].
    pub fn new(backend: K, view: V, scheduler: S, clock: C, settings: Settings) -> Self {
        Self {
            store: EntryStore::with_key(backend, settings.storage_key.clone()),
            view,
            scheduler,
            ids: IdGenerator::new(clock),
            notifier: Notifier::new(settings.notice_delay_ms),
            settings,
            entries: EntryCollection::new(),
            session: EditSession::Idle,
        }
    }

    /// Load the persisted list and render it. Called once at startup.
    ///
    /// Returns the number of entries restored.
    pub fn rehydrate(&mut self) -> usize {
        let entries = self.store.load();
        if let Some(max) = entries.max_numeric_id() {
            self.ids.observe(max);
        }

        for entry in &entries {
            self.view.render_append(entry);
        }
        if !entries.is_empty() {
            self.view.set_container_visible(true);
        }

        tracing::debug!(count = entries.len(), "Rehydrated list");
        self.entries = entries;
        self.entries.len()
    }

    /// Submit the form.
    ///
    /// Creates an entry while idle, or replaces the target's value while
    /// editing. An empty value posts a danger notice and changes nothing.
    pub fn submit(&mut self, value: &str) -> Result<SubmitOutcome> {
        if value.is_empty() {
            self.post(MSG_EMPTY_VALUE, NoticeKind::Danger);
            return Err(Error::EmptyValue);
        }

        match self.session.target().map(str::to_owned) {
            None => self.add(value),
            Some(id) => self.commit_edit(id, value),
        }
    }

    /// Put `id` into edit mode and load its value into the form.
    pub fn begin_edit(&mut self, id: &str) -> Result<()> {
        let value = self
            .entries
            .get(id)
            .map(|e| e.value.clone())
            .ok_or_else(|| Error::EntryNotFound(id.to_string()))?;

        if self.session.is_active() {
            tracing::debug!(entry_id = %id, "Retargeting open edit session");
        }
        self.session = std::mem::take(&mut self.session).begin(id);
        self.view.set_input(&value);
        self.view.set_submit_label(&self.settings.update_label);
        Ok(())
    }

    /// Delete one entry. Allowed while editing.
    pub fn delete(&mut self, id: &str) -> Result<()> {
        if !self.entries.contains(id) {
            return Err(Error::EntryNotFound(id.to_string()));
        }

        self.store.remove(id)?;
        self.entries.remove(id);

        self.view.render_remove(id);
        if self.entries.is_empty() {
            self.view.set_container_visible(false);
        }
        self.post(MSG_REMOVED, NoticeKind::Danger);

        let was_editing = self.session.is_active();
        self.session = std::mem::take(&mut self.session).release(id);
        if was_editing && !self.session.is_active() {
            self.reset_form();
        }

        tracing::debug!(entry_id = %id, "Entry deleted");
        Ok(())
    }

    /// Remove every entry and the persisted blob.
    pub fn clear_all(&mut self) -> Result<()> {
        self.store.clear()?;
        self.entries.clear();

        self.view.render_remove_all();
        self.view.set_container_visible(false);
        self.post(MSG_CLEARED, NoticeKind::Danger);
        self.reset_form();

        tracing::debug!("List cleared");
        Ok(())
    }

    /// Run a task previously handed to the scheduler.
    ///
    /// Returns `true` if it changed the view.
    pub fn run_deferred(&mut self, task: DeferredTask) -> bool {
        match task {
            DeferredTask::ClearNotice { token } => self.notifier.expire(&mut self.view, token),
        }
    }

    /// Issue a fresh entry ID.
    pub fn new_id(&mut self) -> Result<EntryId> {
        self.ids.next_id()
    }

    pub fn entries(&self) -> &EntryCollection {
        &self.entries
    }

    pub fn session(&self) -> &EditSession {
        &self.session
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn notifier(&self) -> &Notifier {
        &self.notifier
    }

    pub fn view(&self) -> &V {
        &self.view
    }

    pub fn view_mut(&mut self) -> &mut V {
        &mut self.view
    }

    pub fn store(&self) -> &EntryStore<K> {
        &self.store
    }

    pub fn scheduler(&self) -> &S {
        &self.scheduler
    }

    pub fn scheduler_mut(&mut self) -> &mut S {
        &mut self.scheduler
    }

    /// Tear the controller down, keeping only the persistence backend.
    pub fn into_backend(self) -> K {
        self.store.into_backend()
    }

    fn add(&mut self, value: &str) -> Result<SubmitOutcome> {
        let entry = Entry::new(self.ids.next_id()?, value);
        self.store.add(entry.clone())?;
        self.entries.push(entry.clone());

        self.view.render_append(&entry);
        self.view.set_container_visible(true);
        self.post(MSG_ADDED, NoticeKind::Success);
        self.reset_form();

        tracing::debug!(entry_id = %entry.id, "Entry added");
        Ok(SubmitOutcome::Added(entry.id))
    }

    fn commit_edit(&mut self, id: EntryId, value: &str) -> Result<SubmitOutcome> {
        if !self.entries.contains(&id) {
            // target vanished underneath the session; drop it so the form is usable again
            self.reset_form();
            return Err(Error::EntryNotFound(id));
        }

        self.store.update_value(&id, value)?;
        self.entries.update_value(&id, value);

        self.view.render_update(&id, value);
        self.post(MSG_UPDATED, NoticeKind::Success);
        self.reset_form();

        tracing::debug!(entry_id = %id, "Entry updated");
        Ok(SubmitOutcome::Updated(id))
    }

    fn post(&mut self, message: &str, kind: NoticeKind) {
        self.notifier
            .post(&mut self.view, &mut self.scheduler, message, kind);
    }

    fn reset_form(&mut self) {
        self.session = std::mem::take(&mut self.session).reset();
        self.view.set_input("");
        self.view.set_submit_label(&self.settings.add_label);
    }
}
