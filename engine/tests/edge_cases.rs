//! Edge case tests for shelf-engine
//!
//! These tests cover boundary conditions and unusual inputs.

use shelf_engine::{
    EditSession, Entry, EntryController, EntryStore, Error, KeyValueStore, ManualClock,
    ManualScheduler, MemoryStore, NoticeKind, RecordingView, Settings, DEFAULT_STORAGE_KEY,
    MSG_ADDED,
};

/// Backend whose writes can be switched off.
#[derive(Default)]
struct FlakyStore {
    inner: MemoryStore,
    fail_writes: bool,
}

impl KeyValueStore for FlakyStore {
    fn get(&self, key: &str) -> shelf_engine::error::Result<Option<String>> {
        self.inner.get(key)
    }

    fn set(&mut self, key: &str, value: String) -> shelf_engine::error::Result<()> {
        if self.fail_writes {
            return Err(Error::Storage("quota exceeded".into()));
        }
        self.inner.set(key, value)
    }

    fn delete(&mut self, key: &str) -> shelf_engine::error::Result<()> {
        if self.fail_writes {
            return Err(Error::Storage("quota exceeded".into()));
        }
        self.inner.delete(key)
    }
}

/// Backend whose reads always fail.
struct UnreadableStore;

impl KeyValueStore for UnreadableStore {
    fn get(&self, _key: &str) -> shelf_engine::error::Result<Option<String>> {
        Err(Error::Storage("permission denied".into()))
    }

    fn set(&mut self, _key: &str, _value: String) -> shelf_engine::error::Result<()> {
        Ok(())
    }

    fn delete(&mut self, _key: &str) -> shelf_engine::error::Result<()> {
        Ok(())
    }
}

fn seeded(blob: &str) -> MemoryStore {
    let mut backend = MemoryStore::new();
    backend.set(DEFAULT_STORAGE_KEY, blob.to_string()).unwrap();
    backend
}

// ============================================================================
// String Edge Cases
// ============================================================================

#[test]
fn unicode_values() {
    let clock = ManualClock::new(1000);
    let mut controller = EntryController::new(
        MemoryStore::new(),
        RecordingView::new(),
        ManualScheduler::new(),
        &clock,
        Settings::default(),
    );

    let values = vec![
        "日本語テスト",
        "Привет мир",
        "🎉🚀💯",
        "Hello\nWorld\tTab",
        "<p class=\"title\">markup</p>",
        "Null\0Test",
    ];

    for value in &values {
        let outcome = controller.submit(value).unwrap();
        assert_eq!(controller.entries().get(outcome.id()).unwrap().value, *value);
    }

    let reloaded = EntryStore::new(controller.into_backend()).load();
    let stored: Vec<_> = reloaded.iter().map(|e| e.value.as_str()).collect();
    assert_eq!(stored, values);
}

#[test]
fn very_long_value() {
    let clock = ManualClock::new(1000);
    let mut controller = EntryController::new(
        MemoryStore::new(),
        RecordingView::new(),
        ManualScheduler::new(),
        &clock,
        Settings::default(),
    );

    let long_value = "x".repeat(1024 * 1024);
    let outcome = controller.submit(&long_value).unwrap();

    let reloaded = EntryStore::new(controller.into_backend()).load();
    assert_eq!(reloaded.get(outcome.id()).unwrap().value.len(), 1024 * 1024);
}

// ============================================================================
// Persisted Blob Edge Cases
// ============================================================================

#[test]
fn malformed_blobs_rehydrate_empty() {
    let blobs = [
        "",
        "null",
        "{}",
        "[{\"id\": 1, \"value\": \"Milk\"}]",
        "[{\"value\": \"Milk\"}]",
        "[{\"id\":\"1\",\"value\":\"Milk\"}",
    ];

    for blob in blobs {
        let clock = ManualClock::new(1000);
        let mut controller = EntryController::new(
            seeded(blob),
            RecordingView::new(),
            ManualScheduler::new(),
            &clock,
            Settings::default(),
        );

        assert_eq!(controller.rehydrate(), 0, "blob: {:?}", blob);
        assert!(controller.view().commands().is_empty());
    }
}

#[test]
fn extra_fields_in_blob_are_ignored() {
    let backend = seeded(r#"[{"id":"1","value":"Milk","done":true}]"#);
    let store = EntryStore::new(backend);
    assert_eq!(store.load().as_slice(), &[Entry::new("1", "Milk")]);
}

#[test]
fn unreadable_backend_rehydrates_empty() {
    let clock = ManualClock::new(1000);
    let mut controller = EntryController::new(
        UnreadableStore,
        RecordingView::new(),
        ManualScheduler::new(),
        &clock,
        Settings::default(),
    );

    assert_eq!(controller.rehydrate(), 0);
    assert!(matches!(
        controller.store().try_load(),
        Err(Error::Storage(_))
    ));
}

#[test]
fn malformed_blob_is_replaced_by_first_add() {
    let clock = ManualClock::new(1000);
    let mut controller = EntryController::new(
        seeded("not json"),
        RecordingView::new(),
        ManualScheduler::new(),
        &clock,
        Settings::default(),
    );
    controller.rehydrate();
    controller.submit("Milk").unwrap();

    let reloaded = EntryStore::new(controller.into_backend()).try_load().unwrap();
    assert_eq!(reloaded.len(), 1);
}

// ============================================================================
// Write Failures
// ============================================================================

#[test]
fn failed_add_leaves_view_untouched() {
    let clock = ManualClock::new(1000);
    let mut controller = EntryController::new(
        FlakyStore {
            fail_writes: true,
            ..Default::default()
        },
        RecordingView::new(),
        ManualScheduler::new(),
        &clock,
        Settings::default(),
    );
    controller.rehydrate();

    let result = controller.submit("Milk");
    assert!(matches!(result, Err(Error::Storage(_))));
    assert!(controller.entries().is_empty());
    assert!(controller.view().commands().is_empty());
}

#[test]
fn failed_delete_keeps_entry() {
    let clock = ManualClock::new(1000);
    let mut controller = EntryController::new(
        FlakyStore::default(),
        RecordingView::new(),
        ManualScheduler::new(),
        &clock,
        Settings::default(),
    );
    controller.rehydrate();
    let id = controller.submit("Milk").unwrap().id().to_string();

    // reopen the same data with writes switched off
    let mut backend = controller.into_backend();
    backend.fail_writes = true;
    let mut controller = EntryController::new(
        backend,
        RecordingView::new(),
        ManualScheduler::new(),
        &clock,
        Settings::default(),
    );
    controller.rehydrate();
    controller.view_mut().take_commands();

    assert!(matches!(controller.delete(&id), Err(Error::Storage(_))));
    assert!(controller.clear_all().is_err());
    assert_eq!(controller.entries().len(), 1);
    assert!(controller.view().commands().is_empty());
}

// ============================================================================
// Id Edge Cases
// ============================================================================

#[test]
fn rapid_adds_get_distinct_ids() {
    let clock = ManualClock::new(1706745600000);
    let mut controller = EntryController::new(
        MemoryStore::new(),
        RecordingView::new(),
        ManualScheduler::new(),
        &clock,
        Settings::default(),
    );

    // clock never moves between submissions
    let ids: Vec<String> = (0..100)
        .map(|i| controller.submit(&format!("item {}", i)).unwrap().id().to_string())
        .collect();

    let mut unique = ids.clone();
    unique.sort();
    unique.dedup();
    assert_eq!(unique.len(), 100);
}

#[test]
fn deleted_ids_are_not_reused() {
    let clock = ManualClock::new(1000);
    let mut controller = EntryController::new(
        MemoryStore::new(),
        RecordingView::new(),
        ManualScheduler::new(),
        &clock,
        Settings::default(),
    );

    let first = controller.submit("Milk").unwrap().id().to_string();
    controller.delete(&first).unwrap();
    let second = controller.submit("Milk").unwrap().id().to_string();

    assert_ne!(first, second);
}

#[test]
fn foreign_ids_survive_rehydrate() {
    let backend = seeded(r#"[{"id":"abc","value":"Milk"}]"#);
    let clock = ManualClock::new(1000);
    let mut controller = EntryController::new(
        backend,
        RecordingView::new(),
        ManualScheduler::new(),
        &clock,
        Settings::default(),
    );
    controller.rehydrate();

    controller.begin_edit("abc").unwrap();
    controller.submit("Oat Milk").unwrap();
    assert_eq!(controller.entries().get("abc").unwrap().value, "Oat Milk");
}

#[test]
fn largest_possible_stored_id_stops_adds_without_panicking() {
    let backend = seeded(r#"[{"id":"18446744073709551615","value":"Milk"}]"#);
    let clock = ManualClock::new(1706745600000);
    let mut controller = EntryController::new(
        backend,
        RecordingView::new(),
        ManualScheduler::new(),
        &clock,
        Settings::default(),
    );
    assert_eq!(controller.rehydrate(), 1);
    controller.view_mut().take_commands();

    assert_eq!(controller.submit("Eggs"), Err(Error::IdsExhausted));
    assert_eq!(controller.new_id(), Err(Error::IdsExhausted));
    assert_eq!(controller.entries().len(), 1);
    assert!(controller.view().commands().is_empty());

    // existing entries stay editable
    let id = u64::MAX.to_string();
    controller.begin_edit(&id).unwrap();
    controller.submit("Oat Milk").unwrap();
    assert_eq!(controller.entries().get(&id).unwrap().value, "Oat Milk");
}

// ============================================================================
// Session Edge Cases
// ============================================================================

#[test]
fn clear_all_while_editing_returns_to_add_mode() {
    let clock = ManualClock::new(1000);
    let mut controller = EntryController::new(
        MemoryStore::new(),
        RecordingView::new(),
        ManualScheduler::new(),
        &clock,
        Settings::default(),
    );
    let id = controller.submit("Milk").unwrap().id().to_string();
    controller.begin_edit(&id).unwrap();
    controller.clear_all().unwrap();

    assert_eq!(controller.session(), &EditSession::Idle);

    // next submit creates instead of updating the cleared entry
    controller.submit("Eggs").unwrap();
    assert_eq!(controller.entries().len(), 1);
    assert_eq!(
        controller.view().notice(),
        Some((MSG_ADDED, NoticeKind::Success))
    );
}

#[test]
fn clear_all_on_empty_list() {
    let clock = ManualClock::new(1000);
    let mut controller = EntryController::new(
        MemoryStore::new(),
        RecordingView::new(),
        ManualScheduler::new(),
        &clock,
        Settings::default(),
    );
    controller.rehydrate();

    assert!(controller.clear_all().is_ok());
    assert!(!controller.view().container_visible());
}
