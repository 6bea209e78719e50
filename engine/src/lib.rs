//! # Shelf Engine
//!
//! State core for a persistent list widget.
//!
//! The engine keeps three copies of the same list consistent: the durable
//! key-value blob, an in-memory mirror, and whatever the view has rendered.
//! Four mutations (add, edit, delete, clear) and a cold-start rehydration path
//! go through [`EntryController`], which validates input, writes to
//! [`EntryStore`] and then issues commands to a [`View`].
//!
//! ## Design Principles
//!
//! - **No IO**: storage, rendering, timers and the wall clock are traits
//! - **Store first**: a mutation reaches the view only after it was persisted
//! - **Explicit session**: edit state is an [`EditSession`] value, not globals
//! - **Portable**: hosts can be a terminal, a webview bridge, or a test
//!
//! ## Quick Start
//!
//! ```rust
//! use shelf_engine::{
//!     EntryController, ManualClock, ManualScheduler, MemoryStore, RecordingView, Settings,
//! };
//!
//! let clock = ManualClock::new(1706745600000);
//! let mut controller = EntryController::new(
//!     MemoryStore::new(),
//!     RecordingView::new(),
//!     ManualScheduler::new(),
//!     &clock,
//!     Settings::default(),
//! );
//! controller.rehydrate();
//!
//! let added = controller.submit("Milk").unwrap();
//! controller.begin_edit(added.id()).unwrap();
//! controller.submit("Oat Milk").unwrap();
//!
//! assert_eq!(controller.entries().len(), 1);
//! assert_eq!(controller.view().rendered()[0].value, "Oat Milk");
//! ```
//!
//! ## Persistence
//!
//! The list is stored under one key (default `"list"`) as a JSON array of
//! `{"id": string, "value": string}` objects. A missing or unreadable blob is
//! treated as an empty list.

pub mod clock;
pub mod controller;
pub mod entry;
pub mod error;
pub mod kv;
pub mod notice;
pub mod session;
pub mod settings;
pub mod store;
pub mod view;

// Re-export main types at crate root
pub use clock::{IdGenerator, ManualClock, TimeSource};
pub use controller::{
    EntryController, SubmitOutcome, MSG_ADDED, MSG_CLEARED, MSG_EMPTY_VALUE, MSG_REMOVED,
    MSG_UPDATED,
};
pub use entry::{Entry, EntryCollection};
pub use error::Error;
pub use kv::{KeyValueStore, MemoryStore};
pub use notice::{DeferredTask, ManualScheduler, NoticeToken, Notifier, Scheduler};
pub use session::EditSession;
pub use settings::Settings;
pub use store::{EntryStore, DEFAULT_STORAGE_KEY};
pub use view::{NoticeKind, RecordingView, View, ViewCommand};

/// Type aliases for clarity
pub type EntryId = String;
pub type Timestamp = u64;
