//! Line commands typed at the prompt.
//!
//! A plain line is submitted as-is, like typing into the form and pressing
//! the button. Lines starting with `:` are commands; `::` escapes a literal
//! leading colon.

use crate::error::Result;
use shelf_engine::{
    EntryCollection, EntryController, EntryId, KeyValueStore, Scheduler, TimeSource, View,
};

pub const HELP: &str = "\
text          add text (or update the entry being edited)
:edit <ref>   edit an entry; <ref> is an id or #position
:delete <ref> delete an entry
:clear        remove everything
:list         redraw the list
:help         show this help
:quit         exit";

/// Reference to an entry as typed by the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EntryRef {
    Id(EntryId),
    /// 1-based position in the list
    Position(usize),
}

impl EntryRef {
    fn parse(raw: &str) -> std::result::Result<Self, CommandError> {
        match raw.strip_prefix('#') {
            Some(n) => match n.parse::<usize>() {
                Ok(position) if position > 0 => Ok(EntryRef::Position(position)),
                _ => Err(CommandError::InvalidPosition(raw.to_string())),
            },
            None => Ok(EntryRef::Id(raw.to_string())),
        }
    }

    /// Resolve to an ID against the current list.
    pub fn resolve(&self, entries: &EntryCollection) -> std::result::Result<EntryId, CommandError> {
        match self {
            EntryRef::Id(id) => Ok(id.clone()),
            EntryRef::Position(position) => position
                .checked_sub(1)
                .and_then(|index| entries.as_slice().get(index))
                .map(|e| e.id.clone())
                .ok_or(CommandError::NoSuchPosition(*position)),
        }
    }
}

/// A parsed prompt line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Submit(String),
    Edit(EntryRef),
    Delete(EntryRef),
    Clear,
    List,
    Help,
    Quit,
}

impl Command {
    pub fn parse(line: &str) -> std::result::Result<Self, CommandError> {
        let line = line.strip_suffix('\r').unwrap_or(line);

        if let Some(literal) = line.strip_prefix("::") {
            return Ok(Command::Submit(format!(":{}", literal)));
        }
        let Some(rest) = line.strip_prefix(':') else {
            return Ok(Command::Submit(line.to_string()));
        };

        let mut parts = rest.trim().splitn(2, char::is_whitespace);
        let name = parts.next().unwrap_or_default();
        let arg = parts.next().map(str::trim).filter(|a| !a.is_empty());

        match (name, arg) {
            ("edit" | "e", Some(arg)) => Ok(Command::Edit(EntryRef::parse(arg)?)),
            ("delete" | "d", Some(arg)) => Ok(Command::Delete(EntryRef::parse(arg)?)),
            ("edit" | "e" | "delete" | "d", None) => Err(CommandError::MissingRef(name.to_string())),
            ("clear", None) => Ok(Command::Clear),
            ("list" | "ls", None) => Ok(Command::List),
            ("help" | "h", None) => Ok(Command::Help),
            ("quit" | "q", None) => Ok(Command::Quit),
            _ => Err(CommandError::Unknown(rest.trim().to_string())),
        }
    }
}

/// Prompt parsing errors.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CommandError {
    #[error("unknown command: :{0} (try :help)")]
    Unknown(String),

    #[error(":{0} needs an id or #position")]
    MissingRef(String),

    #[error("invalid position: {0}")]
    InvalidPosition(String),

    #[error("no entry at position #{0}")]
    NoSuchPosition(usize),
}

/// What the event loop should do after a command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Redraw,
    Help,
    Quit,
}

/// Apply one command to the controller.
pub fn dispatch<K, V, S, C>(
    controller: &mut EntryController<K, V, S, C>,
    command: Command,
) -> Result<Flow>
where
    K: KeyValueStore,
    V: View,
    S: Scheduler,
    C: TimeSource,
{
    match command {
        Command::Submit(value) => {
            let outcome = controller.submit(&value)?;
            tracing::info!(entry_id = %outcome.id(), "Submitted");
        }
        Command::Edit(entry) => {
            let id = entry.resolve(controller.entries())?;
            controller.begin_edit(&id)?;
        }
        Command::Delete(entry) => {
            let id = entry.resolve(controller.entries())?;
            controller.delete(&id)?;
            tracing::info!(entry_id = %id, "Deleted");
        }
        Command::Clear => {
            controller.clear_all()?;
            tracing::info!("Cleared list");
        }
        Command::List => return Ok(Flow::Redraw),
        Command::Help => return Ok(Flow::Help),
        Command::Quit => return Ok(Flow::Quit),
    }
    Ok(Flow::Continue)
}
