//! # Command Layer
//!
//! The business logic of notz. Each command lives in its own submodule and
//! implements pure functions that operate on a [`NoteCollection`].
//!
//! ## Structured Returns
//!
//! Commands return [`CmdResult`], not strings. The struct carries:
//! - `affected_notes`: notes that were modified, cloned post-operation
//! - `listed_notes`: notes to display, cloned in current collection order
//! - `messages`: structured messages with levels (info, success, warning,
//!   error)
//!
//! The UI layer then decides how to render this data; nothing here touches
//! stdout or stderr.
//!
//! ## Never Throws for Domain Conditions
//!
//! "Not found" and "invalid input" never produce an `Err` — they degrade to
//! a warning message on an otherwise empty result, matching the collection's
//! silent no-op contract. The `Result` return exists for uniformity at the
//! facade seam.
//!
//! ## Testing Strategy
//!
//! This is where the lion's share of testing lives. Command tests build a
//! fresh [`NoteCollection`] (or a fixture), exercise all logic branches, and
//! verify the `CmdResult` contents.

use serde::Serialize;

use crate::model::Note;

pub mod create;
pub mod delete;
pub mod done;
pub mod get;
pub mod search;
pub mod sort;
pub mod update;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone, Serialize)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

#[derive(Debug, Default)]
pub struct CmdResult {
    pub affected_notes: Vec<Note>,
    pub listed_notes: Vec<Note>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_affected_notes(mut self, notes: Vec<Note>) -> Self {
        self.affected_notes = notes;
        self
    }

    pub fn with_listed_notes(mut self, notes: Vec<Note>) -> Self {
        self.listed_notes = notes;
        self
    }
}
