//! # Domain Model: Notes and Their Status
//!
//! This module defines the core data structures for notz: [`Note`] and
//! [`NoteStatus`].
//!
//! ## Identity
//!
//! Every note carries a `u64` id, assigned sequentially (starting at 1) by
//! the owning [`crate::collection::NoteCollection`]. Ids are immutable and
//! never reused, even after the note is deleted. The id counter lives in the
//! collection, not in a global, so independent collections never interfere.
//!
//! ## Timestamps
//!
//! - `created_at` is fixed at construction.
//! - `updated_at` equals `created_at` at construction and is bumped to
//!   `Utc::now()` on every [`Note::edit`]. It is therefore always
//!   `>= created_at`.
//!
//! ## The Confirmation Flag
//!
//! `requires_confirmation` is recorded at creation and never gates anything:
//! editing such a note emits a diagnostic log line and proceeds. The flag is
//! an extension point for a real confirmation workflow, kept as a no-op
//! signal for now. The command layer additionally surfaces the signal as a
//! structured warning message (see [`crate::commands::update`]).

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Completion status of a note.
///
/// Transitions are forward-only: `NotDone` -> `Done` via an explicit
/// mark-done operation. There is no path back to `NotDone`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum NoteStatus {
    NotDone,
    Done,
}

impl Default for NoteStatus {
    fn default() -> Self {
        Self::NotDone
    }
}

impl NoteStatus {
    /// The user-facing label for this status.
    ///
    /// The status sort compares these labels as plain strings, so "Done"
    /// orders before "Not Done".
    pub fn label(&self) -> &'static str {
        match self {
            NoteStatus::NotDone => "Not Done",
            NoteStatus::Done => "Done",
        }
    }
}

impl std::fmt::Display for NoteStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Note {
    pub id: u64,
    pub title: String,
    pub content: String,
    pub requires_confirmation: bool,
    #[serde(default)]
    pub status: NoteStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Note {
    /// Constructs a note with the given id.
    ///
    /// Construction performs no validation; rejecting blank titles or
    /// content is the collection's job. Ids are handed out by the
    /// collection, which is why this is crate-private.
    pub(crate) fn new(
        id: u64,
        title: String,
        content: String,
        requires_confirmation: bool,
    ) -> Self {
        let now = Utc::now();
        Self {
            id,
            title,
            content,
            requires_confirmation,
            status: NoteStatus::NotDone,
            created_at: now,
            updated_at: now,
        }
    }

    /// Overwrites title and content and bumps `updated_at`.
    ///
    /// If `requires_confirmation` is set, a confirmation-required signal is
    /// emitted first; the edit always proceeds regardless. No error
    /// conditions.
    pub fn edit(&mut self, title: impl Into<String>, content: impl Into<String>) {
        if self.requires_confirmation {
            log::info!("editing confirmation required for note {}", self.id);
        }
        self.title = title.into();
        self.content = content.into();
        self.updated_at = Utc::now();
    }

    /// Sets the status to `Done`. Idempotent.
    pub fn mark_done(&mut self) {
        self.status = NoteStatus::Done;
    }

    pub fn is_done(&self) -> bool {
        self.status == NoteStatus::Done
    }
}
