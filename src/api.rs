//! # API Facade
//!
//! A **thin facade** over the command layer — the single entry point for
//! front-ends (a CLI, a TUI, tests), regardless of how they render results.
//!
//! The facade:
//! - **Dispatches** to the appropriate command function
//! - **Normalizes inputs** (e.g. parsing a sort-key string)
//! - **Returns structured types** (`Result<CmdResult>`)
//!
//! It explicitly avoids business logic (that lives in `commands/*.rs`) and
//! any I/O or presentation concerns.
//!
//! For callers that want the raw, aliased access the collection offers
//! (direct references into storage, entity-level edits), the facade exposes
//! [`NotesApi::collection`] and [`NotesApi::collection_mut`] as escape
//! hatches.

use crate::collection::NoteCollection;
use crate::commands;
use crate::error::Result;
use crate::model::Note;
use crate::query::{NoteQuery, SortKey};

/// The main API facade for notz operations.
#[derive(Debug, Default)]
pub struct NotesApi {
    collection: NoteCollection,
}

impl NotesApi {
    pub fn new() -> Self {
        Self {
            collection: NoteCollection::new(),
        }
    }

    pub fn create_note(
        &mut self,
        title: &str,
        content: &str,
        requires_confirmation: bool,
    ) -> Result<commands::CmdResult> {
        commands::create::run(&mut self.collection, title, content, requires_confirmation)
    }

    pub fn delete_note(&mut self, id: u64) -> Result<commands::CmdResult> {
        commands::delete::run(&mut self.collection, id)
    }

    pub fn update_note(
        &mut self,
        id: u64,
        title: &str,
        content: &str,
    ) -> Result<commands::CmdResult> {
        commands::update::run(&mut self.collection, id, title, content)
    }

    pub fn mark_done(&mut self, id: u64) -> Result<commands::CmdResult> {
        commands::done::run(&mut self.collection, id)
    }

    pub fn get_notes(&self, filter: NoteFilter) -> Result<commands::CmdResult> {
        commands::get::run(&self.collection, filter)
    }

    pub fn search_notes(&self, query: &NoteQuery) -> Result<commands::CmdResult> {
        commands::search::run(&self.collection, query)
    }

    pub fn sort_notes(&mut self, key: SortKey) -> Result<commands::CmdResult> {
        commands::sort::run(&mut self.collection, key)
    }

    /// Front-end convenience: parses the sort key from user input.
    /// Fails with [`crate::error::NotzError::UnknownSortKey`] on anything
    /// other than `status` or `created`.
    pub fn sort_notes_by(&mut self, key: &str) -> Result<commands::CmdResult> {
        let key: SortKey = key.parse()?;
        self.sort_notes(key)
    }

    pub fn note(&self, id: u64) -> Option<&Note> {
        self.collection.get_note_by_id(id)
    }

    pub fn note_count(&self) -> usize {
        self.collection.total_count()
    }

    pub fn remaining_count(&self) -> usize {
        self.collection.remaining_count()
    }

    pub fn collection(&self) -> &NoteCollection {
        &self.collection
    }

    pub fn collection_mut(&mut self) -> &mut NoteCollection {
        &mut self.collection
    }
}

pub use commands::get::{NoteFilter, NoteStatusFilter};
pub use commands::{CmdMessage, CmdResult, MessageLevel};
