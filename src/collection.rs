//! # The Note Collection
//!
//! [`NoteCollection`] owns an ordered sequence of [`Note`]s and every
//! query/mutation over it. All operations are synchronous linear scans over
//! the backing `Vec`; insertion order is the default iteration order until a
//! sort reorders it in place.
//!
//! ## Never Throws
//!
//! No operation here panics or returns an error. "Not found" resolves to an
//! `Option` absence, and invalid input to `add_note` is a silent no-op. The
//! command layer (see [`crate::commands`]) layers diagnostic messages on top
//! of these outcomes; the collection itself stays quiet.
//!
//! ## Aliased Access
//!
//! [`NoteCollection::all_notes`] and [`NoteCollection::get_note_by_id`]
//! return references straight into internal storage, and the `_mut` variants
//! allow field-level mutation through them (e.g. calling [`Note::edit`] on a
//! looked-up note). This aliasing is deliberate and part of the contract:
//! callers get the real notes, not snapshots. Structural changes (insert,
//! remove, reorder) stay behind the collection's own methods.

use crate::model::{Note, NoteStatus};
use crate::query::{NoteQuery, SortKey};

#[derive(Debug)]
pub struct NoteCollection {
    notes: Vec<Note>,
    next_id: u64,
}

impl Default for NoteCollection {
    fn default() -> Self {
        Self::new()
    }
}

impl NoteCollection {
    pub fn new() -> Self {
        Self {
            notes: Vec::new(),
            next_id: 1,
        }
    }

    /// Appends a new note if `title` and `content` are both non-empty after
    /// trimming surrounding whitespace. Otherwise a silent no-op.
    ///
    /// The fields are stored as given (untrimmed); trimming is only applied
    /// for validation. The new note receives the next sequential id; ids are
    /// never reused, even after deletion.
    pub fn add_note(&mut self, title: &str, content: &str, requires_confirmation: bool) {
        if title.trim().is_empty() || content.trim().is_empty() {
            return;
        }
        let note = Note::new(
            self.next_id,
            title.to_string(),
            content.to_string(),
            requires_confirmation,
        );
        self.next_id += 1;
        self.notes.push(note);
    }

    /// Removes the first note with a matching id, preserving the order of
    /// the remaining notes. Silent no-op when absent.
    pub fn delete_note(&mut self, id: u64) {
        if let Some(index) = self.find_index_by_id(id) {
            self.notes.remove(index);
        }
    }

    /// Manager-level edit: overwrites title/content and bumps `updated_at`.
    /// Silent no-op when absent.
    ///
    /// The entity-level variant is `get_note_by_id_mut(id)` followed by
    /// [`Note::edit`]; both satisfy the same contract.
    pub fn edit_note(&mut self, id: u64, title: &str, content: &str) {
        if let Some(note) = self.get_note_by_id_mut(id) {
            note.edit(title, content);
        }
    }

    pub fn get_note_by_id(&self, id: u64) -> Option<&Note> {
        self.notes.iter().find(|note| note.id == id)
    }

    pub fn get_note_by_id_mut(&mut self, id: u64) -> Option<&mut Note> {
        self.notes.iter_mut().find(|note| note.id == id)
    }

    /// The full sequence in current internal order, borrowed directly from
    /// internal storage (not a copy).
    pub fn all_notes(&self) -> &[Note] {
        &self.notes
    }

    /// Mutable view over the full sequence for field-level edits. Structural
    /// changes go through [`add_note`](Self::add_note) and
    /// [`delete_note`](Self::delete_note).
    pub fn all_notes_mut(&mut self) -> &mut [Note] {
        &mut self.notes
    }

    /// Sets the note's status to `Done`. Idempotent; silent no-op when the
    /// id is absent.
    pub fn mark_done(&mut self, id: u64) {
        if let Some(note) = self.get_note_by_id_mut(id) {
            note.mark_done();
        }
    }

    pub fn total_count(&self) -> usize {
        self.notes.len()
    }

    /// Count of notes still not done.
    pub fn remaining_count(&self) -> usize {
        self.notes
            .iter()
            .filter(|note| note.status == NoteStatus::NotDone)
            .count()
    }

    /// All notes satisfying every provided filter of the query, in current
    /// internal order.
    pub fn search(&self, query: &NoteQuery) -> Vec<&Note> {
        self.notes.iter().filter(|note| query.matches(note)).collect()
    }

    /// Sorts the sequence in place. `Vec::sort_by` is stable, so equal keys
    /// keep their relative order.
    ///
    /// `SortKey::Status` compares status labels as plain strings ("Done" <
    /// "Not Done"), preserving the historical behavior rather than any
    /// semantic grouping.
    pub fn sort(&mut self, key: SortKey) {
        match key {
            SortKey::Status => self
                .notes
                .sort_by(|a, b| a.status.label().cmp(b.status.label())),
            SortKey::CreatedAt => self.notes.sort_by(|a, b| a.created_at.cmp(&b.created_at)),
        }
    }

    fn find_index_by_id(&self, id: u64) -> Option<usize> {
        self.notes.iter().position(|note| note.id == id)
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;

    pub struct CollectionFixture {
        pub collection: NoteCollection,
    }

    impl Default for CollectionFixture {
        fn default() -> Self {
            Self::new()
        }
    }

    impl CollectionFixture {
        pub fn new() -> Self {
            Self {
                collection: NoteCollection::new(),
            }
        }

        pub fn with_notes(mut self, count: usize) -> Self {
            for i in 0..count {
                let title = format!("Test Note {}", i + 1);
                let content = format!("Content for note {}", i + 1);
                self.collection.add_note(&title, &content, false);
            }
            self
        }

        pub fn with_note(mut self, title: &str, content: &str) -> Self {
            self.collection.add_note(title, content, false);
            self
        }

        pub fn with_done_note(mut self, title: &str, content: &str) -> Self {
            self.collection.add_note(title, content, false);
            let id = self.collection.all_notes().last().map(|n| n.id);
            if let Some(id) = id {
                self.collection.mark_done(id);
            }
            self
        }

        pub fn with_guarded_note(mut self, title: &str, content: &str) -> Self {
            self.collection.add_note(title, content, true);
            self
        }
    }
}
