//! Marks notes as done.
//!
//! The status transition is forward-only: there is no command to reopen a
//! note, mirroring the `NotDone -> Done` contract of the model.

use crate::collection::NoteCollection;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;

pub fn run(collection: &mut NoteCollection, id: u64) -> Result<CmdResult> {
    let mut result = CmdResult::default();

    let already_done = match collection.get_note_by_id(id) {
        Some(note) => note.is_done(),
        None => {
            result.add_message(CmdMessage::info(format!("No note with id {}", id)));
            return Ok(result);
        }
    };

    collection.mark_done(id);

    if let Some(note) = collection.get_note_by_id(id).cloned() {
        if already_done {
            result.add_message(CmdMessage::info(format!(
                "Note {} is already done",
                note.id
            )));
        } else {
            result.add_message(CmdMessage::success(format!(
                "Note completed ({}): {}",
                note.id, note.title
            )));
        }
        result.affected_notes.push(note);
    }

    Ok(result)
}
