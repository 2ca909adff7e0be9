use crate::collection::NoteCollection;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;

pub fn run(collection: &mut NoteCollection, id: u64) -> Result<CmdResult> {
    let mut result = CmdResult::default();

    // Clone before removal so the caller still sees what went away.
    let removed = collection.get_note_by_id(id).cloned();
    collection.delete_note(id);

    match removed {
        Some(note) => {
            result.add_message(CmdMessage::success(format!(
                "Note deleted ({}): {}",
                note.id, note.title
            )));
            result.affected_notes.push(note);
        }
        None => {
            // The collection treats this as a silent no-op; the message is
            // purely diagnostic.
            result.add_message(CmdMessage::info(format!("No note with id {}", id)));
        }
    }

    Ok(result)
}
