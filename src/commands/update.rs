use crate::collection::NoteCollection;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;

pub fn run(
    collection: &mut NoteCollection,
    id: u64,
    title: &str,
    content: &str,
) -> Result<CmdResult> {
    let mut result = CmdResult::default();

    let requires_confirmation = match collection.get_note_by_id(id) {
        Some(note) => note.requires_confirmation,
        None => {
            result.add_message(CmdMessage::info(format!("No note with id {}", id)));
            return Ok(result);
        }
    };

    if requires_confirmation {
        // Placeholder signal only: nothing actually waits for a
        // confirmation, the edit goes through regardless.
        result.add_message(CmdMessage::warning("Editing confirmation required..."));
    }

    collection.edit_note(id, title, content);

    if let Some(note) = collection.get_note_by_id(id).cloned() {
        result.add_message(CmdMessage::success(format!(
            "Note updated ({}): {}",
            note.id, note.title
        )));
        result.affected_notes.push(note);
    }

    Ok(result)
}
