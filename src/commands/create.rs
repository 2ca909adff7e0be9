use crate::collection::NoteCollection;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;

pub fn run(
    collection: &mut NoteCollection,
    title: &str,
    content: &str,
    requires_confirmation: bool,
) -> Result<CmdResult> {
    let before = collection.total_count();
    collection.add_note(title, content, requires_confirmation);

    let mut result = CmdResult::default();
    if collection.total_count() == before {
        result.add_message(CmdMessage::warning(
            "Note not created: title and content must be non-empty",
        ));
        return Ok(result);
    }

    // A new note is always appended, so the last one is it.
    if let Some(note) = collection.all_notes().last().cloned() {
        result.add_message(CmdMessage::success(format!(
            "Note created ({}): {}",
            note.id, note.title
        )));
        result.affected_notes.push(note);
    }
    Ok(result)
}
