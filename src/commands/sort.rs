use crate::collection::NoteCollection;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::query::SortKey;

pub fn run(collection: &mut NoteCollection, key: SortKey) -> Result<CmdResult> {
    collection.sort(key);

    let listed: Vec<_> = collection.all_notes().to_vec();
    let mut result = CmdResult::default().with_listed_notes(listed);
    result.add_message(CmdMessage::info(format!("Notes sorted by {}", key)));
    Ok(result)
}
