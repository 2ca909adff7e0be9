use crate::collection::NoteCollection;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::NoteStatus;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoteStatusFilter {
    All,
    Done,
    NotDone,
}

#[derive(Debug, Clone)]
pub struct NoteFilter {
    pub status: NoteStatusFilter,
}

impl Default for NoteFilter {
    fn default() -> Self {
        Self {
            status: NoteStatusFilter::All,
        }
    }
}

impl NoteFilter {
    fn matches(&self, status: NoteStatus) -> bool {
        match self.status {
            NoteStatusFilter::All => true,
            NoteStatusFilter::Done => status == NoteStatus::Done,
            NoteStatusFilter::NotDone => status == NoteStatus::NotDone,
        }
    }
}

pub fn run(collection: &NoteCollection, filter: NoteFilter) -> Result<CmdResult> {
    let listed: Vec<_> = collection
        .all_notes()
        .iter()
        .filter(|note| filter.matches(note.status))
        .cloned()
        .collect();

    let mut result = CmdResult::default().with_listed_notes(listed);
    result.add_message(CmdMessage::info(format!(
        "{} notes, {} remaining",
        collection.total_count(),
        collection.remaining_count()
    )));
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::collection::fixtures::CollectionFixture;

    #[test]
    fn lists_all_notes_in_collection_order() {
        let collection = CollectionFixture::new().with_notes(3).collection;
        let result = run(&collection, NoteFilter::default()).unwrap();

        let ids: Vec<u64> = result.listed_notes.iter().map(|n| n.id).collect();
        assert_eq!(ids, vec![1, 2, 3]);
        assert!(result.messages[0].content.contains("3 notes, 3 remaining"));
    }

    #[test]
    fn filters_by_done_status() {
        let mut collection = CollectionFixture::new().with_notes(3).collection;
        collection.mark_done(2);

        let done = run(
            &collection,
            NoteFilter {
                status: NoteStatusFilter::Done,
            },
        )
        .unwrap();
        assert_eq!(done.listed_notes.len(), 1);
        assert_eq!(done.listed_notes[0].id, 2);

        let remaining = run(
            &collection,
            NoteFilter {
                status: NoteStatusFilter::NotDone,
            },
        )
        .unwrap();
        let ids: Vec<u64> = remaining.listed_notes.iter().map(|n| n.id).collect();
        assert_eq!(ids, vec![1, 3]);
    }

    #[test]
    fn empty_collection_lists_nothing() {
        let collection = NoteCollection::new();
        let result = run(&collection, NoteFilter::default()).unwrap();
        assert!(result.listed_notes.is_empty());
        assert!(result.messages[0].content.contains("0 notes, 0 remaining"));
    }
}
