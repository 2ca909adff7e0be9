use crate::collection::NoteCollection;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::query::NoteQuery;

pub fn run(collection: &NoteCollection, query: &NoteQuery) -> Result<CmdResult> {
    let listed: Vec<_> = collection.search(query).into_iter().cloned().collect();

    let mut result = CmdResult::default();
    let message = match listed.len() {
        1 => "1 note matched".to_string(),
        n => format!("{} notes matched", n),
    };
    result.add_message(CmdMessage::info(message));
    result.listed_notes = listed;
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::collection::fixtures::CollectionFixture;

    fn sample() -> NoteCollection {
        CollectionFixture::new()
            .with_note("Complete the project", "Finish project development")
            .with_note("Prepare lunch", "Spaghetti Bolognese")
            .with_note("Clean the room", "Tidy up the entire room")
            .collection
    }

    #[test]
    fn title_filter_returns_matching_notes() {
        let collection = sample();
        let result = run(&collection, &NoteQuery::new().with_title("Prepare")).unwrap();

        assert_eq!(result.listed_notes.len(), 1);
        assert_eq!(result.listed_notes[0].title, "Prepare lunch");
        assert_eq!(result.messages[0].content, "1 note matched");
    }

    #[test]
    fn search_is_case_sensitive() {
        let collection = sample();
        let result = run(&collection, &NoteQuery::new().with_title("prepare")).unwrap();
        assert!(result.listed_notes.is_empty());
        assert_eq!(result.messages[0].content, "0 notes matched");
    }

    #[test]
    fn combined_filters_are_anded() {
        let collection = sample();
        let query = NoteQuery::new().with_title("the").with_content("room");
        let result = run(&collection, &query).unwrap();

        assert_eq!(result.listed_notes.len(), 1);
        assert_eq!(result.listed_notes[0].title, "Clean the room");
    }

    #[test]
    fn empty_query_lists_everything() {
        let collection = sample();
        let result = run(&collection, &NoteQuery::new()).unwrap();
        assert_eq!(result.listed_notes.len(), 3);
        assert_eq!(result.messages[0].content, "3 notes matched");
    }
}
