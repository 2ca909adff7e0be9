//! End-to-end walk through a full note-management session, driven through
//! the API facade the way a front-end would use it.

use notz::api::{NoteFilter, NotesApi};
use notz::model::NoteStatus;
use notz::query::{NoteQuery, SortKey};

fn pause() {
    // Space creations/edits out so timestamps are strictly ordered.
    std::thread::sleep(std::time::Duration::from_millis(5));
}

#[test]
fn full_note_management_session() {
    let mut api = NotesApi::new();
    assert_eq!(api.note_count(), 0);

    api.create_note("Complete the project", "Finish project development", false)
        .unwrap();
    pause();
    api.create_note("Prepare lunch", "Spaghetti Bolognese", true)
        .unwrap();
    pause();
    api.create_note("Clean the room", "Tidy up the entire room", false)
        .unwrap();

    let ids: Vec<u64> = api
        .collection()
        .all_notes()
        .iter()
        .map(|n| n.id)
        .collect();
    assert_eq!(ids, vec![1, 2, 3]);
    assert_eq!(api.note_count(), 3);

    // Complete the first note.
    api.mark_done(1).unwrap();
    assert_eq!(api.note(1).unwrap().status, NoteStatus::Done);
    assert_eq!(api.remaining_count(), 2);

    // Edit the guarded note: a confirmation warning is surfaced, but the
    // edit goes through (the flag is a placeholder signal only).
    let before_edit = api.note(2).unwrap().updated_at;
    pause();
    let result = api
        .update_note(2, "Prepare dinner", "Pasta with tuna")
        .unwrap();
    assert!(result
        .messages
        .iter()
        .any(|m| m.content.contains("confirmation required")));

    let edited = api.note(2).unwrap();
    assert_eq!(edited.title, "Prepare dinner");
    assert_eq!(edited.content, "Pasta with tuna");
    assert!(edited.updated_at > before_edit);
    assert!(edited.updated_at >= edited.created_at);

    // Delete the third note; its id is gone for good.
    api.delete_note(3).unwrap();
    assert_eq!(api.note_count(), 2);
    assert!(api.note(3).is_none());

    // Search by title substring finds the renamed note.
    let hits = api
        .search_notes(&NoteQuery::new().with_title("Prepare"))
        .unwrap();
    assert_eq!(hits.listed_notes.len(), 1);
    assert_eq!(hits.listed_notes[0].id, 2);
    assert_eq!(hits.listed_notes[0].title, "Prepare dinner");

    // Sort by status: labels are compared as plain strings, so "Done"
    // (note 1) leads "Not Done" (note 2). Kept as-is from the historical
    // behavior — see the design notes — not a semantic grouping.
    api.sort_notes(SortKey::Status).unwrap();
    let ids: Vec<u64> = api
        .collection()
        .all_notes()
        .iter()
        .map(|n| n.id)
        .collect();
    assert_eq!(ids, vec![1, 2]);

    // Sort by creation date restores creation order.
    let sorted = api.sort_notes_by("created").unwrap();
    let ids: Vec<u64> = sorted.listed_notes.iter().map(|n| n.id).collect();
    assert_eq!(ids, vec![1, 2]);

    // The full listing reflects every mutation.
    let listing = api.get_notes(NoteFilter::default()).unwrap();
    assert_eq!(listing.listed_notes.len(), 2);
    assert!(listing.messages[0].content.contains("2 notes, 1 remaining"));
}

#[test]
fn blank_input_and_missing_ids_never_error() {
    let mut api = NotesApi::new();

    api.create_note("   ", "Body", false).unwrap();
    api.create_note("Title", "", false).unwrap();
    assert_eq!(api.note_count(), 0);

    // All of these are quiet no-ops, not errors.
    api.delete_note(1).unwrap();
    api.update_note(1, "New", "Body").unwrap();
    api.mark_done(1).unwrap();
    assert_eq!(api.note_count(), 0);
    assert!(api.note(1).is_none());
}
