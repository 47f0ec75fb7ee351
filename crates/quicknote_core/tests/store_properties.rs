use proptest::prelude::*;
use quicknote_core::{InMemoryNoteRepository, NoteService};
use std::collections::BTreeSet;

fn seeded(count: usize) -> NoteService<InMemoryNoteRepository> {
    let mut service = NoteService::new(InMemoryNoteRepository::new());
    for index in 0..count {
        service
            .create_note(format!("note {index}"), "body")
            .unwrap();
    }
    service
}

fn titles(service: &NoteService<InMemoryNoteRepository>) -> Vec<String> {
    service
        .list_notes()
        .iter()
        .map(|note| note.title.clone())
        .collect()
}

proptest! {
    #[test]
    fn creates_preserve_count_and_order(titles_in in prop::collection::vec("[a-z]{1,8}", 0..20)) {
        let mut service = NoteService::new(InMemoryNoteRepository::new());
        for title in &titles_in {
            service.create_note(title.clone(), "body").unwrap();
        }

        prop_assert_eq!(service.len(), titles_in.len());
        prop_assert_eq!(titles(&service), titles_in);
    }

    #[test]
    fn delete_at_matches_snapshot_filter(
        count in 0usize..12,
        positions in prop::collection::vec(0usize..16, 0..8),
    ) {
        let mut forward = seeded(count);
        let mut reversed = seeded(count);
        let before = titles(&forward);

        let mut reversed_positions = positions.clone();
        reversed_positions.reverse();
        forward.delete_notes_at(&positions);
        reversed.delete_notes_at(&reversed_positions);

        let doomed = positions.iter().copied().collect::<BTreeSet<_>>();
        let expected = before
            .into_iter()
            .enumerate()
            .filter(|(index, _)| !doomed.contains(index))
            .map(|(_, title)| title)
            .collect::<Vec<_>>();

        prop_assert_eq!(titles(&forward), expected.clone());
        prop_assert_eq!(titles(&reversed), expected);
    }

    #[test]
    fn blank_fields_are_always_rejected(blank in "[ \t\n]{0,6}", text in "[a-z]{1,6}") {
        let mut service = NoteService::new(InMemoryNoteRepository::new());

        prop_assert!(service.create_note(blank.clone(), text.clone()).is_err());
        prop_assert!(service.create_note(text, blank).is_err());
        prop_assert!(service.is_empty());
    }
}
