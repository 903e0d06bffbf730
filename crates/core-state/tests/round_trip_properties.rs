//! Property-based checks for the apply/revert laws.

use core_state::{EditCommand, EditorState};
use core_text::Buffer;
use proptest::prelude::*;

fn content_and_insert() -> impl Strategy<Value = (String, usize, String)> {
    ("\\PC{0,24}", "\\PC{0,8}").prop_flat_map(|(content, text)| {
        let len = content.chars().count();
        (Just(content), 0..=len, Just(text))
    })
}

fn content_and_range() -> impl Strategy<Value = (String, usize, usize)> {
    "\\PC{0,24}".prop_flat_map(|content| {
        let len = content.chars().count();
        (Just(content), 0..=len).prop_flat_map(move |(content, pos)| {
            (Just(content), Just(pos), 0..=(len - pos))
        })
    })
}

proptest! {
    #[test]
    fn insert_revert_restores_content((content, pos, text) in content_and_insert()) {
        let mut b = Buffer::from_str("p", &content);
        let cmd = EditCommand::insert(text.clone(), pos);
        cmd.apply(&mut b).unwrap();
        prop_assert_eq!(b.len_chars(), content.chars().count() + text.chars().count());
        cmd.revert(&mut b).unwrap();
        prop_assert_eq!(b.text(), content);
    }

    #[test]
    fn delete_revert_restores_content((content, pos, len) in content_and_range()) {
        let mut b = Buffer::from_str("p", &content);
        let cmd = EditCommand::delete(&b, pos, len).unwrap();
        cmd.apply(&mut b).unwrap();
        prop_assert_eq!(b.len_chars(), content.chars().count() - len);
        cmd.revert(&mut b).unwrap();
        prop_assert_eq!(b.text(), content);
    }

    #[test]
    fn undo_all_returns_to_start(edits in prop::collection::vec(("\\PC{0,4}", any::<prop::sample::Index>()), 0..12)) {
        let mut state = EditorState::new(Buffer::from_str("p", "seed"));
        for (text, idx) in &edits {
            let pos = idx.index(state.buffer().len_chars() + 1);
            state.insert(text.clone(), pos).unwrap();
        }
        while state.undo_last().unwrap() {}
        prop_assert_eq!(state.text(), "seed");
    }
}
