//! Edit session invariants under arbitrary update sequences

use profile_shell::profile::{EditSession, Mode, ProfileField, ProfileRecord};
use proptest::prelude::*;

fn updates() -> impl Strategy<Value = Vec<(ProfileField, String)>> {
    prop::collection::vec(
        (prop::sample::select(ProfileField::ALL.to_vec()), ".{0,16}"),
        0..12,
    )
}

proptest! {
    #[test]
    fn cancel_never_changes_committed(changes in updates()) {
        let original = ProfileRecord::default();
        let mut session = EditSession::new(original.clone());
        session.begin_edit().unwrap();
        for (field, value) in changes {
            session.update_field(field, value).unwrap();
            prop_assert_eq!(session.mode(), Mode::Editing);
        }
        session.cancel().unwrap();
        prop_assert_eq!(session.committed(), &original);
        prop_assert!(session.draft().is_none());
    }

    #[test]
    fn submit_commits_iff_draft_is_valid(changes in updates()) {
        let original = ProfileRecord::default();
        let mut session = EditSession::new(original.clone());
        session.begin_edit().unwrap();
        for (field, value) in changes {
            session.update_field(field, value).unwrap();
        }
        let draft = session.draft().unwrap().clone();
        let was_valid = session.errors().is_empty();

        let committed = session.submit().unwrap().is_committed();
        prop_assert_eq!(committed, was_valid);
        if committed {
            prop_assert_eq!(session.mode(), Mode::Viewing);
            prop_assert_eq!(session.committed(), &draft);
        } else {
            prop_assert_eq!(session.mode(), Mode::Editing);
            prop_assert_eq!(session.committed(), &original);
            prop_assert_eq!(session.draft(), Some(&draft));
        }
    }
}
