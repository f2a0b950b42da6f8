//! Edit session transitions observed through the public API

use super::test_utils::{editing, set_all, valid_record};
use profile_shell::error::ProfileError;
use profile_shell::profile::{
    EditSession, FieldErrorKind, Mode, ProfileField, ProfileRecord, SubmitOutcome,
};

#[test]
fn cancel_restores_committed_after_any_updates() {
    let original = valid_record();
    let mut session = editing(original.clone());
    session.update_field(ProfileField::Name, "").unwrap();
    session.update_field(ProfileField::Email, "not-an-email").unwrap();
    session.update_field(ProfileField::Password, "x").unwrap();
    session.update_field(ProfileField::Bio, "changed").unwrap();

    session.cancel().unwrap();

    assert_eq!(session.mode(), Mode::Viewing);
    assert_eq!(session.committed(), &original);
    assert!(session.draft().is_none());
}

#[test]
fn invalid_email_blocks_commit() {
    let original = valid_record();
    let mut session = editing(original.clone());
    session
        .update_field(ProfileField::Email, "not-an-email")
        .unwrap();

    let outcome = session.submit().unwrap();

    assert!(!outcome.is_committed());
    assert_eq!(session.mode(), Mode::Editing);
    assert_eq!(session.committed(), &original);
    assert_eq!(
        session.errors().get(ProfileField::Email).unwrap().kind,
        FieldErrorKind::InvalidFormat
    );
    assert!(session.visible_errors().contains(ProfileField::Email));
}

#[test]
fn valid_submit_commits_exact_draft() {
    let mut session = editing(ProfileRecord::default());
    let next = ProfileRecord::new("Linus", "linus@example.org", "Kernel#2024", "Git and kernels");
    set_all(&mut session, &next);

    assert_eq!(session.submit().unwrap(), SubmitOutcome::Committed);
    assert_eq!(session.mode(), Mode::Viewing);
    assert_eq!(session.committed(), &next);
    assert_eq!(session.current(), &next);
}

#[test]
fn rejected_submit_then_fix_then_commit() {
    let mut session = editing(valid_record());
    session.update_field(ProfileField::Password, "weak").unwrap();
    match session.submit().unwrap() {
        SubmitOutcome::Rejected(errors) => {
            assert_eq!(
                errors.get(ProfileField::Password).unwrap().message,
                "Password must be at least 8 characters"
            );
        }
        SubmitOutcome::Committed => panic!("weak password must not commit"),
    }

    session.update_field(ProfileField::Password, "Stronger#1").unwrap();
    assert!(session.errors().is_empty());
    assert!(session.submit().unwrap().is_committed());
    assert_eq!(session.committed().password, "Stronger#1");
}

#[test]
fn submit_while_viewing_is_invalid_transition() {
    let mut session = EditSession::new(valid_record());
    let err = session.submit().unwrap_err();
    assert_eq!(
        err,
        ProfileError::InvalidStateTransition {
            operation: "submit",
            mode: Mode::Viewing,
        }
    );
    assert_eq!(
        err.to_string(),
        "Invalid state transition: cannot submit while viewing"
    );
}

#[test]
fn cancel_and_update_while_viewing_are_invalid() {
    let mut session = EditSession::new(valid_record());
    assert!(matches!(
        session.cancel(),
        Err(ProfileError::InvalidStateTransition { .. })
    ));
    assert!(matches!(
        session.update_field(ProfileField::Bio, "x"),
        Err(ProfileError::InvalidStateTransition { .. })
    ));
}

#[test]
fn draft_present_iff_editing() {
    let mut session = EditSession::new(valid_record());
    assert_eq!(session.draft().is_some(), session.mode() == Mode::Editing);
    session.begin_edit().unwrap();
    assert_eq!(session.draft().is_some(), session.mode() == Mode::Editing);
    session.submit().unwrap();
    assert_eq!(session.draft().is_some(), session.mode() == Mode::Editing);
}
