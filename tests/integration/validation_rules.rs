//! Validation rule set and checklist behavior

use super::test_utils::valid_record;
use profile_shell::profile::{
    checklist_state, validate, validate_field, FieldErrorKind, ProfileField, RequirementKey,
};

#[test]
fn strong_password_has_no_password_error() {
    let mut record = valid_record();
    record.password = "Password1!".to_string();
    assert!(!validate(&record).contains(ProfileField::Password));
}

#[test]
fn short_passwords_always_fail() {
    let mut record = valid_record();
    for password in ["a", "Ab1!", "Abcde1!"] {
        record.password = password.to_string();
        assert_eq!(
            validate(&record).get(ProfileField::Password).unwrap().kind,
            FieldErrorKind::Requirement(RequirementKey::Min)
        );
    }
}

#[test]
fn checklist_for_strong_and_lowercase_passwords() {
    assert!(checklist_state("Password1!").iter().all(|(_, ok)| *ok));

    let lower: Vec<_> = checklist_state("password")
        .into_iter()
        .filter(|(req, _)| req.key != RequirementKey::Min)
        .filter(|(_, ok)| *ok)
        .map(|(req, _)| req.key)
        .collect();
    assert_eq!(lower, vec![RequirementKey::Lowercase]);
}

#[test]
fn validate_field_matches_validate() {
    let mut record = valid_record();
    record.email = "nope".to_string();
    record.bio = String::new();
    let all = validate(&record);
    for field in ProfileField::ALL {
        assert_eq!(validate_field(field, &record).as_ref(), all.get(field));
    }
}
