//! Validation is pure, and each rule is independent of the other fields

use profile_shell::profile::{
    checklist_state, validate, FieldErrorKind, ProfileField, ProfileRecord, RequirementKey,
};
use proptest::prelude::*;

fn valid_record() -> ProfileRecord {
    ProfileRecord::new("Jane Doe", "jane.doe@example.com", "Password1!", "Writes Rust")
}

fn any_field() -> impl Strategy<Value = ProfileField> {
    prop::sample::select(ProfileField::ALL.to_vec())
}

fn any_record() -> impl Strategy<Value = ProfileRecord> {
    (".{0,12}", ".{0,20}", ".{0,16}", ".{0,12}")
        .prop_map(|(name, email, password, bio)| ProfileRecord::new(name, email, password, bio))
}

proptest! {
    #[test]
    fn empty_field_is_required_for_exactly_that_field(field in any_field()) {
        let mut record = valid_record();
        record.set(field, "");
        let errors = validate(&record);
        prop_assert_eq!(errors.fields().collect::<Vec<_>>(), vec![field]);
        prop_assert_eq!(errors.get(field).unwrap().kind, FieldErrorKind::Required);
    }

    #[test]
    fn passwords_shorter_than_eight_fail(password in ".{1,7}") {
        let mut record = valid_record();
        record.password = password;
        let errors = validate(&record);
        prop_assert_eq!(
            errors.get(ProfileField::Password).map(|e| e.kind),
            Some(FieldErrorKind::Requirement(RequirementKey::Min))
        );
    }

    #[test]
    fn validate_is_deterministic(record in any_record()) {
        prop_assert_eq!(validate(&record), validate(&record.clone()));
    }

    #[test]
    fn password_error_agrees_with_checklist(password in ".{0,16}") {
        let mut record = valid_record();
        record.password = password.clone();
        let all_satisfied = checklist_state(&password).iter().all(|(_, ok)| *ok);
        let has_error = validate(&record).contains(ProfileField::Password);
        prop_assert_eq!(all_satisfied, !has_error);
    }
}
