use serde_json::json;

use super::*;

// =============================================================
// Helpers
// =============================================================

fn ann() -> FormFields {
    FormFields {
        name: "  Ann ".to_owned(),
        email: " a@x.com".to_owned(),
        destination: "Kyoto  ".to_owned(),
        timeframe: "Summer".to_owned(),
        notes: "  ".to_owned(),
    }
}

// =============================================================
// FormFields::into_submission
// =============================================================

#[test]
fn into_submission_trims_text_fields() {
    let submission = ann().into_submission(1_700_000_000_000).unwrap();
    assert_eq!(submission.name, "Ann");
    assert_eq!(submission.email, "a@x.com");
    assert_eq!(submission.destination, "Kyoto");
    assert_eq!(submission.notes, "");
    assert_eq!(submission.created, 1_700_000_000_000);
}

#[test]
fn into_submission_keeps_timeframe_verbatim() {
    let fields = FormFields { timeframe: " Late spring ".to_owned(), ..ann() };
    assert_eq!(fields.into_submission(0).unwrap().timeframe, " Late spring ");
}

#[test]
fn into_submission_rejects_blank_required_fields() {
    let blank_name = FormFields { name: "   ".to_owned(), ..ann() };
    assert_eq!(blank_name.into_submission(0), Err(ValidationError::MissingField("name")));

    let blank_email = FormFields { email: String::new(), ..ann() };
    assert_eq!(blank_email.into_submission(0), Err(ValidationError::MissingField("email")));

    let blank_destination = FormFields { destination: "\t".to_owned(), ..ann() };
    assert_eq!(blank_destination.into_submission(0), Err(ValidationError::MissingField("destination")));
}

#[test]
fn into_submission_does_not_check_email_shape() {
    let fields = FormFields { email: "not-an-email".to_owned(), ..ann() };
    assert!(fields.into_submission(0).is_ok());
}

#[test]
fn into_submission_allows_blank_timeframe() {
    let fields = FormFields { timeframe: String::new(), ..ann() };
    assert!(fields.into_submission(0).is_ok());
}

// =============================================================
// Serialization
// =============================================================

#[test]
fn serializes_with_storage_field_names() {
    let submission = ann().into_submission(42).unwrap();
    let value = serde_json::to_value(&submission).unwrap();
    assert_eq!(
        value,
        json!({
            "name": "Ann",
            "email": "a@x.com",
            "destination": "Kyoto",
            "timeframe": "Summer",
            "notes": "",
            "created": 42,
        })
    );
}

#[test]
fn deserializes_missing_or_null_notes_as_empty() {
    let missing: Submission = serde_json::from_value(json!({
        "name": "Bo", "email": "b@x.com", "destination": "Oslo", "timeframe": "Winter", "created": 1
    }))
    .unwrap();
    assert_eq!(missing.notes, "");

    let null: Submission = serde_json::from_value(json!({
        "name": "Bo", "email": "b@x.com", "destination": "Oslo", "timeframe": "Winter", "notes": null, "created": 1
    }))
    .unwrap();
    assert_eq!(null.notes, "");
}
