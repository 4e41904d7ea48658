use super::*;

#[test]
fn codes_are_distinct_per_variant() {
    let corrupt = serde_json::from_str::<Vec<u8>>("{").unwrap_err();
    let errors = [
        StoreError::Unavailable("no window".to_owned()),
        StoreError::Read("denied".to_owned()),
        StoreError::Write("quota".to_owned()),
        StoreError::Corrupt(corrupt),
    ];
    let codes: Vec<&str> = errors.iter().map(StoreError::code).collect();
    assert_eq!(codes, ["E_STORE_UNAVAILABLE", "E_STORE_READ", "E_STORE_WRITE", "E_STORE_CORRUPT"]);
}

#[test]
fn display_includes_detail() {
    let err = StoreError::Write("quota exceeded".to_owned());
    assert_eq!(err.to_string(), "storage write failed: quota exceeded");
}

#[test]
fn serde_error_converts_to_corrupt() {
    fn parse(raw: &str) -> Result<Vec<u8>, StoreError> {
        Ok(serde_json::from_str(raw)?)
    }
    assert!(matches!(parse("not json"), Err(StoreError::Corrupt(_))));
}

#[test]
fn validation_error_names_field() {
    let err = ValidationError::MissingField("destination");
    assert_eq!(err.to_string(), "required field is empty: destination");
}
