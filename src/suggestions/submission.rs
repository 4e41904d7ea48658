//! Submission record and raw form input.

#[cfg(test)]
#[path = "submission_test.rs"]
mod submission_test;

use serde::{Deserialize, Deserializer, Serialize};

use crate::error::ValidationError;

/// One persisted travel suggestion.
///
/// Field names are the storage format: `{name, email, destination,
/// timeframe, notes, created}` with `created` in epoch milliseconds.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Submission {
    pub name: String,
    pub email: String,
    pub destination: String,
    pub timeframe: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub notes: String,
    pub created: i64,
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<String>::deserialize(deserializer).map(Option::unwrap_or_default)
}

/// Raw values read from the suggestion form, untrimmed.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FormFields {
    pub name: String,
    pub email: String,
    pub destination: String,
    /// Comes from a `<select>`, so it is taken verbatim.
    pub timeframe: String,
    pub notes: String,
}

impl FormFields {
    /// Trim and presence-check the fields, stamping the result with `created`.
    ///
    /// Name, email, and destination are required. The email is only checked
    /// for presence.
    pub fn into_submission(self, created: i64) -> Result<Submission, ValidationError> {
        let name = required("name", &self.name)?;
        let email = required("email", &self.email)?;
        let destination = required("destination", &self.destination)?;
        Ok(Submission {
            name,
            email,
            destination,
            timeframe: self.timeframe,
            notes: self.notes.trim().to_owned(),
            created,
        })
    }
}

fn required(field: &'static str, raw: &str) -> Result<String, ValidationError> {
    let value = raw.trim();
    if value.is_empty() {
        return Err(ValidationError::MissingField(field));
    }
    Ok(value.to_owned())
}
