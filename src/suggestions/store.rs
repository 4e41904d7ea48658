//! Key-value persistence for the submission log.
//!
//! SYSTEM CONTEXT
//! ==============
//! In the browser the store is `localStorage` (`dom::storage::LocalStorage`);
//! tests use [`MemoryStore`]. [`SubmissionLog`] layers the JSON format on top
//! of either.

#[cfg(test)]
#[path = "store_test.rs"]
mod store_test;

use std::collections::HashMap;

use crate::error::StoreError;
use crate::suggestions::submission::Submission;

/// String key-value storage with the `localStorage` read/write contract.
pub trait KeyValueStore {
    /// Value for `key`, or `None` when nothing is stored.
    fn get_item(&self, key: &str) -> Result<Option<String>, StoreError>;

    /// Store `value` under `key`, replacing any previous value.
    fn set_item(&mut self, key: &str, value: &str) -> Result<(), StoreError>;
}

/// In-process store used by tests and non-browser hosts.
#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    items: HashMap<String, String>,
    read_only: bool,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed `key` with a raw value.
    #[must_use]
    pub fn with_item(mut self, key: &str, value: &str) -> Self {
        self.items.insert(key.to_owned(), value.to_owned());
        self
    }

    /// Reject every write, like a full quota.
    #[must_use]
    pub fn read_only(mut self) -> Self {
        self.read_only = true;
        self
    }

    /// Raw value for `key`.
    #[cfg(test)]
    #[must_use]
    pub(crate) fn raw(&self, key: &str) -> Option<&str> {
        self.items.get(key).map(String::as_str)
    }
}

impl KeyValueStore for MemoryStore {
    fn get_item(&self, key: &str) -> Result<Option<String>, StoreError> {
        Ok(self.items.get(key).cloned())
    }

    fn set_item(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        if self.read_only {
            return Err(StoreError::Write(format!("{key} is read-only")));
        }
        self.items.insert(key.to_owned(), value.to_owned());
        Ok(())
    }
}

/// The submission list stored as one JSON array under a single key.
#[derive(Clone, Debug)]
pub struct SubmissionLog<S> {
    store: S,
    key: String,
}

impl<S: KeyValueStore> SubmissionLog<S> {
    pub fn new(store: S, key: impl Into<String>) -> Self {
        Self { store, key: key.into() }
    }

    /// Read the persisted list, oldest first.
    ///
    /// An absent or empty value is an empty list. Anything else that is not a
    /// JSON array of submissions is [`StoreError::Corrupt`].
    pub fn load(&self) -> Result<Vec<Submission>, StoreError> {
        match self.store.get_item(&self.key)? {
            Some(raw) if !raw.is_empty() => Ok(serde_json::from_str(&raw)?),
            _ => Ok(Vec::new()),
        }
    }

    /// Overwrite the persisted list with `submissions`.
    pub fn save(&mut self, submissions: &[Submission]) -> Result<(), StoreError> {
        let raw = serde_json::to_string(submissions)?;
        self.store.set_item(&self.key, &raw)
    }

    #[must_use]
    pub fn key(&self) -> &str {
        &self.key
    }

    #[cfg(test)]
    #[must_use]
    pub(crate) fn store(&self) -> &S {
        &self.store
    }
}
