//! `localStorage` as a [`KeyValueStore`].

use web_sys::Storage;

use crate::error::StoreError;
use crate::suggestions::store::KeyValueStore;

/// The window's `localStorage`, when the browser grants one.
///
/// Private browsing modes may refuse storage; every call then fails with
/// [`StoreError::Unavailable`] and the controller carries on in memory.
pub struct LocalStorage {
    storage: Option<Storage>,
}

impl LocalStorage {
    #[must_use]
    pub fn open() -> Self {
        let storage = match web_sys::window().map(|w| w.local_storage()) {
            Some(Ok(storage)) => storage,
            Some(Err(e)) => {
                log::warn!("localStorage refused: {e:?}");
                None
            }
            None => None,
        };
        Self { storage }
    }

    fn storage(&self) -> Result<&Storage, StoreError> {
        self.storage
            .as_ref()
            .ok_or_else(|| StoreError::Unavailable("localStorage is not available".to_owned()))
    }
}

impl KeyValueStore for LocalStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>, StoreError> {
        self.storage()?
            .get_item(key)
            .map_err(|e| StoreError::Read(format!("{e:?}")))
    }

    fn set_item(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        self.storage()?
            .set_item(key, value)
            .map_err(|e| StoreError::Write(format!("{e:?}")))
    }
}
