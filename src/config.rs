//! Page configuration: which elements the behaviors attach to.
//!
//! DESIGN
//! ======
//! The page is static markup, so there is nothing to read from the
//! environment. Defaults mirror the shipped markup; `data-storage-key` and
//! `data-log-level` on `<body>` may override the two settings that vary
//! between deployments.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use crate::consts;

/// Element ids used by the gallery modal.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GalleryAnchors {
    pub overlay: String,
    pub image: String,
    pub title: String,
    pub description: String,
    pub close: String,
    pub prev: String,
    pub next: String,
    pub counter: String,
    /// Selector matching place cards.
    pub cards: String,
}

impl Default for GalleryAnchors {
    fn default() -> Self {
        Self {
            overlay: consts::MODAL_ID.to_owned(),
            image: consts::MODAL_IMAGE_ID.to_owned(),
            title: consts::MODAL_TITLE_ID.to_owned(),
            description: consts::MODAL_DESC_ID.to_owned(),
            close: consts::MODAL_CLOSE_ID.to_owned(),
            prev: consts::MODAL_PREV_ID.to_owned(),
            next: consts::MODAL_NEXT_ID.to_owned(),
            counter: consts::MODAL_COUNTER_ID.to_owned(),
            cards: consts::CARD_SELECTOR.to_owned(),
        }
    }
}

/// Element ids and storage key used by the suggestion board.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SuggestionAnchors {
    pub form: String,
    pub list: String,
    pub message: String,
    pub storage_key: String,
}

impl Default for SuggestionAnchors {
    fn default() -> Self {
        Self {
            form: consts::FORM_ID.to_owned(),
            list: consts::LIST_ID.to_owned(),
            message: consts::MESSAGE_ID.to_owned(),
            storage_key: consts::STORAGE_KEY.to_owned(),
        }
    }
}

/// Everything the page entry point needs to wire itself up.
#[derive(Clone, Debug)]
pub struct PageConfig {
    pub gallery: GalleryAnchors,
    pub suggestions: SuggestionAnchors,
    /// Element receiving the current year, if present.
    pub year: String,
    pub log_level: log::Level,
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            gallery: GalleryAnchors::default(),
            suggestions: SuggestionAnchors::default(),
            year: consts::YEAR_ID.to_owned(),
            log_level: default_log_level(),
        }
    }
}

impl PageConfig {
    /// Override the storage key, e.g. to keep two boards apart on one origin.
    #[must_use]
    pub fn with_storage_key(mut self, key: impl Into<String>) -> Self {
        self.suggestions.storage_key = key.into();
        self
    }

    #[must_use]
    pub fn with_log_level(mut self, level: log::Level) -> Self {
        self.log_level = level;
        self
    }

    /// Apply overrides read from `data-storage-key` / `data-log-level` on
    /// `<body>`. Blank or unparseable values keep the current setting.
    #[must_use]
    pub fn with_overrides(mut self, storage_key: Option<&str>, log_level: Option<&str>) -> Self {
        if let Some(key) = storage_key.map(str::trim).filter(|key| !key.is_empty()) {
            self = self.with_storage_key(key);
        }
        if let Some(Ok(level)) = log_level.map(|raw| raw.trim().parse::<log::Level>()) {
            self = self.with_log_level(level);
        }
        self
    }
}

fn default_log_level() -> log::Level {
    if cfg!(debug_assertions) { log::Level::Debug } else { log::Level::Info }
}
