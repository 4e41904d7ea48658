//! Shared constants: default element ids, storage key, and user-facing text.

// ── Gallery anchors ─────────────────────────────────────────────

pub const MODAL_ID: &str = "place-modal";
pub const MODAL_IMAGE_ID: &str = "modal-img";
pub const MODAL_TITLE_ID: &str = "modal-title";
pub const MODAL_DESC_ID: &str = "modal-desc";
pub const MODAL_CLOSE_ID: &str = "modal-close";
pub const MODAL_PREV_ID: &str = "modal-prev";
pub const MODAL_NEXT_ID: &str = "modal-next";
pub const MODAL_COUNTER_ID: &str = "modal-counter";

/// CSS selector matching every place card on the page.
pub const CARD_SELECTOR: &str = ".place-card";

/// Card attribute holding comma-separated image URLs.
pub const CARD_IMAGES_ATTR: &str = "data-images";

/// Card attribute holding comma-separated per-image captions.
pub const CARD_CAPTIONS_ATTR: &str = "data-image-captions";

// ── Suggestion anchors ──────────────────────────────────────────

pub const FORM_ID: &str = "suggest-form";
pub const LIST_ID: &str = "submissions";
pub const MESSAGE_ID: &str = "form-message";
pub const YEAR_ID: &str = "year";

/// `localStorage` key holding the JSON submission array.
pub const STORAGE_KEY: &str = "suggestions";

// ── Messages ────────────────────────────────────────────────────

pub const PLACEHOLDER_MESSAGE: &str = "No suggestions yet.";
pub const VALIDATION_MESSAGE: &str = "Please fill out required fields.";
pub const SUCCESS_MESSAGE: &str = "Thanks! Your suggestion was added.";

// ── Keys ────────────────────────────────────────────────────────

pub const KEY_ESCAPE: &str = "Escape";
pub const KEY_ARROW_LEFT: &str = "ArrowLeft";
pub const KEY_ARROW_RIGHT: &str = "ArrowRight";
pub const KEY_ENTER: &str = "Enter";
