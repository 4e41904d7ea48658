//! Page behaviors for the wanderlust travel site.
//!
//! This crate is compiled to WebAssembly and attached to a static, already
//! rendered page. It owns two independent behaviors: the place-card gallery
//! modal and the suggestion board backed by `localStorage`. Both are modeled
//! as plain state machines that return actions for the host to apply, so the
//! logic runs and tests natively without a browser.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`gallery`] | Place cards and the [`gallery::modal::ModalCore`] carousel |
//! | [`suggestions`] | Submissions, storage, and the [`suggestions::form::SuggestionCore`] controller |
//! | [`config`] | Element anchors and storage key for a page |
//! | [`error`] | Storage error type |
//! | [`consts`] | Default ids, fixed messages, and key names |
//! | `dom` | web-sys adapters that apply actions to real elements (`browser` feature) |
//! | `page` | WASM entry point and event wiring (`browser` feature) |

pub mod config;
pub mod consts;
pub mod error;
pub mod gallery;
pub mod suggestions;

#[cfg(feature = "browser")]
pub mod dom;
#[cfg(feature = "browser")]
pub mod page;
