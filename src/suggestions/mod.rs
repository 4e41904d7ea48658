//! Suggestion board: user-submitted travel suggestions kept in `localStorage`.
//!
//! DESIGN
//! ======
//! The persisted JSON array is an append-only log, oldest first. The
//! controller loads it once, then only ever appends and rewrites the whole
//! array; it never re-reads storage. Rendering always shows newest first.

pub mod form;
pub mod store;
pub mod submission;
pub mod view;
