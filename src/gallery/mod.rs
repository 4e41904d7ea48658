//! Place-card gallery: card data and the modal carousel state machine.
//!
//! ARCHITECTURE
//! ============
//! `card` turns the raw strings a card carries in the markup into a [`card::Card`].
//! `modal` owns the open/closed carousel and emits [`modal::ModalAction`]s;
//! applying those to elements is the `dom` module's job.

pub mod card;
pub mod modal;
