//! Gallery modal state machine.
//!
//! The modal is either `Closed` or `Open` on one card's carousel. Every
//! command returns the [`ModalAction`]s the host must apply to the overlay;
//! the core never touches the DOM itself, so navigation and focus bookkeeping
//! are tested natively.
//!
//! `F` is an opaque handle to the element that had focus when the modal
//! opened. The core only stores it and hands it back on close.

#[cfg(test)]
#[path = "modal_test.rs"]
mod modal_test;

use crate::consts::{KEY_ARROW_LEFT, KEY_ARROW_RIGHT, KEY_ESCAPE};
use crate::gallery::card::Card;

/// UI side effects for the host to apply, in order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ModalAction<F> {
    SetTitle(String),
    /// Swap the displayed image, counter text, and caption.
    ShowImage { src: String, counter: String, caption: String },
    /// `aria-hidden` on the overlay.
    SetHidden(bool),
    /// Suppress page scrolling while the modal is open.
    LockScroll(bool),
    /// Move keyboard focus to the close control.
    FocusClose,
    RestoreFocus(F),
}

#[derive(Debug, Clone)]
struct Carousel<F> {
    card: Card,
    index: usize,
    return_focus: Option<F>,
}

#[derive(Debug, Clone)]
enum ModalState<F> {
    Closed,
    Open(Carousel<F>),
}

/// Carousel state for the place modal.
#[derive(Debug, Clone)]
pub struct ModalCore<F> {
    state: ModalState<F>,
}

impl<F> Default for ModalCore<F> {
    fn default() -> Self {
        Self { state: ModalState::Closed }
    }
}

impl<F> ModalCore<F> {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    // --- Commands ---

    /// Open the modal on `card`, replacing any carousel already showing.
    ///
    /// Cards without images are inert: no actions, state unchanged.
    pub fn open(&mut self, card: Card, trigger: Option<F>) -> Vec<ModalAction<F>> {
        if !card.is_interactive() {
            log::debug!("place card {:?} has no images; ignoring open", card.title);
            return Vec::new();
        }
        let title = card.title.clone();
        self.state = ModalState::Open(Carousel { card, index: 0, return_focus: trigger });

        let mut actions = vec![ModalAction::SetTitle(title)];
        actions.extend(self.show_image(0));
        actions.push(ModalAction::SetHidden(false));
        actions.push(ModalAction::LockScroll(true));
        actions.push(ModalAction::FocusClose);
        actions
    }

    /// Show image `index`, wrapped cyclically into range. Negative indexes
    /// count back from the end.
    pub fn show_image(&mut self, index: i64) -> Vec<ModalAction<F>> {
        let len = i64::try_from(self.len()).unwrap_or(i64::MAX);
        if len == 0 {
            return Vec::new();
        }
        let wrapped = usize::try_from(index.rem_euclid(len)).unwrap_or(0);
        self.display(wrapped)
    }

    pub fn next(&mut self) -> Vec<ModalAction<F>> {
        match self.index() {
            Some(index) => self.display((index + 1) % self.len()),
            None => Vec::new(),
        }
    }

    pub fn prev(&mut self) -> Vec<ModalAction<F>> {
        match self.index() {
            Some(index) => self.display((index + self.len() - 1) % self.len()),
            None => Vec::new(),
        }
    }

    /// Close the modal and hand focus back to whatever opened it.
    pub fn close(&mut self) -> Vec<ModalAction<F>> {
        let ModalState::Open(carousel) = std::mem::replace(&mut self.state, ModalState::Closed) else {
            return Vec::new();
        };
        let mut actions = vec![ModalAction::SetHidden(true), ModalAction::LockScroll(false)];
        if let Some(focus) = carousel.return_focus {
            actions.push(ModalAction::RestoreFocus(focus));
        }
        actions
    }

    // --- Input events ---

    /// Document-level keydown. Only acts while open.
    pub fn on_key(&mut self, key: &str) -> Vec<ModalAction<F>> {
        if !self.is_open() {
            return Vec::new();
        }
        match key {
            KEY_ESCAPE => self.close(),
            KEY_ARROW_LEFT => self.prev(),
            KEY_ARROW_RIGHT => self.next(),
            _ => Vec::new(),
        }
    }

    /// Click on the overlay. Clicks that land on the modal content (rather
    /// than the backdrop itself) are ignored.
    pub fn on_overlay_click(&mut self, target_is_backdrop: bool) -> Vec<ModalAction<F>> {
        if target_is_backdrop { self.close() } else { Vec::new() }
    }

    // --- Queries ---

    #[must_use]
    pub fn is_open(&self) -> bool {
        matches!(self.state, ModalState::Open(_))
    }

    /// Current image index, if open.
    #[must_use]
    pub fn index(&self) -> Option<usize> {
        match &self.state {
            ModalState::Open(carousel) => Some(carousel.index),
            ModalState::Closed => None,
        }
    }

    /// Image count of the open card; zero when closed.
    #[must_use]
    pub fn len(&self) -> usize {
        match &self.state {
            ModalState::Open(carousel) => carousel.card.len(),
            ModalState::Closed => 0,
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Move the carousel to an in-range `index` and describe the new frame.
    fn display(&mut self, index: usize) -> Vec<ModalAction<F>> {
        let ModalState::Open(carousel) = &mut self.state else {
            return Vec::new();
        };
        let card = &carousel.card;
        let Some(src) = card.images.get(index) else {
            return Vec::new();
        };
        carousel.index = index;
        vec![ModalAction::ShowImage {
            src: src.clone(),
            counter: format!("{} / {}", index + 1, card.len()),
            caption: card.caption_at(index).to_owned(),
        }]
    }
}
