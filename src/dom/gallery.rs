//! Gallery modal elements and card reading.

use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlElement, HtmlImageElement};

use crate::config::GalleryAnchors;
use crate::consts::{CARD_CAPTIONS_ATTR, CARD_IMAGES_ATTR};
use crate::dom::{by_id, child_text, warn_on_err};
use crate::gallery::card::Card;
use crate::gallery::modal::ModalAction;

/// Read a place card's title, description, and gallery attributes.
#[must_use]
pub fn read_card(element: &Element) -> Card {
    Card::from_attributes(
        &child_text(element, "h3"),
        &child_text(element, "p"),
        element.get_attribute(CARD_IMAGES_ATTR).as_deref(),
        element.get_attribute(CARD_CAPTIONS_ATTR).as_deref(),
    )
}

/// Every element matching `selector` that is an `HtmlElement`.
#[must_use]
pub fn find_cards(document: &Document, selector: &str) -> Vec<HtmlElement> {
    let nodes = match document.query_selector_all(selector) {
        Ok(nodes) => nodes,
        Err(e) => {
            log::warn!("bad card selector {selector:?}: {e:?}");
            return Vec::new();
        }
    };
    (0..nodes.length())
        .filter_map(|i| nodes.item(i))
        .filter_map(|node| match node.dyn_into::<HtmlElement>() {
            Ok(card) => Some(card),
            Err(_) => {
                log::debug!("skipping non-HTML node matched by {selector:?}");
                None
            }
        })
        .collect()
}

/// The overlay and its parts.
pub struct ModalElements {
    pub overlay: Element,
    pub image: HtmlImageElement,
    pub title: Element,
    pub description: Element,
    pub close: HtmlElement,
    pub prev: Element,
    pub next: Element,
    pub counter: Element,
    body: Option<HtmlElement>,
}

impl ModalElements {
    /// Resolve every anchor; `None` if any is missing.
    #[must_use]
    pub fn find(document: &Document, anchors: &GalleryAnchors) -> Option<Self> {
        Some(Self {
            overlay: by_id(document, &anchors.overlay)?,
            image: by_id(document, &anchors.image)?,
            title: by_id(document, &anchors.title)?,
            description: by_id(document, &anchors.description)?,
            close: by_id(document, &anchors.close)?,
            prev: by_id(document, &anchors.prev)?,
            next: by_id(document, &anchors.next)?,
            counter: by_id(document, &anchors.counter)?,
            body: document.body(),
        })
    }

    pub fn apply(&self, actions: Vec<ModalAction<HtmlElement>>) {
        for action in actions {
            match action {
                ModalAction::SetTitle(title) => self.title.set_text_content(Some(&title)),
                ModalAction::ShowImage { src, counter, caption } => {
                    self.image.set_src(&src);
                    self.counter.set_text_content(Some(&counter));
                    self.description.set_text_content(Some(&caption));
                }
                ModalAction::SetHidden(hidden) => warn_on_err(
                    "set aria-hidden",
                    self.overlay.set_attribute("aria-hidden", if hidden { "true" } else { "false" }),
                ),
                ModalAction::LockScroll(locked) => {
                    if let Some(body) = &self.body {
                        warn_on_err(
                            "set body overflow",
                            body.style().set_property("overflow", if locked { "hidden" } else { "" }),
                        );
                    }
                }
                ModalAction::FocusClose => warn_on_err("focus close button", self.close.focus()),
                ModalAction::RestoreFocus(element) => warn_on_err("restore focus", element.focus()),
            }
        }
    }
}
