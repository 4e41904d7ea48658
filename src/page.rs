//! WASM entry point: logging, year stamp, and event wiring.
//!
//! ARCHITECTURE
//! ============
//! Each behavior gets one controller behind `Rc<RefCell<_>>`, shared by its
//! event closures. A handler borrows the controller, collects the actions,
//! releases the borrow, and only then applies the actions to the DOM. A
//! behavior whose anchors are missing is simply not wired.

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{Document, Event, HtmlElement, KeyboardEvent};

use crate::config::{GalleryAnchors, PageConfig, SuggestionAnchors};
use crate::consts::KEY_ENTER;
use crate::dom::gallery::{ModalElements, find_cards, read_card};
use crate::dom::storage::LocalStorage;
use crate::dom::suggestions::SuggestionElements;
use crate::dom::{listen, now_ms};
use crate::gallery::modal::{ModalAction, ModalCore};
use crate::suggestions::form::SuggestionCore;
use crate::suggestions::store::SubmissionLog;

#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();

    let Some(document) = crate::dom::document() else {
        return;
    };
    let config = read_config(&document);
    if let Err(e) = console_log::init_with_level(config.log_level) {
        web_sys::console::warn_1(&format!("logger already set: {e}").into());
    }

    stamp_year(&document, &config.year);
    setup_gallery(&document, &config.gallery);
    setup_suggestions(&document, &config.suggestions);
}

/// Defaults plus any `data-*` overrides on `<body>`.
fn read_config(document: &Document) -> PageConfig {
    let body = document.body();
    let attr = |name: &str| body.as_ref().and_then(|b| b.get_attribute(name));
    PageConfig::default().with_overrides(attr("data-storage-key").as_deref(), attr("data-log-level").as_deref())
}

fn stamp_year(document: &Document, id: &str) {
    if let Some(element) = document.get_element_by_id(id) {
        element.set_text_content(Some(&crate::dom::current_year().to_string()));
    }
}

// =============================================================
// Gallery
// =============================================================

struct GalleryHost {
    elements: ModalElements,
    modal: RefCell<ModalCore<HtmlElement>>,
}

impl GalleryHost {
    fn run<C>(&self, command: C)
    where
        C: FnOnce(&mut ModalCore<HtmlElement>) -> Vec<ModalAction<HtmlElement>>,
    {
        let actions = command(&mut self.modal.borrow_mut());
        self.elements.apply(actions);
    }
}

fn setup_gallery(document: &Document, anchors: &GalleryAnchors) {
    let Some(elements) = ModalElements::find(document, anchors) else {
        log::debug!("gallery modal not on this page");
        return;
    };
    let host = Rc::new(GalleryHost { elements, modal: RefCell::new(ModalCore::new()) });

    let h = Rc::clone(&host);
    listen(&host.elements.prev, "click", move |_| h.run(ModalCore::prev));
    let h = Rc::clone(&host);
    listen(&host.elements.next, "click", move |_| h.run(ModalCore::next));
    let h = Rc::clone(&host);
    listen(&host.elements.close, "click", move |_| h.run(ModalCore::close));

    let h = Rc::clone(&host);
    listen(&host.elements.overlay, "click", move |ev: Event| {
        let overlay: &JsValue = h.elements.overlay.as_ref();
        let on_backdrop = ev.target().is_some_and(|target| AsRef::<JsValue>::as_ref(&target) == overlay);
        h.run(|modal| modal.on_overlay_click(on_backdrop));
    });

    let h = Rc::clone(&host);
    listen(document, "keydown", move |ev: Event| {
        if let Some(key) = ev.dyn_ref::<KeyboardEvent>().map(KeyboardEvent::key) {
            h.run(|modal| modal.on_key(&key));
        }
    });

    let cards = find_cards(document, &anchors.cards);
    log::debug!("wiring {} place card(s)", cards.len());
    for card in cards {
        let h = Rc::clone(&host);
        let target = card.clone();
        listen(&card, "click", move |_| {
            let data = read_card(&target);
            h.run(|modal| modal.open(data, Some(target.clone())));
        });

        let h = Rc::clone(&host);
        let target = card.clone();
        listen(&card, "keydown", move |ev: Event| {
            let is_enter = ev.dyn_ref::<KeyboardEvent>().is_some_and(|k| k.key() == KEY_ENTER);
            if is_enter {
                ev.prevent_default();
                let data = read_card(&target);
                h.run(|modal| modal.open(data, Some(target.clone())));
            }
        });
    }
}

// =============================================================
// Suggestions
// =============================================================

struct SuggestionHost {
    elements: SuggestionElements,
    core: RefCell<SuggestionCore<LocalStorage>>,
}

fn setup_suggestions(document: &Document, anchors: &SuggestionAnchors) {
    let Some(elements) = SuggestionElements::find(document, anchors) else {
        log::debug!("suggestion form not on this page");
        return;
    };
    if elements.message.is_none() {
        log::debug!("#{} missing; form messages will not be shown", anchors.message);
    }

    let core = SuggestionCore::new(SubmissionLog::new(LocalStorage::open(), anchors.storage_key.clone()));
    if let Err(e) = elements.render(&core.render()) {
        log::warn!("initial suggestion render failed: {e:?}");
    }
    let host = Rc::new(SuggestionHost { elements, core: RefCell::new(core) });

    let h = Rc::clone(&host);
    listen(&host.elements.form, "submit", move |ev: Event| {
        ev.prevent_default();
        let fields = h.elements.read_fields();
        let actions = h.core.borrow_mut().submit(fields, now_ms());
        h.elements.apply(actions);
    });
}
