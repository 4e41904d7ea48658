//! Suggestion form elements: reading fields and rendering the list.

use wasm_bindgen::JsValue;
use web_sys::{Document, Element, FormData, HtmlFormElement};

use crate::config::SuggestionAnchors;
use crate::dom::{by_id, format_timestamp, warn_on_err};
use crate::suggestions::form::FormAction;
use crate::suggestions::submission::FormFields;
use crate::suggestions::view::{EntryView, ListView};

/// The form, the submissions container, and the optional message area.
pub struct SuggestionElements {
    document: Document,
    pub form: HtmlFormElement,
    pub list: Element,
    pub message: Option<Element>,
}

impl SuggestionElements {
    /// `None` unless both the form and the list container exist.
    #[must_use]
    pub fn find(document: &Document, anchors: &SuggestionAnchors) -> Option<Self> {
        Some(Self {
            form: by_id(document, &anchors.form)?,
            list: by_id(document, &anchors.list)?,
            message: by_id(document, &anchors.message),
            document: document.clone(),
        })
    }

    /// Current field values, untrimmed. Missing fields read as empty.
    #[must_use]
    pub fn read_fields(&self) -> FormFields {
        let data = match FormData::new_with_form(&self.form) {
            Ok(data) => data,
            Err(e) => {
                log::warn!("could not read suggestion form: {e:?}");
                return FormFields::default();
            }
        };
        let field = |name: &str| data.get(name).as_string().unwrap_or_default();
        FormFields {
            name: field("name"),
            email: field("email"),
            destination: field("destination"),
            timeframe: field("timeframe"),
            notes: field("notes"),
        }
    }

    pub fn apply(&self, actions: Vec<FormAction>) {
        for action in actions {
            match action {
                FormAction::ShowMessage(text) => {
                    if let Some(message) = &self.message {
                        message.set_text_content(Some(text));
                    }
                }
                FormAction::ResetForm => self.form.reset(),
                FormAction::Render(view) => warn_on_err("render suggestions", self.render(&view)),
            }
        }
    }

    /// Replace the container's children with `view`. Text goes through
    /// `textContent`, never markup.
    pub fn render(&self, view: &ListView) -> Result<(), JsValue> {
        self.list.set_inner_html("");
        match view {
            ListView::Empty { placeholder } => {
                let p = self.create("p", "no-submissions")?;
                p.set_text_content(Some(*placeholder));
                self.list.append_child(&p)?;
            }
            ListView::Entries(entries) => {
                for entry in entries {
                    let block = self.entry_block(entry)?;
                    self.list.append_child(&block)?;
                }
            }
        }
        Ok(())
    }

    fn entry_block(&self, entry: &EntryView) -> Result<Element, JsValue> {
        let block = self.create("div", "submission")?;

        let header = self.create("div", "submission-header")?;
        let name = self.document.create_element("strong")?;
        name.set_text_content(Some(&entry.name));
        header.append_child(&name)?;
        header.append_with_str_1(&format!(" — {}", entry.destination))?;
        block.append_child(&header)?;

        let meta = self.create("div", "submission-meta")?;
        meta.set_text_content(Some(&entry.meta(&format_timestamp(entry.created))));
        block.append_child(&meta)?;

        let notes = self.create("div", "submission-notes")?;
        notes.set_text_content(Some(&entry.notes));
        block.append_child(&notes)?;

        Ok(block)
    }

    fn create(&self, tag: &str, class: &str) -> Result<Element, JsValue> {
        let element = self.document.create_element(tag)?;
        element.set_class_name(class);
        Ok(element)
    }
}
