//! Place card model.
//!
//! A card carries a title, a default description, and two parallel
//! comma-separated attribute lists (image URLs and captions). Nothing here is
//! validated strictly: missing attributes read as empty lists and captions are
//! looked up positionally with a fallback, so one bad card never breaks the page.

#[cfg(test)]
#[path = "card_test.rs"]
mod card_test;

/// One destination card as read from the page.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Card {
    pub title: String,
    /// Shown whenever the current image has no caption of its own.
    pub description: String,
    pub images: Vec<String>,
    pub captions: Vec<String>,
}

impl Card {
    /// Build a card from the raw text and attribute values found in markup.
    #[must_use]
    pub fn from_attributes(title: &str, description: &str, images: Option<&str>, captions: Option<&str>) -> Self {
        Self {
            title: title.to_owned(),
            description: description.to_owned(),
            images: split_list(images),
            captions: split_list(captions),
        }
    }

    /// Number of images in the gallery.
    #[must_use]
    pub fn len(&self) -> usize {
        self.images.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.images.is_empty()
    }

    /// Cards without images cannot open the modal.
    #[must_use]
    pub fn is_interactive(&self) -> bool {
        !self.is_empty()
    }

    /// Caption for `index`, falling back to the default description when the
    /// caption is missing or empty.
    #[must_use]
    pub fn caption_at(&self, index: usize) -> &str {
        match self.captions.get(index) {
            Some(caption) if !caption.is_empty() => caption,
            _ => &self.description,
        }
    }
}

/// Split a comma-separated attribute into trimmed entries.
///
/// Entries stay positional (empty entries are kept) so captions line up with
/// images. A missing or blank attribute yields no entries.
#[must_use]
pub fn split_list(raw: Option<&str>) -> Vec<String> {
    match raw.map(str::trim) {
        None | Some("") => Vec::new(),
        Some(list) => list.split(',').map(|entry| entry.trim().to_owned()).collect(),
    }
}
