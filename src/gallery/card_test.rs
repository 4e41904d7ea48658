use super::*;

// =============================================================
// split_list
// =============================================================

#[test]
fn split_list_trims_entries() {
    assert_eq!(split_list(Some(" a.jpg , b.jpg,c.jpg ")), vec!["a.jpg", "b.jpg", "c.jpg"]);
}

#[test]
fn split_list_missing_or_blank_is_empty() {
    assert!(split_list(None).is_empty());
    assert!(split_list(Some("")).is_empty());
    assert!(split_list(Some("   ")).is_empty());
}

#[test]
fn split_list_keeps_empty_entries_positional() {
    assert_eq!(split_list(Some("one,,three")), vec!["one", "", "three"]);
}

// =============================================================
// Card
// =============================================================

fn kyoto() -> Card {
    Card::from_attributes(
        "Kyoto",
        "Temples and tea houses.",
        Some("kyoto-1.jpg, kyoto-2.jpg, kyoto-3.jpg"),
        Some("Fushimi Inari, , Gion at dusk"),
    )
}

#[test]
fn from_attributes_parses_lists() {
    let card = kyoto();
    assert_eq!(card.title, "Kyoto");
    assert_eq!(card.len(), 3);
    assert_eq!(card.images[1], "kyoto-2.jpg");
    assert_eq!(card.captions.len(), 3);
}

#[test]
fn caption_at_uses_own_caption_when_present() {
    assert_eq!(kyoto().caption_at(0), "Fushimi Inari");
    assert_eq!(kyoto().caption_at(2), "Gion at dusk");
}

#[test]
fn caption_at_falls_back_on_empty_caption() {
    assert_eq!(kyoto().caption_at(1), "Temples and tea houses.");
}

#[test]
fn caption_at_falls_back_when_captions_are_short() {
    let card = Card::from_attributes("Lisbon", "Hills and trams.", Some("a.jpg,b.jpg"), Some("Alfama"));
    assert_eq!(card.caption_at(0), "Alfama");
    assert_eq!(card.caption_at(1), "Hills and trams.");
}

#[test]
fn missing_captions_attribute_degrades_to_description() {
    let card = Card::from_attributes("Oslo", "Fjords.", Some("a.jpg"), None);
    assert!(card.captions.is_empty());
    assert_eq!(card.caption_at(0), "Fjords.");
}

#[test]
fn card_without_images_is_not_interactive() {
    let card = Card::from_attributes("Nowhere", "", None, None);
    assert!(card.is_empty());
    assert!(!card.is_interactive());
    assert!(kyoto().is_interactive());
}
