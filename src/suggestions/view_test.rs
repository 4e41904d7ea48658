use super::*;

fn submission(name: &str, destination: &str, created: i64) -> Submission {
    Submission {
        name: name.to_owned(),
        email: "x@x.com".to_owned(),
        destination: destination.to_owned(),
        timeframe: "Summer".to_owned(),
        notes: String::new(),
        created,
    }
}

#[test]
fn empty_list_renders_placeholder() {
    assert_eq!(ListView::from_submissions(&[]), ListView::Empty { placeholder: "No suggestions yet." });
    assert!(ListView::from_submissions(&[]).entries().is_empty());
}

#[test]
fn entries_are_newest_first() {
    let list = [submission("A", "Rome", 1), submission("B", "Oslo", 2)];
    let view = ListView::from_submissions(&list);
    let names: Vec<&str> = view.entries().iter().map(|e| e.name.as_str()).collect();
    assert_eq!(names, ["B", "A"]);
}

#[test]
fn projection_leaves_source_order_alone() {
    let list = vec![submission("A", "Rome", 1), submission("B", "Oslo", 2)];
    let _view = ListView::from_submissions(&list);
    assert_eq!(list[0].name, "A");
}

#[test]
fn rendering_is_idempotent() {
    let list = [submission("A", "Rome", 1), submission("B", "Oslo", 2)];
    assert_eq!(ListView::from_submissions(&list), ListView::from_submissions(&list));
}

#[test]
fn entry_header_and_meta_text() {
    let entry = EntryView::from(&submission("Ann", "Kyoto", 5));
    assert_eq!(entry.header(), "Ann — Kyoto");
    assert_eq!(entry.meta("1/1/1970, 00:00:00"), "Summer • 1/1/1970, 00:00:00");
    assert_eq!(entry.created, 5);
    assert_eq!(entry.notes, "");
}
