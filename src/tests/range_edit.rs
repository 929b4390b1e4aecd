use super::{demote, promote};
use crate::document::Document;
use crate::error::Error;
use crate::formats::markdown::MarkdownFormat;
use crate::formats::pattern::PatternFormat;
use crate::renumber::renumber;

fn plain() -> PatternFormat {
    PatternFormat::plain().unwrap()
}

#[test]
fn test_promote_top_level_is_a_no_op() {
    let mut doc = Document::new("1 Only\n");
    let len = doc.len();

    let visited = promote(&mut doc, 0, len, &plain()).unwrap();

    assert_eq!(visited, 1);
    assert_eq!(doc.text(), "1 Only\n");
}

#[test]
fn test_demote_sole_heading() {
    let mut doc = Document::new("1");

    demote(&mut doc, 0, 1, &plain()).unwrap();

    assert_eq!(doc.text(), "1.1");
}

#[test]
fn test_demote_deepens_second_level_heading() {
    let mut doc = Document::new("1 A\n1.1 B\n");
    let range = doc.line_span(2, 2).unwrap();

    demote(&mut doc, range.start, range.end, &plain()).unwrap();

    assert_eq!(doc.text(), "1 A\n1.0.1 B\n");
}

#[test]
fn test_promote_children_become_siblings() {
    let mut doc = Document::new("1 A\n1.1 B\n1.2 C\n2 D\n");
    let range = doc.line_span(2, 3).unwrap();

    promote(&mut doc, range.start, range.end, &plain()).unwrap();

    assert_eq!(doc.text(), "1 A\n2 B\n3 C\n4 D\n");
}

#[test]
fn test_demote_siblings_become_children() {
    let mut doc = Document::new("1 A\n2 B\n3 C\n4 D\n");
    let range = doc.line_span(2, 3).unwrap();

    demote(&mut doc, range.start, range.end, &plain()).unwrap();

    assert_eq!(doc.text(), "1 A\n1.1 B\n1.2 C\n2 D\n");
}

#[test]
fn test_promote_then_demote_round_trips() {
    let original = "1 A\n1.1 B\n1.1.1 C\n1.2 D\n2 E\n";
    let mut doc = Document::new(original);

    let range = doc.line_span(2, 4).unwrap();
    promote(&mut doc, range.start, range.end, &plain()).unwrap();
    assert_eq!(doc.text(), "1 A\n2 B\n2.1 C\n3 D\n4 E\n");

    let range = doc.line_span(2, 4).unwrap();
    demote(&mut doc, range.start, range.end, &plain()).unwrap();
    assert_eq!(doc.text(), original);
}

#[test]
fn test_headings_outside_range_keep_depth() {
    let mut doc = Document::new("1 A\n1.1 B\n1.2 C\n");
    // Ends inside the number of the third heading.
    let range = doc.line_span(1, 2).unwrap();
    let end = range.end + 2;

    promote(&mut doc, 0, end, &plain()).unwrap();

    assert_eq!(doc.text(), "1 A\n2 B\n2.1 C\n");
}

#[test]
fn test_range_end_follows_edits() {
    let mut doc = Document::new("1 A\n2 B\n3 C\n");
    let len = doc.len();

    let visited = demote(&mut doc, 0, len, &plain()).unwrap();

    assert_eq!(visited, 3);
    assert_eq!(doc.text(), "0.1 A\n0.2 B\n0.3 C\n");
}

#[test]
fn test_empty_range_still_renumbers() {
    let mut doc = Document::new("4 A\n4.4 B\n");

    let visited = promote(&mut doc, 2, 2, &plain()).unwrap();

    assert_eq!(visited, 0);
    assert_eq!(doc.text(), "1 A\n1.1 B\n");
}

#[test]
fn test_range_without_headings_on_canonical_document() {
    let mut doc = Document::new("1 A\nbody text\n1.1 B\n");
    let range = doc.line_span(2, 2).unwrap();

    demote(&mut doc, range.start, range.end, &plain()).unwrap();

    assert_eq!(doc.text(), "1 A\nbody text\n1.1 B\n");
}

#[test]
fn test_demote_has_no_ceiling() {
    let mut doc = Document::new("1 Deep\n");
    for _ in 0..9 {
        let len = doc.len();
        demote(&mut doc, 0, len, &plain()).unwrap();
    }

    assert_eq!(doc.text(), "0.0.0.0.0.0.0.0.0.1 Deep\n");
}

#[test]
fn test_promote_without_last_group_is_a_config_error() {
    let format = PatternFormat::new(r"(?m)^(?P<whole>\d+(?:\.\d+)*) ", "whole", "last").unwrap();
    let mut doc = Document::new("1 A\n1.1 B\n");
    let len = doc.len();

    let result = promote(&mut doc, 0, len, &format);

    assert!(matches!(
        result,
        Err(Error::MissingLastComponent { offset: 4, ref number }) if number == "1.1"
    ));
    assert_eq!(doc.text(), "1 A\n1.1 B\n");
}

#[test]
fn test_promote_without_last_group_on_top_level_only() {
    let format = PatternFormat::new(r"(?m)^(?P<whole>\d+(?:\.\d+)*) ", "whole", "last").unwrap();
    let mut doc = Document::new("1 A\n2 B\n");
    let len = doc.len();

    promote(&mut doc, 0, len, &format).unwrap();

    assert_eq!(doc.text(), "1 A\n2 B\n");
}

#[test]
fn test_invalid_ranges() {
    let mut doc = Document::new("1 A\n");

    assert!(matches!(
        promote(&mut doc, 3, 1, &plain()),
        Err(Error::InvalidRange { start: 3, end: 1, .. })
    ));
    assert!(matches!(
        demote(&mut doc, 0, 99, &plain()),
        Err(Error::InvalidRange { len: 4, .. })
    ));
    assert_eq!(doc.text(), "1 A\n");
}

#[test]
fn test_markdown_promote() {
    let format = MarkdownFormat::new(plain()).unwrap();
    let mut doc = Document::new("# 1 A\n\n## 1.1 B\n\n## 1.2 C\n");
    let range = doc.line_span(3, 3).unwrap();

    promote(&mut doc, range.start, range.end, &format).unwrap();

    assert_eq!(doc.text(), "# 1 A\n\n## 2 B\n\n## 2.1 C\n");
}

#[test]
fn test_result_is_canonical() {
    let mut doc = Document::new("1 A\n1.1 B\n2 C\n2.1 D\n");
    let len = doc.len();
    demote(&mut doc, 0, len, &plain()).unwrap();
    let after = doc.text().to_string();

    renumber(&mut doc, &plain()).unwrap();

    assert_eq!(doc.text(), after);
}
