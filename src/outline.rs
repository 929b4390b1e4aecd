//! Read-only views of a document's numbered outline.

use serde::{Deserialize, Serialize};

use crate::depth::depth;
use crate::document::Document;
use crate::error::Result;
use crate::formats::HeadingMatcher;
use crate::renumber::renumber;

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
/// One heading as listed by `outnum outline`.
pub struct OutlineEntry {
    /// Heading number as written in the document.
    pub number: String,
    /// Nesting depth derived from the number.
    pub depth: usize,
    /// Line of the heading, counted from 1.
    pub line: usize,
    /// Byte offset where the number begins.
    pub byte_start: usize,
    /// Byte offset where the number ends.
    pub byte_end: usize,
    /// Remainder of the heading line after the number, trimmed.
    pub title: String,
}

/// List every heading in document order.
///
/// # Errors
///
/// Returns an error if the matcher fails or makes no progress.
pub fn collect(doc: &Document, matcher: &dyn HeadingMatcher) -> Result<Vec<OutlineEntry>> {
    let text = doc.text();
    let mut entries = Vec::new();
    let mut cursor = 0;
    let mut line = 1;
    let mut counted_to = 0;

    while let Some(heading) = doc.find_next(matcher, cursor)? {
        line += text[counted_to..heading.whole.start].matches('\n').count();
        counted_to = heading.whole.start;

        let number = doc.read_span(heading.whole)?;
        let rest = &text[heading.whole.end..];
        let title = rest.lines().next().unwrap_or_default().trim();
        entries.push(OutlineEntry {
            number: number.to_string(),
            depth: depth(number),
            line,
            byte_start: heading.whole.start,
            byte_end: heading.whole.end,
            title: title.to_string(),
        });
        cursor = heading.whole.end;
    }

    Ok(entries)
}

/// Whether renumbering would leave `doc` unchanged.
///
/// # Errors
///
/// Returns an error if the matcher fails or makes no progress.
pub fn is_canonical(doc: &Document, matcher: &dyn HeadingMatcher) -> Result<bool> {
    let mut renumbered = doc.clone();
    renumber(&mut renumbered, matcher)?;
    Ok(renumbered.text() == doc.text())
}

#[must_use]
/// Indented plain-text listing, one heading per line.
pub fn render(entries: &[OutlineEntry]) -> String {
    entries
        .iter()
        .map(|entry| {
            let indent = "  ".repeat(entry.depth.saturating_sub(1));
            format!("[{}] {indent}{} {}", entry.line, entry.number, entry.title)
                .trim_end()
                .to_string()
        })
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
#[path = "tests/outline.rs"]
mod tests;
