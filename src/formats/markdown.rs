//! Markdown heading matcher using tree-sitter-md.
//!
//! Only numbers that open the text of a top-level ATX-style heading (`#`
//! syntax) are headings. The configured pattern is run over each heading's
//! inline text, so numbered lines inside fenced code blocks, paragraphs and
//! block quotes are left alone.
//!
//! Parsing happens once per document. The heading text spans are kept with a
//! copy of the parsed text, and a later lookup on text that differs only by
//! digits and dots inside one heading shifts the stored spans instead of
//! parsing again. Renumbering, promotion and demotion only ever make such
//! edits.

use std::cell::RefCell;

use streaming_iterator::StreamingIterator;

use crate::error::{Error, Result};
use crate::formats::pattern::PatternFormat;
use crate::formats::HeadingMatcher;
use crate::heading::{HeadingMatch, Span};

/// Tree-sitter query for ATX-style markdown headings (# syntax).
const TITLE_QUERY: &str = "(atx_heading (inline) @title)";

/// Node kinds a numbered heading may be nested in.
const OUTLINE_KINDS: &[&str] = &["section", "document"];

/// Numbered ATX headings, e.g. `## 1.2 Background`.
pub struct MarkdownFormat {
    number: PatternFormat,
    language: tree_sitter::Language,
    query: tree_sitter::Query,
    title_idx: u32,
    index: RefCell<Option<TitleIndex>>,
}

/// Heading text spans of one parsed text, in document order.
struct TitleIndex {
    text: String,
    titles: Vec<Span>,
}

impl MarkdownFormat {
    /// Restrict `number` to the inline text of ATX headings.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Grammar`] if the heading query does not compile
    /// against the markdown grammar.
    pub fn new(number: PatternFormat) -> Result<Self> {
        let language: tree_sitter::Language = tree_sitter_md::LANGUAGE.into();
        let query = tree_sitter::Query::new(&language, TITLE_QUERY)
            .map_err(|e| Error::Grammar(e.to_string()))?;
        let Some(title_idx) = query.capture_index_for_name("title") else {
            return Err(Error::Grammar("heading query has no @title capture".to_string()));
        };
        Ok(Self {
            number,
            language,
            query,
            title_idx,
            index: RefCell::new(None),
        })
    }

    /// Parse `text` and collect the inline spans of its outline headings.
    fn parse(&self, text: &str) -> Result<TitleIndex> {
        let mut parser = tree_sitter::Parser::new();
        parser
            .set_language(&self.language)
            .map_err(|e| Error::Grammar(e.to_string()))?;
        let Some(tree) = parser.parse(text, None) else {
            return Err(Error::Grammar("markdown parser produced no tree".to_string()));
        };

        let mut cursor = tree_sitter::QueryCursor::new();
        let mut matches = cursor.matches(&self.query, tree.root_node(), text.as_bytes());

        let mut titles = Vec::new();
        while let Some(m) = matches.next() {
            for capture in m.captures.iter().filter(|c| c.index == self.title_idx) {
                if in_outline(capture.node) {
                    titles.push(Span::new(capture.node.start_byte(), capture.node.end_byte()));
                }
            }
        }
        titles.sort_by_key(|span| span.start);
        titles.dedup();
        tracing::debug!(headings = titles.len(), "parsed markdown headings");

        Ok(TitleIndex {
            text: text.to_string(),
            titles,
        })
    }

    /// Run the number pattern over one heading's inline text.
    fn number_in(&self, text: &str, inline: Span) -> Result<Option<HeadingMatch>> {
        let Some(title) = text.get(inline.range()) else {
            return Ok(None);
        };
        let shift = |span: Span| Span::new(inline.start + span.start, inline.start + span.end);
        Ok(self
            .number
            .find_next(title, 0)?
            .map(|heading| HeadingMatch {
                whole: shift(heading.whole),
                last_component: heading.last_component.map(shift),
            }))
    }
}

/// Whether the heading owning `inline` is part of the document outline
/// rather than nested in a block quote or list item.
fn in_outline(inline: tree_sitter::Node) -> bool {
    let Some(heading) = inline.parent() else {
        return false;
    };
    let mut ancestor = heading.parent();
    while let Some(node) = ancestor {
        if !OUTLINE_KINDS.contains(&node.kind()) {
            return false;
        }
        ancestor = node.parent();
    }
    true
}

impl TitleIndex {
    /// Bring the index up to date with `text` without reparsing.
    ///
    /// Succeeds only when the two texts differ by a run of digits and dots
    /// lying inside a single heading; returns `false` otherwise.
    fn sync(&mut self, text: &str) -> bool {
        if self.text == text {
            return true;
        }
        let (old, new) = (self.text.as_bytes(), text.as_bytes());
        let prefix = common_prefix(old, new);
        let suffix = common_suffix(&old[prefix..], &new[prefix..]);
        let (old_end, new_end) = (old.len() - suffix, new.len() - suffix);

        let numeric = |bytes: &[u8]| bytes.iter().all(|b| b.is_ascii_digit() || *b == b'.');
        if !numeric(&old[prefix..old_end]) || !numeric(&new[prefix..new_end]) {
            return false;
        }
        let Some(owner) = self
            .titles
            .iter()
            .position(|t| t.start <= prefix && old_end <= t.end)
        else {
            return false;
        };

        for (i, title) in self.titles.iter_mut().enumerate().skip(owner) {
            if i > owner {
                title.start = title.start - old_end + new_end;
            }
            title.end = title.end - old_end + new_end;
        }
        self.text = text.to_string();
        true
    }
}

/// Length of the longest common prefix, found with slice comparisons.
fn common_prefix(a: &[u8], b: &[u8]) -> usize {
    let (mut lo, mut hi) = (0, a.len().min(b.len()));
    while lo < hi {
        let mid = lo + (hi - lo).div_ceil(2);
        if a[..mid] == b[..mid] {
            lo = mid;
        } else {
            hi = mid - 1;
        }
    }
    lo
}

/// Length of the longest common suffix, found with slice comparisons.
fn common_suffix(a: &[u8], b: &[u8]) -> usize {
    let (mut lo, mut hi) = (0, a.len().min(b.len()));
    while lo < hi {
        let mid = lo + (hi - lo).div_ceil(2);
        if a[a.len() - mid..] == b[b.len() - mid..] {
            lo = mid;
        } else {
            hi = mid - 1;
        }
    }
    lo
}

impl HeadingMatcher for MarkdownFormat {
    fn find_next(&self, text: &str, from: usize) -> Result<Option<HeadingMatch>> {
        if from > text.len() {
            return Ok(None);
        }

        let mut cache = self.index.borrow_mut();
        if !cache.as_mut().is_some_and(|cached| cached.sync(text)) {
            *cache = Some(self.parse(text)?);
        }
        let Some(index) = cache.as_ref() else {
            return Ok(None);
        };

        let first = index.titles.partition_point(|title| title.end < from);
        for &inline in &index.titles[first..] {
            if let Some(heading) = self.number_in(text, inline)? {
                if heading.whole.start >= from {
                    return Ok(Some(heading));
                }
            }
        }
        Ok(None)
    }
}

#[cfg(test)]
#[path = "../tests/markdown.rs"]
mod tests;
