//! Canonical renumbering of every heading in a document.
//!
//! A single left-to-right scan keeps one counter per open nesting level. A
//! heading at depth `d` first trims or zero-pads the stack to `d` entries,
//! then bumps the top counter, and its number text is rewritten to the
//! dot-joined stack. The result depends only on each heading's depth and
//! order, so renumbering an already-renumbered document changes nothing.

use tracing::{debug, trace};

use crate::depth::{depth, render};
use crate::document::Document;
use crate::error::{Error, Result};
use crate::formats::HeadingMatcher;

/// Rewrite every heading number in `doc` to its canonical value.
///
/// Edits are made on a scratch copy that replaces `doc` only once the whole
/// pass succeeds. Returns the number of headings visited.
///
/// # Errors
///
/// Returns an error if the matcher fails or breaks its forward-progress
/// contract; `doc` is then left untouched.
pub fn renumber(doc: &mut Document, matcher: &dyn HeadingMatcher) -> Result<usize> {
    let mut scratch = doc.clone();
    let count = renumber_in_place(&mut scratch, matcher)?;
    *doc = scratch;
    Ok(count)
}

/// The renumbering pass proper, mutating `doc` as it goes.
pub(crate) fn renumber_in_place(doc: &mut Document, matcher: &dyn HeadingMatcher) -> Result<usize> {
    let mut counters: Vec<usize> = Vec::new();
    let mut cursor = 0;
    let mut count = 0;
    // Each iteration moves the cursor past at least one byte of the document.
    let mut budget = doc.len() + 1;

    while let Some(heading) = doc.find_next(matcher, cursor)? {
        budget = budget
            .checked_sub(1)
            .ok_or(Error::StalledMatcher { offset: cursor })?;

        let written = doc.read_span(heading.whole)?;
        let level = depth(written);
        counters.truncate(level);
        counters.resize(level, 0);
        if let Some(top) = counters.last_mut() {
            *top += 1;
        }

        let number = render(&counters);
        trace!(
            offset = heading.whole.start,
            from = written,
            to = number.as_str(),
            "renumber heading"
        );
        doc.replace_span(heading.whole, &number)?;
        cursor = heading.whole.start + number.len();
        count += 1;
    }

    debug!(headings = count, "renumbered document");
    Ok(count)
}

#[cfg(test)]
#[path = "tests/renumber.rs"]
mod tests;
