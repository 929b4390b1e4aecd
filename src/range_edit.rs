//! Promote and demote headings within a byte range.
//!
//! Both operations only change how many components each heading number has,
//! then renumber the whole document so the displayed values are derived from
//! the new structure rather than written directly. A heading is touched only
//! when its whole number lies inside `[start, end)`; the end of the range
//! moves with every edit so later headings are judged against the live text.

use tracing::{debug, trace};

use crate::depth::{depth, SEPARATOR};
use crate::document::Document;
use crate::error::{Error, Result};
use crate::formats::HeadingMatcher;
use crate::heading::{HeadingMatch, Span};
use crate::renumber::renumber_in_place;

/// Raise every heading in `[start, end)` one level, then renumber.
///
/// The last component and its separator are removed from each heading deeper
/// than the top level. Top-level headings are left as they are. Returns the
/// number of headings found in the range.
///
/// # Errors
///
/// Returns [`Error::InvalidRange`] for a bad range and
/// [`Error::MissingLastComponent`] when a deeper heading matched without its
/// last component. On error `doc` is unchanged.
pub fn promote(
    doc: &mut Document,
    start: usize,
    end: usize,
    matcher: &dyn HeadingMatcher,
) -> Result<usize> {
    edit_range(doc, start, end, matcher, |scratch, heading| {
        let number = scratch.read_span(heading.whole)?;
        if depth(number) == 1 {
            return Ok(heading.whole.end);
        }
        let last = heading
            .last_component
            .ok_or_else(|| Error::MissingLastComponent {
                offset: heading.whole.start,
                number: number.to_string(),
            })?;
        let separator = last.start.checked_sub(SEPARATOR.len_utf8());
        let cut = match separator {
            Some(at)
                if at >= heading.whole.start
                    && scratch
                        .text()
                        .get(at..)
                        .is_some_and(|rest| rest.starts_with(SEPARATOR)) =>
            {
                Span::new(at, last.end)
            }
            _ => {
                return Err(Error::MissingLastComponent {
                    offset: heading.whole.start,
                    number: number.to_string(),
                })
            }
        };
        scratch.delete_span(cut)?;
        Ok(heading.whole.end - cut.len())
    })
}

/// Lower every heading in `[start, end)` one level, then renumber.
///
/// A new trailing component is appended to each heading number. There is no
/// depth ceiling.
///
/// # Errors
///
/// Returns [`Error::InvalidRange`] for a bad range. On error `doc` is
/// unchanged.
pub fn demote(
    doc: &mut Document,
    start: usize,
    end: usize,
    matcher: &dyn HeadingMatcher,
) -> Result<usize> {
    let component = format!("{SEPARATOR}1");
    edit_range(doc, start, end, matcher, |scratch, heading| {
        scratch.insert_at(heading.whole.end, &component)?;
        Ok(heading.whole.end + component.len())
    })
}

/// Apply `edit` to each heading inside `[start, end)` of a scratch copy,
/// renumber it, and commit. Returns the number of headings in the range.
///
/// `edit` returns the end of the heading number after its change, which
/// becomes the new scan cursor.
fn edit_range<F>(
    doc: &mut Document,
    start: usize,
    end: usize,
    matcher: &dyn HeadingMatcher,
    mut edit: F,
) -> Result<usize>
where
    F: FnMut(&mut Document, HeadingMatch) -> Result<usize>,
{
    if start > end || !doc.text().is_char_boundary(start) || !doc.text().is_char_boundary(end) {
        return Err(Error::InvalidRange {
            start,
            end,
            len: doc.len(),
        });
    }

    let mut scratch = doc.clone();
    let mut cursor = start;
    let mut end = end;
    let mut edited = 0;

    while let Some(heading) = scratch.find_next(matcher, cursor)? {
        if heading.whole.end > end {
            break;
        }
        let before = scratch.len();
        let new_end = edit(&mut scratch, heading)?;
        let number = scratch.read_span(Span::new(heading.whole.start, new_end))?;
        trace!(offset = heading.whole.start, number, "edited heading");
        // Both edits only touch the number, so the length delta shifts `end`.
        end = (end + scratch.len()).saturating_sub(before);
        cursor = new_end.max(heading.whole.start + 1);
        edited += 1;
    }

    debug!(headings = edited, start, end, "range edit");
    renumber_in_place(&mut scratch, matcher)?;
    *doc = scratch;
    Ok(edited)
}

#[cfg(test)]
#[path = "tests/range_edit.rs"]
mod tests;
