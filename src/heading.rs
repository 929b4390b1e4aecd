//! Heading occurrences located in a document.
//!
//! A heading is not stored anywhere: it is re-derived by the matcher on every
//! pass. What the core needs from a match is where the whole dotted number
//! sits and, for numbers with more than one component, where the final
//! component sits so that promotion can strip it.

use std::ops::Range;

use crate::error::{Error, Result};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
/// Half-open byte range `start..end` into a document.
pub struct Span {
    /// First byte of the span.
    pub start: usize,
    /// Byte after the last byte of the span.
    pub end: usize,
}

impl Span {
    #[must_use]
    /// Create a span from its two offsets.
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    #[must_use]
    /// The span as a slicing range.
    pub fn range(self) -> Range<usize> {
        self.start..self.end
    }

    #[must_use]
    /// Number of bytes covered.
    pub fn len(self) -> usize {
        self.end.saturating_sub(self.start)
    }

    #[must_use]
    /// Whether the span covers no bytes.
    pub fn is_empty(self) -> bool {
        self.len() == 0
    }

    #[must_use]
    /// Whether `other` lies entirely inside this span.
    pub fn contains(self, other: Span) -> bool {
        self.start <= other.start && other.end <= self.end
    }

    /// Check the span addresses whole characters of `text`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidSpan`] if the span is reversed, runs past the
    /// end of `text`, or splits a multi-byte character.
    pub fn check(self, text: &str) -> Result<()> {
        if self.start <= self.end && text.get(self.range()).is_some() {
            Ok(())
        } else {
            Err(Error::InvalidSpan {
                start: self.start,
                end: self.end,
                len: text.len(),
            })
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
/// A heading located by a matcher.
pub struct HeadingMatch {
    /// The entire dotted number, e.g. `2.3.1`.
    pub whole: Span,
    /// The final dot-separated component, absent for single-component numbers.
    pub last_component: Option<Span>,
}

impl HeadingMatch {
    /// Validate the match against the text it was found in and the scan cursor.
    ///
    /// # Errors
    ///
    /// Returns [`Error::StalledMatcher`] if the number starts before `cursor`
    /// or is empty, and [`Error::InvalidSpan`] if either span is malformed.
    pub fn check(&self, text: &str, cursor: usize) -> Result<()> {
        if self.whole.start < cursor || self.whole.is_empty() {
            return Err(Error::StalledMatcher { offset: cursor });
        }
        self.whole.check(text)?;
        if let Some(last) = self.last_component {
            last.check(text)?;
            if !self.whole.contains(last) {
                return Err(Error::InvalidSpan {
                    start: last.start,
                    end: last.end,
                    len: text.len(),
                });
            }
        }
        Ok(())
    }
}
