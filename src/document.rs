//! An in-memory document and the edit primitives the core needs from it.
//!
//! The document is the single source of truth: headings are found by matching
//! its text on every pass rather than being tracked across edits. Each
//! document carries its own [`DocumentSettings`] so that whether numbering is
//! enabled, and whether saving renumbers first, lives and dies with the
//! document instead of in process-wide flags.

use std::fs;
use std::path::Path;

use crate::config::Config;
use crate::error::{Error, Result};
use crate::formats::HeadingMatcher;
use crate::heading::{HeadingMatch, Span};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
/// Per-document numbering switches.
pub struct DocumentSettings {
    /// Whether outline numbering is active for this document.
    pub numbering_enabled: bool,
    /// Whether saving renumbers the document before writing.
    pub renumber_on_save: bool,
}

impl Default for DocumentSettings {
    fn default() -> Self {
        Self {
            numbering_enabled: true,
            renumber_on_save: false,
        }
    }
}

impl From<&Config> for DocumentSettings {
    fn from(config: &Config) -> Self {
        Self {
            numbering_enabled: config.numbering_enabled,
            renumber_on_save: config.renumber_on_save,
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
/// Mutable text addressed by byte offsets.
pub struct Document {
    text: String,
    /// Numbering switches attached to this document.
    pub settings: DocumentSettings,
}

impl Document {
    #[must_use]
    /// Wrap `text` with default settings.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            settings: DocumentSettings::default(),
        }
    }

    #[must_use]
    /// Replace the document's settings.
    pub fn with_settings(mut self, settings: DocumentSettings) -> Self {
        self.settings = settings;
        self
    }

    /// Read a document from disk.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Io`] if the file cannot be read as UTF-8 text.
    pub fn load(path: &Path, settings: DocumentSettings) -> Result<Self> {
        let text = fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
        Ok(Self::new(text).with_settings(settings))
    }

    #[must_use]
    /// The current text.
    pub fn text(&self) -> &str {
        &self.text
    }

    #[must_use]
    /// Consume the document, returning its text.
    pub fn into_text(self) -> String {
        self.text
    }

    #[must_use]
    /// Length in bytes.
    pub fn len(&self) -> usize {
        self.text.len()
    }

    #[must_use]
    /// Whether the document has no text.
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Find the next heading at or after `from`, checking the matcher kept its
    /// forward-progress contract.
    ///
    /// # Errors
    ///
    /// Returns the matcher's own errors, [`Error::StalledMatcher`] for a match
    /// that is empty or starts before `from`, and [`Error::InvalidSpan`] for a
    /// match that does not fit the text.
    pub fn find_next(
        &self,
        matcher: &dyn HeadingMatcher,
        from: usize,
    ) -> Result<Option<HeadingMatch>> {
        let Some(heading) = matcher.find_next(&self.text, from)? else {
            return Ok(None);
        };
        heading.check(&self.text, from)?;
        Ok(Some(heading))
    }

    /// The text under `span`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidSpan`] if the span does not fit the text.
    pub fn read_span(&self, span: Span) -> Result<&str> {
        span.check(&self.text)?;
        Ok(&self.text[span.range()])
    }

    /// Replace the text under `span` with `replacement`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidSpan`] if the span does not fit the text.
    pub fn replace_span(&mut self, span: Span, replacement: &str) -> Result<()> {
        span.check(&self.text)?;
        self.text.replace_range(span.range(), replacement);
        Ok(())
    }

    /// Insert `insertion` at byte `offset`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidSpan`] if the offset is past the end or inside
    /// a character.
    pub fn insert_at(&mut self, offset: usize, insertion: &str) -> Result<()> {
        self.replace_span(Span::new(offset, offset), insertion)
    }

    /// Remove the text under `span`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidSpan`] if the span does not fit the text.
    pub fn delete_span(&mut self, span: Span) -> Result<()> {
        self.replace_span(span, "")
    }

    /// Byte span covering lines `first..=last`, counted from 1.
    ///
    /// The span ends after the last line's newline, or at the end of the text
    /// if the range runs past the final line.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidRange`] if `first` is 0, `first > last`, or
    /// `first` is beyond the last line.
    pub fn line_span(&self, first: usize, last: usize) -> Result<Span> {
        let invalid = || Error::InvalidRange {
            start: first,
            end: last,
            len: self.text.len(),
        };
        if first == 0 || first > last {
            return Err(invalid());
        }

        let mut line_starts = std::iter::once(0)
            .chain(self.text.match_indices('\n').map(|(i, _)| i + 1))
            .filter(|&start| start < self.text.len() || start == 0);
        let start = line_starts.nth(first - 1).ok_or_else(invalid)?;
        let end = line_starts.nth(last - first).unwrap_or(self.text.len());
        Ok(Span::new(start, end))
    }
}

#[cfg(test)]
#[path = "tests/document.rs"]
mod tests;
