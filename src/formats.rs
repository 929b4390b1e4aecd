//! Heading matchers for the document formats outnum understands.
//!
//! The core never decides what a heading looks like. It asks a
//! [`HeadingMatcher`] for the next heading at or after a byte offset and gets
//! back the span of the whole dotted number plus the span of its last
//! component. Implementations must guarantee forward progress: every match is
//! non-empty and starts at or after the offset it was asked for.

pub mod markdown;
pub mod pattern;

use std::str::FromStr;

use crate::config::Config;
use crate::error::{Error, Result};
use crate::heading::HeadingMatch;

/// Locates numbered headings in a text.
pub trait HeadingMatcher {
    /// Find the first heading whose number starts at or after `from`.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying grammar or pattern cannot be run.
    fn find_next(&self, text: &str, from: usize) -> Result<Option<HeadingMatch>>;
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
/// The matcher implementations selectable from configuration.
pub enum FormatKind {
    /// The configured regular expression over the whole text.
    Plain,
    /// The configured regular expression restricted to ATX heading text.
    Markdown,
}

impl FromStr for FormatKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "plain" => Ok(Self::Plain),
            "markdown" | "md" => Ok(Self::Markdown),
            other => Err(Error::UnknownFormat(other.to_string())),
        }
    }
}

/// Build the matcher described by `config`.
///
/// # Errors
///
/// Returns an error if the format is unknown, the pattern does not compile,
/// the pattern lacks the whole-number group, or the markdown grammar fails to
/// load.
pub fn from_config(config: &Config) -> Result<Box<dyn HeadingMatcher>> {
    let pattern = pattern::PatternFormat::new(
        &config.heading_pattern,
        &config.whole_group,
        &config.last_group,
    )?;
    match config.format.parse::<FormatKind>()? {
        FormatKind::Plain => Ok(Box::new(pattern)),
        FormatKind::Markdown => Ok(Box::new(markdown::MarkdownFormat::new(pattern)?)),
    }
}
