//! Regular-expression heading matcher with named capture groups.
//!
//! The pattern designates two groups by name: one spanning the whole dotted
//! number and one spanning its final component. Repeated groups report their
//! last iteration, so `\d+(?:\.(?P<last>\d+))*` captures exactly the final
//! component and nothing when the number has a single component.

use regex::Regex;
use tracing::warn;

use crate::error::{Error, Result};
use crate::formats::HeadingMatcher;
use crate::heading::{HeadingMatch, Span};

/// Numbered lines such as `1 Intro` or `2.3.1 Details`, optionally indented,
/// with LF or CRLF line endings.
pub const DEFAULT_PATTERN: &str = r"(?Rm)^[ \t]*(?P<whole>\d+(?:\.(?P<last>\d+))*)(?:[ \t]|$)";

/// Default name of the whole-number capture group.
pub const WHOLE_GROUP: &str = "whole";

/// Default name of the last-component capture group.
pub const LAST_GROUP: &str = "last";

#[derive(Clone, Debug)]
/// Headings located by a configured regular expression.
pub struct PatternFormat {
    regex: Regex,
    whole_group: String,
    last_group: String,
}

impl PatternFormat {
    /// Compile `pattern` and check it defines the whole-number group.
    ///
    /// A pattern without the last-component group is accepted, but promoting
    /// any heading deeper than the top level will then fail.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Pattern`] if the pattern does not compile and
    /// [`Error::MissingGroup`] if `whole_group` is not one of its groups.
    pub fn new(pattern: &str, whole_group: &str, last_group: &str) -> Result<Self> {
        let regex = Regex::new(pattern)?;
        let has_group = |name: &str| regex.capture_names().flatten().any(|n| n == name);
        if !has_group(whole_group) {
            return Err(Error::MissingGroup(whole_group.to_string()));
        }
        if !has_group(last_group) {
            warn!(group = last_group, "heading pattern has no last-component group");
        }
        Ok(Self {
            regex,
            whole_group: whole_group.to_string(),
            last_group: last_group.to_string(),
        })
    }

    /// The built-in pattern with the default group names.
    ///
    /// # Errors
    ///
    /// Only fails if [`DEFAULT_PATTERN`] itself stops compiling.
    pub fn plain() -> Result<Self> {
        Self::new(DEFAULT_PATTERN, WHOLE_GROUP, LAST_GROUP)
    }
}

impl HeadingMatcher for PatternFormat {
    fn find_next(&self, text: &str, from: usize) -> Result<Option<HeadingMatch>> {
        let mut at = from;
        while at <= text.len() {
            if !text.is_char_boundary(at) {
                at += 1;
                continue;
            }
            let Some(caps) = self.regex.captures_at(text, at) else {
                return Ok(None);
            };
            let matched = caps.get(0).map_or(at, |m| m.end());
            if let Some(whole) = caps.name(&self.whole_group) {
                let last_component = caps
                    .name(&self.last_group)
                    .map(|m| Span::new(m.start(), m.end()));
                return Ok(Some(HeadingMatch {
                    whole: Span::new(whole.start(), whole.end()),
                    last_component,
                }));
            }
            // Matched through a branch without the number group.
            at = matched.max(at + 1);
        }
        Ok(None)
    }
}

#[cfg(test)]
#[path = "../tests/pattern.rs"]
mod tests;
