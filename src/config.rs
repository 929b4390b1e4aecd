//! Configuration to acknowledge developer preferences as well as set defaults.
//!
//! Specifically, we try to find an outnum.toml, and if present we load settings from there.
//! This provides the heading pattern, its capture-group names, the document format, the
//! per-document numbering switches and file extension preferences.

use facet::Facet;
use std::fs;
use std::io;
use std::path::Path;

use crate::error::{Error, Result};

/// File looked up in the working directory when no explicit path is given.
pub const CONFIG_FILE: &str = "outnum.toml";

#[derive(Facet, Clone, Debug)]
/// User preferences loaded from outnum.toml or falling back to defaults.
pub struct Config {
    #[facet(default = crate::formats::pattern::DEFAULT_PATTERN.to_string())]
    /// Regular expression locating heading numbers.
    pub heading_pattern: String,
    #[facet(default = "whole".to_string())]
    /// Capture group spanning the whole dotted number.
    pub whole_group: String,
    #[facet(default = "last".to_string())]
    /// Capture group spanning the number's final component.
    pub last_group: String,
    #[facet(default = "plain".to_string())]
    /// Document format: `plain` or `markdown`.
    pub format: String,
    #[facet(default = true)]
    /// Whether numbering is active for loaded documents.
    pub numbering_enabled: bool,
    #[facet(default = false)]
    /// Whether saving a document renumbers it first.
    pub renumber_on_save: bool,
    #[facet(default = vec!["md".to_string(), "txt".to_string()])]
    /// File suffixes to match when scanning directories.
    pub file_extensions: Vec<String>,
}

impl Config {
    /// Parse configuration from TOML text; missing keys take their defaults.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Config`] if the text is not valid configuration.
    pub fn from_toml(contents: &str) -> Result<Self> {
        facet_toml::from_str::<Self>(contents).map_err(|e| Error::Config(e.to_string()))
    }

    /// Load configuration from `path`, or from outnum.toml if present.
    ///
    /// An explicit path must exist; a missing outnum.toml means defaults.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Io`] if an explicit path, or an outnum.toml that is
    /// present, cannot be read and [`Error::Config`] if the file is not valid
    /// configuration.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let contents = match path {
            Some(path) => fs::read_to_string(path).map_err(|e| Error::io(path, e))?,
            None => read_optional(Path::new(CONFIG_FILE))?,
        };
        Self::from_toml(&contents)
    }
}

/// Read `path`, treating a missing file as empty.
fn read_optional(path: &Path) -> Result<String> {
    match fs::read_to_string(path) {
        Ok(contents) => Ok(contents),
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(String::new()),
        Err(e) => Err(Error::io(path, e)),
    }
}

#[cfg(test)]
#[path = "tests/config.rs"]
mod tests;
