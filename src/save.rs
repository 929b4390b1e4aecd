//! Writing documents back to disk, renumbering on the way out when asked to.

use std::fs;
use std::path::Path;

use tracing::debug;

use crate::document::Document;
use crate::error::{Error, Result};
use crate::formats::HeadingMatcher;
use crate::renumber::renumber;

/// Save `doc` to `path`.
///
/// When the document has numbering enabled and `renumber_on_save` set, it is
/// renumbered first and the caller's copy reflects the new numbers.
///
/// # Errors
///
/// Returns an error if renumbering fails (nothing is written) or the file
/// cannot be written.
pub fn save(doc: &mut Document, path: &Path, matcher: &dyn HeadingMatcher) -> Result<()> {
    if doc.settings.numbering_enabled && doc.settings.renumber_on_save {
        let headings = renumber(doc, matcher)?;
        debug!(path = %path.display(), headings, "renumbered before save");
    }
    fs::write(path, doc.text()).map_err(|e| Error::io(path, e))
}

#[cfg(test)]
#[path = "tests/save.rs"]
mod tests;
