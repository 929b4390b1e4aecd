//! Expanding command-line paths into the documents to number.
//!
//! Files named explicitly are always taken. Directories are walked with the
//! `ignore` crate, so hidden and git-ignored files are skipped, and only files
//! whose extension is in the configured list are kept.

use std::path::{Path, PathBuf};

use ignore::WalkBuilder;

use crate::error::{Error, Result};

/// Collect the documents named by `paths`, sorted and without duplicates.
///
/// # Errors
///
/// Returns [`Error::Io`] for a path that does not exist and [`Error::Walk`]
/// if a directory cannot be traversed.
pub fn find_documents(paths: &[PathBuf], extensions: &[String]) -> Result<Vec<PathBuf>> {
    let mut documents = Vec::new();

    for path in paths {
        let metadata = path.metadata().map_err(|e| Error::io(path, e))?;
        if metadata.is_file() {
            documents.push(path.clone());
            continue;
        }
        for entry in WalkBuilder::new(path).build() {
            let entry = entry.map_err(|e| Error::Walk(e.to_string()))?;
            let is_file = entry.file_type().is_some_and(|t| t.is_file());
            if is_file && has_extension(entry.path(), extensions) {
                documents.push(entry.into_path());
            }
        }
    }

    documents.sort();
    documents.dedup();
    Ok(documents)
}

fn has_extension(path: &Path, extensions: &[String]) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| extensions.iter().any(|wanted| wanted == ext))
}

#[cfg(test)]
#[path = "tests/input.rs"]
mod tests;
