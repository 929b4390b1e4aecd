//! outnum: hierarchical dotted numbering for outline headings in plain text.
//!
//! Headings carry numbers such as `1`, `1.2` or `2.3.1`, and the number of
//! components is the heading's depth. [`renumber`] rewrites every number so
//! siblings count up from 1 under their parent; [`promote`] and [`demote`]
//! change the depth of the headings in a byte range and then renumber.
//!
//! What counts as a heading is decided by a [`HeadingMatcher`], either the
//! configured regular expression over the whole text or the same pattern
//! restricted to markdown ATX headings.
#![allow(clippy::multiple_crate_versions)]

pub mod config;
pub mod depth;
pub mod document;
pub mod error;
pub mod formats;
pub mod heading;
pub mod input;
pub mod outline;
pub mod range_edit;
pub mod renumber;
pub mod save;

pub use depth::depth;
pub use document::{Document, DocumentSettings};
pub use error::{Error, Result};
pub use formats::HeadingMatcher;
pub use heading::{HeadingMatch, Span};
pub use range_edit::{demote, promote};
pub use renumber::renumber;
