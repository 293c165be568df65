// Content module.
// Looks up page bodies and titles by slug; navigation only passes slugs through.

pub mod document;
pub mod source;

pub use document::{Document, slug_for_href};
pub use source::{ContentSource, FsContentSource};
