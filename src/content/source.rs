// Content lookup by slug.
// Resolves slugs to markdown files under a content root.

use std::fs;
use std::path::PathBuf;

use crate::error::Result;

use super::document::Document;

/// Supplies document bodies by slug.
pub trait ContentSource {
    /// Load the document for `slug`. A missing document is `Ok(None)`.
    fn load(&self, slug: &str) -> Result<Option<Document>>;
}

/// Markdown files on disk.
#[derive(Debug, Clone)]
pub struct FsContentSource {
    root: PathBuf,
}

impl FsContentSource {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Candidate files for `slug`, in lookup order.
    fn candidates(&self, slug: &str) -> Vec<PathBuf> {
        let base = self.root.join(slug);
        vec![
            self.root.join(format!("{}.md", slug)),
            self.root.join(format!("{}.mdx", slug)),
            base.join("index.md"),
            base.join("index.mdx"),
        ]
    }
}

impl ContentSource for FsContentSource {
    fn load(&self, slug: &str) -> Result<Option<Document>> {
        // Refuse to leave the content root
        if slug.split('/').any(|part| part == ".." || part.is_empty()) {
            tracing::warn!(slug, "rejecting malformed slug");
            return Ok(None);
        }

        for path in self.candidates(slug) {
            if path.is_file() {
                tracing::debug!(path = %path.display(), "loading document");
                let text = fs::read_to_string(&path)?;
                return Ok(Some(Document::parse(slug, &text)));
            }
        }

        tracing::debug!(slug, "no document for slug");
        Ok(None)
    }
}
