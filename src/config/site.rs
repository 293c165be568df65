// Site configuration model.
// Navigation tree, tech-stack resources, and book-club pages, loaded from TOML.

use std::collections::HashSet;
use std::fs;
use std::ops::Deref;
use std::path::Path;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::error::{FolioError, Result};

use super::paths;

/// Built-in site used when no configuration file exists.
const DEFAULT_SITE: &str = include_str!("default_site.toml");

/// A node in the navigation tree.
///
/// Entries with children are groups and expand/collapse; entries without
/// children are leaves and link somewhere (or nowhere, if `href` is absent).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavEntry {
    /// Display label.
    pub title: String,
    /// Link target. Absent for pure group headers.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub href: Option<String>,
    /// Open in a new browsing context.
    #[serde(default)]
    pub external: bool,
    /// Rendered but inert.
    #[serde(default)]
    pub disabled: bool,
    /// Child links, one level deep at most.
    #[serde(default, rename = "items", alias = "children")]
    pub children: Vec<NavEntry>,
    /// Statically expanded regardless of the active path.
    #[serde(default)]
    pub open: bool,
}

impl NavEntry {
    /// Whether this entry expands rather than links.
    pub fn is_group(&self) -> bool {
        !self.children.is_empty()
    }

    /// Whether activating this entry can ever navigate.
    pub fn is_navigable(&self) -> bool {
        !self.disabled && self.href.is_some()
    }

    /// Whether any child links to `path`.
    pub fn contains_path(&self, path: &str) -> bool {
        self.children
            .iter()
            .any(|child| child.href.as_deref() == Some(path))
    }
}

#[cfg(test)]
impl NavEntry {
    /// Create a leaf linking to `href`.
    pub fn link(title: impl Into<String>, href: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            href: Some(href.into()),
            external: false,
            disabled: false,
            children: Vec::new(),
            open: false,
        }
    }

    /// Create a group containing `children`.
    pub fn group(title: impl Into<String>, children: Vec<NavEntry>) -> Self {
        Self {
            title: title.into(),
            href: None,
            external: false,
            disabled: false,
            children,
            open: false,
        }
    }

    pub fn disabled(mut self) -> Self {
        self.disabled = true;
        self
    }

    pub fn external(mut self) -> Self {
        self.external = true;
        self
    }

    pub fn opened(mut self) -> Self {
        self.open = true;
        self
    }
}

/// Validated, read-only navigation tree shared by every view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavTree {
    entries: Arc<[NavEntry]>,
}

impl NavTree {
    /// Validate and wrap top-level entries.
    pub fn new(entries: Vec<NavEntry>) -> Result<Self> {
        for (i, entry) in entries.iter().enumerate() {
            if entry.title.trim().is_empty() {
                return Err(FolioError::Config(format!(
                    "navigation entry #{} has no title",
                    i + 1
                )));
            }
            for child in &entry.children {
                if child.title.trim().is_empty() {
                    return Err(FolioError::Config(format!(
                        "a child of '{}' has no title",
                        entry.title
                    )));
                }
                if child.is_group() {
                    return Err(FolioError::Config(format!(
                        "'{} > {}' nests deeper than one level",
                        entry.title, child.title
                    )));
                }
            }
        }

        Ok(Self {
            entries: entries.into(),
        })
    }

    /// Validate a single-level list of links, such as the header bar.
    pub fn flat(entries: Vec<NavEntry>) -> Result<Self> {
        if let Some(group) = entries.iter().find(|entry| entry.is_group()) {
            return Err(FolioError::Config(format!(
                "header link '{}' cannot have children",
                group.title
            )));
        }
        Self::new(entries)
    }

    /// Top-level entries in configured order.
    pub fn entries(&self) -> &[NavEntry] {
        &self.entries
    }

    /// First configured href, searching groups in order.
    pub fn first_href(&self) -> Option<&str> {
        self.entries.iter().find_map(|entry| {
            entry
                .href
                .as_deref()
                .or_else(|| entry.children.iter().find_map(|c| c.href.as_deref()))
        })
    }
}

impl Deref for NavTree {
    type Target = [NavEntry];

    fn deref(&self) -> &Self::Target {
        &self.entries
    }
}

/// A curated learning resource shown under a tech-stack tab.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Resource {
    pub title: String,
    pub link: String,
    #[serde(default)]
    pub explain: String,
}

/// One technology tab and its resources.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TechStack {
    pub name: String,
    #[serde(default, alias = "resource")]
    pub resources: Vec<Resource>,
}

/// A book-club page card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageItem {
    pub title: String,
    pub href: String,
    #[serde(default)]
    pub description: String,
}

/// A titled section of book-club pages.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PagesNav {
    pub title: String,
    #[serde(default)]
    pub items: Vec<PageItem>,
}

/// On-disk shape before validation.
#[derive(Debug, Deserialize)]
struct RawSiteConfig {
    #[serde(default = "default_title")]
    title: String,
    #[serde(default)]
    main_nav: Vec<NavEntry>,
    #[serde(default)]
    sidebar_nav: Vec<NavEntry>,
    #[serde(default)]
    tech_stack: Vec<TechStack>,
    #[serde(default)]
    books: Vec<PagesNav>,
}

fn default_title() -> String {
    "folio".to_string()
}

/// Complete site configuration.
#[derive(Debug, Clone)]
pub struct SiteConfig {
    pub title: String,
    /// Header links shown in the tab bar.
    pub main_nav: NavTree,
    pub sidebar_nav: NavTree,
    pub tech_stack: Vec<TechStack>,
    pub books: Vec<PagesNav>,
}

impl SiteConfig {
    /// Parse and validate a TOML site description.
    pub fn from_toml(text: &str) -> Result<Self> {
        let raw: RawSiteConfig = toml::from_str(text)?;

        let mut seen = HashSet::new();
        for stack in &raw.tech_stack {
            if stack.name.trim().is_empty() {
                return Err(FolioError::Config("tech stack with empty name".into()));
            }
            if !seen.insert(stack.name.as_str()) {
                return Err(FolioError::Config(format!(
                    "duplicate tech stack '{}'",
                    stack.name
                )));
            }
        }

        Ok(Self {
            title: raw.title,
            main_nav: NavTree::flat(raw.main_nav)?,
            sidebar_nav: NavTree::new(raw.sidebar_nav)?,
            tech_stack: raw.tech_stack,
            books: raw.books,
        })
    }

    /// The built-in site.
    pub fn builtin() -> Result<Self> {
        Self::from_toml(DEFAULT_SITE)
    }

    /// Load the site configuration.
    ///
    /// An explicit path must exist. Without one, the default location is
    /// tried and the built-in site is used when nothing is there.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => {
                if !path.exists() {
                    return Err(FolioError::NotFound(path.display().to_string()));
                }
                Self::read(path)
            }
            None => match paths::config_path() {
                Some(default) if default.exists() => Self::read(&default),
                _ => {
                    tracing::info!("no site configuration found, using built-in site");
                    Self::builtin()
                }
            },
        }
    }

    fn read(path: &Path) -> Result<Self> {
        tracing::info!(path = %path.display(), "loading site configuration");
        let text = fs::read_to_string(path)?;
        Self::from_toml(&text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_builtin_site_parses() {
        let site = SiteConfig::builtin().unwrap();
        assert!(!site.sidebar_nav.is_empty());
        assert_eq!(site.sidebar_nav[0].title, "Html");
        assert_eq!(site.main_nav.len(), 2);
        assert_eq!(site.main_nav[0].href.as_deref(), Some("/docs/getting-started/"));
        assert!(site.tech_stack.iter().any(|s| s.name == "react"));
        assert_eq!(site.books[0].items[0].href, "/read-together/details");
    }

    #[test]
    fn test_items_key_maps_to_children() {
        let site = SiteConfig::from_toml(
            r#"
            [[sidebar_nav]]
            title = "JS"
            open = true

            [[sidebar_nav.items]]
            title = "Basic"
            href = "/b"
            disabled = true
            "#,
        )
        .unwrap();

        let js = &site.sidebar_nav[0];
        assert!(js.is_group());
        assert!(js.open);
        assert!(js.children[0].disabled);
        assert!(!js.children[0].is_navigable());
        assert!(js.contains_path("/b"));
    }

    #[test]
    fn test_missing_title_rejected() {
        let err = NavTree::new(vec![NavEntry::link("  ", "/a")]).unwrap_err();
        assert!(matches!(err, FolioError::Config(_)));
    }

    #[test]
    fn test_deep_nesting_rejected() {
        let inner = NavEntry::group("Inner", vec![NavEntry::link("Leaf", "/leaf")]);
        let err = NavTree::new(vec![NavEntry::group("Outer", vec![inner])]).unwrap_err();
        assert!(matches!(err, FolioError::Config(_)));
    }

    #[test]
    fn test_header_links_validated() {
        let err = SiteConfig::from_toml(
            r#"
            [[main_nav]]
            title = "Guides"
            [[main_nav.items]]
            title = "Intro"
            href = "/guides/intro"
            "#,
        )
        .unwrap_err();
        assert!(matches!(err, FolioError::Config(_)));

        let err = SiteConfig::from_toml("[[main_nav]]\ntitle = \"\"\nhref = \"/x\"\n").unwrap_err();
        assert!(matches!(err, FolioError::Config(_)));
    }

    #[test]
    fn test_duplicate_stack_rejected() {
        let err = SiteConfig::from_toml(
            r#"
            [[tech_stack]]
            name = "css"
            [[tech_stack]]
            name = "css"
            "#,
        )
        .unwrap_err();
        assert!(matches!(err, FolioError::Config(_)));
    }

    #[test]
    fn test_first_href_descends_into_groups() {
        let tree = NavTree::new(vec![
            NavEntry::group("Empty", vec![]),
            NavEntry::group("JS", vec![NavEntry::link("Basic", "/b")]),
        ])
        .unwrap();
        assert_eq!(tree.first_href(), Some("/b"));
    }

    #[test]
    fn test_load_explicit_path() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("site.toml");
        fs::write(&path, "title = \"notes\"\n[[sidebar_nav]]\ntitle = \"A\"\nhref = \"/a\"\n").unwrap();

        let site = SiteConfig::load(Some(&path)).unwrap();
        assert_eq!(site.title, "notes");
        assert_eq!(site.sidebar_nav.len(), 1);

        let missing = temp_dir.path().join("missing.toml");
        assert!(matches!(
            SiteConfig::load(Some(&missing)),
            Err(FolioError::NotFound(_))
        ));
    }
}
