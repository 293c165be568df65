// Configuration module.
// Site description (navigation tree, resources, books) and filesystem paths.

pub mod paths;
pub mod site;

pub use site::{NavEntry, NavTree, PageItem, Resource, SiteConfig, TechStack};
