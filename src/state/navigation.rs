// Sidebar navigation state.
// Tracks which groups are expanded, which leaf is current, and the focused row.

use crate::config::{NavEntry, NavTree};

/// A visible row in the sidebar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavRow {
    /// Top-level entry with children; toggles open/closed.
    Group { index: usize },
    /// Top-level entry with neither children nor a link.
    Header { index: usize },
    /// Top-level leaf.
    Link { index: usize },
    /// Child leaf of an open group.
    Child { index: usize, child: usize },
}

impl NavRow {
    /// Index of the top-level entry this row belongs to.
    pub fn top_index(&self) -> usize {
        match *self {
            NavRow::Group { index }
            | NavRow::Header { index }
            | NavRow::Link { index }
            | NavRow::Child { index, .. } => index,
        }
    }

    pub fn depth(&self) -> usize {
        match self {
            NavRow::Child { .. } => 1,
            _ => 0,
        }
    }
}

/// Outcome of activating a row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavAction {
    /// A group was expanded or collapsed.
    Toggled { index: usize, open: bool },
    /// Navigate in place to a new page.
    Navigate(String),
    /// Open in a new browsing context.
    OpenExternal(String),
    /// Nothing happens (disabled leaf, bare header, dead link).
    None,
}

#[derive(Debug, Clone)]
struct NavNode {
    entry: NavEntry,
    is_open: bool,
}

/// Per-view navigation state.
///
/// Built from a private copy of the tree, so toggling in one view never
/// leaks into another.
#[derive(Debug, Clone)]
pub struct NavState {
    nodes: Vec<NavNode>,
    active_path: Option<String>,
    cursor: usize,
}

impl NavState {
    /// Initialize for a page view at `active_path`.
    ///
    /// A group starts open when one of its children matches the active path
    /// or when it is statically configured open.
    pub fn new(tree: &NavTree, active_path: Option<&str>) -> Self {
        let nodes = tree
            .entries()
            .iter()
            .map(|entry| {
                let path_match = active_path.is_some_and(|path| entry.contains_path(path));
                NavNode {
                    is_open: entry.is_group() && (path_match || entry.open),
                    entry: entry.clone(),
                }
            })
            .collect();

        let mut state = Self {
            nodes,
            active_path: active_path.map(str::to_string),
            cursor: 0,
        };

        if let Some(current) = state.current_row() {
            if let Some(pos) = state.rows().iter().position(|row| *row == current) {
                state.cursor = pos;
            }
        }

        state
    }

    pub fn active_path(&self) -> Option<&str> {
        self.active_path.as_deref()
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Top-level entry at `index`.
    pub fn entry(&self, index: usize) -> Option<&NavEntry> {
        self.nodes.get(index).map(|node| &node.entry)
    }

    /// Entry displayed by `row`.
    pub fn row_entry(&self, row: NavRow) -> Option<&NavEntry> {
        match row {
            NavRow::Child { index, child } => self.entry(index)?.children.get(child),
            other => self.entry(other.top_index()),
        }
    }

    /// Whether the group at `index` is expanded. Always false for leaves.
    pub fn is_open(&self, index: usize) -> bool {
        self.nodes.get(index).is_some_and(|node| node.is_open)
    }

    /// Whether `entry` links to the active path.
    pub fn is_current(&self, entry: &NavEntry) -> bool {
        self.active_path.is_some() && entry.href.as_deref() == self.active_path.as_deref()
    }

    /// The single row highlighted as current, if any.
    ///
    /// Disabled entries are skipped. When several entries share the active
    /// href only the first counts. The row is reported even when it sits
    /// inside a collapsed group.
    pub fn current_row(&self) -> Option<NavRow> {
        self.nodes.iter().enumerate().find_map(|(index, node)| {
            if node.entry.is_group() {
                node.entry
                    .children
                    .iter()
                    .position(|child| !child.disabled && self.is_current(child))
                    .map(|child| NavRow::Child { index, child })
            } else if !node.entry.disabled && self.is_current(&node.entry) {
                Some(NavRow::Link { index })
            } else {
                None
            }
        })
    }

    /// Entry matching the active path.
    pub fn current_entry(&self) -> Option<&NavEntry> {
        self.current_row().and_then(|row| self.row_entry(row))
    }

    /// Flattened list of visible rows.
    pub fn rows(&self) -> Vec<NavRow> {
        let mut rows = Vec::new();
        for (index, node) in self.nodes.iter().enumerate() {
            if node.entry.is_group() {
                rows.push(NavRow::Group { index });
                if node.is_open {
                    rows.extend(
                        (0..node.entry.children.len()).map(|child| NavRow::Child { index, child }),
                    );
                }
            } else if node.entry.href.is_some() {
                rows.push(NavRow::Link { index });
            } else {
                rows.push(NavRow::Header { index });
            }
        }
        rows
    }

    /// Flip the open state of the group at `index`.
    ///
    /// Returns false and changes nothing for leaves and out-of-range indices.
    pub fn toggle(&mut self, index: usize) -> bool {
        let selected = self.selected_row();

        let Some(node) = self.nodes.get_mut(index) else {
            return false;
        };
        if !node.entry.is_group() {
            return false;
        }
        node.is_open = !node.is_open;

        // Keep focus on the same row, or on the group if the row was hidden
        if let Some(selected) = selected {
            let rows = self.rows();
            self.cursor = rows
                .iter()
                .position(|row| *row == selected)
                .or_else(|| rows.iter().position(|row| *row == NavRow::Group { index }))
                .unwrap_or(0);
        }

        true
    }

    /// Click handler for `row`.
    pub fn activate(&mut self, row: NavRow) -> NavAction {
        match row {
            NavRow::Group { index } => {
                if self.toggle(index) {
                    NavAction::Toggled {
                        index,
                        open: self.is_open(index),
                    }
                } else {
                    NavAction::None
                }
            }
            NavRow::Header { .. } => NavAction::None,
            NavRow::Link { .. } | NavRow::Child { .. } => match self.row_entry(row) {
                Some(entry) if entry.is_navigable() => {
                    let href = entry.href.clone().unwrap_or_default();
                    if entry.external {
                        NavAction::OpenExternal(href)
                    } else {
                        NavAction::Navigate(href)
                    }
                }
                _ => NavAction::None,
            },
        }
    }

    /// Activate the focused row.
    pub fn activate_selected(&mut self) -> NavAction {
        match self.selected_row() {
            Some(row) => self.activate(row),
            None => NavAction::None,
        }
    }

    /// Position of the focused row within `rows()`.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn selected_row(&self) -> Option<NavRow> {
        self.rows().get(self.cursor).copied()
    }

    pub fn select_next(&mut self) {
        let count = self.rows().len();
        if count > 0 && self.cursor + 1 < count {
            self.cursor += 1;
        }
    }

    pub fn select_prev(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    pub fn select_first(&mut self) {
        self.cursor = 0;
    }

    pub fn select_last(&mut self) {
        self.cursor = self.rows().len().saturating_sub(1);
    }
}
