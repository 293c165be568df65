// Tech-stack tab selection.
// Exactly one configured tab is active; unknown ids are ignored.

use crate::config::TechStack;

/// A selectable tab.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TabItem {
    /// Unique key.
    pub id: String,
}

impl From<&TechStack> for TabItem {
    fn from(stack: &TechStack) -> Self {
        Self {
            id: stack.name.clone(),
        }
    }
}

/// Mutually exclusive tab selection.
#[derive(Debug, Clone)]
pub struct TabState {
    tabs: Vec<TabItem>,
    active: usize,
}

impl TabState {
    /// Create with the first tab active. Returns None for an empty tab set.
    pub fn new(tabs: Vec<TabItem>) -> Option<Self> {
        if tabs.is_empty() {
            return None;
        }
        Some(Self { tabs, active: 0 })
    }

    /// Build one tab per tech stack.
    pub fn from_stacks(stacks: &[TechStack]) -> Option<Self> {
        Self::new(stacks.iter().map(TabItem::from).collect())
    }

    pub fn tabs(&self) -> &[TabItem] {
        &self.tabs
    }

    pub fn active_id(&self) -> &str {
        &self.tabs[self.active].id
    }

    pub fn active_index(&self) -> usize {
        self.active
    }

    pub fn is_active(&self, id: &str) -> bool {
        self.active_id() == id
    }

    /// Make `id` the active tab. Unknown ids leave the selection unchanged.
    pub fn select_tab(&mut self, id: &str) -> bool {
        match self.tabs.iter().position(|tab| tab.id == id) {
            Some(index) => {
                self.active = index;
                true
            }
            None => {
                tracing::debug!(id, "ignoring unknown tab");
                false
            }
        }
    }

    pub fn select_next(&mut self) {
        self.active = (self.active + 1) % self.tabs.len();
    }

    pub fn select_prev(&mut self) {
        self.active = (self.active + self.tabs.len() - 1) % self.tabs.len();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tabs(ids: &[&str]) -> Vec<TabItem> {
        ids.iter()
            .map(|id| TabItem {
                id: id.to_string(),
            })
            .collect()
    }

    #[test]
    fn test_defaults_to_first_tab() {
        let state = TabState::new(tabs(&["html", "css", "js"])).unwrap();
        assert_eq!(state.active_id(), "html");
        assert_eq!(state.active_index(), 0);
        assert_eq!(state.tabs().iter().filter(|t| state.is_active(&t.id)).count(), 1);
    }

    #[test]
    fn test_empty_tab_set() {
        assert!(TabState::new(Vec::new()).is_none());
    }

    #[test]
    fn test_select_known_and_unknown() {
        let mut state = TabState::new(tabs(&["html", "css", "js"])).unwrap();

        assert!(state.select_tab("js"));
        assert_eq!(state.active_id(), "js");

        assert!(!state.select_tab("cobol"));
        assert_eq!(state.active_id(), "js");
    }

    #[test]
    fn test_next_prev_wrap() {
        let mut state = TabState::new(tabs(&["a", "b", "c"])).unwrap();

        state.select_prev();
        assert_eq!(state.active_id(), "c");
        state.select_next();
        assert_eq!(state.active_id(), "a");
        state.select_next();
        assert_eq!(state.active_id(), "b");
    }
}
