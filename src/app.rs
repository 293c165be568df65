// App state and main event loop.
// Owns the per-view navigation, tab, and page state, and dispatches key input.

use std::io;
use std::sync::Arc;
use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ratatui::prelude::*;
use ratatui::widgets::ListState;
use serde::{Deserialize, Serialize};

use crate::config::{PageItem, Resource, SiteConfig};
use crate::content::{ContentSource, Document, slug_for_href};
use crate::error::Result;
use crate::opener;
use crate::state::{NavAction, NavState, Session, TabState, resources_for};
use crate::ui;

/// Active tab in the application.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Tab {
    #[default]
    Home,
    Notes,
    Books,
}

impl Tab {
    pub const ALL: [Tab; 3] = [Tab::Home, Tab::Notes, Tab::Books];

    pub fn title(&self) -> &'static str {
        match self {
            Tab::Home => "Home",
            Tab::Notes => "Notes",
            Tab::Books => "Books",
        }
    }

    pub fn next(&self) -> Self {
        match self {
            Tab::Home => Tab::Notes,
            Tab::Notes => Tab::Books,
            Tab::Books => Tab::Home,
        }
    }

    pub fn prev(&self) -> Self {
        match self {
            Tab::Home => Tab::Books,
            Tab::Notes => Tab::Home,
            Tab::Books => Tab::Notes,
        }
    }
}

/// What the document pane shows.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum PageContent {
    /// No page selected.
    #[default]
    Idle,
    /// The page has no document yet.
    Missing(String),
    Loaded(Document),
    Error(String),
}

/// Launches external links.
pub type Launcher = Box<dyn FnMut(&str) -> Result<()>>;

/// Main application state.
pub struct App {
    /// Shared, read-only site description.
    pub site: Arc<SiteConfig>,
    content: Box<dyn ContentSource>,
    launcher: Launcher,
    /// Currently active tab.
    pub active_tab: Tab,
    /// Sidebar state for the current page view.
    pub nav: NavState,
    /// Tech-stack selection on the home tab.
    pub stacks: Option<TabState>,
    /// Focused resource under the active stack.
    pub resource_list: ListState,
    /// Focused book page.
    pub books_list: ListState,
    pub page: PageContent,
    pub page_scroll: u16,
    /// One-line feedback shown in the status bar.
    pub status: Option<String>,
    pub show_help: bool,
    /// Whether the app should exit.
    pub should_quit: bool,
}

impl App {
    /// Create the app.
    ///
    /// The starting page is `initial_path`, else the session's last page,
    /// else the first link in the sidebar.
    pub fn new(
        site: Arc<SiteConfig>,
        content: Box<dyn ContentSource>,
        session: &Session,
        initial_path: Option<String>,
    ) -> Self {
        let mut stacks = TabState::from_stacks(&site.tech_stack);
        if let (Some(stacks), Some(last)) = (stacks.as_mut(), session.last_stack.as_deref()) {
            stacks.select_tab(last);
        }

        let path = initial_path
            .or_else(|| session.last_path.clone())
            .or_else(|| site.sidebar_nav.first_href().map(str::to_string));

        let mut books_list = ListState::default();
        if site.books.iter().any(|section| !section.items.is_empty()) {
            books_list.select(Some(0));
        }

        let mut app = Self {
            nav: NavState::new(&site.sidebar_nav, None),
            site,
            content,
            launcher: Box::new(opener::open_url),
            active_tab: session.last_tab,
            stacks,
            resource_list: ListState::default(),
            books_list,
            page: PageContent::Idle,
            page_scroll: 0,
            status: None,
            show_help: false,
            should_quit: false,
        };
        app.reset_resource_selection();
        if let Some(path) = path {
            app.open_page(&path);
        }
        app
    }

    /// Replace the external link launcher.
    pub fn with_launcher(mut self, launcher: Launcher) -> Self {
        self.launcher = launcher;
        self
    }

    /// Main event loop.
    pub fn run(&mut self, terminal: &mut Terminal<impl Backend>) -> io::Result<()> {
        while !self.should_quit {
            terminal.draw(|frame| ui::draw(frame, self))?;
            self.handle_events()?;
        }
        Ok(())
    }

    /// Poll and dispatch terminal events.
    fn handle_events(&mut self) -> io::Result<()> {
        if event::poll(Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    self.handle_key(key);
                }
            }
        }
        Ok(())
    }

    /// Handle a single key press.
    pub fn handle_key(&mut self, key: KeyEvent) {
        if self.show_help {
            if matches!(key.code, KeyCode::Esc | KeyCode::Char('?')) {
                self.show_help = false;
            }
            return;
        }

        match key.code {
            KeyCode::Char('q') => self.should_quit = true,
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.should_quit = true
            }
            KeyCode::Char('?') => self.show_help = true,
            KeyCode::Tab => self.active_tab = self.active_tab.next(),
            KeyCode::BackTab => self.active_tab = self.active_tab.prev(),
            KeyCode::Char(c @ '1'..='9') => {
                let index = c as usize - '1' as usize;
                self.open_header_link(index);
            }
            _ => match self.active_tab {
                Tab::Home => self.handle_home_key(key.code),
                Tab::Notes => self.handle_notes_key(key.code),
                Tab::Books => self.handle_books_key(key.code),
            },
        }
    }

    fn handle_home_key(&mut self, code: KeyCode) {
        match code {
            KeyCode::Left | KeyCode::Char('h') => {
                if let Some(stacks) = self.stacks.as_mut() {
                    stacks.select_prev();
                }
                self.reset_resource_selection();
            }
            KeyCode::Right | KeyCode::Char('l') => {
                if let Some(stacks) = self.stacks.as_mut() {
                    stacks.select_next();
                }
                self.reset_resource_selection();
            }
            KeyCode::Down | KeyCode::Char('j') => {
                let len = self.resources().len();
                step(&mut self.resource_list, len, 1);
            }
            KeyCode::Up | KeyCode::Char('k') => {
                let len = self.resources().len();
                step(&mut self.resource_list, len, -1);
            }
            KeyCode::Enter | KeyCode::Char('o') => {
                if let Some(link) = self.selected_resource().map(|r| r.link.clone()) {
                    self.open_external(&link);
                }
            }
            _ => {}
        }
    }

    fn handle_notes_key(&mut self, code: KeyCode) {
        match code {
            KeyCode::Down | KeyCode::Char('j') => self.nav.select_next(),
            KeyCode::Up | KeyCode::Char('k') => self.nav.select_prev(),
            KeyCode::Home | KeyCode::Char('g') => self.nav.select_first(),
            KeyCode::End | KeyCode::Char('G') => self.nav.select_last(),
            KeyCode::PageDown | KeyCode::Char('d') => {
                self.page_scroll = self.page_scroll.saturating_add(10)
            }
            KeyCode::PageUp | KeyCode::Char('u') => {
                self.page_scroll = self.page_scroll.saturating_sub(10)
            }
            KeyCode::Enter | KeyCode::Char(' ') => {
                let action = self.nav.activate_selected();
                self.apply_nav_action(action);
            }
            _ => {}
        }
    }

    fn handle_books_key(&mut self, code: KeyCode) {
        let len = self.book_pages().len();
        match code {
            KeyCode::Down | KeyCode::Char('j') => step(&mut self.books_list, len, 1),
            KeyCode::Up | KeyCode::Char('k') => step(&mut self.books_list, len, -1),
            KeyCode::Enter => {
                let href = self
                    .books_list
                    .selected()
                    .and_then(|i| self.book_pages().get(i).map(|(_, page)| page.href.clone()));
                if let Some(href) = href {
                    self.open_page(&href);
                    self.active_tab = Tab::Notes;
                }
            }
            _ => {}
        }
    }

    /// Follow the `index`th header link. Disabled or unknown links do nothing.
    pub fn open_header_link(&mut self, index: usize) {
        let Some(entry) = self.site.main_nav.get(index) else {
            return;
        };
        if !entry.is_navigable() {
            tracing::debug!(index, title = %entry.title, "ignoring inert header link");
            return;
        }
        let external = entry.external;
        let Some(href) = entry.href.clone() else {
            return;
        };

        if external {
            self.open_external(&href);
        } else {
            self.open_page(&href);
            self.active_tab = Tab::Notes;
        }
    }

    /// React to a sidebar activation.
    pub fn apply_nav_action(&mut self, action: NavAction) {
        match action {
            NavAction::Toggled { index, open } => {
                tracing::debug!(index, open, "toggled sidebar group");
            }
            NavAction::Navigate(href) => self.open_page(&href),
            NavAction::OpenExternal(href) => self.open_external(&href),
            NavAction::None => {}
        }
    }

    /// Start a new page view at `path`.
    ///
    /// The previous view's sidebar state is discarded and rebuilt from the
    /// shared tree for the new path.
    pub fn open_page(&mut self, path: &str) {
        tracing::info!(path, "opening page");
        self.nav = NavState::new(&self.site.sidebar_nav, Some(path));
        self.page_scroll = 0;
        self.status = None;

        self.page = match slug_for_href(path) {
            None => PageContent::Missing(path.to_string()),
            Some(slug) => match self.content.load(&slug) {
                Ok(Some(doc)) => PageContent::Loaded(doc),
                Ok(None) => PageContent::Missing(slug),
                Err(e) => {
                    tracing::warn!(slug, error = %e, "failed to load page");
                    PageContent::Error(e.to_string())
                }
            },
        };
    }

    fn open_external(&mut self, url: &str) {
        match (self.launcher)(url) {
            Ok(()) => self.status = Some(format!("Opened {}", url)),
            Err(e) => {
                tracing::warn!(url, error = %e, "failed to open external link");
                self.status = Some(format!("Could not open {}: {}", url, e));
            }
        }
    }

    /// Resources for the active tech stack.
    pub fn resources(&self) -> &[Resource] {
        match &self.stacks {
            Some(stacks) => resources_for(&self.site.tech_stack, stacks.active_id()),
            None => &[],
        }
    }

    pub fn selected_resource(&self) -> Option<&Resource> {
        self.resource_list
            .selected()
            .and_then(|i| self.resources().get(i))
    }

    /// All book pages across sections, in display order, with their section title.
    pub fn book_pages(&self) -> Vec<(&str, &PageItem)> {
        self.site
            .books
            .iter()
            .flat_map(|section| {
                section
                    .items
                    .iter()
                    .map(move |page| (section.title.as_str(), page))
            })
            .collect()
    }

    fn reset_resource_selection(&mut self) {
        let selected = if self.resources().is_empty() {
            None
        } else {
            Some(0)
        };
        self.resource_list = ListState::default();
        self.resource_list.select(selected);
    }

    /// Snapshot to persist on exit.
    pub fn session(&self) -> Session {
        Session {
            last_path: self.nav.active_path().map(str::to_string),
            last_tab: self.active_tab,
            last_stack: self.stacks.as_ref().map(|s| s.active_id().to_string()),
        }
    }
}

/// Move a list selection by `delta`, clamped to `len`.
fn step(list: &mut ListState, len: usize, delta: isize) {
    if len == 0 {
        list.select(None);
        return;
    }
    let i = match list.selected() {
        Some(i) => i.saturating_add_signed(delta).min(len - 1),
        None => 0,
    };
    list.select(Some(i));
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::collections::HashMap;
    use std::rc::Rc;

    use crate::state::NavRow;

    struct MemorySource(HashMap<String, String>);

    impl ContentSource for MemorySource {
        fn load(&self, slug: &str) -> Result<Option<Document>> {
            Ok(self.0.get(slug).map(|text| Document::parse(slug, text)))
        }
    }

    fn app_with(session: &Session, path: Option<&str>) -> App {
        let site = Arc::new(SiteConfig::builtin().unwrap());
        let mut docs = HashMap::new();
        docs.insert(
            "notes/web-introduction/html".to_string(),
            "---\ntitle: Html\n---\nTags".to_string(),
        );
        docs.insert(
            "notes/web-introduction/javaScript/basic".to_string(),
            "# 基础知识".to_string(),
        );
        App::new(
            site,
            Box::new(MemorySource(docs)),
            session,
            path.map(str::to_string),
        )
    }

    fn press(app: &mut App, code: KeyCode) {
        app.handle_key(KeyEvent::new(code, KeyModifiers::NONE));
    }

    #[test]
    fn test_starts_on_first_sidebar_link() {
        let app = app_with(&Session::default(), None);
        assert_eq!(app.active_tab, Tab::Home);
        assert_eq!(app.nav.active_path(), Some("/notes/web-introduction/html"));
        assert!(matches!(&app.page, PageContent::Loaded(doc) if doc.title == "Html"));
        assert_eq!(app.stacks.as_ref().unwrap().active_id(), "html");
    }

    #[test]
    fn test_session_restores_page_and_stack() {
        let session = Session {
            last_path: Some("/notes/web-introduction/javaScript/basic".into()),
            last_tab: Tab::Notes,
            last_stack: Some("react".into()),
        };
        let app = app_with(&session, None);

        assert_eq!(app.active_tab, Tab::Notes);
        assert_eq!(app.stacks.as_ref().unwrap().active_id(), "react");
        assert_eq!(app.resources().len(), 2);
        // javaScript group opens because its child is current
        assert!(app.nav.is_open(2));
        assert_eq!(app.session(), session);
    }

    #[test]
    fn test_stack_switch_resets_resources() {
        let mut app = app_with(&Session::default(), None);
        assert_eq!(app.resource_list.selected(), Some(0));

        // html -> css -> js (no resources)
        press(&mut app, KeyCode::Right);
        press(&mut app, KeyCode::Right);
        assert_eq!(app.stacks.as_ref().unwrap().active_id(), "js");
        assert!(app.resources().is_empty());
        assert_eq!(app.resource_list.selected(), None);

        press(&mut app, KeyCode::Right);
        press(&mut app, KeyCode::Down);
        assert_eq!(app.selected_resource().unwrap().title, "Build your own React");
        press(&mut app, KeyCode::Down);
        assert_eq!(app.resource_list.selected(), Some(1));
    }

    #[test]
    fn test_resource_opens_externally() {
        let opened = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&opened);
        let mut app = app_with(&Session::default(), None).with_launcher(Box::new(move |url: &str| {
            sink.borrow_mut().push(url.to_string());
            Ok(())
        }));

        press(&mut app, KeyCode::Enter);
        assert_eq!(
            opened.borrow().as_slice(),
            ["https://developer.mozilla.org/zh-CN/docs/Web/HTML"]
        );
        assert!(app.status.as_deref().unwrap().starts_with("Opened"));
    }

    #[test]
    fn test_sidebar_navigation_starts_new_view() {
        let mut app = app_with(&Session::default(), None);
        press(&mut app, KeyCode::Tab);
        assert_eq!(app.active_tab, Tab::Notes);

        // Open the Documentation group, then follow its first link
        app.nav.toggle(3);
        let row = NavRow::Child { index: 3, child: 0 };
        let action = app.nav.activate(row);
        app.apply_nav_action(action);

        assert_eq!(app.nav.active_path(), Some("/docs/documentation"));
        assert_eq!(
            app.page,
            PageContent::Missing("docs/documentation".to_string())
        );
        assert!(app.nav.is_open(3));
        assert!(!app.nav.is_open(2));
    }

    #[test]
    fn test_disabled_entry_keeps_page() {
        let mut app = app_with(&Session::default(), Some("/docs/documentation"));
        let page_before = app.page.clone();

        let action = app.nav.activate(NavRow::Child { index: 3, child: 2 });
        app.apply_nav_action(action);

        assert_eq!(app.nav.active_path(), Some("/docs/documentation"));
        assert_eq!(app.page, page_before);
    }

    #[test]
    fn test_enter_toggles_focused_group() {
        let mut app = app_with(&Session::default(), None);
        press(&mut app, KeyCode::Tab);

        // Html, Css, javaScript
        press(&mut app, KeyCode::Char('j'));
        press(&mut app, KeyCode::Char('j'));
        assert!(!app.nav.is_open(2));
        press(&mut app, KeyCode::Enter);
        assert!(app.nav.is_open(2));
        press(&mut app, KeyCode::Char(' '));
        assert!(!app.nav.is_open(2));
    }

    #[test]
    fn test_book_page_opens_in_notes() {
        let mut app = app_with(&Session::default(), None);
        press(&mut app, KeyCode::BackTab);
        assert_eq!(app.active_tab, Tab::Books);

        press(&mut app, KeyCode::Enter);
        assert_eq!(app.active_tab, Tab::Notes);
        assert_eq!(app.nav.active_path(), Some("/read-together/details"));
        assert!(app.nav.current_row().is_none());
    }

    #[test]
    fn test_number_keys_follow_header_links() {
        let mut app = app_with(&Session::default(), None);
        assert_eq!(app.active_tab, Tab::Home);

        press(&mut app, KeyCode::Char('1'));
        assert_eq!(app.active_tab, Tab::Notes);
        assert_eq!(app.nav.active_path(), Some("/docs/getting-started/"));
        assert_eq!(
            app.page,
            PageContent::Missing("docs/getting-started".to_string())
        );

        press(&mut app, KeyCode::Char('2'));
        assert_eq!(app.nav.active_path(), Some("/guides"));

        // No third header link
        press(&mut app, KeyCode::Char('3'));
        assert_eq!(app.nav.active_path(), Some("/guides"));
    }

    #[test]
    fn test_book_pages_carry_section_title() {
        let app = app_with(&Session::default(), None);
        let pages = app.book_pages();
        assert_eq!(pages[0].0, "Pages");
        assert_eq!(pages[0].1.href, "/read-together/details");
    }

    #[test]
    fn test_help_swallows_keys() {
        let mut app = app_with(&Session::default(), None);
        press(&mut app, KeyCode::Char('?'));
        assert!(app.show_help);

        press(&mut app, KeyCode::Char('q'));
        assert!(!app.should_quit);

        press(&mut app, KeyCode::Esc);
        assert!(!app.show_help);
        press(&mut app, KeyCode::Char('q'));
        assert!(app.should_quit);
    }
}
