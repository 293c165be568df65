// UI module for rendering the TUI.
// Contains widgets for tabs, the notes sidebar, document pane, and resource lists.

mod list;
mod page;
mod sidebar;
mod tabs;

use ratatui::{prelude::*, widgets::*};

use crate::app::{App, Tab};

/// Width of the notes sidebar.
const SIDEBAR_WIDTH: u16 = 34;

/// Main draw function that renders the entire UI.
pub fn draw(frame: &mut Frame, app: &mut App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Tab bar
            Constraint::Min(1),    // Main content
            Constraint::Length(1), // Status bar
        ])
        .split(frame.area());

    tabs::draw_tabs(frame, app, chunks[0]);
    draw_content(frame, app, chunks[1]);
    draw_status_bar(frame, app, chunks[2]);

    // Help overlay (rendered last, on top of everything)
    if app.show_help {
        draw_help_overlay(frame);
    }
}

/// Draw the main content area based on active tab.
fn draw_content(frame: &mut Frame, app: &mut App, area: Rect) {
    match app.active_tab {
        Tab::Home => draw_home_tab(frame, app, area),
        Tab::Notes => draw_notes_tab(frame, app, area),
        Tab::Books => {
            let mut list_state = app.books_list.clone();
            list::render_books_list(frame, &app.book_pages(), &mut list_state, area);
            app.books_list = list_state;
        }
    }
}

/// Draw the tech-stack selector and its resources.
fn draw_home_tab(frame: &mut Frame, app: &mut App, area: Rect) {
    let Some(stacks) = &app.stacks else {
        list::render_empty(frame, area, "No tech stack configured");
        return;
    };

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(1)])
        .split(area);

    tabs::draw_stack_tabs(frame, stacks, chunks[0]);

    let mut list_state = app.resource_list.clone();
    list::render_resources_list(frame, app.resources(), &mut list_state, chunks[1]);
    app.resource_list = list_state;
}

/// Draw the sidebar next to the current page.
fn draw_notes_tab(frame: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(SIDEBAR_WIDTH), Constraint::Min(1)])
        .split(area);

    sidebar::draw_sidebar(frame, &app.nav, chunks[0]);
    page::draw_page(frame, &app.page, app.page_scroll, chunks[1]);
}

/// Draw the status bar with keybinding hints or the latest message.
fn draw_status_bar(frame: &mut Frame, app: &App, area: Rect) {
    if let Some(status) = &app.status {
        let status = Paragraph::new(Line::from(Span::styled(
            format!(" {}", status),
            Style::default().fg(Color::Yellow),
        )));
        frame.render_widget(status, area);
        return;
    }

    let hints = match app.active_tab {
        Tab::Home => vec![
            Span::raw(" ←→ "),
            Span::styled("Stack", Style::default().fg(Color::DarkGray)),
            Span::raw("  ↑↓ "),
            Span::styled("Navigate", Style::default().fg(Color::DarkGray)),
            Span::raw("  ↵/o "),
            Span::styled("Open link", Style::default().fg(Color::DarkGray)),
        ],
        Tab::Notes => vec![
            Span::raw(" ↑↓ "),
            Span::styled("Navigate", Style::default().fg(Color::DarkGray)),
            Span::raw("  ↵/Space "),
            Span::styled("Toggle/Open", Style::default().fg(Color::DarkGray)),
            Span::raw("  PgUp/Dn "),
            Span::styled("Scroll", Style::default().fg(Color::DarkGray)),
        ],
        Tab::Books => vec![
            Span::raw(" ↑↓ "),
            Span::styled("Navigate", Style::default().fg(Color::DarkGray)),
            Span::raw("  ↵ "),
            Span::styled("Read", Style::default().fg(Color::DarkGray)),
        ],
    };

    let mut spans = hints;
    spans.extend([
        Span::raw("  Tab "),
        Span::styled("Switch", Style::default().fg(Color::DarkGray)),
        Span::raw("  ? "),
        Span::styled("Help", Style::default().fg(Color::DarkGray)),
        Span::raw("  q "),
        Span::styled("Quit", Style::default().fg(Color::DarkGray)),
    ]);

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

/// Draw the help overlay.
fn draw_help_overlay(frame: &mut Frame) {
    let area = frame.area();

    // Create a centered popup
    let popup_width = 52.min(area.width);
    let popup_height = 16.min(area.height);
    let popup_x = (area.width.saturating_sub(popup_width)) / 2;
    let popup_y = (area.height.saturating_sub(popup_height)) / 2;

    let popup_area = Rect::new(popup_x, popup_y, popup_width, popup_height);

    // Clear the area behind the popup
    frame.render_widget(Clear, popup_area);

    let key = |k: &'static str, what: &'static str| {
        Line::from(vec![
            Span::styled(k, Style::default().fg(Color::Cyan)),
            Span::raw(what),
        ])
    };

    let help_text = vec![
        Line::from(vec![Span::styled(
            "Keyboard Shortcuts",
            Style::default().add_modifier(Modifier::BOLD),
        )]),
        Line::from(""),
        key("  ↑/↓ or j/k    ", "Move selection"),
        key("  ←/→ or h/l    ", "Switch tech stack (home)"),
        key("  Enter / Space ", "Expand group / open page"),
        key("  o             ", "Open resource link"),
        key("  PgUp/Dn u/d   ", "Scroll page"),
        key("  g/G           ", "First/last sidebar entry"),
        key("  Tab           ", "Switch tabs"),
        key("  1-9           ", "Follow header link"),
        key("  ?             ", "Show/hide this help"),
        key("  q             ", "Quit"),
        Line::from(""),
        Line::from(vec![
            Span::styled("Press ", Style::default().fg(Color::DarkGray)),
            Span::styled("Esc", Style::default().fg(Color::Yellow)),
            Span::styled(" or ", Style::default().fg(Color::DarkGray)),
            Span::styled("?", Style::default().fg(Color::Yellow)),
            Span::styled(" to close", Style::default().fg(Color::DarkGray)),
        ]),
    ];

    let help_paragraph = Paragraph::new(help_text)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Cyan))
                .title(" Help ")
                .title_style(
                    Style::default()
                        .fg(Color::Cyan)
                        .add_modifier(Modifier::BOLD),
                ),
        )
        .alignment(Alignment::Left);

    frame.render_widget(help_paragraph, popup_area);
}
