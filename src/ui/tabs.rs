// Tab bar rendering.
// Top-level tabs plus the tech-stack selector on the home tab.

use ratatui::{prelude::*, widgets::*};

use crate::app::{App, Tab};
use crate::state::TabState;

/// Draw the tab bar at the top of the screen.
pub fn draw_tabs(frame: &mut Frame, app: &App, area: Rect) {
    let tab_titles: Vec<Line> = Tab::ALL
        .iter()
        .map(|tab| {
            let style = if *tab == app.active_tab {
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::White)
            };
            Line::from(Span::styled(tab.title(), style))
        })
        .collect();

    let selected_index = Tab::ALL
        .iter()
        .position(|t| *t == app.active_tab)
        .unwrap_or(0);

    let tabs_widget = Tabs::new(tab_titles)
        .block(
            Block::default()
                .borders(Borders::BOTTOM)
                .border_style(Style::default().fg(Color::DarkGray))
                .title(format!(" {} ", app.site.title))
                .title_top(header_links(app).right_aligned())
                .title_style(
                    Style::default()
                        .fg(Color::Cyan)
                        .add_modifier(Modifier::BOLD),
                ),
        )
        .select(selected_index)
        .highlight_style(Style::default().fg(Color::Yellow))
        .divider(Span::raw(" │ "));

    frame.render_widget(tabs_widget, area);
}

/// Numbered header links, dimmed when disabled.
fn header_links(app: &App) -> Line<'static> {
    let mut spans = Vec::new();
    for (i, entry) in app.site.main_nav.iter().enumerate().take(9) {
        let style = if entry.disabled {
            Style::default().fg(Color::DarkGray)
        } else {
            Style::default().fg(Color::White)
        };
        spans.push(Span::styled(format!("{} ", i + 1), Style::default().fg(Color::Cyan)));
        let mut title = entry.title.clone();
        if entry.external {
            title.push_str(" ↗");
        }
        spans.push(Span::styled(title, style));
        spans.push(Span::raw("  "));
    }
    Line::from(spans)
}

/// Draw the tech-stack selector.
pub fn draw_stack_tabs(frame: &mut Frame, stacks: &TabState, area: Rect) {
    let titles: Vec<Line> = stacks
        .tabs()
        .iter()
        .map(|tab| Line::from(tab.id.as_str()))
        .collect();

    let widget = Tabs::new(titles)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Tech stack "),
        )
        .select(stacks.active_index())
        .highlight_style(
            Style::default()
                .fg(Color::Black)
                .bg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .divider(Span::styled(" · ", Style::default().fg(Color::DarkGray)));

    frame.render_widget(widget, area);
}
