// List rendering for resources and book pages.
// Provides styled list views with empty states.

use ratatui::{prelude::*, widgets::*};

use crate::config::{PageItem, Resource};

/// Render an error message.
pub fn render_error(frame: &mut Frame, area: Rect, error: &str) {
    let text = Paragraph::new(format!("❌ {}", error))
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::Red));
    frame.render_widget(text, area);
}

/// Render an empty state message.
pub fn render_empty(frame: &mut Frame, area: Rect, message: &str) {
    let text = Paragraph::new(message)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    frame.render_widget(text, area);
}

fn highlighted(list: List<'_>) -> List<'_> {
    list.highlight_style(
        Style::default()
            .bg(Color::DarkGray)
            .add_modifier(Modifier::BOLD),
    )
    .highlight_symbol("> ")
}

/// Render the resources of the active tech stack.
pub fn render_resources_list(
    frame: &mut Frame,
    resources: &[Resource],
    list_state: &mut ListState,
    area: Rect,
) {
    let block = Block::default().borders(Borders::ALL).title(" Resources ");

    if resources.is_empty() {
        let inner = block.inner(area);
        frame.render_widget(block, area);
        render_empty(frame, inner, "Nothing collected for this stack yet");
        return;
    }

    let items: Vec<ListItem> = resources
        .iter()
        .map(|resource| {
            ListItem::new(vec![
                Line::from(vec![
                    Span::styled(&resource.title, Style::default().fg(Color::Cyan)),
                    Span::styled(
                        format!("  {}", resource.link),
                        Style::default().fg(Color::DarkGray),
                    ),
                ]),
                Line::from(Span::raw(format!("  {}", resource.explain))),
            ])
        })
        .collect();

    frame.render_stateful_widget(highlighted(List::new(items).block(block)), area, list_state);
}

/// Render the book-club pages.
pub fn render_books_list(
    frame: &mut Frame,
    pages: &[(&str, &PageItem)],
    list_state: &mut ListState,
    area: Rect,
) {
    let block = Block::default().borders(Borders::ALL).title(" Read together ");

    if pages.is_empty() {
        let inner = block.inner(area);
        frame.render_widget(block, area);
        render_empty(frame, inner, "No book pages configured");
        return;
    }

    let items: Vec<ListItem> = pages
        .iter()
        .map(|(section, page)| {
            ListItem::new(vec![
                Line::from(vec![
                    Span::styled(
                        page.title.as_str(),
                        Style::default()
                            .fg(Color::Cyan)
                            .add_modifier(Modifier::BOLD),
                    ),
                    Span::styled(
                        format!("  · {}", section),
                        Style::default().fg(Color::DarkGray),
                    ),
                ]),
                Line::from(Span::styled(
                    format!("  {}", page.description),
                    Style::default().fg(Color::Gray),
                )),
            ])
        })
        .collect();

    frame.render_stateful_widget(highlighted(List::new(items).block(block)), area, list_state);
}
