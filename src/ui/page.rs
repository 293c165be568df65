// Document pane.
// Page header (title, optional description, rule) above the scrollable body.

use ratatui::{prelude::*, widgets::*};

use crate::app::PageContent;
use crate::content::Document;

use super::list::{render_empty, render_error};

/// Draw the page for the current view.
pub fn draw_page(frame: &mut Frame, page: &PageContent, scroll: u16, area: Rect) {
    let block = Block::default().borders(Borders::ALL);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    match page {
        PageContent::Idle => render_empty(frame, inner, "Select a page from the sidebar"),
        PageContent::Missing(slug) => {
            render_empty(frame, inner, &format!("'{}' has not been written yet", slug))
        }
        PageContent::Error(e) => render_error(frame, inner, e),
        PageContent::Loaded(doc) => draw_document(frame, doc, scroll, inner),
    }
}

fn draw_document(frame: &mut Frame, doc: &Document, scroll: u16, area: Rect) {
    let header_height = if doc.description.is_some() { 3 } else { 2 };
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(header_height), Constraint::Min(1)])
        .split(area);

    let mut header = vec![Line::from(Span::styled(
        doc.title.as_str(),
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD),
    ))];
    if let Some(description) = &doc.description {
        header.push(Line::from(Span::styled(
            description.as_str(),
            Style::default().fg(Color::DarkGray),
        )));
    }
    let header_widget = Paragraph::new(header).block(
        Block::default()
            .borders(Borders::BOTTOM)
            .border_style(Style::default().fg(Color::DarkGray)),
    );
    frame.render_widget(header_widget, chunks[0]);

    let body: Vec<Line> = doc
        .body
        .lines()
        .map(|line| {
            if line.starts_with('#') {
                Line::from(Span::styled(
                    line,
                    Style::default().add_modifier(Modifier::BOLD),
                ))
            } else if line.starts_with("```") {
                Line::from(Span::styled(line, Style::default().fg(Color::DarkGray)))
            } else {
                Line::from(line)
            }
        })
        .collect();

    let body_widget = Paragraph::new(body)
        .wrap(Wrap { trim: false })
        .scroll((scroll, 0));
    frame.render_widget(body_widget, chunks[1]);
}
