// Sidebar rendering for the navigation tree.
// Groups show an expand marker, the current leaf is highlighted, disabled leaves are dimmed.

use ratatui::{prelude::*, widgets::*};

use crate::state::{NavRow, NavState};

/// Styled line for one sidebar row.
fn row_line(nav: &NavState, row: NavRow, current: Option<NavRow>) -> Line<'static> {
    let Some(entry) = nav.row_entry(row) else {
        return Line::default();
    };

    let indent = "  ".repeat(row.depth());
    let is_current = current == Some(row);

    match row {
        NavRow::Group { index } => {
            let marker = if nav.is_open(index) { "▾ " } else { "▸ " };
            Line::from(vec![
                Span::styled(marker, Style::default().fg(Color::DarkGray)),
                Span::styled(
                    entry.title.clone(),
                    Style::default().add_modifier(Modifier::BOLD),
                ),
            ])
        }
        NavRow::Header { .. } => Line::from(Span::styled(
            format!("  {}", entry.title),
            Style::default().add_modifier(Modifier::BOLD),
        )),
        NavRow::Link { .. } | NavRow::Child { .. } => {
            let style = if entry.disabled {
                Style::default()
                    .fg(Color::DarkGray)
                    .add_modifier(Modifier::DIM)
            } else if is_current {
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::Cyan)
            };

            let mut spans = vec![
                Span::raw(format!("{}  ", indent)),
                Span::styled(entry.title.clone(), style),
            ];
            if entry.external {
                spans.push(Span::styled(" ↗", Style::default().fg(Color::DarkGray)));
            }
            if is_current {
                spans.push(Span::styled(" ●", Style::default().fg(Color::Yellow)));
            }
            Line::from(spans)
        }
    }
}

/// Render the sidebar.
pub fn draw_sidebar(frame: &mut Frame, nav: &NavState, area: Rect) {
    let block = Block::default().borders(Borders::ALL).title(" Notes ");

    if nav.is_empty() {
        let text = Paragraph::new("No navigation configured")
            .alignment(Alignment::Center)
            .style(Style::default().fg(Color::DarkGray))
            .block(block);
        frame.render_widget(text, area);
        return;
    }

    let current = nav.current_row();
    let items: Vec<ListItem> = nav
        .rows()
        .into_iter()
        .map(|row| ListItem::new(row_line(nav, row, current)))
        .collect();

    let mut list_state = ListState::default();
    list_state.select(Some(nav.cursor()));

    let list_widget = List::new(items)
        .block(block)
        .highlight_style(Style::default().bg(Color::DarkGray))
        .highlight_symbol("> ");

    frame.render_stateful_widget(list_widget, area, &mut list_state);
}
