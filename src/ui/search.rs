//! Country search screen rendering.
//!
//! Shows the incremental filter line, the filtered country list with a
//! selection cursor, and key hints.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
    Frame,
};

use super::theme::{COLOR_ACCENT, COLOR_BORDER, COLOR_DIM, COLOR_ERROR, COLOR_HEADER};
use crate::app::App;

/// Maximum country rows shown at once; the list scrolls with the cursor.
const MAX_VISIBLE_ROWS: usize = 12;

pub fn render_search_screen(frame: &mut Frame, app: &App) {
    let area = frame.area();

    let block = Block::default()
        .title(Span::styled(
            " Search Countries ",
            Style::default()
                .fg(COLOR_HEADER)
                .add_modifier(Modifier::BOLD),
        ))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(COLOR_BORDER));

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2),
            Constraint::Min(0),
            Constraint::Length(1),
        ])
        .split(inner);

    render_filter_line(frame, chunks[0], app);
    render_country_list(frame, chunks[1], app);
    render_hints(frame, chunks[2]);
}

fn render_filter_line(frame: &mut Frame, area: Rect, app: &App) {
    let line = Line::from(vec![
        Span::styled(" Filter: ", Style::default().fg(COLOR_ACCENT)),
        Span::styled(
            if app.search.filter.is_empty() {
                "type to filter...".to_string()
            } else {
                app.search.filter.clone()
            },
            Style::default().fg(if app.search.filter.is_empty() {
                COLOR_DIM
            } else {
                COLOR_HEADER
            }),
        ),
        Span::styled("_", Style::default().fg(COLOR_HEADER)),
    ]);
    frame.render_widget(Paragraph::new(line), area);
}

fn render_country_list(frame: &mut Frame, area: Rect, app: &App) {
    if app.search.loading {
        frame.render_widget(
            Paragraph::new(Line::from(Span::styled(
                " Loading country list...",
                Style::default().fg(COLOR_DIM),
            ))),
            area,
        );
        return;
    }

    if let Some(error) = &app.search.error {
        frame.render_widget(
            Paragraph::new(Line::from(Span::styled(
                format!(" Could not load countries: {}", error),
                Style::default().fg(COLOR_ERROR),
            ))),
            area,
        );
        return;
    }

    let filtered = app.search.filtered();
    if filtered.is_empty() {
        frame.render_widget(
            Paragraph::new(Line::from(Span::styled(
                " No matches",
                Style::default().fg(COLOR_DIM),
            ))),
            area,
        );
        return;
    }

    let visible = MAX_VISIBLE_ROWS.min(area.height as usize);
    // Keep the cursor inside the window.
    let offset = app.search.selected.saturating_sub(visible.saturating_sub(1));

    let mut lines: Vec<Line> = Vec::new();
    for (i, country) in filtered.iter().enumerate().skip(offset).take(visible) {
        let is_selected = i == app.search.selected;
        let pointer = if is_selected { " > " } else { "   " };
        let style = if is_selected {
            Style::default()
                .fg(COLOR_HEADER)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(COLOR_DIM)
        };
        let code = country.code.as_deref().unwrap_or("--");
        lines.push(Line::from(vec![
            Span::raw(pointer),
            Span::styled(country.name.clone(), style),
            Span::styled(format!("  [{}]", code), Style::default().fg(COLOR_DIM)),
        ]));
    }
    frame.render_widget(Paragraph::new(lines), area);
}

fn render_hints(frame: &mut Frame, area: Rect) {
    let hints = Line::from(vec![
        Span::styled(" [Enter] ", Style::default().fg(COLOR_ACCENT)),
        Span::styled("Select", Style::default().fg(COLOR_DIM)),
        Span::raw("  "),
        Span::styled(" [Esc] ", Style::default().fg(COLOR_ACCENT)),
        Span::styled("Cancel", Style::default().fg(COLOR_DIM)),
    ]);
    frame.render_widget(Paragraph::new(hints), area);
}
