//! Stats screen rendering: header, two-column card grid, loading spinner.

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use super::card;
use super::theme::{indicator_color, COLOR_ACCENT, COLOR_DIM, COLOR_HEADER};
use crate::app::App;
use crate::models::DisplayRecord;
use crate::stats::format_count;
use crate::view_state::Phase;

/// Spinner frames for the loading state.
const SPINNER: &[&str] = &["◐", "◓", "◑", "◒"];

/// Rows reserved for the header block (title, updated line, spacing).
const HEADER_HEIGHT: u16 = 4;

pub fn render_stats_screen(frame: &mut Frame, app: &App) {
    let area = frame.area();

    if app.view.phase == Phase::Loading || app.view.phase == Phase::Idle {
        render_loading(frame, area, app.tick_count);
        return;
    }

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(HEADER_HEIGHT),
            Constraint::Min(0),
            Constraint::Length(1),
        ])
        .split(area);

    render_header(frame, chunks[0], app);
    render_card_grid(frame, chunks[1], app);
    render_footer(frame, chunks[2]);
}

fn render_loading(frame: &mut Frame, area: Rect, tick_count: u64) {
    let spinner = SPINNER[(tick_count as usize) % SPINNER.len()];
    let lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            format!("{} Loading statistics...", spinner),
            Style::default().fg(COLOR_ACCENT),
        )),
    ];
    let vertical_pad = area.height / 2;
    let centered = Rect {
        x: area.x,
        y: area.y + vertical_pad.saturating_sub(1),
        width: area.width,
        height: area.height.saturating_sub(vertical_pad.saturating_sub(1)),
    };
    let paragraph = Paragraph::new(lines).alignment(Alignment::Center);
    frame.render_widget(paragraph, centered);
}

fn render_header(frame: &mut Frame, area: Rect, app: &App) {
    let mut title_spans = vec![Span::styled(
        app.view.page_title.clone(),
        Style::default()
            .fg(COLOR_HEADER)
            .add_modifier(Modifier::BOLD),
    )];
    if app.view.phase == Phase::Refreshing {
        let spinner = SPINNER[(app.tick_count as usize) % SPINNER.len()];
        title_spans.push(Span::styled(
            format!("  {} refreshing", spinner),
            Style::default().fg(COLOR_ACCENT),
        ));
    }

    let lines = vec![
        Line::from(""),
        Line::from(title_spans),
        Line::from(Span::styled(
            app.view.last_updated.clone(),
            Style::default().fg(COLOR_DIM),
        )),
    ];
    let paragraph = Paragraph::new(lines).alignment(Alignment::Center);
    frame.render_widget(paragraph, area);
}

fn render_card_grid(frame: &mut Frame, area: Rect, app: &App) {
    if app.view.records.is_empty() {
        let paragraph = Paragraph::new(Line::from(Span::styled(
            "No statistics reported for this scope",
            Style::default().fg(COLOR_DIM),
        )))
        .alignment(Alignment::Center);
        frame.render_widget(paragraph, area);
        return;
    }

    let row_count = app.view.records.chunks(2).len() as u16;

    // On a terminal too short for the full grid, fall back to one line per
    // record rather than dropping cards.
    if row_count * card::CARD_HEIGHT > area.height {
        render_compact_list(frame, area, &app.view.records);
        return;
    }

    let row_constraints: Vec<Constraint> = (0..row_count)
        .map(|_| Constraint::Length(card::CARD_HEIGHT))
        .collect();
    let row_areas = Layout::default()
        .direction(Direction::Vertical)
        .constraints(row_constraints)
        .split(area);

    for (row_area, pair) in row_areas.iter().zip(app.view.records.chunks(2)) {
        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
            .split(*row_area);
        for (column, record) in columns.iter().zip(pair) {
            card::render(frame, *column, record);
        }
    }
}

fn render_compact_list(frame: &mut Frame, area: Rect, records: &[DisplayRecord]) {
    let lines: Vec<Line> = records
        .iter()
        .map(|record| {
            Line::from(vec![
                Span::styled(
                    format!(" {:<12} ", record.title),
                    Style::default().fg(COLOR_HEADER),
                ),
                Span::styled(
                    format_count(record.value),
                    Style::default()
                        .fg(indicator_color(record.indicator))
                        .add_modifier(Modifier::BOLD),
                ),
            ])
        })
        .collect();
    frame.render_widget(Paragraph::new(lines), area);
}

fn render_footer(frame: &mut Frame, area: Rect) {
    let hints = Line::from(vec![
        Span::styled(" [r] ", Style::default().fg(COLOR_ACCENT)),
        Span::styled("Refresh", Style::default().fg(COLOR_DIM)),
        Span::raw("  "),
        Span::styled(" [s] ", Style::default().fg(COLOR_ACCENT)),
        Span::styled("Search", Style::default().fg(COLOR_DIM)),
        Span::raw("  "),
        Span::styled(" [g] ", Style::default().fg(COLOR_ACCENT)),
        Span::styled("Global", Style::default().fg(COLOR_DIM)),
        Span::raw("  "),
        Span::styled(" [q] ", Style::default().fg(COLOR_ACCENT)),
        Span::styled("Quit", Style::default().fg(COLOR_DIM)),
    ]);
    frame.render_widget(Paragraph::new(hints).alignment(Alignment::Center), area);
}
