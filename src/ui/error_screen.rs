//! Error screen rendering: the terminal handoff target for failed fetches.

use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use super::theme::{COLOR_ACCENT, COLOR_DIM, COLOR_ERROR, COLOR_HEADER};
use crate::app::App;

pub fn render_error_screen(frame: &mut Frame, app: &App) {
    let area = frame.area();

    let mut lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            "Something went wrong",
            Style::default()
                .fg(COLOR_ERROR)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(Span::styled(
            "We couldn't load the latest statistics.",
            Style::default().fg(COLOR_HEADER),
        )),
    ];

    if let Some(error) = &app.last_error {
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            error.clone(),
            Style::default().fg(COLOR_DIM),
        )));
    }

    lines.push(Line::from(""));
    lines.push(Line::from(vec![
        Span::styled(" [r] ", Style::default().fg(COLOR_ACCENT)),
        Span::styled("Retry", Style::default().fg(COLOR_DIM)),
        Span::raw("  "),
        Span::styled(" [Esc] ", Style::default().fg(COLOR_ACCENT)),
        Span::styled("Back", Style::default().fg(COLOR_DIM)),
        Span::raw("  "),
        Span::styled(" [q] ", Style::default().fg(COLOR_ACCENT)),
        Span::styled("Quit", Style::default().fg(COLOR_DIM)),
    ]));

    let vertical_pad = area.height.saturating_sub(lines.len() as u16) / 2;
    let centered = Rect {
        x: area.x,
        y: area.y + vertical_pad,
        width: area.width,
        height: area.height.saturating_sub(vertical_pad),
    };

    let paragraph = Paragraph::new(lines).alignment(Alignment::Center);
    frame.render_widget(paragraph, centered);
}
