//! Single stat card rendering.

use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
    Frame,
};

use super::theme::{indicator_color, COLOR_BORDER, COLOR_HEADER};
use crate::models::DisplayRecord;
use crate::stats::format_count;

/// Rows one card occupies in the grid, borders included.
pub const CARD_HEIGHT: u16 = 4;

/// Render one stat card: bordered box, field title, and the count in the
/// record's indicator color.
pub fn render(frame: &mut Frame, area: Rect, record: &DisplayRecord) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(COLOR_BORDER));

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let lines = vec![
        Line::from(Span::styled(
            record.title,
            Style::default().fg(COLOR_HEADER),
        )),
        Line::from(Span::styled(
            format_count(record.value),
            Style::default()
                .fg(indicator_color(record.indicator))
                .add_modifier(Modifier::BOLD),
        )),
    ];

    let paragraph = Paragraph::new(lines).alignment(Alignment::Center);
    frame.render_widget(paragraph, inner);
}
