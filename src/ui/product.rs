//! Product image panel
//!
//! The terminal cannot show the product shot, so the panel draws a small
//! notebook and prints the image URL underneath.

use crate::theme::{Colors, Styles, UiText};
use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

const NOTEBOOK_ART: [&str; 7] = [
    " ┌────────────┐",
    " │▌           │",
    " │▌  ░░░░░░   │",
    " │▌           │",
    " │▌           │",
    " │▌           │",
    " └────────────┘",
];

/// Render the image panel
pub fn render_product_panel(f: &mut Frame, area: Rect, image_url: &str) {
    let mut lines: Vec<Line> = NOTEBOOK_ART
        .iter()
        .map(|row| Line::from(Span::styled(*row, Style::default().fg(Colors::ACCENT))))
        .collect();
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(image_url.to_string(), Styles::text_muted())));

    let panel = Paragraph::new(lines)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(format!(" {} ", UiText::PRODUCT_SHOT))
                .border_style(Styles::border_inactive()),
        )
        .wrap(Wrap { trim: false });
    f.render_widget(panel, area);
}
