//! Option row rendering
//!
//! One bordered row of chips per selectable dimension.

use crate::app::{AppState, Focus};
use crate::theme::{Styles, Theme, UiText};
use ratatui::{
    layout::{Alignment, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Section title shown above a row
pub fn section_title(row: Focus) -> &'static str {
    match row {
        Focus::Colour => UiText::CHOOSE_COLOUR,
        Focus::Layout => UiText::CHOOSE_LAYOUT,
    }
}

/// Render the section title and the chip row beneath it
pub fn render_option_section(f: &mut Frame, title_area: Rect, row_area: Rect, state: &AppState, row: Focus) {
    f.render_widget(
        Paragraph::new(Span::styled(section_title(row), Styles::section_title())),
        title_area,
    );

    let mut spans: Vec<Span> = Vec::new();
    for chip in state.chips(row) {
        if !spans.is_empty() {
            spans.push(Span::raw("  "));
        }
        let marker = if chip.selected { "●" } else { "○" };
        spans.push(Span::styled(
            format!(" {} {} ", marker, chip.label),
            Theme::chip_style(chip.selected, chip.focused),
        ));
    }

    let focused = state.focus == row;
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Theme::row_border(focused));

    let paragraph = if spans.is_empty() {
        Paragraph::new(Span::styled("No options", Styles::text_muted()))
    } else {
        Paragraph::new(Line::from(spans))
    };
    f.render_widget(paragraph.block(block).alignment(Alignment::Center), row_area);
}
