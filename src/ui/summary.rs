//! Summary rendering

use crate::summary::{SummaryField, SummaryView};
use crate::theme::{Styles, Theme, UiText};
use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem},
    Frame,
};

fn row_label(field: SummaryField) -> &'static str {
    match field {
        SummaryField::Pages => "Pages",
        SummaryField::Colour => "Colour",
        SummaryField::Layout => "Layout",
        SummaryField::Price => "Price",
    }
}

/// Render the four summary rows
pub fn render_summary(f: &mut Frame, area: Rect, view: &SummaryView) {
    let items: Vec<ListItem> = view
        .cells
        .iter()
        .map(|cell| {
            ListItem::new(Line::from(vec![
                Span::styled(format!("{:<10}", row_label(cell.field)), Styles::text_secondary()),
                Span::styled(cell.text.clone(), Theme::summary_cell(cell.selected)),
            ]))
        })
        .collect();

    let list = List::new(items).block(
        Block::default()
            .borders(Borders::ALL)
            .title(format!(" {} ", UiText::SUMMARY))
            .border_style(Styles::border_inactive()),
    );
    f.render_widget(list, area);
}
