//! Summary presentation
//!
//! Pure mapping from the current selection to the four summary cells. Each
//! cell carries a stable identifier that differs between its selected and
//! not-selected state, so tests can assert on it without parsing text.

use strum::{Display, EnumIter};

use crate::types::AttributeValue;

/// Placeholder for an unselected colour or layout
pub const NOT_SELECTED: &str = "Not selected";
/// Placeholder for an unknown page count
pub const PAGES_NOT_AVAILABLE: &str = "Not available";
/// Placeholder for an unknown price
pub const PRICE_NOT_AVAILABLE: &str = "Price not available";
/// Currency shown in front of prices unless configured otherwise
pub const DEFAULT_CURRENCY_SYMBOL: &str = "£";

/// Rows of the summary table, in display order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter)]
pub enum SummaryField {
    Pages,
    Colour,
    Layout,
    Price,
}

impl SummaryField {
    /// Identifier prefix of the cell
    pub fn test_id_base(&self) -> &'static str {
        match self {
            Self::Pages => "page",
            Self::Colour => "color",
            Self::Layout => "layout",
            Self::Price => "price",
        }
    }

    fn placeholder(&self) -> &'static str {
        match self {
            Self::Pages => PAGES_NOT_AVAILABLE,
            Self::Colour | Self::Layout => NOT_SELECTED,
            Self::Price => PRICE_NOT_AVAILABLE,
        }
    }
}

/// One rendered summary cell
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SummaryCell {
    pub field: SummaryField,
    pub text: String,
    pub test_id: String,
    pub selected: bool,
}

impl SummaryCell {
    fn new(field: SummaryField, value: Option<String>) -> Self {
        match value {
            Some(text) => Self {
                field,
                text,
                test_id: field.test_id_base().to_string(),
                selected: true,
            },
            None => Self {
                field,
                text: field.placeholder().to_string(),
                test_id: format!("{}-not-selected", field.test_id_base()),
                selected: false,
            },
        }
    }
}

/// The whole summary table
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SummaryView {
    pub cells: Vec<SummaryCell>,
}

impl SummaryView {
    /// Build the summary; every field falls back to its placeholder on its own
    pub fn present(
        color: Option<&AttributeValue>,
        layout: Option<&AttributeValue>,
        price: f64,
        pages: u32,
        currency_symbol: &str,
    ) -> Self {
        let shown = |value: Option<&AttributeValue>| {
            value.filter(|v| v.is_truthy()).map(ToString::to_string)
        };

        let cells = vec![
            SummaryCell::new(SummaryField::Pages, (pages != 0).then(|| pages.to_string())),
            SummaryCell::new(SummaryField::Colour, shown(color)),
            SummaryCell::new(SummaryField::Layout, shown(layout)),
            SummaryCell::new(
                SummaryField::Price,
                (price > 0.0).then(|| format!("{}{}", currency_symbol, price)),
            ),
        ];
        Self { cells }
    }

    pub fn cell(&self, field: SummaryField) -> &SummaryCell {
        // cells always holds one entry per field
        &self.cells[field as usize]
    }

    /// Look up a cell by its current identifier
    pub fn find_by_test_id(&self, test_id: &str) -> Option<&SummaryCell> {
        self.cells.iter().find(|c| c.test_id == test_id)
    }
}
