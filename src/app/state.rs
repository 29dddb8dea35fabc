//! Application state definitions
//!
//! Contains the screen-level state wrapped around the configurator: which
//! option row has focus, where the cursor sits in each row, and the help
//! overlay and status line.

use strum::{Display, EnumIter};

use crate::catalog::Attribute;
use crate::config::Settings;
use crate::configurator::{Configurator, Phase};
use crate::summary::SummaryView;
use crate::types::AttributeValue;

/// Application operating modes
#[derive(Debug, Clone, PartialEq, Eq, Hash, Display, EnumIter)]
pub enum AppMode {
    /// Waiting for the catalog; no controls are shown
    Loading,
    /// Option rows and summary are interactive
    Configurator,
}

/// The two option rows
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Display, EnumIter)]
pub enum Focus {
    #[default]
    Colour,
    Layout,
}

impl Focus {
    pub fn toggle(self) -> Self {
        match self {
            Self::Colour => Self::Layout,
            Self::Layout => Self::Colour,
        }
    }

    /// Identifier prefix of the chips in this row
    pub fn chip_prefix(&self) -> &'static str {
        match self {
            Self::Colour => "color",
            Self::Layout => "layout",
        }
    }
}

/// One option button as displayed
#[derive(Debug, Clone, PartialEq)]
pub struct OptionChip {
    /// Stable identifier, `color-<label>` or `layout-<label>`
    pub id: String,
    pub label: String,
    pub value: AttributeValue,
    pub selected: bool,
    /// Cursor is on this chip and its row has focus
    pub focused: bool,
}

/// Main application state
#[derive(Debug, Clone)]
pub struct AppState {
    pub configurator: Configurator,
    pub settings: Settings,
    /// Row receiving Left/Right/Enter
    pub focus: Focus,
    pub colour_cursor: usize,
    pub layout_cursor: usize,
    /// Whether help overlay is visible
    pub help_visible: bool,
    /// Status message for user feedback
    pub status_message: String,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(Settings::default())
    }
}

impl AppState {
    pub fn new(settings: Settings) -> Self {
        Self {
            configurator: Configurator::new(settings.product_label.clone()),
            settings,
            focus: Focus::default(),
            colour_cursor: 0,
            layout_cursor: 0,
            help_visible: false,
            status_message: "Loading product catalog...".to_string(),
        }
    }

    /// Mode follows the configurator phase
    pub fn mode(&self) -> AppMode {
        match self.configurator.phase() {
            Phase::Loading => AppMode::Loading,
            Phase::Ready => AppMode::Configurator,
        }
    }

    pub fn options(&self, row: Focus) -> &[Attribute] {
        match row {
            Focus::Colour => self.configurator.colour_options(),
            Focus::Layout => self.configurator.layout_options(),
        }
    }

    pub fn cursor(&self, row: Focus) -> usize {
        match row {
            Focus::Colour => self.colour_cursor,
            Focus::Layout => self.layout_cursor,
        }
    }

    fn cursor_mut(&mut self, row: Focus) -> &mut usize {
        match row {
            Focus::Colour => &mut self.colour_cursor,
            Focus::Layout => &mut self.layout_cursor,
        }
    }

    /// Move the cursor of the focused row, wrapping at both ends
    pub fn move_cursor(&mut self, forward: bool) {
        let len = self.options(self.focus).len();
        if len == 0 {
            return;
        }
        let cursor = self.cursor_mut(self.focus);
        *cursor = if forward {
            (*cursor + 1) % len
        } else {
            (*cursor + len - 1) % len
        };
    }

    /// Option under the cursor of the focused row
    pub fn focused_option(&self) -> Option<&Attribute> {
        self.options(self.focus).get(self.cursor(self.focus))
    }

    fn selected_value(&self, row: Focus) -> Option<&AttributeValue> {
        let selection = self.configurator.selection();
        match row {
            Focus::Colour => selection.selected_color.as_ref(),
            Focus::Layout => selection.selected_layout.as_ref(),
        }
    }

    /// Chips for one row, in option order
    pub fn chips(&self, row: Focus) -> Vec<OptionChip> {
        let selected = self.selected_value(row);
        let cursor = self.cursor(row);

        self.options(row)
            .iter()
            .enumerate()
            .filter_map(|(index, attr)| {
                let value = attr.value.clone()?;
                let label = attr.label.clone()?;
                Some(OptionChip {
                    id: format!("{}-{}", row.chip_prefix(), label),
                    selected: selected == Some(&value),
                    focused: self.focus == row && index == cursor,
                    label,
                    value,
                })
            })
            .collect()
    }

    pub fn heading(&self) -> String {
        self.configurator.heading()
    }

    pub fn summary(&self) -> SummaryView {
        self.configurator.summary(&self.settings.currency_symbol)
    }
}
