//! Centralized theme and styling for the TUI
//!
//! This module provides a single source of truth for all colors, styles,
//! and visual constants used by the configurator screen.
//!
//! # Usage
//! ```rust
//! use notebook_configurator::theme::{Colors, Styles, Theme};
//! use ratatui::style::Style;
//!
//! // Use color constants
//! let style = Style::default().fg(Colors::PRIMARY);
//!
//! // Use pre-built styles
//! let title_style = Styles::title();
//!
//! // Option chip style depends on selection and focus
//! let chip = Theme::chip_style(true, false);
//! ```

use ratatui::style::{Color, Modifier, Style};

// =============================================================================
// COLOR PALETTE
// =============================================================================

/// Core color palette for the application
pub struct Colors;

impl Colors {
    // -------------------------------------------------------------------------
    // Base Colors (backgrounds, foregrounds)
    // -------------------------------------------------------------------------

    /// Popup background
    pub const BG_PRIMARY: Color = Color::Rgb(20, 20, 30);

    /// Default foreground text color
    pub const FG_PRIMARY: Color = Color::White;

    /// Body copy (description, labels)
    pub const FG_SECONDARY: Color = Color::Rgb(200, 200, 200);

    /// Disabled/inactive text color
    pub const FG_MUTED: Color = Color::DarkGray;

    // -------------------------------------------------------------------------
    // Accent Colors
    // -------------------------------------------------------------------------

    /// Borders and titles
    pub const PRIMARY: Color = Color::Cyan;

    /// Key hints
    pub const SECONDARY: Color = Color::Yellow;

    /// Selected option chip (brand green)
    pub const ACCENT: Color = Color::Rgb(0, 204, 153);

    // -------------------------------------------------------------------------
    // UI Element Colors
    // -------------------------------------------------------------------------

    /// Active border color
    pub const BORDER_ACTIVE: Color = Color::Cyan;

    /// Inactive/unfocused border color
    pub const BORDER_INACTIVE: Color = Color::DarkGray;

    /// Unselected chip border/text
    pub const CHIP_IDLE: Color = Color::Rgb(163, 163, 163);

    /// Text on top of the accent background
    pub const SELECTED_FG: Color = Color::Black;

    /// Heading text
    pub const HEADER: Color = Color::White;

    /// Navigation hint color
    pub const NAV_HINT: Color = Color::DarkGray;

    // -------------------------------------------------------------------------
    // Semantic Colors
    // -------------------------------------------------------------------------

    pub const SUCCESS: Color = Color::Green;

    pub const ERROR: Color = Color::Red;
}

// =============================================================================
// PRE-BUILT STYLES
// =============================================================================

/// Pre-built styles for common UI patterns
pub struct Styles;

impl Styles {
    /// Default text style
    pub fn text() -> Style {
        Style::default().fg(Colors::FG_PRIMARY)
    }

    /// Secondary text (description, table labels)
    pub fn text_secondary() -> Style {
        Style::default().fg(Colors::FG_SECONDARY)
    }

    /// Muted text
    pub fn text_muted() -> Style {
        Style::default().fg(Colors::FG_MUTED)
    }

    /// Main title style (cyan, bold)
    pub fn title() -> Style {
        Style::default()
            .fg(Colors::PRIMARY)
            .add_modifier(Modifier::BOLD)
    }

    /// Product heading
    pub fn heading() -> Style {
        Style::default()
            .fg(Colors::HEADER)
            .add_modifier(Modifier::BOLD)
    }

    /// "Choose your colour" style section titles
    pub fn section_title() -> Style {
        Style::default()
            .fg(Colors::FG_SECONDARY)
            .add_modifier(Modifier::BOLD)
    }

    pub fn border_active() -> Style {
        Style::default().fg(Colors::BORDER_ACTIVE)
    }

    pub fn border_inactive() -> Style {
        Style::default().fg(Colors::BORDER_INACTIVE)
    }

    /// Popup background
    pub fn panel_bg() -> Style {
        Style::default().bg(Colors::BG_PRIMARY)
    }

    /// Summary value that is set
    pub fn summary_value() -> Style {
        Style::default()
            .fg(Colors::FG_PRIMARY)
            .add_modifier(Modifier::BOLD)
    }

    /// Summary placeholder
    pub fn summary_placeholder() -> Style {
        Style::default()
            .fg(Colors::FG_MUTED)
            .add_modifier(Modifier::ITALIC)
    }

    /// Empty-catalog notice
    pub fn error() -> Style {
        Style::default()
            .fg(Colors::ERROR)
            .add_modifier(Modifier::BOLD)
    }

    pub fn success() -> Style {
        Style::default().fg(Colors::SUCCESS)
    }

    /// Key in the nav bar
    pub fn key_hint() -> Style {
        Style::default()
            .fg(Colors::SECONDARY)
            .add_modifier(Modifier::BOLD)
    }

    /// Navigation hint (keybindings)
    pub fn nav_hint() -> Style {
        Style::default().fg(Colors::NAV_HINT)
    }
}

// =============================================================================
// THEME CONTEXT
// =============================================================================

/// Theme context providing semantic style lookups
pub struct Theme;

impl Theme {
    /// Style for an option chip.
    ///
    /// Selection wins over focus for the fill; focus adds an underline so the
    /// cursor stays visible on a selected chip.
    pub fn chip_style(selected: bool, focused: bool) -> Style {
        let base = if selected {
            Style::default()
                .fg(Colors::SELECTED_FG)
                .bg(Colors::ACCENT)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Colors::CHIP_IDLE)
        };

        if focused {
            base.add_modifier(Modifier::UNDERLINED | Modifier::BOLD)
        } else {
            base
        }
    }

    /// Border style for an option row
    pub fn row_border(focused: bool) -> Style {
        if focused {
            Styles::border_active()
        } else {
            Styles::border_inactive()
        }
    }

    /// Style for a summary cell
    pub fn summary_cell(selected: bool) -> Style {
        if selected {
            Styles::summary_value()
        } else {
            Styles::summary_placeholder()
        }
    }
}

// =============================================================================
// UI CONSTANTS
// =============================================================================

/// UI dimension and layout constants
pub struct UiConstants;

impl UiConstants {
    /// Nav bar height
    pub const NAV_BAR_HEIGHT: u16 = 1;

    /// Share of the width given to the product image panel
    pub const IMAGE_PANEL_PCT: u16 = 30;

    /// Height of one option row (borders + chips)
    pub const OPTION_ROW_HEIGHT: u16 = 3;

    /// Summary table height (borders + four rows)
    pub const SUMMARY_HEIGHT: u16 = 6;

    /// Help popup width percentage
    pub const HELP_WIDTH_PCT: u16 = 60;

    /// Help popup height percentage
    pub const HELP_HEIGHT_PCT: u16 = 60;
}

// =============================================================================
// TEXT CONSTANTS
// =============================================================================

/// Common UI text strings
pub struct UiText;

impl UiText {
    pub const APP_TITLE: &'static str = "Notebook Configurator";
    pub const LOADING: &'static str = "Loading...";
    pub const NO_PRODUCT: &'static str = "No product found";
    pub const CHOOSE_COLOUR: &'static str = "Choose your colour";
    pub const CHOOSE_LAYOUT: &'static str = "Choose your page layout";
    pub const SUMMARY: &'static str = "Summary";
    pub const PRODUCT_SHOT: &'static str = "Product shot";
}
