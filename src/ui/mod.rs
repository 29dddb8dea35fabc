//! User interface rendering module
//!
//! This module is organized into submodules for better maintainability:
//! - `header` - Title bar, product heading, status line, nav bar
//! - `product` - Product image panel
//! - `options` - Colour and layout chip rows
//! - `summary` - Summary table

mod header;
mod options;
mod product;
mod summary;

pub use options::section_title;

use crate::app::{AppMode, AppState, Focus};
use crate::components::keybindings::KeybindingContext;
use crate::theme::{Styles, UiConstants, UiText};
use header::HeaderRenderer;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    widgets::{Paragraph, Wrap},
    Frame,
};

/// UI renderer for the application
///
/// This is the main entry point for UI rendering. It delegates to specialized
/// submodules for different parts of the UI.
pub struct UiRenderer {
    /// Header renderer instance
    header: HeaderRenderer,
}

impl Default for UiRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl UiRenderer {
    /// Create a new UI renderer
    pub fn new() -> Self {
        Self {
            header: HeaderRenderer::new(),
        }
    }

    /// Render the complete UI based on application state
    pub fn render(&self, f: &mut Frame, state: &AppState, keybinding_ctx: &KeybindingContext) {
        let main_chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),                          // Title bar
                Constraint::Min(1),                             // Main content area
                Constraint::Length(1),                          // Status line
                Constraint::Length(UiConstants::NAV_BAR_HEIGHT), // Navigation bar
            ])
            .split(f.area());

        self.header.render_title(f, main_chunks[0]);

        let content_chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Percentage(UiConstants::IMAGE_PANEL_PCT),
                Constraint::Percentage(100 - UiConstants::IMAGE_PANEL_PCT),
            ])
            .split(main_chunks[1]);

        product::render_product_panel(f, content_chunks[0], &state.settings.image_url);

        match state.mode() {
            AppMode::Loading => render_loading(f, content_chunks[1]),
            AppMode::Configurator => self.render_configurator(f, state, content_chunks[1]),
        }

        header::render_status(f, main_chunks[2], &state.status_message);
        header::render_nav_bar(f, state, keybinding_ctx, main_chunks[3]);

        // Render help overlay if visible (on top of everything)
        if state.help_visible {
            header::render_help_overlay(f, state, keybinding_ctx);
        }
    }

    fn render_configurator(&self, f: &mut Frame, state: &AppState, area: Rect) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(2),                              // Heading
                Constraint::Length(2),                              // Description
                Constraint::Length(1),                              // Colour title
                Constraint::Length(UiConstants::OPTION_ROW_HEIGHT), // Colour chips
                Constraint::Length(1),                              // Layout title
                Constraint::Length(UiConstants::OPTION_ROW_HEIGHT), // Layout chips
                Constraint::Length(UiConstants::SUMMARY_HEIGHT),    // Summary
                Constraint::Min(0),
            ])
            .split(area);

        self.header.render_heading(f, chunks[0], state);

        let description = Paragraph::new(state.settings.description.as_str())
            .style(Styles::text_secondary())
            .wrap(Wrap { trim: true });
        f.render_widget(description, chunks[1]);

        options::render_option_section(f, chunks[2], chunks[3], state, Focus::Colour);
        options::render_option_section(f, chunks[4], chunks[5], state, Focus::Layout);

        summary::render_summary(f, chunks[6], &state.summary());
    }
}

/// Loading placeholder; no controls are drawn until the catalog is ready
fn render_loading(f: &mut Frame, area: Rect) {
    let loading = Paragraph::new(UiText::LOADING)
        .style(Styles::text_muted())
        .alignment(Alignment::Center);
    f.render_widget(loading, area);
}
