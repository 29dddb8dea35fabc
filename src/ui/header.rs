//! Header and common widget rendering
//!
//! Title bar, product heading, status line, navigation bar and the help
//! overlay hook.

use crate::app::AppState;
use crate::components::help_overlay::HelpOverlay;
use crate::components::keybindings::KeybindingContext;
use crate::theme::{Styles, UiText};
use ratatui::{
    layout::{Alignment, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Header renderer holding the prebuilt title line
pub struct HeaderRenderer {
    title: Line<'static>,
}

impl Default for HeaderRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl HeaderRenderer {
    /// Create a new header renderer
    pub fn new() -> Self {
        Self {
            title: Line::from(vec![
                Span::styled("▤ ", Styles::title()),
                Span::styled(UiText::APP_TITLE, Styles::title()),
            ]),
        }
    }

    /// Render the title bar
    pub fn render_title(&self, f: &mut Frame, area: Rect) {
        if area.width == 0 || area.height == 0 {
            return;
        }

        let title = Paragraph::new(self.title.clone())
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Styles::border_active()),
            )
            .alignment(Alignment::Center);
        f.render_widget(title, area);
    }

    /// Render the product heading, or the empty-catalog notice
    pub fn render_heading(&self, f: &mut Frame, area: Rect, state: &AppState) {
        let (text, style) = if state.configurator.has_product() {
            (state.heading(), Styles::heading())
        } else {
            (UiText::NO_PRODUCT.to_string(), Styles::error())
        };

        let heading = Paragraph::new(Line::from(Span::styled(text, style)))
            .block(Block::default().borders(Borders::BOTTOM).border_style(Styles::border_inactive()));
        f.render_widget(heading, area);
    }
}

/// Render the status line
pub fn render_status(f: &mut Frame, area: Rect, message: &str) {
    let status = Paragraph::new(Span::styled(message.to_string(), Styles::success()))
        .alignment(Alignment::Left);
    f.render_widget(status, area);
}

/// Render the navigation bar
pub fn render_nav_bar(f: &mut Frame, state: &AppState, keybinding_ctx: &KeybindingContext, area: Rect) {
    let mut spans: Vec<Span> = Vec::new();
    for item in keybinding_ctx.get_nav_items(&state.mode()) {
        if !spans.is_empty() {
            spans.push(Span::styled("  │  ", Styles::nav_hint()));
        }
        spans.push(Span::styled(item.key_display, Styles::key_hint()));
        spans.push(Span::styled(format!(" {}", item.action_label), Styles::nav_hint()));
    }

    f.render_widget(Paragraph::new(Line::from(spans)).alignment(Alignment::Center), area);
}

/// Render the help overlay
pub fn render_help_overlay(f: &mut Frame, state: &AppState, keybinding_ctx: &KeybindingContext) {
    let area = f.area();
    let help_overlay = HelpOverlay::new(&state.mode(), keybinding_ctx);
    help_overlay.render(f, area);
}
