//! Application module
//!
//! Contains the main application logic, state management, and event handling.
//!
//! # Module Structure
//! - `state` - Application state types (AppState, AppMode, Focus, OptionChip)
//! - Main module - App struct and event loop
//!
//! The loop is single-threaded. The first frame is drawn while the catalog
//! is still loading; the catalog is then loaded in place and every later
//! key event is handled to completion before the next one is read.

mod state;

pub use state::{AppMode, AppState, Focus, OptionChip};

use crate::catalog::{CatalogLoader, CatalogSource};
use crate::components::keybindings::{KeyAction, KeybindingContext};
use crate::config::Settings;
use crate::configurator::SelectionOutcome;
use crate::error::Result;
use crate::ui::UiRenderer;
use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind};
use ratatui::{backend::Backend, Terminal};
use std::time::Duration;
use tracing::{debug, info};

/// How long to wait for input before redrawing
const POLL_INTERVAL: Duration = Duration::from_millis(250);

/// Main application struct
pub struct App {
    state: AppState,
    /// Present until the catalog has been handed to the configurator
    loader: Option<CatalogLoader>,
    ui_renderer: UiRenderer,
    /// Keybinding context for dispatch and navigation hints
    keybinding_context: KeybindingContext,
}

impl App {
    /// Create a new application instance
    pub fn new(settings: Settings, source: CatalogSource) -> Self {
        info!("Creating new App instance with {}", source);
        Self {
            state: AppState::new(settings),
            loader: Some(CatalogLoader::new(source)),
            ui_renderer: UiRenderer::new(),
            keybinding_context: KeybindingContext::new(),
        }
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    pub fn keybinding_context(&self) -> &KeybindingContext {
        &self.keybinding_context
    }

    /// Load the catalog and leave the loading state. Runs at most once.
    pub fn finish_loading(&mut self) {
        let Some(loader) = self.loader.take() else {
            return;
        };

        let catalog = loader.load();
        self.state.configurator.catalog_loaded(catalog);
        self.state.status_message = if self.state.configurator.has_product() {
            "Choose a cover colour and a page layout".to_string()
        } else {
            "No products available".to_string()
        };
    }

    /// Toggle help overlay visibility
    pub fn toggle_help(&mut self) {
        self.state.help_visible = !self.state.help_visible;
    }

    /// Draw one frame
    pub fn draw<B: Backend>(&self, terminal: &mut Terminal<B>) -> Result<()> {
        terminal.draw(|f| {
            self.ui_renderer
                .render(f, &self.state, &self.keybinding_context);
        })?;
        Ok(())
    }

    /// Run the main application loop
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> Result<()> {
        info!("Starting main application loop");

        // Show the loading state once, then load
        self.draw(terminal)?;
        self.finish_loading();

        loop {
            self.draw(terminal)?;

            if crossterm::event::poll(POLL_INTERVAL)? {
                match crossterm::event::read()? {
                    Event::Key(key_event) => {
                        if self.handle_key_event(key_event) {
                            break; // Exit requested
                        }
                    }
                    Event::Resize(width, height) => {
                        debug!("Terminal resized to {}x{}", width, height);
                    }
                    _ => {}
                }
            }
        }

        info!("Main application loop finished");
        Ok(())
    }

    /// Handle keyboard input events. Returns `true` when the app should exit.
    pub fn handle_key_event(&mut self, key_event: KeyEvent) -> bool {
        // Release/repeat events arrive on some platforms
        if key_event.kind != KeyEventKind::Press {
            return false;
        }

        // Help overlay swallows everything except its own dismiss keys
        if self.state.help_visible {
            if matches!(key_event.code, KeyCode::Char('?') | KeyCode::Esc) {
                self.toggle_help();
            }
            return false;
        }

        let mode = self.state.mode();
        match self
            .keybinding_context
            .action_for(&mode, key_event.code, key_event.modifiers)
        {
            Some(action) => self.apply_action(action),
            None => false,
        }
    }

    /// Apply a resolved action. Returns `true` when the app should exit.
    pub fn apply_action(&mut self, action: KeyAction) -> bool {
        debug!("Key action: {:?}", action);
        match action {
            KeyAction::Quit => return true,
            KeyAction::Help => self.toggle_help(),
            // Selection controls are not interactive while loading
            _ if self.state.configurator.is_loading() => {}
            KeyAction::PreviousOption => self.state.move_cursor(false),
            KeyAction::NextOption => self.state.move_cursor(true),
            KeyAction::PreviousSection | KeyAction::NextSection => {
                self.state.focus = self.state.focus.toggle();
            }
            KeyAction::Select => self.select_focused(),
        }
        false
    }

    /// Select the option under the cursor in the focused row
    fn select_focused(&mut self) {
        let Some((value, label)) = self
            .state
            .focused_option()
            .and_then(|o| Some((o.value.clone()?, o.label.clone().unwrap_or_default())))
        else {
            return;
        };

        let focus = self.state.focus;
        let outcome = match focus {
            Focus::Colour => self.state.configurator.select_color(value),
            Focus::Layout => self.state.configurator.select_layout(value),
        };

        self.state.status_message = match outcome {
            SelectionOutcome::Ignored => "Still loading the catalog".to_string(),
            SelectionOutcome::Incomplete => match focus {
                Focus::Colour => format!("{} selected, now choose a page layout", label),
                Focus::Layout => format!("{} selected, now choose a cover colour", label),
            },
            SelectionOutcome::Unmatched => {
                format!("{} is not available with this combination", label)
            }
            SelectionOutcome::Resolved { .. } => format!("{} selected", label),
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;

    fn ready_app() -> App {
        let mut app = App::new(Settings::default(), CatalogSource::Embedded);
        app.finish_loading();
        app
    }

    fn press(app: &mut App, code: KeyCode) -> bool {
        app.handle_key_event(KeyEvent::new(code, KeyModifiers::NONE))
    }

    #[test]
    fn test_starts_in_loading_mode() {
        let app = App::new(Settings::default(), CatalogSource::Embedded);
        assert_eq!(app.state().mode(), AppMode::Loading);
    }

    #[test]
    fn test_keys_ignored_while_loading() {
        let mut app = App::new(Settings::default(), CatalogSource::Embedded);
        assert!(!press(&mut app, KeyCode::Enter));
        assert!(!press(&mut app, KeyCode::Right));
        assert!(app.state().configurator.selection().selected_color.is_none());
        assert_eq!(app.state().colour_cursor, 0);
    }

    #[test]
    fn test_finish_loading_runs_once() {
        let mut app = ready_app();
        assert_eq!(app.state().mode(), AppMode::Configurator);
        app.finish_loading();
        assert_eq!(app.state().mode(), AppMode::Configurator);
    }

    #[test]
    fn test_quit_keys() {
        let mut app = ready_app();
        assert!(press(&mut app, KeyCode::Char('q')));
        assert!(press(&mut app, KeyCode::Esc));
    }

    #[test]
    fn test_help_overlay_blocks_selection() {
        let mut app = ready_app();
        press(&mut app, KeyCode::Char('?'));
        assert!(app.state().help_visible);
        assert!(!press(&mut app, KeyCode::Enter));
        assert!(app.state().configurator.selection().selected_color.is_none());
        // Esc closes help instead of quitting
        assert!(!press(&mut app, KeyCode::Esc));
        assert!(!app.state().help_visible);
    }

    #[test]
    fn test_release_events_are_ignored() {
        let mut app = ready_app();
        let mut event = KeyEvent::new(KeyCode::Char('q'), KeyModifiers::NONE);
        event.kind = KeyEventKind::Release;
        assert!(!app.handle_key_event(event));
    }
}
