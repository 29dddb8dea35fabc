//! Keybinding system for context-aware keyboard shortcuts
//!
//! Provides a registry of keybindings that change based on the current application mode.
//! The same registry drives key dispatch, the navigation bar and the help overlay.

use crate::app::AppMode;
use crossterm::event::{KeyCode, KeyModifiers};
use std::collections::HashMap;

/// Actions that can be triggered by keybindings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyAction {
    PreviousOption,
    NextOption,
    PreviousSection,
    NextSection,
    Select,
    Help,
    Quit,
}

/// A keybinding definition
#[derive(Debug, Clone)]
pub struct Keybinding {
    pub key: KeyCode,
    pub modifiers: KeyModifiers,
    pub action: KeyAction,
    pub display: String,
    pub description: String,
    /// Hidden bindings work but are left out of the nav bar and help
    pub hidden: bool,
}

impl Keybinding {
    /// Create a new keybinding with no modifiers
    pub fn new(key: KeyCode, action: KeyAction, display: &str, description: &str) -> Self {
        Self {
            key,
            modifiers: KeyModifiers::NONE,
            action,
            display: display.to_string(),
            description: description.to_string(),
            hidden: false,
        }
    }

    /// Create a keybinding with modifiers
    pub fn with_modifiers(
        key: KeyCode,
        modifiers: KeyModifiers,
        action: KeyAction,
        display: &str,
        description: &str,
    ) -> Self {
        Self {
            modifiers,
            ..Self::new(key, action, display, description)
        }
    }

    /// Alternate key for an action already listed
    pub fn alias(key: KeyCode, action: KeyAction) -> Self {
        Self {
            hidden: true,
            ..Self::new(key, action, "", "")
        }
    }

    fn matches(&self, key: KeyCode, modifiers: KeyModifiers) -> bool {
        // Shift is implied by the key itself for Char keys and BackTab
        let modifiers = match key {
            KeyCode::Char(_) | KeyCode::BackTab => modifiers.difference(KeyModifiers::SHIFT),
            _ => modifiers,
        };
        self.key == key && self.modifiers == modifiers
    }
}

/// Context-aware keybinding registry
pub struct KeybindingContext {
    /// Mode-specific keybindings
    mode_bindings: HashMap<AppMode, Vec<Keybinding>>,
    /// Global keybindings (available in all modes)
    global_bindings: Vec<Keybinding>,
}

impl Default for KeybindingContext {
    fn default() -> Self {
        Self::new()
    }
}

impl KeybindingContext {
    /// Create a new keybinding context with default bindings
    pub fn new() -> Self {
        let mut ctx = Self {
            mode_bindings: HashMap::new(),
            global_bindings: Vec::new(),
        };
        ctx.register_defaults();
        ctx
    }

    /// Register default keybindings for all modes
    fn register_defaults(&mut self) {
        self.global_bindings = vec![
            Keybinding::new(KeyCode::Char('?'), KeyAction::Help, "?", "Help"),
            Keybinding::new(KeyCode::Char('q'), KeyAction::Quit, "Q", "Quit"),
            Keybinding::alias(KeyCode::Esc, KeyAction::Quit),
            Keybinding {
                hidden: true,
                ..Keybinding::with_modifiers(
                    KeyCode::Char('c'),
                    KeyModifiers::CONTROL,
                    KeyAction::Quit,
                    "Ctrl+C",
                    "Quit",
                )
            },
        ];

        // Nothing to select until the catalog arrives
        self.mode_bindings.insert(AppMode::Loading, Vec::new());

        self.mode_bindings.insert(
            AppMode::Configurator,
            vec![
                Keybinding::new(KeyCode::Left, KeyAction::PreviousOption, "Left", "Previous option"),
                Keybinding::alias(KeyCode::Char('h'), KeyAction::PreviousOption),
                Keybinding::new(KeyCode::Right, KeyAction::NextOption, "Right", "Next option"),
                Keybinding::alias(KeyCode::Char('l'), KeyAction::NextOption),
                Keybinding::new(KeyCode::Up, KeyAction::PreviousSection, "Up", "Colour row"),
                Keybinding::alias(KeyCode::Char('k'), KeyAction::PreviousSection),
                Keybinding::alias(KeyCode::BackTab, KeyAction::PreviousSection),
                Keybinding::new(KeyCode::Down, KeyAction::NextSection, "Down", "Layout row"),
                Keybinding::alias(KeyCode::Char('j'), KeyAction::NextSection),
                Keybinding::new(KeyCode::Tab, KeyAction::NextSection, "Tab", "Switch row"),
                Keybinding::new(KeyCode::Enter, KeyAction::Select, "Enter", "Choose option"),
                Keybinding::alias(KeyCode::Char(' '), KeyAction::Select),
            ],
        );
    }

    /// Get keybindings for a specific mode (includes global bindings)
    pub fn get_bindings(&self, mode: &AppMode) -> Vec<&Keybinding> {
        let mut bindings: Vec<&Keybinding> = Vec::new();

        if let Some(mode_bindings) = self.mode_bindings.get(mode) {
            bindings.extend(mode_bindings.iter());
        }
        bindings.extend(self.global_bindings.iter());

        bindings
    }

    /// Resolve a key press to an action in the given mode
    pub fn action_for(
        &self,
        mode: &AppMode,
        key: KeyCode,
        modifiers: KeyModifiers,
    ) -> Option<KeyAction> {
        self.get_bindings(mode)
            .into_iter()
            .find(|b| b.matches(key, modifiers))
            .map(|b| b.action)
    }

    /// Get navigation bar items for display
    pub fn get_nav_items(&self, mode: &AppMode) -> Vec<NavBarItem> {
        let bindings = self.get_bindings(mode);
        let mut items: Vec<NavBarItem> = Vec::new();

        // Left/Right and Up/Down collapse into one item each
        let has = |action: KeyAction| bindings.iter().any(|b| b.action == action);
        if has(KeyAction::PreviousOption) && has(KeyAction::NextOption) {
            items.push(NavBarItem {
                key_display: "Left/Right".to_string(),
                action_label: "Option".to_string(),
            });
        }
        if has(KeyAction::PreviousSection) && has(KeyAction::NextSection) {
            items.push(NavBarItem {
                key_display: "Up/Dn".to_string(),
                action_label: "Row".to_string(),
            });
        }

        for action in [KeyAction::Select, KeyAction::Help, KeyAction::Quit] {
            if let Some(binding) = bindings.iter().find(|b| b.action == action && !b.hidden) {
                items.push(NavBarItem {
                    key_display: binding.display.clone(),
                    action_label: binding.description.clone(),
                });
            }
        }

        items
    }

    /// Get full help content for a mode (for help overlay)
    pub fn get_help_content(&self, mode: &AppMode) -> Vec<HelpSection> {
        let section = |title: &str, filter: fn(KeyAction) -> bool| {
            let items: Vec<(String, String)> = self
                .get_bindings(mode)
                .into_iter()
                .filter(|b| !b.hidden && filter(b.action))
                .map(|b| (b.display.clone(), b.description.clone()))
                .collect();
            (!items.is_empty()).then(|| HelpSection {
                title: title.to_string(),
                items,
            })
        };

        [
            section("Navigation", |a| {
                matches!(
                    a,
                    KeyAction::PreviousOption
                        | KeyAction::NextOption
                        | KeyAction::PreviousSection
                        | KeyAction::NextSection
                )
            }),
            section("Actions", |a| a == KeyAction::Select),
            section("General", |a| matches!(a, KeyAction::Help | KeyAction::Quit)),
        ]
        .into_iter()
        .flatten()
        .collect()
    }
}

/// Navigation bar item for display
#[derive(Debug, Clone)]
pub struct NavBarItem {
    pub key_display: String,
    pub action_label: String,
}

/// Help section for the help overlay
#[derive(Debug, Clone)]
pub struct HelpSection {
    pub title: String,
    pub items: Vec<(String, String)>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_arrow_keys_in_configurator() {
        let ctx = KeybindingContext::new();
        let mode = AppMode::Configurator;
        assert_eq!(
            ctx.action_for(&mode, KeyCode::Left, KeyModifiers::NONE),
            Some(KeyAction::PreviousOption)
        );
        assert_eq!(
            ctx.action_for(&mode, KeyCode::Tab, KeyModifiers::NONE),
            Some(KeyAction::NextSection)
        );
        assert_eq!(
            ctx.action_for(&mode, KeyCode::Char(' '), KeyModifiers::NONE),
            Some(KeyAction::Select)
        );
    }

    #[test]
    fn test_loading_only_has_global_bindings() {
        let ctx = KeybindingContext::new();
        let mode = AppMode::Loading;
        assert_eq!(ctx.action_for(&mode, KeyCode::Enter, KeyModifiers::NONE), None);
        assert_eq!(
            ctx.action_for(&mode, KeyCode::Char('q'), KeyModifiers::NONE),
            Some(KeyAction::Quit)
        );
    }

    #[test]
    fn test_shift_is_ignored_for_chars() {
        let ctx = KeybindingContext::new();
        assert_eq!(
            ctx.action_for(&AppMode::Configurator, KeyCode::Char('?'), KeyModifiers::SHIFT),
            Some(KeyAction::Help)
        );
    }

    #[test]
    fn test_shift_tab_moves_to_previous_row() {
        let ctx = KeybindingContext::new();
        assert_eq!(
            ctx.action_for(&AppMode::Configurator, KeyCode::BackTab, KeyModifiers::SHIFT),
            Some(KeyAction::PreviousSection)
        );
        assert_eq!(
            ctx.action_for(&AppMode::Configurator, KeyCode::BackTab, KeyModifiers::NONE),
            Some(KeyAction::PreviousSection)
        );
    }

    #[test]
    fn test_ctrl_c_quits() {
        let ctx = KeybindingContext::new();
        assert_eq!(
            ctx.action_for(&AppMode::Configurator, KeyCode::Char('c'), KeyModifiers::CONTROL),
            Some(KeyAction::Quit)
        );
    }

    #[test]
    fn test_nav_items_hide_aliases() {
        let ctx = KeybindingContext::new();
        let items = ctx.get_nav_items(&AppMode::Configurator);
        let keys: Vec<&str> = items.iter().map(|i| i.key_display.as_str()).collect();
        assert_eq!(keys, vec!["Left/Right", "Up/Dn", "Enter", "?", "Q"]);
    }

    #[test]
    fn test_help_sections_for_loading() {
        let ctx = KeybindingContext::new();
        let sections = ctx.get_help_content(&AppMode::Loading);
        assert_eq!(sections.len(), 1);
        assert_eq!(sections[0].title, "General");
    }
}
