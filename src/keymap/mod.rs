//! Keymap configuration module
//!
//! Provides customizable keyboard shortcuts with preset keymaps (standard, vim, emacs).

mod actions;
mod binding;
mod presets;

pub use actions::Action;
pub use binding::{parse_key, KeyBinding, ParsedKey};
pub use presets::KeymapPreset;

use crossterm::event::{KeyCode, KeyModifiers};
use serde::{Deserialize, Serialize};

/// Keymap configuration with preset and optional overrides
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Keymap {
    /// Base preset keymap
    #[serde(default)]
    pub preset: KeymapPreset,

    /// User-defined overrides (checked before preset)
    #[serde(default)]
    pub overrides: Vec<KeyBinding>,
}

impl Keymap {
    /// Get the action for a key event, checking overrides first then preset
    /// Note: If an action is overridden, preset bindings for that action are ignored
    pub fn get_action(&self, code: KeyCode, modifiers: KeyModifiers) -> Option<Action> {
        self.all_bindings()
            .into_iter()
            .find(|binding| binding.matches(code, modifiers))
            .map(|binding| binding.action)
    }

    /// Get all bindings (overrides + preset) for display in help
    /// Overrides shadow preset bindings for the same action
    pub fn all_bindings(&self) -> Vec<KeyBinding> {
        let mut bindings = self.overrides.clone();
        for preset_binding in self.preset.bindings() {
            let is_overridden = self
                .overrides
                .iter()
                .any(|o| o.action == preset_binding.action);
            if !is_overridden {
                bindings.push(preset_binding);
            }
        }
        bindings
    }

    /// Override keys that do not parse. Reported once at startup.
    pub fn invalid_overrides(&self) -> Vec<&KeyBinding> {
        self.overrides
            .iter()
            .filter(|b| parse_key(&b.key).is_err())
            .collect()
    }

    /// Get the display string for a specific action (e.g., Action::Quit -> "q")
    /// Checks overrides first, then preset.
    pub fn get_key_display_for_action(&self, action: Action) -> String {
        self.all_bindings()
            .into_iter()
            .find(|b| b.action == action)
            .map(|b| b.display())
            .unwrap_or_else(|| format!("{:?}", action))
    }

    /// Footer hint for the common keys
    pub fn footer_navigation(&self) -> String {
        format!(
            "{}/{}: Move | {}: Select | {}: Back | {}: Help | {}: Quit",
            self.get_key_display_for_action(Action::PrevTab),
            self.get_key_display_for_action(Action::NextTab),
            self.get_key_display_for_action(Action::Confirm),
            self.get_key_display_for_action(Action::Back),
            self.get_key_display_for_action(Action::Help),
            self.get_key_display_for_action(Action::Quit),
        )
    }

    /// Footer hint for the drawing canvas
    pub fn footer_canvas(&self) -> String {
        format!(
            "{}{}{}{}: Pen | {}: Pen up/down | {}: Clear | {}: Buttons | {}: Back",
            self.get_key_display_for_action(Action::MoveUp),
            self.get_key_display_for_action(Action::MoveDown),
            self.get_key_display_for_action(Action::MoveLeft),
            self.get_key_display_for_action(Action::MoveRight),
            self.get_key_display_for_action(Action::Toggle),
            self.get_key_display_for_action(Action::Clear),
            self.get_key_display_for_action(Action::NextTab),
            self.get_key_display_for_action(Action::Back),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_keymap() {
        let keymap = Keymap::default();
        assert_eq!(keymap.preset, KeymapPreset::Standard);
        assert!(keymap.overrides.is_empty());
    }

    #[test]
    fn test_get_action_from_preset() {
        let keymap = Keymap::default();
        assert_eq!(
            keymap.get_action(KeyCode::Char('q'), KeyModifiers::NONE),
            Some(Action::Quit)
        );
        assert_eq!(
            keymap.get_action(KeyCode::Char('3'), KeyModifiers::NONE),
            Some(Action::NavGames)
        );
    }

    #[test]
    fn test_override_takes_precedence() {
        let keymap = Keymap {
            preset: KeymapPreset::Standard,
            overrides: vec![KeyBinding::new("q", Action::Help)],
        };
        assert_eq!(
            keymap.get_action(KeyCode::Char('q'), KeyModifiers::NONE),
            Some(Action::Help)
        );
        // "?" was the preset Help key and is shadowed by the override
        assert_eq!(keymap.get_action(KeyCode::Char('?'), KeyModifiers::NONE), None);
    }

    #[test]
    fn test_vim_preset() {
        let keymap = Keymap {
            preset: KeymapPreset::Vim,
            overrides: Vec::new(),
        };
        assert_eq!(
            keymap.get_action(KeyCode::Char('j'), KeyModifiers::NONE),
            Some(Action::MoveDown)
        );
    }

    #[test]
    fn test_invalid_overrides_are_reported() {
        let keymap = Keymap {
            preset: KeymapPreset::Standard,
            overrides: vec![
                KeyBinding::new("ctrl+q", Action::Quit),
                KeyBinding::new("hyper+q", Action::Help),
            ],
        };
        let invalid = keymap.invalid_overrides();
        assert_eq!(invalid.len(), 1);
        assert_eq!(invalid[0].key, "hyper+q");
    }
}
