//! Preset keymaps: Standard, Vim, Emacs
//!
//! Each preset provides a complete set of key bindings for all actions.

use super::{Action, KeyBinding};
use serde::{Deserialize, Serialize};

/// Available keymap presets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum KeymapPreset {
    /// Standard keyboard navigation (arrows, Enter, Esc)
    #[default]
    Standard,
    /// Vim-style navigation (hjkl, etc.)
    Vim,
    /// Emacs-style navigation (Ctrl+N/P, etc.)
    Emacs,
}

impl KeymapPreset {
    /// Get all key bindings for this preset
    pub fn bindings(&self) -> Vec<KeyBinding> {
        let mut bindings = match self {
            KeymapPreset::Standard => standard_bindings(),
            KeymapPreset::Vim => vim_bindings(),
            KeymapPreset::Emacs => emacs_bindings(),
        };
        bindings.extend(shared_bindings());
        bindings
    }

    /// Get human-readable name
    pub fn name(&self) -> &'static str {
        match self {
            KeymapPreset::Standard => "Standard",
            KeymapPreset::Vim => "Vim",
            KeymapPreset::Emacs => "Emacs",
        }
    }
}

/// Standard keyboard bindings (arrows, Enter, Esc)
fn standard_bindings() -> Vec<KeyBinding> {
    vec![
        KeyBinding::new("up", Action::MoveUp),
        KeyBinding::new("down", Action::MoveDown),
        KeyBinding::new("left", Action::MoveLeft),
        KeyBinding::new("right", Action::MoveRight),
        KeyBinding::new("enter", Action::Confirm),
        KeyBinding::new("esc", Action::Back),
        KeyBinding::new("backspace", Action::Back),
        KeyBinding::new("space", Action::Toggle),
        KeyBinding::new("c", Action::Clear),
        KeyBinding::new("q", Action::Quit),
        KeyBinding::new("ctrl+c", Action::Quit),
    ]
}

/// Vim-style bindings (hjkl)
fn vim_bindings() -> Vec<KeyBinding> {
    vec![
        KeyBinding::new("k", Action::MoveUp),
        KeyBinding::new("j", Action::MoveDown),
        KeyBinding::new("h", Action::MoveLeft),
        KeyBinding::new("l", Action::MoveRight),
        KeyBinding::new("up", Action::MoveUp),
        KeyBinding::new("down", Action::MoveDown),
        KeyBinding::new("left", Action::MoveLeft),
        KeyBinding::new("right", Action::MoveRight),
        KeyBinding::new("enter", Action::Confirm),
        KeyBinding::new("esc", Action::Back),
        KeyBinding::new("space", Action::Toggle),
        KeyBinding::new("x", Action::Clear),
        KeyBinding::new("q", Action::Quit),
        KeyBinding::new("ctrl+c", Action::Quit),
    ]
}

/// Emacs-style bindings (Ctrl+P/N/B/F)
fn emacs_bindings() -> Vec<KeyBinding> {
    vec![
        KeyBinding::new("ctrl+p", Action::MoveUp),
        KeyBinding::new("ctrl+n", Action::MoveDown),
        KeyBinding::new("ctrl+b", Action::MoveLeft),
        KeyBinding::new("ctrl+f", Action::MoveRight),
        KeyBinding::new("up", Action::MoveUp),
        KeyBinding::new("down", Action::MoveDown),
        KeyBinding::new("left", Action::MoveLeft),
        KeyBinding::new("right", Action::MoveRight),
        KeyBinding::new("enter", Action::Confirm),
        KeyBinding::new("ctrl+g", Action::Back),
        KeyBinding::new("esc", Action::Back),
        KeyBinding::new("ctrl+space", Action::Toggle),
        KeyBinding::new("space", Action::Toggle),
        KeyBinding::new("ctrl+k", Action::Clear),
        KeyBinding::new("ctrl+x", Action::Quit),
        KeyBinding::new("ctrl+c", Action::Quit),
    ]
}

/// Bindings every preset shares: tabbing, bottom navigation and help.
fn shared_bindings() -> Vec<KeyBinding> {
    vec![
        KeyBinding::new("tab", Action::NextTab),
        KeyBinding::new("shift+tab", Action::PrevTab),
        KeyBinding::new("1", Action::NavHome),
        KeyBinding::new("2", Action::NavDrawing),
        KeyBinding::new("3", Action::NavGames),
        KeyBinding::new("4", Action::NavReport),
        KeyBinding::new("5", Action::NavSettings),
        KeyBinding::new("?", Action::Help),
        KeyBinding::new("f1", Action::Help),
    ]
}
