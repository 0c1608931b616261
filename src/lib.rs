//! Proud100 - a ten-minute daily drawing and brain-game routine in the terminal
//!
//! The core is a pure screen controller ([`controller::Controller`]) that
//! owns all state and reports what to show as a [`screens::View`]. The
//! terminal layer ([`app`], [`ui`], [`tui`]) draws views and feeds key
//! presses back as commands.

// Core modules
pub mod catalog;
pub mod controller;
pub mod screens;
pub mod state;
pub mod timers;

// Terminal shell
pub mod app;
pub mod cli;
pub mod components;
pub mod config;
pub mod keymap;
pub mod styles;
pub mod tui;
pub mod ui;
pub mod utils;
pub mod widgets;

// Re-exports for convenience
pub use config::Config;
pub use controller::{Command, Controller, ControllerSettings, Outcome, TimerEvent};
pub use screens::View;
pub use state::{AppState, ScreenId};

// Keymap re-exports (used by Config and for external API)
pub use keymap::{Action, KeyBinding, Keymap, KeymapPreset};
