//! Semantic actions triggered by key bindings.

use serde::{Deserialize, Serialize};

/// All possible user actions in the application
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Action {
    // ============ Movement ============
    /// Previous button, or pen up on the canvas
    MoveUp,
    /// Next button, or pen down on the canvas
    MoveDown,
    /// Decrease a value, or pen left on the canvas
    MoveLeft,
    /// Increase a value, or pen right on the canvas
    MoveRight,
    /// Next button (works on every screen, including the canvas)
    NextTab,
    /// Previous button
    PrevTab,

    // ============ Selection ============
    /// Press the focused button
    Confirm,
    /// Go back / close the open dialog
    Back,
    /// Toggle a switch, or lift/lower the pen
    Toggle,
    /// Erase the canvas
    Clear,

    // ============ Bottom navigation ============
    NavHome,
    NavDrawing,
    NavGames,
    NavReport,
    NavSettings,

    // ============ Global ============
    /// Quit the application
    Quit,
    /// Show help overlay
    Help,
}

impl Action {
    /// Get a human-readable description of this action
    pub fn description(&self) -> &'static str {
        match self {
            Action::MoveUp => "Move up",
            Action::MoveDown => "Move down",
            Action::MoveLeft => "Move left / decrease",
            Action::MoveRight => "Move right / increase",
            Action::NextTab => "Next button",
            Action::PrevTab => "Previous button",
            Action::Confirm => "Press button",
            Action::Back => "Back / close dialog",
            Action::Toggle => "Toggle / pen up-down",
            Action::Clear => "Clear canvas",
            Action::NavHome => "Go to home",
            Action::NavDrawing => "Go to drawing studio",
            Action::NavGames => "Go to games",
            Action::NavReport => "Go to weekly report",
            Action::NavSettings => "Go to settings",
            Action::Quit => "Quit",
            Action::Help => "Show help",
        }
    }

    /// Help overlay section this action is listed under
    pub fn category(&self) -> &'static str {
        match self {
            Action::MoveUp
            | Action::MoveDown
            | Action::MoveLeft
            | Action::MoveRight
            | Action::NextTab
            | Action::PrevTab => "Movement",
            Action::Confirm | Action::Back | Action::Toggle | Action::Clear => "Selection",
            Action::NavHome
            | Action::NavDrawing
            | Action::NavGames
            | Action::NavReport
            | Action::NavSettings => "Navigation",
            Action::Quit | Action::Help => "Global",
        }
    }
}
