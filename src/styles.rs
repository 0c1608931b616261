//! Theme and style system for Proud100
//!
//! One palette per [`ThemeType`], held in a global that the accessibility
//! dialog can swap at runtime. Widgets never pick colors themselves; they ask
//! the current [`Theme`] for a role style.

use crate::utils::mondrian::Rgb;
use ratatui::style::{Color, Modifier, Style};
use serde::{Deserialize, Serialize};
use std::sync::{PoisonError, RwLock};

/// Focus indicator shown next to the selected button
pub const FOCUS_SYMBOL: &str = "» ";

static THEME: RwLock<Theme> = RwLock::new(Theme::DARK);

/// Replace the global theme
pub fn init_theme(theme_type: ThemeType) {
    let mut theme = THEME.write().unwrap_or_else(PoisonError::into_inner);
    *theme = Theme::new(theme_type);
}

/// Snapshot of the current theme
pub fn theme() -> Theme {
    THEME.read().unwrap_or_else(PoisonError::into_inner).clone()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeType {
    #[default]
    Dark,
    Light,
    /// White on black with yellow accents (accessibility setting)
    #[serde(alias = "high-contrast", alias = "high_contrast")]
    HighContrast,
    /// No color codes at all (`NO_COLOR`)
    #[serde(alias = "no-color", alias = "no_color")]
    NoColor,
}

impl ThemeType {
    /// Theme to use given the configured one and the accessibility toggle.
    ///
    /// `NoColor` always wins; high contrast replaces any colored theme.
    pub fn effective(self, high_contrast: bool) -> Self {
        match self {
            ThemeType::NoColor => ThemeType::NoColor,
            _ if high_contrast => ThemeType::HighContrast,
            other => other,
        }
    }
}

/// Color roles used across the UI
#[derive(Debug, Clone)]
pub struct Theme {
    pub theme_type: ThemeType,
    /// Titles, info toasts
    pub primary: Color,
    /// Done missions, owned packs
    pub success: Color,
    /// Hearts, streaks
    pub warning: Color,
    pub error: Color,
    pub text: Color,
    pub text_muted: Color,
    /// Values and key hints
    pub text_emphasis: Color,
    pub border: Color,
    pub border_focused: Color,
    pub highlight_bg: Color,
    pub background: Color,
}

impl Theme {
    const DARK: Theme = Theme {
        theme_type: ThemeType::Dark,
        primary: Color::Cyan,
        success: Color::Green,
        warning: Color::Yellow,
        error: Color::Red,
        text: Color::White,
        text_muted: Color::DarkGray,
        text_emphasis: Color::Yellow,
        border: Color::DarkGray,
        border_focused: Color::Cyan,
        highlight_bg: Color::DarkGray,
        background: Color::Reset,
    };

    const LIGHT: Theme = Theme {
        theme_type: ThemeType::Light,
        primary: Color::Blue,
        success: Color::Green,
        warning: Color::Rgb(180, 120, 0),
        error: Color::Red,
        text: Color::Black,
        text_muted: Color::DarkGray,
        text_emphasis: Color::Blue,
        border: Color::DarkGray,
        border_focused: Color::Blue,
        highlight_bg: Color::Gray,
        background: Color::Reset,
    };

    // No grey tones: muted text stays white.
    const HIGH_CONTRAST: Theme = Theme {
        theme_type: ThemeType::HighContrast,
        primary: Color::White,
        success: Color::LightGreen,
        warning: Color::LightYellow,
        error: Color::LightRed,
        text: Color::White,
        text_muted: Color::White,
        text_emphasis: Color::LightYellow,
        border: Color::White,
        border_focused: Color::LightYellow,
        highlight_bg: Color::White,
        background: Color::Black,
    };

    const NO_COLOR: Theme = Theme {
        theme_type: ThemeType::NoColor,
        primary: Color::Reset,
        success: Color::Reset,
        warning: Color::Reset,
        error: Color::Reset,
        text: Color::Reset,
        text_muted: Color::Reset,
        text_emphasis: Color::Reset,
        border: Color::Reset,
        border_focused: Color::Reset,
        highlight_bg: Color::Reset,
        background: Color::Reset,
    };

    pub fn new(theme_type: ThemeType) -> Self {
        match theme_type {
            ThemeType::Dark => Self::DARK,
            ThemeType::Light => Self::LIGHT,
            ThemeType::HighContrast => Self::HIGH_CONTRAST,
            ThemeType::NoColor => Self::NO_COLOR,
        }
    }

    /// `colored` normally; only `plain` modifiers under `NoColor`.
    fn role(&self, colored: Style, plain: Modifier) -> Style {
        if self.theme_type == ThemeType::NoColor {
            Style::default().add_modifier(plain)
        } else {
            colored
        }
    }

    fn fg(color: Color) -> Style {
        Style::default().fg(color)
    }

    pub fn title_style(&self) -> Style {
        self.role(
            Self::fg(self.primary).add_modifier(Modifier::BOLD),
            Modifier::BOLD,
        )
    }

    pub fn text_style(&self) -> Style {
        self.role(Self::fg(self.text), Modifier::empty())
    }

    pub fn muted_style(&self) -> Style {
        self.role(Self::fg(self.text_muted), Modifier::DIM)
    }

    pub fn emphasis_style(&self) -> Style {
        self.role(Self::fg(self.text_emphasis), Modifier::BOLD)
    }

    pub fn success_style(&self) -> Style {
        self.role(Self::fg(self.success), Modifier::BOLD)
    }

    pub fn warning_style(&self) -> Style {
        self.role(Self::fg(self.warning), Modifier::empty())
    }

    pub fn border_focused_style(&self) -> Style {
        self.role(Self::fg(self.border_focused), Modifier::BOLD)
    }

    pub fn border_style(&self) -> Style {
        self.role(Self::fg(self.border), Modifier::empty())
    }

    /// The focused button
    pub fn highlight_style(&self) -> Style {
        let fg = if self.theme_type == ThemeType::HighContrast {
            Color::Black
        } else {
            self.text_emphasis
        };
        self.role(
            Self::fg(fg)
                .bg(self.highlight_bg)
                .add_modifier(Modifier::BOLD),
            Modifier::BOLD | Modifier::REVERSED,
        )
    }

    /// Purchased packs and other unavailable buttons
    pub fn disabled_style(&self) -> Style {
        self.role(
            Self::fg(self.text_muted).add_modifier(Modifier::CROSSED_OUT),
            Modifier::DIM,
        )
    }

    pub fn background_style(&self) -> Style {
        self.role(Style::default().bg(self.background), Modifier::empty())
    }

    /// Fill for a Mondrian card piece. Plain themes fall back to reverse video.
    pub fn piece_style(&self, color: Rgb) -> Style {
        let Rgb(r, g, b) = color;
        self.role(
            Style::default().bg(Color::Rgb(r, g, b)),
            Modifier::REVERSED,
        )
    }
}
