//! Screen trait and the view descriptor every screen builds.
//!
//! Screens do not render and do not mutate anything. Each one turns the
//! controller's state into a [`View`]: what to show, plus the commands the
//! user can trigger from here. The terminal layer draws the view and sends
//! the chosen command back to the controller.

use crate::catalog::LeaderboardEntry;
use crate::controller::Command;
use crate::state::screen::{CanvasState, MemoryCard};
use crate::state::{AccessibilitySettings, ActiveScreen, AppState, ScreenId};
use crate::utils::MonthGrid;
use chrono::NaiveDate;

/// Read-only state handed to a screen while it builds its view.
pub struct ScreenContext<'a> {
    /// Session-wide state.
    pub state: &'a AppState,
    /// The screen being shown, with its scoped state.
    pub active: &'a ActiveScreen,
    /// Local date, for the calendar.
    pub today: NaiveDate,
}

/// Trait for screen view builders.
///
/// ```rust,ignore
/// struct MyScreen;
///
/// impl Screen for MyScreen {
///     fn build(&self, ctx: &ScreenContext) -> View {
///         View::new(ScreenId::Home, "Title")
///             .action(ViewAction::go("Back home", ScreenId::Home))
///     }
/// }
/// ```
pub trait Screen {
    fn build(&self, ctx: &ScreenContext<'_>) -> View;
}

/// A pressable button on a screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewAction {
    pub label: String,
    /// Sent on confirm.
    pub command: Command,
    /// Disabled actions are shown but skipped by focus.
    pub enabled: bool,
    /// Commands sent by left/right while focused (decrease, increase).
    pub adjust: Option<(Command, Command)>,
}

impl ViewAction {
    pub fn new(label: impl Into<String>, command: Command) -> Self {
        Self {
            label: label.into(),
            command,
            enabled: true,
            adjust: None,
        }
    }

    /// Shorthand for a navigation button.
    pub fn go(label: impl Into<String>, to: ScreenId) -> Self {
        Self::new(label, Command::Navigate(to))
    }

    pub fn enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }

    pub fn with_adjust(mut self, decrease: Command, increase: Command) -> Self {
        self.adjust = Some((decrease, increase));
        self
    }
}

/// One line of a text body.
#[derive(Debug, Clone, PartialEq)]
pub enum Item {
    Heading(String),
    Text(String),
    /// Secondary text.
    Note(String),
    Bullet(String),
    Stat { label: String, value: String },
    /// A labelled percentage bar.
    Meter { label: String, percent: u8 },
    /// A checklist row: mission, permission, pack ownership.
    Status { label: String, detail: String, done: bool },
    /// Highlighted one-liner (badges, callouts).
    Badge(String),
    Gap,
}

impl Item {
    pub fn heading(text: impl Into<String>) -> Self {
        Self::Heading(text.into())
    }

    pub fn text(text: impl Into<String>) -> Self {
        Self::Text(text.into())
    }

    pub fn note(text: impl Into<String>) -> Self {
        Self::Note(text.into())
    }

    pub fn bullet(text: impl Into<String>) -> Self {
        Self::Bullet(text.into())
    }

    pub fn stat(label: impl Into<String>, value: impl ToString) -> Self {
        Self::Stat {
            label: label.into(),
            value: value.to_string(),
        }
    }

    pub fn meter(label: impl Into<String>, percent: u8) -> Self {
        Self::Meter {
            label: label.into(),
            percent: percent.min(100),
        }
    }

    pub fn status(label: impl Into<String>, detail: impl Into<String>, done: bool) -> Self {
        Self::Status {
            label: label.into(),
            detail: detail.into(),
            done,
        }
    }

    pub fn badge(text: impl Into<String>) -> Self {
        Self::Badge(text.into())
    }
}

/// Main content of a screen.
#[derive(Debug, Clone, PartialEq)]
pub enum Body {
    Splash {
        brand: &'static str,
        tagline: &'static str,
    },
    Items(Vec<Item>),
    Onboarding {
        step: u8,
        pages: u8,
        heading: &'static str,
        text: &'static str,
    },
    Canvas {
        topic: &'static str,
        canvas: CanvasState,
    },
    MemoryGrid {
        time_left: String,
        score: u32,
        cards: Vec<MemoryCard>,
    },
    Leaderboard {
        entries: Vec<LeaderboardEntry>,
        items: Vec<Item>,
    },
    Calendar {
        grid: MonthGrid,
        items: Vec<Item>,
    },
    /// Placeholder for screens that have no view yet.
    Fallback { screen: ScreenId },
}

/// Drawn on top of the screen body.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Overlay {
    Accessibility(AccessibilitySettings),
}

/// Everything the terminal layer needs to draw one screen.
#[derive(Debug, Clone, PartialEq)]
pub struct View {
    pub screen: ScreenId,
    pub title: String,
    pub subtitle: Option<String>,
    /// Where the back key goes, if anywhere.
    pub back: Option<ScreenId>,
    pub body: Body,
    pub actions: Vec<ViewAction>,
    pub nav_bar: bool,
    pub overlay: Option<Overlay>,
}

impl View {
    pub fn new(screen: ScreenId, title: impl Into<String>) -> Self {
        Self {
            screen,
            title: title.into(),
            subtitle: None,
            back: None,
            body: Body::Items(Vec::new()),
            actions: Vec::new(),
            nav_bar: false,
            overlay: None,
        }
    }

    pub fn subtitle(mut self, subtitle: impl Into<String>) -> Self {
        self.subtitle = Some(subtitle.into());
        self
    }

    pub fn back(mut self, to: ScreenId) -> Self {
        self.back = Some(to);
        self
    }

    pub fn body(mut self, body: Body) -> Self {
        self.body = body;
        self
    }

    pub fn items(self, items: Vec<Item>) -> Self {
        self.body(Body::Items(items))
    }

    pub fn action(mut self, action: ViewAction) -> Self {
        self.actions.push(action);
        self
    }

    pub fn actions(mut self, actions: impl IntoIterator<Item = ViewAction>) -> Self {
        self.actions.extend(actions);
        self
    }
}
