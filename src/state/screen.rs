//! Screen identifiers and screen-scoped state.
//!
//! `ScreenId` is the closed set of screens the controller can show. State
//! that only matters while one screen is active lives in `ScreenState` and
//! is created on entry and dropped on exit, so nothing leaks between screens.

use std::fmt;
use std::str::FromStr;

/// Application screens
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScreenId {
    Splash,
    Onboarding,
    Permissions,
    Home,
    DrawingGuide,
    DrawingCanvas,
    DrawingComplete,
    GameStart,
    GamePlay,
    GameComplete,
    Reward,
    WeeklyReport,
    Family,
    Settings,
    Subscription,
    DrawingMenu,
    DrawingCalendar,
    GameMenu,
    GameSelect,
    GameCalendar,
    GameDetail,
    PremiumPack,
    GamePremiumPack,
    Leaderboard,
}

impl ScreenId {
    /// Every screen, in declaration order.
    pub const ALL: [ScreenId; 24] = [
        ScreenId::Splash,
        ScreenId::Onboarding,
        ScreenId::Permissions,
        ScreenId::Home,
        ScreenId::DrawingGuide,
        ScreenId::DrawingCanvas,
        ScreenId::DrawingComplete,
        ScreenId::GameStart,
        ScreenId::GamePlay,
        ScreenId::GameComplete,
        ScreenId::Reward,
        ScreenId::WeeklyReport,
        ScreenId::Family,
        ScreenId::Settings,
        ScreenId::Subscription,
        ScreenId::DrawingMenu,
        ScreenId::DrawingCalendar,
        ScreenId::GameMenu,
        ScreenId::GameSelect,
        ScreenId::GameCalendar,
        ScreenId::GameDetail,
        ScreenId::PremiumPack,
        ScreenId::GamePremiumPack,
        ScreenId::Leaderboard,
    ];

    /// Kebab-case identifier used on the command line and in logs.
    pub fn as_str(&self) -> &'static str {
        match self {
            ScreenId::Splash => "splash",
            ScreenId::Onboarding => "onboarding",
            ScreenId::Permissions => "permissions",
            ScreenId::Home => "home",
            ScreenId::DrawingGuide => "drawing-guide",
            ScreenId::DrawingCanvas => "drawing-canvas",
            ScreenId::DrawingComplete => "drawing-complete",
            ScreenId::GameStart => "game-start",
            ScreenId::GamePlay => "game-play",
            ScreenId::GameComplete => "game-complete",
            ScreenId::Reward => "reward",
            ScreenId::WeeklyReport => "weekly-report",
            ScreenId::Family => "family",
            ScreenId::Settings => "settings",
            ScreenId::Subscription => "subscription",
            ScreenId::DrawingMenu => "drawing-menu",
            ScreenId::DrawingCalendar => "drawing-calendar",
            ScreenId::GameMenu => "game-menu",
            ScreenId::GameSelect => "game-select",
            ScreenId::GameCalendar => "game-calendar",
            ScreenId::GameDetail => "game-detail",
            ScreenId::PremiumPack => "premium-pack",
            ScreenId::GamePremiumPack => "game-premium-pack",
            ScreenId::Leaderboard => "leaderboard",
        }
    }

    /// Screens that show the bottom navigation bar.
    pub fn shows_nav_bar(&self) -> bool {
        matches!(
            self,
            ScreenId::Home
                | ScreenId::DrawingMenu
                | ScreenId::GameMenu
                | ScreenId::WeeklyReport
                | ScreenId::Settings
        )
    }
}

impl fmt::Display for ScreenId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ScreenId {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim().to_lowercase().replace('_', "-");
        ScreenId::ALL
            .iter()
            .copied()
            .find(|id| id.as_str() == needle)
            .ok_or_else(|| format!("Unknown screen: {}", s))
    }
}

/// Highest onboarding page index.
pub const LAST_ONBOARDING_STEP: u8 = 2;

/// Onboarding pager state.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OnboardingState {
    pub step: u8,
}

impl OnboardingState {
    /// Move to the next page. Returns false when already on the last page.
    pub fn advance(&mut self) -> bool {
        if self.step < LAST_ONBOARDING_STEP {
            self.step += 1;
            true
        } else {
            false
        }
    }
}

/// Canvas size in cells.
pub const CANVAS_WIDTH: u16 = 48;
pub const CANVAS_HEIGHT: u16 = 14;

/// A cell on the drawing canvas.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Point {
    pub x: u16,
    pub y: u16,
}

/// Freehand drawing state for the canvas screen.
///
/// Each stroke starts when the pen goes down and collects every cell the
/// cursor visits until the pen is lifted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CanvasState {
    pub cursor: Point,
    pub pen_down: bool,
    pub strokes: Vec<Vec<Point>>,
}

impl Default for CanvasState {
    fn default() -> Self {
        Self {
            cursor: Point {
                x: CANVAS_WIDTH / 2,
                y: CANVAS_HEIGHT / 2,
            },
            pen_down: false,
            strokes: Vec::new(),
        }
    }
}

impl CanvasState {
    /// Lift or lower the pen. Lowering starts a new stroke at the cursor.
    pub fn toggle_pen(&mut self) {
        self.pen_down = !self.pen_down;
        if self.pen_down {
            self.strokes.push(vec![self.cursor]);
        }
    }

    /// Move the cursor, staying inside the canvas.
    pub fn move_pen(&mut self, dx: i16, dy: i16) {
        let x = (i32::from(self.cursor.x) + i32::from(dx)).clamp(0, i32::from(CANVAS_WIDTH) - 1);
        let y = (i32::from(self.cursor.y) + i32::from(dy)).clamp(0, i32::from(CANVAS_HEIGHT) - 1);
        let next = Point {
            x: x as u16,
            y: y as u16,
        };
        if next == self.cursor {
            return;
        }
        self.cursor = next;
        if self.pen_down {
            if let Some(stroke) = self.strokes.last_mut() {
                stroke.push(next);
            }
        }
    }

    /// Erase everything and lift the pen.
    pub fn clear(&mut self) {
        self.strokes.clear();
        self.pen_down = false;
    }

    pub fn is_blank(&self) -> bool {
        self.strokes.iter().all(|s| s.len() < 2)
    }

    /// Every inked cell.
    pub fn cells(&self) -> impl Iterator<Item = Point> + '_ {
        self.strokes.iter().flatten().copied()
    }

    /// SVG-style path data: `M x y L x y ...`, one `M` per stroke.
    pub fn path_data(&self) -> String {
        let mut out = String::new();
        for stroke in &self.strokes {
            for (i, p) in stroke.iter().enumerate() {
                if !out.is_empty() {
                    out.push(' ');
                }
                let op = if i == 0 { "M" } else { "L" };
                out.push_str(&format!("{} {} {}", op, p.x, p.y));
            }
        }
        out
    }
}

/// Game detail state: which game the detail page is about.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameDetailState {
    pub game_id: String,
}

impl Default for GameDetailState {
    fn default() -> Self {
        Self {
            game_id: "memory".to_string(),
        }
    }
}

/// One card of the memory match board.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MemoryCard {
    pub id: u8,
    pub symbol: &'static str,
    pub flipped: bool,
    pub matched: bool,
    /// Index into the decorative style table shown on the card back.
    pub art_piece: i32,
}

/// Memory match board. Cards are dealt face down and stay that way; the
/// match-checking game logic does not exist yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GamePlayState {
    pub cards: Vec<MemoryCard>,
}

impl Default for GamePlayState {
    fn default() -> Self {
        const SYMBOLS: [&str; 4] = ["❀", "♣", "✿", "☘"];
        let cards = (0..8u8)
            .map(|i| MemoryCard {
                id: i + 1,
                symbol: SYMBOLS[usize::from(i / 2)],
                flipped: false,
                matched: false,
                art_piece: i32::from(i),
            })
            .collect();
        Self { cards }
    }
}

/// Accessibility modal visibility (permissions and settings screens).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AccessibilityModalState {
    pub open: bool,
}

/// Union type for all screen-specific states.
///
/// Using an enum ensures that only one screen state exists at a time.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ScreenState {
    /// Screen has no private state.
    #[default]
    None,
    Onboarding(OnboardingState),
    Canvas(CanvasState),
    GameDetail(GameDetailState),
    GamePlay(GamePlayState),
    Accessibility(AccessibilityModalState),
}

impl ScreenState {
    /// Create a fresh screen state for the given screen.
    pub fn for_screen(screen: ScreenId) -> Self {
        match screen {
            ScreenId::Onboarding => Self::Onboarding(OnboardingState::default()),
            ScreenId::DrawingCanvas => Self::Canvas(CanvasState::default()),
            ScreenId::GameDetail => Self::GameDetail(GameDetailState::default()),
            ScreenId::GamePlay => Self::GamePlay(GamePlayState::default()),
            ScreenId::Permissions | ScreenId::Settings => {
                Self::Accessibility(AccessibilityModalState::default())
            }
            _ => Self::None,
        }
    }

    pub fn as_onboarding(&self) -> Option<&OnboardingState> {
        if let Self::Onboarding(state) = self {
            Some(state)
        } else {
            None
        }
    }

    pub fn as_onboarding_mut(&mut self) -> Option<&mut OnboardingState> {
        if let Self::Onboarding(state) = self {
            Some(state)
        } else {
            None
        }
    }

    pub fn as_canvas(&self) -> Option<&CanvasState> {
        if let Self::Canvas(state) = self {
            Some(state)
        } else {
            None
        }
    }

    pub fn as_canvas_mut(&mut self) -> Option<&mut CanvasState> {
        if let Self::Canvas(state) = self {
            Some(state)
        } else {
            None
        }
    }

    pub fn as_game_detail(&self) -> Option<&GameDetailState> {
        if let Self::GameDetail(state) = self {
            Some(state)
        } else {
            None
        }
    }

    pub fn as_game_play(&self) -> Option<&GamePlayState> {
        if let Self::GamePlay(state) = self {
            Some(state)
        } else {
            None
        }
    }

    pub fn as_accessibility_mut(&mut self) -> Option<&mut AccessibilityModalState> {
        if let Self::Accessibility(state) = self {
            Some(state)
        } else {
            None
        }
    }

    /// Whether the accessibility modal is showing.
    pub fn accessibility_open(&self) -> bool {
        matches!(self, Self::Accessibility(AccessibilityModalState { open: true }))
    }
}

/// The screen currently shown, with its private state and focused action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActiveScreen {
    pub id: ScreenId,
    pub focus: usize,
    pub state: ScreenState,
}

impl ActiveScreen {
    /// Enter a screen with fresh state.
    pub fn enter(id: ScreenId) -> Self {
        Self {
            id,
            focus: 0,
            state: ScreenState::for_screen(id),
        }
    }
}
