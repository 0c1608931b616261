//! Application state.
//!
//! State is split in two. `AppState` is the session-wide record owned by the
//! controller: progress, counters, settings and catalogs. Screen-private
//! state lives in [`screen::ScreenState`] and only exists while its screen
//! is active.
//!
//! ```text
//! ┌──────────────────────────────────────────────────┐
//! │                   Controller                      │
//! ├──────────────────────────────────────────────────┤
//! │  ┌────────────────┐    ┌───────────────────────┐  │
//! │  │ AppState       │    │ ActiveScreen          │  │
//! │  │ - progress     │    │ - id: ScreenId        │  │
//! │  │ - hearts ...   │    │ - focus               │  │
//! │  │ - packs        │    │ - state: ScreenState  │  │
//! │  └────────────────┘    └───────────────────────┘  │
//! └──────────────────────────────────────────────────┘
//! ```

pub mod screen;

pub use screen::{ActiveScreen, ScreenId, ScreenState};

use crate::catalog::{
    self, DrawingPack, GamePack, LeaderboardEntry, PackKind, PurchaseOutcome,
};
use serde::{Deserialize, Serialize};

/// Heart ceiling for regeneration.
pub const MAX_HEARTS: u32 = 5;

/// Completion flags for today's two missions.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailyProgress {
    pub drawing: bool,
    pub game: bool,
}

impl DailyProgress {
    pub fn all_done(&self) -> bool {
        self.drawing && self.game
    }
}

/// Mini-game kinds known to the game state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum GameKind {
    #[default]
    Memory,
    Find,
    Path,
    Sudoku,
    Connect,
    Pattern,
    Attention,
}

/// Score and clock of the current game. Nothing updates these yet; they are
/// displayed as-is on the game play screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameState {
    pub current_game: GameKind,
    pub score: u32,
    pub time_left: u32,
}

impl Default for GameState {
    fn default() -> Self {
        Self {
            current_game: GameKind::Memory,
            score: 0,
            time_left: 180,
        }
    }
}

pub const FONT_SIZE_MIN: u8 = 16;
pub const FONT_SIZE_MAX: u8 = 24;
pub const FONT_SIZE_STEP: u8 = 2;

/// Accessibility preferences edited from the accessibility modal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccessibilitySettings {
    #[serde(default = "default_font_size")]
    pub font_size: u8,
    #[serde(default)]
    pub high_contrast: bool,
    #[serde(default)]
    pub voice_guide: bool,
}

fn default_font_size() -> u8 {
    18
}

impl Default for AccessibilitySettings {
    fn default() -> Self {
        Self {
            font_size: default_font_size(),
            high_contrast: false,
            voice_guide: false,
        }
    }
}

/// Partial update for [`AccessibilitySettings`]; `None` fields are kept.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AccessibilityPatch {
    pub font_size: Option<u8>,
    pub high_contrast: Option<bool>,
    pub voice_guide: Option<bool>,
}

impl AccessibilitySettings {
    /// Clamp to [16, 24] and snap down onto the step grid.
    pub fn normalize_font_size(size: u8) -> u8 {
        let clamped = size.clamp(FONT_SIZE_MIN, FONT_SIZE_MAX);
        clamped - (clamped - FONT_SIZE_MIN) % FONT_SIZE_STEP
    }

    /// Sanitised copy, used for values read from config.
    pub fn normalized(mut self) -> Self {
        self.font_size = Self::normalize_font_size(self.font_size);
        self
    }

    pub fn apply(&mut self, patch: AccessibilityPatch) {
        if let Some(size) = patch.font_size {
            self.font_size = Self::normalize_font_size(size);
        }
        if let Some(on) = patch.high_contrast {
            self.high_contrast = on;
        }
        if let Some(on) = patch.voice_guide {
            self.voice_guide = on;
        }
    }

    /// Patch that moves the font size one step up or down.
    pub fn font_step(&self, up: bool) -> AccessibilityPatch {
        let size = if up {
            self.font_size.saturating_add(FONT_SIZE_STEP)
        } else {
            self.font_size.saturating_sub(FONT_SIZE_STEP)
        };
        AccessibilityPatch {
            font_size: Some(size),
            ..Default::default()
        }
    }
}

/// Fixed figures shown in the weekly cognitive report.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CognitiveSnapshot {
    pub drawing_speed: u8,
    pub drawing_accuracy: u8,
    pub hand_stability: u8,
    pub pressure_consistency: u8,
    pub reaction_time_secs: f32,
    pub memory_score: u8,
    pub attention_span: u8,
    pub spatial_awareness: u8,
    pub improving: bool,
}

impl Default for CognitiveSnapshot {
    fn default() -> Self {
        Self {
            drawing_speed: 85,
            drawing_accuracy: 92,
            hand_stability: 88,
            pressure_consistency: 78,
            reaction_time_secs: 1.2,
            memory_score: 85,
            attention_span: 90,
            spatial_awareness: 82,
            improving: true,
        }
    }
}

/// Session-wide state, owned exclusively by the controller.
#[derive(Debug, Clone)]
pub struct AppState {
    pub daily_progress: DailyProgress,
    pub game_state: GameState,
    pub streak: u32,
    pub points: u32,
    pub hearts: u32,
    pub accessibility: AccessibilitySettings,
    pub drawing_packs: Vec<DrawingPack>,
    pub game_packs: Vec<GamePack>,
    pub leaderboard: Vec<LeaderboardEntry>,
    pub completion_time: u32,
    pub average_completion_time: u32,
    pub cognitive: CognitiveSnapshot,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            daily_progress: DailyProgress::default(),
            game_state: GameState::default(),
            streak: 3,
            points: 150,
            hearts: 3,
            accessibility: AccessibilitySettings::default(),
            drawing_packs: catalog::initial_drawing_packs(),
            game_packs: catalog::initial_game_packs(),
            leaderboard: catalog::leaderboard(catalog::GAME_COMPLETION_TIME),
            completion_time: catalog::GAME_COMPLETION_TIME,
            average_completion_time: catalog::AVERAGE_COMPLETION_TIME,
            cognitive: CognitiveSnapshot::default(),
        }
    }
}

impl AppState {
    pub fn with_accessibility(accessibility: AccessibilitySettings) -> Self {
        Self {
            accessibility: accessibility.normalized(),
            ..Self::default()
        }
    }

    /// Add one heart, up to [`MAX_HEARTS`]. Returns whether the count changed.
    pub fn regenerate_heart(&mut self) -> bool {
        if self.hearts < MAX_HEARTS {
            self.hearts += 1;
            true
        } else {
            false
        }
    }

    /// Home screen guard: the game mission opens only after the drawing.
    pub fn can_start_game_mission(&self) -> bool {
        self.daily_progress.drawing && !self.daily_progress.game
    }

    /// Mark a pack purchased in the chosen collection.
    pub fn purchase(&mut self, kind: PackKind, id: &str) -> PurchaseOutcome {
        match kind {
            PackKind::Drawing => {
                let outcome = catalog::purchase_outcome(&self.drawing_packs, id);
                if outcome == PurchaseOutcome::Purchased {
                    self.drawing_packs = catalog::purchase(&self.drawing_packs, id);
                }
                outcome
            }
            PackKind::Game => {
                let outcome = catalog::purchase_outcome(&self.game_packs, id);
                if outcome == PurchaseOutcome::Purchased {
                    self.game_packs = catalog::purchase(&self.game_packs, id);
                }
                outcome
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hearts_cap_at_five() {
        let mut state = AppState::default();
        assert_eq!(state.hearts, 3);
        assert!(state.regenerate_heart());
        assert!(state.regenerate_heart());
        assert!(!state.regenerate_heart());
        assert_eq!(state.hearts, MAX_HEARTS);
    }

    #[test]
    fn test_font_size_normalization() {
        assert_eq!(AccessibilitySettings::normalize_font_size(10), 16);
        assert_eq!(AccessibilitySettings::normalize_font_size(19), 18);
        assert_eq!(AccessibilitySettings::normalize_font_size(24), 24);
        assert_eq!(AccessibilitySettings::normalize_font_size(99), 24);
    }

    #[test]
    fn test_accessibility_patch_keeps_unset_fields() {
        let mut settings = AccessibilitySettings::default();
        settings.apply(AccessibilityPatch {
            high_contrast: Some(true),
            ..Default::default()
        });
        assert_eq!(settings.font_size, 18);
        assert!(settings.high_contrast);
        assert!(!settings.voice_guide);

        let up = settings.font_step(true);
        settings.apply(up);
        assert_eq!(settings.font_size, 20);
        for _ in 0..5 {
            let down = settings.font_step(false);
            settings.apply(down);
        }
        assert_eq!(settings.font_size, FONT_SIZE_MIN);
    }

    #[test]
    fn test_purchase_reports_outcome() {
        let mut state = AppState::default();
        assert_eq!(
            state.purchase(PackKind::Drawing, "emotion-art"),
            PurchaseOutcome::Purchased
        );
        assert_eq!(
            state.purchase(PackKind::Drawing, "emotion-art"),
            PurchaseOutcome::AlreadyOwned
        );
        assert_eq!(
            state.purchase(PackKind::Game, "emotion-art"),
            PurchaseOutcome::NotFound
        );
        assert!(state
            .drawing_packs
            .iter()
            .any(|p| p.id == "emotion-art" && p.purchased));
    }

    #[test]
    fn test_game_mission_guard() {
        let mut state = AppState::default();
        assert!(!state.can_start_game_mission());
        state.daily_progress.drawing = true;
        assert!(state.can_start_game_mission());
        state.daily_progress.game = true;
        assert!(!state.can_start_game_mission());
    }
}
