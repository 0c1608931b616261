//! The screen controller.
//!
//! `Controller` owns every piece of mutable state: the session-wide
//! [`AppState`], the [`ActiveScreen`] with its scoped state, and the timer
//! [`Scheduler`]. The terminal shell feeds it [`Command`]s and clock ticks
//! and renders whatever [`View`] it reports; nothing here touches the
//! terminal, so the whole flow can be driven from tests.
//!
//! ```text
//!   key ──► Action ──► Command ──► dispatch() ──► Outcome
//!                                      │
//!   250ms poll ──► tick(now) ──────────┤──► TimerEvent
//!                                      ▼
//!                                   view() ──► View ──► ui::render
//! ```

use crate::catalog::{PackKind, PurchaseOutcome};
use crate::screens::{self, ScreenContext, View};
use crate::state::screen::{CanvasState, GameDetailState};
use crate::state::{
    AccessibilityPatch, AccessibilitySettings, ActiveScreen, AppState, ScreenId, ScreenState,
    MAX_HEARTS,
};
use crate::timers::{Scheduler, TimerKind};
use chrono::NaiveDate;
use std::time::{Duration, Instant};
use tracing::{debug, info};

/// How long the splash screen stays up.
pub const DEFAULT_SPLASH_DELAY: Duration = Duration::from_millis(2000);
/// One heart per day.
pub const DEFAULT_HEART_REGEN_INTERVAL: Duration = Duration::from_secs(24 * 60 * 60);

/// State-mutation or navigation requests.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Go to a screen (back buttons, bottom navigation, plain links).
    Navigate(ScreenId),
    /// Next onboarding page, or on to permissions from the last page.
    AdvanceOnboarding,
    /// Home "quick start": the drawing mission first, then the game.
    QuickStart,
    /// Home game mission. Only opens once the drawing is done.
    StartGameMission,
    CompleteDrawing,
    CompleteGame,
    /// Open the detail page for a game type.
    OpenGameDetail(String),
    Purchase { kind: PackKind, id: String },
    OpenAccessibility,
    CloseAccessibility,
    SetAccessibility(AccessibilityPatch),
    MovePen { dx: i16, dy: i16 },
    TogglePen,
    ClearCanvas,
    FocusNext,
    FocusPrev,
}

/// What a dispatched command did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Not legal on the current screen; nothing changed.
    Ignored,
    /// State changed, screen did not.
    Updated,
    Navigated { from: ScreenId, to: ScreenId },
    Purchase(PurchaseOutcome),
}

/// Effects applied by [`Controller::tick`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerEvent {
    /// The splash timer moved the app on to onboarding.
    SplashElapsed,
    /// Hearts went up; carries the new count.
    HeartsRegenerated { hearts: u32 },
}

/// Construction parameters, usually taken from the config file.
#[derive(Debug, Clone)]
pub struct ControllerSettings {
    pub splash_delay: Duration,
    pub heart_regen_interval: Duration,
    pub accessibility: AccessibilitySettings,
    /// Skip the splash and open this screen instead.
    pub start_screen: Option<ScreenId>,
}

impl Default for ControllerSettings {
    fn default() -> Self {
        Self {
            splash_delay: DEFAULT_SPLASH_DELAY,
            heart_regen_interval: DEFAULT_HEART_REGEN_INTERVAL,
            accessibility: AccessibilitySettings::default(),
            start_screen: None,
        }
    }
}

pub struct Controller {
    state: AppState,
    active: ActiveScreen,
    scheduler: Scheduler,
    splash_delay: Duration,
    /// Last time seen by `new` or `tick`. Timers scheduled from `dispatch`
    /// count from here.
    clock: Instant,
    today: NaiveDate,
}

impl Controller {
    pub fn new(settings: ControllerSettings, now: Instant, today: NaiveDate) -> Self {
        let start = settings.start_screen.unwrap_or(ScreenId::Splash);
        let mut scheduler = Scheduler::new();
        scheduler.schedule_every(TimerKind::HeartRegen, settings.heart_regen_interval, now);

        let mut controller = Self {
            state: AppState::with_accessibility(settings.accessibility),
            active: ActiveScreen::enter(start),
            scheduler,
            splash_delay: settings.splash_delay,
            clock: now,
            today,
        };
        if start == ScreenId::Splash {
            controller.schedule_splash();
        }
        controller.settle_focus();
        info!(screen = %start, "controller started");
        controller
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    pub fn active(&self) -> &ActiveScreen {
        &self.active
    }

    pub fn screen(&self) -> ScreenId {
        self.active.id
    }

    pub fn today(&self) -> NaiveDate {
        self.today
    }

    pub fn scheduler(&self) -> &Scheduler {
        &self.scheduler
    }

    /// Build the view for the current screen.
    pub fn view(&self) -> View {
        screens::view(&ScreenContext {
            state: &self.state,
            active: &self.active,
            today: self.today,
        })
    }

    /// Apply one command. Commands that make no sense on the current screen
    /// are ignored.
    pub fn dispatch(&mut self, command: Command) -> Outcome {
        let screen = self.active.id;
        let outcome = match command {
            Command::Navigate(to) => self.navigate(to),

            Command::AdvanceOnboarding => match self.active.state.as_onboarding_mut() {
                Some(onboarding) => {
                    if onboarding.advance() {
                        self.active.focus = 0;
                        Outcome::Updated
                    } else {
                        self.navigate(ScreenId::Permissions)
                    }
                }
                None => Outcome::Ignored,
            },

            Command::QuickStart => {
                if screen != ScreenId::Home || self.state.daily_progress.all_done() {
                    Outcome::Ignored
                } else if self.state.daily_progress.drawing {
                    self.navigate(ScreenId::GameStart)
                } else {
                    self.navigate(ScreenId::DrawingGuide)
                }
            }

            Command::StartGameMission => {
                if screen == ScreenId::Home && self.state.can_start_game_mission() {
                    self.navigate(ScreenId::GameStart)
                } else {
                    Outcome::Ignored
                }
            }

            Command::CompleteDrawing => {
                if screen == ScreenId::DrawingCanvas {
                    self.state.daily_progress.drawing = true;
                    info!("drawing mission complete");
                    self.navigate(ScreenId::DrawingComplete)
                } else {
                    Outcome::Ignored
                }
            }

            Command::CompleteGame => {
                if screen == ScreenId::GamePlay {
                    self.state.daily_progress.game = true;
                    info!("game mission complete");
                    self.navigate(ScreenId::GameComplete)
                } else {
                    Outcome::Ignored
                }
            }

            Command::OpenGameDetail(game_id) => {
                if screen == ScreenId::GameMenu {
                    let outcome = self.navigate(ScreenId::GameDetail);
                    self.active.state = ScreenState::GameDetail(GameDetailState {
                        game_id,
                    });
                    outcome
                } else {
                    Outcome::Ignored
                }
            }

            Command::Purchase { kind, id } => {
                if matches!(screen, ScreenId::PremiumPack | ScreenId::GamePremiumPack) {
                    let result = self.state.purchase(kind, &id);
                    info!(%kind, pack = %id, ?result, "purchase");
                    Outcome::Purchase(result)
                } else {
                    Outcome::Ignored
                }
            }

            Command::OpenAccessibility => self.set_modal(true),
            Command::CloseAccessibility => self.set_modal(false),

            Command::SetAccessibility(patch) => {
                if self.active.state.accessibility_open() {
                    self.state.accessibility.apply(patch);
                    debug!(settings = ?self.state.accessibility, "accessibility updated");
                    Outcome::Updated
                } else {
                    Outcome::Ignored
                }
            }

            Command::MovePen { dx, dy } => self.edit_canvas(|canvas| canvas.move_pen(dx, dy)),
            Command::TogglePen => self.edit_canvas(|canvas| canvas.toggle_pen()),
            Command::ClearCanvas => self.edit_canvas(|canvas| canvas.clear()),

            Command::FocusNext => self.move_focus(true),
            Command::FocusPrev => self.move_focus(false),
        };

        if outcome == Outcome::Ignored {
            debug!(%screen, "command ignored");
        } else {
            self.settle_focus();
        }
        outcome
    }

    /// Fire every due timer and apply its effect.
    pub fn tick(&mut self, now: Instant) -> Vec<TimerEvent> {
        self.clock = now;
        let mut events = Vec::new();
        for (kind, count) in self.scheduler.due(now) {
            debug!(?kind, count, "timer fired");
            match kind {
                TimerKind::SplashAdvance => {
                    if self.active.id == ScreenId::Splash {
                        self.navigate(ScreenId::Onboarding);
                        self.settle_focus();
                        events.push(TimerEvent::SplashElapsed);
                    }
                }
                TimerKind::HeartRegen => {
                    let mut changed = false;
                    for _ in 0..count.min(MAX_HEARTS) {
                        changed |= self.state.regenerate_heart();
                    }
                    if changed {
                        info!(hearts = self.state.hearts, "heart regenerated");
                        events.push(TimerEvent::HeartsRegenerated {
                            hearts: self.state.hearts,
                        });
                    }
                }
            }
        }
        events
    }

    /// Cancel all scheduled work. The controller stays readable afterwards.
    pub fn shutdown(&mut self) {
        self.scheduler.cancel_all();
        info!("controller shut down");
    }

    fn navigate(&mut self, to: ScreenId) -> Outcome {
        let from = self.active.id;
        if from == to {
            return Outcome::Ignored;
        }
        if from == ScreenId::Splash {
            self.scheduler.cancel(TimerKind::SplashAdvance);
        }
        self.active = ActiveScreen::enter(to);
        if to == ScreenId::Splash {
            self.schedule_splash();
        }
        info!(%from, %to, "screen transition");
        Outcome::Navigated { from, to }
    }

    fn schedule_splash(&mut self) {
        self.scheduler
            .schedule_once(TimerKind::SplashAdvance, self.splash_delay, self.clock);
    }

    fn set_modal(&mut self, open: bool) -> Outcome {
        match self.active.state.as_accessibility_mut() {
            Some(modal) if modal.open != open => {
                modal.open = open;
                self.active.focus = 0;
                debug!(open, "accessibility modal");
                Outcome::Updated
            }
            _ => Outcome::Ignored,
        }
    }

    fn edit_canvas(&mut self, edit: impl FnOnce(&mut CanvasState)) -> Outcome {
        match self.active.state.as_canvas_mut() {
            Some(canvas) => {
                edit(canvas);
                Outcome::Updated
            }
            None => Outcome::Ignored,
        }
    }

    /// Move focus to the next or previous enabled action, wrapping.
    fn move_focus(&mut self, forward: bool) -> Outcome {
        let view = self.view();
        let enabled: Vec<usize> = view
            .actions
            .iter()
            .enumerate()
            .filter(|(_, a)| a.enabled)
            .map(|(i, _)| i)
            .collect();
        if enabled.is_empty() {
            return Outcome::Ignored;
        }
        let current = self.active.focus;
        let next = if forward {
            enabled
                .iter()
                .copied()
                .find(|&i| i > current)
                .unwrap_or(enabled[0])
        } else {
            enabled
                .iter()
                .rev()
                .copied()
                .find(|&i| i < current)
                .unwrap_or(enabled[enabled.len() - 1])
        };
        if next == current {
            return Outcome::Ignored;
        }
        self.active.focus = next;
        Outcome::Updated
    }

    /// Keep focus on an enabled action after the action list changed.
    fn settle_focus(&mut self) {
        let view = self.view();
        let focused_ok = view
            .actions
            .get(self.active.focus)
            .is_some_and(|a| a.enabled);
        if !focused_ok {
            self.active.focus = view.actions.iter().position(|a| a.enabled).unwrap_or(0);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::screen::LAST_ONBOARDING_STEP;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 12, 12).unwrap()
    }

    fn controller_at(screen: ScreenId) -> (Controller, Instant) {
        let t0 = Instant::now();
        let settings = ControllerSettings {
            start_screen: Some(screen),
            ..Default::default()
        };
        (Controller::new(settings, t0, today()), t0)
    }

    #[test]
    fn test_splash_advances_after_delay() {
        let t0 = Instant::now();
        let mut c = Controller::new(ControllerSettings::default(), t0, today());
        assert_eq!(c.screen(), ScreenId::Splash);
        assert!(c.tick(t0 + Duration::from_millis(1999)).is_empty());
        assert_eq!(
            c.tick(t0 + Duration::from_millis(2000)),
            vec![TimerEvent::SplashElapsed]
        );
        assert_eq!(c.screen(), ScreenId::Onboarding);
        assert_eq!(c.active().state.as_onboarding().map(|o| o.step), Some(0));
    }

    #[test]
    fn test_leaving_splash_early_cancels_timer() {
        let t0 = Instant::now();
        let mut c = Controller::new(ControllerSettings::default(), t0, today());
        c.dispatch(Command::Navigate(ScreenId::Home));
        assert!(!c.scheduler().is_scheduled(TimerKind::SplashAdvance));
        assert!(c.tick(t0 + Duration::from_secs(5)).is_empty());
        assert_eq!(c.screen(), ScreenId::Home);
    }

    #[test]
    fn test_start_screen_skips_splash_timer() {
        let (c, _) = controller_at(ScreenId::Home);
        assert!(!c.scheduler().is_scheduled(TimerKind::SplashAdvance));
        assert!(c.scheduler().is_scheduled(TimerKind::HeartRegen));
    }

    #[test]
    fn test_onboarding_walkthrough() {
        let (mut c, _) = controller_at(ScreenId::Onboarding);
        assert_eq!(c.dispatch(Command::AdvanceOnboarding), Outcome::Updated);
        assert_eq!(c.dispatch(Command::AdvanceOnboarding), Outcome::Updated);
        assert_eq!(
            c.active().state.as_onboarding().map(|o| o.step),
            Some(LAST_ONBOARDING_STEP)
        );
        assert_eq!(
            c.dispatch(Command::AdvanceOnboarding),
            Outcome::Navigated {
                from: ScreenId::Onboarding,
                to: ScreenId::Permissions
            }
        );
        // Only legal on onboarding
        assert_eq!(c.dispatch(Command::AdvanceOnboarding), Outcome::Ignored);
    }

    #[test]
    fn test_onboarding_step_is_dropped_on_exit() {
        let (mut c, _) = controller_at(ScreenId::Onboarding);
        c.dispatch(Command::AdvanceOnboarding);
        c.dispatch(Command::Navigate(ScreenId::Home));
        c.dispatch(Command::Navigate(ScreenId::Onboarding));
        assert_eq!(c.active().state.as_onboarding().map(|o| o.step), Some(0));
    }

    #[test]
    fn test_game_mission_requires_drawing() {
        let (mut c, _) = controller_at(ScreenId::Home);
        assert_eq!(c.dispatch(Command::StartGameMission), Outcome::Ignored);
        assert_eq!(c.screen(), ScreenId::Home);

        assert_eq!(
            c.dispatch(Command::QuickStart),
            Outcome::Navigated {
                from: ScreenId::Home,
                to: ScreenId::DrawingGuide
            }
        );
        c.dispatch(Command::Navigate(ScreenId::DrawingCanvas));
        c.dispatch(Command::CompleteDrawing);
        c.dispatch(Command::Navigate(ScreenId::Home));

        assert!(c.state().daily_progress.drawing);
        assert_eq!(
            c.dispatch(Command::QuickStart),
            Outcome::Navigated {
                from: ScreenId::Home,
                to: ScreenId::GameStart
            }
        );
        c.dispatch(Command::Navigate(ScreenId::Home));
        assert_eq!(
            c.dispatch(Command::StartGameMission),
            Outcome::Navigated {
                from: ScreenId::Home,
                to: ScreenId::GameStart
            }
        );
    }

    #[test]
    fn test_quick_start_hidden_when_all_done() {
        let (mut c, _) = controller_at(ScreenId::DrawingCanvas);
        c.dispatch(Command::CompleteDrawing);
        c.dispatch(Command::Navigate(ScreenId::GamePlay));
        c.dispatch(Command::CompleteGame);
        c.dispatch(Command::Navigate(ScreenId::Home));
        assert!(c.state().daily_progress.all_done());
        assert_eq!(c.dispatch(Command::QuickStart), Outcome::Ignored);
        assert_eq!(c.dispatch(Command::StartGameMission), Outcome::Ignored);
    }

    #[test]
    fn test_complete_commands_only_on_their_screens() {
        let (mut c, _) = controller_at(ScreenId::Home);
        assert_eq!(c.dispatch(Command::CompleteDrawing), Outcome::Ignored);
        assert_eq!(c.dispatch(Command::CompleteGame), Outcome::Ignored);
        assert!(!c.state().daily_progress.drawing);
        assert!(!c.state().daily_progress.game);
    }

    #[test]
    fn test_navigate_to_current_screen_keeps_state() {
        let (mut c, _) = controller_at(ScreenId::DrawingCanvas);
        c.dispatch(Command::TogglePen);
        c.dispatch(Command::MovePen { dx: 1, dy: 0 });
        assert_eq!(
            c.dispatch(Command::Navigate(ScreenId::DrawingCanvas)),
            Outcome::Ignored
        );
        assert!(!c.active().state.as_canvas().unwrap().is_blank());
    }

    #[test]
    fn test_canvas_edits_only_on_canvas() {
        let (mut c, _) = controller_at(ScreenId::Home);
        assert_eq!(c.dispatch(Command::TogglePen), Outcome::Ignored);
        assert_eq!(c.dispatch(Command::ClearCanvas), Outcome::Ignored);
    }

    #[test]
    fn test_open_game_detail_sets_scoped_id() {
        let (mut c, _) = controller_at(ScreenId::GameMenu);
        c.dispatch(Command::OpenGameDetail("sudoku".to_string()));
        assert_eq!(c.screen(), ScreenId::GameDetail);
        assert_eq!(
            c.active().state.as_game_detail().map(|d| d.game_id.as_str()),
            Some("sudoku")
        );
    }

    #[test]
    fn test_purchase_only_in_store() {
        let (mut c, _) = controller_at(ScreenId::Home);
        let buy = Command::Purchase {
            kind: PackKind::Drawing,
            id: "emotion-art".to_string(),
        };
        assert_eq!(c.dispatch(buy.clone()), Outcome::Ignored);

        c.dispatch(Command::Navigate(ScreenId::PremiumPack));
        assert_eq!(
            c.dispatch(buy.clone()),
            Outcome::Purchase(PurchaseOutcome::Purchased)
        );
        assert_eq!(
            c.dispatch(buy),
            Outcome::Purchase(PurchaseOutcome::AlreadyOwned)
        );
    }

    #[test]
    fn test_accessibility_modal_gates_updates() {
        let (mut c, _) = controller_at(ScreenId::Settings);
        let patch = AccessibilityPatch {
            high_contrast: Some(true),
            ..Default::default()
        };
        assert_eq!(c.dispatch(Command::SetAccessibility(patch)), Outcome::Ignored);
        assert_eq!(c.dispatch(Command::OpenAccessibility), Outcome::Updated);
        assert_eq!(c.dispatch(Command::OpenAccessibility), Outcome::Ignored);
        assert_eq!(c.dispatch(Command::SetAccessibility(patch)), Outcome::Updated);
        assert!(c.state().accessibility.high_contrast);
        assert_eq!(c.dispatch(Command::CloseAccessibility), Outcome::Updated);

        c.dispatch(Command::Navigate(ScreenId::Home));
        assert_eq!(c.dispatch(Command::OpenAccessibility), Outcome::Ignored);
        assert!(c.state().accessibility.high_contrast);
    }

    #[test]
    fn test_hearts_regenerate_and_cap() {
        let (mut c, t0) = controller_at(ScreenId::Home);
        let day = DEFAULT_HEART_REGEN_INTERVAL;
        assert_eq!(
            c.tick(t0 + day),
            vec![TimerEvent::HeartsRegenerated { hearts: 4 }]
        );
        assert_eq!(
            c.tick(t0 + day * 10),
            vec![TimerEvent::HeartsRegenerated { hearts: 5 }]
        );
        assert!(c.tick(t0 + day * 11).is_empty());
        assert_eq!(c.state().hearts, 5);
    }

    #[test]
    fn test_extreme_timer_config_never_fires() {
        let config: crate::config::Config = toml::from_str(
            "[timers]\nheart_regen_secs = 9223372036854775807\nsplash_delay_ms = 9223372036854775807\n",
        )
        .unwrap();
        let settings = ControllerSettings {
            splash_delay: config.timers.splash_delay(),
            heart_regen_interval: config.timers.heart_regen_interval(),
            ..Default::default()
        };
        let t0 = Instant::now();
        let mut c = Controller::new(settings, t0, today());

        assert_eq!(c.screen(), ScreenId::Splash);
        assert!(c.tick(t0 + DEFAULT_HEART_REGEN_INTERVAL * 30).is_empty());
        assert_eq!(c.screen(), ScreenId::Splash);
        assert_eq!(c.state().hearts, 3);
    }

    #[test]
    fn test_long_absence_fills_hearts_once() {
        let (mut c, t0) = controller_at(ScreenId::Home);
        let events = c.tick(t0 + DEFAULT_HEART_REGEN_INTERVAL * 100_000);
        assert_eq!(events, vec![TimerEvent::HeartsRegenerated { hearts: MAX_HEARTS }]);
    }

    #[test]
    fn test_shutdown_cancels_everything() {
        let t0 = Instant::now();
        let mut c = Controller::new(ControllerSettings::default(), t0, today());
        c.shutdown();
        assert!(c.scheduler().is_empty());
        assert!(c.tick(t0 + DEFAULT_HEART_REGEN_INTERVAL * 3).is_empty());
        assert_eq!(c.screen(), ScreenId::Splash);
        assert_eq!(c.state().hearts, 3);
    }

    #[test]
    fn test_focus_wraps_over_enabled_actions() {
        let (mut c, _) = controller_at(ScreenId::GameComplete);
        let count = c.view().actions.len();
        assert!(count > 1);
        assert_eq!(c.active().focus, 0);
        c.dispatch(Command::FocusPrev);
        assert_eq!(c.active().focus, count - 1);
        c.dispatch(Command::FocusNext);
        assert_eq!(c.active().focus, 0);
    }

    #[test]
    fn test_focus_skips_purchased_packs() {
        let (mut c, _) = controller_at(ScreenId::PremiumPack);
        let view = c.view();
        let focused = &view.actions[c.active().focus];
        assert!(focused.enabled);
        // Buy the focused pack; focus must move off the now-disabled button.
        c.dispatch(focused.command.clone());
        let view = c.view();
        assert!(view.actions[c.active().focus].enabled);
    }
}
