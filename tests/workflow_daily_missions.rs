//! End-to-end flows through the screen controller.
//!
//! Tests the complete chain from first launch to both missions done:
//! - Splash timer and onboarding
//! - Drawing mission, then the game mission it unlocks
//! - Store purchases and the accessibility dialog along the way

mod common;

use common::{at, fresh, ok, press, seconds};
use proud100::catalog::{PackKind, PurchaseOutcome};
use proud100::controller::{Command, Outcome, TimerEvent};
use proud100::screens::Overlay;
use proud100::state::{AccessibilityPatch, ScreenId};
use proud100::timers::TimerKind;

// ============================================================================
// FIRST LAUNCH
// ============================================================================

#[test]
fn first_launch_reaches_home() {
    // Given: a fresh start on the splash screen
    let (mut app, t0) = fresh();
    assert_eq!(app.screen(), ScreenId::Splash);

    // When: the splash delay passes
    assert!(app.tick(t0 + seconds(1)).is_empty());
    let events = app.tick(t0 + seconds(2));

    // Then: onboarding is shown, starting at page 1
    assert_eq!(events, vec![TimerEvent::SplashElapsed]);
    assert_eq!(app.screen(), ScreenId::Onboarding);
    assert_eq!(app.view().actions[0].label, "Next");

    // When: the user pages through onboarding
    press(&mut app, "Next");
    press(&mut app, "Next");
    assert_eq!(app.view().actions[0].label, "Get started");
    press(&mut app, "Get started");

    // Then: permissions, then home
    assert_eq!(app.screen(), ScreenId::Permissions);
    press(&mut app, "Start");
    assert_eq!(app.screen(), ScreenId::Home);
    assert!(app.view().nav_bar);
}

#[test]
fn leaving_splash_early_cancels_its_timer() {
    let (mut app, t0) = fresh();
    ok(&mut app, Command::Navigate(ScreenId::Home));
    assert!(!app.scheduler().is_scheduled(TimerKind::SplashAdvance));

    app.tick(t0 + seconds(5));
    assert_eq!(app.screen(), ScreenId::Home);
}

// ============================================================================
// DAILY MISSIONS
// ============================================================================

#[test]
fn drawing_then_game_completes_the_day() {
    let mut app = at(ScreenId::Home);

    // Given: nothing done, the game mission is locked
    assert_eq!(app.dispatch(Command::StartGameMission), Outcome::Ignored);
    assert_eq!(app.view().title, "Start today's mission!");

    // When: the drawing mission is finished
    press(&mut app, "Start drawing");
    assert_eq!(app.screen(), ScreenId::DrawingGuide);
    press(&mut app, "Start drawing");
    assert_eq!(app.screen(), ScreenId::DrawingCanvas);

    ok(&mut app, Command::TogglePen);
    ok(&mut app, Command::MovePen { dx: 1, dy: 0 });
    ok(&mut app, Command::MovePen { dx: 1, dy: 1 });
    assert!(app.active().state.as_canvas().is_some_and(|c| !c.is_blank()));
    press(&mut app, "Done");

    // Then: the drawing is marked done and the game mission opens up
    assert_eq!(app.screen(), ScreenId::DrawingComplete);
    assert!(app.state().daily_progress.drawing);
    ok(&mut app, Command::Navigate(ScreenId::Home));
    assert!(app.state().can_start_game_mission());

    // When: quick start now goes to the game
    ok(&mut app, Command::QuickStart);
    assert_eq!(app.screen(), ScreenId::GameStart);
    press(&mut app, "Start game");
    assert_eq!(app.screen(), ScreenId::GamePlay);
    press(&mut app, "Finish game");

    // Then: both missions are done, home shows the finished message
    assert_eq!(app.screen(), ScreenId::GameComplete);
    assert!(app.state().daily_progress.all_done());
    press(&mut app, "Home");
    let home = app.view();
    assert_eq!(home.title, "Today's mission complete!");
    assert!(home
        .actions
        .iter()
        .all(|a| a.command != Command::QuickStart && a.command != Command::StartGameMission));
    assert_eq!(app.dispatch(Command::QuickStart), Outcome::Ignored);
}

#[test]
fn canvas_state_is_fresh_on_every_visit() {
    let mut app = at(ScreenId::DrawingCanvas);
    ok(&mut app, Command::TogglePen);
    ok(&mut app, Command::MovePen { dx: 2, dy: 0 });

    ok(&mut app, Command::Navigate(ScreenId::DrawingGuide));
    ok(&mut app, Command::Navigate(ScreenId::DrawingCanvas));
    assert!(app.active().state.as_canvas().is_some_and(|c| c.is_blank()));
}

#[test]
fn game_menu_opens_details_for_the_chosen_game() {
    let mut app = at(ScreenId::GameMenu);
    ok(&mut app, Command::OpenGameDetail("sudoku".to_string()));
    assert_eq!(app.screen(), ScreenId::GameDetail);
    assert_eq!(
        app.active().state.as_game_detail().map(|d| d.game_id.as_str()),
        Some("sudoku")
    );
    assert_eq!(app.view().back, Some(ScreenId::GameMenu));
}

// ============================================================================
// STORE AND SETTINGS
// ============================================================================

#[test]
fn buying_a_pack_disables_its_button() {
    let mut app = at(ScreenId::PremiumPack);
    let buy = Command::Purchase {
        kind: PackKind::Drawing,
        id: "emotion-art".to_string(),
    };
    let before = app.view();
    let button = before.actions.iter().find(|a| a.command == buy).unwrap();
    assert!(button.enabled);

    assert_eq!(app.dispatch(buy.clone()), Outcome::Purchase(PurchaseOutcome::Purchased));

    let after = app.view();
    let button = after.actions.iter().find(|a| a.command == buy).unwrap();
    assert!(!button.enabled);
    assert_eq!(
        app.dispatch(buy),
        Outcome::Purchase(PurchaseOutcome::AlreadyOwned)
    );
}

#[test]
fn accessibility_dialog_edits_settings() {
    let mut app = at(ScreenId::Permissions);
    press(&mut app, "Accessibility settings");

    let view = app.view();
    assert!(matches!(view.overlay, Some(Overlay::Accessibility(_))));
    assert_eq!(app.active().focus, 0);

    ok(
        &mut app,
        Command::SetAccessibility(AccessibilityPatch {
            high_contrast: Some(true),
            font_size: Some(30),
            ..Default::default()
        }),
    );
    assert!(app.state().accessibility.high_contrast);
    assert_eq!(app.state().accessibility.font_size, 24);

    press(&mut app, "Done");
    assert!(app.view().overlay.is_none());
    assert_eq!(
        app.dispatch(Command::SetAccessibility(AccessibilityPatch::default())),
        Outcome::Ignored
    );
}

#[test]
fn hearts_regenerate_once_per_day() {
    let (mut app, t0) = fresh();
    let day = seconds(24 * 60 * 60);
    assert_eq!(app.state().hearts, 3);

    assert_eq!(
        app.tick(t0 + day),
        vec![TimerEvent::HeartsRegenerated { hearts: 4 }]
    );
    // Three more days pass while the app is idle: capped at five.
    let events = app.tick(t0 + day * 4);
    assert_eq!(events, vec![TimerEvent::HeartsRegenerated { hearts: 5 }]);
    assert!(app.tick(t0 + day * 5).is_empty());

    app.shutdown();
    assert!(app.scheduler().is_empty());
}
