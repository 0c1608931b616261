//! Screen view builders.
//!
//! Every [`ScreenId`] maps to one builder through a single exhaustive
//! `match`. A builder reads the controller state and returns a [`View`];
//! the accessibility modal and the bottom navigation bar are layered on
//! here so individual screens never deal with them.
//!
//! ```text
//! ┌──────────────────────────────────────────┐
//! │ view(ctx)                                │
//! │   match ctx.active.id {                  │
//! │     Splash   => SplashScreen.build(ctx)  │
//! │     Home     => HomeScreen.build(ctx)    │
//! │     ...                                  │
//! │     Family   => FallbackScreen(..)       │
//! │   }                                      │
//! │   + nav bar, + accessibility overlay     │
//! └──────────────────────────────────────────┘
//! ```

pub mod drawing;
pub mod fallback;
pub mod game;
pub mod home;
pub mod intro;
pub mod leaderboard;
pub mod report;
pub mod screen_trait;
pub mod settings;
pub mod store;

pub use screen_trait::{Body, Item, Overlay, Screen, ScreenContext, View, ViewAction};

use crate::state::ScreenId;

/// Bottom navigation bar entries, in key order 1-5.
pub const NAV_ITEMS: [(ScreenId, &str); 5] = [
    (ScreenId::Home, "Home"),
    (ScreenId::DrawingMenu, "Drawing"),
    (ScreenId::GameMenu, "Games"),
    (ScreenId::WeeklyReport, "Report"),
    (ScreenId::Settings, "Settings"),
];

/// Build the view for the active screen.
pub fn view(ctx: &ScreenContext<'_>) -> View {
    let id = ctx.active.id;
    let mut view = match id {
        ScreenId::Splash => intro::SplashScreen.build(ctx),
        ScreenId::Onboarding => intro::OnboardingScreen.build(ctx),
        ScreenId::Permissions => intro::PermissionsScreen.build(ctx),
        ScreenId::Home => home::HomeScreen.build(ctx),
        ScreenId::DrawingMenu => drawing::DrawingMenuScreen.build(ctx),
        ScreenId::DrawingCalendar => drawing::DrawingCalendarScreen.build(ctx),
        ScreenId::DrawingGuide => drawing::DrawingGuideScreen.build(ctx),
        ScreenId::DrawingCanvas => drawing::DrawingCanvasScreen.build(ctx),
        ScreenId::DrawingComplete => drawing::DrawingCompleteScreen.build(ctx),
        ScreenId::GameMenu => game::GameMenuScreen.build(ctx),
        ScreenId::GameDetail => game::GameDetailScreen.build(ctx),
        ScreenId::GameStart => game::GameStartScreen.build(ctx),
        ScreenId::GamePlay => game::GamePlayScreen.build(ctx),
        ScreenId::GameComplete => game::GameCompleteScreen.build(ctx),
        ScreenId::PremiumPack => store::DrawingStoreScreen.build(ctx),
        ScreenId::GamePremiumPack => store::GameStoreScreen.build(ctx),
        ScreenId::Leaderboard => leaderboard::LeaderboardScreen.build(ctx),
        ScreenId::Reward => report::RewardScreen.build(ctx),
        ScreenId::WeeklyReport => report::WeeklyReportScreen.build(ctx),
        ScreenId::Settings => settings::SettingsScreen.build(ctx),
        ScreenId::Family
        | ScreenId::Subscription
        | ScreenId::GameSelect
        | ScreenId::GameCalendar => fallback::FallbackScreen(id).build(ctx),
    };

    view.nav_bar = id.shows_nav_bar();
    if ctx.active.state.accessibility_open() {
        let settings = ctx.state.accessibility;
        view.actions = settings::accessibility_actions(&settings);
        view.overlay = Some(Overlay::Accessibility(settings));
    }
    view
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::controller::Command;
    use crate::state::{ActiveScreen, AppState};
    use chrono::NaiveDate;

    fn build(state: &AppState, active: &ActiveScreen) -> View {
        view(&ScreenContext {
            state,
            active,
            today: NaiveDate::from_ymd_opt(2024, 12, 12).unwrap(),
        })
    }

    #[test]
    fn test_every_screen_builds_a_view() {
        let state = AppState::default();
        for id in ScreenId::ALL {
            let active = ActiveScreen::enter(id);
            let view = build(&state, &active);
            assert_eq!(view.screen, id);
            assert!(!view.title.is_empty(), "{} has no title", id);
            assert_eq!(view.nav_bar, id.shows_nav_bar());
        }
    }

    #[test]
    fn test_unbuilt_screens_use_fallback() {
        let state = AppState::default();
        for id in [
            ScreenId::Family,
            ScreenId::Subscription,
            ScreenId::GameSelect,
            ScreenId::GameCalendar,
        ] {
            let view = build(&state, &ActiveScreen::enter(id));
            assert_eq!(view.body, Body::Fallback { screen: id });
            assert!(view
                .actions
                .iter()
                .any(|a| a.command == Command::Navigate(ScreenId::Home)));
        }
    }

    #[test]
    fn test_modal_replaces_actions() {
        let state = AppState::default();
        let mut active = ActiveScreen::enter(ScreenId::Settings);
        let closed = build(&state, &active);
        assert!(closed.overlay.is_none());

        if let Some(modal) = active.state.as_accessibility_mut() {
            modal.open = true;
        }
        let open = build(&state, &active);
        assert_eq!(
            open.overlay,
            Some(Overlay::Accessibility(state.accessibility))
        );
        assert!(open
            .actions
            .iter()
            .any(|a| a.command == Command::CloseAccessibility));
    }

    #[test]
    fn test_nav_items_match_nav_bar_screens() {
        for (id, _) in NAV_ITEMS {
            assert!(id.shows_nav_bar());
        }
    }
}
