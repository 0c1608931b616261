//! Home screen: today's missions and shortcuts.

use super::{Item, Screen, ScreenContext, View, ViewAction};
use crate::controller::Command;
use crate::state::{ScreenId, MAX_HEARTS};
use crate::utils::header_message;

/// Days with a finished mission this week, out of seven.
const WEEK_DAYS_DONE: u8 = 5;
const WEEK_PROGRESS_PERCENT: u8 = 71;

pub struct HomeScreen;

impl Screen for HomeScreen {
    fn build(&self, ctx: &ScreenContext<'_>) -> View {
        let state = ctx.state;
        let progress = state.daily_progress;
        let header = header_message(progress);

        let items = vec![
            Item::stat("Hearts", format!("{} / {}", state.hearts, MAX_HEARTS)),
            Item::stat("Streak", format!("{} days", state.streak)),
            Item::stat("Points", state.points),
            Item::Gap,
            Item::heading("Today's mission"),
            Item::status("Drawing mission", "3-5 minutes", progress.drawing),
            Item::status("Mini-game", "5-7 minutes", progress.game),
            Item::Gap,
            Item::heading("This week"),
            Item::stat("Missions completed", format!("{}/7 days", WEEK_DAYS_DONE)),
            Item::meter("Weekly goal", WEEK_PROGRESS_PERCENT),
            Item::note("Two more days to reach this week's goal!"),
        ];

        let mut actions = Vec::new();
        if !progress.drawing {
            actions.push(ViewAction::go("Start drawing", ScreenId::DrawingGuide));
        }
        if !progress.game {
            let label = if progress.drawing {
                "Start mini-game"
            } else {
                "Mini-game (after drawing)"
            };
            actions.push(
                ViewAction::new(label, Command::StartGameMission)
                    .enabled(state.can_start_game_mission()),
            );
        }
        if !progress.all_done() {
            actions.push(ViewAction::new("Start now (3-10 min)", Command::QuickStart));
        }
        actions.extend([
            ViewAction::go("Drawing studio", ScreenId::DrawingMenu),
            ViewAction::go("Game center", ScreenId::GameMenu),
            ViewAction::go("My weekly changes", ScreenId::WeeklyReport),
            ViewAction::go("Settings", ScreenId::Settings),
        ]);

        View::new(ScreenId::Home, header.title)
            .subtitle(header.subtitle)
            .items(items)
            .actions(actions)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::{ActiveScreen, AppState};
    use chrono::NaiveDate;

    fn build(state: &AppState) -> View {
        let active = ActiveScreen::enter(ScreenId::Home);
        HomeScreen.build(&ScreenContext {
            state,
            active: &active,
            today: NaiveDate::from_ymd_opt(2024, 12, 12).unwrap(),
        })
    }

    fn has(view: &View, command: &Command) -> Option<bool> {
        view.actions
            .iter()
            .find(|a| &a.command == command)
            .map(|a| a.enabled)
    }

    #[test]
    fn test_game_mission_disabled_until_drawing_done() {
        let mut state = AppState::default();
        let view = build(&state);
        assert_eq!(has(&view, &Command::StartGameMission), Some(false));
        assert_eq!(has(&view, &Command::QuickStart), Some(true));

        state.daily_progress.drawing = true;
        let view = build(&state);
        assert_eq!(has(&view, &Command::StartGameMission), Some(true));
        assert_eq!(has(&view, &Command::Navigate(ScreenId::DrawingGuide)), None);
    }

    #[test]
    fn test_all_done_hides_mission_buttons() {
        let mut state = AppState::default();
        state.daily_progress.drawing = true;
        state.daily_progress.game = true;
        let view = build(&state);
        assert_eq!(view.title, "Today's mission complete!");
        assert_eq!(has(&view, &Command::StartGameMission), None);
        assert_eq!(has(&view, &Command::QuickStart), None);
    }
}
