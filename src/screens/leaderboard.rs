//! Memory match leaderboard.

use super::{Body, Item, Screen, ScreenContext, View, ViewAction};
use crate::catalog;
use crate::state::ScreenId;
use crate::utils::format_time;

pub struct LeaderboardScreen;

impl Screen for LeaderboardScreen {
    fn build(&self, ctx: &ScreenContext<'_>) -> View {
        let state = ctx.state;
        let me = state.leaderboard.iter().find(|e| e.is_me);
        let items = vec![
            Item::heading("My rank"),
            Item::stat("Rank", format!("#{}", catalog::my_rank(&state.leaderboard))),
            Item::stat("My time", format_time(state.completion_time)),
            Item::stat("Score", me.map_or(0, |e| e.score)),
            Item::Gap,
            Item::heading("Stats"),
            Item::stat("Overall average", format_time(state.average_completion_time)),
            Item::stat("Players today", 124),
        ];

        View::new(ScreenId::Leaderboard, "Leaderboard")
            .subtitle("Memory match: today's best times")
            .back(ScreenId::GameMenu)
            .body(Body::Leaderboard {
                entries: state.leaderboard.clone(),
                items,
            })
            .action(ViewAction::go("Play again", ScreenId::GamePlay))
    }
}
