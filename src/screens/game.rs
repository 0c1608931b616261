//! Game center screens: menu, detail, intro, the memory board and results.

use super::{Body, Item, Screen, ScreenContext, View, ViewAction};
use crate::catalog::{self, format_price, GAME_TYPES};
use crate::controller::Command;
use crate::state::screen::GameDetailState;
use crate::state::ScreenId;
use crate::utils::format_time;

/// Game packs previewed on the game menu.
const MENU_PACK_PREVIEW: usize = 2;

/// Rows of the leaderboard shown on the result screen.
const RESULT_BOARD_ROWS: usize = 5;

pub struct GameMenuScreen;

impl Screen for GameMenuScreen {
    fn build(&self, ctx: &ScreenContext<'_>) -> View {
        let mut items = vec![
            Item::heading("This week's results"),
            Item::stat("Games played", 15),
            Item::stat("Average time", "2:15"),
            Item::stat("Average accuracy", "92%"),
            Item::Gap,
            Item::heading("Premium game packs"),
        ];
        for pack in ctx.state.game_packs.iter().take(MENU_PACK_PREVIEW) {
            let detail = if pack.purchased {
                format!("{} games - owned", pack.games)
            } else {
                format!("{} games - {}", pack.games, format_price(pack.price))
            };
            items.push(Item::status(pack.name.as_str(), detail, pack.purchased));
            items.push(Item::note(pack.preview.as_str()));
        }

        let games = GAME_TYPES.iter().map(|game| {
            ViewAction::new(
                format!("{} {}: {}", game.icon, game.name, game.description),
                Command::OpenGameDetail(game.id.to_string()),
            )
        });

        View::new(ScreenId::GameMenu, "Game center")
            .subtitle("Brain-boosting games")
            .items(items)
            .actions(games)
            .actions([
                ViewAction::go("Premium game packs", ScreenId::GamePremiumPack),
                ViewAction::go("Leaderboard", ScreenId::Leaderboard),
            ])
    }
}

pub struct GameDetailScreen;

impl Screen for GameDetailScreen {
    fn build(&self, ctx: &ScreenContext<'_>) -> View {
        let fallback = GameDetailState::default();
        let detail = ctx.active.state.as_game_detail().unwrap_or(&fallback);
        let game = catalog::find_game_type(&detail.game_id);
        let info = catalog::game_details_for(&detail.game_id);

        let mut items = vec![
            Item::text(info.full_description),
            Item::Gap,
            Item::heading("My record"),
            Item::stat("Best score", info.my_best_score),
            Item::stat("Weekly average", info.weekly_avg),
            Item::stat("Completion rate", format!("{}%", info.completion_rate)),
            Item::stat("Average play time", info.avg_time),
            Item::Gap,
            Item::heading("Brain benefits"),
        ];
        items.extend(info.benefits.iter().map(|b| Item::status(*b, "", true)));
        items.push(Item::Gap);
        items.push(Item::heading("Difficulty"));
        items.extend(info.difficulty.iter().map(|level| Item::bullet(*level)));

        View::new(ScreenId::GameDetail, format!("{} {}", game.icon, game.name))
            .subtitle(game.description)
            .back(ScreenId::GameMenu)
            .items(items)
            .actions([
                ViewAction::go("Play now", ScreenId::GameStart),
                ViewAction::go("See other games", ScreenId::GameMenu),
            ])
    }
}

pub struct GameStartScreen;

impl Screen for GameStartScreen {
    fn build(&self, _ctx: &ScreenContext<'_>) -> View {
        View::new(ScreenId::GameStart, "Today's mini-game")
            .subtitle("Warm up your brain with a quick game")
            .back(ScreenId::Home)
            .items(vec![
                Item::heading("Memory match"),
                Item::badge("Match the pieces of Mondrian's Composition with Red, Blue and Yellow"),
                Item::Gap,
                Item::bullet("Takes about 5-7 minutes"),
                Item::bullet("Find the cards that show the same picture"),
                Item::bullet("Enjoy the pieces of a geometric masterpiece"),
            ])
            .action(ViewAction::go("Start game", ScreenId::GamePlay))
    }
}

pub struct GamePlayScreen;

impl Screen for GamePlayScreen {
    fn build(&self, ctx: &ScreenContext<'_>) -> View {
        let cards = ctx
            .active
            .state
            .as_game_play()
            .map(|play| play.cards.clone())
            .unwrap_or_default();
        let game = ctx.state.game_state;

        View::new(ScreenId::GamePlay, "Mondrian puzzle")
            .subtitle("Find two cards with the same picture")
            .back(ScreenId::GameStart)
            .body(Body::MemoryGrid {
                time_left: format_time(game.time_left),
                score: game.score,
                cards,
            })
            .action(ViewAction::new("Finish game", Command::CompleteGame))
    }
}

pub struct GameCompleteScreen;

impl Screen for GameCompleteScreen {
    fn build(&self, ctx: &ScreenContext<'_>) -> View {
        let state = ctx.state;
        let rank = catalog::my_rank(&state.leaderboard);
        let better = catalog::better_than_percentage(&state.leaderboard);
        let verdict = if state.completion_time < state.average_completion_time {
            format!(
                "{} faster than average!",
                format_time(state.average_completion_time - state.completion_time)
            )
        } else {
            format!("Nice run! Faster than {}% of players", better)
        };

        let items = vec![
            Item::stat("Your time", format_time(state.completion_time)),
            Item::stat("Average", format_time(state.average_completion_time)),
            Item::stat("Rank", format!("#{}", rank)),
            Item::badge(verdict),
            Item::Gap,
            Item::heading("Detailed analysis"),
            Item::stat("Score", 850),
            Item::stat("Accuracy", "92%"),
            Item::stat("Reaction time", format!("{:.1}s", state.cognitive.reaction_time_secs)),
            Item::Gap,
            Item::heading("Today's leaderboard"),
        ];

        View::new(ScreenId::GameComplete, "Game complete!")
            .subtitle("Great job!")
            .back(ScreenId::Home)
            .body(Body::Leaderboard {
                entries: state
                    .leaderboard
                    .iter()
                    .take(RESULT_BOARD_ROWS)
                    .cloned()
                    .collect(),
                items,
            })
            .actions([
                ViewAction::go("Home", ScreenId::Home),
                ViewAction::go("Play again", ScreenId::GamePlay),
                ViewAction::go("Claim reward", ScreenId::Reward),
                ViewAction::go("Full leaderboard", ScreenId::Leaderboard),
            ])
    }
}
