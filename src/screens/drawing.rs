//! Drawing studio screens: menu, calendar, guide, canvas and the result.

use super::{Body, Item, Screen, ScreenContext, View, ViewAction};
use crate::catalog::format_price;
use crate::controller::Command;
use crate::state::ScreenId;
use crate::utils::MonthGrid;

/// Today's drawing topic.
pub const TODAY_TOPIC: &str = "My Garden";

/// Packs previewed on the studio menu.
const MENU_PACK_PREVIEW: usize = 3;

pub struct DrawingMenuScreen;

impl Screen for DrawingMenuScreen {
    fn build(&self, ctx: &ScreenContext<'_>) -> View {
        let state = ctx.state;
        let grid = MonthGrid::for_date(ctx.today);
        let mission = if state.daily_progress.drawing {
            format!("\"{}\" - done", TODAY_TOPIC)
        } else {
            format!("\"{}\" - waiting", TODAY_TOPIC)
        };

        let mut items = vec![
            Item::status("Today's daily mission", mission, state.daily_progress.drawing),
            Item::Gap,
            Item::heading("This month"),
            Item::stat(
                "Drawing days",
                format!("{} / {}", grid.completed_days(), grid.days.len()),
            ),
            Item::meter("Month progress", grid.completion_rate().min(100) as u8),
            Item::Gap,
            Item::heading("Brain-boosting drawing packs"),
        ];
        for pack in state.drawing_packs.iter().take(MENU_PACK_PREVIEW) {
            let detail = if pack.purchased {
                format!("{} levels - owned", pack.levels)
            } else {
                format!("{} levels - {}", pack.levels, format_price(pack.price))
            };
            items.push(Item::status(pack.name.as_str(), detail, pack.purchased));
            items.push(Item::note(pack.description.as_str()));
        }

        View::new(ScreenId::DrawingMenu, "Drawing studio")
            .items(items)
            .actions([
                ViewAction::go("Today's drawing", ScreenId::DrawingGuide)
                    .enabled(!state.daily_progress.drawing),
                ViewAction::go("Drawing calendar", ScreenId::DrawingCalendar),
                ViewAction::go("Premium packs", ScreenId::PremiumPack),
                ViewAction::go("Leaderboard", ScreenId::Leaderboard),
            ])
    }
}

pub struct DrawingCalendarScreen;

impl Screen for DrawingCalendarScreen {
    fn build(&self, ctx: &ScreenContext<'_>) -> View {
        let grid = MonthGrid::for_date(ctx.today);
        let items = vec![
            Item::stat("Days completed", grid.completed_days()),
            Item::stat("Completion rate", format!("{}%", grid.completion_rate())),
            Item::stat("Streak", format!("{} days", ctx.state.streak)),
            Item::Gap,
            Item::heading("Highlights this month"),
            Item::bullet("Busiest week: the second week (7 days in a row)"),
            Item::bullet("Favourite topic: the \"Winter scenery\" series"),
            Item::bullet("Average drawing time: 4 min 20 s"),
            Item::bullet("Hand stability: +12% on last month"),
        ];

        View::new(ScreenId::DrawingCalendar, "Drawing calendar")
            .subtitle(grid.title())
            .back(ScreenId::DrawingMenu)
            .body(Body::Calendar { grid, items })
            .action(ViewAction::go("Back to studio", ScreenId::DrawingMenu))
    }
}

pub struct DrawingGuideScreen;

impl Screen for DrawingGuideScreen {
    fn build(&self, _ctx: &ScreenContext<'_>) -> View {
        View::new(ScreenId::DrawingGuide, "Today's drawing")
            .subtitle("Draw freely on today's topic. There are no wrong answers!")
            .back(ScreenId::Home)
            .items(vec![
                Item::heading("Today's topic"),
                Item::badge(format!("\"{}\"", TODAY_TOPIC)),
                Item::Gap,
                Item::bullet("Takes about 3-5 minutes"),
                Item::bullet("Mistakes are fine, you can clear and start over"),
                Item::bullet("The process matters more than the result"),
            ])
            .action(ViewAction::go("Start drawing", ScreenId::DrawingCanvas))
    }
}

pub struct DrawingCanvasScreen;

impl Screen for DrawingCanvasScreen {
    fn build(&self, ctx: &ScreenContext<'_>) -> View {
        let canvas = ctx.active.state.as_canvas().cloned().unwrap_or_default();
        let blank = canvas.is_blank();

        View::new(ScreenId::DrawingCanvas, "Drawing")
            .subtitle(TODAY_TOPIC)
            .back(ScreenId::DrawingGuide)
            .body(Body::Canvas {
                topic: TODAY_TOPIC,
                canvas,
            })
            .actions([
                ViewAction::new("Done", Command::CompleteDrawing),
                ViewAction::new("Clear", Command::ClearCanvas).enabled(!blank),
            ])
    }
}

pub struct DrawingCompleteScreen;

impl Screen for DrawingCompleteScreen {
    fn build(&self, _ctx: &ScreenContext<'_>) -> View {
        View::new(ScreenId::DrawingComplete, "Well done!")
            .subtitle("Today's drawing mission is complete. Ready for a mini-game?")
            .items(vec![
                Item::heading("Today's drawing analysis"),
                Item::stat("Time", "4:12"),
                Item::stat("Completeness", "92%"),
                Item::stat("Hand stability", "85%"),
                Item::stat("Points", "+50"),
            ])
            .actions([
                ViewAction::go("Start mini-game", ScreenId::GameStart),
                ViewAction::go("Later", ScreenId::Home),
            ])
    }
}
