//! Weekly cognitive report and the daily reward.

use super::{Item, Screen, ScreenContext, View, ViewAction};
use crate::state::ScreenId;

pub struct WeeklyReportScreen;

impl Screen for WeeklyReportScreen {
    fn build(&self, ctx: &ScreenContext<'_>) -> View {
        let c = ctx.state.cognitive;
        let trend = if c.improving {
            "Focus is improving! Keep it up."
        } else {
            "Steady week. Small daily sessions add up."
        };

        View::new(ScreenId::WeeklyReport, "Brain health report")
            .subtitle("This week's cognitive score: 87 (+5)")
            .back(ScreenId::Home)
            .items(vec![
                Item::meter("Drawing speed", c.drawing_speed),
                Item::meter("Drawing accuracy", c.drawing_accuracy),
                Item::meter("Memory", c.memory_score),
                Item::Gap,
                Item::heading("Detailed analysis"),
                Item::meter("Hand stability", c.hand_stability),
                Item::meter("Pressure consistency", c.pressure_consistency),
                Item::meter("Attention span", c.attention_span),
                Item::meter("Spatial awareness", c.spatial_awareness),
                Item::stat("Reaction time", format!("{:.1}s", c.reaction_time_secs)),
                Item::Gap,
                Item::heading("This week"),
                Item::stat("Missions completed", "5 days"),
                Item::stat("Total activity", "47 min"),
                Item::bullet("Drawing completion: 100% (7/7 days)"),
                Item::bullet("Hand tremor: 12% better than last week"),
                Item::bullet("Average game score: 850 (+50)"),
                Item::bullet("Attention span: 6.5 min on average (+30 s)"),
                Item::bullet("Best day: Wednesday (perfect score!)"),
                Item::Gap,
                Item::heading("Suggestions"),
                Item::badge(trend),
                Item::text("Drawing: try fine patterns to steady your hand further."),
                Item::text("Games: spatial puzzles will build spatial awareness."),
                Item::Gap,
                Item::note(
                    "This report summarises everyday changes. It is not a medical diagnosis \
                     or treatment.",
                ),
            ])
            .actions([
                ViewAction::go("Share with family", ScreenId::Family),
                ViewAction::go("Back home", ScreenId::Home),
            ])
    }
}

pub struct RewardScreen;

impl Screen for RewardScreen {
    fn build(&self, ctx: &ScreenContext<'_>) -> View {
        View::new(ScreenId::Reward, "Congratulations!")
            .subtitle("You finished every mission today")
            .items(vec![
                Item::stat("Points earned", "+100"),
                Item::stat("Streak", format!("{} days in a row", ctx.state.streak)),
                Item::Gap,
                Item::badge("★ Daily goal badge ★"),
            ])
            .actions([
                ViewAction::go("Back home", ScreenId::Home),
                ViewAction::go("View weekly report", ScreenId::WeeklyReport),
            ])
    }
}
