//! Premium pack stores for drawing and game packs.

use super::{Item, Screen, ScreenContext, View, ViewAction};
use crate::catalog::{format_price, DrawingStyle, Pack, PackKind};
use crate::controller::Command;
use crate::state::ScreenId;

/// Buy button for a pack; disabled once owned.
fn buy_action<P: Pack>(kind: PackKind, pack: &P) -> ViewAction {
    let label = if pack.is_purchased() {
        format!("{}: owned", pack.name())
    } else {
        format!("Buy {} ({})", pack.name(), format_price(pack.price()))
    };
    ViewAction::new(
        label,
        Command::Purchase {
            kind,
            id: pack.id().to_string(),
        },
    )
    .enabled(!pack.is_purchased())
}

fn price_line<P: Pack>(pack: &P) -> Item {
    if pack.is_purchased() {
        Item::status(pack.name(), "Purchased", true)
    } else {
        Item::status(pack.name(), format_price(pack.price()), false)
    }
}

pub struct DrawingStoreScreen;

impl Screen for DrawingStoreScreen {
    fn build(&self, ctx: &ScreenContext<'_>) -> View {
        let packs = &ctx.state.drawing_packs;
        let mut items = Vec::new();
        for pack in packs {
            let (style, extra) = match pack.style {
                DrawingStyle::Coloring => ("Coloring", "AI photo conversion"),
                DrawingStyle::Drawing => ("Free drawing", "Step-by-step guides"),
            };
            items.push(price_line(pack));
            items.push(Item::note(pack.description.as_str()));
            items.push(Item::stat(
                format!("{} / {}", pack.category, style),
                format!("{} levels", pack.levels),
            ));
            items.push(Item::bullet(format!("Topics: {}", pack.samples.join(", "))));
            items.push(Item::bullet(extra));
            items.push(Item::Gap);
        }
        items.push(Item::note(
            "Purchased packs stay available at any time, and new topics are added every month.",
        ));

        View::new(ScreenId::PremiumPack, "Drawing premium packs")
            .subtitle("Look after your brain with creative drawing")
            .back(ScreenId::DrawingMenu)
            .items(items)
            .actions(packs.iter().map(|p| buy_action(PackKind::Drawing, p)))
            .action(ViewAction::go("Back to studio", ScreenId::DrawingMenu))
    }
}

pub struct GameStoreScreen;

impl Screen for GameStoreScreen {
    fn build(&self, ctx: &ScreenContext<'_>) -> View {
        let packs = &ctx.state.game_packs;
        let mut items = Vec::new();
        for pack in packs {
            items.push(price_line(pack));
            items.push(Item::note(pack.description.as_str()));
            items.push(Item::stat(
                pack.category.as_str(),
                format!("{} games", pack.games),
            ));
            items.push(Item::bullet(format!("Includes: {}", pack.preview)));
            items.push(Item::Gap);
        }
        items.push(Item::note(
            "Purchased game packs stay available at any time, with new games added regularly.",
        ));

        View::new(ScreenId::GamePremiumPack, "Game premium packs")
            .subtitle("Train your brain with expert mini-games")
            .back(ScreenId::GameMenu)
            .items(items)
            .actions(packs.iter().map(|p| buy_action(PackKind::Game, p)))
            .action(ViewAction::go("Back to game center", ScreenId::GameMenu))
    }
}
