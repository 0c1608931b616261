//! Text and JSON output for the `catalog` and `leaderboard` commands.

use crate::catalog::{
    self, better_than_percentage, format_price, my_rank, LeaderboardEntry, GAME_TYPES,
};
use crate::utils::format_time;
use anyhow::{Context, Result};
use serde::Serialize;

#[derive(Serialize)]
struct CatalogDump {
    games: &'static [catalog::GameType],
    drawing_packs: Vec<catalog::DrawingPack>,
    game_packs: Vec<catalog::GamePack>,
}

fn owned(purchased: bool) -> &'static str {
    if purchased {
        "owned"
    } else {
        ""
    }
}

pub fn catalog_text() -> String {
    let mut out = String::from("Games\n");
    for game in &GAME_TYPES {
        out.push_str(&format!("  {} {:<14} {}\n", game.icon, game.name, game.description));
    }
    out.push_str("\nDrawing packs\n");
    for pack in catalog::initial_drawing_packs() {
        out.push_str(&format!(
            "  {:<18} {:>8}  {:>2} levels  {}\n",
            pack.id,
            format_price(pack.price),
            pack.levels,
            owned(pack.purchased)
        ));
    }
    out.push_str("\nGame packs\n");
    for pack in catalog::initial_game_packs() {
        out.push_str(&format!(
            "  {:<18} {:>8}  {:>2} games   {}\n",
            pack.id,
            format_price(pack.price),
            pack.games,
            owned(pack.purchased)
        ));
    }
    out.trim_end().to_string()
}

pub fn catalog_json() -> Result<String> {
    let dump = CatalogDump {
        games: &GAME_TYPES,
        drawing_packs: catalog::initial_drawing_packs(),
        game_packs: catalog::initial_game_packs(),
    };
    serde_json::to_string_pretty(&dump).context("Failed to serialize catalog")
}

pub fn leaderboard_text(entries: &[LeaderboardEntry]) -> String {
    let mut out = String::new();
    for e in entries {
        let time = e.time.map(format_time).unwrap_or_else(|| "-".to_string());
        let marker = if e.is_me { "  <- you" } else { "" };
        out.push_str(&format!(
            "#{:<2} {:<14} {:>5}  {:>5}{}\n",
            e.rank, e.name, e.score, time, marker
        ));
    }
    out.push_str(&format!(
        "\nRank {}, better than {}% of players",
        my_rank(entries),
        better_than_percentage(entries)
    ));
    out
}

pub fn leaderboard_json(entries: &[LeaderboardEntry]) -> Result<String> {
    serde_json::to_string_pretty(entries).context("Failed to serialize leaderboard")
}
