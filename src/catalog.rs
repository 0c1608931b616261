//! Content catalog: game types, purchasable packs and the leaderboard.
//!
//! Everything here is reference data. The only mutation is the one-way
//! `purchased` flag on a pack, applied as a functional update by [`purchase`].

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Cognitive area a game trains.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum GameCategory {
    Memory,
    Attention,
    Spatial,
    Executive,
}

/// A mini-game offered in the game menu.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GameType {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub icon: &'static str,
    pub color: &'static str,
    pub category: GameCategory,
}

/// Long-form information shown on the game detail page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GameDetails {
    pub full_description: &'static str,
    pub benefits: &'static [&'static str],
    pub difficulty: &'static [&'static str],
    pub avg_time: &'static str,
    pub my_best_score: u32,
    pub weekly_avg: u32,
    pub completion_rate: u8,
}

pub const GAME_TYPES: [GameType; 6] = [
    GameType {
        id: "memory",
        name: "Memory Match",
        description: "Find and match pairs of identical picture cards",
        icon: "◆",
        color: "magenta",
        category: GameCategory::Memory,
    },
    GameType {
        id: "attention",
        name: "Focus Test",
        description: "Quickly tell apart words whose color and meaning differ",
        icon: "◉",
        color: "blue",
        category: GameCategory::Attention,
    },
    GameType {
        id: "spatial",
        name: "Shape Puzzle",
        description: "Rotate and combine shapes until they fit",
        icon: "▦",
        color: "green",
        category: GameCategory::Spatial,
    },
    GameType {
        id: "sudoku",
        name: "Number Puzzle",
        description: "Sudoku, Numberlink and other logic puzzles",
        icon: "▣",
        color: "yellow",
        category: GameCategory::Executive,
    },
    GameType {
        id: "pattern",
        name: "Pattern Recall",
        description: "Remember a sequence and play it back",
        icon: "↯",
        color: "red",
        category: GameCategory::Memory,
    },
    GameType {
        id: "connect",
        name: "Connect the Dots",
        description: "Join the numbers in order with a single line",
        icon: "✎",
        color: "cyan",
        category: GameCategory::Spatial,
    },
];

const MEMORY_DETAILS: GameDetails = GameDetails {
    full_description: "A classic card matching game that trains visual memory and focus at \
        the same time. Enjoy the geometric fragments of a Mondrian composition while you play.",
    benefits: &[
        "Better short-term memory",
        "Stronger visual recognition",
        "Longer attention span",
        "Sharper pattern recognition",
    ],
    difficulty: &["Easy: 4x2 cards", "Normal: 4x4 cards", "Hard: 6x4 cards"],
    avg_time: "2-5 min",
    my_best_score: 1850,
    weekly_avg: 1650,
    completion_rate: 92,
};

const ATTENTION_DETAILS: GameDetails = GameDetails {
    full_description: "A focus game built on the Stroop effect. Pick the right answer fast \
        when a word's meaning and its color disagree.",
    benefits: &[
        "Better selective attention",
        "More cognitive flexibility",
        "Faster reactions",
        "Stronger interference control",
    ],
    difficulty: &["Easy: single color", "Normal: two colors", "Hard: many colors"],
    avg_time: "3-6 min",
    my_best_score: 950,
    weekly_avg: 820,
    completion_rate: 88,
};

const SPATIAL_DETAILS: GameDetails = GameDetails {
    full_description: "A shape puzzle for three-dimensional reasoning. Rotate and combine \
        shapes and drop them into exactly the right place.",
    benefits: &[
        "Better spatial perception",
        "3D thinking",
        "Stronger problem solving",
        "Mathematical reasoning",
    ],
    difficulty: &["Easy: 2D shapes", "Normal: basic 3D", "Hard: compound 3D"],
    avg_time: "4-8 min",
    my_best_score: 2100,
    weekly_avg: 1900,
    completion_rate: 85,
};

const SUDOKU_DETAILS: GameDetails = GameDetails {
    full_description: "Number puzzles for logical thinking and deduction. Sudoku, Numberlink \
        and friends train a systematic approach.",
    benefits: &[
        "Logical thinking",
        "Stronger deduction",
        "Systematic problem solving",
        "Patience and focus",
    ],
    difficulty: &["Easy: 4x4 sudoku", "Normal: 6x6 sudoku", "Hard: 9x9 sudoku"],
    avg_time: "5-12 min",
    my_best_score: 1200,
    weekly_avg: 1050,
    completion_rate: 78,
};

const PATTERN_DETAILS: GameDetails = GameDetails {
    full_description: "Remember a sequence and reproduce it. Visual and audio patterns build \
        up sequential memory.",
    benefits: &[
        "Sequential memory",
        "Pattern recognition",
        "Larger working memory",
        "Sequence processing",
    ],
    difficulty: &["Easy: 3-4 steps", "Normal: 5-7 steps", "Hard: 8-12 steps"],
    avg_time: "3-7 min",
    my_best_score: 1750,
    weekly_avg: 1580,
    completion_rate: 90,
};

const CONNECT_DETAILS: GameDetails = GameDetails {
    full_description: "Join the numbers in order with one continuous line. Find the best \
        route and connect it efficiently.",
    benefits: &[
        "Route planning",
        "Visual tracking",
        "Sense of direction",
        "Efficient thinking",
    ],
    difficulty: &["Easy: connect 1-15", "Normal: connect 1-25", "Hard: connect 1-40"],
    avg_time: "2-6 min",
    my_best_score: 1950,
    weekly_avg: 1800,
    completion_rate: 87,
};

/// Look up a game type, falling back to memory match for unknown ids.
pub fn find_game_type(id: &str) -> &'static GameType {
    GAME_TYPES
        .iter()
        .find(|g| g.id == id)
        .unwrap_or(&GAME_TYPES[0])
}

/// Detail page content for a game, falling back to memory match.
pub fn game_details_for(id: &str) -> &'static GameDetails {
    match id {
        "attention" => &ATTENTION_DETAILS,
        "spatial" => &SPATIAL_DETAILS,
        "sudoku" => &SUDOKU_DETAILS,
        "pattern" => &PATTERN_DETAILS,
        "connect" => &CONNECT_DETAILS,
        _ => &MEMORY_DETAILS,
    }
}

/// Which pack collection an operation targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PackKind {
    Drawing,
    Game,
}

impl fmt::Display for PackKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PackKind::Drawing => f.write_str("drawing"),
            PackKind::Game => f.write_str("game"),
        }
    }
}

impl FromStr for PackKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "drawing" => Ok(PackKind::Drawing),
            "game" => Ok(PackKind::Game),
            other => Err(format!("Unknown pack kind: {}", other)),
        }
    }
}

/// Common behaviour of purchasable packs.
pub trait Pack: Clone {
    fn id(&self) -> &str;
    fn name(&self) -> &str;
    fn price(&self) -> u32;
    fn is_purchased(&self) -> bool;
    fn mark_purchased(&mut self);
}

/// Style of a drawing pack.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DrawingStyle {
    Drawing,
    Coloring,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DrawingPack {
    pub id: String,
    pub name: String,
    pub style: DrawingStyle,
    pub price: u32,
    pub levels: u32,
    pub purchased: bool,
    pub description: String,
    pub samples: Vec<String>,
    pub category: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GamePack {
    pub id: String,
    pub name: String,
    pub price: u32,
    pub games: u32,
    pub purchased: bool,
    pub description: String,
    pub category: String,
    pub preview: String,
}

impl Pack for DrawingPack {
    fn id(&self) -> &str {
        &self.id
    }
    fn name(&self) -> &str {
        &self.name
    }
    fn price(&self) -> u32 {
        self.price
    }
    fn is_purchased(&self) -> bool {
        self.purchased
    }
    fn mark_purchased(&mut self) {
        self.purchased = true;
    }
}

impl Pack for GamePack {
    fn id(&self) -> &str {
        &self.id
    }
    fn name(&self) -> &str {
        &self.name
    }
    fn price(&self) -> u32 {
        self.price
    }
    fn is_purchased(&self) -> bool {
        self.purchased
    }
    fn mark_purchased(&mut self) {
        self.purchased = true;
    }
}

/// Result of a purchase request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PurchaseOutcome {
    Purchased,
    AlreadyOwned,
    NotFound,
}

/// Return a copy of `packs` with pack `id` marked purchased.
///
/// Order and every other field are preserved. Unknown or already-owned ids
/// yield an unchanged copy.
pub fn purchase<P: Pack>(packs: &[P], id: &str) -> Vec<P> {
    packs
        .iter()
        .map(|pack| {
            let mut pack = pack.clone();
            if pack.id() == id {
                pack.mark_purchased();
            }
            pack
        })
        .collect()
}

/// Classify what [`purchase`] would do for `id`.
pub fn purchase_outcome<P: Pack>(packs: &[P], id: &str) -> PurchaseOutcome {
    match packs.iter().find(|p| p.id() == id) {
        None => PurchaseOutcome::NotFound,
        Some(p) if p.is_purchased() => PurchaseOutcome::AlreadyOwned,
        Some(_) => PurchaseOutcome::Purchased,
    }
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| (*s).to_string()).collect()
}

pub fn initial_drawing_packs() -> Vec<DrawingPack> {
    vec![
        DrawingPack {
            id: "nature-therapy".to_string(),
            name: "Nature Therapy Drawing".to_string(),
            style: DrawingStyle::Drawing,
            price: 3900,
            levels: 40,
            purchased: false,
            description: "Ease stress by drawing trees, flowers and animals".to_string(),
            samples: strings(&["Big tree", "Cherry blossom", "Butterfly"]),
            category: "Stress relief".to_string(),
        },
        DrawingPack {
            id: "memory-coloring".to_string(),
            name: "Memory Coloring".to_string(),
            style: DrawingStyle::Coloring,
            price: 2900,
            levels: 30,
            purchased: true,
            description: "Turn family photos into a coloring book".to_string(),
            samples: strings(&["Family photo", "Our home", "Birthday party"]),
            category: "Memory".to_string(),
        },
        DrawingPack {
            id: "masterpiece".to_string(),
            name: "Masterpiece Studies".to_string(),
            style: DrawingStyle::Drawing,
            price: 4900,
            levels: 25,
            purchased: false,
            description: "Redraw famous paintings step by step".to_string(),
            samples: strings(&["Van Gogh sunflowers", "Hokusai wave", "Mondrian composition"]),
            category: "Focus".to_string(),
        },
        DrawingPack {
            id: "emotion-art".to_string(),
            name: "Emotion Art".to_string(),
            style: DrawingStyle::Drawing,
            price: 3400,
            levels: 35,
            purchased: false,
            description: "Therapeutic drawing that expresses feelings as color and form"
                .to_string(),
            samples: strings(&["Joy", "Calm", "Strength"]),
            category: "Emotional balance".to_string(),
        },
        DrawingPack {
            id: "photo-coloring".to_string(),
            name: "Photo Coloring".to_string(),
            style: DrawingStyle::Coloring,
            price: 1900,
            levels: 20,
            purchased: false,
            description: "Turn your own photos into coloring pages".to_string(),
            samples: strings(&["My photo", "Landscape", "Pets"]),
            category: "Creativity".to_string(),
        },
    ]
}

pub fn initial_game_packs() -> Vec<GamePack> {
    vec![
        GamePack {
            id: "memory-master".to_string(),
            name: "Memory Master".to_string(),
            price: 3900,
            games: 12,
            purchased: false,
            description: "Step-by-step memory training games".to_string(),
            category: "Memory".to_string(),
            preview: "Pattern, sequence and spatial recall".to_string(),
        },
        GamePack {
            id: "attention-pro".to_string(),
            name: "Attention Pro".to_string(),
            price: 2900,
            games: 8,
            purchased: true,
            description: "Games that build attention and focus".to_string(),
            category: "Attention".to_string(),
            preview: "Stroop test, quick reactions, selective attention".to_string(),
        },
        GamePack {
            id: "spatial-genius".to_string(),
            name: "Spatial Genius".to_string(),
            price: 4200,
            games: 15,
            purchased: false,
            description: "3D spatial reasoning and mental rotation".to_string(),
            category: "Spatial".to_string(),
            preview: "Shape rotation, 3D puzzles, spatial reasoning".to_string(),
        },
        GamePack {
            id: "logic-puzzle".to_string(),
            name: "Logic Puzzle Collection".to_string(),
            price: 3500,
            games: 10,
            purchased: false,
            description: "Mathematical and logical thinking".to_string(),
            category: "Logic".to_string(),
            preview: "Sudoku, Numberlink, logic deduction".to_string(),
        },
    ]
}

/// Format a price in won with thousands separators, e.g. `₩3,900`.
pub fn format_price(price: u32) -> String {
    let digits = price.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    format!("₩{}", out)
}

/// Seconds the session's own run took, shown as "me" on the leaderboard.
pub const GAME_COMPLETION_TIME: u32 = 135;

/// Average completion time across all players.
pub const AVERAGE_COMPLETION_TIME: u32 = 142;

/// Rank reported when "me" is missing from the board.
const DEFAULT_RANK: u32 = 4;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeaderboardEntry {
    pub rank: u32,
    pub name: String,
    pub score: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time: Option<u32>,
    #[serde(default)]
    pub is_me: bool,
}

/// Build today's leaderboard from the fixed roster plus "me".
pub fn leaderboard(completion_time: u32) -> Vec<LeaderboardEntry> {
    let roster: [(&str, u32, u32, bool); 7] = [
        ("Kim Cheolsu", 2150, 98, false),
        ("Lee Younghee", 2050, 112, false),
        ("Park Minsu", 1980, 128, false),
        ("Me", 1850, completion_time, true),
        ("Jung Daeun", 1720, 147, false),
        ("Choi Youngsu", 1680, 152, false),
        ("Han Jimin", 1650, 168, false),
    ];
    roster
        .iter()
        .enumerate()
        .map(|(i, (name, score, time, is_me))| LeaderboardEntry {
            rank: i as u32 + 1,
            name: (*name).to_string(),
            score: *score,
            time: Some(*time),
            is_me: *is_me,
        })
        .collect()
}

/// Rank of the "me" row.
pub fn my_rank(entries: &[LeaderboardEntry]) -> u32 {
    entries
        .iter()
        .find(|e| e.is_me)
        .map(|e| e.rank)
        .unwrap_or(DEFAULT_RANK)
}

/// Share of the board "me" finished ahead of, as a rounded percentage.
pub fn better_than_percentage(entries: &[LeaderboardEntry]) -> u32 {
    if entries.is_empty() {
        return 0;
    }
    let ratio = 1.0 - f64::from(my_rank(entries)) / entries.len() as f64;
    (ratio * 100.0).round().max(0.0) as u32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_game_falls_back_to_memory() {
        assert_eq!(find_game_type("chess").id, "memory");
        assert_eq!(find_game_type("sudoku").name, "Number Puzzle");
        assert_eq!(game_details_for("chess"), &MEMORY_DETAILS);
        assert_eq!(game_details_for("connect").my_best_score, 1950);
    }

    #[test]
    fn test_purchase_marks_only_target() {
        let packs = initial_drawing_packs();
        let updated = purchase(&packs, "masterpiece");
        assert_eq!(updated.len(), packs.len());
        for (before, after) in packs.iter().zip(&updated) {
            assert_eq!(before.id, after.id);
            if before.id == "masterpiece" {
                assert!(after.purchased);
                assert_eq!(after.price, before.price);
                assert_eq!(after.samples, before.samples);
            } else {
                assert_eq!(before, after);
            }
        }
    }

    #[test]
    fn test_purchase_is_idempotent() {
        let packs = initial_game_packs();
        let once = purchase(&packs, "logic-puzzle");
        let twice = purchase(&once, "logic-puzzle");
        assert_eq!(once, twice);
    }

    #[test]
    fn test_purchase_unknown_id_is_noop() {
        let packs = initial_game_packs();
        assert_eq!(purchase(&packs, "nope"), packs);
        assert_eq!(purchase_outcome(&packs, "nope"), PurchaseOutcome::NotFound);
        assert_eq!(
            purchase_outcome(&packs, "attention-pro"),
            PurchaseOutcome::AlreadyOwned
        );
        assert_eq!(
            purchase_outcome(&packs, "memory-master"),
            PurchaseOutcome::Purchased
        );
    }

    #[test]
    fn test_format_price() {
        assert_eq!(format_price(0), "₩0");
        assert_eq!(format_price(900), "₩900");
        assert_eq!(format_price(3900), "₩3,900");
        assert_eq!(format_price(1_234_567), "₩1,234,567");
    }

    #[test]
    fn test_leaderboard_places_me_fourth() {
        let board = leaderboard(GAME_COMPLETION_TIME);
        assert_eq!(board.len(), 7);
        assert_eq!(my_rank(&board), 4);
        assert_eq!(board[3].time, Some(135));
        assert_eq!(board.iter().filter(|e| e.is_me).count(), 1);
        assert_eq!(better_than_percentage(&board), 43);
    }

    #[test]
    fn test_rank_falls_back_when_me_missing() {
        let board: Vec<_> = leaderboard(100).into_iter().filter(|e| !e.is_me).collect();
        assert_eq!(my_rank(&board), 4);
        assert_eq!(better_than_percentage(&board), 33);
        assert_eq!(better_than_percentage(&[]), 0);
    }
}
