//! Decorative card-back styles taken from a Mondrian composition.
//!
//! The memory match board shows one fragment of the painting on each card
//! back. Fragments are described by their fill and per-edge border widths.

use std::fmt;

/// Border color of every fragment, in CSS shorthand.
const BORDER_COLOR: &str = "#000";

/// An RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    pub const RED: Rgb = Rgb(0xdc, 0x14, 0x3c);
    pub const WHITE: Rgb = Rgb(0xf5, 0xf5, 0xf5);
    pub const BLUE: Rgb = Rgb(0x00, 0x66, 0xcc);
    pub const YELLOW: Rgb = Rgb(0xff, 0xd7, 0x00);
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.0, self.1, self.2)
    }
}

/// How a fragment is filled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Fill {
    Solid(Rgb),
    /// `top` covers the first `percent` of the height, `bottom` the rest.
    Split { top: Rgb, bottom: Rgb, percent: u8 },
}

/// Border widths in pixels; zero means no border on that edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Edges {
    pub top: u8,
    pub right: u8,
    pub bottom: u8,
    pub left: u8,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PieceStyle {
    pub fill: Fill,
    pub borders: Edges,
}

impl PieceStyle {
    /// Dominant color, used where only one color can be shown.
    pub fn primary_color(&self) -> Rgb {
        match self.fill {
            Fill::Solid(c) => c,
            Fill::Split { top, .. } => top,
        }
    }
}

/// CSS declarations, in `background; border-*` order.
impl fmt::Display for PieceStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.fill {
            Fill::Solid(c) => write!(f, "background: {};", c)?,
            Fill::Split {
                top,
                bottom,
                percent,
            } => write!(
                f,
                "background: linear-gradient(to bottom, {top} 0%, {top} {p}%, {bottom} {p}%, {bottom} 100%);",
                top = top,
                bottom = bottom,
                p = percent
            )?,
        }
        let b = self.borders;
        for (name, width) in [
            ("right", b.right),
            ("bottom", b.bottom),
            ("left", b.left),
            ("top", b.top),
        ] {
            if width > 0 {
                write!(f, " border-{}: {}px solid {};", name, width, BORDER_COLOR)?;
            }
        }
        Ok(())
    }
}

const fn edges(top: u8, right: u8, bottom: u8, left: u8) -> Edges {
    Edges {
        top,
        right,
        bottom,
        left,
    }
}

const PIECES: [PieceStyle; 8] = [
    PieceStyle {
        fill: Fill::Solid(Rgb::RED),
        borders: edges(0, 8, 8, 0),
    },
    PieceStyle {
        fill: Fill::Solid(Rgb::WHITE),
        borders: edges(0, 0, 8, 4),
    },
    PieceStyle {
        fill: Fill::Solid(Rgb::BLUE),
        borders: edges(4, 8, 4, 0),
    },
    PieceStyle {
        fill: Fill::Solid(Rgb::WHITE),
        borders: edges(4, 0, 4, 4),
    },
    PieceStyle {
        fill: Fill::Solid(Rgb::YELLOW),
        borders: edges(4, 8, 8, 0),
    },
    PieceStyle {
        fill: Fill::Solid(Rgb::WHITE),
        borders: edges(4, 0, 8, 4),
    },
    PieceStyle {
        fill: Fill::Solid(Rgb::WHITE),
        borders: edges(4, 8, 0, 0),
    },
    PieceStyle {
        fill: Fill::Split {
            top: Rgb::RED,
            bottom: Rgb::WHITE,
            percent: 60,
        },
        borders: edges(4, 0, 0, 4),
    },
];

/// Style of fragment `index`; anything outside 0..=7 gets fragment 0.
pub fn decorative_style(index: i32) -> &'static PieceStyle {
    usize::try_from(index)
        .ok()
        .and_then(|i| PIECES.get(i))
        .unwrap_or(&PIECES[0])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_out_of_range_uses_first_piece() {
        assert_eq!(decorative_style(-1), decorative_style(0));
        assert_eq!(decorative_style(8), decorative_style(0));
        assert_eq!(decorative_style(i32::MAX), decorative_style(0));
        assert_ne!(decorative_style(7), decorative_style(0));
    }

    #[test]
    fn test_css_rendering() {
        assert_eq!(
            decorative_style(0).to_string(),
            "background: #dc143c; border-right: 8px solid #000; border-bottom: 8px solid #000;"
        );
        let split = decorative_style(7).to_string();
        assert!(split.starts_with("background: linear-gradient(to bottom, #dc143c 0%, #dc143c 60%"));
        assert!(split.ends_with("border-left: 4px solid #000; border-top: 4px solid #000;"));
    }

    #[test]
    fn test_primary_color() {
        assert_eq!(decorative_style(2).primary_color(), Rgb::BLUE);
        assert_eq!(decorative_style(7).primary_color(), Rgb::RED);
    }
}
