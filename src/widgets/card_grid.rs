//! Memory match board: cards in a 4x2 grid with Mondrian-style backs.

use crate::state::screen::MemoryCard;
use crate::styles::theme;
use crate::utils::decorative_style;
use ratatui::buffer::Buffer;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::widgets::{Block, Borders, Paragraph, Widget};

pub const COLUMNS: usize = 4;

pub struct CardGrid<'a> {
    cards: &'a [MemoryCard],
}

impl<'a> CardGrid<'a> {
    pub fn new(cards: &'a [MemoryCard]) -> Self {
        Self { cards }
    }

    fn face(card: &MemoryCard) -> &'static str {
        if card.flipped || card.matched {
            card.symbol
        } else {
            "?"
        }
    }
}

impl Widget for CardGrid<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let t = theme();
        let rows = self.cards.len().div_ceil(COLUMNS).max(1);
        let row_areas = Layout::vertical(vec![Constraint::Ratio(1, rows as u32); rows]).split(area);

        for (row, chunk) in self.cards.chunks(COLUMNS).enumerate() {
            let cols = Layout::horizontal([Constraint::Ratio(1, COLUMNS as u32); COLUMNS])
                .spacing(1)
                .split(row_areas[row]);
            for (card, cell) in chunk.iter().zip(cols.iter()) {
                let piece = decorative_style(card.art_piece);
                let block = Block::default()
                    .borders(Borders::ALL)
                    .border_style(t.border_style())
                    .style(t.piece_style(piece.primary_color()));
                let inner = block.inner(*cell);
                block.render(*cell, buf);

                let middle = Rect::new(
                    inner.x,
                    inner.y + inner.height.saturating_sub(1) / 2,
                    inner.width,
                    inner.height.min(1),
                );
                Paragraph::new(Self::face(card))
                    .style(t.title_style())
                    .alignment(Alignment::Center)
                    .render(middle, buf);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::screen::GamePlayState;

    #[test]
    fn test_cards_start_face_down() {
        let mut cards = GamePlayState::default().cards;
        cards[5].flipped = true;

        let area = Rect::new(0, 0, 43, 10);
        let mut buf = Buffer::empty(area);
        CardGrid::new(&cards).render(area, &mut buf);

        let text: String = buf.content().iter().map(|c| c.symbol()).collect();
        assert_eq!(text.matches('?').count(), 7);
        assert!(text.contains(cards[5].symbol));
    }
}
