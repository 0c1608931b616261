//! Drawing canvas widget.
//!
//! One terminal cell per canvas cell. Inked cells are drawn with a block
//! glyph; the cursor shows as a crosshair, or a filled pen tip while the
//! pen is down.

use crate::state::screen::{CanvasState, CANVAS_HEIGHT, CANVAS_WIDTH};
use crate::styles::theme;
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::widgets::{Block, BorderType, Borders, Widget};

const INK: &str = "█";
const CURSOR_UP: &str = "+";
const CURSOR_DOWN: &str = "●";

pub struct CanvasWidget<'a> {
    canvas: &'a CanvasState,
    title: &'a str,
}

impl<'a> CanvasWidget<'a> {
    pub fn new(canvas: &'a CanvasState, title: &'a str) -> Self {
        Self { canvas, title }
    }

    /// Outer size including the border.
    pub fn size() -> (u16, u16) {
        (CANVAS_WIDTH + 2, CANVAS_HEIGHT + 2)
    }
}

impl Widget for CanvasWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let t = theme();
        let (w, h) = Self::size();
        let frame = Rect::new(
            area.x + area.width.saturating_sub(w) / 2,
            area.y,
            w.min(area.width),
            h.min(area.height),
        );
        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(t.border_focused_style())
            .title(format!(" {} ", self.title))
            .title_style(t.title_style());
        let inner = block.inner(frame);
        block.render(frame, buf);

        let in_bounds = |x: u16, y: u16| x < inner.width && y < inner.height;

        for p in self.canvas.cells() {
            if in_bounds(p.x, p.y) {
                buf[(inner.x + p.x, inner.y + p.y)]
                    .set_symbol(INK)
                    .set_style(t.text_style());
            }
        }

        let c = self.canvas.cursor;
        if in_bounds(c.x, c.y) {
            let symbol = if self.canvas.pen_down { CURSOR_DOWN } else { CURSOR_UP };
            buf[(inner.x + c.x, inner.y + c.y)]
                .set_symbol(symbol)
                .set_style(t.emphasis_style());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strokes_and_cursor_are_drawn() {
        let mut canvas = CanvasState::default();
        canvas.toggle_pen();
        canvas.move_pen(1, 0);
        canvas.move_pen(1, 0);
        canvas.toggle_pen();
        canvas.move_pen(0, 1);

        let (w, h) = CanvasWidget::size();
        let area = Rect::new(0, 0, w, h);
        let mut buf = Buffer::empty(area);
        CanvasWidget::new(&canvas, "My Garden").render(area, &mut buf);

        let start = (1 + CANVAS_WIDTH / 2, 1 + CANVAS_HEIGHT / 2);
        assert_eq!(buf[start].symbol(), INK);
        assert_eq!(buf[(start.0 + 2, start.1)].symbol(), INK);
        assert_eq!(buf[(start.0 + 2, start.1 + 1)].symbol(), CURSOR_UP);
    }
}
