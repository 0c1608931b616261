//! Centered modal frame shared by the accessibility dialog and the key help.
//!
//! The rest of the screen is dimmed, the popup area cleared and framed, and
//! the title and footer hint take the top and bottom rows. Callers draw their
//! content into the area `render` hands back.

use crate::components::footer::Footer;
use crate::styles::theme;
use crate::utils::center_popup;
use ratatui::prelude::*;
use ratatui::widgets::{Block, BorderType, Borders, Clear, Paragraph};

pub struct Popup<'a> {
    title: &'a str,
    footer: Option<&'a str>,
    /// Width and height as a percentage of the surrounding area.
    size: (u16, u16),
}

impl<'a> Popup<'a> {
    pub fn new(title: &'a str) -> Self {
        Self {
            title,
            footer: None,
            size: (70, 50),
        }
    }

    pub fn size(mut self, width_percent: u16, height_percent: u16) -> Self {
        self.size = (width_percent.min(100), height_percent.min(100));
        self
    }

    pub fn footer(mut self, hint: &'a str) -> Self {
        self.footer = Some(hint);
        self
    }

    /// Draw the frame; returns the content area.
    pub fn render(&self, frame: &mut Frame, area: Rect) -> Rect {
        let t = theme();
        frame.render_widget(Block::default().style(t.muted_style()), area);

        let outer = center_popup(area, self.size.0, self.size.1);
        frame.render_widget(Clear, outer);
        let frame_block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Thick)
            .border_style(t.border_focused_style())
            .style(t.background_style());
        let inner = frame_block.inner(outer);
        frame.render_widget(frame_block, outer);

        let footer_rows = if self.footer.is_some() { 2 } else { 0 };
        let [title_area, content, footer_area] = Layout::vertical([
            Constraint::Length(2),
            Constraint::Min(0),
            Constraint::Length(footer_rows),
        ])
        .areas(inner);

        frame.render_widget(
            Paragraph::new(self.title)
                .alignment(Alignment::Center)
                .style(t.title_style()),
            title_area,
        );
        if let Some(hint) = self.footer {
            let _ = Footer::render(frame, footer_area, hint);
        }
        content
    }
}
