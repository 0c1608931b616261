use crate::styles::theme;
use anyhow::Result;
use ratatui::prelude::*;
use ratatui::widgets::{Block, BorderType, Borders, Paragraph, Wrap};

/// Rows the header occupies (border, subtitle, status, border).
pub const HEADER_HEIGHT: u16 = 4;

/// Common header component for all screens
pub struct Header;

impl Header {
    /// Render a header with title, subtitle and the status line
    ///
    /// # Arguments
    /// * `frame` - The frame to render to
    /// * `area` - The area to render the header in
    /// * `title` - Screen title, shown in the top border
    /// * `subtitle` - Optional second line under the title
    /// * `status` - Right-aligned counters (hearts, points, streak)
    ///
    /// # Returns
    /// The height of the header (for layout calculations)
    pub fn render(
        frame: &mut Frame,
        area: Rect,
        title: &str,
        subtitle: Option<&str>,
        status: &str,
    ) -> Result<u16> {
        let t = theme();
        let header_block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(t.border_focused_style())
            .title(format!(" {} ", title))
            .title_style(t.title_style())
            .title_alignment(Alignment::Center)
            .padding(ratatui::widgets::Padding::new(1, 1, 0, 0));

        let inner_area = header_block.inner(area);
        frame.render_widget(header_block, area);

        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(1), Constraint::Min(0)])
            .split(inner_area);

        if let Some(subtitle) = subtitle {
            let subtitle_para = Paragraph::new(subtitle)
                .style(t.text_style())
                .alignment(Alignment::Center)
                .wrap(Wrap { trim: true });
            frame.render_widget(subtitle_para, rows[0]);
        }

        let status_para = Paragraph::new(status)
            .style(t.warning_style())
            .alignment(Alignment::Right);
        frame.render_widget(status_para, rows[1]);

        Ok(area.height)
    }
}
