use crate::styles::theme;
use anyhow::Result;
use ratatui::prelude::*;
use ratatui::widgets::{Block, BorderType, Borders, Paragraph};

/// Common footer component
pub struct Footer;

impl Footer {
    /// Render a footer of `keys: label` hints separated by ` | `
    ///
    /// # Returns
    /// The height used (2 lines: 1 for border, 1 for text)
    pub fn render(frame: &mut Frame, area: Rect, text: &str) -> Result<u16> {
        let footer_block = Block::default()
            .borders(Borders::TOP)
            .border_style(theme().border_style())
            .border_type(BorderType::Rounded);

        let footer_inner = footer_block.inner(area);
        let footer = Paragraph::new(Self::hint_line(text)).alignment(Alignment::Center);

        frame.render_widget(footer_block, area);
        frame.render_widget(footer, footer_inner);

        Ok(2)
    }

    /// Color the key part of each hint
    pub fn hint_line(text: &str) -> Line<'_> {
        let t = theme();
        let mut spans = Vec::new();

        for (i, part) in text.split(" | ").enumerate() {
            if i > 0 {
                spans.push(Span::styled(" | ", t.muted_style()));
            }
            if let Some((keys, label)) = part.split_once(": ") {
                spans.push(Span::styled(keys, t.emphasis_style().add_modifier(Modifier::BOLD)));
                spans.push(Span::styled(format!(": {}", label), t.text_style()));
            } else {
                spans.push(Span::styled(part, t.text_style()));
            }
        }
        Line::from(spans)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hint_line_splits_keys_and_labels() {
        let line = Footer::hint_line("q: Quit | ?: Help");
        let texts: Vec<&str> = line.spans.iter().map(|s| s.content.as_ref()).collect();
        assert_eq!(texts, vec!["q", ": Quit", " | ", "?", ": Help"]);
    }
}
