//! Help Overlay Component
//!
//! Displays current keybindings when user presses '?' key.

use crate::components::popup::Popup;
use crate::keymap::Keymap;
use crate::styles::theme;
use ratatui::{
    layout::{Alignment, Rect},
    text::{Line, Span},
    widgets::{Paragraph, Wrap},
    Frame,
};

const CATEGORY_ORDER: [&str; 4] = ["Movement", "Selection", "Navigation", "Global"];

/// Renders the help overlay showing current keybindings
pub struct HelpOverlay;

impl HelpOverlay {
    /// Binding list grouped by category, overrides already applied
    pub fn lines(keymap: &Keymap) -> Vec<Line<'static>> {
        let t = theme();
        let mut bindings = keymap.all_bindings();
        // Stable: keeps preset order inside a category
        bindings.sort_by_key(|b| {
            CATEGORY_ORDER
                .iter()
                .position(|c| *c == b.action.category())
                .unwrap_or(CATEGORY_ORDER.len())
        });

        let mut lines: Vec<Line> = Vec::new();
        let mut current_category = "";
        for binding in &bindings {
            let category = binding.action.category();
            if category != current_category {
                if !current_category.is_empty() {
                    lines.push(Line::from(""));
                }
                lines.push(Line::from(Span::styled(
                    format!("  {} ", category),
                    t.title_style(),
                )));
                current_category = category;
            }

            lines.push(Line::from(vec![
                Span::styled(format!("    {:12}", binding.display()), t.emphasis_style()),
                Span::styled(binding.action.description(), t.text_style()),
            ]));
        }
        lines
    }

    /// Render the help overlay in the center of the screen
    pub fn render(frame: &mut Frame, area: Rect, keymap: &Keymap, config_path: &str) {
        let footer = format!("Edit keybindings in: {}", config_path);
        let title = format!("Keyboard Shortcuts - {} Preset", keymap.preset.name());
        let content = Popup::new(&title)
            .size(80, 90)
            .footer(&footer)
            .render(frame, area);

        let bindings = Paragraph::new(Self::lines(keymap))
            .wrap(Wrap { trim: false })
            .alignment(Alignment::Left);
        frame.render_widget(bindings, content);
    }
}
