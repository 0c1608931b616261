//! Bottom navigation bar shown on the five top-level screens.

use crate::keymap::{Action, Keymap};
use crate::screens::NAV_ITEMS;
use crate::state::ScreenId;
use crate::styles::theme;
use ratatui::prelude::*;
use ratatui::widgets::{Block, BorderType, Borders, Paragraph};

/// Keymap action that jumps to each nav entry, in [`NAV_ITEMS`] order.
pub const NAV_ACTIONS: [Action; 5] = [
    Action::NavHome,
    Action::NavDrawing,
    Action::NavGames,
    Action::NavReport,
    Action::NavSettings,
];

/// Screen a nav action leads to.
pub fn nav_target(action: Action) -> Option<ScreenId> {
    NAV_ACTIONS
        .iter()
        .position(|a| *a == action)
        .map(|i| NAV_ITEMS[i].0)
}

pub struct NavBar;

impl NavBar {
    /// Tab the current screen belongs to. Sub-screens light up their section.
    pub fn section(current: ScreenId) -> Option<usize> {
        let section = match current {
            ScreenId::DrawingCalendar => ScreenId::DrawingMenu,
            ScreenId::GameDetail => ScreenId::GameMenu,
            other => other,
        };
        NAV_ITEMS.iter().position(|(id, _)| *id == section)
    }

    pub fn line(current: ScreenId, keymap: &Keymap) -> Line<'static> {
        let t = theme();
        let active = Self::section(current);
        let mut spans = Vec::new();
        for (i, ((_, label), action)) in NAV_ITEMS.iter().zip(NAV_ACTIONS).enumerate() {
            if i > 0 {
                spans.push(Span::styled("  ", t.muted_style()));
            }
            let key = keymap.get_key_display_for_action(action);
            let style = if active == Some(i) {
                t.highlight_style()
            } else {
                t.text_style()
            };
            spans.push(Span::styled(format!(" {} {} ", key, label), style));
        }
        Line::from(spans)
    }

    pub fn render(frame: &mut Frame, area: Rect, current: ScreenId, keymap: &Keymap) {
        if area.height == 0 {
            return;
        }
        let block = Block::default()
            .borders(Borders::TOP)
            .border_type(BorderType::Rounded)
            .border_style(theme().border_style());
        let inner = block.inner(area);
        frame.render_widget(block, area);
        frame.render_widget(
            Paragraph::new(Self::line(current, keymap)).alignment(Alignment::Center),
            inner,
        );
    }
}
