//! Button list widget.
//!
//! Renders a screen's actions as a vertical list. Each button is drawn as a
//! three-line card when there is room, and collapses to one line per button
//! otherwise. The focused button gets a left bar and highlight; disabled
//! buttons stay visible but muted.

use crate::screens::ViewAction;
use crate::styles::{theme, FOCUS_SYMBOL};
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{StatefulWidget, Widget};

/// One rendered button.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuItem {
    pub text: String,
    pub enabled: bool,
    /// Left/right change a value while focused
    pub adjustable: bool,
}

impl MenuItem {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            enabled: true,
            adjustable: false,
        }
    }

    pub fn enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }

    pub fn adjustable(mut self, adjustable: bool) -> Self {
        self.adjustable = adjustable;
        self
    }
}

impl From<&ViewAction> for MenuItem {
    fn from(action: &ViewAction) -> Self {
        MenuItem::new(action.label.clone())
            .enabled(action.enabled)
            .adjustable(action.adjust.is_some())
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MenuState {
    selected: Option<usize>,
}

impl MenuState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_selected(selected: usize) -> Self {
        Self {
            selected: Some(selected),
        }
    }

    pub fn selected(&self) -> Option<usize> {
        self.selected
    }

    pub fn select(&mut self, index: Option<usize>) {
        self.selected = index;
    }
}

pub struct Menu {
    items: Vec<MenuItem>,
}

impl Menu {
    pub fn new(items: Vec<MenuItem>) -> Self {
        Self { items }
    }

    pub fn from_actions(actions: &[ViewAction]) -> Self {
        Self::new(actions.iter().map(MenuItem::from).collect())
    }

    /// Rows per button for the given height: cards if they all fit.
    pub fn item_height(&self, height: u16) -> u16 {
        if self.items.len() as u16 * 3 <= height {
            3
        } else {
            1
        }
    }

    /// Height needed to show every button as a card.
    pub fn preferred_height(&self) -> u16 {
        self.items.len() as u16 * 3
    }

    /// First item to draw so the selection stays on screen.
    fn scroll_offset(&self, visible: usize, selected: Option<usize>) -> usize {
        match selected {
            Some(s) if visible > 0 && s >= visible => s + 1 - visible,
            _ => 0,
        }
    }

    fn content_line(item: &MenuItem, is_selected: bool, width: u16) -> Line<'_> {
        let t = theme();
        let style = if !item.enabled {
            t.disabled_style()
        } else if is_selected {
            t.highlight_style()
        } else {
            t.text_style()
        };
        let fill = if is_selected { t.highlight_style() } else { t.background_style() };

        let mut spans = if is_selected {
            vec![
                Span::styled("▌", t.border_focused_style()),
                Span::styled(FOCUS_SYMBOL, style),
            ]
        } else {
            vec![Span::styled("   ", fill)]
        };
        if item.adjustable {
            spans.push(Span::styled("◀ ", style));
            spans.push(Span::styled(item.text.as_str(), style));
            spans.push(Span::styled(" ▶", style));
        } else {
            spans.push(Span::styled(item.text.as_str(), style));
        }

        let used = Line::from(spans.clone()).width();
        if used < width as usize {
            spans.push(Span::styled(" ".repeat(width as usize - used), fill));
        }
        Line::from(spans)
    }
}

impl StatefulWidget for Menu {
    type State = MenuState;

    fn render(self, area: Rect, buf: &mut Buffer, state: &mut Self::State) {
        if area.height == 0 || area.width == 0 {
            return;
        }
        let t = theme();
        let item_height = self.item_height(area.height);
        let visible = (area.height / item_height) as usize;
        let offset = self.scroll_offset(visible, state.selected);

        for (row, (i, item)) in self.items.iter().enumerate().skip(offset).take(visible).enumerate() {
            let y = area.y + row as u16 * item_height;
            let is_selected = state.selected == Some(i);
            let content = Self::content_line(item, is_selected, area.width);

            if item_height == 1 {
                content.render(Rect::new(area.x, y, area.width, 1), buf);
                continue;
            }

            let pad_style: Style = if is_selected { t.highlight_style() } else { t.background_style() };
            let border = if is_selected { "▌" } else { " " };
            let padding = Line::from(vec![
                Span::styled(border, t.border_focused_style()),
                Span::styled(" ".repeat(area.width.saturating_sub(1) as usize), pad_style),
            ]);
            padding.clone().render(Rect::new(area.x, y, area.width, 1), buf);
            content
                .patch_style(Style::default().add_modifier(if is_selected {
                    Modifier::BOLD
                } else {
                    Modifier::empty()
                }))
                .render(Rect::new(area.x, y + 1, area.width, 1), buf);
            padding.render(Rect::new(area.x, y + 2, area.width, 1), buf);
        }
    }
}
