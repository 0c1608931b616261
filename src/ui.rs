//! Draws a [`View`] with ratatui.
//!
//! The screen is split into header, body, optional nav bar and footer. The
//! body shows the view's content on top and its buttons underneath; the
//! accessibility overlay, help overlay and toast are drawn last.

use crate::catalog::LeaderboardEntry;
use crate::components::{Footer, Header, HelpOverlay, NavBar, Popup, HEADER_HEIGHT};
use crate::keymap::Keymap;
use crate::screens::fallback::FALLBACK_MESSAGE;
use crate::screens::intro::LOGO;
use crate::screens::{Body, Item, Overlay, View};
use crate::state::{AccessibilitySettings, AppState, ScreenId, MAX_HEARTS};
use crate::styles::theme;
use crate::utils::{create_screen_layout, format_time};
use crate::widgets::{CalendarWidget, CanvasWidget, CardGrid, Menu, MenuState, ToastManager};
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Cell, Paragraph, Row, Table, Wrap};

/// Everything besides the view needed to draw a frame.
pub struct RenderContext<'a> {
    pub view: &'a View,
    pub focus: usize,
    pub state: &'a AppState,
    pub keymap: &'a Keymap,
    pub toasts: &'a ToastManager,
    pub show_help: bool,
    pub config_path: &'a str,
}

/// Width of the text bar drawn for meters.
const METER_WIDTH: usize = 20;

/// Draw one frame.
pub fn render(frame: &mut Frame, ctx: &RenderContext<'_>) {
    let t = theme();
    let area = frame.area();
    let view = ctx.view;
    frame.render_widget(Block::default().style(t.background_style()), area);

    let [header, body, nav, footer] = create_screen_layout(area, HEADER_HEIGHT, view.nav_bar);

    if view.screen != ScreenId::Splash {
        let _ = Header::render(
            frame,
            header,
            &view.title,
            view.subtitle.as_deref(),
            &status_line(ctx.state),
        );
    }

    let overlay_open = view.overlay.is_some();
    let (content, buttons) = split_body(body, view, overlay_open);
    render_body(frame, content, &view.body, ctx.state.accessibility);

    if !overlay_open && buttons.height > 0 {
        let mut state = MenuState::with_selected(ctx.focus);
        frame.render_stateful_widget(Menu::from_actions(&view.actions), buttons, &mut state);
    }

    if view.nav_bar {
        NavBar::render(frame, nav, view.screen, ctx.keymap);
    }

    let hints = footer_text(view, ctx.keymap);
    let _ = Footer::render(frame, footer, &hints);

    if let Some(Overlay::Accessibility(settings)) = view.overlay {
        render_accessibility(frame, area, view, ctx.focus, &settings);
    }

    if ctx.show_help {
        HelpOverlay::render(frame, area, ctx.keymap, ctx.config_path);
    }

    ctx.toasts.render(frame, area);
}

/// Hearts, points and streak shown in every header.
pub fn status_line(state: &AppState) -> String {
    let mut status = format!(
        "♥ {}/{}   ★ {} pts   {} day streak",
        state.hearts, MAX_HEARTS, state.points, state.streak
    );
    if state.accessibility.voice_guide {
        status.push_str("   ♪ voice guide");
    }
    status
}

fn footer_text(view: &View, keymap: &Keymap) -> String {
    if view.overlay.is_none() && matches!(view.body, Body::Canvas { .. }) {
        keymap.footer_canvas()
    } else {
        keymap.footer_navigation()
    }
}

/// Split the body into content (top) and buttons (bottom).
fn split_body(body: Rect, view: &View, overlay_open: bool) -> (Rect, Rect) {
    if overlay_open || view.actions.is_empty() {
        return (body, Rect::new(body.x, body.y + body.height, body.width, 0));
    }
    let menu = Menu::from_actions(&view.actions);
    let wanted = menu.preferred_height();
    let minimum = (view.actions.len() as u16).min(body.height);
    let height = wanted.min(body.height / 2).max(minimum);
    let chunks = Layout::vertical([Constraint::Min(0), Constraint::Length(height)]).split(body);
    let buttons = Rect {
        x: chunks[1].x + 2,
        width: chunks[1].width.saturating_sub(4),
        ..chunks[1]
    };
    (chunks[0], buttons)
}

/// Blank lines between body items. Larger text settings get more air.
pub fn item_spacing(settings: AccessibilitySettings) -> usize {
    match settings.font_size {
        0..=18 => 0,
        _ => 1,
    }
}

fn render_body(frame: &mut Frame, area: Rect, body: &Body, settings: AccessibilitySettings) {
    let t = theme();
    let inner = Block::default()
        .padding(ratatui::widgets::Padding::new(2, 2, 1, 0))
        .inner(area);

    match body {
        Body::Splash { brand, tagline } => {
            let logo: Vec<&str> = LOGO.lines().collect();
            let show_logo = area.height as usize >= logo.len() + 6;
            let height = if show_logo { logo.len() + 4 } else { 3 };
            let top = (area.height as usize).saturating_sub(height) / 2;
            let mut lines = vec![Line::from(""); top];
            if show_logo {
                lines.extend(logo.iter().map(|l| Line::styled(*l, t.emphasis_style())));
                lines.push(Line::from(""));
            }
            lines.push(Line::styled(*brand, t.title_style().add_modifier(Modifier::BOLD)));
            lines.push(Line::from(""));
            lines.push(Line::styled(*tagline, t.muted_style()));
            frame.render_widget(Paragraph::new(lines).alignment(Alignment::Center), area);
        }

        Body::Items(items) => {
            frame.render_widget(items_paragraph(items, settings), inner);
        }

        Body::Onboarding {
            step,
            pages,
            heading,
            text,
        } => {
            let dots: Vec<Span> = (0..*pages)
                .map(|i| {
                    if i == *step {
                        Span::styled("● ", t.emphasis_style())
                    } else {
                        Span::styled("○ ", t.muted_style())
                    }
                })
                .collect();
            let lines = vec![
                Line::from(""),
                Line::styled(*heading, t.title_style()),
                Line::from(""),
                Line::styled(*text, t.text_style()),
                Line::from(""),
                Line::from(dots),
            ];
            frame.render_widget(
                Paragraph::new(lines)
                    .alignment(Alignment::Center)
                    .wrap(Wrap { trim: true }),
                inner,
            );
        }

        Body::Canvas { topic, canvas } => {
            frame.render_widget(CanvasWidget::new(canvas, topic), area);
        }

        Body::MemoryGrid {
            time_left,
            score,
            cards,
        } => {
            let chunks = Layout::vertical([Constraint::Length(2), Constraint::Min(0)]).split(inner);
            let stats = Line::from(vec![
                Span::styled("Time ", t.muted_style()),
                Span::styled(time_left.as_str(), t.emphasis_style()),
                Span::styled("   Score ", t.muted_style()),
                Span::styled(score.to_string(), t.emphasis_style()),
            ]);
            frame.render_widget(Paragraph::new(stats).alignment(Alignment::Center), chunks[0]);
            frame.render_widget(CardGrid::new(cards), chunks[1]);
        }

        Body::Leaderboard { entries, items } => {
            let item_height = (items.len() * (1 + item_spacing(settings))) as u16 + 1;
            let chunks = Layout::vertical([Constraint::Length(item_height), Constraint::Min(0)])
                .split(inner);
            frame.render_widget(items_paragraph(items, settings), chunks[0]);
            frame.render_widget(leaderboard_table(entries), chunks[1]);
        }

        Body::Calendar { grid, items } => {
            let calendar = CalendarWidget::new(grid);
            let chunks = Layout::vertical([
                Constraint::Length(calendar.height() + 1),
                Constraint::Min(0),
            ])
            .split(inner);
            frame.render_widget(calendar, chunks[0]);
            frame.render_widget(items_paragraph(items, settings), chunks[1]);
        }

        Body::Fallback { screen } => {
            let lines = vec![
                Line::from(""),
                Line::styled(FALLBACK_MESSAGE, t.warning_style().add_modifier(Modifier::BOLD)),
                Line::from(""),
                Line::styled(format!("({})", screen), t.muted_style()),
            ];
            frame.render_widget(Paragraph::new(lines).alignment(Alignment::Center), inner);
        }
    }
}

fn items_paragraph(items: &[Item], settings: AccessibilitySettings) -> Paragraph<'static> {
    let spacing = item_spacing(settings);
    let mut lines = Vec::new();
    for item in items {
        lines.push(item_line(item));
        if spacing > 0 && !matches!(item, Item::Gap) {
            lines.extend((0..spacing).map(|_| Line::from("")));
        }
    }
    Paragraph::new(lines).wrap(Wrap { trim: false })
}

/// One body item as a styled line.
pub fn item_line(item: &Item) -> Line<'static> {
    let t = theme();
    match item {
        Item::Heading(text) => Line::styled(text.clone(), t.title_style()),
        Item::Text(text) => Line::styled(text.clone(), t.text_style()),
        Item::Note(text) => Line::styled(text.clone(), t.muted_style()),
        Item::Bullet(text) => Line::from(vec![
            Span::styled("  • ", t.muted_style()),
            Span::styled(text.clone(), t.text_style()),
        ]),
        Item::Stat { label, value } => Line::from(vec![
            Span::styled(format!("{}: ", label), t.muted_style()),
            Span::styled(value.clone(), t.emphasis_style()),
        ]),
        Item::Meter { label, percent } => Line::from(vec![
            Span::styled(format!("{:<22}", label), t.text_style()),
            Span::styled(meter_bar(*percent), t.success_style()),
            Span::styled(format!(" {:>3}%", percent), t.emphasis_style()),
        ]),
        Item::Status {
            label,
            detail,
            done,
        } => {
            let (mark, style) = if *done {
                ("✓", t.success_style())
            } else {
                ("○", t.muted_style())
            };
            Line::from(vec![
                Span::styled(format!("{} ", mark), style),
                Span::styled(label.clone(), t.text_style()),
                Span::styled(format!("  {}", detail), t.muted_style()),
            ])
        }
        Item::Badge(text) => Line::styled(
            format!("★ {}", text),
            t.warning_style().add_modifier(Modifier::BOLD),
        ),
        Item::Gap => Line::from(""),
    }
}

/// Text progress bar, e.g. `█████░░░░░` for 50%.
pub fn meter_bar(percent: u8) -> String {
    let filled = (usize::from(percent.min(100)) * METER_WIDTH + 50) / 100;
    format!("{}{}", "█".repeat(filled), "░".repeat(METER_WIDTH - filled))
}

fn leaderboard_table(entries: &[LeaderboardEntry]) -> Table<'static> {
    let t = theme();
    let rows = entries.iter().map(|e| {
        let time = e.time.map(format_time).unwrap_or_else(|| "-".to_string());
        let row = Row::new(vec![
            Cell::from(format!("#{}", e.rank)),
            Cell::from(e.name.clone()),
            Cell::from(e.score.to_string()),
            Cell::from(time),
        ]);
        if e.is_me {
            row.style(t.highlight_style())
        } else {
            row.style(t.text_style())
        }
    });
    Table::new(
        rows,
        [
            Constraint::Length(4),
            Constraint::Min(14),
            Constraint::Length(7),
            Constraint::Length(6),
        ],
    )
    .header(Row::new(vec!["Rank", "Name", "Score", "Time"]).style(t.muted_style()))
    .block(Block::default().borders(Borders::TOP).border_style(t.border_style()))
}

fn render_accessibility(
    frame: &mut Frame,
    area: Rect,
    view: &View,
    focus: usize,
    settings: &AccessibilitySettings,
) {
    let t = theme();
    let content = Popup::new("Accessibility settings")
        .size(60, 70)
        .render(frame, area);

    let chunks = Layout::vertical([Constraint::Length(2), Constraint::Min(0)]).split(content);
    let summary = Line::from(vec![
        Span::styled("Text size ", t.muted_style()),
        Span::styled(settings.font_size.to_string(), t.emphasis_style()),
        Span::styled("  (16-24)", t.muted_style()),
    ]);
    frame.render_widget(Paragraph::new(summary).alignment(Alignment::Center), chunks[0]);

    let menu_area = Rect {
        x: chunks[1].x + 2,
        width: chunks[1].width.saturating_sub(4),
        ..chunks[1]
    };
    let mut state = MenuState::with_selected(focus);
    frame.render_stateful_widget(Menu::from_actions(&view.actions), menu_area, &mut state);
}
