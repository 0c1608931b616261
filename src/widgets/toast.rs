//! Toast notification widget.
//!
//! Short-lived feedback for purchases, heart regeneration and saved
//! settings. A toast sits in the bottom-right corner above the footer and
//! never takes focus away from the screen's buttons.

use crate::styles::theme;
use ratatui::buffer::Buffer;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Widget, Wrap};
use std::time::{Duration, Instant};

/// How long a toast stays up unless told otherwise.
pub const DEFAULT_TOAST_DURATION: Duration = Duration::from_secs(3);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastVariant {
    Success,
    Info,
    Warning,
    Error,
}

impl ToastVariant {
    pub fn icon(&self) -> &'static str {
        match self {
            ToastVariant::Success => "\u{2714}", // ✔
            ToastVariant::Info => "\u{2665}",    // ♥
            ToastVariant::Warning => "\u{26A0}", // ⚠
            ToastVariant::Error => "\u{2718}",   // ✘
        }
    }

    /// Border color for this variant
    pub fn color(&self) -> Color {
        let t = theme();
        match self {
            ToastVariant::Success => t.success,
            ToastVariant::Info => t.primary,
            ToastVariant::Warning => t.warning,
            ToastVariant::Error => t.error,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Toast {
    pub message: String,
    pub variant: ToastVariant,
    pub created_at: Instant,
    pub duration: Duration,
}

impl Toast {
    pub fn new(message: impl Into<String>, variant: ToastVariant, now: Instant) -> Self {
        Self {
            message: message.into(),
            variant,
            created_at: now,
            duration: DEFAULT_TOAST_DURATION,
        }
    }

    pub fn with_duration(mut self, duration: Duration) -> Self {
        self.duration = duration;
        self
    }

    pub fn is_expired(&self, now: Instant) -> bool {
        now.saturating_duration_since(self.created_at) >= self.duration
    }
}

/// Renders one toast in the bottom-right corner of the given area.
pub struct ToastWidget<'a> {
    toast: &'a Toast,
}

impl<'a> ToastWidget<'a> {
    pub fn new(toast: &'a Toast) -> Self {
        Self { toast }
    }

    fn calculate_area(&self, area: Rect) -> Rect {
        let toast_width = 44u16.min(area.width.saturating_sub(4));
        let toast_height = 3u16;

        let x = area.x + area.width.saturating_sub(toast_width + 2);
        let y = area.y + area.height.saturating_sub(toast_height + 3); // Above footer

        Rect::new(x, y, toast_width, toast_height)
    }
}

impl Widget for ToastWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let toast_area = self.calculate_area(area);
        if toast_area.width < 6 || toast_area.height < 3 {
            return;
        }
        let t = theme();

        Widget::render(Clear, toast_area, buf);

        let message = format!(" {} {} ", self.toast.variant.icon(), self.toast.message);
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(self.toast.variant.color()))
            .style(t.background_style());

        let paragraph = Paragraph::new(message)
            .block(block)
            .style(t.text_style().add_modifier(Modifier::BOLD))
            .alignment(Alignment::Left)
            .wrap(Wrap { trim: true });

        Widget::render(paragraph, toast_area, buf);
    }
}

/// Holds at most one toast; a new one replaces the old.
#[derive(Debug, Default)]
pub struct ToastManager {
    current: Option<Toast>,
}

impl ToastManager {
    pub fn new() -> Self {
        Self { current: None }
    }

    pub fn push(&mut self, toast: Toast) {
        self.current = Some(toast);
    }

    pub fn success(&mut self, message: impl Into<String>, now: Instant) {
        self.push(Toast::new(message, ToastVariant::Success, now));
    }

    pub fn info(&mut self, message: impl Into<String>, now: Instant) {
        self.push(Toast::new(message, ToastVariant::Info, now));
    }

    pub fn warning(&mut self, message: impl Into<String>, now: Instant) {
        self.push(Toast::new(message, ToastVariant::Warning, now));
    }

    pub fn error(&mut self, message: impl Into<String>, now: Instant) {
        self.push(Toast::new(message, ToastVariant::Error, now));
    }

    /// Drop an expired toast and report whether one is still showing
    pub fn tick(&mut self, now: Instant) -> bool {
        if self.current.as_ref().is_some_and(|t| t.is_expired(now)) {
            self.current = None;
        }
        self.current.is_some()
    }

    pub fn current(&self) -> Option<&Toast> {
        self.current.as_ref()
    }

    pub fn has_toast(&self) -> bool {
        self.current.is_some()
    }

    pub fn render(&self, frame: &mut ratatui::Frame, area: Rect) {
        if let Some(toast) = self.current() {
            frame.render_widget(ToastWidget::new(toast), area);
        }
    }

    pub fn clear(&mut self) {
        self.current = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toast_expires_after_duration() {
        let t0 = Instant::now();
        let toast = Toast::new("Purchased", ToastVariant::Success, t0)
            .with_duration(Duration::from_secs(2));
        assert!(!toast.is_expired(t0 + Duration::from_millis(1999)));
        assert!(toast.is_expired(t0 + Duration::from_secs(2)));
    }

    #[test]
    fn test_manager_replaces_and_expires() {
        let t0 = Instant::now();
        let mut toasts = ToastManager::new();
        toasts.info("first", t0);
        toasts.error("second", t0);
        assert_eq!(toasts.current().map(|t| t.message.as_str()), Some("second"));
        assert_eq!(toasts.current().map(|t| t.variant), Some(ToastVariant::Error));

        assert!(toasts.tick(t0 + Duration::from_secs(1)));
        assert!(!toasts.tick(t0 + DEFAULT_TOAST_DURATION));
        assert!(!toasts.has_toast());
    }

    #[test]
    fn test_tiny_area_is_skipped() {
        let toast = Toast::new("hi", ToastVariant::Info, Instant::now());
        let area = Rect::new(0, 0, 4, 2);
        let mut buf = Buffer::empty(area);
        ToastWidget::new(&toast).render(area, &mut buf);
        assert_eq!(buf, Buffer::empty(area));
    }
}
