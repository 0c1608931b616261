//! Month calendar for the drawing history.

use crate::styles::theme;
use crate::utils::calendar::{MonthGrid, WEEKDAY_LABELS};
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Paragraph, Widget};

/// Width of one day column.
const CELL: usize = 5;

pub struct CalendarWidget<'a> {
    grid: &'a MonthGrid,
}

impl<'a> CalendarWidget<'a> {
    pub fn new(grid: &'a MonthGrid) -> Self {
        Self { grid }
    }

    /// Header row plus one row per week.
    pub fn height(&self) -> u16 {
        self.grid.weeks().len() as u16 + 1
    }

    pub fn lines(&self) -> Vec<Line<'static>> {
        let t = theme();
        let mut lines = vec![Line::from(
            WEEKDAY_LABELS
                .iter()
                .map(|d| Span::styled(format!("{:^width$}", d, width = CELL), t.muted_style()))
                .collect::<Vec<_>>(),
        )];

        for week in self.grid.weeks() {
            let spans = week
                .iter()
                .map(|cell| match cell {
                    None => Span::raw(" ".repeat(CELL)),
                    Some(day) => {
                        let mark = if day.completed { "✓" } else { " " };
                        let text = format!("{:>2}{} ", day.day, mark);
                        let style = if day.today {
                            t.highlight_style()
                        } else if day.completed {
                            t.success_style()
                        } else {
                            t.text_style()
                        };
                        Span::styled(format!("{:^width$}", text, width = CELL), style)
                    }
                })
                .collect::<Vec<_>>();
            lines.push(Line::from(spans));
        }
        lines
    }
}

impl Widget for CalendarWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let width = (CELL * 7) as u16;
        let x = area.x + area.width.saturating_sub(width) / 2;
        let target = Rect::new(x, area.y, width.min(area.width), area.height);
        Paragraph::new(self.lines())
            .style(theme().text_style())
            .render(target, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn test_calendar_layout() {
        let today = NaiveDate::from_ymd_opt(2024, 12, 15).unwrap();
        let grid = MonthGrid::for_date(today);
        let widget = CalendarWidget::new(&grid);
        // December 2024 starts on a Sunday: five weeks.
        assert_eq!(widget.height(), 6);

        let lines = widget.lines();
        let header: String = lines[0].spans.iter().map(|s| s.content.as_ref()).collect();
        assert!(header.starts_with(" Su "));
        let first_week: String = lines[1].spans.iter().map(|s| s.content.as_ref()).collect();
        assert!(first_week.contains(" 1✓"));
        let third_week: String = lines[3].spans.iter().map(|s| s.content.as_ref()).collect();
        assert!(third_week.contains("15✓"));
        assert!(!third_week.contains("16✓"));
    }
}
