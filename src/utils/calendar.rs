//! Month grid for the drawing calendar.

use chrono::{Datelike, NaiveDate};

/// One day cell of the month grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DayCell {
    pub day: u32,
    pub completed: bool,
    pub today: bool,
}

/// A calendar month laid out Sunday-first.
///
/// Every day up to and including today counts as a completed drawing day.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonthGrid {
    pub year: i32,
    pub month: u32,
    /// Empty cells before the 1st (0 = month starts on Sunday).
    pub leading_blanks: u32,
    pub days: Vec<DayCell>,
}

pub const WEEKDAY_LABELS: [&str; 7] = ["Su", "Mo", "Tu", "We", "Th", "Fr", "Sa"];

impl MonthGrid {
    pub fn for_date(today: NaiveDate) -> Self {
        let year = today.year();
        let month = today.month();
        let first = today.with_day(1).unwrap_or(today);
        let leading_blanks = first.weekday().num_days_from_sunday();
        let days = (1..=days_in_month(year, month))
            .map(|day| DayCell {
                day,
                completed: day <= today.day(),
                today: day == today.day(),
            })
            .collect();
        Self {
            year,
            month,
            leading_blanks,
            days,
        }
    }

    pub fn completed_days(&self) -> u32 {
        self.days.iter().filter(|d| d.completed).count() as u32
    }

    /// Completed share of the month as a rounded percentage.
    pub fn completion_rate(&self) -> u32 {
        if self.days.is_empty() {
            return 0;
        }
        (f64::from(self.completed_days()) * 100.0 / self.days.len() as f64).round() as u32
    }

    /// Rows of seven optional cells, padded at both ends.
    pub fn weeks(&self) -> Vec<[Option<DayCell>; 7]> {
        let mut cells: Vec<Option<DayCell>> = vec![None; self.leading_blanks as usize];
        cells.extend(self.days.iter().copied().map(Some));
        while cells.len() % 7 != 0 {
            cells.push(None);
        }
        cells
            .chunks(7)
            .map(|week| {
                let mut row = [None; 7];
                row.copy_from_slice(week);
                row
            })
            .collect()
    }

    /// e.g. "December 2024".
    pub fn title(&self) -> String {
        NaiveDate::from_ymd_opt(self.year, self.month, 1)
            .map(|d| d.format("%B %Y").to_string())
            .unwrap_or_default()
    }
}

fn days_in_month(year: i32, month: u32) -> u32 {
    let (next_year, next_month) = if month == 12 {
        (year + 1, 1)
    } else {
        (year, month + 1)
    };
    NaiveDate::from_ymd_opt(next_year, next_month, 1)
        .and_then(|d| d.pred_opt())
        .map(|d| d.day())
        .unwrap_or(30)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_december_2024() {
        let today = NaiveDate::from_ymd_opt(2024, 12, 15).unwrap();
        let grid = MonthGrid::for_date(today);
        assert_eq!(grid.title(), "December 2024");
        assert_eq!(grid.days.len(), 31);
        // 1 December 2024 was a Sunday.
        assert_eq!(grid.leading_blanks, 0);
        assert_eq!(grid.completed_days(), 15);
        assert_eq!(grid.completion_rate(), 48);
        assert!(grid.days[14].today);
        assert!(!grid.days[15].completed);
        assert_eq!(grid.weeks().len(), 5);
    }

    #[test]
    fn test_leap_february() {
        let grid = MonthGrid::for_date(NaiveDate::from_ymd_opt(2024, 2, 1).unwrap());
        assert_eq!(grid.days.len(), 29);
        // 1 February 2024 was a Thursday.
        assert_eq!(grid.leading_blanks, 4);
        let weeks = grid.weeks();
        assert!(weeks[0][3].is_none());
        assert_eq!(weeks[0][4].map(|d| d.day), Some(1));
    }
}
