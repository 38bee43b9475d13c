//! Day-indexed calendar for one settlement year

use chrono::NaiveDate;

use core_kernel::{DateSpan, TemporalError};

/// A calendar year as a dense day index.
///
/// Day 0 is Jan 1; the number of days (365 or 366) comes from real date
/// arithmetic, never from a hardcoded year length.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct YearCalendar {
    year: i32,
    start: NaiveDate,
    days: usize,
}

impl YearCalendar {
    pub fn new(year: i32) -> Result<Self, TemporalError> {
        let start =
            NaiveDate::from_ymd_opt(year, 1, 1).ok_or(TemporalError::YearOutOfRange(year))?;
        let end =
            NaiveDate::from_ymd_opt(year, 12, 31).ok_or(TemporalError::YearOutOfRange(year))?;
        let days = ((end - start).num_days() + 1) as usize;
        Ok(Self { year, start, days })
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    /// Jan 1 of the year.
    pub fn start(&self) -> NaiveDate {
        self.start
    }

    /// Number of days in the year.
    pub fn days(&self) -> usize {
        self.days
    }

    /// Signed day index of a date relative to Jan 1. Negative before the
    /// year, `>= days()` after it.
    pub fn day_index(&self, date: NaiveDate) -> i64 {
        (date - self.start).num_days()
    }

    /// Intersects a span with the year, as inclusive day indices.
    ///
    /// Returns None when the clamped interval is empty.
    pub fn clamp_span(&self, span: &DateSpan) -> Option<(usize, usize)> {
        let start = self.day_index(span.start).max(0);
        let end = self.day_index(span.effective_end()).min(self.days as i64 - 1);
        (start <= end).then_some((start as usize, end as usize))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    #[test]
    fn test_year_lengths() {
        assert_eq!(YearCalendar::new(2023).unwrap().days(), 365);
        assert_eq!(YearCalendar::new(2024).unwrap().days(), 366);
        assert_eq!(YearCalendar::new(2000).unwrap().days(), 366);
        assert_eq!(YearCalendar::new(1900).unwrap().days(), 365);
    }

    #[test]
    fn test_day_index() {
        let cal = YearCalendar::new(2023).unwrap();
        assert_eq!(cal.day_index(d(2023, 1, 1)), 0);
        assert_eq!(cal.day_index(d(2023, 12, 31)), 364);
        assert_eq!(cal.day_index(d(2022, 12, 31)), -1);
        assert_eq!(cal.day_index(d(2024, 1, 1)), 365);
    }

    #[test]
    fn test_clamp_span() {
        let cal = YearCalendar::new(2023).unwrap();

        let mid_year = DateSpan::bounded(d(2023, 3, 1), d(2023, 5, 31)).unwrap();
        assert_eq!(cal.clamp_span(&mid_year), Some((59, 150)));

        let straddling = DateSpan::bounded(d(2022, 7, 1), d(2023, 6, 30)).unwrap();
        assert_eq!(cal.clamp_span(&straddling), Some((0, 180)));

        let open_ended = DateSpan::from(d(2023, 12, 1));
        assert_eq!(cal.clamp_span(&open_ended), Some((334, 364)));

        let before = DateSpan::bounded(d(2021, 1, 1), d(2022, 12, 31)).unwrap();
        assert_eq!(cal.clamp_span(&before), None);

        let after = DateSpan::from(d(2024, 1, 1));
        assert_eq!(cal.clamp_span(&after), None);
    }
}
