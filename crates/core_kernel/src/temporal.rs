//! Date spans for tenancies, occupancy entries, and billing periods
//!
//! All spans are inclusive on both ends and carry day precision. Open-ended
//! spans (a tenancy without an end date) are represented with `end: None` and
//! treated as running to a far-future sentinel date.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Sentinel date standing in for "no end date".
pub fn far_future() -> NaiveDate {
    NaiveDate::from_ymd_opt(2099, 12, 31).unwrap()
}

/// Errors related to temporal operations
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TemporalError {
    #[error("Invalid span: start {start} must not be after end {end}")]
    InvalidSpan { start: NaiveDate, end: NaiveDate },

    #[error("Date out of representable range: year {0}")]
    YearOutOfRange(i32),
}

/// An inclusive date range, possibly open-ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateSpan {
    /// First day of the span (inclusive)
    pub start: NaiveDate,
    /// Last day of the span (inclusive), None means open-ended
    pub end: Option<NaiveDate>,
}

impl DateSpan {
    /// Creates a span, validating that a bounded span does not end before it starts.
    pub fn new(start: NaiveDate, end: Option<NaiveDate>) -> Result<Self, TemporalError> {
        if let Some(end) = end {
            if start > end {
                return Err(TemporalError::InvalidSpan { start, end });
            }
        }
        Ok(Self { start, end })
    }

    /// Creates an open-ended span starting at the given day.
    pub fn from(start: NaiveDate) -> Self {
        Self { start, end: None }
    }

    /// Creates a bounded span.
    pub fn bounded(start: NaiveDate, end: NaiveDate) -> Result<Self, TemporalError> {
        Self::new(start, Some(end))
    }

    /// The last day of the span, substituting the far-future sentinel when open-ended.
    pub fn effective_end(&self) -> NaiveDate {
        self.end.unwrap_or_else(far_future)
    }

    pub fn is_open_ended(&self) -> bool {
        self.end.is_none()
    }

    /// Returns true if the span covers the given day.
    pub fn contains(&self, date: NaiveDate) -> bool {
        date >= self.start && date <= self.effective_end()
    }

    /// Returns true if the two spans share at least one day.
    pub fn overlaps(&self, other: &DateSpan) -> bool {
        self.start <= other.effective_end() && other.start <= self.effective_end()
    }

    /// Number of days in the span, inclusive of both endpoints.
    pub fn days(&self) -> i64 {
        (self.effective_end() - self.start).num_days() + 1
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    #[test]
    fn test_bounded_span() {
        let span = DateSpan::bounded(d(2023, 1, 1), d(2023, 6, 30)).unwrap();
        assert!(span.contains(d(2023, 3, 15)));
        assert!(!span.contains(d(2023, 7, 1)));
        assert_eq!(span.days(), 181);
    }

    #[test]
    fn test_invalid_span_rejected() {
        let err = DateSpan::bounded(d(2023, 6, 1), d(2023, 1, 1)).unwrap_err();
        assert!(matches!(err, TemporalError::InvalidSpan { .. }));
    }

    #[test]
    fn test_open_ended_span() {
        let span = DateSpan::from(d(2020, 5, 1));
        assert!(span.is_open_ended());
        assert!(span.contains(d(2050, 1, 1)));
        assert_eq!(span.effective_end(), far_future());
    }

    #[test]
    fn test_overlap() {
        let a = DateSpan::bounded(d(2023, 1, 1), d(2023, 6, 30)).unwrap();
        let b = DateSpan::bounded(d(2023, 6, 30), d(2023, 12, 31)).unwrap();
        let c = DateSpan::bounded(d(2023, 7, 1), d(2023, 12, 31)).unwrap();

        assert!(a.overlaps(&b));
        assert!(!a.overlaps(&c));
        assert!(DateSpan::from(d(2022, 1, 1)).overlaps(&c));
    }
}
