//! Pre-built Test Fixtures
//!
//! Ready-to-use test data for the settlement test suites, consistent and
//! predictable across tests.

use chrono::NaiveDate;

use core_kernel::Money;

/// Fixture for calendar dates
pub struct DateFixtures;

impl DateFixtures {
    pub fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    /// Jan 1 of the standard non-leap test year
    pub fn year_start() -> NaiveDate {
        Self::day(2023, 1, 1)
    }

    /// Dec 31 of the standard non-leap test year
    pub fn year_end() -> NaiveDate {
        Self::day(2023, 12, 31)
    }

    /// Jun 30, the classic mid-year move-out day (day 180 of 2023)
    pub fn mid_year_move_out() -> NaiveDate {
        Self::day(2023, 6, 30)
    }

    /// Jul 1, the matching move-in day
    pub fn mid_year_move_in() -> NaiveDate {
        Self::day(2023, 7, 1)
    }
}

/// Fixture for money figures
pub struct MoneyFixtures;

impl MoneyFixtures {
    /// One cent per square meter and day on a 100 m² property: 36 500 cents
    /// over a full non-leap year.
    pub fn yearly_area_expense() -> Money {
        Money::from_cents(36500)
    }

    /// A typical monthly operating-cost prepayment
    pub fn monthly_prepayment() -> Money {
        Money::from_cents(20000)
    }
}
