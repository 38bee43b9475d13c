//! Property-based Test Data Generators
//!
//! proptest strategies for randomized settlement scenarios.

use chrono::NaiveDate;
use proptest::prelude::*;
use uuid::Uuid;

use core_kernel::{TenancyId, UnitId};

/// A day within the given non-leap or leap year.
pub fn day_in_year(year: i32) -> impl Strategy<Value = NaiveDate> {
    let start = NaiveDate::from_ymd_opt(year, 1, 1).unwrap();
    let end = NaiveDate::from_ymd_opt(year, 12, 31).unwrap();
    let days = (end - start).num_days();
    (0..=days).prop_map(move |offset| start + chrono::Duration::days(offset))
}

/// An inclusive (start, end) day pair within the year, start <= end.
pub fn span_in_year(year: i32) -> impl Strategy<Value = (NaiveDate, NaiveDate)> {
    (day_in_year(year), day_in_year(year))
        .prop_map(|(a, b)| if a <= b { (a, b) } else { (b, a) })
}

/// An expense amount between one cent and ten thousand euros.
pub fn expense_cents() -> impl Strategy<Value = i64> {
    1i64..1_000_000i64
}

/// A unit id derived from the seed, reproducible across shrink runs.
pub fn unit_id() -> impl Strategy<Value = UnitId> {
    any::<u128>().prop_map(|n| UnitId::from_uuid(Uuid::from_u128(n)))
}

/// A tenancy id derived from the seed, reproducible across shrink runs.
pub fn tenancy_id() -> impl Strategy<Value = TenancyId> {
    any::<u128>().prop_map(|n| TenancyId::from_uuid(Uuid::from_u128(n)))
}
