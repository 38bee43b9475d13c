//! Settlement Domain - yearly operating-cost apportionment
//!
//! This crate implements the settlement calculator: a pure function that
//! takes a snapshot of one property's entities and produces the per-tenant
//! operating-cost statements for a calendar year, plus the vacancy share the
//! owner absorbs.
//!
//! # Pipeline
//!
//! 1. **Calendar**: fix the 365/366-day index for the target year
//! 2. **Occupancy**: materialize, per unit and day, which tenancy occupies
//!    it and how many persons live there
//! 3. **Daily aggregates**: whole-property denominators per day
//! 4. **Skeleton**: one settlement per tenancy overlapping the year, with
//!    day-prorated prepayment credit
//! 5. **Apportionment**: distribute each expense over its billing-period
//!    days and the property's units by allocation key
//! 6. **Finalization**: round to whole cents once, at the very end
//!
//! Cost that no tenancy and not the owner picks up (zero denominators,
//! dangling DIRECT assignments) is reported in a typed unallocated bucket
//! instead of disappearing, without changing any tenant or owner figure.

pub mod calendar;
pub mod engine;
pub mod error;
pub mod occupancy;
pub mod rollover;
pub mod settlement;

pub use calendar::YearCalendar;
pub use engine::{calculate_settlement, SettlementInput, AVERAGE_DAYS_PER_MONTH};
pub use error::SettlementError;
pub use occupancy::{DailyTotals, DayStatus, OccupancyCache};
pub use rollover::{duplicate_year, RolloverOutcome};
pub use settlement::{
    ExpenseShareDetail, SettlementOutcome, TenantSettlement, UnallocatedCost, UnallocatedReason,
};
