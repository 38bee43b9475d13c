//! Core Kernel - Foundational types for the operating-cost settlement system
//!
//! This crate provides the building blocks shared by all domain modules:
//! - Cent-precise money with decimal arithmetic for proportional splits
//! - Date-span types for tenancy, occupancy, and billing periods
//! - Strongly-typed identifiers

pub mod error;
pub mod identifiers;
pub mod money;
pub mod temporal;

pub use error::CoreError;
pub use identifiers::{
    AmendmentId, ExpenseId, OccupancyEntryId, PropertyId, TenancyId, TenantId, UnitId,
};
pub use money::Money;
pub use temporal::{far_future, DateSpan, TemporalError};
