//! Property Domain - the entity model of the settlement system
//!
//! This crate holds the read-only snapshot entities the settlement engine
//! consumes: properties, their units, tenants, tenancy contracts with their
//! occupancy history and contract amendments, and the expenses to apportion.
//!
//! # Key Concepts
//!
//! - **Property**: a building with a total area and per-category default
//!   allocation keys
//! - **Unit**: a rentable unit of the property (residential, commercial, or
//!   mixed use)
//! - **Tenancy**: one lease contract binding a tenant to a unit over a span
//!   of days, with a monthly prepayment toward operating costs
//! - **Occupancy history**: time-sliced person counts refining a tenancy
//! - **Expense**: one cost line item with a billing period and an allocation
//!   key
//!
//! Entities are created and edited by the surrounding application; within a
//! settlement calculation they are never mutated.

pub mod amendment;
pub mod error;
pub mod expense;
pub mod occupancy;
pub mod property;
pub mod tenancy;
pub mod tenant;
pub mod unit;

pub use amendment::{current_amendment, ContractAmendment};
pub use error::PropertyError;
pub use expense::{AllocationKey, Expense, STANDARD_EXPENSE_CATEGORIES};
pub use occupancy::OccupancyHistory;
pub use property::Property;
pub use tenancy::{find_overlapping_tenancies, Tenancy};
pub use tenant::Tenant;
pub use unit::{Unit, UsageType};
