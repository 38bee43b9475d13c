//! Occupancy history entries

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use core_kernel::{DateSpan, OccupancyEntryId, TenancyId};

/// A time-sliced person count within an existing tenancy.
///
/// An entry refines how many people live in the unit during part of a
/// tenancy; it never creates occupation on its own. Days outside the
/// tenancy's span are unaffected.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OccupancyHistory {
    /// Unique identifier
    pub id: OccupancyEntryId,
    /// Tenancy being refined
    pub tenancy_id: TenancyId,
    /// First day the count applies (inclusive)
    pub valid_from: NaiveDate,
    /// Last day the count applies (inclusive), None for open-ended
    pub valid_until: Option<NaiveDate>,
    /// Number of persons living in the unit
    pub person_count: u32,
    /// Free-text occupant names for the tenant statement
    pub occupant_names: Option<String>,
}

impl OccupancyHistory {
    pub fn new(
        id: OccupancyEntryId,
        tenancy_id: TenancyId,
        valid_from: NaiveDate,
        valid_until: Option<NaiveDate>,
        person_count: u32,
    ) -> Self {
        Self {
            id,
            tenancy_id,
            valid_from,
            valid_until,
            person_count,
            occupant_names: None,
        }
    }

    /// Names the occupants for display on the statement.
    pub fn with_occupant_names(mut self, names: impl Into<String>) -> Self {
        self.occupant_names = Some(names.into());
        self
    }

    /// The days this entry covers, open-ended when no end date is set.
    pub fn span(&self) -> DateSpan {
        DateSpan {
            start: self.valid_from,
            end: self.valid_until,
        }
    }
}
