//! Properties and their allocation defaults

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::error::PropertyError;
use crate::expense::AllocationKey;
use crate::unit::Unit;
use core_kernel::PropertyId;

/// A managed building whose operating costs are settled per year.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Property {
    /// Unique identifier
    pub id: PropertyId,
    /// Display name
    pub name: String,
    /// Postal address
    pub address: String,
    /// Total billable area in square meters, the AREA-key denominator.
    /// Expected to equal the sum of the unit areas; the settlement engine
    /// does not check this and reflects any drift in the computed shares.
    pub total_sqm: Decimal,
    /// Default allocation key per expense category name
    pub default_keys: BTreeMap<String, AllocationKey>,
}

impl Property {
    /// Creates a property with no category defaults.
    pub fn new(
        id: PropertyId,
        name: impl Into<String>,
        address: impl Into<String>,
        total_sqm: Decimal,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            address: address.into(),
            total_sqm,
            default_keys: BTreeMap::new(),
        }
    }

    /// Registers a default allocation key for an expense category.
    pub fn with_default_key(mut self, category: impl Into<String>, key: AllocationKey) -> Self {
        self.default_keys.insert(category.into(), key);
        self
    }

    /// Looks up the default allocation key for an expense category.
    pub fn default_key_for(&self, category: &str) -> Option<AllocationKey> {
        self.default_keys.get(category).copied()
    }

    /// Checks that the unit areas add up to `total_sqm`.
    ///
    /// Data-entry guard for the surrounding application. The settlement
    /// engine itself never calls this.
    pub fn validate_unit_areas(&self, units: &[Unit]) -> Result<(), PropertyError> {
        let unit_total: Decimal = units
            .iter()
            .filter(|u| u.property_id == self.id)
            .map(|u| u.sq_meter)
            .sum();

        if unit_total != self.total_sqm {
            return Err(PropertyError::AreaMismatch {
                declared: self.total_sqm,
                unit_total,
            });
        }
        Ok(())
    }
}
