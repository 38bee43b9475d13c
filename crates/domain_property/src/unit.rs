//! Rentable units

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use core_kernel::{PropertyId, UnitId};

/// How a unit is used, which decides whether it counts toward the
/// commercial-area denominator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum UsageType {
    Residential,
    Commercial,
    Mixed,
}

/// One rentable unit of a property.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Unit {
    /// Unique identifier
    pub id: UnitId,
    /// Owning property
    pub property_id: PropertyId,
    /// Display name, e.g. "EG links"
    pub name: String,
    /// Area in square meters
    pub sq_meter: Decimal,
    /// Legacy default person count, used on days where a tenancy has no
    /// occupancy-history entry
    pub keys: u32,
    /// Usage classification
    pub usage_type: UsageType,
    /// Optional location code within the building
    pub location_code: Option<String>,
    /// Optional room count (display only)
    pub room_count: Option<u32>,
    /// Optional assigned parking slot (display only)
    pub parking_slot_id: Option<String>,
}

impl Unit {
    pub fn new(
        id: UnitId,
        property_id: PropertyId,
        name: impl Into<String>,
        sq_meter: Decimal,
        keys: u32,
        usage_type: UsageType,
    ) -> Self {
        Self {
            id,
            property_id,
            name: name.into(),
            sq_meter,
            keys,
            usage_type,
            location_code: None,
            room_count: None,
            parking_slot_id: None,
        }
    }

    /// Person count assumed for an occupied day without an occupancy-history
    /// override. A legacy `keys` value of zero still counts one person.
    pub fn default_person_count(&self) -> u32 {
        self.keys.max(1)
    }

    /// True if the unit's area counts toward the commercial-area denominator.
    pub fn is_commercial(&self) -> bool {
        self.usage_type == UsageType::Commercial
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_default_person_count_floors_at_one() {
        let mut unit = Unit::new(
            UnitId::new(),
            PropertyId::new(),
            "1. OG",
            dec!(75.5),
            3,
            UsageType::Residential,
        );
        assert_eq!(unit.default_person_count(), 3);

        unit.keys = 0;
        assert_eq!(unit.default_person_count(), 1);
    }

    #[test]
    fn test_usage_type_serde_names() {
        let json = serde_json::to_string(&UsageType::Commercial).unwrap();
        assert_eq!(json, "\"COMMERCIAL\"");
    }

    #[test]
    fn test_commercial_classification() {
        let mut unit = Unit::new(
            UnitId::new(),
            PropertyId::new(),
            "Laden EG",
            dec!(120),
            1,
            UsageType::Commercial,
        );
        assert!(unit.is_commercial());

        unit.usage_type = UsageType::Mixed;
        assert!(!unit.is_commercial());
    }
}
