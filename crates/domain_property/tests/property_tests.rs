//! Integration tests for the property domain

use chrono::NaiveDate;
use rust_decimal_macros::dec;

use core_kernel::{AmendmentId, Money, PropertyId, TenancyId, TenantId, UnitId};
use domain_property::{
    current_amendment, find_overlapping_tenancies, AllocationKey, ContractAmendment, Expense,
    OccupancyHistory, Property, Tenancy, Unit, UsageType, STANDARD_EXPENSE_CATEGORIES,
};

fn d(y: i32, m: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, day).unwrap()
}

mod property_tests {
    use super::*;

    #[test]
    fn test_standard_categories_cover_common_costs() {
        assert!(STANDARD_EXPENSE_CATEGORIES.contains(&"Grundsteuer"));
        assert!(STANDARD_EXPENSE_CATEGORIES.contains(&"Sonstige"));
        assert_eq!(STANDARD_EXPENSE_CATEGORIES.len(), 14);
    }

    #[test]
    fn test_property_serde_round_trip() {
        let property = Property::new(PropertyId::new(), "Hauptstr. 1", "10115 Berlin", dec!(320.5))
            .with_default_key("Wasserversorgung", AllocationKey::Persons);

        let json = serde_json::to_string(&property).unwrap();
        let back: Property = serde_json::from_str(&json).unwrap();
        assert_eq!(back, property);
    }
}

mod tenancy_tests {
    use super::*;

    #[test]
    fn test_overlaps_only_reported_per_unit() {
        let unit_a = UnitId::new();
        let unit_b = UnitId::new();
        let t1 = Tenancy::new(
            TenancyId::new(),
            unit_a,
            TenantId::new(),
            d(2023, 1, 1),
            None,
            Money::from_cents(20000),
        );
        let t2 = Tenancy::new(
            TenancyId::new(),
            unit_b,
            TenantId::new(),
            d(2023, 1, 1),
            None,
            Money::from_cents(18000),
        );

        assert!(find_overlapping_tenancies(&[t1, t2]).is_empty());
    }

    #[test]
    fn test_occupancy_entry_stays_within_tenancy_model() {
        let tenancy_id = TenancyId::new();
        let entry = OccupancyHistory::new(
            core_kernel::OccupancyEntryId::new(),
            tenancy_id,
            d(2023, 3, 1),
            Some(d(2023, 8, 31)),
            4,
        )
        .with_occupant_names("Familie Schmidt");

        assert_eq!(entry.span().days(), 184);
        assert_eq!(entry.occupant_names.as_deref(), Some("Familie Schmidt"));
    }
}

mod amendment_tests {
    use super::*;

    #[test]
    fn test_amendment_lookup_is_deterministic() {
        let tenancy = TenancyId::new();
        let amendments = vec![
            ContractAmendment {
                id: AmendmentId::new(),
                tenancy_id: tenancy,
                valid_from: d(2022, 1, 1),
                base_rent: Money::from_cents(78000),
                parking_rent: Money::from_cents(5000),
                prepayment: Money::from_cents(15000),
            },
            ContractAmendment {
                id: AmendmentId::new(),
                tenancy_id: tenancy,
                valid_from: d(2023, 10, 1),
                base_rent: Money::from_cents(82000),
                parking_rent: Money::from_cents(5000),
                prepayment: Money::from_cents(17000),
            },
        ];

        let a = current_amendment(&amendments, tenancy, d(2023, 11, 15)).unwrap();
        let b = current_amendment(&amendments, tenancy, d(2023, 11, 15)).unwrap();
        assert_eq!(a, b);
        assert_eq!(a.prepayment.cents(), 17000);

        // Day before the adjustment takes effect, the old figures apply.
        let before = current_amendment(&amendments, tenancy, d(2023, 9, 30)).unwrap();
        assert_eq!(before.base_rent.cents(), 78000);
    }
}

mod expense_tests {
    use super::*;

    #[test]
    fn test_direct_expense_assignment() {
        let unit = UnitId::new();
        let expense = Expense::new(
            core_kernel::ExpenseId::new(),
            PropertyId::new(),
            "Schornsteinreinigung",
            Money::from_cents(4800),
            d(2023, 11, 2),
            d(2023, 1, 1),
            d(2023, 12, 31),
            AllocationKey::Direct,
        )
        .assigned_to(unit);

        assert_eq!(expense.unit_id, Some(unit));
    }

    #[test]
    fn test_commercial_unit_flag() {
        let unit = Unit::new(
            UnitId::new(),
            PropertyId::new(),
            "Laden EG",
            dec!(95),
            1,
            UsageType::Commercial,
        );
        assert!(unit.is_commercial());
    }
}
