//! Expenses and allocation keys

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use core_kernel::{DateSpan, ExpenseId, Money, PropertyId, UnitId};

/// Strategy for splitting one expense across the units of a property.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AllocationKey {
    /// By unit area relative to the property's total area
    Area,
    /// By person-days
    Persons,
    /// Equally per unit
    Units,
    /// Entirely to one explicitly assigned unit
    Direct,
    /// By metered consumption. No meter-reading source is wired up, so the
    /// engine reports such expenses as unallocated rather than guessing.
    Consumption,
    /// By area, restricted to commercial units
    CommercialArea,
}

/// The standard German operating-cost categories offered at data entry.
pub const STANDARD_EXPENSE_CATEGORIES: [&str; 14] = [
    "Grundsteuer",
    "Wasserversorgung",
    "Entwässerung",
    "Aufzug",
    "Straßenreinigung/Müll",
    "Gebäudereinigung",
    "Gartenpflege",
    "Beleuchtung",
    "Schornsteinreinigung",
    "Versicherung",
    "Verwaltungskosten",
    "Hauswart",
    "TV/Kabel",
    "Sonstige",
];

/// One cost line item to be apportioned over its billing period.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Expense {
    /// Unique identifier
    pub id: ExpenseId,
    /// Property the cost belongs to
    pub property_id: PropertyId,
    /// Target unit for DIRECT allocation
    pub unit_id: Option<UnitId>,
    /// Line-item name, usually one of [`STANDARD_EXPENSE_CATEGORIES`]
    pub name: String,
    /// Total billed amount in cents
    pub amount: Money,
    /// Invoice date
    pub date_billed: NaiveDate,
    /// First day the cost covers (inclusive)
    pub period_start: NaiveDate,
    /// Last day the cost covers (inclusive)
    pub period_end: NaiveDate,
    /// How the cost is split across units
    pub allocation_key: AllocationKey,
    /// Portion deductible on the tenant's tax statement (display only)
    pub deductible_amount: Option<Money>,
}

impl Expense {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        id: ExpenseId,
        property_id: PropertyId,
        name: impl Into<String>,
        amount: Money,
        date_billed: NaiveDate,
        period_start: NaiveDate,
        period_end: NaiveDate,
        allocation_key: AllocationKey,
    ) -> Self {
        Self {
            id,
            property_id,
            unit_id: None,
            name: name.into(),
            amount,
            date_billed,
            period_start,
            period_end,
            allocation_key,
            deductible_amount: None,
        }
    }

    /// Assigns the expense to a single unit for DIRECT allocation.
    pub fn assigned_to(mut self, unit_id: UnitId) -> Self {
        self.unit_id = Some(unit_id);
        self
    }

    /// Marks part of the amount as tax-deductible for the statement.
    pub fn with_deductible(mut self, amount: Money) -> Self {
        self.deductible_amount = Some(amount);
        self
    }

    /// The billing period as a bounded span. May be inverted for malformed
    /// input; the engine checks the signed duration and skips such expenses.
    pub fn period(&self) -> DateSpan {
        DateSpan {
            start: self.period_start,
            end: Some(self.period_end),
        }
    }

    /// Billing-period length in days, inclusive of both endpoints.
    /// Zero or negative for malformed periods.
    pub fn duration_days(&self) -> i64 {
        (self.period_end - self.period_start).num_days() + 1
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    #[test]
    fn test_duration_inclusive() {
        let expense = Expense::new(
            ExpenseId::new(),
            PropertyId::new(),
            "Grundsteuer",
            Money::from_cents(36500),
            d(2024, 1, 15),
            d(2023, 1, 1),
            d(2023, 12, 31),
            AllocationKey::Area,
        );
        assert_eq!(expense.duration_days(), 365);
    }

    #[test]
    fn test_inverted_period_has_non_positive_duration() {
        let expense = Expense::new(
            ExpenseId::new(),
            PropertyId::new(),
            "Sonstige",
            Money::from_cents(1000),
            d(2023, 6, 1),
            d(2023, 6, 10),
            d(2023, 6, 1),
            AllocationKey::Units,
        );
        assert!(expense.duration_days() <= 0);
    }

    #[test]
    fn test_allocation_key_serde_names() {
        let json = serde_json::to_string(&AllocationKey::CommercialArea).unwrap();
        assert_eq!(json, "\"COMMERCIAL_AREA\"");
    }
}
