//! Test Data Builders
//!
//! Builder patterns for constructing test entities with sensible defaults, so
//! tests only spell out the fields they actually care about.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use core_kernel::{
    ExpenseId, Money, OccupancyEntryId, PropertyId, TenancyId, TenantId, UnitId,
};
use domain_property::{
    AllocationKey, Expense, OccupancyHistory, Property, Tenancy, Tenant, Unit, UsageType,
};

use crate::fixtures::DateFixtures;

/// Builder for test properties
pub struct PropertyBuilder {
    id: PropertyId,
    name: String,
    address: String,
    total_sqm: Decimal,
}

impl Default for PropertyBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl PropertyBuilder {
    pub fn new() -> Self {
        Self {
            id: PropertyId::new(),
            name: "Testhaus".to_string(),
            address: "Teststr. 1, 10115 Berlin".to_string(),
            total_sqm: dec!(100),
        }
    }

    pub fn with_id(mut self, id: PropertyId) -> Self {
        self.id = id;
        self
    }

    pub fn with_total_sqm(mut self, total_sqm: Decimal) -> Self {
        self.total_sqm = total_sqm;
        self
    }

    pub fn build(self) -> Property {
        Property::new(self.id, self.name, self.address, self.total_sqm)
    }
}

/// Builder for test units
pub struct UnitBuilder {
    id: UnitId,
    property_id: PropertyId,
    name: String,
    sq_meter: Decimal,
    keys: u32,
    usage_type: UsageType,
}

impl UnitBuilder {
    pub fn new(property_id: PropertyId) -> Self {
        Self {
            id: UnitId::new(),
            property_id,
            name: "EG links".to_string(),
            sq_meter: dec!(100),
            keys: 1,
            usage_type: UsageType::Residential,
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn with_area(mut self, sq_meter: Decimal) -> Self {
        self.sq_meter = sq_meter;
        self
    }

    pub fn with_keys(mut self, keys: u32) -> Self {
        self.keys = keys;
        self
    }

    pub fn commercial(mut self) -> Self {
        self.usage_type = UsageType::Commercial;
        self
    }

    pub fn build(self) -> Unit {
        Unit::new(
            self.id,
            self.property_id,
            self.name,
            self.sq_meter,
            self.keys,
            self.usage_type,
        )
    }
}

/// Builder for test tenancies (paired with a default tenant)
pub struct TenancyBuilder {
    id: TenancyId,
    unit_id: UnitId,
    tenant_id: TenantId,
    start_date: NaiveDate,
    end_date: Option<NaiveDate>,
    monthly_prepayment: Money,
}

impl TenancyBuilder {
    pub fn new(unit_id: UnitId) -> Self {
        Self {
            id: TenancyId::new(),
            unit_id,
            tenant_id: TenantId::new(),
            start_date: DateFixtures::year_start(),
            end_date: Some(DateFixtures::year_end()),
            monthly_prepayment: Money::zero(),
        }
    }

    pub fn with_tenant(mut self, tenant_id: TenantId) -> Self {
        self.tenant_id = tenant_id;
        self
    }

    pub fn spanning(mut self, start: NaiveDate, end: Option<NaiveDate>) -> Self {
        self.start_date = start;
        self.end_date = end;
        self
    }

    pub fn with_prepayment(mut self, cents: i64) -> Self {
        self.monthly_prepayment = Money::from_cents(cents);
        self
    }

    pub fn build(self) -> Tenancy {
        Tenancy::new(
            self.id,
            self.unit_id,
            self.tenant_id,
            self.start_date,
            self.end_date,
            self.monthly_prepayment,
        )
    }

    /// Builds the tenancy together with a matching tenant record.
    pub fn build_with_tenant(self, name: impl Into<String>) -> (Tenancy, Tenant) {
        let tenant = Tenant::new(self.tenant_id, name, "tenant@example.com");
        (self.build(), tenant)
    }
}

/// Builder for test expenses
pub struct ExpenseBuilder {
    id: ExpenseId,
    property_id: PropertyId,
    unit_id: Option<UnitId>,
    name: String,
    amount: Money,
    period_start: NaiveDate,
    period_end: NaiveDate,
    allocation_key: AllocationKey,
}

impl ExpenseBuilder {
    pub fn new(property_id: PropertyId) -> Self {
        Self {
            id: ExpenseId::new(),
            property_id,
            unit_id: None,
            name: "Grundsteuer".to_string(),
            amount: Money::from_cents(36500),
            period_start: DateFixtures::year_start(),
            period_end: DateFixtures::year_end(),
            allocation_key: AllocationKey::Area,
        }
    }

    pub fn named(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn amount(mut self, amount: Money) -> Self {
        self.amount = amount;
        self
    }

    pub fn amount_cents(mut self, cents: i64) -> Self {
        self.amount = Money::from_cents(cents);
        self
    }

    pub fn period(mut self, start: NaiveDate, end: NaiveDate) -> Self {
        self.period_start = start;
        self.period_end = end;
        self
    }

    pub fn with_key(mut self, key: AllocationKey) -> Self {
        self.allocation_key = key;
        self
    }

    pub fn direct_to(mut self, unit_id: UnitId) -> Self {
        self.allocation_key = AllocationKey::Direct;
        self.unit_id = Some(unit_id);
        self
    }

    pub fn build(self) -> Expense {
        let mut expense = Expense::new(
            self.id,
            self.property_id,
            self.name,
            self.amount,
            self.period_end,
            self.period_start,
            self.period_end,
            self.allocation_key,
        );
        expense.unit_id = self.unit_id;
        expense
    }
}

/// Builder for occupancy-history entries
pub struct OccupancyBuilder {
    id: OccupancyEntryId,
    tenancy_id: TenancyId,
    valid_from: NaiveDate,
    valid_until: Option<NaiveDate>,
    person_count: u32,
}

impl OccupancyBuilder {
    pub fn new(tenancy_id: TenancyId) -> Self {
        Self {
            id: OccupancyEntryId::new(),
            tenancy_id,
            valid_from: DateFixtures::year_start(),
            valid_until: None,
            person_count: 2,
        }
    }

    pub fn spanning(mut self, from: NaiveDate, until: Option<NaiveDate>) -> Self {
        self.valid_from = from;
        self.valid_until = until;
        self
    }

    pub fn with_persons(mut self, count: u32) -> Self {
        self.person_count = count;
        self
    }

    pub fn build(self) -> OccupancyHistory {
        OccupancyHistory::new(
            self.id,
            self.tenancy_id,
            self.valid_from,
            self.valid_until,
            self.person_count,
        )
    }
}
