//! Settlement output types

use serde::{Deserialize, Serialize};

use core_kernel::{ExpenseId, Money, TenantId};
use domain_property::AllocationKey;

/// One expense's contribution to a tenant's statement.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExpenseShareDetail {
    /// Expense line-item name
    pub expense_name: String,
    /// Total billed amount of the expense
    pub total_bill: Money,
    /// Key the expense was split by
    pub allocation_key: AllocationKey,
    /// Human-readable explanation of the share (percentage and basis)
    pub formula: String,
    /// The tenant's rounded share of this expense
    pub your_share: Money,
}

/// The yearly statement for one tenancy.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TenantSettlement {
    /// Tenant the statement addresses
    pub tenant_id: TenantId,
    /// Tenant display name ("Unknown" when the tenant record is missing)
    pub tenant_name: String,
    /// Occupied unit's display name
    pub unit_name: String,
    /// Total rounded cost share across all expenses
    pub total_share: Money,
    /// Prepayments credited, prorated by occupied days
    pub prepayments_paid: Money,
    /// `total_share - prepayments_paid`; positive means the tenant owes more
    pub balance: Money,
    /// Per-expense breakdown
    pub details: Vec<ExpenseShareDetail>,
    /// Days of the year the tenancy occupied the unit
    pub days_occupied: u32,
}

/// Why part of an expense could not be handed to any tenancy or the owner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum UnallocatedReason {
    /// The allocation key's denominator was zero on one or more days
    /// (e.g. COMMERCIAL_AREA on a property without commercial units, or a
    /// CONSUMPTION expense with no meter source)
    ZeroDenominator,
    /// A DIRECT expense references a unit outside the property's unit list
    UnmatchedDirectUnit,
    /// Day cost not fully covered by unit allocators (e.g. the property's
    /// total area exceeds the sum of unit areas)
    AllocationGap,
}

/// Cost that fell through the allocation, reported instead of silently lost.
///
/// Purely additive reporting: tenant shares and the owner vacancy share are
/// unaffected by anything recorded here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UnallocatedCost {
    pub expense_id: ExpenseId,
    pub expense_name: String,
    /// Rounded amount that reached nobody
    pub amount: Money,
    pub reason: UnallocatedReason,
}

/// The full result of one settlement calculation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SettlementOutcome {
    /// Per-tenancy statements, in tenancy input order
    pub results: Vec<TenantSettlement>,
    /// Apportionable cost of vacant days, borne by the owner
    pub owner_vacancy_share: Money,
    /// Cost that reached neither a tenancy nor the owner, per expense
    pub unallocated: Vec<UnallocatedCost>,
}
