//! The settlement calculator
//!
//! A pure function over entity snapshots: no clock reads, no I/O, no state
//! across invocations. Identical inputs produce identical outputs, details
//! and all, so parallel calculations for different properties or years are
//! safe.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use std::collections::HashMap;
use tracing::{debug, warn};

use core_kernel::{Money, TenancyId, TenantId};
use domain_property::{
    AllocationKey, Expense, OccupancyHistory, Property, Tenancy, Tenant, Unit,
};

use crate::calendar::YearCalendar;
use crate::error::SettlementError;
use crate::occupancy::{compute_daily_totals, DailyTotals, OccupancyCache};
use crate::settlement::{
    ExpenseShareDetail, SettlementOutcome, TenantSettlement, UnallocatedCost, UnallocatedReason,
};

/// Average days per month (365.25 / 12), used to prorate the monthly
/// prepayment into a per-day rate. Kept at exactly 30.44 so historical
/// statements reproduce to the cent.
pub const AVERAGE_DAYS_PER_MONTH: Decimal = dec!(30.44);

/// Residual below this many cents per day is decimal-division dust, not a
/// real allocation gap.
const RESIDUAL_DUST: Decimal = dec!(0.000001);

/// The entity snapshot one calculation runs on.
///
/// `units` must be pre-filtered to the property. `expenses` may span several
/// properties; the engine filters by `property.id`. Tenancies and occupancy
/// history are global and matched by unit and tenancy reference.
#[derive(Debug, Clone, Copy)]
pub struct SettlementInput<'a> {
    pub property: &'a Property,
    pub units: &'a [Unit],
    pub tenancies: &'a [Tenancy],
    pub expenses: &'a [Expense],
    pub tenants: &'a [Tenant],
    pub occupancy_history: &'a [OccupancyHistory],
}

/// Running totals for one tenancy's statement, kept unrounded until
/// finalization.
struct Accumulator {
    tenant_id: TenantId,
    tenant_name: String,
    unit_name: String,
    unit_sq_meter: Decimal,
    days_occupied: u32,
    prepayments_paid: Money,
    total_share: Decimal,
    details: Vec<ExpenseShareDetail>,
}

/// Calculates the yearly settlement for one property.
///
/// The only error is a year outside chrono's representable range; for every
/// representable input the engine produces a result, degrading per expense
/// (skips and unallocated buckets) rather than failing.
pub fn calculate_settlement(
    input: &SettlementInput<'_>,
    year: i32,
) -> Result<SettlementOutcome, SettlementError> {
    let calendar = YearCalendar::new(year)?;
    let cache = OccupancyCache::build(
        &calendar,
        input.units,
        input.tenancies,
        input.occupancy_history,
    );
    let daily_totals = compute_daily_totals(&calendar, input.units, &cache);

    // Settlement skeleton. Input order of the tenancy list fixes the output
    // order and every later merge, keeping the calculation deterministic.
    let mut order: Vec<TenancyId> = Vec::new();
    let mut accumulators: HashMap<TenancyId, Accumulator> = HashMap::new();

    for tenancy in input.tenancies {
        let Some(unit) = input.units.iter().find(|u| u.id == tenancy.unit_id) else {
            continue;
        };
        let Some((start, end)) = calendar.clamp_span(&tenancy.span()) else {
            continue;
        };
        let days_occupied = (end - start + 1) as u32;
        let prepayments_paid = Money::rounded(
            tenancy.monthly_prepayment.to_decimal() / AVERAGE_DAYS_PER_MONTH
                * Decimal::from(days_occupied),
        );
        let tenant_name = input
            .tenants
            .iter()
            .find(|t| t.id == tenancy.tenant_id)
            .map(|t| t.name.clone())
            .unwrap_or_else(|| "Unknown".to_string());

        order.push(tenancy.id);
        accumulators.insert(
            tenancy.id,
            Accumulator {
                tenant_id: tenancy.tenant_id,
                tenant_name,
                unit_name: unit.name.clone(),
                unit_sq_meter: unit.sq_meter,
                days_occupied,
                prepayments_paid,
                total_share: Decimal::ZERO,
                details: Vec::new(),
            },
        );
    }

    let mut owner_vacancy_share = Decimal::ZERO;
    let mut unallocated: Vec<UnallocatedCost> = Vec::new();

    for expense in input
        .expenses
        .iter()
        .filter(|e| e.property_id == input.property.id)
    {
        let duration_days = expense.duration_days();
        if duration_days <= 0 {
            debug!(
                expense = %expense.id,
                name = %expense.name,
                "skipping expense with empty billing period"
            );
            continue;
        }
        let Some((start, end)) = calendar.clamp_span(&expense.period()) else {
            debug!(
                expense = %expense.id,
                name = %expense.name,
                "skipping expense whose billing period misses the year"
            );
            continue;
        };

        // Daily rate over the full, unclamped billing period; only in-year
        // days are visited, so a straddling expense is billed partially.
        let daily_cost = expense.amount.to_decimal() / Decimal::from(duration_days);

        let mut distribution: HashMap<TenancyId, Decimal> = HashMap::new();
        let mut expense_owner_share = Decimal::ZERO;
        let mut expense_unallocated = Decimal::ZERO;
        let mut had_zero_denominator = false;

        for day in start..=end {
            let denominator = day_denominator(expense, input.property, &daily_totals[day]);
            if denominator.is_zero() {
                had_zero_denominator = true;
                expense_unallocated += daily_cost;
                continue;
            }
            let cost_per_allocator = daily_cost / denominator;

            let mut day_allocated = Decimal::ZERO;
            for unit in input.units {
                let Some(status) = cache.status(unit.id, day) else {
                    continue;
                };
                let allocator = unit_allocator(expense, unit, status.person_count);
                let share = cost_per_allocator * allocator;
                if share > Decimal::ZERO {
                    match status.tenancy_id {
                        Some(tenancy_id) => {
                            *distribution.entry(tenancy_id).or_insert(Decimal::ZERO) += share;
                        }
                        None => expense_owner_share += share,
                    }
                    day_allocated += share;
                }
            }

            // Whatever the day's allocators did not cover reached nobody:
            // dangling DIRECT units, unit areas short of total_sqm.
            let residual = daily_cost - day_allocated;
            if residual > RESIDUAL_DUST {
                expense_unallocated += residual;
            }
        }

        for tenancy_id in &order {
            let Some(share) = distribution.get(tenancy_id).copied() else {
                continue;
            };
            if let Some(acc) = accumulators.get_mut(tenancy_id) {
                acc.total_share += share;
                let formula = explain_share(expense, share, input.property, acc.unit_sq_meter);
                acc.details.push(ExpenseShareDetail {
                    expense_name: expense.name.clone(),
                    total_bill: expense.amount,
                    allocation_key: expense.allocation_key,
                    formula,
                    your_share: Money::rounded(share),
                });
            }
        }

        owner_vacancy_share += expense_owner_share;

        let lost = Money::rounded(expense_unallocated);
        if lost.is_positive() {
            let reason = if had_zero_denominator {
                UnallocatedReason::ZeroDenominator
            } else if expense.allocation_key == AllocationKey::Direct {
                UnallocatedReason::UnmatchedDirectUnit
            } else {
                UnallocatedReason::AllocationGap
            };
            warn!(
                expense = %expense.id,
                name = %expense.name,
                amount = %lost,
                ?reason,
                "expense cost not fully allocated"
            );
            unallocated.push(UnallocatedCost {
                expense_id: expense.id,
                expense_name: expense.name.clone(),
                amount: lost,
                reason,
            });
        }
    }

    let results = order
        .into_iter()
        .filter_map(|tenancy_id| accumulators.remove(&tenancy_id))
        .map(|acc| {
            let total_share = Money::rounded(acc.total_share);
            TenantSettlement {
                tenant_id: acc.tenant_id,
                tenant_name: acc.tenant_name,
                unit_name: acc.unit_name,
                total_share,
                prepayments_paid: acc.prepayments_paid,
                balance: total_share - acc.prepayments_paid,
                details: acc.details,
                days_occupied: acc.days_occupied,
            }
        })
        .collect();

    Ok(SettlementOutcome {
        results,
        owner_vacancy_share: Money::rounded(owner_vacancy_share),
        unallocated,
    })
}

/// The day's whole-property denominator for the expense's allocation key.
fn day_denominator(expense: &Expense, property: &Property, totals: &DailyTotals) -> Decimal {
    match expense.allocation_key {
        AllocationKey::Area => property.total_sqm,
        AllocationKey::CommercialArea => totals.commercial_area,
        AllocationKey::Units => Decimal::from(totals.total_units as u64),
        AllocationKey::Persons => Decimal::from(totals.total_persons),
        AllocationKey::Direct => Decimal::ONE,
        // No meter-reading source exists; a zero denominator routes the whole
        // expense into the unallocated bucket.
        AllocationKey::Consumption => Decimal::ZERO,
    }
}

/// The unit's weight against the day denominator.
fn unit_allocator(expense: &Expense, unit: &Unit, person_count: u32) -> Decimal {
    match expense.allocation_key {
        AllocationKey::Area => unit.sq_meter,
        AllocationKey::CommercialArea => {
            if unit.is_commercial() {
                unit.sq_meter
            } else {
                Decimal::ZERO
            }
        }
        AllocationKey::Units => Decimal::ONE,
        AllocationKey::Persons => Decimal::from(person_count),
        AllocationKey::Direct => {
            if expense.unit_id == Some(unit.id) {
                Decimal::ONE
            } else {
                Decimal::ZERO
            }
        }
        AllocationKey::Consumption => Decimal::ZERO,
    }
}

/// Renders the share explanation printed on the tenant statement.
fn explain_share(
    expense: &Expense,
    share: Decimal,
    property: &Property,
    unit_sq_meter: Decimal,
) -> String {
    let percentage = if expense.amount.is_zero() {
        Decimal::ZERO
    } else {
        (share / expense.amount.to_decimal() * dec!(100)).round_dp(2)
    };
    match expense.allocation_key {
        AllocationKey::Direct => "Direct assignment (100% of cost)".to_string(),
        AllocationKey::Area => format!(
            "Share {}%: ({} m² / {} m²) over the billing period",
            percentage, unit_sq_meter, property.total_sqm
        ),
        AllocationKey::Units => format!("Share {}%: (1 unit / all units)", percentage),
        AllocationKey::Persons => format!(
            "Share {}%: (your person-days / total person-days)",
            percentage
        ),
        _ => format!("Share {}% of total cost", percentage),
    }
}
