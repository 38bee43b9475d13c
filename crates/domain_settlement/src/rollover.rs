//! Yearly rollover ("Jahresübernahme")
//!
//! Carries a property's contract records across a year boundary so the next
//! settlement year starts with the same occupants. Expenses and meter data
//! are never carried; those belong to their own billing periods.

use chrono::NaiveDate;
use std::collections::HashSet;
use tracing::debug;

use core_kernel::{OccupancyEntryId, PropertyId, TemporalError, TenancyId, UnitId};
use domain_property::{OccupancyHistory, Tenancy, Unit};

use crate::error::SettlementError;

/// Records created by one rollover.
#[derive(Debug, Clone, PartialEq)]
pub struct RolloverOutcome {
    pub new_tenancies: Vec<Tenancy>,
    pub new_occupancy: Vec<OccupancyHistory>,
}

/// Duplicates year-scoped contract records from `source_year` into `target_year`.
///
/// A tenancy is carried over when it belongs to the property, is active on
/// Dec 31 of the source year, and ends exactly on that day — the year-scoped
/// contract convention. The continuation gets a fresh id and spans Jan 1 to
/// Dec 31 of the target year with the same unit, tenant, and prepayment.
/// Open-ended tenancies and tenancies already reaching into the target year
/// need no copy. Occupancy entries active on the cutoff day follow their
/// tenancy the same way.
pub fn duplicate_year(
    source_year: i32,
    target_year: i32,
    property_id: PropertyId,
    units: &[Unit],
    tenancies: &[Tenancy],
    occupancy_history: &[OccupancyHistory],
) -> Result<RolloverOutcome, SettlementError> {
    if target_year <= source_year {
        return Err(SettlementError::InvalidRolloverRange {
            source_year,
            target_year,
        });
    }
    let cutoff = NaiveDate::from_ymd_opt(source_year, 12, 31)
        .ok_or(TemporalError::YearOutOfRange(source_year))?;
    let target_start = NaiveDate::from_ymd_opt(target_year, 1, 1)
        .ok_or(TemporalError::YearOutOfRange(target_year))?;
    let target_end = NaiveDate::from_ymd_opt(target_year, 12, 31)
        .ok_or(TemporalError::YearOutOfRange(target_year))?;

    let property_units: HashSet<UnitId> = units
        .iter()
        .filter(|u| u.property_id == property_id)
        .map(|u| u.id)
        .collect();

    let mut new_tenancies = Vec::new();
    let mut new_occupancy = Vec::new();

    for tenancy in tenancies {
        if !property_units.contains(&tenancy.unit_id) {
            continue;
        }
        if tenancy.end_date != Some(cutoff) {
            continue;
        }

        let continuation = Tenancy::new(
            TenancyId::new(),
            tenancy.unit_id,
            tenancy.tenant_id,
            target_start,
            Some(target_end),
            tenancy.monthly_prepayment,
        );
        debug!(
            source = %tenancy.id,
            continuation = %continuation.id,
            "carrying tenancy into {target_year}"
        );

        for entry in occupancy_history
            .iter()
            .filter(|h| h.tenancy_id == tenancy.id && h.span().contains(cutoff))
        {
            let mut carried = OccupancyHistory::new(
                OccupancyEntryId::new(),
                continuation.id,
                target_start,
                Some(target_end),
                entry.person_count,
            );
            carried.occupant_names = entry.occupant_names.clone();
            new_occupancy.push(carried);
        }

        new_tenancies.push(continuation);
    }

    Ok(RolloverOutcome {
        new_tenancies,
        new_occupancy,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use core_kernel::{Money, TenantId};
    use domain_property::UsageType;
    use rust_decimal_macros::dec;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    #[test]
    fn test_rejects_backward_rollover() {
        let err = duplicate_year(2024, 2024, PropertyId::new(), &[], &[], &[]).unwrap_err();
        assert!(matches!(err, SettlementError::InvalidRolloverRange { .. }));
    }

    #[test]
    fn test_open_ended_tenancy_is_not_duplicated() {
        let property_id = PropertyId::new();
        let unit = Unit::new(
            UnitId::new(),
            property_id,
            "EG",
            dec!(80),
            2,
            UsageType::Residential,
        );
        let tenancy = Tenancy::new(
            TenancyId::new(),
            unit.id,
            TenantId::new(),
            d(2022, 4, 1),
            None,
            Money::from_cents(20000),
        );

        let outcome =
            duplicate_year(2023, 2024, property_id, &[unit], &[tenancy], &[]).unwrap();
        assert!(outcome.new_tenancies.is_empty());
        assert!(outcome.new_occupancy.is_empty());
    }
}
