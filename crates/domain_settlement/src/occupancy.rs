//! Day-by-day occupancy materialization
//!
//! Turns tenancy spans and occupancy-history entries into a dense per-unit,
//! per-day record of who occupies what with how many persons. Dense arrays
//! are fine at residential-building scale (tens of units, one year); a
//! run-length representation would replace this for large portfolios.

use rust_decimal::Decimal;
use std::collections::HashMap;

use core_kernel::{TenancyId, UnitId};
use domain_property::{OccupancyHistory, Tenancy, Unit};

use crate::calendar::YearCalendar;

/// Occupancy of one unit on one day.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DayStatus {
    /// Occupying tenancy, None while vacant
    pub tenancy_id: Option<TenancyId>,
    /// Persons living in the unit that day (0 while vacant)
    pub person_count: u32,
}

/// Dense per-unit day records for one settlement year.
#[derive(Debug, Clone)]
pub struct OccupancyCache {
    days: HashMap<UnitId, Vec<DayStatus>>,
}

impl OccupancyCache {
    /// Materializes occupancy for the given units.
    ///
    /// Tenancy spans are applied first, in list order, writing the tenancy id
    /// and the unit's default person count onto every covered day; later
    /// tenancies overwrite earlier ones on contested days. Occupancy-history
    /// entries then override the person count, but only on days already held
    /// by their own tenancy; an entry never creates occupation.
    pub fn build(
        calendar: &YearCalendar,
        units: &[Unit],
        tenancies: &[Tenancy],
        occupancy_history: &[OccupancyHistory],
    ) -> Self {
        let mut days: HashMap<UnitId, Vec<DayStatus>> = units
            .iter()
            .map(|u| (u.id, vec![DayStatus::default(); calendar.days()]))
            .collect();

        for tenancy in tenancies {
            let Some((start, end)) = calendar.clamp_span(&tenancy.span()) else {
                continue;
            };
            let Some(unit) = units.iter().find(|u| u.id == tenancy.unit_id) else {
                continue;
            };
            let person_count = unit.default_person_count();
            if let Some(slots) = days.get_mut(&tenancy.unit_id) {
                for day in &mut slots[start..=end] {
                    day.tenancy_id = Some(tenancy.id);
                    day.person_count = person_count;
                }
            }
        }

        for entry in occupancy_history {
            let Some(tenancy) = tenancies.iter().find(|t| t.id == entry.tenancy_id) else {
                continue;
            };
            let Some((start, end)) = calendar.clamp_span(&entry.span()) else {
                continue;
            };
            if let Some(slots) = days.get_mut(&tenancy.unit_id) {
                for day in &mut slots[start..=end] {
                    if day.tenancy_id == Some(tenancy.id) {
                        day.person_count = entry.person_count;
                    }
                }
            }
        }

        Self { days }
    }

    /// The unit's day records, None for a unit outside the cache.
    pub fn unit_days(&self, unit_id: UnitId) -> Option<&[DayStatus]> {
        self.days.get(&unit_id).map(|v| v.as_slice())
    }

    /// Occupancy of one unit on one day.
    pub fn status(&self, unit_id: UnitId, day: usize) -> Option<DayStatus> {
        self.days.get(&unit_id).and_then(|v| v.get(day)).copied()
    }
}

/// Whole-property denominators for one day.
///
/// Unit count and commercial area do not vary with occupancy; they are still
/// stored per day because the apportionment loop reads them day by day.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DailyTotals {
    /// Persons across all units, floored at 1 to avoid a zero denominator
    pub total_persons: u32,
    /// Number of units of the property
    pub total_units: usize,
    /// Summed area of the COMMERCIAL units
    pub commercial_area: Decimal,
}

/// Computes the per-day denominators for the property.
pub fn compute_daily_totals(
    calendar: &YearCalendar,
    units: &[Unit],
    cache: &OccupancyCache,
) -> Vec<DailyTotals> {
    let commercial_area: Decimal = units
        .iter()
        .filter(|u| u.is_commercial())
        .map(|u| u.sq_meter)
        .sum();

    (0..calendar.days())
        .map(|day| {
            let persons: u32 = units
                .iter()
                .filter_map(|u| cache.status(u.id, day))
                .map(|s| s.person_count)
                .sum();
            DailyTotals {
                total_persons: persons.max(1),
                total_units: units.len(),
                commercial_area,
            }
        })
        .collect()
}
