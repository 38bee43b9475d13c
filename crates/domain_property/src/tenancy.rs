//! Tenancy contracts

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use core_kernel::{DateSpan, Money, TenancyId, TenantId, UnitId};

/// One lease contract binding a tenant to a unit.
///
/// A unit may carry several tenancies over time, but at most one should be
/// active on any given day. The settlement engine does not reject overlaps;
/// on overlapping days the tenancy processed later wins. Use
/// [`find_overlapping_tenancies`] at data-entry time to surface conflicts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tenancy {
    /// Unique identifier
    pub id: TenancyId,
    /// Occupied unit
    pub unit_id: UnitId,
    /// Contracting tenant
    pub tenant_id: TenantId,
    /// First day of the lease (inclusive)
    pub start_date: NaiveDate,
    /// Last day of the lease (inclusive), None for an open-ended contract
    pub end_date: Option<NaiveDate>,
    /// Monthly operating-cost prepayment in cents
    pub monthly_prepayment: Money,
}

impl Tenancy {
    pub fn new(
        id: TenancyId,
        unit_id: UnitId,
        tenant_id: TenantId,
        start_date: NaiveDate,
        end_date: Option<NaiveDate>,
        monthly_prepayment: Money,
    ) -> Self {
        Self {
            id,
            unit_id,
            tenant_id,
            start_date,
            end_date,
            monthly_prepayment,
        }
    }

    /// The days this contract runs, open-ended when no end date is set.
    pub fn span(&self) -> DateSpan {
        DateSpan {
            start: self.start_date,
            end: self.end_date,
        }
    }
}

/// Finds pairs of tenancies on the same unit whose date ranges intersect.
///
/// Returns each conflicting pair once, in input order. An empty result means
/// every unit has at most one active tenancy per day.
pub fn find_overlapping_tenancies(tenancies: &[Tenancy]) -> Vec<(TenancyId, TenancyId)> {
    let mut conflicts = Vec::new();
    for (i, a) in tenancies.iter().enumerate() {
        for b in &tenancies[i + 1..] {
            if a.unit_id == b.unit_id && a.span().overlaps(&b.span()) {
                conflicts.push((a.id, b.id));
            }
        }
    }
    conflicts
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    fn tenancy(unit_id: UnitId, start: NaiveDate, end: Option<NaiveDate>) -> Tenancy {
        Tenancy::new(
            TenancyId::new(),
            unit_id,
            TenantId::new(),
            start,
            end,
            Money::from_cents(20000),
        )
    }

    #[test]
    fn test_span_open_ended() {
        let t = tenancy(UnitId::new(), d(2020, 4, 1), None);
        assert!(t.span().is_open_ended());
        assert!(t.span().contains(d(2035, 1, 1)));
    }

    #[test]
    fn test_overlap_detection() {
        let unit = UnitId::new();
        let a = tenancy(unit, d(2023, 1, 1), Some(d(2023, 6, 30)));
        let b = tenancy(unit, d(2023, 6, 1), None);
        let c = tenancy(UnitId::new(), d(2023, 1, 1), None);

        let conflicts = find_overlapping_tenancies(&[a.clone(), b.clone(), c]);
        assert_eq!(conflicts, vec![(a.id, b.id)]);
    }

    #[test]
    fn test_back_to_back_tenancies_do_not_conflict() {
        let unit = UnitId::new();
        let a = tenancy(unit, d(2023, 1, 1), Some(d(2023, 6, 30)));
        let b = tenancy(unit, d(2023, 7, 1), None);

        assert!(find_overlapping_tenancies(&[a, b]).is_empty());
    }
}
