//! Contract amendments (rent adjustments)

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use core_kernel::{AmendmentId, Money, TenancyId};

/// A rent adjustment for a tenancy, effective from a given day.
///
/// Amendments govern the displayed rent. The settlement engine reads the
/// prepayment from [`crate::Tenancy::monthly_prepayment`], not from here;
/// see the design notes for why that split is kept.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContractAmendment {
    /// Unique identifier
    pub id: AmendmentId,
    /// Amended tenancy
    pub tenancy_id: TenancyId,
    /// First day the amended figures apply
    pub valid_from: NaiveDate,
    /// Monthly base rent in cents
    pub base_rent: Money,
    /// Monthly parking rent in cents
    pub parking_rent: Money,
    /// Monthly operating-cost prepayment in cents
    pub prepayment: Money,
}

/// Selects the amendment in force for a tenancy on the given day.
///
/// Picks the most recent amendment whose `valid_from` is on or before
/// `as_of`. When every amendment lies in the future, falls back to the
/// earliest one. The reference day is an explicit parameter so the lookup
/// stays deterministic and testable.
pub fn current_amendment<'a>(
    amendments: &'a [ContractAmendment],
    tenancy_id: TenancyId,
    as_of: NaiveDate,
) -> Option<&'a ContractAmendment> {
    let mut candidates: Vec<&ContractAmendment> = amendments
        .iter()
        .filter(|a| a.tenancy_id == tenancy_id)
        .collect();
    candidates.sort_by_key(|a| std::cmp::Reverse(a.valid_from));

    candidates
        .iter()
        .find(|a| a.valid_from <= as_of)
        .copied()
        .or_else(|| candidates.last().copied())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    fn amendment(tenancy_id: TenancyId, valid_from: NaiveDate, base_rent: i64) -> ContractAmendment {
        ContractAmendment {
            id: AmendmentId::new(),
            tenancy_id,
            valid_from,
            base_rent: Money::from_cents(base_rent),
            parking_rent: Money::zero(),
            prepayment: Money::from_cents(15000),
        }
    }

    #[test]
    fn test_picks_most_recent_effective_amendment() {
        let tenancy = TenancyId::new();
        let amendments = vec![
            amendment(tenancy, d(2022, 1, 1), 80000),
            amendment(tenancy, d(2023, 7, 1), 85000),
            amendment(tenancy, d(2024, 7, 1), 90000),
        ];

        let current = current_amendment(&amendments, tenancy, d(2023, 12, 31)).unwrap();
        assert_eq!(current.base_rent.cents(), 85000);
    }

    #[test]
    fn test_falls_back_to_earliest_when_all_future() {
        let tenancy = TenancyId::new();
        let amendments = vec![
            amendment(tenancy, d(2025, 1, 1), 90000),
            amendment(tenancy, d(2024, 7, 1), 85000),
        ];

        let current = current_amendment(&amendments, tenancy, d(2023, 1, 1)).unwrap();
        assert_eq!(current.valid_from, d(2024, 7, 1));
    }

    #[test]
    fn test_ignores_other_tenancies() {
        let tenancy = TenancyId::new();
        let amendments = vec![amendment(TenancyId::new(), d(2022, 1, 1), 80000)];

        assert!(current_amendment(&amendments, tenancy, d(2023, 1, 1)).is_none());
    }
}
