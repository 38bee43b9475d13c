//! Custom Test Assertions
//!
//! Assertion helpers for money figures that give more meaningful failure
//! messages than bare equality checks.

use core_kernel::Money;

/// Asserts that two money values differ by at most `tolerance_cents`.
///
/// # Panics
///
/// Panics when the difference exceeds the tolerance.
pub fn assert_money_within(actual: Money, expected: Money, tolerance_cents: i64) {
    let diff = (actual - expected).abs();
    assert!(
        diff.cents() <= tolerance_cents,
        "Money differs by more than tolerance: actual={}, expected={}, diff={}, tolerance={} cents",
        actual,
        expected,
        diff,
        tolerance_cents
    );
}

/// Asserts that shares plus the owner share conserve an expense's amount to
/// within one cent of rounding slack.
pub fn assert_conserved(shares: &[Money], owner_share: Money, total: Money) {
    let allocated: Money = shares.iter().copied().sum::<Money>() + owner_share;
    assert_money_within(allocated, total, 1);
}
