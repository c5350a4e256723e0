//! Custom Test Assertions
//!
//! Provides specialized assertion helpers for domain types that give
//! more meaningful error messages than standard assertions.

use core_kernel::Money;
use domain_savings::{DashboardState, Transaction};
use rust_decimal::Decimal;

/// Asserts that a Money value has the expected amount, ignoring scale
///
/// # Panics
///
/// Panics if the amounts differ
pub fn assert_money_eq(actual: &Money, expected: Decimal) {
    assert_eq!(
        actual.amount().normalize(),
        expected.normalize(),
        "Money amount mismatch: actual={actual}, expected={expected}"
    );
}

/// Asserts that a Money value is zero
pub fn assert_money_zero(money: &Money) {
    assert!(
        money.is_zero(),
        "Expected zero money, got {} {}",
        money.currency().symbol(),
        money.amount()
    );
}

/// Asserts that every monetary figure of a dashboard state is zero
pub fn assert_dashboard_empty(state: &DashboardState) {
    assert_money_zero(&state.total_saved);
    assert_money_zero(&state.expected_return);
    assert_money_zero(&state.progress_this_month);
    assert_money_zero(&state.earned_this_month);
    assert!(
        state.recent_transactions.is_empty(),
        "Expected no recent transactions, got {}",
        state.recent_transactions.len()
    );
}

/// Asserts that transactions are ordered newest first with undated ones last
pub fn assert_newest_first(transactions: &[Transaction]) {
    for pair in transactions.windows(2) {
        let ordered = match (pair[0].timestamp, pair[1].timestamp) {
            (Some(a), Some(b)) => a >= b,
            (_, None) => true,
            (None, Some(_)) => false,
        };
        assert!(
            ordered,
            "Transactions out of order: {} ({:?}) before {} ({:?})",
            pair[0].id, pair[0].timestamp, pair[1].id, pair[1].timestamp
        );
    }
}

/// Asserts that `subset` contains only transactions present in `superset`
pub fn assert_subset(subset: &[Transaction], superset: &[Transaction]) {
    for transaction in subset {
        assert!(
            superset.contains(transaction),
            "Transaction {} is not in the source sequence",
            transaction.id
        );
    }
}
