//! Savings aggregation
//!
//! Folds a sequence of canonical transactions and a [`SavingsConfiguration`]
//! into a [`DashboardState`]. The fold is a pure function of its arguments:
//! the evaluation instant is passed in, and the state is rebuilt from
//! scratch on every call.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use core_kernel::{CalendarPeriod, Currency, Money, Rate};
use crate::configuration::{SavingsConfiguration, SavingsPercentage};
use crate::filter::within;
use crate::transaction::{newest_first, Transaction};

/// Everything the dashboard screen shows, computed in one pass
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardState {
    /// Sum of the savings impact of every transaction
    pub total_saved: Money,
    /// `total_saved` multiplied by the bonus rate
    pub expected_return: Money,
    /// Savings impact of transactions dated in the current month
    pub progress_this_month: Money,
    /// `progress_this_month` multiplied by the bonus rate
    pub earned_this_month: Money,
    /// All transactions, newest first, undated last
    pub recent_transactions: Vec<Transaction>,
    pub savings_percentage: SavingsPercentage,
    pub bonus_rate: Rate,
    /// Number of transactions whose date could not be parsed
    pub undated_count: usize,
    pub evaluated_at: DateTime<Utc>,
}

/// Sums the savings impact of the given transactions
///
/// Saturates at the bounds of `Decimal` instead of overflowing.
pub fn total_saved<'a, I>(transactions: I) -> Decimal
where
    I: IntoIterator<Item = &'a Transaction>,
{
    saturating_total(transactions.into_iter().map(Transaction::savings_impact))
}

/// Simple, non-compounding return on `saved` at `bonus_rate`
pub fn expected_return(saved: Decimal, bonus_rate: Rate) -> Decimal {
    let rate = bonus_rate.as_decimal();
    saved.checked_mul(rate).unwrap_or_else(|| {
        warn!(%saved, %rate, "expected return exceeds decimal range; saturating");
        saved.saturating_mul(rate)
    })
}

/// Adds up `values`, clamping at `Decimal::MAX` / `Decimal::MIN`
pub(crate) fn saturating_total<I>(values: I) -> Decimal
where
    I: IntoIterator<Item = Decimal>,
{
    let mut saturated = false;
    let total = values.into_iter().fold(Decimal::ZERO, |acc, value| {
        acc.checked_add(value).unwrap_or_else(|| {
            saturated = true;
            acc.saturating_add(value)
        })
    });
    if saturated {
        warn!(%total, "savings total exceeds decimal range; saturating");
    }
    total
}

/// Builds the dashboard state for `transactions` as of `now`
///
/// "This month" is the UTC calendar month containing `now`. An empty
/// sequence yields zero totals.
pub fn aggregate(
    transactions: &[Transaction],
    configuration: &SavingsConfiguration,
    now: DateTime<Utc>,
) -> DashboardState {
    let currency = resolve_currency(transactions, configuration.default_currency);
    let bonus_rate = configuration.bonus_rate;

    let saved = total_saved(transactions);
    let month = CalendarPeriod::month_containing(now);
    let saved_this_month = total_saved(within(transactions, &month));

    let mut recent_transactions = transactions.to_vec();
    recent_transactions.sort_by(newest_first);

    let undated_count = transactions.iter().filter(|t| !t.is_dated()).count();

    debug!(
        transactions = transactions.len(),
        undated = undated_count,
        %saved,
        %saved_this_month,
        %currency,
        "aggregated dashboard state"
    );

    DashboardState {
        total_saved: Money::new(saved, currency),
        expected_return: Money::new(expected_return(saved, bonus_rate), currency),
        progress_this_month: Money::new(saved_this_month, currency),
        earned_this_month: Money::new(expected_return(saved_this_month, bonus_rate), currency),
        recent_transactions,
        savings_percentage: configuration.savings_percentage,
        bonus_rate,
        undated_count,
        evaluated_at: now,
    }
}

/// Currency of the first transaction that contributes to savings
///
/// Amounts are summed without conversion; contributions in other
/// currencies are reported but still counted.
fn resolve_currency(transactions: &[Transaction], default: Currency) -> Currency {
    let mut contributing = transactions
        .iter()
        .filter(|t| !t.savings_impact().is_zero())
        .filter_map(|t| Currency::new(&t.currency).ok());

    let Some(currency) = contributing.next() else {
        return default;
    };
    if let Some(other) = contributing.find(|c| *c != currency) {
        warn!(
            %currency,
            %other,
            "savings contributions span several currencies; summing without conversion"
        );
    }
    currency
}
