//! Calendar filters over transaction sequences

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use core_kernel::CalendarPeriod;
use crate::transaction::Transaction;

/// Dashboard transaction filters
///
/// Periods are taken on the UTC calendar of the evaluation instant; weeks
/// start on Monday.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TransactionFilter {
    #[default]
    All,
    Today,
    ThisWeek,
}

impl TransactionFilter {
    /// The period selected by this filter, or `None` for [`TransactionFilter::All`]
    pub fn period(&self, now: DateTime<Utc>) -> Option<CalendarPeriod> {
        match self {
            TransactionFilter::All => None,
            TransactionFilter::Today => Some(CalendarPeriod::day_containing(now)),
            TransactionFilter::ThisWeek => Some(CalendarPeriod::week_containing(now)),
        }
    }

    /// Returns true if the transaction is selected at `now`
    ///
    /// Undated transactions are selected only by `All`.
    pub fn matches(&self, transaction: &Transaction, now: DateTime<Utc>) -> bool {
        match self.period(now) {
            None => true,
            Some(period) => transaction.timestamp.is_some_and(|ts| period.contains(ts)),
        }
    }

    /// Selects the matching transactions, preserving their relative order
    pub fn apply<'a>(&self, transactions: &'a [Transaction], now: DateTime<Utc>) -> Vec<&'a Transaction> {
        match self.period(now) {
            None => transactions.iter().collect(),
            Some(period) => within(transactions, &period),
        }
    }
}

/// Transactions dated within `period`, in their original order
pub fn within<'a>(transactions: &'a [Transaction], period: &CalendarPeriod) -> Vec<&'a Transaction> {
    transactions
        .iter()
        .filter(|t| t.timestamp.is_some_and(|ts| period.contains(ts)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use rust_decimal::Decimal;

    fn tx(id: &str, ts: Option<DateTime<Utc>>) -> Transaction {
        Transaction {
            id: id.to_string(),
            timestamp: ts,
            amount: Decimal::ONE,
            currency: "EUR".to_string(),
            description: "t".to_string(),
            classification: None,
        }
    }

    #[test]
    fn test_today_excludes_yesterday_and_undated() {
        let now = Utc.with_ymd_and_hms(2024, 7, 18, 12, 0, 0).unwrap();
        let txs = vec![
            tx("a", Some(Utc.with_ymd_and_hms(2024, 7, 18, 0, 0, 0).unwrap())),
            tx("b", Some(Utc.with_ymd_and_hms(2024, 7, 17, 23, 59, 59).unwrap())),
            tx("c", None),
        ];
        let ids: Vec<_> = TransactionFilter::Today
            .apply(&txs, now)
            .into_iter()
            .map(|t| t.id.as_str())
            .collect();
        assert_eq!(ids, vec!["a"]);
    }

    #[test]
    fn test_all_keeps_undated() {
        let now = Utc.with_ymd_and_hms(2024, 7, 18, 12, 0, 0).unwrap();
        let txs = vec![tx("a", None)];
        assert!(TransactionFilter::All.matches(&txs[0], now));
        assert_eq!(TransactionFilter::All.apply(&txs, now).len(), 1);
    }

    #[test]
    fn test_filter_serializes_like_dashboard_tabs() {
        let json = serde_json::to_string(&TransactionFilter::ThisWeek).unwrap();
        assert_eq!(json, "\"THIS_WEEK\"");
    }
}
