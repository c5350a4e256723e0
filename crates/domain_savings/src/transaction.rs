//! Canonical transactions

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;

/// Description used when the provider sends an empty one
pub const PLACEHOLDER_DESCRIPTION: &str = "Transaction";

/// Direction of a transaction as reported by the provider
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Classification {
    Credit,
    Debit,
    /// Any other provider tag, kept verbatim
    Other(String),
}

impl Classification {
    /// Resolves a provider tag; blank tags resolve to `None`
    pub fn from_tag(tag: &str) -> Option<Self> {
        let tag = tag.trim();
        if tag.is_empty() {
            return None;
        }
        Some(if tag.eq_ignore_ascii_case("credit") {
            Classification::Credit
        } else if tag.eq_ignore_ascii_case("debit") {
            Classification::Debit
        } else {
            Classification::Other(tag.to_string())
        })
    }

    pub fn is_credit(&self) -> bool {
        matches!(self, Classification::Credit)
    }
}

impl fmt::Display for Classification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Classification::Credit => f.write_str("Credit"),
            Classification::Debit => f.write_str("Debit"),
            Classification::Other(tag) => f.write_str(tag),
        }
    }
}

/// A normalized, UI-agnostic financial movement
///
/// `timestamp` is `None` when the provider's date could not be parsed. That
/// is the "undated" sentinel: such a transaction is never placed inside a
/// calendar period and sorts after every dated transaction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transaction {
    pub id: String,
    pub timestamp: Option<DateTime<Utc>>,
    pub amount: Decimal,
    pub currency: String,
    pub description: String,
    pub classification: Option<Classification>,
}

impl Transaction {
    pub fn is_dated(&self) -> bool {
        self.timestamp.is_some()
    }

    pub fn is_credit(&self) -> bool {
        self.classification.as_ref().is_some_and(Classification::is_credit)
    }

    /// Portion of the amount attributed to savings
    ///
    /// Only positive, explicitly credited amounts count; the upstream system
    /// is taken to have already allocated them to savings. Debits and
    /// unclassified records have no impact.
    pub fn savings_impact(&self) -> Decimal {
        if self.is_credit() && self.amount > Decimal::ZERO {
            self.amount
        } else {
            Decimal::ZERO
        }
    }
}

/// Orders transactions newest first; undated transactions go last
pub fn newest_first(a: &Transaction, b: &Transaction) -> Ordering {
    match (a.timestamp, b.timestamp) {
        (Some(x), Some(y)) => y.cmp(&x),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn tx(amount: Decimal, classification: Option<Classification>) -> Transaction {
        Transaction {
            id: "1".to_string(),
            timestamp: None,
            amount,
            currency: "EUR".to_string(),
            description: PLACEHOLDER_DESCRIPTION.to_string(),
            classification,
        }
    }

    #[test]
    fn test_classification_is_case_insensitive() {
        assert_eq!(Classification::from_tag("CREDIT"), Some(Classification::Credit));
        assert_eq!(Classification::from_tag(" debit "), Some(Classification::Debit));
        assert_eq!(
            Classification::from_tag("Refund"),
            Some(Classification::Other("Refund".to_string()))
        );
        assert_eq!(Classification::from_tag("  "), None);
    }

    #[test]
    fn test_savings_impact() {
        assert_eq!(tx(dec!(140), Some(Classification::Credit)).savings_impact(), dec!(140));
        assert_eq!(tx(dec!(-60), Some(Classification::Debit)).savings_impact(), dec!(0));
        assert_eq!(tx(dec!(-5), Some(Classification::Credit)).savings_impact(), dec!(0));
        assert_eq!(tx(dec!(75), None).savings_impact(), dec!(0));
        assert_eq!(
            tx(dec!(75), Some(Classification::Other("Payment".into()))).savings_impact(),
            dec!(0)
        );
    }
}
