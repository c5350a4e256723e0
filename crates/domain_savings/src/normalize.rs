//! Transaction ingestion and normalization
//!
//! Converts [`RawTransactionRecord`]s into canonical [`Transaction`]s. This
//! step never fails: one bad record must not abort a batch, so every defect
//! resolves to a well-defined fallback and is logged.
//!
//! | defect                     | fallback                          |
//! |----------------------------|-----------------------------------|
//! | date missing, blank or bad | `timestamp = None` (undated)      |
//! | description empty          | `"Transaction"`                   |
//! | sign and type both absent  | `classification = None`           |

use chrono::{DateTime, Utc};
use tracing::{debug, warn};

use crate::record::RawTransactionRecord;
use crate::transaction::{Classification, Transaction, PLACEHOLDER_DESCRIPTION};

/// Normalizes a single provider record
pub fn normalize(record: &RawTransactionRecord) -> Transaction {
    let timestamp = record.date.as_deref().and_then(parse_provider_timestamp);
    if timestamp.is_none() {
        warn!(
            transaction_id = %record.id,
            date = ?record.date,
            "transaction date missing or unparseable; marking undated"
        );
    }

    let description = if record.description.trim().is_empty() {
        PLACEHOLDER_DESCRIPTION.to_string()
    } else {
        record.description.clone()
    };

    Transaction {
        id: record.id.clone(),
        timestamp,
        amount: record.amount,
        currency: record.currency.clone(),
        description,
        classification: resolve_classification(record),
    }
}

/// Normalizes a batch, preserving order and cardinality
pub fn normalize_batch(records: &[RawTransactionRecord]) -> Vec<Transaction> {
    let transactions: Vec<Transaction> = records.iter().map(normalize).collect();
    debug!(
        count = transactions.len(),
        undated = transactions.iter().filter(|t| !t.is_dated()).count(),
        "normalized transaction batch"
    );
    transactions
}

/// Parses an ISO-8601 timestamp carrying an offset and converts it to UTC
///
/// Returns `None` for blank or malformed input.
pub fn parse_provider_timestamp(value: &str) -> Option<DateTime<Utc>> {
    let value = value.trim();
    if value.is_empty() {
        return None;
    }
    DateTime::parse_from_rfc3339(value)
        .or_else(|_| DateTime::parse_from_str(value, "%Y-%m-%dT%H:%M%#z"))
        .or_else(|_| DateTime::parse_from_str(value, "%Y-%m-%dT%H:%M:%S%.f%z"))
        .map(|dt| dt.with_timezone(&Utc))
        .ok()
}

/// Prefers the explicit sign, then the transaction type
fn resolve_classification(record: &RawTransactionRecord) -> Option<Classification> {
    record
        .sign
        .as_deref()
        .and_then(Classification::from_tag)
        .or_else(|| record.transaction_type.as_deref().and_then(Classification::from_tag))
}
