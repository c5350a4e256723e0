//! Property-Based Test Generators
//!
//! Provides proptest strategies for raw records and canonical transactions.
//! Timestamps fall within a few weeks of [`TemporalFixtures::now`] so that
//! calendar filters select a meaningful share of them.

use chrono::{DateTime, Duration, SecondsFormat, Utc};
use domain_savings::{Classification, RawTransactionRecord, Transaction};
use proptest::prelude::*;
use rust_decimal::Decimal;

use crate::fixtures::TemporalFixtures;

/// Strategy for amounts with two decimal places, either sign
pub fn amount_strategy() -> impl Strategy<Value = Decimal> {
    (-1_000_000i64..1_000_000i64).prop_map(|cents| Decimal::new(cents, 2))
}

/// Strategy for instants within 40 days either side of the fixture "now"
pub fn timestamp_strategy() -> impl Strategy<Value = DateTime<Utc>> {
    (-40 * 86_400i64..40 * 86_400i64)
        .prop_map(|offset| TemporalFixtures::now() + Duration::seconds(offset))
}

/// Strategy for provider direction tags, including odd casing and blanks
pub fn sign_strategy() -> impl Strategy<Value = Option<String>> {
    prop_oneof![
        Just(Some("Credit".to_string())),
        Just(Some("Debit".to_string())),
        Just(Some("CREDIT".to_string())),
        Just(Some(String::new())),
        Just(None),
    ]
}

/// Strategy for raw date strings: valid instants with various offsets, or junk
pub fn date_string_strategy() -> impl Strategy<Value = Option<String>> {
    prop_oneof![
        4 => timestamp_strategy().prop_map(|ts| Some(ts.to_rfc3339_opts(SecondsFormat::Secs, true))),
        2 => timestamp_strategy().prop_map(|ts| {
            let sofia = chrono::FixedOffset::east_opt(3 * 3600).unwrap();
            Some(ts.with_timezone(&sofia).to_rfc3339())
        }),
        1 => Just(Some("not-a-date".to_string())),
        1 => Just(None),
    ]
}

/// Strategy for provider records
pub fn raw_record_strategy() -> impl Strategy<Value = RawTransactionRecord> {
    (
        1u32..100_000u32,
        date_string_strategy(),
        amount_strategy(),
        prop_oneof![Just("EUR"), Just("BGN"), Just("USD")],
        prop_oneof![Just(""), Just("Salary"), Just("Groceries")],
        sign_strategy(),
    )
        .prop_map(|(id, date, amount, currency, description, sign)| {
            let mut record =
                RawTransactionRecord::new(id.to_string(), None, amount, currency, description);
            record.date = date;
            record.sign = sign;
            record
        })
}

/// Strategy for canonical transactions, about one in eight undated
pub fn transaction_strategy() -> impl Strategy<Value = Transaction> {
    (
        1u32..100_000u32,
        prop_oneof![7 => timestamp_strategy().prop_map(Some), 1 => Just(None)],
        amount_strategy(),
        prop_oneof![
            Just(Some(Classification::Credit)),
            Just(Some(Classification::Debit)),
            Just(None),
        ],
    )
        .prop_map(|(id, timestamp, amount, classification)| Transaction {
            id: id.to_string(),
            timestamp,
            amount,
            currency: "EUR".to_string(),
            description: "Generated".to_string(),
            classification,
        })
}

/// Strategy for batches of transactions
pub fn transactions_strategy(max: usize) -> impl Strategy<Value = Vec<Transaction>> {
    prop::collection::vec(transaction_strategy(), 0..max)
}

/// Strategy for savings percentages within the allowed range
pub fn savings_percentage_strategy() -> impl Strategy<Value = Decimal> {
    (100u32..=1500u32).prop_map(|n| Decimal::new(i64::from(n), 2))
}
