//! Pre-built Test Fixtures
//!
//! Provides ready-to-use test data for the savings domain. Every fixture is
//! anchored to [`TemporalFixtures::now`] so calendar filters and monthly
//! figures are predictable.

use chrono::{DateTime, Duration, TimeZone, Utc};
use core_kernel::{Currency, Money};
use domain_savings::{
    EntryKind, RawTransactionRecord, SavingsConfiguration, SavingsEntry, SavingsLedger,
    SavingsPercentage,
};
use rust_decimal_macros::dec;

/// Fixture for Money test data
pub struct MoneyFixtures;

impl MoneyFixtures {
    /// A round balance in the default currency
    pub fn bgn_1000() -> Money {
        Money::new(dec!(1000.00), Currency::BGN)
    }

    pub fn bgn_zero() -> Money {
        Money::zero(Currency::BGN)
    }

    /// A EUR amount for currency mismatch tests
    pub fn eur_100() -> Money {
        Money::new(dec!(100.00), Currency::EUR)
    }
}

/// Fixture for temporal test data
pub struct TemporalFixtures;

impl TemporalFixtures {
    /// Evaluation instant used across the suite: Thursday 18 July 2024, noon UTC
    pub fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 7, 18, 12, 0, 0).unwrap()
    }

    /// Earlier the same day
    pub fn this_morning() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 7, 18, 8, 15, 0).unwrap()
    }

    /// Monday of the current week
    pub fn start_of_week() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 7, 15, 0, 0, 0).unwrap()
    }

    /// Sunday of the previous week, one second before it ends
    pub fn last_week() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 7, 14, 23, 59, 59).unwrap()
    }

    /// Earlier in the current month, outside the current week
    pub fn earlier_this_month() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 7, 3, 10, 0, 0).unwrap()
    }

    /// A date in the previous month
    pub fn last_month() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 6, 20, 9, 30, 0).unwrap()
    }

    pub fn days_ago(days: i64) -> DateTime<Utc> {
        Self::now() - Duration::days(days)
    }
}

/// Fixture for configuration test data
pub struct ConfigurationFixtures;

impl ConfigurationFixtures {
    /// 3% savings with a 2% bonus rate
    pub fn standard() -> SavingsConfiguration {
        SavingsConfiguration::new(dec!(3), dec!(2)).unwrap()
    }

    pub fn percentage(value: rust_decimal::Decimal) -> SavingsPercentage {
        SavingsPercentage::new(value).unwrap()
    }
}

/// Fixture for provider records
pub struct RecordFixtures;

impl RecordFixtures {
    /// Two credits and a debit dated this month: 140 credit, 60 debit, 350 credit
    pub fn monthly_scenario() -> Vec<RawTransactionRecord> {
        vec![
            RawTransactionRecord::new("1", Some("2024-07-02T09:00:00Z"), dec!(140.0), "EUR", "Refund")
                .with_sign("Credit"),
            RawTransactionRecord::new("2", Some("2024-07-05T18:30:00Z"), dec!(-60.0), "EUR", "Groceries")
                .with_sign("Debit"),
            RawTransactionRecord::new("3", Some("2024-07-10T07:45:00Z"), dec!(350.0), "EUR", "Salary")
                .with_sign("Credit"),
        ]
    }

    /// A record whose date cannot be parsed
    pub fn undated() -> RawTransactionRecord {
        RawTransactionRecord::new("7", Some("not-a-date"), dec!(25), "EUR", "Bakery")
            .with_sign("Debit")
    }

    /// A page as returned by the provider's transactions endpoint
    pub fn provider_page_json() -> &'static str {
        r#"{
            "items": [
                {
                    "id": 1,
                    "date": "2019-08-24T14:15:22Z",
                    "transaction_amount": 12.5,
                    "transaction_currency": "BGN",
                    "description": "Coffee shop",
                    "sign": "Debit",
                    "transaction_type": "Debit",
                    "payment_reference": "INV-1",
                    "terminal_id": "T-01"
                },
                {
                    "id": "2",
                    "date": "2019-08-25T09:00:00+03:00",
                    "transaction_amount": "2500",
                    "transaction_currency": "BGN",
                    "description": "",
                    "sign": null,
                    "transaction_type": "Credit"
                }
            ],
            "page": 1,
            "page_size": 20,
            "total_pages": 1,
            "total_count": 2,
            "has_previous_page": false,
            "has_next_page": false
        }"#
    }
}

/// Fixture for ledger test data
pub struct LedgerFixtures;

impl LedgerFixtures {
    /// Income, interest and a deposit spread over the last three months
    ///
    /// | date   | kind     | amount | balance effect |
    /// |--------|----------|--------|----------------|
    /// | 10 May | income   | 2000   | 60             |
    /// | 20 Jun | income   | 3000   | 90             |
    /// | 30 Jun | interest | 5      | 5              |
    /// | 3 Jul  | deposit  | 100    | 100            |
    /// | 15 Jul | interest | 7      | 7              |
    pub fn quarter() -> SavingsLedger {
        let pct = ConfigurationFixtures::percentage(dec!(3));
        let bgn = Currency::BGN;
        SavingsLedger::from_entries(
            vec![
                SavingsEntry::income(dec!(2000), pct, bgn, Utc.with_ymd_and_hms(2024, 5, 10, 9, 0, 0).unwrap(), "Salary"),
                SavingsEntry::income(dec!(3000), pct, bgn, TemporalFixtures::last_month(), "Salary"),
                SavingsEntry::new(EntryKind::InterestPayment, dec!(5), bgn, Utc.with_ymd_and_hms(2024, 6, 30, 23, 0, 0).unwrap(), "Interest"),
                SavingsEntry::new(EntryKind::SavingsDeposit, dec!(100), bgn, TemporalFixtures::earlier_this_month(), "Top up"),
                SavingsEntry::new(EntryKind::InterestPayment, dec!(7), bgn, TemporalFixtures::start_of_week(), "Interest"),
            ],
            bgn,
        )
    }
}
