//! Test Data Builders
//!
//! Provides builder patterns for constructing test data with sensible defaults.
//! Tests set only the fields they care about.

use chrono::{DateTime, SecondsFormat, Utc};
use core_kernel::Currency;
use domain_savings::{
    Classification, EntryKind, RawTransactionRecord, SavingsEntry, Transaction,
};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::fixtures::TemporalFixtures;

/// Builder for provider records
pub struct RawTransactionRecordBuilder {
    record: RawTransactionRecord,
}

impl Default for RawTransactionRecordBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl RawTransactionRecordBuilder {
    /// A 10.00 EUR credit dated [`TemporalFixtures::now`]
    pub fn new() -> Self {
        let date = TemporalFixtures::now().to_rfc3339_opts(SecondsFormat::Secs, true);
        Self {
            record: RawTransactionRecord::new("1", Some(&date), dec!(10.00), "EUR", "Card payment")
                .with_sign("Credit"),
        }
    }

    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.record.id = id.into();
        self
    }

    /// Sets the raw date string exactly as the provider would send it
    pub fn with_date(mut self, date: impl Into<String>) -> Self {
        self.record.date = Some(date.into());
        self
    }

    /// Sets the date from an instant, formatted as the provider does
    pub fn dated(self, instant: DateTime<Utc>) -> Self {
        self.with_date(instant.to_rfc3339_opts(SecondsFormat::Secs, true))
    }

    pub fn without_date(mut self) -> Self {
        self.record.date = None;
        self
    }

    pub fn with_amount(mut self, amount: Decimal) -> Self {
        self.record.amount = amount;
        self
    }

    pub fn with_currency(mut self, currency: impl Into<String>) -> Self {
        self.record.currency = currency.into();
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.record.description = description.into();
        self
    }

    pub fn with_sign(mut self, sign: impl Into<String>) -> Self {
        self.record.sign = Some(sign.into());
        self
    }

    pub fn without_sign(mut self) -> Self {
        self.record.sign = None;
        self
    }

    pub fn with_transaction_type(mut self, transaction_type: impl Into<String>) -> Self {
        self.record.transaction_type = Some(transaction_type.into());
        self
    }

    /// Shorthand for a debit of `amount`
    pub fn debit(self, amount: Decimal) -> Self {
        self.with_amount(-amount.abs()).with_sign("Debit")
    }

    pub fn build(self) -> RawTransactionRecord {
        self.record
    }
}

/// Builder for canonical transactions
pub struct TransactionBuilder {
    transaction: Transaction,
}

impl Default for TransactionBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl TransactionBuilder {
    /// A 10.00 EUR credit dated [`TemporalFixtures::now`]
    pub fn new() -> Self {
        Self {
            transaction: Transaction {
                id: "1".to_string(),
                timestamp: Some(TemporalFixtures::now()),
                amount: dec!(10.00),
                currency: "EUR".to_string(),
                description: "Card payment".to_string(),
                classification: Some(Classification::Credit),
            },
        }
    }

    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.transaction.id = id.into();
        self
    }

    pub fn at(mut self, timestamp: DateTime<Utc>) -> Self {
        self.transaction.timestamp = Some(timestamp);
        self
    }

    pub fn undated(mut self) -> Self {
        self.transaction.timestamp = None;
        self
    }

    pub fn with_amount(mut self, amount: Decimal) -> Self {
        self.transaction.amount = amount;
        self
    }

    pub fn with_currency(mut self, currency: impl Into<String>) -> Self {
        self.transaction.currency = currency.into();
        self
    }

    pub fn with_classification(mut self, classification: Option<Classification>) -> Self {
        self.transaction.classification = classification;
        self
    }

    pub fn debit(self) -> Self {
        self.with_classification(Some(Classification::Debit))
    }

    pub fn build(self) -> Transaction {
        self.transaction
    }
}

/// Builder for ledger entries
pub struct SavingsEntryBuilder {
    kind: EntryKind,
    amount: Decimal,
    savings_calculated: Decimal,
    currency: Currency,
    timestamp: DateTime<Utc>,
    description: String,
}

impl SavingsEntryBuilder {
    pub fn new(kind: EntryKind, amount: Decimal) -> Self {
        Self {
            kind,
            amount,
            savings_calculated: Decimal::ZERO,
            currency: Currency::BGN,
            timestamp: TemporalFixtures::now(),
            description: "Entry".to_string(),
        }
    }

    pub fn deposit(amount: Decimal) -> Self {
        Self::new(EntryKind::SavingsDeposit, amount)
    }

    pub fn interest(amount: Decimal) -> Self {
        Self::new(EntryKind::InterestPayment, amount)
    }

    pub fn with_savings(mut self, savings_calculated: Decimal) -> Self {
        self.savings_calculated = savings_calculated;
        self
    }

    pub fn with_currency(mut self, currency: Currency) -> Self {
        self.currency = currency;
        self
    }

    pub fn at(mut self, timestamp: DateTime<Utc>) -> Self {
        self.timestamp = timestamp;
        self
    }

    pub fn build(self) -> SavingsEntry {
        SavingsEntry::new(self.kind, self.amount, self.currency, self.timestamp, self.description)
            .with_savings(self.savings_calculated)
    }
}
