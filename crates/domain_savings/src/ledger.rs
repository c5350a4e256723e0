//! Savings ledger and analytics
//!
//! The ledger is the user's savings history: the savings set aside from
//! income and expenses, deposits, interest payments and withdrawals. The
//! analytics here back the dashboard's "total saved" figure and the
//! analytics screen (growth chart, monthly interest, monthly progress).
//!
//! All periods are UTC calendar periods. Every function is a pure read of
//! the ledger; "now" and target months are explicit arguments.

use chrono::{DateTime, Datelike, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::debug;

use core_kernel::{month_abbreviation, CalendarPeriod, Currency, EntryId, Money};
use crate::aggregation::saturating_total;
use crate::configuration::SavingsPercentage;
use crate::error::SavingsError;

/// Days covered by the trailing progress and interest figures
pub const TRAILING_WINDOW_DAYS: u32 = 30;

/// Longest history `monthly_growth` will chart (one hundred years)
pub const MAX_GROWTH_MONTHS: u32 = 1200;

/// Kind of a ledger entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EntryKind {
    /// Incoming payment; its savings portion is set aside
    Income,
    /// Outgoing payment; its savings portion (if any) is set aside
    Expense,
    /// Completed withdrawal from savings
    Withdraw,
    /// Withdrawal accepted but not yet settled
    PendingWithdrawal,
    /// Direct deposit into savings
    SavingsDeposit,
    /// Interest credited on savings
    InterestPayment,
}

impl EntryKind {
    pub fn is_withdrawal(&self) -> bool {
        matches!(self, EntryKind::Withdraw | EntryKind::PendingWithdrawal)
    }
}

/// One movement in the savings ledger
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SavingsEntry {
    pub id: EntryId,
    pub kind: EntryKind,
    pub description: String,
    /// Full transaction amount
    pub amount: Decimal,
    /// Portion set aside for Income/Expense entries; zero otherwise
    pub savings_calculated: Decimal,
    pub timestamp: DateTime<Utc>,
    pub currency: Currency,
}

impl SavingsEntry {
    /// Creates an entry with no savings portion
    pub fn new(
        kind: EntryKind,
        amount: Decimal,
        currency: Currency,
        timestamp: DateTime<Utc>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            id: EntryId::new(),
            kind,
            description: description.into(),
            amount,
            savings_calculated: Decimal::ZERO,
            timestamp,
            currency,
        }
    }

    /// Records an incoming payment and the portion saved from it
    pub fn income(
        amount: Decimal,
        percentage: SavingsPercentage,
        currency: Currency,
        timestamp: DateTime<Utc>,
        description: impl Into<String>,
    ) -> Self {
        let mut entry = Self::new(EntryKind::Income, amount, currency, timestamp, description);
        entry.savings_calculated = percentage.savings_for(amount);
        entry
    }

    /// Sets the saved portion explicitly
    pub fn with_savings(mut self, savings_calculated: Decimal) -> Self {
        self.savings_calculated = savings_calculated;
        self
    }

    /// Change this entry makes to the savings balance
    pub fn balance_effect(&self) -> Decimal {
        match self.kind {
            EntryKind::Income | EntryKind::Expense => self.savings_calculated,
            EntryKind::Withdraw | EntryKind::PendingWithdrawal => -self.amount.abs(),
            EntryKind::SavingsDeposit | EntryKind::InterestPayment => self.amount,
        }
    }
}

/// A point on the cumulative savings growth chart
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthlySavingsPoint {
    pub year: i32,
    pub month: u32,
    pub month_name: String,
    /// Total saved as of the end of the month
    pub savings: Decimal,
}

/// A user's savings history
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SavingsLedger {
    entries: Vec<SavingsEntry>,
    default_currency: Option<Currency>,
}

impl SavingsLedger {
    pub fn new(default_currency: Currency) -> Self {
        Self {
            entries: Vec::new(),
            default_currency: Some(default_currency),
        }
    }

    pub fn from_entries(entries: Vec<SavingsEntry>, default_currency: Currency) -> Self {
        Self {
            entries,
            default_currency: Some(default_currency),
        }
    }

    pub fn push(&mut self, entry: SavingsEntry) {
        self.entries.push(entry);
    }

    pub fn entries(&self) -> &[SavingsEntry] {
        &self.entries
    }

    pub fn entries_mut(&mut self) -> &mut Vec<SavingsEntry> {
        &mut self.entries
    }

    pub fn has_pending_withdrawal(&self) -> bool {
        self.entries.iter().any(|e| e.kind == EntryKind::PendingWithdrawal)
    }

    /// Current savings balance with pending withdrawals already deducted
    pub fn total_saved(&self) -> Money {
        self.sum(|_| true, SavingsEntry::balance_effect)
    }

    /// Cumulative total saved at the end of each of `months` calendar months
    /// ending with `month` of `year`, oldest first
    ///
    /// # Errors
    ///
    /// Returns `InvalidPeriod` if `months` is zero or above
    /// [`MAX_GROWTH_MONTHS`], or if `month` is not 1-12.
    pub fn monthly_growth(
        &self,
        year: i32,
        month: u32,
        months: u32,
    ) -> Result<Vec<MonthlySavingsPoint>, SavingsError> {
        if months == 0 {
            return Err(SavingsError::invalid_period("number of months must be positive"));
        }
        if months > MAX_GROWTH_MONTHS {
            return Err(SavingsError::invalid_period(format!(
                "{months} months exceeds the limit of {MAX_GROWTH_MONTHS}"
            )));
        }
        let mut period = target_month(year, month)?;

        let mut points = Vec::with_capacity(months as usize);
        for _ in 0..months {
            let savings = saturating_total(
                self.entries
                    .iter()
                    .filter(|e| e.timestamp < period.end)
                    .map(SavingsEntry::balance_effect),
            );
            let first = period.start.date_naive();
            points.push(MonthlySavingsPoint {
                year: first.year(),
                month: first.month(),
                month_name: month_abbreviation(first.month()).to_string(),
                savings,
            });
            period = period.previous_month()?;
        }
        points.reverse();

        debug!(year, month, months, "computed monthly savings growth");
        Ok(points)
    }

    /// Interest credited during `month` of `year`
    pub fn interest_for_month(&self, year: i32, month: u32) -> Result<Money, SavingsError> {
        let period = target_month(year, month)?;
        Ok(self.sum(
            |e| e.kind == EntryKind::InterestPayment && period.contains(e.timestamp),
            |e| e.amount,
        ))
    }

    /// Savings set aside from income during `month` of `year`
    pub fn income_savings_for_month(&self, year: i32, month: u32) -> Result<Money, SavingsError> {
        let period = target_month(year, month)?;
        Ok(self.sum(
            |e| e.kind == EntryKind::Income && period.contains(e.timestamp),
            |e| e.savings_calculated,
        ))
    }

    /// Income savings plus interest over the trailing 30-day window
    pub fn progress_last_30_days(&self, now: DateTime<Utc>) -> Money {
        let window = CalendarPeriod::trailing_days(now, TRAILING_WINDOW_DAYS);
        self.sum(
            |e| {
                matches!(e.kind, EntryKind::Income | EntryKind::InterestPayment)
                    && window.contains(e.timestamp)
            },
            |e| match e.kind {
                EntryKind::Income => e.savings_calculated,
                _ => e.amount,
            },
        )
    }

    /// Interest credited over the trailing 30-day window
    pub fn interest_last_30_days(&self, now: DateTime<Utc>) -> Money {
        let window = CalendarPeriod::trailing_days(now, TRAILING_WINDOW_DAYS);
        self.sum(
            |e| e.kind == EntryKind::InterestPayment && window.contains(e.timestamp),
            |e| e.amount,
        )
    }

    /// Sums `value` over entries selected by `select`, reported in the
    /// currency of the first selected entry
    fn sum<F, V>(&self, select: F, value: V) -> Money
    where
        F: Fn(&SavingsEntry) -> bool,
        V: Fn(&SavingsEntry) -> Decimal,
    {
        let mut currency = None;
        let total = saturating_total(self.entries.iter().filter(|&e| select(e)).map(|entry| {
            currency.get_or_insert(entry.currency);
            value(entry)
        }));
        let currency = currency
            .or(self.default_currency)
            .unwrap_or(Currency::BGN);
        Money::new(total, currency)
    }
}

fn target_month(year: i32, month: u32) -> Result<CalendarPeriod, SavingsError> {
    if !(1..=12).contains(&month) {
        return Err(SavingsError::invalid_period(format!("month {month} is not 1-12")));
    }
    Ok(CalendarPeriod::month(year, month)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use rust_decimal_macros::dec;

    fn at(y: i32, m: u32, d: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(y, m, d, 12, 0, 0).unwrap()
    }

    #[test]
    fn test_balance_effects() {
        let pct = SavingsPercentage::new(dec!(3)).unwrap();
        let income = SavingsEntry::income(dec!(8000), pct, Currency::BGN, at(2024, 7, 15), "Salary");
        assert_eq!(income.balance_effect(), dec!(240));

        let withdraw = SavingsEntry::new(EntryKind::Withdraw, dec!(-50), Currency::BGN, at(2024, 7, 16), "Out");
        assert_eq!(withdraw.balance_effect(), dec!(-50));

        let interest = SavingsEntry::new(EntryKind::InterestPayment, dec!(4.5), Currency::BGN, at(2024, 7, 31), "Interest");
        assert_eq!(interest.balance_effect(), dec!(4.5));
    }

    #[test]
    fn test_empty_ledger_uses_default_currency() {
        let ledger = SavingsLedger::new(Currency::EUR);
        let total = ledger.total_saved();
        assert!(total.is_zero());
        assert_eq!(total.currency(), Currency::EUR);
    }

    #[test]
    fn test_monthly_growth_rejects_bad_arguments() {
        let ledger = SavingsLedger::new(Currency::BGN);
        assert!(matches!(ledger.monthly_growth(2024, 7, 0), Err(SavingsError::InvalidPeriod(_))));
        assert!(matches!(ledger.monthly_growth(2024, 13, 3), Err(SavingsError::InvalidPeriod(_))));
        assert!(matches!(
            ledger.monthly_growth(2024, 7, MAX_GROWTH_MONTHS + 1),
            Err(SavingsError::InvalidPeriod(_))
        ));
        assert!(matches!(ledger.monthly_growth(2024, 7, 5_000_000), Err(SavingsError::InvalidPeriod(_))));
    }
}
