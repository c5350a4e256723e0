//! Withdrawal planning
//!
//! A withdrawal is accepted as a pending ledger entry and settles one day
//! later. The pending entry already counts against the balance, so a second
//! request cannot spend the same savings twice.

use chrono::{DateTime, Duration, Utc};
use rust_decimal::Decimal;
use tracing::{info, warn};

use crate::error::SavingsError;
use crate::ledger::{EntryKind, SavingsEntry, SavingsLedger};

/// Description attached to withdrawals awaiting settlement
pub const SCHEDULED_WITHDRAWAL_DESCRIPTION: &str = "Scheduled Withdrawal";

/// Hours between accepting a withdrawal and settling it
pub const WITHDRAWAL_SETTLEMENT_HOURS: i64 = 24;

fn settlement_delay() -> Duration {
    Duration::hours(WITHDRAWAL_SETTLEMENT_HOURS)
}

/// Validates a withdrawal request against the ledger
///
/// # Errors
///
/// - `InvalidAmount` if `amount` is not positive
/// - `InsufficientFunds` if `amount` exceeds the available balance
pub fn plan_withdrawal(
    ledger: &SavingsLedger,
    amount: Decimal,
    now: DateTime<Utc>,
) -> Result<SavingsEntry, SavingsError> {
    if amount <= Decimal::ZERO {
        return Err(SavingsError::invalid_amount(format!(
            "withdrawal amount must be positive, got {amount}"
        )));
    }

    let available = ledger.total_saved();
    if amount > available.amount() {
        warn!(%amount, available = %available, "withdrawal rejected");
        return Err(SavingsError::InsufficientFunds {
            requested: amount,
            available: available.amount(),
        });
    }

    info!(%amount, currency = %available.currency(), "withdrawal scheduled");
    Ok(SavingsEntry::new(
        EntryKind::PendingWithdrawal,
        -amount,
        available.currency(),
        now,
        SCHEDULED_WITHDRAWAL_DESCRIPTION,
    ))
}

/// Plans a withdrawal and records it in the ledger
pub fn request_withdrawal(
    ledger: &mut SavingsLedger,
    amount: Decimal,
    now: DateTime<Utc>,
) -> Result<SavingsEntry, SavingsError> {
    let entry = plan_withdrawal(ledger, amount, now)?;
    ledger.push(entry.clone());
    Ok(entry)
}

/// Settles a pending withdrawal once the settlement delay has elapsed
///
/// Entries that are not pending, or not yet due, are returned unchanged.
pub fn settle(entry: &SavingsEntry, now: DateTime<Utc>) -> SavingsEntry {
    let mut settled = entry.clone();
    if entry.kind == EntryKind::PendingWithdrawal && now - entry.timestamp >= settlement_delay() {
        settled.kind = EntryKind::Withdraw;
    }
    settled
}

/// Settles every due pending withdrawal in the ledger, returning how many settled
pub fn settle_due(ledger: &mut SavingsLedger, now: DateTime<Utc>) -> usize {
    let mut settled = 0;
    for entry in ledger.entries_mut().iter_mut() {
        let updated = settle(entry, now);
        if updated.kind != entry.kind {
            *entry = updated;
            settled += 1;
        }
    }
    if settled > 0 {
        info!(settled, "pending withdrawals settled");
    }
    settled
}
