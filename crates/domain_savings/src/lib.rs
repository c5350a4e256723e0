//! Savings Domain
//!
//! This crate turns a banking provider's transaction feed into the figures a
//! savings dashboard shows: how much has been saved, what it is expected to
//! earn, and how the current month is going.
//!
//! # Key Concepts
//!
//! - **Raw record**: A transaction exactly as the provider sends it
//! - **Transaction**: The canonical form; dates parsed, fallbacks applied
//! - **Savings impact**: The part of a transaction attributed to savings
//! - **Dashboard state**: Totals, monthly progress and recent activity
//! - **Ledger**: The savings history behind the analytics screen
//!
//! # Pipeline
//!
//! ```text
//! RawTransactionRecord ──normalize──▶ Transaction ──aggregate──▶ DashboardState
//!                                          │
//!                                          └──TransactionFilter──▶ filtered view
//! ```
//!
//! Normalization and aggregation are pure and synchronous. Only
//! [`DashboardService`] is async, because it awaits the upstream
//! [`TransactionSource`].

pub mod aggregation;
pub mod configuration;
pub mod error;
pub mod filter;
pub mod ledger;
pub mod normalize;
pub mod projection;
pub mod record;
pub mod service;
pub mod transaction;
pub mod withdrawal;

pub use aggregation::{aggregate, expected_return, total_saved, DashboardState};
pub use configuration::{
    SavingsConfiguration, SavingsPercentage, SavingsSettings,
    MAX_SAVINGS_PERCENTAGE, MIN_SAVINGS_PERCENTAGE,
};
pub use error::SavingsError;
pub use filter::TransactionFilter;
pub use ledger::{EntryKind, MonthlySavingsPoint, SavingsEntry, SavingsLedger, MAX_GROWTH_MONTHS};
pub use normalize::{normalize, normalize_batch, parse_provider_timestamp};
pub use projection::{project_six_months, InterestProjection};
pub use record::{ProviderMetadata, RawTransactionRecord, TransactionPage};
pub use service::{Clock, DashboardService, SystemClock, TransactionSource};
pub use transaction::{Classification, Transaction, PLACEHOLDER_DESCRIPTION};
pub use withdrawal::{plan_withdrawal, request_withdrawal, settle, settle_due};
