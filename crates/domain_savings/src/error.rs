//! Savings domain errors

use rust_decimal::Decimal;
use thiserror::Error;

use core_kernel::{MoneyError, PortError, TemporalError};

/// Errors that can occur in the savings domain
///
/// Malformed transaction records are never reported here; normalization
/// absorbs them. These variants cover configuration rejected at the
/// boundary, invalid analytic arguments, withdrawals and upstream failures.
#[derive(Debug, Error)]
pub enum SavingsError {
    #[error("Invalid configuration for {field}: {message}")]
    InvalidConfiguration {
        field: &'static str,
        message: String,
    },

    #[error("Settings could not be loaded: {0}")]
    Settings(#[from] config::ConfigError),

    #[error("Invalid amount: {0}")]
    InvalidAmount(String),

    #[error("Insufficient savings: requested {requested}, available {available}")]
    InsufficientFunds {
        requested: Decimal,
        available: Decimal,
    },

    #[error("Invalid period: {0}")]
    InvalidPeriod(String),

    #[error("Money error: {0}")]
    Money(#[from] MoneyError),

    #[error("Temporal error: {0}")]
    Temporal(#[from] TemporalError),

    #[error("Transaction source failed: {0}")]
    Source(#[from] PortError),
}

impl SavingsError {
    pub fn configuration(field: &'static str, message: impl Into<String>) -> Self {
        SavingsError::InvalidConfiguration {
            field,
            message: message.into(),
        }
    }

    pub fn invalid_amount(message: impl Into<String>) -> Self {
        SavingsError::InvalidAmount(message.into())
    }

    pub fn invalid_period(message: impl Into<String>) -> Self {
        SavingsError::InvalidPeriod(message.into())
    }

    /// Returns true for errors caused by caller-supplied configuration
    pub fn is_configuration(&self) -> bool {
        matches!(
            self,
            SavingsError::InvalidConfiguration { .. } | SavingsError::Settings(_)
        )
    }
}
