//! Ports infrastructure
//!
//! The savings core never reaches out to the network itself. Data it needs
//! from the outside world (the merchant platform's transaction list) is
//! requested through port traits defined in the domain crates and
//! implemented by adapters supplied by the caller.
//!
//! ```text
//!   merchant API adapter ──► TransactionSource port ──► DashboardService
//!                                                        │
//!                                   normalize ─► aggregate ─► DashboardState
//! ```
//!
//! Every adapter reports failures with [`PortError`] so the domain can treat
//! them uniformly.

use std::fmt;
use thiserror::Error;

/// Error type for port operations
#[derive(Debug, Error)]
pub enum PortError {
    /// The requested entity was not found
    #[error("Not found: {entity_type} with id {id}")]
    NotFound {
        entity_type: String,
        id: String,
    },

    /// Connection to the underlying system failed
    #[error("Connection error: {message}")]
    Connection {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// The operation timed out
    #[error("Timeout after {duration_ms}ms: {operation}")]
    Timeout {
        operation: String,
        duration_ms: u64,
    },

    /// The access token was rejected or has expired
    #[error("Unauthorized: {message}")]
    Unauthorized {
        message: String,
    },

    /// Rate limit exceeded for external API
    #[error("Rate limited: retry after {retry_after_secs}s")]
    RateLimited {
        retry_after_secs: u64,
    },

    /// The payload could not be decoded
    #[error("Transformation error: {message}")]
    Transformation {
        message: String,
    },
}

impl PortError {
    pub fn not_found(entity_type: impl Into<String>, id: impl fmt::Display) -> Self {
        PortError::NotFound {
            entity_type: entity_type.into(),
            id: id.to_string(),
        }
    }

    pub fn connection(message: impl Into<String>) -> Self {
        PortError::Connection {
            message: message.into(),
            source: None,
        }
    }

    pub fn unauthorized(message: impl Into<String>) -> Self {
        PortError::Unauthorized {
            message: message.into(),
        }
    }

    pub fn transformation(message: impl Into<String>) -> Self {
        PortError::Transformation {
            message: message.into(),
        }
    }

    /// Returns true if this error indicates a transient failure that may succeed on retry
    pub fn is_transient(&self) -> bool {
        matches!(
            self,
            PortError::Connection { .. }
                | PortError::Timeout { .. }
                | PortError::RateLimited { .. }
        )
    }
}

/// Marker trait for all domain ports
///
/// Ports are shared behind `Arc<dyn _>` and awaited from async contexts.
pub trait DomainPort: Send + Sync + 'static {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transient_classification() {
        assert!(PortError::connection("reset by peer").is_transient());
        assert!(PortError::RateLimited { retry_after_secs: 5 }.is_transient());
        assert!(!PortError::unauthorized("token expired").is_transient());
        assert!(!PortError::transformation("bad json").is_transient());
    }

    #[test]
    fn test_display() {
        let err = PortError::not_found("transaction", 42);
        assert_eq!(err.to_string(), "Not found: transaction with id 42");
    }
}
