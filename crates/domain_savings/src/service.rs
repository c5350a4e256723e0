//! Dashboard service and its ports
//!
//! The service is the only async surface of the savings domain. It pulls raw
//! records through a [`TransactionSource`], reads "now" from a [`Clock`] and
//! hands both to the pure normalization and aggregation functions.
//!
//! ```rust,ignore
//! let service = DashboardService::new(
//!     Arc::new(ProviderTransactionSource::new(client)),
//!     Arc::new(SystemClock),
//!     SavingsSettings::from_env()?.into_configuration()?,
//! );
//! let state = service.load_dashboard().await?;
//! ```

use std::fmt;
use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use tracing::{debug, instrument};

use core_kernel::{DomainPort, PortError};
use crate::aggregation::{aggregate, DashboardState};
use crate::configuration::SavingsConfiguration;
use crate::error::SavingsError;
use crate::filter::TransactionFilter;
use crate::normalize::normalize_batch;
use crate::record::RawTransactionRecord;
use crate::transaction::{newest_first, Transaction};

/// Upstream provider of raw transaction records
///
/// Implementations own transport concerns such as paging, retries and
/// timeouts; the domain only sees the records or a [`PortError`].
#[async_trait]
pub trait TransactionSource: DomainPort {
    /// Fetches every record currently available for the user
    async fn fetch_transactions(&self) -> Result<Vec<RawTransactionRecord>, PortError>;
}

/// Source of the evaluation instant
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}

/// Wall-clock time
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// Builds dashboard views from an upstream transaction source
pub struct DashboardService {
    source: Arc<dyn TransactionSource>,
    clock: Arc<dyn Clock>,
    configuration: SavingsConfiguration,
}

impl DashboardService {
    pub fn new(
        source: Arc<dyn TransactionSource>,
        clock: Arc<dyn Clock>,
        configuration: SavingsConfiguration,
    ) -> Self {
        Self {
            source,
            clock,
            configuration,
        }
    }

    pub fn configuration(&self) -> &SavingsConfiguration {
        &self.configuration
    }

    /// Replaces the configuration used by later calls
    pub fn set_configuration(&mut self, configuration: SavingsConfiguration) {
        self.configuration = configuration;
    }

    /// Fetches, normalizes and aggregates the user's transactions
    ///
    /// # Errors
    ///
    /// Returns `SavingsError::Source` if the upstream fetch fails.
    #[instrument(skip(self), fields(savings_percentage = %self.configuration.savings_percentage.value()))]
    pub async fn load_dashboard(&self) -> Result<DashboardState, SavingsError> {
        let transactions = self.fetch().await?;
        Ok(aggregate(&transactions, &self.configuration, self.clock.now()))
    }

    /// Fetches the transactions selected by `filter`, newest first
    #[instrument(skip(self))]
    pub async fn transactions(&self, filter: TransactionFilter) -> Result<Vec<Transaction>, SavingsError> {
        let transactions = self.fetch().await?;
        let mut selected: Vec<Transaction> = filter
            .apply(&transactions, self.clock.now())
            .into_iter()
            .cloned()
            .collect();
        selected.sort_by(newest_first);
        debug!(selected = selected.len(), total = transactions.len(), "filtered transactions");
        Ok(selected)
    }

    async fn fetch(&self) -> Result<Vec<Transaction>, SavingsError> {
        let records = self.source.fetch_transactions().await?;
        Ok(normalize_batch(&records))
    }
}

impl fmt::Debug for DashboardService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DashboardService")
            .field("configuration", &self.configuration)
            .finish_non_exhaustive()
    }
}
