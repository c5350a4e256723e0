//! In-memory ports
//!
//! Stand-ins for the upstream provider and the wall clock, so service tests
//! run without network access and at a fixed instant.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use core_kernel::{DomainPort, PortError};
use domain_savings::{Clock, RawTransactionRecord, TransactionSource};

/// Serves a fixed list of records and counts fetches
#[derive(Debug, Default)]
pub struct StaticTransactionSource {
    records: Mutex<Vec<RawTransactionRecord>>,
    fetches: AtomicUsize,
}

impl StaticTransactionSource {
    pub fn new(records: Vec<RawTransactionRecord>) -> Self {
        Self {
            records: Mutex::new(records),
            fetches: AtomicUsize::new(0),
        }
    }

    /// Replaces the records served by later fetches
    pub fn replace(&self, records: Vec<RawTransactionRecord>) {
        *self.records.lock().unwrap() = records;
    }

    pub fn fetch_count(&self) -> usize {
        self.fetches.load(Ordering::SeqCst)
    }
}

impl DomainPort for StaticTransactionSource {}

#[async_trait]
impl TransactionSource for StaticTransactionSource {
    async fn fetch_transactions(&self) -> Result<Vec<RawTransactionRecord>, PortError> {
        self.fetches.fetch_add(1, Ordering::SeqCst);
        Ok(self.records.lock().unwrap().clone())
    }
}

/// Fails every fetch with a connection error
#[derive(Debug, Default)]
pub struct FailingTransactionSource;

impl DomainPort for FailingTransactionSource {}

#[async_trait]
impl TransactionSource for FailingTransactionSource {
    async fn fetch_transactions(&self) -> Result<Vec<RawTransactionRecord>, PortError> {
        Err(PortError::connection("provider unreachable"))
    }
}

/// Clock pinned to one instant
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub DateTime<Utc>);

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.0
    }
}
