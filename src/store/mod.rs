//! Record store contract and implementations.
//!
//! The [`RecordStore`] trait is the only shared mutable resource in the
//! engine. Components receive it explicitly and call it directly; the store
//! alone provides atomicity for batch claims.
//!
//! Implementations:
//! - [`SqliteRecordStore`]: durable storage over a SQLite pool
//! - [`MemoryRecordStore`]: in-process storage for tests and local runs

use async_trait::async_trait;
use chrono::NaiveDate;

use crate::models::{BatchId, PunchRecord, WorkMonth};

mod memory;
mod sqlite;

pub use memory::MemoryRecordStore;
pub use sqlite::SqliteRecordStore;

/// Result type for store operations.
pub type StoreResult<T> = std::result::Result<T, StoreError>;

/// Errors raised by a record store.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// The database rejected or failed a statement.
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// A stored row could not be decoded back into a punch.
    #[error("Corrupt record: {message}")]
    CorruptRecord {
        /// What could not be decoded.
        message: String,
    },

    /// The store cannot be reached.
    #[error("Record store unavailable")]
    Unavailable,
}

/// Outcome of claiming a batch identifier in the ledger.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClaimOutcome {
    /// This call recorded the identifier; ingestion may proceed.
    Claimed,
    /// The identifier was already in the ledger.
    Duplicate,
}

/// Durable keyed storage for batch claims and punch records.
#[async_trait]
pub trait RecordStore: Send + Sync {
    /// Atomically records `batch_id` in the ledger.
    ///
    /// Of any number of concurrent claims for the same identifier, exactly one
    /// returns [`ClaimOutcome::Claimed`].
    async fn claim(&self, batch_id: &BatchId) -> StoreResult<ClaimOutcome>;

    /// Persists one punch against the batch that submitted it.
    async fn insert(&self, batch_id: &BatchId, punch: &PunchRecord) -> StoreResult<()>;

    /// Every month with at least one punch, ascending, without duplicates.
    async fn distinct_work_months(&self) -> StoreResult<Vec<WorkMonth>>;

    /// Punches with `start <= work_date <= end`, ordered by employee id.
    ///
    /// Order among one employee's punches is unspecified.
    async fn punches_in_range(&self, start: NaiveDate, end: NaiveDate)
    -> StoreResult<Vec<PunchRecord>>;
}
