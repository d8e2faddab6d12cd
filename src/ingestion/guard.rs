//! Idempotency guard for batch submissions.

use tracing::{info, warn};

use crate::error::PayrollResult;
use crate::models::BatchId;
use crate::store::{ClaimOutcome, RecordStore};

/// Claims batch identifiers so each batch is ingested at most once.
///
/// The guard holds no state of its own: uniqueness comes from the store's
/// atomic ledger insert, so concurrent guards over one store stay correct.
pub struct IdempotencyGuard<'a> {
    store: &'a dyn RecordStore,
}

impl<'a> IdempotencyGuard<'a> {
    /// Creates a guard over `store`.
    pub fn new(store: &'a dyn RecordStore) -> Self {
        Self { store }
    }

    /// Attempts to claim `batch_id`.
    ///
    /// [`ClaimOutcome::Duplicate`] is a normal outcome, not an error; store
    /// failures propagate as `StoreFailure`.
    pub async fn claim(&self, batch_id: &BatchId) -> PayrollResult<ClaimOutcome> {
        let outcome = self.store.claim(batch_id).await?;
        match outcome {
            ClaimOutcome::Claimed => info!(batch_id = %batch_id, "claimed time report batch"),
            ClaimOutcome::Duplicate => warn!(batch_id = %batch_id, "time report batch already processed"),
        }
        Ok(outcome)
    }
}
