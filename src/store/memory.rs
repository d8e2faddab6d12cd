//! In-memory RecordStore implementation.

use std::collections::{BTreeSet, HashSet};
use std::sync::atomic::{AtomicBool, Ordering};

use async_trait::async_trait;
use chrono::NaiveDate;
use tokio::sync::RwLock;

use super::{ClaimOutcome, RecordStore, StoreError, StoreResult};
use crate::models::{BatchId, PayPeriod, PunchRecord, WorkMonth};

/// A stored punch with the batch that created it.
#[derive(Debug, Clone)]
struct StoredPunch {
    batch_id: BatchId,
    punch: PunchRecord,
}

/// Record store that keeps everything in process memory.
///
/// Contents are lost when the store is dropped.
#[derive(Debug, Default)]
pub struct MemoryRecordStore {
    ledger: RwLock<HashSet<BatchId>>,
    punches: RwLock<Vec<StoredPunch>>,
    unavailable: AtomicBool,
}

impl MemoryRecordStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// When set, every operation fails with [`StoreError::Unavailable`].
    pub fn set_unavailable(&self, unavailable: bool) {
        self.unavailable.store(unavailable, Ordering::SeqCst);
    }

    /// Number of punches stored for `batch_id`.
    pub async fn punch_count(&self, batch_id: &BatchId) -> usize {
        self.punches
            .read()
            .await
            .iter()
            .filter(|stored| &stored.batch_id == batch_id)
            .count()
    }

    fn check_available(&self) -> StoreResult<()> {
        if self.unavailable.load(Ordering::SeqCst) {
            return Err(StoreError::Unavailable);
        }
        Ok(())
    }
}

#[async_trait]
impl RecordStore for MemoryRecordStore {
    async fn claim(&self, batch_id: &BatchId) -> StoreResult<ClaimOutcome> {
        self.check_available()?;
        if self.ledger.write().await.insert(batch_id.clone()) {
            Ok(ClaimOutcome::Claimed)
        } else {
            Ok(ClaimOutcome::Duplicate)
        }
    }

    async fn insert(&self, batch_id: &BatchId, punch: &PunchRecord) -> StoreResult<()> {
        self.check_available()?;
        self.punches.write().await.push(StoredPunch {
            batch_id: batch_id.clone(),
            punch: punch.clone(),
        });
        Ok(())
    }

    async fn distinct_work_months(&self) -> StoreResult<Vec<WorkMonth>> {
        self.check_available()?;
        let punches = self.punches.read().await;
        let months: BTreeSet<WorkMonth> = punches
            .iter()
            .filter_map(|stored| WorkMonth::containing(stored.punch.work_date))
            .collect();
        Ok(months.into_iter().collect())
    }

    async fn punches_in_range(
        &self,
        start: NaiveDate,
        end: NaiveDate,
    ) -> StoreResult<Vec<PunchRecord>> {
        self.check_available()?;
        let punches = self.punches.read().await;
        let range = PayPeriod {
            start_date: start,
            end_date: end,
        };
        let mut matching: Vec<PunchRecord> = punches
            .iter()
            .filter(|stored| range.contains_date(stored.punch.work_date))
            .map(|stored| stored.punch.clone())
            .collect();
        // Stable sort keeps insertion order within one employee.
        matching.sort_by_key(|punch| punch.employee_id);
        Ok(matching)
    }
}
