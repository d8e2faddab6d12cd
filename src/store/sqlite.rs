//! SQLite RecordStore implementation.

use std::str::FromStr;

use async_trait::async_trait;
use chrono::NaiveDate;
use rust_decimal::Decimal;
use sqlx::sqlite::SqliteRow;
use sqlx::{Row, SqlitePool};
use tracing::debug;

use super::{ClaimOutcome, RecordStore, StoreError, StoreResult};
use crate::models::{BatchId, JobGroup, PunchRecord, WorkMonth};

/// SQLite-backed record store.
///
/// Every statement binds its values; nothing is spliced into SQL text.
pub struct SqliteRecordStore {
    pool: SqlitePool,
}

impl SqliteRecordStore {
    /// Create a new SQLite record store.
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Creates the ledger and punch tables if they do not exist.
    pub async fn init_schema(&self) -> StoreResult<()> {
        sqlx::query(
            "CREATE TABLE IF NOT EXISTS time_report (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                report_id TEXT NOT NULL UNIQUE,
                claimed_at TEXT NOT NULL
            )",
        )
        .execute(&self.pool)
        .await?;

        // Punches reference their batch but are not deleted with it.
        sqlx::query(
            "CREATE TABLE IF NOT EXISTS time_report_item (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                report_id TEXT NOT NULL,
                emp_id INTEGER NOT NULL,
                work_date TEXT NOT NULL,
                work_hours TEXT NOT NULL,
                job_group TEXT NOT NULL
            )",
        )
        .execute(&self.pool)
        .await?;

        sqlx::query(
            "CREATE INDEX IF NOT EXISTS idx_time_report_item_work_date
             ON time_report_item(work_date)",
        )
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    fn decode_punch(row: &SqliteRow) -> StoreResult<PunchRecord> {
        let emp_id: i64 = row.try_get("emp_id")?;
        let work_date: NaiveDate = row.try_get("work_date")?;
        let work_hours: String = row.try_get("work_hours")?;
        let job_group: String = row.try_get("job_group")?;

        let employee_id = u32::try_from(emp_id).map_err(|_| StoreError::CorruptRecord {
            message: format!("employee id {} out of range", emp_id),
        })?;
        let hours = Decimal::from_str(&work_hours).map_err(|e| StoreError::CorruptRecord {
            message: format!("work hours '{}': {}", work_hours, e),
        })?;
        let job_group = JobGroup::from_str(&job_group).map_err(|e| StoreError::CorruptRecord {
            message: e.to_string(),
        })?;

        Ok(PunchRecord {
            employee_id,
            work_date,
            hours,
            job_group,
        })
    }
}

#[async_trait]
impl RecordStore for SqliteRecordStore {
    async fn claim(&self, batch_id: &BatchId) -> StoreResult<ClaimOutcome> {
        let claimed_at = chrono::Utc::now().to_rfc3339();

        let result = sqlx::query("INSERT INTO time_report (report_id, claimed_at) VALUES (?1, ?2)")
            .bind(batch_id.as_str())
            .bind(claimed_at)
            .execute(&self.pool)
            .await;

        match result {
            Ok(_) => Ok(ClaimOutcome::Claimed),
            Err(sqlx::Error::Database(db_err)) if db_err.is_unique_violation() => {
                debug!(batch_id = %batch_id, "batch already claimed");
                Ok(ClaimOutcome::Duplicate)
            }
            Err(e) => Err(e.into()),
        }
    }

    async fn insert(&self, batch_id: &BatchId, punch: &PunchRecord) -> StoreResult<()> {
        sqlx::query(
            "INSERT INTO time_report_item (report_id, emp_id, work_date, work_hours, job_group)
             VALUES (?1, ?2, ?3, ?4, ?5)",
        )
        .bind(batch_id.as_str())
        .bind(i64::from(punch.employee_id))
        .bind(punch.work_date)
        .bind(punch.hours.to_string())
        .bind(punch.job_group.code())
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn distinct_work_months(&self) -> StoreResult<Vec<WorkMonth>> {
        let rows = sqlx::query(
            "SELECT DISTINCT
                CAST(strftime('%Y', work_date) AS INTEGER) AS work_year,
                CAST(strftime('%m', work_date) AS INTEGER) AS work_month
             FROM time_report_item
             ORDER BY work_year ASC, work_month ASC",
        )
        .fetch_all(&self.pool)
        .await?;

        rows.iter()
            .map(|row| -> StoreResult<WorkMonth> {
                let year: i64 = row.try_get("work_year")?;
                let month: i64 = row.try_get("work_month")?;
                i32::try_from(year)
                    .ok()
                    .zip(u32::try_from(month).ok())
                    .and_then(|(y, m)| WorkMonth::new(y, m))
                    .ok_or_else(|| StoreError::CorruptRecord {
                        message: format!("work month {}-{}", year, month),
                    })
            })
            .collect()
    }

    async fn punches_in_range(
        &self,
        start: NaiveDate,
        end: NaiveDate,
    ) -> StoreResult<Vec<PunchRecord>> {
        let rows = sqlx::query(
            "SELECT emp_id, work_date, work_hours, job_group
             FROM time_report_item
             WHERE work_date >= ?1 AND work_date <= ?2
             ORDER BY emp_id ASC, id ASC",
        )
        .bind(start)
        .bind(end)
        .fetch_all(&self.pool)
        .await?;

        rows.iter().map(Self::decode_punch).collect()
    }
}
