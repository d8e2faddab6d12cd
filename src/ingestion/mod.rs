//! Time report ingestion.
//!
//! The write path: extract the batch id from the file name, claim it through
//! the [`IdempotencyGuard`], then validate rows in order and persist each one.
//!
//! Rows are persisted as they validate. A malformed row stops the scan but
//! does not roll back rows already stored, and the batch id stays claimed;
//! the returned error reports how many rows were persisted.

mod filename;
mod guard;
mod parser;

pub use filename::parse_batch_id;
pub use guard::IdempotencyGuard;
pub use parser::{
    MAX_PUNCH_HOURS, ParsedRow, TIME_REPORT_DATE_FORMAT, TIME_REPORT_FIELD_COUNT,
    TimeReportRows, parse_record,
};

use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::error::{PayrollError, PayrollResult};
use crate::models::BatchId;
use crate::store::{ClaimOutcome, RecordStore};

/// Result of a fully ingested batch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IngestSummary {
    /// The batch that was ingested.
    pub batch_id: BatchId,
    /// Number of punch rows persisted.
    pub rows_ingested: usize,
}

/// Ingests one uploaded time report.
///
/// # Errors
///
/// - `InvalidFilename` if `filename` is not `time-report-<digits>.csv`
/// - `DuplicateBatch` if the batch was claimed before; nothing is read or stored
/// - `MalformedRow` at the first bad row, after earlier rows were persisted
/// - `StoreFailure` if the store fails at any point
pub async fn ingest_batch(
    store: &dyn RecordStore,
    filename: &str,
    content: &[u8],
) -> PayrollResult<IngestSummary> {
    let batch_id = parse_batch_id(filename)?;
    info!(batch_id = %batch_id, bytes = content.len(), "processing time report");

    if IdempotencyGuard::new(store).claim(&batch_id).await? == ClaimOutcome::Duplicate {
        return Err(PayrollError::DuplicateBatch {
            batch_id: batch_id.to_string(),
        });
    }

    let mut rows_ingested = 0;
    for row in TimeReportRows::new(content) {
        let punch = match row.outcome {
            Ok(punch) => punch,
            Err(kind) => {
                warn!(
                    batch_id = %batch_id,
                    line = row.line,
                    rows_persisted = rows_ingested,
                    error = %kind,
                    "malformed time report row"
                );
                return Err(PayrollError::MalformedRow {
                    batch_id: batch_id.to_string(),
                    line: row.line,
                    rows_persisted: rows_ingested,
                    kind,
                });
            }
        };

        debug!(batch_id = %batch_id, line = row.line, ?punch, "read time report row");
        store.insert(&batch_id, &punch).await?;
        rows_ingested += 1;
    }

    info!(batch_id = %batch_id, rows_ingested, "time report processed");
    Ok(IngestSummary {
        batch_id,
        rows_ingested,
    })
}
