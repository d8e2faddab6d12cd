//! Error types for the payroll engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for every condition that can end an ingestion or report request.

use thiserror::Error;

use crate::store::StoreError;

/// Why a single time-report row was rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RowErrorKind {
    /// The row did not have exactly four fields.
    #[error("expected 4 fields, found {found}")]
    InconsistentColumns {
        /// The number of fields actually present.
        found: usize,
    },

    /// The date field was not a valid `day/month/year` date.
    #[error("invalid date '{value}'")]
    InvalidDate {
        /// The raw field value.
        value: String,
    },

    /// The hours field was not a decimal between 0 and 24.
    #[error("invalid hours '{value}'")]
    InvalidHours {
        /// The raw field value.
        value: String,
    },

    /// The employee id field was not a positive integer.
    #[error("invalid employee id '{value}'")]
    InvalidEmployeeId {
        /// The raw field value.
        value: String,
    },

    /// The job group code is not one of the known groups.
    #[error("unknown job group '{value}'")]
    UnknownJobGroup {
        /// The raw field value.
        value: String,
    },

    /// The CSV reader could not decode the row at all.
    #[error("unreadable row: {message}")]
    UnreadableRow {
        /// The reader's description of the problem.
        message: String,
    },
}

/// The main error type for the payroll engine.
///
/// Client-caused conditions (`InvalidRequestMethod`, `MissingUpload`,
/// `InvalidFilename`, `DuplicateBatch`, `MalformedRow`) are surfaced as
/// client errors; `StoreFailure` and configuration problems are server errors.
///
/// # Example
///
/// ```
/// use payroll_engine::error::PayrollError;
///
/// let error = PayrollError::InvalidFilename {
///     filename: "foo.csv".to_string(),
/// };
/// assert_eq!(error.to_string(), "Invalid time report filename: foo.csv");
/// ```
#[derive(Debug, Error)]
pub enum PayrollError {
    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// The endpoint does not accept this HTTP method.
    #[error("Invalid method: {method}")]
    InvalidRequestMethod {
        /// The rejected method.
        method: String,
    },

    /// The request did not carry a readable time report upload.
    #[error("Error reading time report upload: {message}")]
    MissingUpload {
        /// What was wrong with the upload.
        message: String,
    },

    /// The uploaded file name does not match `time-report-<digits>.csv`.
    #[error("Invalid time report filename: {filename}")]
    InvalidFilename {
        /// The rejected file name.
        filename: String,
    },

    /// The batch has already been claimed by an earlier submission.
    #[error("Time report {batch_id} has already been processed")]
    DuplicateBatch {
        /// The duplicate batch identifier.
        batch_id: String,
    },

    /// A row failed validation. Rows before it remain persisted.
    #[error("Time report {batch_id} line {line}: {kind}")]
    MalformedRow {
        /// The batch being ingested.
        batch_id: String,
        /// 1-based line number within the uploaded file.
        line: u64,
        /// Rows persisted for this batch before the failing row.
        rows_persisted: usize,
        /// What was wrong with the row.
        kind: RowErrorKind,
    },

    /// Totals overflowed while aggregating hours or computing pay.
    #[error("Calculation error: {message}")]
    CalculationError {
        /// A description of the calculation error.
        message: String,
    },

    /// The record store failed.
    #[error("Record store failure: {0}")]
    StoreFailure(#[from] StoreError),
}

impl PayrollError {
    /// Returns true if the error was caused by the client's request.
    pub fn is_client_error(&self) -> bool {
        matches!(
            self,
            PayrollError::InvalidRequestMethod { .. }
                | PayrollError::MissingUpload { .. }
                | PayrollError::InvalidFilename { .. }
                | PayrollError::DuplicateBatch { .. }
                | PayrollError::MalformedRow { .. }
        )
    }
}

/// A type alias for Results that return PayrollError.
pub type PayrollResult<T> = Result<T, PayrollError>;
