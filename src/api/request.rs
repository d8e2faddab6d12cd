//! Request extraction for the payroll API.
//!
//! `POST /timereport` takes a `multipart/form-data` body whose file part is
//! named `timereport`; the part's file name carries the batch id.

use axum::body::Bytes;
use axum::extract::Multipart;
use tracing::debug;

use crate::error::{PayrollError, PayrollResult};

/// Multipart field holding the uploaded time report.
pub const TIME_REPORT_FIELD: &str = "timereport";

/// An uploaded time report file.
#[derive(Debug, Clone)]
pub struct TimeReportUpload {
    /// The client-supplied file name.
    pub filename: String,
    /// The raw file content.
    pub content: Bytes,
}

impl TimeReportUpload {
    /// Reads the `timereport` file part out of a multipart body.
    ///
    /// Other parts are skipped.
    ///
    /// # Errors
    ///
    /// Returns `MissingUpload` if the body cannot be read (including when it
    /// exceeds the upload limit), if no `timereport` part is present, or if
    /// that part has no file name.
    pub async fn from_multipart(mut multipart: Multipart) -> PayrollResult<Self> {
        while let Some(field) = multipart.next_field().await.map_err(missing_upload)? {
            if field.name() != Some(TIME_REPORT_FIELD) {
                debug!(field = ?field.name(), "skipping multipart field");
                continue;
            }

            let filename = field
                .file_name()
                .map(str::to_string)
                .ok_or_else(|| PayrollError::MissingUpload {
                    message: format!("field '{}' has no file name", TIME_REPORT_FIELD),
                })?;
            let content = field.bytes().await.map_err(missing_upload)?;

            return Ok(Self { filename, content });
        }

        Err(PayrollError::MissingUpload {
            message: format!("no '{}' file in request", TIME_REPORT_FIELD),
        })
    }
}

fn missing_upload(err: impl std::fmt::Display) -> PayrollError {
    PayrollError::MissingUpload {
        message: err.to_string(),
    }
}
