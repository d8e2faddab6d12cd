//! Response types for the payroll API.
//!
//! This module defines the JSON bodies returned by both endpoints and the
//! mapping from [`PayrollError`] to an HTTP status and error body.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::calculation::format_amount;
use crate::error::{PayrollError, PayrollResult};
use crate::ingestion::IngestSummary;
use crate::models::{EmployeeEarning, PayrollReport};

/// API error response structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiError {
    /// Error code for programmatic handling.
    pub code: String,
    /// Human-readable error message.
    pub message: String,
    /// Optional details about the error.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl ApiError {
    /// Creates a new API error.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: None,
        }
    }

    /// Creates a new API error with details.
    pub fn with_details(
        code: impl Into<String>,
        message: impl Into<String>,
        details: impl Into<String>,
    ) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: Some(details.into()),
        }
    }
}

/// API error with HTTP status code.
#[derive(Debug)]
pub struct ApiErrorResponse {
    /// The HTTP status code.
    pub status: StatusCode,
    /// The error body.
    pub error: ApiError,
}

impl IntoResponse for ApiErrorResponse {
    fn into_response(self) -> Response {
        (self.status, Json(self.error)).into_response()
    }
}

impl From<PayrollError> for ApiErrorResponse {
    fn from(error: PayrollError) -> Self {
        let message = error.to_string();
        match error {
            PayrollError::ConfigNotFound { .. } | PayrollError::ConfigParseError { .. } => {
                ApiErrorResponse {
                    status: StatusCode::INTERNAL_SERVER_ERROR,
                    error: ApiError::with_details("CONFIG_ERROR", "Configuration error", message),
                }
            }
            PayrollError::InvalidRequestMethod { .. } => ApiErrorResponse {
                status: StatusCode::METHOD_NOT_ALLOWED,
                error: ApiError::new("INVALID_REQUEST_METHOD", message),
            },
            PayrollError::MissingUpload { .. } => ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error: ApiError::new("MISSING_UPLOAD", message),
            },
            PayrollError::InvalidFilename { .. } => ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error: ApiError::with_details(
                    "INVALID_FILENAME",
                    message,
                    "Time report files must be named time-report-<digits>.csv",
                ),
            },
            PayrollError::DuplicateBatch { .. } => ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error: ApiError::new("DUPLICATE_BATCH", message),
            },
            PayrollError::MalformedRow { rows_persisted, .. } => ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error: ApiError::with_details(
                    "MALFORMED_ROW",
                    message,
                    format!(
                        "{} earlier row(s) were stored and the batch id remains claimed",
                        rows_persisted
                    ),
                ),
            },
            PayrollError::CalculationError { .. } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details("CALCULATION_ERROR", "Calculation failed", message),
            },
            PayrollError::StoreFailure(_) => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details("STORE_ERROR", "Record store failure", message),
            },
        }
    }
}

/// Body returned after a time report is ingested.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IngestResponse {
    /// The ingested batch id.
    pub batch_id: String,
    /// Number of rows stored.
    pub rows_ingested: usize,
    /// Human-readable confirmation.
    pub message: String,
}

impl From<IngestSummary> for IngestResponse {
    fn from(summary: IngestSummary) -> Self {
        Self {
            message: format!("Time Report ID [{}] processed successfully", summary.batch_id),
            batch_id: summary.batch_id.to_string(),
            rows_ingested: summary.rows_ingested,
        }
    }
}

/// Body of `GET /payrollreport`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PayrollReportResponse {
    /// One entry per employee per pay period, in report order.
    pub employee_reports: Vec<EmployeeReport>,
}

/// One employee's pay for one pay period.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeReport {
    /// The employee's id.
    pub employee_id: u32,
    /// The pay period covered.
    pub pay_period: PayPeriodResponse,
    /// Amount paid, formatted as `$<n>.<dd>`.
    pub amount_paid: String,
}

/// Pay period bounds, serialized as `YYYY-MM-DD`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PayPeriodResponse {
    /// First day of the period.
    pub start_date: NaiveDate,
    /// Last day of the period.
    pub end_date: NaiveDate,
}

impl TryFrom<&EmployeeEarning> for EmployeeReport {
    type Error = PayrollError;

    fn try_from(earning: &EmployeeEarning) -> PayrollResult<Self> {
        let amount = earning
            .amount
            .ok_or_else(|| PayrollError::CalculationError {
                message: format!(
                    "no amount computed for employee {} in period starting {}",
                    earning.employee_id, earning.pay_period.start_date
                ),
            })?;
        Ok(Self {
            employee_id: earning.employee_id,
            pay_period: PayPeriodResponse {
                start_date: earning.pay_period.start_date,
                end_date: earning.pay_period.end_date,
            },
            amount_paid: format_amount(amount),
        })
    }
}

impl TryFrom<&PayrollReport> for PayrollReportResponse {
    type Error = PayrollError;

    fn try_from(report: &PayrollReport) -> PayrollResult<Self> {
        let employee_reports = report
            .earnings
            .iter()
            .map(EmployeeReport::try_from)
            .collect::<PayrollResult<Vec<_>>>()?;
        Ok(Self { employee_reports })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::RowErrorKind;
    use crate::models::{BatchId, JobGroup, PayPeriod};
    use crate::store::StoreError;
    use rust_decimal::Decimal;

    fn period() -> PayPeriod {
        PayPeriod {
            start_date: NaiveDate::from_ymd_opt(2020, 1, 1).unwrap(),
            end_date: NaiveDate::from_ymd_opt(2020, 1, 15).unwrap(),
        }
    }

    #[test]
    fn test_api_error_serialization() {
        let error = ApiError::new("TEST_ERROR", "Test message");
        let json = serde_json::to_string(&error).unwrap();
        assert!(json.contains("\"code\":\"TEST_ERROR\""));
        assert!(json.contains("\"message\":\"Test message\""));
        assert!(!json.contains("details"));
    }

    #[test]
    fn test_status_mapping() {
        let cases: Vec<(PayrollError, StatusCode, &str)> = vec![
            (
                PayrollError::InvalidRequestMethod {
                    method: "PUT".to_string(),
                },
                StatusCode::METHOD_NOT_ALLOWED,
                "INVALID_REQUEST_METHOD",
            ),
            (
                PayrollError::MissingUpload {
                    message: "no file".to_string(),
                },
                StatusCode::BAD_REQUEST,
                "MISSING_UPLOAD",
            ),
            (
                PayrollError::InvalidFilename {
                    filename: "foo.csv".to_string(),
                },
                StatusCode::BAD_REQUEST,
                "INVALID_FILENAME",
            ),
            (
                PayrollError::DuplicateBatch {
                    batch_id: "10".to_string(),
                },
                StatusCode::BAD_REQUEST,
                "DUPLICATE_BATCH",
            ),
            (
                StoreError::Unavailable.into(),
                StatusCode::INTERNAL_SERVER_ERROR,
                "STORE_ERROR",
            ),
            (
                PayrollError::ConfigNotFound {
                    path: "/x".to_string(),
                },
                StatusCode::INTERNAL_SERVER_ERROR,
                "CONFIG_ERROR",
            ),
        ];

        for (error, status, code) in cases {
            let response: ApiErrorResponse = error.into();
            assert_eq!(response.status, status);
            assert_eq!(response.error.code, code);
        }
    }

    #[test]
    fn test_malformed_row_details_report_persisted_rows() {
        let response: ApiErrorResponse = PayrollError::MalformedRow {
            batch_id: "7".to_string(),
            line: 5,
            rows_persisted: 3,
            kind: RowErrorKind::InvalidHours {
                value: "x".to_string(),
            },
        }
        .into();

        assert_eq!(response.status, StatusCode::BAD_REQUEST);
        assert_eq!(response.error.message, "Time report 7 line 5: invalid hours 'x'");
        assert!(response.error.details.unwrap().starts_with("3 earlier row(s)"));
    }

    #[test]
    fn test_ingest_response_message() {
        let response = IngestResponse::from(IngestSummary {
            batch_id: BatchId::new("42"),
            rows_ingested: 3,
        });
        assert_eq!(response.message, "Time Report ID [42] processed successfully");

        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["batchId"], "42");
        assert_eq!(json["rowsIngested"], 3);
    }

    #[test]
    fn test_report_serializes_to_wire_shape() {
        let mut earning = EmployeeEarning::stub(1, period(), Decimal::new(14, 0), JobGroup::A);
        earning.amount = Some(Decimal::new(280, 0));
        let report = PayrollReport {
            earnings: vec![earning],
        };

        let response = PayrollReportResponse::try_from(&report).unwrap();
        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "employeeReports": [{
                    "employeeId": 1,
                    "payPeriod": {"startDate": "2020-01-01", "endDate": "2020-01-15"},
                    "amountPaid": "$280.00"
                }]
            })
        );
    }

    #[test]
    fn test_unpriced_earning_is_a_calculation_error() {
        let earning = EmployeeEarning::stub(2, period(), Decimal::new(3, 0), JobGroup::B);
        let result = EmployeeReport::try_from(&earning);
        assert!(matches!(result, Err(PayrollError::CalculationError { .. })));

        let report = PayrollReport {
            earnings: vec![earning],
        };
        assert!(PayrollReportResponse::try_from(&report).is_err());
    }

    #[test]
    fn test_empty_report_has_empty_array() {
        let response = PayrollReportResponse::try_from(&PayrollReport::default()).unwrap();
        let json = serde_json::to_string(&response).unwrap();
        assert_eq!(json, r#"{"employeeReports":[]}"#);
    }
}
