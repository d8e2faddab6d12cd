//! HTTP API module for the payroll engine.
//!
//! This module provides the REST endpoints for uploading time reports and
//! reading the payroll report.
//!
//! - `POST /timereport`: multipart upload with a `timereport` file part
//! - `GET /payrollreport`: the full payroll report as JSON

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::{TIME_REPORT_FIELD, TimeReportUpload};
pub use response::{
    ApiError, ApiErrorResponse, EmployeeReport, IngestResponse, PayPeriodResponse,
    PayrollReportResponse,
};
pub use state::AppState;
