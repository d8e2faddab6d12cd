//! HTTP request handlers for the payroll API.
//!
//! This module contains the handler functions for all API endpoints.

use std::time::Instant;

use axum::{
    Json, Router,
    extract::{DefaultBodyLimit, Multipart, State, multipart::MultipartRejection},
    http::{Method, StatusCode},
    response::{IntoResponse, Response},
    routing::{get, post},
};
use tracing::{error, info, warn};
use uuid::Uuid;

use crate::calculation::build_payroll_report;
use crate::error::{PayrollError, PayrollResult};
use crate::ingestion::ingest_batch;

use super::request::TimeReportUpload;
use super::response::{ApiErrorResponse, IngestResponse, PayrollReportResponse};
use super::state::AppState;

/// Creates the API router with all endpoints.
///
/// Each path accepts exactly one method; any other method gets a 405 with an
/// `INVALID_REQUEST_METHOD` body.
pub fn create_router(state: AppState) -> Router {
    let body_limit = DefaultBodyLimit::max(state.max_upload_bytes());
    Router::new()
        .route(
            "/timereport",
            post(time_report_handler).fallback(method_not_allowed),
        )
        .route(
            "/payrollreport",
            get(payroll_report_handler).fallback(method_not_allowed),
        )
        .layer(body_limit)
        .with_state(state)
}

/// Handler for POST /timereport.
///
/// Ingests the uploaded time report and confirms the batch id.
async fn time_report_handler(
    State(state): State<AppState>,
    multipart: Result<Multipart, MultipartRejection>,
) -> Response {
    // Generate correlation ID for request tracking
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing time report upload");

    let start_time = Instant::now();
    match ingest_upload(&state, multipart).await {
        Ok(response) => {
            info!(
                correlation_id = %correlation_id,
                batch_id = %response.batch_id,
                rows_ingested = response.rows_ingested,
                duration_us = start_time.elapsed().as_micros(),
                "Time report ingested"
            );
            (StatusCode::OK, Json(response)).into_response()
        }
        Err(err) => error_response(correlation_id, err),
    }
}

async fn ingest_upload(
    state: &AppState,
    multipart: Result<Multipart, MultipartRejection>,
) -> PayrollResult<IngestResponse> {
    let multipart = multipart.map_err(|rejection| PayrollError::MissingUpload {
        message: rejection.body_text(),
    })?;
    let upload = TimeReportUpload::from_multipart(multipart).await?;
    let summary = ingest_batch(state.store(), &upload.filename, &upload.content).await?;
    Ok(summary.into())
}

/// Handler for GET /payrollreport.
///
/// Rebuilds the full payroll report from the store on every call.
async fn payroll_report_handler(State(state): State<AppState>) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing payroll report request");

    let start_time = Instant::now();
    let result = build_payroll_report(state.store())
        .await
        .and_then(|report| PayrollReportResponse::try_from(&report));

    match result {
        Ok(response) => {
            info!(
                correlation_id = %correlation_id,
                employee_reports = response.employee_reports.len(),
                duration_us = start_time.elapsed().as_micros(),
                "Payroll report generated"
            );
            (StatusCode::OK, Json(response)).into_response()
        }
        Err(err) => error_response(correlation_id, err),
    }
}

/// Fallback for any method a route does not accept.
async fn method_not_allowed(method: Method) -> Response {
    let correlation_id = Uuid::new_v4();
    error_response(
        correlation_id,
        PayrollError::InvalidRequestMethod {
            method: method.to_string(),
        },
    )
}

fn error_response(correlation_id: Uuid, err: PayrollError) -> Response {
    if err.is_client_error() {
        warn!(correlation_id = %correlation_id, error = %err, "Request rejected");
    } else {
        error!(correlation_id = %correlation_id, error = %err, "Request failed");
    }
    ApiErrorResponse::from(err).into_response()
}
