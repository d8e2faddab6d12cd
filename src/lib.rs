//! Payroll engine for batch-uploaded time reports
//!
//! This crate ingests `time-report-<id>.csv` uploads exactly once per id,
//! stores the punches they contain and computes a half-monthly payroll
//! report from everything stored so far.

#![warn(missing_docs)]

pub mod api;
pub mod bootstrap;
pub mod calculation;
pub mod config;
pub mod error;
pub mod ingestion;
pub mod models;
pub mod store;
