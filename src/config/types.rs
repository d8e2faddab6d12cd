//! Configuration types for the payroll service.
//!
//! This module contains the strongly-typed configuration structures that
//! are deserialized from the YAML configuration file. Every field has a
//! default, so an empty file yields a working local configuration.

use serde::Deserialize;
use std::path::PathBuf;

/// Default address the HTTP server binds to.
pub const DEFAULT_LISTEN_ADDR: &str = "127.0.0.1:8081";

/// Default upper bound on an uploaded request body, in bytes.
pub const DEFAULT_MAX_UPLOAD_BYTES: usize = 10_000_000;

/// Default location of the SQLite database file.
pub const DEFAULT_STORAGE_PATH: &str = "data/payroll.db";

/// Top-level service configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PayrollConfig {
    /// HTTP server settings.
    pub server: ServerConfig,
    /// Record store settings.
    pub storage: StorageConfig,
    /// Logging settings.
    pub logging: LoggingConfig,
}

/// HTTP server settings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ServerConfig {
    /// Socket address to listen on, e.g. `0.0.0.0:8081`.
    pub listen_addr: String,
    /// Maximum accepted request body size in bytes.
    pub max_upload_bytes: usize,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            listen_addr: DEFAULT_LISTEN_ADDR.to_string(),
            max_upload_bytes: DEFAULT_MAX_UPLOAD_BYTES,
        }
    }
}

/// Which record store backs the service.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StorageKind {
    /// Durable SQLite database at [`StorageConfig::path`].
    #[default]
    Sqlite,
    /// In-process store; contents are lost on restart.
    Memory,
}

/// Record store settings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct StorageConfig {
    /// The store implementation.
    pub kind: StorageKind,
    /// Database file path; ignored by the memory store.
    pub path: PathBuf,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            kind: StorageKind::default(),
            path: PathBuf::from(DEFAULT_STORAGE_PATH),
        }
    }
}

/// Logging settings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LoggingConfig {
    /// A `tracing_subscriber` filter directive such as `payroll_engine=debug`.
    ///
    /// The `PAYROLL_LOG` environment variable takes precedence.
    pub filter: Option<String>,
}
