//! Process bootstrap helpers shared by the server binary and its tests.

use std::sync::Arc;

use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use tracing::info;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::{StorageConfig, StorageKind};
use crate::error::PayrollResult;
use crate::store::{MemoryRecordStore, RecordStore, SqliteRecordStore, StoreError};

/// Environment variable holding a log filter directive.
pub const LOG_FILTER_ENV: &str = "PAYROLL_LOG";

/// Builds the log filter: `PAYROLL_LOG`, else `configured`, else `info`.
pub fn log_filter(configured: Option<&str>) -> EnvFilter {
    EnvFilter::try_from_env(LOG_FILTER_ENV)
        .or_else(|_| EnvFilter::try_new(configured.unwrap_or("info")))
        .unwrap_or_else(|_| EnvFilter::new("info"))
}

/// Initialize tracing with the filter from [`log_filter`].
pub fn init_tracing(configured: Option<&str>) {
    tracing_subscriber::registry()
        .with(log_filter(configured))
        .with(tracing_subscriber::fmt::layer())
        .init();
}

/// Opens the record store named by `config`.
///
/// The SQLite file and its parent directory are created if missing, and the
/// schema is initialized before the store is returned.
pub async fn open_store(config: &StorageConfig) -> PayrollResult<Arc<dyn RecordStore>> {
    match config.kind {
        StorageKind::Memory => {
            info!("using in-memory record store");
            Ok(Arc::new(MemoryRecordStore::new()))
        }
        StorageKind::Sqlite => {
            if let Some(parent) = config.path.parent().filter(|p| !p.as_os_str().is_empty()) {
                std::fs::create_dir_all(parent)
                    .map_err(|e| StoreError::Database(sqlx::Error::Io(e)))?;
            }

            let options = SqliteConnectOptions::new()
                .filename(&config.path)
                .create_if_missing(true);
            let pool = SqlitePoolOptions::new()
                .connect_with(options)
                .await
                .map_err(StoreError::from)?;

            let store = SqliteRecordStore::new(pool);
            store.init_schema().await?;
            info!(path = %config.path.display(), "using SQLite record store");
            Ok(Arc::new(store))
        }
    }
}
