//! Configuration loading for the payroll service.
//!
//! This module loads the service configuration (listen address, upload limit,
//! record store and log filter) from a YAML file.
//!
//! # Example
//!
//! ```no_run
//! use payroll_engine::config::ConfigLoader;
//!
//! let config = ConfigLoader::from_env().unwrap().into_config();
//! println!("Storage: {:?}", config.storage.kind);
//! ```

mod loader;
mod types;

pub use loader::{CONFIG_PATH_ENV, ConfigLoader, DEFAULT_CONFIG_PATH};
pub use types::{
    DEFAULT_LISTEN_ADDR, DEFAULT_MAX_UPLOAD_BYTES, DEFAULT_STORAGE_PATH, LoggingConfig,
    PayrollConfig, ServerConfig, StorageConfig, StorageKind,
};
