//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading the service
//! configuration from a YAML file.

use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{PayrollError, PayrollResult};

use super::types::PayrollConfig;

/// Environment variable naming an alternative configuration file.
pub const CONFIG_PATH_ENV: &str = "PAYROLL_CONFIG";

/// Configuration file read when [`CONFIG_PATH_ENV`] is unset.
pub const DEFAULT_CONFIG_PATH: &str = "./config/payroll.yaml";

/// Loads and provides access to the service configuration.
///
/// # Example
///
/// ```no_run
/// use payroll_engine::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/payroll.yaml")?;
/// println!("Listening on {}", loader.config().server.listen_addr);
/// # Ok::<(), payroll_engine::error::PayrollError>(())
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    path: PathBuf,
    config: PayrollConfig,
}

impl ConfigLoader {
    /// Loads configuration from the file at `path`.
    ///
    /// # Errors
    ///
    /// - `ConfigNotFound` if the file cannot be read
    /// - `ConfigParseError` if the file is not valid configuration YAML
    pub fn load<P: AsRef<Path>>(path: P) -> PayrollResult<Self> {
        let path = path.as_ref();
        let config = Self::load_yaml::<PayrollConfig>(path)?;
        Ok(Self {
            path: path.to_path_buf(),
            config,
        })
    }

    /// Loads from `PAYROLL_CONFIG` if set, else from the default path.
    ///
    /// A missing file at the default path is not an error: the built-in
    /// defaults are used instead. A missing file named explicitly through the
    /// environment is reported as `ConfigNotFound`.
    pub fn from_env() -> PayrollResult<Self> {
        match env::var(CONFIG_PATH_ENV) {
            Ok(path) => Self::load(path),
            Err(_) => {
                let path = Path::new(DEFAULT_CONFIG_PATH);
                if path.exists() {
                    Self::load(path)
                } else {
                    Ok(Self::defaults())
                }
            }
        }
    }

    /// The built-in configuration, not backed by any file.
    pub fn defaults() -> Self {
        Self {
            path: PathBuf::from(DEFAULT_CONFIG_PATH),
            config: PayrollConfig::default(),
        }
    }

    /// Parses configuration from YAML text.
    pub fn from_yaml_str(content: &str) -> PayrollResult<Self> {
        let config = serde_yaml::from_str(content).map_err(|e| PayrollError::ConfigParseError {
            path: "<inline>".to_string(),
            message: e.to_string(),
        })?;
        Ok(Self {
            path: PathBuf::from("<inline>"),
            config,
        })
    }

    /// Loads and parses a YAML file.
    fn load_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> PayrollResult<T> {
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| PayrollError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        // An empty document means "all defaults".
        if content.trim().is_empty() {
            return serde_yaml::from_str("{}").map_err(|e| PayrollError::ConfigParseError {
                path: path_str,
                message: e.to_string(),
            });
        }

        serde_yaml::from_str(&content).map_err(|e| PayrollError::ConfigParseError {
            path: path_str,
            message: e.to_string(),
        })
    }

    /// Returns the loaded configuration.
    pub fn config(&self) -> &PayrollConfig {
        &self.config
    }

    /// Consumes the loader, returning the configuration.
    pub fn into_config(self) -> PayrollConfig {
        self.config
    }

    /// The file the configuration came from.
    pub fn path(&self) -> &Path {
        &self.path
    }
}
