//! Application state for the payroll API.
//!
//! This module defines the shared application state that is available
//! to all request handlers.

use std::sync::Arc;

use crate::config::DEFAULT_MAX_UPLOAD_BYTES;
use crate::store::RecordStore;

/// Shared application state.
///
/// Holds the record store every handler reads from and writes to, and the
/// upload size limit applied to the router.
#[derive(Clone)]
pub struct AppState {
    store: Arc<dyn RecordStore>,
    max_upload_bytes: usize,
}

impl AppState {
    /// Creates application state over `store` with the default upload limit.
    pub fn new(store: Arc<dyn RecordStore>) -> Self {
        Self {
            store,
            max_upload_bytes: DEFAULT_MAX_UPLOAD_BYTES,
        }
    }

    /// Sets the maximum accepted request body size.
    pub fn with_max_upload_bytes(mut self, max_upload_bytes: usize) -> Self {
        self.max_upload_bytes = max_upload_bytes;
        self
    }

    /// Returns the record store.
    pub fn store(&self) -> &dyn RecordStore {
        self.store.as_ref()
    }

    /// Maximum accepted request body size in bytes.
    pub fn max_upload_bytes(&self) -> usize {
        self.max_upload_bytes
    }
}
