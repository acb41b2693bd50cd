//! Application state for the Charge-Rate Cost Engine API.
//!
//! This module defines the shared application state that is available
//! to all request handlers.

use std::sync::Arc;

use crate::config::ConfigLoader;

/// Shared application state.
///
/// Holds the rate templates loaded at startup. Templates are read-only for
/// the lifetime of the server, so handlers share them without locking.
#[derive(Clone)]
pub struct AppState {
    /// The loaded rate templates.
    config: Arc<ConfigLoader>,
}

impl AppState {
    /// Creates a new application state with the given template loader.
    pub fn new(config: ConfigLoader) -> Self {
        Self {
            config: Arc::new(config),
        }
    }

    /// Returns a reference to the template loader.
    pub fn config(&self) -> &ConfigLoader {
        &self.config
    }
}

impl Default for AppState {
    /// State holding only the factory-default template.
    fn default() -> Self {
        Self::new(ConfigLoader::default())
    }
}
