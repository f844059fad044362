//! Application state for the timecard parsing API.
//!
//! This module defines the shared application state that is available
//! to all request handlers.

use std::sync::Arc;

use crate::config::PaySettings;

/// Shared application state.
///
/// Contains resources that are shared across all request handlers,
/// such as the loaded pay settings.
#[derive(Clone)]
pub struct AppState {
    /// The loaded pay settings.
    settings: Arc<PaySettings>,
}

impl AppState {
    /// Creates a new application state with the given pay settings.
    pub fn new(settings: PaySettings) -> Self {
        Self {
            settings: Arc::new(settings),
        }
    }

    /// Returns a reference to the pay settings.
    pub fn settings(&self) -> &PaySettings {
        &self.settings
    }
}
