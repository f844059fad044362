//! Pay settings configuration.
//!
//! This module provides loading of pay settings from YAML files.

mod loader;
mod types;

pub use loader::SettingsLoader;
pub use types::{DEFAULT_HOURLY_RATE, PaySettings};
