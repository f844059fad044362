//! Settings loading functionality.

use std::fs;
use std::path::Path;

use tracing::info;

use crate::error::{TimecardError, TimecardResult};

use super::types::PaySettings;

/// Loads pay settings from a YAML file.
///
/// # Example
///
/// ```no_run
/// use timecard_engine::config::SettingsLoader;
///
/// let settings = SettingsLoader::load("./config/settings.yaml")?;
/// println!("Hourly rate: ${}", settings.hourly_rate);
/// # Ok::<(), timecard_engine::error::TimecardError>(())
/// ```
pub struct SettingsLoader;

impl SettingsLoader {
    /// Loads settings from the specified path.
    ///
    /// # Errors
    ///
    /// Returns [`TimecardError::ConfigNotFound`] when the file does not
    /// exist and [`TimecardError::ConfigParseError`] when it contains
    /// invalid YAML or missing fields.
    pub fn load<P: AsRef<Path>>(path: P) -> TimecardResult<PaySettings> {
        let path = path.as_ref();
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| TimecardError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| TimecardError::ConfigParseError {
            path: path_str,
            message: e.to_string(),
        })
    }

    /// Loads settings from the specified path, falling back to
    /// [`PaySettings::default`] when the file does not exist yet.
    ///
    /// A file that exists but fails to parse is still an error; only a
    /// missing file is treated as "not configured".
    pub fn load_or_default<P: AsRef<Path>>(path: P) -> TimecardResult<PaySettings> {
        match Self::load(&path) {
            Ok(settings) => Ok(settings),
            Err(TimecardError::ConfigNotFound { path }) => {
                info!(path = %path, "No settings file; using defaults");
                Ok(PaySettings::default())
            }
            Err(e) => Err(e),
        }
    }
}
