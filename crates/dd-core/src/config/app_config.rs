//! Application configuration domain model

use std::path::PathBuf;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::capability::GeoAccuracy;

/// Application configuration
///
/// Only the knobs the coordinator layer needs; presentation settings stay
/// with whatever shell hosts the screen.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Display name for this device, shown on the overview labels.
    pub device_name: Option<String>,

    /// Geolocation settings
    #[serde(default)]
    pub location: LocationConfig,

    /// Compass settings
    #[serde(default)]
    pub compass: CompassConfig,

    /// Storage settings
    #[serde(default)]
    pub storage: StorageConfig,
}

/// Geolocation configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LocationConfig {
    /// Desired fix accuracy.
    pub accuracy: GeoAccuracy,
    /// Upper bound on a fix attempt, in seconds. A location request can
    /// hang indefinitely without one.
    pub timeout_secs: u64,
}

impl LocationConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

/// Compass configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompassConfig {
    /// Requested sampling interval, in milliseconds.
    pub sampling_interval_ms: u64,
}

impl CompassConfig {
    pub fn sampling_interval(&self) -> Duration {
        Duration::from_millis(self.sampling_interval_ms)
    }
}

/// Storage configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StorageConfig {
    /// Override for the directory materialized resources are copied into.
    /// Defaults to the platform cache directory.
    pub cache_dir: Option<PathBuf>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            device_name: None,
            location: LocationConfig::default(),
            compass: CompassConfig::default(),
            storage: StorageConfig::default(),
        }
    }
}

impl Default for LocationConfig {
    fn default() -> Self {
        Self {
            accuracy: GeoAccuracy::Medium,
            timeout_secs: 10,
        }
    }
}

impl Default for CompassConfig {
    fn default() -> Self {
        Self {
            sampling_interval_ms: 250,
        }
    }
}
