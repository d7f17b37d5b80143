//! Geolocation fix.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A single resolved position.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeoFix {
    pub latitude: f64,
    pub longitude: f64,
    /// When the fix was resolved, provider clock.
    pub resolved_at: DateTime<Utc>,
}

impl GeoFix {
    pub fn new(latitude: f64, longitude: f64, resolved_at: DateTime<Utc>) -> Self {
        Self {
            latitude,
            longitude,
            resolved_at,
        }
    }
}
