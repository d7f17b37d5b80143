//! Compass readings.

use serde::{Deserialize, Serialize};

/// One magnetometer-derived heading sample.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CompassReading {
    /// Magnetic north heading in degrees, `[0, 360)`.
    pub heading_degrees: f64,
    /// Provider-assigned delivery sequence, monotonically increasing per
    /// subscription.
    pub sequence: u64,
}

impl CompassReading {
    pub fn new(heading_degrees: f64, sequence: u64) -> Self {
        Self {
            heading_degrees: heading_degrees.rem_euclid(360.0),
            sequence,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn heading_is_normalized_into_range() {
        assert_eq!(CompassReading::new(725.0, 0).heading_degrees, 5.0);
        assert_eq!(CompassReading::new(-90.0, 0).heading_degrees, 270.0);
    }
}
