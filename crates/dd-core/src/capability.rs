//! The capability model.
//!
//! A [`Capability`] names one device feature reachable through a provider
//! adapter. A [`CapabilityRequest`] is created per invocation and carries
//! the capability-specific parameters the provider needs.

use std::fmt::{self, Display};
use std::str::FromStr;
use std::time::Duration;

use serde::{Deserialize, Serialize};

/// A discrete device feature accessed through a provider adapter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Capability {
    Location,
    Photo,
    Contact,
    Dial,
    Notification,
    Compass,
    DeviceInfo,
    Connectivity,
}

impl Capability {
    /// Whether the host requires a user-granted authorization before this
    /// capability may be touched.
    ///
    /// Dialing only opens the host dial surface with a prefilled number, so
    /// it needs no runtime grant; device info, connectivity and the compass
    /// are likewise open.
    pub fn requires_permission(&self) -> bool {
        matches!(
            self,
            Capability::Location | Capability::Photo | Capability::Contact | Capability::Notification
        )
    }
}

impl Display for Capability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Capability::Location => write!(f, "location"),
            Capability::Photo => write!(f, "photo"),
            Capability::Contact => write!(f, "contact"),
            Capability::Dial => write!(f, "dial"),
            Capability::Notification => write!(f, "notification"),
            Capability::Compass => write!(f, "compass"),
            Capability::DeviceInfo => write!(f, "device_info"),
            Capability::Connectivity => write!(f, "connectivity"),
        }
    }
}

impl FromStr for Capability {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "location" => Ok(Capability::Location),
            "photo" => Ok(Capability::Photo),
            "contact" => Ok(Capability::Contact),
            "dial" => Ok(Capability::Dial),
            "notification" => Ok(Capability::Notification),
            "compass" => Ok(Capability::Compass),
            "device_info" => Ok(Capability::DeviceInfo),
            "connectivity" => Ok(Capability::Connectivity),
            _ => Err(()),
        }
    }
}

/// Authorization state for a capability, queried fresh on every attempt.
///
/// Never cached across restarts; no component other than the permission
/// gate may assume a prior grant is still valid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PermissionState {
    Granted,
    Denied,
    Unknown,
}

impl PermissionState {
    pub fn is_granted(&self) -> bool {
        matches!(self, PermissionState::Granted)
    }
}

/// Desired geolocation accuracy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GeoAccuracy {
    Lowest,
    Low,
    Medium,
    High,
    Best,
}

impl Default for GeoAccuracy {
    fn default() -> Self {
        GeoAccuracy::Medium
    }
}

/// One capability invocation: the capability plus its parameters.
///
/// Immutable, created per invocation and discarded after completion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CapabilityRequest {
    pub capability: Capability,
    /// Desired accuracy, meaningful for geolocation only.
    pub accuracy: Option<GeoAccuracy>,
    /// Upper bound on the provider call. Required for capabilities that can
    /// hang indefinitely (a location fix); absent for interactive pickers
    /// where the user controls the wait.
    pub timeout: Option<Duration>,
}

impl CapabilityRequest {
    pub fn new(capability: Capability) -> Self {
        Self {
            capability,
            accuracy: None,
            timeout: None,
        }
    }

    pub fn with_accuracy(mut self, accuracy: GeoAccuracy) -> Self {
        self.accuracy = Some(accuracy);
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }
}
