//! Device and connectivity snapshots.

use std::fmt::{self, Display};

use serde::{Deserialize, Serialize};

/// Hardware/platform information for the device the app runs on.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeviceProfile {
    pub model: String,
    pub manufacturer: String,
    pub os_version: String,
    pub kind: DeviceKind,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DeviceKind {
    Phone,
    Tablet,
    Desktop,
    Virtual,
    Unknown,
}

impl Display for DeviceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DeviceKind::Phone => write!(f, "phone"),
            DeviceKind::Tablet => write!(f, "tablet"),
            DeviceKind::Desktop => write!(f, "desktop"),
            DeviceKind::Virtual => write!(f, "virtual"),
            DeviceKind::Unknown => write!(f, "unknown"),
        }
    }
}

/// Network reachability at the time of the query.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NetworkAccess {
    Internet,
    Local,
    ConstrainedInternet,
    None,
    Unknown,
}

impl Display for NetworkAccess {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NetworkAccess::Internet => write!(f, "internet"),
            NetworkAccess::Local => write!(f, "local"),
            NetworkAccess::ConstrainedInternet => write!(f, "constrained internet"),
            NetworkAccess::None => write!(f, "none"),
            NetworkAccess::Unknown => write!(f, "unknown"),
        }
    }
}

/// An active connection path. Several can be active at once.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConnectionProfile {
    Wifi,
    Cellular,
    Ethernet,
    Bluetooth,
}

impl Display for ConnectionProfile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConnectionProfile::Wifi => write!(f, "wifi"),
            ConnectionProfile::Cellular => write!(f, "cellular"),
            ConnectionProfile::Ethernet => write!(f, "ethernet"),
            ConnectionProfile::Bluetooth => write!(f, "bluetooth"),
        }
    }
}

/// Snapshot of network access plus the profiles carrying it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NetworkStatus {
    pub access: NetworkAccess,
    pub profiles: Vec<ConnectionProfile>,
}

impl NetworkStatus {
    pub fn offline() -> Self {
        Self {
            access: NetworkAccess::None,
            profiles: Vec::new(),
        }
    }

    pub fn has_internet(&self) -> bool {
        matches!(self.access, NetworkAccess::Internet)
    }

    /// Comma-joined profile names, or `None` when the device is offline.
    pub fn profiles_label(&self) -> Option<String> {
        if !self.has_internet() || self.profiles.is_empty() {
            return None;
        }
        Some(
            self.profiles
                .iter()
                .map(|p| p.to_string())
                .collect::<Vec<_>>()
                .join(", "),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn profiles_label_joins_active_profiles() {
        let status = NetworkStatus {
            access: NetworkAccess::Internet,
            profiles: vec![ConnectionProfile::Wifi, ConnectionProfile::Cellular],
        };
        assert_eq!(status.profiles_label().as_deref(), Some("wifi, cellular"));
    }

    #[test]
    fn profiles_label_is_none_when_offline() {
        assert_eq!(NetworkStatus::offline().profiles_label(), None);
    }
}
