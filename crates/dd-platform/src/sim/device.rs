//! Device info and connectivity providers.

use std::sync::Mutex;

use async_trait::async_trait;

use dd_core::device::{
    ConnectionProfile, DeviceKind, DeviceProfile, NetworkAccess, NetworkStatus,
};
use dd_core::ports::{ConnectivityPort, DeviceInfoPort, ProviderFault};

/// Static device profile, defaulting to what the host process reports.
pub struct SimDeviceInfo {
    profile: DeviceProfile,
}

impl SimDeviceInfo {
    pub fn new(profile: DeviceProfile) -> Self {
        Self { profile }
    }

    /// Profile derived from the compile-time host triple.
    pub fn host() -> Self {
        Self::new(DeviceProfile {
            model: std::env::consts::ARCH.to_string(),
            manufacturer: "generic".to_string(),
            os_version: std::env::consts::OS.to_string(),
            kind: DeviceKind::Desktop,
        })
    }
}

#[async_trait]
impl DeviceInfoPort for SimDeviceInfo {
    async fn profile(&self) -> Result<DeviceProfile, ProviderFault> {
        Ok(self.profile.clone())
    }
}

/// Scriptable connectivity snapshot.
pub struct SimConnectivity {
    status: Mutex<NetworkStatus>,
}

impl SimConnectivity {
    pub fn online() -> Self {
        Self {
            status: Mutex::new(NetworkStatus {
                access: NetworkAccess::Internet,
                profiles: vec![ConnectionProfile::Wifi],
            }),
        }
    }

    pub fn offline() -> Self {
        Self {
            status: Mutex::new(NetworkStatus::offline()),
        }
    }

    pub fn set_status(&self, status: NetworkStatus) {
        *self.status.lock().unwrap() = status;
    }
}

#[async_trait]
impl ConnectivityPort for SimConnectivity {
    async fn status(&self) -> Result<NetworkStatus, ProviderFault> {
        Ok(self.status.lock().unwrap().clone())
    }
}
