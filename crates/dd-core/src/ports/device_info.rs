use async_trait::async_trait;

use crate::device::{DeviceProfile, NetworkStatus};

use super::ProviderFault;

/// Port for static device/platform information.
#[async_trait]
pub trait DeviceInfoPort: Send + Sync {
    async fn profile(&self) -> Result<DeviceProfile, ProviderFault>;
}

/// Port for the current network reachability snapshot.
#[async_trait]
pub trait ConnectivityPort: Send + Sync {
    async fn status(&self) -> Result<NetworkStatus, ProviderFault>;
}
