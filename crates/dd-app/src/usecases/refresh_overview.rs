//! Use case for refreshing the device/network overview.

use std::sync::Arc;

use tracing::{info_span, Instrument};

use dd_core::capability::{Capability, CapabilityRequest};
use dd_core::device::{DeviceProfile, NetworkStatus};
use dd_core::error::CapabilityResult;
use dd_core::ports::{ConnectivityPort, DeviceInfoPort};

use crate::invoker::CapabilityInvoker;

/// Loads the device profile and the current network snapshot. Neither
/// query needs a grant; both still go through the invoker so their faults
/// are classified like everything else.
pub struct RefreshOverview {
    device_info: Arc<dyn DeviceInfoPort>,
    connectivity: Arc<dyn ConnectivityPort>,
    invoker: Arc<CapabilityInvoker>,
}

impl RefreshOverview {
    pub fn new(
        device_info: Arc<dyn DeviceInfoPort>,
        connectivity: Arc<dyn ConnectivityPort>,
        invoker: Arc<CapabilityInvoker>,
    ) -> Self {
        Self {
            device_info,
            connectivity,
            invoker,
        }
    }

    pub async fn execute(&self) -> CapabilityResult<(DeviceProfile, NetworkStatus)> {
        let span = info_span!("usecase.refresh_overview.execute");

        async {
            let profile = self
                .invoker
                .invoke(&CapabilityRequest::new(Capability::DeviceInfo), || {
                    self.device_info.profile()
                })
                .await?;

            let network = self
                .invoker
                .invoke(&CapabilityRequest::new(Capability::Connectivity), || {
                    self.connectivity.status()
                })
                .await?;

            Ok((profile, network))
        }
        .instrument(span)
        .await
    }
}
