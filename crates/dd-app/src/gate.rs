//! Permission gate.

use std::sync::Arc;

use tracing::{debug, info_span, Instrument};

use dd_core::capability::{Capability, PermissionState};
use dd_core::error::{CapabilityError, CapabilityResult};
use dd_core::ports::PermissionPort;

/// Checks and, when absent, requests authorization for a capability.
///
/// # Behavior
/// - Already granted: returns immediately, no prompt.
/// - Not granted: issues exactly one prompt through the provider and
///   returns whatever state the user left behind.
/// - Provider fault: surfaces as a failure, never as a silent denial.
pub struct PermissionGate {
    permissions: Arc<dyn PermissionPort>,
}

impl PermissionGate {
    pub fn new(permissions: Arc<dyn PermissionPort>) -> Self {
        Self { permissions }
    }

    pub async fn ensure(&self, capability: Capability) -> CapabilityResult<PermissionState> {
        let span = info_span!("gate.ensure", capability = %capability);

        async {
            if !capability.requires_permission() {
                return Ok(PermissionState::Granted);
            }

            let current = self
                .permissions
                .check(capability)
                .await
                .map_err(|fault| CapabilityError::from_fault(capability, fault))?;

            if current.is_granted() {
                return Ok(current);
            }

            debug!(state = ?current, "permission absent, prompting once");
            let prompted = self
                .permissions
                .request(capability)
                .await
                .map_err(|fault| CapabilityError::from_fault(capability, fault))?;

            Ok(prompted)
        }
        .instrument(span)
        .await
    }
}
