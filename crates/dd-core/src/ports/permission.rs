use async_trait::async_trait;

use crate::capability::{Capability, PermissionState};

use super::ProviderFault;

/// Port for the host permission provider.
///
/// `check` never prompts; `request` shows the system prompt at most once
/// per call. A provider fault is a fault, not a denial.
#[async_trait]
pub trait PermissionPort: Send + Sync {
    /// Query the current grant state without prompting.
    async fn check(&self, capability: Capability) -> Result<PermissionState, ProviderFault>;

    /// Show the system permission prompt and return the resulting state.
    async fn request(&self, capability: Capability) -> Result<PermissionState, ProviderFault>;
}
