use async_trait::async_trait;

use crate::resource::TransientResource;

use super::ProviderFault;

/// Port for the host photo picker and camera.
///
/// Both calls resolve to `Ok(None)` when the user dismisses the host UI
/// without choosing anything; that is a completed call, not a fault.
#[async_trait]
pub trait MediaPickerPort: Send + Sync {
    /// Open the gallery picker.
    async fn pick_photo(&self) -> Result<Option<TransientResource>, ProviderFault>;

    /// Open the camera and capture a photo.
    async fn capture_photo(&self) -> Result<Option<TransientResource>, ProviderFault>;

    /// Whether this device can capture photos at all.
    fn capture_supported(&self) -> bool;
}
