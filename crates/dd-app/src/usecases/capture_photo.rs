//! Use case for capturing a photo with the camera.

use std::sync::Arc;

use tracing::{debug, info_span, Instrument};

use dd_core::capability::{Capability, CapabilityRequest};
use dd_core::error::{CapabilityError, CapabilityResult};
use dd_core::ports::{MediaPickerPort, ResourceMaterializerPort};
use dd_core::resource::MaterializedResource;

use crate::gate::PermissionGate;
use crate::invoker::CapabilityInvoker;

/// Same shape as the gallery pick, with a capture-support check up front:
/// hardware without a camera is `Unavailable` before any prompt appears.
pub struct CapturePhoto {
    media: Arc<dyn MediaPickerPort>,
    materializer: Arc<dyn ResourceMaterializerPort>,
    gate: Arc<PermissionGate>,
    invoker: Arc<CapabilityInvoker>,
}

impl CapturePhoto {
    pub fn new(
        media: Arc<dyn MediaPickerPort>,
        materializer: Arc<dyn ResourceMaterializerPort>,
        gate: Arc<PermissionGate>,
        invoker: Arc<CapabilityInvoker>,
    ) -> Self {
        Self {
            media,
            materializer,
            gate,
            invoker,
        }
    }

    pub async fn execute(&self) -> CapabilityResult<Option<MaterializedResource>> {
        let span = info_span!("usecase.capture_photo.execute");

        async {
            if !self.media.capture_supported() {
                return Err(CapabilityError::Unavailable {
                    capability: Capability::Photo,
                });
            }

            let state = self.gate.ensure(Capability::Photo).await?;
            if !state.is_granted() {
                return Err(CapabilityError::PermissionDenied {
                    capability: Capability::Photo,
                });
            }

            let request = CapabilityRequest::new(Capability::Photo);
            let captured = self
                .invoker
                .invoke(&request, || self.media.capture_photo())
                .await?;

            let Some(transient) = captured else {
                debug!("capture abandoned");
                return Ok(None);
            };

            let resource = self
                .materializer
                .materialize(&transient)
                .await
                .map_err(|fault| CapabilityError::from_fault(Capability::Photo, fault))?;

            Ok(Some(resource))
        }
        .instrument(span)
        .await
    }
}
