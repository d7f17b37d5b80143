//! Use case for choosing a photo from the gallery.

use std::sync::Arc;

use tracing::{debug, info_span, Instrument};

use dd_core::capability::{Capability, CapabilityRequest};
use dd_core::error::{CapabilityError, CapabilityResult};
use dd_core::ports::{MediaPickerPort, ResourceMaterializerPort};
use dd_core::resource::MaterializedResource;

use crate::gate::PermissionGate;
use crate::invoker::CapabilityInvoker;

/// Gate, pick, then materialize. The picker hands back a transient handle
/// into provider-owned storage; only the durable copy leaves this flow.
pub struct PickPhoto {
    media: Arc<dyn MediaPickerPort>,
    materializer: Arc<dyn ResourceMaterializerPort>,
    gate: Arc<PermissionGate>,
    invoker: Arc<CapabilityInvoker>,
}

impl PickPhoto {
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

    /// `Ok(None)` when the user dismissed the picker; nothing was
    /// materialized and nothing downstream changes.
    pub async fn execute(&self) -> CapabilityResult<Option<MaterializedResource>> {
        let span = info_span!("usecase.pick_photo.execute");

        async {
            let state = self.gate.ensure(Capability::Photo).await?;
            if !state.is_granted() {
                return Err(CapabilityError::PermissionDenied {
                    capability: Capability::Photo,
                });
            }

            let request = CapabilityRequest::new(Capability::Photo);
            let picked = self
                .invoker
                .invoke(&request, || self.media.pick_photo())
                .await?;

            let Some(transient) = picked else {
                debug!("picker dismissed without a selection");
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
