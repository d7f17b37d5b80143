//! Use case for resolving the current position.

use std::sync::Arc;

use tracing::{info, info_span, Instrument};

use dd_core::capability::{Capability, CapabilityRequest};
use dd_core::config::LocationConfig;
use dd_core::error::{CapabilityError, CapabilityResult};
use dd_core::geo::GeoFix;
use dd_core::ports::GeolocationPort;

use crate::gate::PermissionGate;
use crate::invoker::CapabilityInvoker;

/// Gate, then one bounded fix attempt. A fix attempt can hang
/// indefinitely, so the configured timeout is always applied.
pub struct Locate {
    geolocation: Arc<dyn GeolocationPort>,
    gate: Arc<PermissionGate>,
    invoker: Arc<CapabilityInvoker>,
    config: LocationConfig,
}

impl Locate {
    pub fn new(
        geolocation: Arc<dyn GeolocationPort>,
        gate: Arc<PermissionGate>,
        invoker: Arc<CapabilityInvoker>,
        config: LocationConfig,
    ) -> Self {
        Self {
            geolocation,
            gate,
            invoker,
            config,
        }
    }

    /// `Ok(None)` when the provider completed without a position.
    pub async fn execute(&self) -> CapabilityResult<Option<GeoFix>> {
        let span = info_span!("usecase.locate.execute");

        async {
            let state = self.gate.ensure(Capability::Location).await?;
            if !state.is_granted() {
                return Err(CapabilityError::PermissionDenied {
                    capability: Capability::Location,
                });
            }

            let request = CapabilityRequest::new(Capability::Location)
                .with_accuracy(self.config.accuracy)
                .with_timeout(self.config.timeout());

            let fix = self
                .invoker
                .invoke(&request, || {
                    self.geolocation.current_fix(self.config.accuracy)
                })
                .await?;

            if let Some(fix) = &fix {
                info!(latitude = fix.latitude, longitude = fix.longitude, "fix resolved");
            }
            Ok(fix)
        }
        .instrument(span)
        .await
    }
}
