//! Use case for dialing the selected contact.

use std::sync::Arc;

use tracing::{info, info_span, Instrument};

use dd_core::capability::{Capability, CapabilityRequest};
use dd_core::contact::{PhoneNumber, SelectedContact};
use dd_core::error::{CapabilityError, CapabilityResult};
use dd_core::ports::DialerPort;

use crate::invoker::CapabilityInvoker;

/// Opens the host dial surface with the selection's first number.
///
/// Enablement gating normally keeps this unreachable without a dialable
/// selection; the invalid states are still rejected here for the race
/// between a click and a state change.
pub struct DialSelected {
    dialer: Arc<dyn DialerPort>,
    invoker: Arc<CapabilityInvoker>,
}

impl DialSelected {
    pub fn new(dialer: Arc<dyn DialerPort>, invoker: Arc<CapabilityInvoker>) -> Self {
        Self { dialer, invoker }
    }

    /// Returns the number the dialer was opened with.
    pub async fn execute(
        &self,
        selection: Option<&SelectedContact>,
    ) -> CapabilityResult<PhoneNumber> {
        let span = info_span!("usecase.dial_selected.execute");

        async {
            let contact = selection
                .ok_or_else(|| CapabilityError::invalid_state("no contact selected"))?;
            let number = contact
                .primary_number()
                .ok_or_else(|| {
                    CapabilityError::invalid_state("selected contact has no phone number")
                })?
                .clone();

            if !self.dialer.is_supported() {
                return Err(CapabilityError::Unavailable {
                    capability: Capability::Dial,
                });
            }

            let request = CapabilityRequest::new(Capability::Dial);
            self.invoker
                .invoke(&request, || self.dialer.open(&number))
                .await?;

            info!(contact = %contact.display_name, "dialer opened");
            Ok(number)
        }
        .instrument(span)
        .await
    }
}
