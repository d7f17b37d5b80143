//! Capability outcome taxonomy.
//!
//! Every provider fault is classified into [`CapabilityError`] at the
//! invoker boundary; nothing rawer reaches the projection layer.

use std::time::Duration;

use thiserror::Error;

use crate::capability::Capability;
use crate::ports::ProviderFault;

/// Outcome of a capability invocation.
pub type CapabilityResult<T> = Result<T, CapabilityError>;

/// The classified failure of a capability invocation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CapabilityError {
    /// The capability is absent on this device.
    #[error("{capability} is not supported on this device")]
    Unavailable { capability: Capability },

    /// Authorization was withheld or revoked.
    #[error("permission required for {capability}")]
    PermissionDenied { capability: Capability },

    /// The bounded wait on the provider was exceeded.
    #[error("{capability} timed out after {waited:?}")]
    Timeout {
        capability: Capability,
        waited: Duration,
    },

    /// The provider itself failed (I/O, hardware, misconfiguration).
    #[error("{capability} failed: {reason}")]
    Provider {
        capability: Capability,
        reason: String,
    },

    /// The flow was invoked in a state it cannot act on, e.g. dialing with
    /// no selected contact. Normally prevented by enablement gating.
    #[error("invalid state: {reason}")]
    InvalidState { reason: String },
}

impl CapabilityError {
    /// Classify a raw provider fault for the given capability.
    pub fn from_fault(capability: Capability, fault: ProviderFault) -> Self {
        match fault {
            ProviderFault::NotSupported => CapabilityError::Unavailable { capability },
            ProviderFault::AccessDenied => CapabilityError::PermissionDenied { capability },
            ProviderFault::Failed(reason) => CapabilityError::Provider { capability, reason },
        }
    }

    pub fn invalid_state(reason: impl Into<String>) -> Self {
        CapabilityError::InvalidState {
            reason: reason.into(),
        }
    }
}
