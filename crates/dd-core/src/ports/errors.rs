use thiserror::Error;

/// The uniform fault a provider adapter may raise.
///
/// Adapters do not classify; the invoker maps these onto the capability
/// outcome taxonomy.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ProviderFault {
    /// The capability is absent on this hardware.
    #[error("not supported")]
    NotSupported,

    /// The user declined mid-flow, or the host revoked access.
    #[error("access denied")]
    AccessDenied,

    /// Anything else: I/O error, provider exception, misconfiguration.
    #[error("{0}")]
    Failed(String),
}

impl ProviderFault {
    pub fn failed(reason: impl Into<String>) -> Self {
        ProviderFault::Failed(reason.into())
    }
}
