//! The one generic invoke wrapper.
//!
//! Every capability flow funnels its single provider call through
//! [`CapabilityInvoker::invoke`], which applies the same policy
//! everywhere instead of per-handler duplicated error handling:
//! permission re-verification, an optional bounded wait, and uniform
//! fault classification.

use std::future::Future;
use std::sync::Arc;

use tracing::{debug, debug_span, Instrument};

use dd_core::capability::CapabilityRequest;
use dd_core::error::{CapabilityError, CapabilityResult};
use dd_core::ports::{PermissionPort, ProviderFault};

pub struct CapabilityInvoker {
    permissions: Arc<dyn PermissionPort>,
}

impl CapabilityInvoker {
    pub fn new(permissions: Arc<dyn PermissionPort>) -> Self {
        Self { permissions }
    }

    /// Perform exactly one provider call for `request`.
    ///
    /// The gate normally runs before this; permission is re-verified here
    /// regardless, so a flow that skipped the gate gets `PermissionDenied`
    /// back instead of reaching the provider. The caller's re-click is the
    /// retry mechanism; nothing is retried here.
    pub async fn invoke<T, Fut>(
        &self,
        request: &CapabilityRequest,
        op: impl FnOnce() -> Fut,
    ) -> CapabilityResult<T>
    where
        Fut: Future<Output = Result<T, ProviderFault>>,
    {
        let capability = request.capability;
        let span = debug_span!("invoker.invoke", capability = %capability);

        async {
            if capability.requires_permission() {
                let state = self
                    .permissions
                    .check(capability)
                    .await
                    .map_err(|fault| CapabilityError::from_fault(capability, fault))?;
                if !state.is_granted() {
                    debug!(state = ?state, "blocked before provider call");
                    return Err(CapabilityError::PermissionDenied { capability });
                }
            }

            let outcome = match request.timeout {
                Some(limit) => match tokio::time::timeout(limit, op()).await {
                    Ok(outcome) => outcome,
                    Err(_) => {
                        return Err(CapabilityError::Timeout {
                            capability,
                            waited: limit,
                        })
                    }
                },
                None => op().await,
            };

            outcome.map_err(|fault| CapabilityError::from_fault(capability, fault))
        }
        .instrument(span)
        .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use dd_core::capability::{Capability, PermissionState};
    use std::sync::atomic::{AtomicBool, Ordering};
    use std::time::Duration;

    struct FixedPermissions(PermissionState);

    #[async_trait]
    impl PermissionPort for FixedPermissions {
        async fn check(&self, _capability: Capability) -> Result<PermissionState, ProviderFault> {
            Ok(self.0)
        }

        async fn request(&self, _capability: Capability) -> Result<PermissionState, ProviderFault> {
            Ok(self.0)
        }
    }

    #[tokio::test]
    async fn denied_permission_blocks_the_provider_call() {
        let invoker = CapabilityInvoker::new(Arc::new(FixedPermissions(PermissionState::Denied)));
        let provider_called = AtomicBool::new(false);

        let request = CapabilityRequest::new(Capability::Location);
        let outcome: CapabilityResult<u8> = invoker
            .invoke(&request, || async {
                provider_called.store(true, Ordering::SeqCst);
                Ok(1)
            })
            .await;

        assert!(matches!(
            outcome,
            Err(CapabilityError::PermissionDenied {
                capability: Capability::Location
            })
        ));
        assert!(
            !provider_called.load(Ordering::SeqCst),
            "the provider must not be reached without a grant"
        );
    }

    #[tokio::test]
    async fn open_capability_skips_the_permission_check() {
        let invoker = CapabilityInvoker::new(Arc::new(FixedPermissions(PermissionState::Denied)));

        let request = CapabilityRequest::new(Capability::DeviceInfo);
        let outcome: CapabilityResult<u8> = invoker.invoke(&request, || async { Ok(7) }).await;

        assert_eq!(outcome.unwrap(), 7);
    }

    #[tokio::test(start_paused = true)]
    async fn exceeding_the_bound_yields_timeout() {
        let invoker = CapabilityInvoker::new(Arc::new(FixedPermissions(PermissionState::Granted)));

        let request = CapabilityRequest::new(Capability::Location)
            .with_timeout(Duration::from_secs(10));
        let outcome: CapabilityResult<u8> = invoker
            .invoke(&request, || async {
                tokio::time::sleep(Duration::from_secs(60)).await;
                Ok(1)
            })
            .await;

        assert!(matches!(
            outcome,
            Err(CapabilityError::Timeout {
                capability: Capability::Location,
                waited,
            }) if waited == Duration::from_secs(10)
        ));
    }

    #[tokio::test]
    async fn provider_faults_are_classified() {
        let invoker = CapabilityInvoker::new(Arc::new(FixedPermissions(PermissionState::Granted)));

        let request = CapabilityRequest::new(Capability::Photo);
        let outcome: CapabilityResult<u8> = invoker
            .invoke(&request, || async { Err(ProviderFault::NotSupported) })
            .await;

        assert!(matches!(
            outcome,
            Err(CapabilityError::Unavailable {
                capability: Capability::Photo
            })
        ));
    }
}
