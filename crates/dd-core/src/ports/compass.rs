use std::time::Duration;

use async_trait::async_trait;
use tokio::sync::mpsc;

use crate::compass::CompassReading;
use crate::ids::SubscriptionToken;

use super::ProviderFault;

/// Port for the host compass sensor stream.
///
/// # Behavior
/// - `register` starts sampling at the requested interval and delivers
///   readings into `sink` from a provider-chosen execution context.
/// - `unregister` must be called with the exact token `register` returned;
///   after it resolves the provider delivers nothing further into the sink.
#[async_trait]
pub trait CompassPort: Send + Sync {
    async fn register(
        &self,
        sampling_interval: Duration,
        sink: mpsc::Sender<CompassReading>,
    ) -> Result<SubscriptionToken, ProviderFault>;

    async fn unregister(&self, token: &SubscriptionToken) -> Result<(), ProviderFault>;
}
