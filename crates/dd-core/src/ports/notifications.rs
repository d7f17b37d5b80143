use async_trait::async_trait;

use crate::notification::NotificationSchedule;

use super::ProviderFault;

/// Port for the host local-notification scheduler.
#[async_trait]
pub trait NotificationPort: Send + Sync {
    async fn schedule(&self, schedule: &NotificationSchedule) -> Result<(), ProviderFault>;
}
