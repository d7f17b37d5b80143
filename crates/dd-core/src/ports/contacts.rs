use async_trait::async_trait;

use crate::contact::SelectedContact;

use super::ProviderFault;

/// Port for the host contact picker.
#[async_trait]
pub trait ContactsPort: Send + Sync {
    /// Open the host contact picker. `Ok(None)` when the user dismisses it.
    async fn pick_contact(&self) -> Result<Option<SelectedContact>, ProviderFault>;
}
