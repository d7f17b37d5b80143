use async_trait::async_trait;

use crate::contact::PhoneNumber;

use super::ProviderFault;

/// Port for the host phone dialer.
///
/// `open` does not place the call; it opens the host dial surface with
/// the number prefilled.
#[async_trait]
pub trait DialerPort: Send + Sync {
    fn is_supported(&self) -> bool;

    async fn open(&self, number: &PhoneNumber) -> Result<(), ProviderFault>;
}
