use async_trait::async_trait;

use crate::capability::GeoAccuracy;
use crate::geo::GeoFix;

use super::ProviderFault;

/// Port for the host geolocation provider.
#[async_trait]
pub trait GeolocationPort: Send + Sync {
    /// Resolve the current position at the requested accuracy.
    ///
    /// `Ok(None)` means the provider completed but could not determine a
    /// position. The call may take arbitrarily long; callers bound it.
    async fn current_fix(&self, accuracy: GeoAccuracy) -> Result<Option<GeoFix>, ProviderFault>;
}
