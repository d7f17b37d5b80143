//! Scriptable geolocation provider.

use std::sync::Mutex;
use std::time::Duration;

use async_trait::async_trait;
use chrono::Utc;

use dd_core::capability::GeoAccuracy;
use dd_core::geo::GeoFix;
use dd_core::ports::{GeolocationPort, ProviderFault};

pub struct SimGeolocation {
    fix: Mutex<Option<(f64, f64)>>,
    fault: Mutex<Option<ProviderFault>>,
    /// Artificial resolution delay; lets tests exercise the bounded wait.
    delay: Mutex<Duration>,
}

impl SimGeolocation {
    /// Resolves to the given coordinates without delay.
    pub fn at(latitude: f64, longitude: f64) -> Self {
        Self {
            fix: Mutex::new(Some((latitude, longitude))),
            fault: Mutex::new(None),
            delay: Mutex::new(Duration::ZERO),
        }
    }

    /// Completes without a position.
    pub fn without_fix() -> Self {
        Self {
            fix: Mutex::new(None),
            fault: Mutex::new(None),
            delay: Mutex::new(Duration::ZERO),
        }
    }

    pub fn fail_with(&self, fault: ProviderFault) {
        *self.fault.lock().unwrap() = Some(fault);
    }

    /// Keep completing, but without a position.
    pub fn clear_fix(&self) {
        *self.fix.lock().unwrap() = None;
    }

    pub fn take(&self, delay: Duration) {
        *self.delay.lock().unwrap() = delay;
    }
}

#[async_trait]
impl GeolocationPort for SimGeolocation {
    async fn current_fix(&self, _accuracy: GeoAccuracy) -> Result<Option<GeoFix>, ProviderFault> {
        let delay = *self.delay.lock().unwrap();
        if !delay.is_zero() {
            tokio::time::sleep(delay).await;
        }
        if let Some(fault) = self.fault.lock().unwrap().clone() {
            return Err(fault);
        }
        Ok(self
            .fix
            .lock()
            .unwrap()
            .map(|(latitude, longitude)| GeoFix::new(latitude, longitude, Utc::now())))
    }
}
