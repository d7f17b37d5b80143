//! Compass subscription lifecycle.
//!
//! Owns the provider token and the forwarding task for the one streaming
//! capability on the screen. The pure transition function in
//! `dd_core::screen::subscription` decides when the provider is touched;
//! this type performs the touches.
//!
//! Readings arrive on whatever execution context the provider samples on.
//! They are forwarded through the screen sink, whose single consumer is
//! the UI-affine context, so projected updates land there in delivery
//! order. Teardown aborts the forwarder after unregistering, so no
//! callback survives deactivation.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::{mpsc, Mutex};
use tokio::task::JoinHandle;
use tracing::{debug, warn};

use dd_core::capability::Capability;
use dd_core::error::{CapabilityError, CapabilityResult};
use dd_core::ids::SubscriptionToken;
use dd_core::ports::{CompassPort, ScreenSinkPort};
use dd_core::screen::projection;
use dd_core::screen::subscription::{transition, SensorAction, SensorEvent, SensorState};

const READING_CHANNEL_CAPACITY: usize = 32;

struct Registration {
    token: SubscriptionToken,
    forwarder: JoinHandle<()>,
}

struct Inner {
    state: SensorState,
    registration: Option<Registration>,
}

pub struct CompassLifecycle {
    compass: Arc<dyn CompassPort>,
    screen: Arc<dyn ScreenSinkPort>,
    sampling_interval: Duration,
    inner: Mutex<Inner>,
}

impl CompassLifecycle {
    pub fn new(
        compass: Arc<dyn CompassPort>,
        screen: Arc<dyn ScreenSinkPort>,
        sampling_interval: Duration,
    ) -> Self {
        Self {
            compass,
            screen,
            sampling_interval,
            inner: Mutex::new(Inner {
                state: SensorState::Inactive,
                registration: None,
            }),
        }
    }

    /// Screen became visible: register with the provider unless a
    /// registration already exists.
    pub async fn on_screen_shown(&self) -> CapabilityResult<()> {
        let mut inner = self.inner.lock().await;

        let (next, action) = transition(inner.state, SensorEvent::ScreenShown);
        inner.state = next;
        if action != Some(SensorAction::Register) {
            debug!(state = ?inner.state, "compass registration already underway");
            return Ok(());
        }

        let (tx, mut rx) = mpsc::channel(READING_CHANNEL_CAPACITY);
        match self.compass.register(self.sampling_interval, tx).await {
            Ok(token) => {
                let screen = Arc::clone(&self.screen);
                let forwarder = tokio::spawn(async move {
                    while let Some(reading) = rx.recv().await {
                        screen.post(projection::heading_update(&reading));
                    }
                });

                let (next, _) = transition(inner.state, SensorEvent::Registered);
                inner.state = next;
                inner.registration = Some(Registration { token, forwarder });
                Ok(())
            }
            Err(fault) => {
                let (next, _) = transition(inner.state, SensorEvent::RegistrationFailed);
                inner.state = next;
                Err(CapabilityError::from_fault(Capability::Compass, fault))
            }
        }
    }

    /// Screen went away: release the provider registration.
    ///
    /// Idempotent; a second call finds the machine `Inactive` and does not
    /// reach the provider again.
    pub async fn on_screen_hidden(&self) {
        let mut inner = self.inner.lock().await;

        let (next, action) = transition(inner.state, SensorEvent::ScreenHidden);
        inner.state = next;
        if action != Some(SensorAction::Unregister) {
            return;
        }

        if let Some(Registration { token, forwarder }) = inner.registration.take() {
            if let Err(fault) = self.compass.unregister(&token).await {
                warn!(error = %fault, "compass unregister failed");
            }
            // Readings still queued behind the forwarder die with it.
            forwarder.abort();
            self.screen.post(projection::compass_inactive());
        }
    }

    pub async fn state(&self) -> SensorState {
        self.inner.lock().await.state
    }
}
