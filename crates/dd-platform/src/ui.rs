//! UI dispatch channel.
//!
//! Capability flows and the sensor forwarder run wherever the runtime
//! put them; the screen model mutates only here, on the single consumer
//! side of this channel. That single consumer is the UI-affine context:
//! patches are applied strictly in delivery order.

use std::sync::Arc;

use tokio::sync::mpsc;
use tracing::trace;

use dd_core::ports::ScreenSinkPort;
use dd_core::screen::{ScreenModel, ScreenPatch};

/// Producer half, handed to every flow.
pub struct ScreenHandle {
    tx: mpsc::UnboundedSender<ScreenPatch>,
}

impl ScreenSinkPort for ScreenHandle {
    fn post(&self, patch: ScreenPatch) {
        // A closed screen drops in-flight updates: flows finish
        // fire-and-forget once their consumer is gone.
        if self.tx.send(patch).is_err() {
            trace!("screen gone, patch dropped");
        }
    }
}

/// Consumer half: owns the model, applies patches in order.
pub struct ScreenLoop {
    rx: mpsc::UnboundedReceiver<ScreenPatch>,
    model: ScreenModel,
}

impl ScreenLoop {
    pub fn model(&self) -> &ScreenModel {
        &self.model
    }

    /// Receive and apply one patch. `None` once every producer is gone.
    pub async fn apply_next(&mut self) -> Option<ScreenPatch> {
        let patch = self.rx.recv().await?;
        self.model.apply(patch.clone());
        Some(patch)
    }

    /// Apply everything already queued without waiting for more.
    pub fn drain_queued(&mut self) -> usize {
        let mut applied = 0;
        while let Ok(patch) = self.rx.try_recv() {
            self.model.apply(patch);
            applied += 1;
        }
        applied
    }
}

/// Create the dispatch pair for one screen instance.
pub fn screen_channel() -> (Arc<ScreenHandle>, ScreenLoop) {
    let (tx, rx) = mpsc::unbounded_channel();
    (
        Arc::new(ScreenHandle { tx }),
        ScreenLoop {
            rx,
            model: ScreenModel::default(),
        },
    )
}
