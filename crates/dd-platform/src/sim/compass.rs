//! Scriptable compass sensor.
//!
//! Readings are always delivered from a spawned task, never from the
//! caller's context, matching a real sensor whose callbacks arrive on a
//! provider-chosen thread.

use std::sync::atomic::{AtomicU64, AtomicUsize, Ordering};
use std::sync::Mutex;
use std::time::Duration;

use async_trait::async_trait;
use rand::Rng;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

use dd_core::compass::CompassReading;
use dd_core::ids::SubscriptionToken;
use dd_core::ports::{CompassPort, ProviderFault};

struct ActiveStream {
    token: SubscriptionToken,
    sink: mpsc::Sender<CompassReading>,
    emitter: Option<JoinHandle<()>>,
}

pub struct SimCompass {
    /// Emit synthetic headings at the sampling interval; off for tests
    /// that want full control over delivery.
    auto_emit: bool,
    stream: Mutex<Option<ActiveStream>>,
    unregister_calls: AtomicUsize,
    sequence: AtomicU64,
}

impl SimCompass {
    /// Manual mode: readings only flow through [`SimCompass::emit_burst`].
    pub fn new() -> Self {
        Self {
            auto_emit: false,
            stream: Mutex::new(None),
            unregister_calls: AtomicUsize::new(0),
            sequence: AtomicU64::new(0),
        }
    }

    /// Wander around a synthetic heading at the requested interval.
    pub fn with_auto_emit() -> Self {
        Self {
            auto_emit: true,
            ..Self::new()
        }
    }

    /// How many times the host was asked to stop sampling.
    pub fn unregister_calls(&self) -> usize {
        self.unregister_calls.load(Ordering::SeqCst)
    }

    pub fn is_sampling(&self) -> bool {
        self.stream.lock().unwrap().is_some()
    }

    /// Deliver the given headings in order from the provider's own task.
    ///
    /// Returns the task handle so tests can await delivery completion.
    pub fn emit_burst(&self, headings: Vec<f64>) -> JoinHandle<()> {
        let sink = self
            .stream
            .lock()
            .unwrap()
            .as_ref()
            .map(|stream| stream.sink.clone());
        let base = self
            .sequence
            .fetch_add(headings.len() as u64, Ordering::SeqCst);

        tokio::spawn(async move {
            let Some(sink) = sink else { return };
            for (offset, heading) in headings.into_iter().enumerate() {
                let reading = CompassReading::new(heading, base + offset as u64);
                if sink.send(reading).await.is_err() {
                    break;
                }
            }
        })
    }
}

impl Default for SimCompass {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl CompassPort for SimCompass {
    async fn register(
        &self,
        sampling_interval: Duration,
        sink: mpsc::Sender<CompassReading>,
    ) -> Result<SubscriptionToken, ProviderFault> {
        let mut stream = self.stream.lock().unwrap();
        if stream.is_some() {
            return Err(ProviderFault::failed("sensor already registered"));
        }

        let token = SubscriptionToken::new();
        let emitter = if self.auto_emit {
            let sink = sink.clone();
            let sequence_start = self.sequence.load(Ordering::SeqCst);
            Some(tokio::spawn(async move {
                let mut interval = tokio::time::interval(sampling_interval.max(Duration::from_millis(1)));
                let mut heading = 0.0_f64;
                let mut sequence = sequence_start;
                loop {
                    interval.tick().await;
                    heading += rand::rng().random_range(-4.0..8.0);
                    if sink
                        .send(CompassReading::new(heading, sequence))
                        .await
                        .is_err()
                    {
                        break;
                    }
                    sequence += 1;
                }
            }))
        } else {
            None
        };

        *stream = Some(ActiveStream {
            token: token.clone(),
            sink,
            emitter,
        });
        Ok(token)
    }

    async fn unregister(&self, token: &SubscriptionToken) -> Result<(), ProviderFault> {
        self.unregister_calls.fetch_add(1, Ordering::SeqCst);

        let mut stream = self.stream.lock().unwrap();
        let token_matches = stream
            .as_ref()
            .map(|active| &active.token == token)
            .unwrap_or(false);
        if !token_matches {
            return Err(ProviderFault::failed("unknown subscription token"));
        }

        if let Some(active) = stream.take() {
            if let Some(emitter) = active.emitter {
                emitter.abort();
            }
        }
        Ok(())
    }
}
