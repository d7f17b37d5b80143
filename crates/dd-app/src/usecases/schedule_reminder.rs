//! Use case for scheduling a local reminder notification.

use std::sync::Arc;

use chrono::Duration;
use tracing::{info, info_span, Instrument};

use dd_core::capability::{Capability, CapabilityRequest};
use dd_core::error::{CapabilityError, CapabilityResult};
use dd_core::notification::NotificationSchedule;
use dd_core::ports::{ClockPort, NotificationPort};

use crate::gate::PermissionGate;
use crate::invoker::CapabilityInvoker;

pub struct ScheduleReminder {
    notifications: Arc<dyn NotificationPort>,
    clock: Arc<dyn ClockPort>,
    gate: Arc<PermissionGate>,
    invoker: Arc<CapabilityInvoker>,
}

impl ScheduleReminder {
    pub fn new(
        notifications: Arc<dyn NotificationPort>,
        clock: Arc<dyn ClockPort>,
        gate: Arc<PermissionGate>,
        invoker: Arc<CapabilityInvoker>,
    ) -> Self {
        Self {
            notifications,
            clock,
            gate,
            invoker,
        }
    }

    pub async fn execute(
        &self,
        title: &str,
        body: &str,
        delay: Duration,
    ) -> CapabilityResult<NotificationSchedule> {
        let span = info_span!("usecase.schedule_reminder.execute");

        async {
            let state = self.gate.ensure(Capability::Notification).await?;
            if !state.is_granted() {
                return Err(CapabilityError::PermissionDenied {
                    capability: Capability::Notification,
                });
            }

            let now = self.clock.now();
            let schedule = NotificationSchedule::new(title, body, now + delay, now)?;

            // The invoker re-checks the grant immediately before the
            // provider call; the `ensure` above is not trusted to still
            // hold by the time scheduling happens.
            let request = CapabilityRequest::new(Capability::Notification);
            self.invoker
                .invoke(&request, || self.notifications.schedule(&schedule))
                .await?;

            info!(id = %schedule.id, trigger_at = %schedule.trigger_at, "reminder scheduled");
            Ok(schedule)
        }
        .instrument(span)
        .await
    }
}
