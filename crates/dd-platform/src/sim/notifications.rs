//! Scriptable notification scheduler.

use std::sync::Mutex;

use async_trait::async_trait;

use dd_core::notification::NotificationSchedule;
use dd_core::ports::{NotificationPort, ProviderFault};

#[derive(Default)]
pub struct SimNotifications {
    scheduled: Mutex<Vec<NotificationSchedule>>,
    fault: Mutex<Option<ProviderFault>>,
}

impl SimNotifications {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn fail_with(&self, fault: ProviderFault) {
        *self.fault.lock().unwrap() = Some(fault);
    }

    pub fn scheduled(&self) -> Vec<NotificationSchedule> {
        self.scheduled.lock().unwrap().clone()
    }

    pub fn schedule_count(&self) -> usize {
        self.scheduled.lock().unwrap().len()
    }
}

#[async_trait]
impl NotificationPort for SimNotifications {
    async fn schedule(&self, schedule: &NotificationSchedule) -> Result<(), ProviderFault> {
        if let Some(fault) = self.fault.lock().unwrap().clone() {
            return Err(fault);
        }
        self.scheduled.lock().unwrap().push(schedule.clone());
        Ok(())
    }
}
