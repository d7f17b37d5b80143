//! Local notification schedules.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{CapabilityError, CapabilityResult};
use crate::ids::ScheduleId;

/// A local notification to fire at a future point in time.
///
/// Scheduling must not be attempted unless notification permission is
/// `Granted`, re-verified immediately before each attempt.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NotificationSchedule {
    pub id: ScheduleId,
    pub title: String,
    pub body: String,
    pub trigger_at: DateTime<Utc>,
}

impl NotificationSchedule {
    /// Build a schedule, rejecting trigger times that are not in the
    /// future of `now`.
    pub fn new(
        title: impl Into<String>,
        body: impl Into<String>,
        trigger_at: DateTime<Utc>,
        now: DateTime<Utc>,
    ) -> CapabilityResult<Self> {
        if trigger_at <= now {
            return Err(CapabilityError::invalid_state(
                "notification trigger time is not in the future",
            ));
        }
        Ok(Self {
            id: ScheduleId::new(),
            title: title.into(),
            body: body.into(),
            trigger_at,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    #[test]
    fn future_trigger_is_accepted() {
        let now = Utc::now();
        let schedule =
            NotificationSchedule::new("Reminder", "drink water", now + Duration::minutes(5), now)
                .unwrap();
        assert_eq!(schedule.title, "Reminder");
    }

    #[test]
    fn past_trigger_is_rejected() {
        let now = Utc::now();
        let result =
            NotificationSchedule::new("Reminder", "too late", now - Duration::seconds(1), now);
        assert!(matches!(
            result,
            Err(CapabilityError::InvalidState { .. })
        ));
    }
}
