use serde::{Deserialize, Serialize};

use super::impl_id;

/// Identifier of a scheduled local notification.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ScheduleId(String);

impl_id!(ScheduleId);
