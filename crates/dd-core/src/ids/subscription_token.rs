use serde::{Deserialize, Serialize};

use super::impl_id;

/// Token a streaming provider hands back on registration; unregistering
/// must present the exact token that was registered.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SubscriptionToken(String);

impl_id!(SubscriptionToken);
