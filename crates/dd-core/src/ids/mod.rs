//! Identifier newtypes.

mod id_macro;
mod schedule_id;
mod subscription_token;

pub use schedule_id::ScheduleId;
pub use subscription_token::SubscriptionToken;

pub(crate) use id_macro::impl_id;
