//! # dd-core
//!
//! Core domain models and capability ports for DeviceDeck.
//!
//! This crate contains pure domain logic without any host dependencies:
//! the capability model, the outcome taxonomy, the port traits every
//! provider adapter implements, and the pure screen-state machinery.

// Public module exports
pub mod capability;
pub mod compass;
pub mod config;
pub mod contact;
pub mod device;
pub mod error;
pub mod geo;
pub mod ids;
pub mod notification;
pub mod ports;
pub mod resource;
pub mod screen;

// Re-export commonly used types at the crate root
pub use capability::{Capability, CapabilityRequest, GeoAccuracy, PermissionState};
pub use compass::CompassReading;
pub use config::AppConfig;
pub use contact::{PhoneNumber, SelectedContact};
pub use device::{ConnectionProfile, DeviceKind, DeviceProfile, NetworkAccess, NetworkStatus};
pub use error::{CapabilityError, CapabilityResult};
pub use geo::GeoFix;
pub use ids::{ScheduleId, SubscriptionToken};
pub use notification::NotificationSchedule;
pub use resource::{MaterializedResource, TransientResource};
