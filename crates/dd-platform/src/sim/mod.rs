//! Simulated capability providers.
//!
//! One adapter per port, scriptable from the outside: the demo shell
//! runs against these, and the integration tests use them to drive the
//! coordinator through every outcome a real host can produce.

pub mod compass;
pub mod contacts;
pub mod device;
pub mod dialer;
pub mod geolocation;
pub mod media;
pub mod notifications;
pub mod permission;

pub use compass::SimCompass;
pub use contacts::SimContacts;
pub use device::{SimConnectivity, SimDeviceInfo};
pub use dialer::SimDialer;
pub use geolocation::SimGeolocation;
pub use media::SimMediaLibrary;
pub use notifications::SimNotifications;
pub use permission::SimPermissions;
