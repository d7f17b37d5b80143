//! Provider ports.
//!
//! Each port is the narrow interface one external capability provider is
//! consumed through. Adapters live outside this crate; the coordinator
//! never sees anything richer than these traits.

mod clock;
mod compass;
mod config_store;
mod contacts;
mod device_info;
mod dialer;
mod errors;
mod geolocation;
mod materializer;
mod media;
mod notifications;
mod permission;
mod screen_sink;
mod transient;

pub use clock::ClockPort;
pub use compass::CompassPort;
pub use config_store::ConfigStorePort;
pub use contacts::ContactsPort;
pub use device_info::{ConnectivityPort, DeviceInfoPort};
pub use dialer::DialerPort;
pub use errors::ProviderFault;
pub use geolocation::GeolocationPort;
pub use materializer::ResourceMaterializerPort;
pub use media::MediaPickerPort;
pub use notifications::NotificationPort;
pub use permission::PermissionPort;
pub use screen_sink::ScreenSinkPort;
pub use transient::{TransientByteStream, TransientReadPort};
