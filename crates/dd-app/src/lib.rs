//! # dd-app
//!
//! The capability coordinator: permission gate, the one generic invoke
//! wrapper, per-capability use cases, the sensor subscription lifecycle,
//! and the screen facade that composes them.

pub mod gate;
pub mod invoker;
pub mod screen;
pub mod subscription;
pub mod usecases;

pub use gate::PermissionGate;
pub use invoker::CapabilityInvoker;
pub use screen::{DeviceScreen, DeviceScreenDeps};
pub use subscription::CompassLifecycle;
