//! # dd-platform
//!
//! Host-side adapters for the DeviceDeck ports: filesystem
//! materialization, app directories, the TOML config store, the UI
//! dispatch channel, and the simulated capability providers the demo
//! shell and integration tests run against.

pub mod app_dirs;
pub mod clock;
pub mod config_store;
pub mod materializer;
pub mod sim;
pub mod ui;

pub use clock::SystemClock;
pub use config_store::TomlConfigStore;
pub use materializer::FsResourceMaterializer;
pub use ui::{screen_channel, ScreenHandle, ScreenLoop};
