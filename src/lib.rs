//! DeviceDeck shell: bootstrap and the scripted demo run.

pub mod bootstrap;
pub mod demo;
