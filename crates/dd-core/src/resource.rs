//! Transient and materialized resources.
//!
//! Hosts hand pickers' results out as short-lived handles into
//! provider-owned storage. Before anything else may depend on such a
//! result it is materialized: copied in full into application-owned
//! storage, yielding a durable reference.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// A short-lived, provider-owned resource handle, e.g. the temporary file
/// a photo picker returns. Bytes are reachable only through
/// [`crate::ports::TransientReadPort`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransientResource {
    /// File name suggested by the provider.
    pub file_name: String,
    /// Provider-side location of the bytes. Opaque to the application;
    /// not valid beyond the current invocation.
    pub location: PathBuf,
}

impl TransientResource {
    pub fn new(file_name: impl Into<String>, location: impl Into<PathBuf>) -> Self {
        Self {
            file_name: file_name.into(),
            location: location.into(),
        }
    }
}

/// A durable, application-owned copy of a transient resource.
///
/// Only ever constructed after the copy fully completed; dependent actions
/// (sharing, display) must never see a partially written resource. Lives
/// until replaced or the session ends.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MaterializedResource {
    /// Path inside the application's private storage.
    pub path: PathBuf,
    pub byte_len: u64,
    /// Display name, carried over from the transient handle.
    pub file_name: String,
}

impl MaterializedResource {
    pub fn new(path: impl Into<PathBuf>, byte_len: u64, file_name: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            byte_len,
            file_name: file_name.into(),
        }
    }
}
