//! Scriptable photo picker and camera.
//!
//! Picked photos are written as real files into a staging directory and
//! handed out as transient handles, so materialization exercises actual
//! byte streams.

use std::path::PathBuf;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;
use tokio::fs;

use dd_core::ports::{MediaPickerPort, ProviderFault, TransientByteStream, TransientReadPort};
use dd_core::resource::TransientResource;

pub struct SimMediaLibrary {
    staging_dir: PathBuf,
    /// Next pick/capture result; `None` plays a dismissed picker.
    next_photo: Mutex<Option<(String, Vec<u8>)>>,
    capture_supported: AtomicBool,
    unreadable: AtomicBool,
}

impl SimMediaLibrary {
    pub fn new(staging_dir: impl Into<PathBuf>) -> Self {
        Self {
            staging_dir: staging_dir.into(),
            next_photo: Mutex::new(None),
            capture_supported: AtomicBool::new(true),
            unreadable: AtomicBool::new(false),
        }
    }

    /// Script the photo the user will choose next.
    pub fn stage_photo(&self, file_name: impl Into<String>, bytes: Vec<u8>) {
        *self.next_photo.lock().unwrap() = Some((file_name.into(), bytes));
    }

    /// Script a dismissed picker.
    pub fn will_cancel(&self) {
        *self.next_photo.lock().unwrap() = None;
    }

    pub fn set_capture_supported(&self, supported: bool) {
        self.capture_supported.store(supported, Ordering::SeqCst);
    }

    /// Make every transient handle unreadable, for materialization
    /// failure paths.
    pub fn make_unreadable(&self) {
        self.unreadable.store(true, Ordering::SeqCst);
    }

    async fn produce(&self) -> Result<Option<TransientResource>, ProviderFault> {
        let Some((file_name, bytes)) = self.next_photo.lock().unwrap().take() else {
            return Ok(None);
        };
        fs::create_dir_all(&self.staging_dir)
            .await
            .map_err(|err| ProviderFault::failed(format!("staging dir: {err}")))?;
        let location = self.staging_dir.join(&file_name);
        fs::write(&location, &bytes)
            .await
            .map_err(|err| ProviderFault::failed(format!("staging write: {err}")))?;
        Ok(Some(TransientResource::new(file_name, location)))
    }
}

#[async_trait]
impl MediaPickerPort for SimMediaLibrary {
    async fn pick_photo(&self) -> Result<Option<TransientResource>, ProviderFault> {
        self.produce().await
    }

    async fn capture_photo(&self) -> Result<Option<TransientResource>, ProviderFault> {
        if !self.capture_supported.load(Ordering::SeqCst) {
            return Err(ProviderFault::NotSupported);
        }
        self.produce().await
    }

    fn capture_supported(&self) -> bool {
        self.capture_supported.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl TransientReadPort for SimMediaLibrary {
    async fn open_read(
        &self,
        handle: &TransientResource,
    ) -> Result<TransientByteStream, ProviderFault> {
        if self.unreadable.load(Ordering::SeqCst) {
            return Err(ProviderFault::failed("transient handle expired"));
        }
        let file = fs::File::open(&handle.location)
            .await
            .map_err(|err| ProviderFault::failed(format!("source unreadable: {err}")))?;
        Ok(Box::new(file))
    }
}
