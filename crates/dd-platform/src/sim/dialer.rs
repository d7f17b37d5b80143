//! Scriptable dialer.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;

use dd_core::contact::PhoneNumber;
use dd_core::ports::{DialerPort, ProviderFault};

pub struct SimDialer {
    supported: AtomicBool,
    opened: Mutex<Vec<PhoneNumber>>,
}

impl SimDialer {
    pub fn new() -> Self {
        Self {
            supported: AtomicBool::new(true),
            opened: Mutex::new(Vec::new()),
        }
    }

    pub fn set_supported(&self, supported: bool) {
        self.supported.store(supported, Ordering::SeqCst);
    }

    /// Numbers the dial surface was opened with, in order.
    pub fn opened_numbers(&self) -> Vec<PhoneNumber> {
        self.opened.lock().unwrap().clone()
    }
}

impl Default for SimDialer {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl DialerPort for SimDialer {
    fn is_supported(&self) -> bool {
        self.supported.load(Ordering::SeqCst)
    }

    async fn open(&self, number: &PhoneNumber) -> Result<(), ProviderFault> {
        if !self.is_supported() {
            return Err(ProviderFault::NotSupported);
        }
        self.opened.lock().unwrap().push(number.clone());
        Ok(())
    }
}
