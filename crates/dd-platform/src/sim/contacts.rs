//! Scriptable contact picker.

use std::sync::Mutex;

use async_trait::async_trait;

use dd_core::contact::SelectedContact;
use dd_core::ports::{ContactsPort, ProviderFault};

pub struct SimContacts {
    next: Mutex<Result<Option<SelectedContact>, ProviderFault>>,
}

impl Default for SimContacts {
    fn default() -> Self {
        Self::new()
    }
}

impl SimContacts {
    pub fn new() -> Self {
        Self {
            next: Mutex::new(Ok(None)),
        }
    }

    pub fn will_return(&self, contact: SelectedContact) {
        *self.next.lock().unwrap() = Ok(Some(contact));
    }

    pub fn will_cancel(&self) {
        *self.next.lock().unwrap() = Ok(None);
    }

    pub fn fail_with(&self, fault: ProviderFault) {
        *self.next.lock().unwrap() = Err(fault);
    }
}

#[async_trait]
impl ContactsPort for SimContacts {
    async fn pick_contact(&self) -> Result<Option<SelectedContact>, ProviderFault> {
        self.next.lock().unwrap().clone()
    }
}
