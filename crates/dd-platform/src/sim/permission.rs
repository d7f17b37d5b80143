//! Scriptable permission provider.

use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;

use dd_core::capability::{Capability, PermissionState};
use dd_core::ports::{PermissionPort, ProviderFault};

/// In-memory grant table with scripted prompt answers.
///
/// Unscripted capabilities start `Unknown` and answer prompts with
/// `Denied`, mirroring a user who dismisses the system dialog.
#[derive(Default)]
pub struct SimPermissions {
    states: Mutex<HashMap<Capability, PermissionState>>,
    prompt_answers: Mutex<HashMap<Capability, PermissionState>>,
    prompt_counts: Mutex<HashMap<Capability, usize>>,
    fault: Mutex<Option<ProviderFault>>,
}

impl SimPermissions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-grant, as if the user accepted in an earlier session.
    pub fn grant(&self, capability: Capability) {
        self.states
            .lock()
            .unwrap()
            .insert(capability, PermissionState::Granted);
    }

    pub fn deny(&self, capability: Capability) {
        self.states
            .lock()
            .unwrap()
            .insert(capability, PermissionState::Denied);
    }

    /// Script what the user answers when the prompt appears.
    pub fn answer_prompt_with(&self, capability: Capability, answer: PermissionState) {
        self.prompt_answers.lock().unwrap().insert(capability, answer);
    }

    /// Make the provider itself fail, e.g. platform misconfiguration.
    pub fn fail_with(&self, fault: ProviderFault) {
        *self.fault.lock().unwrap() = Some(fault);
    }

    pub fn prompt_count(&self, capability: Capability) -> usize {
        self.prompt_counts
            .lock()
            .unwrap()
            .get(&capability)
            .copied()
            .unwrap_or(0)
    }
}

#[async_trait]
impl PermissionPort for SimPermissions {
    async fn check(&self, capability: Capability) -> Result<PermissionState, ProviderFault> {
        if let Some(fault) = self.fault.lock().unwrap().clone() {
            return Err(fault);
        }
        Ok(self
            .states
            .lock()
            .unwrap()
            .get(&capability)
            .copied()
            .unwrap_or(PermissionState::Unknown))
    }

    async fn request(&self, capability: Capability) -> Result<PermissionState, ProviderFault> {
        if let Some(fault) = self.fault.lock().unwrap().clone() {
            return Err(fault);
        }
        *self
            .prompt_counts
            .lock()
            .unwrap()
            .entry(capability)
            .or_insert(0) += 1;

        let answer = self
            .prompt_answers
            .lock()
            .unwrap()
            .get(&capability)
            .copied()
            .unwrap_or(PermissionState::Denied);
        self.states.lock().unwrap().insert(capability, answer);
        Ok(answer)
    }
}
