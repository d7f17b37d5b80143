//! Use case for choosing a contact.

use std::sync::Arc;

use tracing::{info_span, Instrument};

use dd_core::capability::{Capability, CapabilityRequest};
use dd_core::contact::SelectedContact;
use dd_core::error::{CapabilityError, CapabilityResult};
use dd_core::ports::ContactsPort;

use crate::gate::PermissionGate;
use crate::invoker::CapabilityInvoker;

pub struct PickContact {
    contacts: Arc<dyn ContactsPort>,
    gate: Arc<PermissionGate>,
    invoker: Arc<CapabilityInvoker>,
}

impl PickContact {
    pub fn new(
        contacts: Arc<dyn ContactsPort>,
        gate: Arc<PermissionGate>,
        invoker: Arc<CapabilityInvoker>,
    ) -> Self {
        Self {
            contacts,
            gate,
            invoker,
        }
    }

    /// `Ok(None)` when the user dismissed the picker.
    pub async fn execute(&self) -> CapabilityResult<Option<SelectedContact>> {
        let span = info_span!("usecase.pick_contact.execute");

        async {
            let state = self.gate.ensure(Capability::Contact).await?;
            if !state.is_granted() {
                return Err(CapabilityError::PermissionDenied {
                    capability: Capability::Contact,
                });
            }

            let request = CapabilityRequest::new(Capability::Contact);
            self.invoker
                .invoke(&request, || self.contacts.pick_contact())
                .await
        }
        .instrument(span)
        .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use mockall::mock;

    use dd_core::capability::PermissionState;
    use dd_core::contact::PhoneNumber;
    use dd_core::ports::{PermissionPort, ProviderFault};

    mock! {
        Contacts {}

        #[async_trait]
        impl ContactsPort for Contacts {
            async fn pick_contact(&self) -> Result<Option<SelectedContact>, ProviderFault>;
        }
    }

    struct Always(PermissionState);

    #[async_trait]
    impl PermissionPort for Always {
        async fn check(&self, _capability: Capability) -> Result<PermissionState, ProviderFault> {
            Ok(self.0)
        }

        async fn request(&self, _capability: Capability) -> Result<PermissionState, ProviderFault> {
            Ok(self.0)
        }
    }

    fn use_case(contacts: MockContacts, state: PermissionState) -> PickContact {
        let permissions = Arc::new(Always(state));
        PickContact::new(
            Arc::new(contacts),
            Arc::new(PermissionGate::new(permissions.clone())),
            Arc::new(CapabilityInvoker::new(permissions)),
        )
    }

    #[tokio::test]
    async fn picked_contact_is_returned() {
        let mut contacts = MockContacts::new();
        contacts.expect_pick_contact().times(1).returning(|| {
            Ok(Some(SelectedContact::new(
                "Ada",
                vec![PhoneNumber::from("+1 555")],
            )))
        });

        let picked = use_case(contacts, PermissionState::Granted)
            .execute()
            .await
            .unwrap()
            .unwrap();

        assert_eq!(picked.display_name, "Ada");
    }

    #[tokio::test]
    async fn dismissed_picker_is_not_an_error() {
        let mut contacts = MockContacts::new();
        contacts.expect_pick_contact().times(1).returning(|| Ok(None));

        let picked = use_case(contacts, PermissionState::Granted)
            .execute()
            .await
            .unwrap();

        assert!(picked.is_none());
    }

    #[tokio::test]
    async fn denied_grant_never_opens_the_picker() {
        let mut contacts = MockContacts::new();
        contacts.expect_pick_contact().times(0);

        let error = use_case(contacts, PermissionState::Denied)
            .execute()
            .await
            .unwrap_err();

        assert!(matches!(
            error,
            CapabilityError::PermissionDenied {
                capability: Capability::Contact
            }
        ));
    }
}
