//! Per-screen session state.

use crate::contact::SelectedContact;
use crate::resource::MaterializedResource;

/// The one piece of state that outlives individual flows: the current
/// selections. Scoped to a screen instance, not the process; each field
/// has a single writing flow and a single reading flow.
#[derive(Debug, Default)]
pub struct ScreenSession {
    selected_contact: Option<SelectedContact>,
    last_photo: Option<MaterializedResource>,
}

impl ScreenSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// Written only by the contact-selection flow.
    pub fn select_contact(&mut self, contact: SelectedContact) {
        self.selected_contact = Some(contact);
    }

    /// Read only by the dial flow.
    pub fn selected_contact(&self) -> Option<&SelectedContact> {
        self.selected_contact.as_ref()
    }

    /// Written only by the photo flows, and only with a fully
    /// materialized resource.
    pub fn keep_photo(&mut self, resource: MaterializedResource) {
        self.last_photo = Some(resource);
    }

    pub fn last_photo(&self) -> Option<&MaterializedResource> {
        self.last_photo.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::contact::PhoneNumber;

    #[test]
    fn selections_replace_wholesale() {
        let mut session = ScreenSession::new();
        session.select_contact(SelectedContact::new("Ada", vec![PhoneNumber::from("+1")]));
        session.select_contact(SelectedContact::new("Grace", vec![]));
        assert_eq!(session.selected_contact().unwrap().display_name, "Grace");
    }

    #[test]
    fn session_starts_empty() {
        let session = ScreenSession::new();
        assert!(session.selected_contact().is_none());
        assert!(session.last_photo().is_none());
    }
}
