//! Selected contact.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PhoneNumber(pub String);

impl PhoneNumber {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for PhoneNumber {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

/// A contact chosen through the host picker.
///
/// Written only by the contact-selection flow and read only by the dial
/// flow. Dialing requires at least one phone number; enablement gating
/// keys on [`SelectedContact::primary_number`] presence, not on the pick
/// having succeeded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectedContact {
    pub display_name: String,
    /// Ordered as the host contact store returned them.
    pub phone_numbers: Vec<PhoneNumber>,
}

impl SelectedContact {
    pub fn new(display_name: impl Into<String>, phone_numbers: Vec<PhoneNumber>) -> Self {
        Self {
            display_name: display_name.into(),
            phone_numbers,
        }
    }

    /// First number in the store's order, if any.
    pub fn primary_number(&self) -> Option<&PhoneNumber> {
        self.phone_numbers.first()
    }

    pub fn is_dialable(&self) -> bool {
        !self.phone_numbers.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn primary_number_is_the_first_in_order() {
        let contact = SelectedContact::new(
            "Ada Lovelace",
            vec![PhoneNumber::from("+44 1"), PhoneNumber::from("+44 2")],
        );
        assert_eq!(contact.primary_number().unwrap().as_str(), "+44 1");
        assert!(contact.is_dialable());
    }

    #[test]
    fn contact_without_numbers_is_not_dialable() {
        let contact = SelectedContact::new("Nameless", vec![]);
        assert!(contact.primary_number().is_none());
        assert!(!contact.is_dialable());
    }
}
