//! The screen's visible state and the patches that mutate it.
//!
//! Patches are produced by the projection layer and applied in delivery
//! order on the single UI-affine context. The model is what the rendering
//! layer reads.

use serde::{Deserialize, Serialize};

/// Labels of the device/network overview section.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OverviewLabels {
    pub device_name: String,
    pub model: String,
    pub manufacturer: String,
    pub os_version: String,
    pub device_kind: String,
    pub network_access: String,
    pub connection: String,
}

/// One self-contained mutation of the screen model.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ScreenPatch {
    Overview { labels: OverviewLabels },
    Location { label: String },
    Photo { label: String, share_enabled: bool },
    Contact { label: String, dial_enabled: bool },
    Dialer { label: String },
    Reminder { label: String },
    Heading { label: String },
}

/// Everything the single screen renders.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScreenModel {
    pub overview: OverviewLabels,
    pub location: String,
    pub photo: String,
    pub share_enabled: bool,
    pub contact: String,
    pub dial_enabled: bool,
    pub dialer: String,
    pub reminder: String,
    pub heading: String,
}

impl Default for ScreenModel {
    fn default() -> Self {
        Self {
            overview: OverviewLabels::default(),
            location: "Location unknown".to_string(),
            photo: "No photo selected".to_string(),
            share_enabled: false,
            contact: "No contact selected".to_string(),
            dial_enabled: false,
            dialer: String::new(),
            reminder: "Notification permission required".to_string(),
            heading: "Compass inactive".to_string(),
        }
    }
}

impl ScreenModel {
    pub fn apply(&mut self, patch: ScreenPatch) {
        #[cfg(feature = "tracing")]
        tracing::trace!(patch = ?patch, "apply screen patch");

        match patch {
            ScreenPatch::Overview { labels } => self.overview = labels,
            ScreenPatch::Location { label } => self.location = label,
            ScreenPatch::Photo {
                label,
                share_enabled,
            } => {
                self.photo = label;
                self.share_enabled = share_enabled;
            }
            ScreenPatch::Contact {
                label,
                dial_enabled,
            } => {
                self.contact = label;
                self.dial_enabled = dial_enabled;
            }
            ScreenPatch::Dialer { label } => self.dialer = label,
            ScreenPatch::Reminder { label } => self.reminder = label,
            ScreenPatch::Heading { label } => self.heading = label,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn patches_mutate_only_their_section() {
        let mut model = ScreenModel::default();
        model.apply(ScreenPatch::Contact {
            label: "Contact: Ada".into(),
            dial_enabled: true,
        });
        model.apply(ScreenPatch::Location {
            label: "Latitude: 50".into(),
        });

        assert_eq!(model.contact, "Contact: Ada");
        assert!(model.dial_enabled);
        assert_eq!(model.location, "Latitude: 50");
        assert!(!model.share_enabled, "photo section untouched");
    }
}
