//! Pure projection of capability outcomes onto screen patches.
//!
//! The rule table:
//!
//! | outcome | display | dependent action |
//! |---|---|---|
//! | success with usable payload | formatted payload | enabled if keyed on it |
//! | unavailable | "not supported on this device" | disabled |
//! | permission denied | permission-required text | disabled |
//! | failure | reason | disabled, invalidating prior enablement |
//!
//! Enablement is keyed on sub-field presence, not on overall success: a
//! successfully picked contact with zero numbers still leaves dial off.

use crate::compass::CompassReading;
use crate::contact::{PhoneNumber, SelectedContact};
use crate::device::{DeviceProfile, NetworkStatus};
use crate::error::{CapabilityError, CapabilityResult};
use crate::geo::GeoFix;
use crate::notification::NotificationSchedule;
use crate::resource::MaterializedResource;

use super::model::{OverviewLabels, ScreenPatch};

pub fn device_overview(
    device_name: Option<&str>,
    profile: &DeviceProfile,
    network: &NetworkStatus,
) -> ScreenPatch {
    let connection = match network.profiles_label() {
        Some(profiles) => format!("Connection: {profiles}"),
        None => "Connection: not available".to_string(),
    };
    ScreenPatch::Overview {
        labels: OverviewLabels {
            device_name: format!("Device: {}", device_name.unwrap_or("this device")),
            model: format!("Model: {}", profile.model),
            manufacturer: format!("Manufacturer: {}", profile.manufacturer),
            os_version: format!("OS version: {}", profile.os_version),
            device_kind: format!("Device type: {}", profile.kind),
            network_access: format!("Internet access: {}", network.access),
            connection,
        },
    }
}

pub fn location_resolved(outcome: &CapabilityResult<Option<GeoFix>>) -> ScreenPatch {
    let label = match outcome {
        Ok(Some(fix)) => format!(
            "Latitude: {}\nLongitude: {}",
            fix.latitude, fix.longitude
        ),
        Ok(None) => "Location could not be determined.".to_string(),
        Err(error) => error.to_string(),
    };
    ScreenPatch::Location { label }
}

/// A completed materialization enables the share action.
pub fn photo_ready(resource: &MaterializedResource) -> ScreenPatch {
    ScreenPatch::Photo {
        label: format!("Photo: {} ({} bytes)", resource.file_name, resource.byte_len),
        share_enabled: true,
    }
}

/// Any photo failure invalidates the previous selection: share goes off.
pub fn photo_failed(error: &CapabilityError) -> ScreenPatch {
    ScreenPatch::Photo {
        label: error.to_string(),
        share_enabled: false,
    }
}

/// Dial enablement keys on number presence, not on the pick succeeding.
pub fn contact_selected(contact: &SelectedContact) -> ScreenPatch {
    let number = match contact.primary_number() {
        Some(number) => number.as_str().to_string(),
        None => "none".to_string(),
    };
    ScreenPatch::Contact {
        label: format!("Contact: {}\nNumber: {}", contact.display_name, number),
        dial_enabled: contact.is_dialable(),
    }
}

pub fn contact_failed(error: &CapabilityError) -> ScreenPatch {
    ScreenPatch::Contact {
        label: error.to_string(),
        dial_enabled: false,
    }
}

pub fn dial_feedback(outcome: &CapabilityResult<PhoneNumber>) -> ScreenPatch {
    let label = match outcome {
        Ok(number) => format!("Dialer opened with {}", number.as_str()),
        Err(error) => error.to_string(),
    };
    ScreenPatch::Dialer { label }
}

pub fn reminder_feedback(outcome: &CapabilityResult<NotificationSchedule>) -> ScreenPatch {
    let label = match outcome {
        Ok(schedule) => format!(
            "Reminder scheduled for {}",
            schedule.trigger_at.format("%H:%M:%S")
        ),
        // The button stays in its request-permission state.
        Err(CapabilityError::PermissionDenied { .. }) => {
            "Notification permission required".to_string()
        }
        Err(error) => error.to_string(),
    };
    ScreenPatch::Reminder { label }
}

pub fn heading_update(reading: &CompassReading) -> ScreenPatch {
    ScreenPatch::Heading {
        label: format!("Heading: {:.0}°", reading.heading_degrees),
    }
}

pub fn compass_inactive() -> ScreenPatch {
    ScreenPatch::Heading {
        label: "Compass inactive".to_string(),
    }
}

pub fn compass_failed(error: &CapabilityError) -> ScreenPatch {
    ScreenPatch::Heading {
        label: error.to_string(),
    }
}
