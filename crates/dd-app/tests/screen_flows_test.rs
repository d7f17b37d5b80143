//! End-to-end flow tests: simulated providers, real coordinator, real
//! projection, patches applied through the screen loop.

use std::sync::Arc;

use chrono::Duration as ChronoDuration;
use std::time::Duration;
use tempfile::TempDir;

use dd_app::{DeviceScreen, DeviceScreenDeps};
use dd_core::capability::{Capability, PermissionState};
use dd_core::config::AppConfig;
use dd_core::contact::{PhoneNumber, SelectedContact};
use dd_core::ports::ProviderFault;
use dd_platform::sim::{
    SimCompass, SimConnectivity, SimContacts, SimDeviceInfo, SimDialer, SimGeolocation,
    SimMediaLibrary, SimNotifications, SimPermissions,
};
use dd_platform::{screen_channel, FsResourceMaterializer, ScreenLoop, SystemClock};

struct Harness {
    permissions: Arc<SimPermissions>,
    geolocation: Arc<SimGeolocation>,
    media: Arc<SimMediaLibrary>,
    contacts: Arc<SimContacts>,
    dialer: Arc<SimDialer>,
    notifications: Arc<SimNotifications>,
    screen: DeviceScreen,
    ui: ScreenLoop,
    _staging: TempDir,
    _cache: TempDir,
}

fn harness() -> Harness {
    harness_with_config(AppConfig::default())
}

fn harness_with_config(config: AppConfig) -> Harness {
    let _ = tracing_subscriber::fmt()
        .with_env_filter("dd_app=debug")
        .with_test_writer()
        .try_init();

    let staging = TempDir::new().unwrap();
    let cache = TempDir::new().unwrap();

    let permissions = Arc::new(SimPermissions::new());
    let geolocation = Arc::new(SimGeolocation::at(50.0755, 14.4378));
    let media = Arc::new(SimMediaLibrary::new(staging.path()));
    let contacts = Arc::new(SimContacts::new());
    let dialer = Arc::new(SimDialer::new());
    let notifications = Arc::new(SimNotifications::new());
    let materializer = Arc::new(FsResourceMaterializer::new(media.clone(), cache.path()));

    let (handle, ui) = screen_channel();

    let screen = DeviceScreen::new(DeviceScreenDeps {
        permissions: permissions.clone(),
        device_info: Arc::new(SimDeviceInfo::host()),
        connectivity: Arc::new(SimConnectivity::online()),
        geolocation: geolocation.clone(),
        media: media.clone(),
        materializer,
        contacts: contacts.clone(),
        dialer: dialer.clone(),
        notifications: notifications.clone(),
        compass: Arc::new(SimCompass::new()),
        clock: Arc::new(SystemClock),
        screen_sink: handle,
        config,
    });

    Harness {
        permissions,
        geolocation,
        media,
        contacts,
        dialer,
        notifications,
        screen,
        ui,
        _staging: staging,
        _cache: cache,
    }
}

// Scenario: a denied grant, a prompt the user accepts, and a location
// that resolves; the display carries both labeled coordinates.
#[tokio::test]
async fn denied_then_granted_location_shows_labeled_coordinates() {
    let mut h = harness();
    h.permissions.deny(Capability::Location);
    h.permissions
        .answer_prompt_with(Capability::Location, PermissionState::Granted);

    h.screen.locate_clicked().await;
    h.ui.drain_queued();

    assert_eq!(h.permissions.prompt_count(Capability::Location), 1);
    assert!(h.ui.model().location.contains("Latitude: 50.0755"));
    assert!(h.ui.model().location.contains("Longitude: 14.4378"));
}

#[tokio::test]
async fn declined_location_prompt_shows_permission_text() {
    let mut h = harness();
    h.permissions
        .answer_prompt_with(Capability::Location, PermissionState::Denied);

    h.screen.locate_clicked().await;
    h.ui.drain_queued();

    assert_eq!(h.ui.model().location, "permission required for location");
}

#[tokio::test(start_paused = true)]
async fn slow_fix_times_out_instead_of_hanging() {
    let mut h = harness();
    h.permissions.grant(Capability::Location);
    h.geolocation.take(Duration::from_secs(60));

    h.screen.locate_clicked().await;
    h.ui.drain_queued();

    assert!(
        h.ui.model().location.contains("timed out"),
        "got: {}",
        h.ui.model().location
    );
}

#[tokio::test]
async fn location_without_fix_is_reported_as_undetermined() {
    let mut h = harness();
    h.permissions.grant(Capability::Location);
    h.geolocation.clear_fix();

    h.screen.locate_clicked().await;
    h.ui.drain_queued();

    assert_eq!(h.ui.model().location, "Location could not be determined.");
}

#[tokio::test]
async fn absent_location_hardware_is_reported_unavailable() {
    let mut h = harness();
    h.permissions.grant(Capability::Location);
    h.geolocation.fail_with(ProviderFault::NotSupported);

    h.screen.locate_clicked().await;
    h.ui.drain_queued();

    assert_eq!(
        h.ui.model().location,
        "location is not supported on this device"
    );
}

// Scenario: the picker returns no file; nothing is materialized and the
// share action stays disabled.
#[tokio::test]
async fn cancelled_photo_pick_leaves_share_disabled() {
    let mut h = harness();
    h.permissions.grant(Capability::Photo);
    h.media.will_cancel();

    h.screen.pick_photo_clicked().await;
    h.ui.drain_queued();

    assert!(!h.ui.model().share_enabled);
    assert_eq!(h.ui.model().photo, "No photo selected");
    assert!(h.screen.last_photo().await.is_none());
}

#[tokio::test]
async fn picked_photo_is_materialized_and_enables_share() {
    let mut h = harness();
    h.permissions.grant(Capability::Photo);
    h.media.stage_photo("cat.jpg", b"not really a jpeg".to_vec());

    h.screen.pick_photo_clicked().await;
    h.ui.drain_queued();

    assert!(h.ui.model().share_enabled);
    assert_eq!(h.ui.model().photo, "Photo: cat.jpg (17 bytes)");
    let kept = h.screen.last_photo().await.expect("durable copy kept");
    assert_eq!(kept.byte_len, 17);
}

#[tokio::test]
async fn failed_materialization_disables_share_and_keeps_no_reference() {
    let mut h = harness();
    h.permissions.grant(Capability::Photo);
    h.media.stage_photo("cat.jpg", b"payload".to_vec());
    h.screen.pick_photo_clicked().await;
    h.ui.drain_queued();
    assert!(h.ui.model().share_enabled, "precondition: share enabled");

    h.media.stage_photo("dog.jpg", b"payload".to_vec());
    h.media.make_unreadable();
    h.screen.pick_photo_clicked().await;
    h.ui.drain_queued();

    assert!(
        !h.ui.model().share_enabled,
        "a failure invalidates the prior enablement"
    );
}

#[tokio::test]
async fn capture_on_unsupported_hardware_is_unavailable() {
    let mut h = harness();
    h.permissions.grant(Capability::Photo);
    h.media.set_capture_supported(false);

    h.screen.capture_photo_clicked().await;
    h.ui.drain_queued();

    assert_eq!(h.ui.model().photo, "photo is not supported on this device");
    assert!(!h.ui.model().share_enabled);
}

#[tokio::test]
async fn contact_with_numbers_enables_dial_and_dials_the_first() {
    let mut h = harness();
    h.permissions.grant(Capability::Contact);
    h.contacts.will_return(SelectedContact::new(
        "Ada Lovelace",
        vec![PhoneNumber::from("+44 20 1"), PhoneNumber::from("+44 20 2")],
    ));

    h.screen.pick_contact_clicked().await;
    h.ui.drain_queued();

    assert!(h.ui.model().dial_enabled);
    assert!(h.ui.model().contact.contains("Number: +44 20 1"));

    h.screen.dial_clicked().await;
    h.ui.drain_queued();

    assert_eq!(
        h.dialer.opened_numbers(),
        vec![PhoneNumber::from("+44 20 1")],
        "the first number in store order is dialed"
    );
    assert_eq!(h.ui.model().dialer, "Dialer opened with +44 20 1");
}

// Enablement keys on sub-field presence: a successful pick of a contact
// with zero numbers must leave dial off.
#[tokio::test]
async fn contact_without_numbers_leaves_dial_disabled() {
    let mut h = harness();
    h.permissions.grant(Capability::Contact);
    h.contacts
        .will_return(SelectedContact::new("Nameless", vec![]));

    h.screen.pick_contact_clicked().await;
    h.ui.drain_queued();

    assert!(!h.ui.model().dial_enabled);

    // The race case: a click that slips through anyway is rejected, not
    // silently dropped.
    h.screen.dial_clicked().await;
    h.ui.drain_queued();

    assert!(h.dialer.opened_numbers().is_empty());
    assert!(h.ui.model().dialer.contains("no phone number"));
}

#[tokio::test]
async fn dialing_with_no_selection_is_an_invalid_state() {
    let mut h = harness();

    h.screen.dial_clicked().await;
    h.ui.drain_queued();

    assert_eq!(h.ui.model().dialer, "invalid state: no contact selected");
    assert!(h.dialer.opened_numbers().is_empty());
}

#[tokio::test]
async fn unsupported_dialer_is_reported_unavailable() {
    let mut h = harness();
    h.permissions.grant(Capability::Contact);
    h.contacts.will_return(SelectedContact::new(
        "Ada",
        vec![PhoneNumber::from("+1 555")],
    ));
    h.dialer.set_supported(false);

    h.screen.pick_contact_clicked().await;
    h.screen.dial_clicked().await;
    h.ui.drain_queued();

    assert_eq!(h.ui.model().dialer, "dial is not supported on this device");
}

// Scenario: the notification prompt is declined; the label stays in its
// request-permission state and no schedule call reaches the provider.
#[tokio::test]
async fn declined_notification_prompt_schedules_nothing() {
    let mut h = harness();
    h.permissions
        .answer_prompt_with(Capability::Notification, PermissionState::Denied);

    h.screen
        .reminder_clicked("Hydration", "drink water", ChronoDuration::minutes(5))
        .await;
    h.ui.drain_queued();

    assert_eq!(h.ui.model().reminder, "Notification permission required");
    assert_eq!(h.notifications.schedule_count(), 0);
}

#[tokio::test]
async fn granted_notification_is_scheduled() {
    let mut h = harness();
    h.permissions
        .answer_prompt_with(Capability::Notification, PermissionState::Granted);

    h.screen
        .reminder_clicked("Hydration", "drink water", ChronoDuration::minutes(5))
        .await;
    h.ui.drain_queued();

    assert_eq!(h.notifications.schedule_count(), 1);
    assert_eq!(h.notifications.scheduled()[0].title, "Hydration");
    assert!(h.ui.model().reminder.starts_with("Reminder scheduled for"));
}

#[tokio::test]
async fn overview_labels_populate_on_appearing() {
    let mut config = AppConfig::default();
    config.device_name = Some("lab phone".into());
    let mut h = harness_with_config(config);

    h.screen.on_appearing().await;
    h.ui.drain_queued();
    h.screen.on_disappearing().await;

    assert_eq!(h.ui.model().overview.device_name, "Device: lab phone");
    assert!(h.ui.model().overview.model.starts_with("Model: "));
    assert_eq!(
        h.ui.model().overview.network_access,
        "Internet access: internet"
    );
    assert_eq!(h.ui.model().overview.connection, "Connection: wifi");
}
