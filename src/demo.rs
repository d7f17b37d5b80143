//! Scripted demo run.
//!
//! Wires the simulated providers to the screen, walks every flow once
//! the way a user tapping through the app would, and prints the final
//! screen model.

use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use anyhow::Context;
use tracing::info;

use dd_app::{DeviceScreen, DeviceScreenDeps};
use dd_core::capability::{Capability, PermissionState};
use dd_core::contact::{PhoneNumber, SelectedContact};
use dd_core::ports::ConfigStorePort;
use dd_platform::sim::{
    SimCompass, SimConnectivity, SimContacts, SimDeviceInfo, SimDialer, SimGeolocation,
    SimMediaLibrary, SimNotifications, SimPermissions,
};
use dd_platform::{app_dirs, screen_channel, FsResourceMaterializer, SystemClock, TomlConfigStore};

pub async fn run(config_path: Option<PathBuf>) -> anyhow::Result<()> {
    let config_path = match config_path {
        Some(path) => path,
        None => app_dirs::config_file()?,
    };
    let config = TomlConfigStore::new(&config_path).load().await?;
    let cache_dir = app_dirs::cache_dir(config.storage.cache_dir.as_deref())?;
    info!(config = %config_path.display(), cache = %cache_dir.display(), "starting demo run");

    // A cooperative user: every prompt gets accepted.
    let permissions = Arc::new(SimPermissions::new());
    for capability in [
        Capability::Location,
        Capability::Photo,
        Capability::Contact,
        Capability::Notification,
    ] {
        permissions.answer_prompt_with(capability, PermissionState::Granted);
    }

    let media = Arc::new(SimMediaLibrary::new(
        std::env::temp_dir().join("devicedeck-staging"),
    ));
    media.stage_photo("sunset.jpg", demo_photo_bytes());

    let contacts = Arc::new(SimContacts::new());
    contacts.will_return(SelectedContact::new(
        "Ada Lovelace",
        vec![
            PhoneNumber::from("+44 20 7946 0101"),
            PhoneNumber::from("+44 20 7946 0102"),
        ],
    ));

    let dialer = Arc::new(SimDialer::new());
    let notifications = Arc::new(SimNotifications::new());
    let compass = Arc::new(SimCompass::with_auto_emit());
    let geolocation = Arc::new(SimGeolocation::at(50.0755, 14.4378));
    let materializer = Arc::new(FsResourceMaterializer::new(media.clone(), cache_dir));

    let (handle, mut ui) = screen_channel();
    let screen = DeviceScreen::new(DeviceScreenDeps {
        permissions,
        device_info: Arc::new(SimDeviceInfo::host()),
        connectivity: Arc::new(SimConnectivity::online()),
        geolocation,
        media: media.clone(),
        materializer,
        contacts,
        dialer,
        notifications,
        compass,
        clock: Arc::new(SystemClock),
        screen_sink: handle,
        config,
    });

    // The screen comes up: overview loads, the compass starts sampling.
    screen.on_appearing().await;
    tokio::time::sleep(Duration::from_millis(600)).await;

    // The user taps through every section once.
    screen.locate_clicked().await;
    screen.pick_photo_clicked().await;

    media.stage_photo("snapshot.jpg", demo_photo_bytes());
    screen.capture_photo_clicked().await;

    screen.pick_contact_clicked().await;
    screen.dial_clicked().await;
    screen
        .reminder_clicked("Hydration", "Drink some water", chrono::Duration::minutes(30))
        .await;

    // And leaves: the compass must not outlive the screen.
    screen.on_disappearing().await;

    let applied = ui.drain_queued();
    info!(patches = applied, "demo run finished");

    let rendered =
        serde_json::to_string_pretty(ui.model()).context("render screen model failed")?;
    println!("{rendered}");

    Ok(())
}

fn demo_photo_bytes() -> Vec<u8> {
    // A tiny deterministic payload; content is irrelevant to the copy.
    (0u16..512).map(|n| (n % 256) as u8).collect()
}
