//! The single screen's handlers.
//!
//! `DeviceScreen` composes the gate, the invoker, the use cases, the
//! session and the compass lifecycle, and posts projected patches to the
//! screen sink. Handlers never surface errors to their caller: every
//! outcome, good or bad, becomes a patch.

use std::sync::Arc;

use chrono::Duration;
use tokio::sync::Mutex;
use tracing::warn;

use dd_core::config::AppConfig;
use dd_core::ports::{
    ClockPort, CompassPort, ConnectivityPort, ContactsPort, DeviceInfoPort, DialerPort,
    GeolocationPort, MediaPickerPort, NotificationPort, PermissionPort, ResourceMaterializerPort,
    ScreenSinkPort,
};
use dd_core::resource::MaterializedResource;
use dd_core::screen::{projection, ScreenSession};

use crate::gate::PermissionGate;
use crate::invoker::CapabilityInvoker;
use crate::subscription::CompassLifecycle;
use crate::usecases::{
    CapturePhoto, DialSelected, Locate, PickContact, PickPhoto, RefreshOverview, ScheduleReminder,
};

/// Everything the screen needs. The struct is the dependency manifest:
/// all ports must be provided, no defaults, no optionals.
pub struct DeviceScreenDeps {
    pub permissions: Arc<dyn PermissionPort>,
    pub device_info: Arc<dyn DeviceInfoPort>,
    pub connectivity: Arc<dyn ConnectivityPort>,
    pub geolocation: Arc<dyn GeolocationPort>,
    pub media: Arc<dyn MediaPickerPort>,
    pub materializer: Arc<dyn ResourceMaterializerPort>,
    pub contacts: Arc<dyn ContactsPort>,
    pub dialer: Arc<dyn DialerPort>,
    pub notifications: Arc<dyn NotificationPort>,
    pub compass: Arc<dyn CompassPort>,
    pub clock: Arc<dyn ClockPort>,
    pub screen_sink: Arc<dyn ScreenSinkPort>,
    pub config: AppConfig,
}

pub struct DeviceScreen {
    session: Mutex<ScreenSession>,
    sink: Arc<dyn ScreenSinkPort>,
    device_name: Option<String>,
    overview: RefreshOverview,
    locate: Locate,
    pick_photo: PickPhoto,
    capture_photo: CapturePhoto,
    pick_contact: PickContact,
    dial: DialSelected,
    reminder: ScheduleReminder,
    compass: CompassLifecycle,
}

impl DeviceScreen {
    pub fn new(deps: DeviceScreenDeps) -> Self {
        let gate = Arc::new(PermissionGate::new(Arc::clone(&deps.permissions)));
        let invoker = Arc::new(CapabilityInvoker::new(Arc::clone(&deps.permissions)));

        Self {
            session: Mutex::new(ScreenSession::new()),
            sink: Arc::clone(&deps.screen_sink),
            device_name: deps.config.device_name.clone(),
            overview: RefreshOverview::new(
                deps.device_info,
                deps.connectivity,
                Arc::clone(&invoker),
            ),
            locate: Locate::new(
                deps.geolocation,
                Arc::clone(&gate),
                Arc::clone(&invoker),
                deps.config.location.clone(),
            ),
            pick_photo: PickPhoto::new(
                Arc::clone(&deps.media),
                Arc::clone(&deps.materializer),
                Arc::clone(&gate),
                Arc::clone(&invoker),
            ),
            capture_photo: CapturePhoto::new(
                deps.media,
                deps.materializer,
                Arc::clone(&gate),
                Arc::clone(&invoker),
            ),
            pick_contact: PickContact::new(deps.contacts, Arc::clone(&gate), Arc::clone(&invoker)),
            dial: DialSelected::new(deps.dialer, Arc::clone(&invoker)),
            reminder: ScheduleReminder::new(deps.notifications, deps.clock, gate, invoker),
            compass: CompassLifecycle::new(
                deps.compass,
                deps.screen_sink,
                deps.config.compass.sampling_interval(),
            ),
        }
    }

    /// Screen became visible: load the overview and start the compass.
    pub async fn on_appearing(&self) {
        match self.overview.execute().await {
            Ok((profile, network)) => self.sink.post(projection::device_overview(
                self.device_name.as_deref(),
                &profile,
                &network,
            )),
            Err(error) => warn!(error = %error, "overview refresh failed"),
        }

        if let Err(error) = self.compass.on_screen_shown().await {
            self.sink.post(projection::compass_failed(&error));
        }
    }

    /// Screen went away: stop the compass. Idempotent.
    pub async fn on_disappearing(&self) {
        self.compass.on_screen_hidden().await;
    }

    pub async fn locate_clicked(&self) {
        let outcome = self.locate.execute().await;
        self.sink.post(projection::location_resolved(&outcome));
    }

    pub async fn pick_photo_clicked(&self) {
        match self.pick_photo.execute().await {
            // Dismissed picker: nothing changes, share keeps its state.
            Ok(None) => {}
            Ok(Some(resource)) => {
                self.sink.post(projection::photo_ready(&resource));
                self.session.lock().await.keep_photo(resource);
            }
            Err(error) => self.sink.post(projection::photo_failed(&error)),
        }
    }

    pub async fn capture_photo_clicked(&self) {
        match self.capture_photo.execute().await {
            Ok(None) => {}
            Ok(Some(resource)) => {
                self.sink.post(projection::photo_ready(&resource));
                self.session.lock().await.keep_photo(resource);
            }
            Err(error) => self.sink.post(projection::photo_failed(&error)),
        }
    }

    pub async fn pick_contact_clicked(&self) {
        match self.pick_contact.execute().await {
            Ok(None) => {}
            Ok(Some(contact)) => {
                self.sink.post(projection::contact_selected(&contact));
                self.session.lock().await.select_contact(contact);
            }
            Err(error) => self.sink.post(projection::contact_failed(&error)),
        }
    }

    pub async fn dial_clicked(&self) {
        let session = self.session.lock().await;
        let outcome = self.dial.execute(session.selected_contact()).await;
        self.sink.post(projection::dial_feedback(&outcome));
    }

    pub async fn reminder_clicked(&self, title: &str, body: &str, delay: Duration) {
        let outcome = self.reminder.execute(title, body, delay).await;
        self.sink.post(projection::reminder_feedback(&outcome));
    }

    /// The share action reads the durable copy; never set before a
    /// materialization fully completed.
    pub async fn last_photo(&self) -> Option<MaterializedResource> {
        self.session.lock().await.last_photo().cloned()
    }
}
