//! One use case per capability flow.

pub mod capture_photo;
pub mod dial_selected;
pub mod locate;
pub mod pick_contact;
pub mod pick_photo;
pub mod refresh_overview;
pub mod schedule_reminder;

pub use capture_photo::CapturePhoto;
pub use dial_selected::DialSelected;
pub use locate::Locate;
pub use pick_contact::PickContact;
pub use pick_photo::PickPhoto;
pub use refresh_overview::RefreshOverview;
pub use schedule_reminder::ScheduleReminder;
