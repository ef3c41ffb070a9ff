mod base;
mod reminder;
mod status;

pub(crate) use base::BaseClient;
pub use base::{APIError, APIErrorVariant, APIResponse};
pub use lab_reminders_api_structs::dtos::*;
pub use lab_reminders_domain::{IntervalLabel, BATCH_INTERVALS, ID};
use reminder::ReminderClient;
pub use reminder::{CreateBatchRemindersInput, CreateSingleReminderInput};
use status::StatusClient;
use std::sync::Arc;

// Domain
pub use lab_reminders_api_structs::dtos::ReminderDTO as Reminder;

/// Lab Reminders SDK
///
/// The SDK contains methods for interacting with the lab reminders server
/// API. `address` is the root url of the server, e.g. `http://localhost:5000`.
#[derive(Clone)]
pub struct LabRemindersSDK {
    pub reminder: ReminderClient,
    pub status: StatusClient,
}

impl LabRemindersSDK {
    pub fn new<T: Into<String>>(address: T) -> Self {
        let base = Arc::new(BaseClient::new(address.into()));
        let reminder = ReminderClient::new(base.clone());
        let status = StatusClient::new(base);

        Self { reminder, status }
    }
}
