use crate::dtos::ReminderDTO;
use lab_reminders_domain::{Reminder, ID};
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReminderResponse {
    pub reminder: ReminderDTO,
}

impl ReminderResponse {
    pub fn new(reminder: Reminder) -> Self {
        Self {
            reminder: ReminderDTO::new(reminder),
        }
    }
}

#[derive(Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RemindersResponse {
    pub reminders: Vec<ReminderDTO>,
}

impl RemindersResponse {
    pub fn new(reminders: Vec<Reminder>) -> Self {
        Self {
            reminders: reminders.into_iter().map(ReminderDTO::new).collect(),
        }
    }
}

pub mod create_batch_reminders {
    use super::*;

    #[derive(Debug, Deserialize, Serialize)]
    #[serde(rename_all = "camelCase")]
    pub struct RequestBody {
        pub batch: String,
        #[serde(default)]
        pub day_offset: Option<i32>,
    }

    /// Only the reminders that did not exist before
    pub type APIResponse = RemindersResponse;
}

pub mod create_single_reminder {
    use super::*;

    #[derive(Debug, Deserialize, Serialize)]
    #[serde(rename_all = "camelCase")]
    pub struct RequestBody {
        pub batch: String,
        pub interval_type: String,
        #[serde(default)]
        pub day_offset: Option<i32>,
    }

    pub type APIResponse = ReminderResponse;
}

pub mod get_reminders {
    use super::*;

    pub type APIResponse = RemindersResponse;
}

pub mod get_pending_reminders {
    use super::*;

    pub type APIResponse = RemindersResponse;
}

pub mod search_reminders {
    use super::*;

    #[derive(Debug, Deserialize, Serialize)]
    pub struct QueryParams {
        pub batch: String,
    }

    pub type APIResponse = RemindersResponse;
}

pub mod get_reminders_by_batch {
    use super::*;

    #[derive(Debug, Deserialize)]
    pub struct PathParams {
        pub batch: String,
    }

    pub type APIResponse = RemindersResponse;
}

pub mod get_reminder {
    use super::*;

    #[derive(Debug, Deserialize)]
    pub struct PathParams {
        pub reminder_id: ID,
    }

    pub type APIResponse = ReminderResponse;
}

pub mod get_reminder_by_identity {
    use super::*;

    #[derive(Debug, Deserialize)]
    pub struct PathParams {
        pub identity: String,
    }

    pub type APIResponse = ReminderResponse;
}

pub mod mark_reminder_notified {
    use super::*;

    #[derive(Debug, Deserialize)]
    pub struct PathParams {
        pub reminder_id: ID,
    }

    pub type APIResponse = ReminderResponse;
}

pub mod delete_reminder {
    use super::*;

    #[derive(Debug, Deserialize)]
    pub struct PathParams {
        pub reminder_id: ID,
    }

    pub type APIResponse = ReminderResponse;
}

pub mod delete_reminder_by_identity {
    use super::*;

    #[derive(Debug, Deserialize)]
    pub struct PathParams {
        pub identity: String,
    }

    pub type APIResponse = ReminderResponse;
}

pub mod cleanup_notified_reminders {
    use super::*;

    #[derive(Debug, Deserialize, Serialize)]
    #[serde(rename_all = "camelCase")]
    pub struct APIResponse {
        pub deleted_count: i64,
    }
}

pub mod send_test_notification {
    use super::*;

    #[derive(Debug, Default, Deserialize, Serialize)]
    pub struct RequestBody {
        #[serde(default)]
        pub text: Option<String>,
    }

    #[derive(Debug, Deserialize, Serialize)]
    #[serde(rename_all = "camelCase")]
    pub struct APIResponse {
        pub chat_id: String,
        pub text: String,
    }
}
