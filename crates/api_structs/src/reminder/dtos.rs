use chrono::{DateTime, Utc};
use lab_reminders_domain::{Reminder, ID};
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ReminderDTO {
    pub id: ID,
    pub identity: String,
    pub batch: String,
    pub interval_type: String,
    pub due: DateTime<Utc>,
    pub notified: bool,
    pub created: DateTime<Utc>,
}

impl ReminderDTO {
    pub fn new(reminder: Reminder) -> Self {
        Self {
            id: reminder.id,
            identity: reminder.identity,
            batch: reminder.batch,
            interval_type: reminder.interval,
            due: reminder.due,
            notified: reminder.notified,
            created: reminder.created,
        }
    }
}
