use crate::shared::entity::{Entity, ID};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A `Reminder` is a scheduled follow-up check of a lab batch at one
/// interval after the batch was planned.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Reminder {
    pub id: ID,
    /// Natural key `<BATCH>-<INTERVAL>`, unique across all reminders.
    /// Creating a reminder with an existing identity is skipped.
    pub identity: String,
    /// Uppercase batch code
    pub batch: String,
    /// One of `BATCH_INTERVALS` or a plain hour count
    pub interval: String,
    /// When the check becomes actionable. Fixed at creation.
    pub due: DateTime<Utc>,
    /// Only ever goes from false to true
    pub notified: bool,
    pub created: DateTime<Utc>,
}

impl Reminder {
    pub fn new(batch: &str, interval: &str, due: DateTime<Utc>, created: DateTime<Utc>) -> Self {
        let batch = normalize_batch(batch);
        Self {
            id: Default::default(),
            identity: Self::identity_for(&batch, interval),
            batch,
            interval: interval.to_string(),
            due,
            notified: false,
            created,
        }
    }

    pub fn identity_for(batch: &str, interval: &str) -> String {
        format!("{}-{}", normalize_batch(batch), interval)
    }

    pub fn is_overdue(&self, now: DateTime<Utc>) -> bool {
        !self.notified && self.due < now
    }

    /// Returns whether the flag changed
    pub fn mark_notified(&mut self) -> bool {
        let changed = !self.notified;
        self.notified = true;
        changed
    }

    pub fn due_notice(&self) -> String {
        format!("Batch {} - {} check is due!", self.batch, self.interval)
    }
}

impl Entity for Reminder {
    fn id(&self) -> &ID {
        &self.id
    }
}

pub fn normalize_batch(batch: &str) -> String {
    batch.trim().to_uppercase()
}

/// Confirmation sent after a batch got at least one new reminder
pub fn batch_added_message(batch: &str, day_offset: i32) -> String {
    if day_offset == 0 {
        format!("Batch *{}* added!", batch)
    } else {
        format!("Batch *{}* added with *{} day* offset!", batch, day_offset)
    }
}
