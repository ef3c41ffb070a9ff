use super::IReminderRepo;
use crate::repos::shared::{inmemory_repo::*, repo::DeleteResult};
use chrono::{DateTime, Utc};
use lab_reminders_domain::{Reminder, ID};

pub struct InMemoryReminderRepo {
    reminders: std::sync::Mutex<Vec<Reminder>>,
}

impl InMemoryReminderRepo {
    pub fn new() -> Self {
        Self {
            reminders: std::sync::Mutex::new(Vec::new()),
        }
    }
}

impl Default for InMemoryReminderRepo {
    fn default() -> Self {
        Self::new()
    }
}

fn ordered_by_due(mut reminders: Vec<Reminder>) -> Vec<Reminder> {
    reminders.sort_by_key(|r| r.due);
    reminders
}

#[async_trait::async_trait]
impl IReminderRepo for InMemoryReminderRepo {
    async fn insert(&self, reminder: &Reminder) -> anyhow::Result<bool> {
        Ok(insert_unless(reminder, &self.reminders, |r| {
            r.identity == reminder.identity
        }))
    }

    async fn save(&self, reminder: &Reminder) -> anyhow::Result<()> {
        upsert(
            reminder,
            &self.reminders,
            |r| r.identity == reminder.identity,
            |r| r.notified = r.notified || reminder.notified,
        );
        Ok(())
    }

    async fn exists_by_identity(&self, identity: &str) -> anyhow::Result<bool> {
        Ok(!find_by(&self.reminders, |r| r.identity == identity).is_empty())
    }

    async fn find(&self, reminder_id: &ID) -> Option<Reminder> {
        find(reminder_id, &self.reminders)
    }

    async fn find_by_identity(&self, identity: &str) -> Option<Reminder> {
        find_by(&self.reminders, |r| r.identity == identity)
            .into_iter()
            .next()
    }

    async fn find_all_ordered_by_due(&self) -> Vec<Reminder> {
        ordered_by_due(find_by(&self.reminders, |_| true))
    }

    async fn find_pending_ordered_by_due(&self) -> Vec<Reminder> {
        ordered_by_due(find_by(&self.reminders, |r| !r.notified))
    }

    async fn find_overdue(&self, now: DateTime<Utc>) -> Vec<Reminder> {
        ordered_by_due(find_by(&self.reminders, |r| r.is_overdue(now)))
    }

    async fn find_by_batch(&self, batch: &str) -> Vec<Reminder> {
        ordered_by_due(find_by(&self.reminders, |r| r.batch == batch))
    }

    async fn search_by_batch(&self, fragment: &str) -> Vec<Reminder> {
        let fragment = fragment.to_uppercase();
        ordered_by_due(find_by(&self.reminders, |r| {
            r.batch.to_uppercase().contains(&fragment)
        }))
    }

    async fn delete(&self, reminder_id: &ID) -> Option<Reminder> {
        delete(reminder_id, &self.reminders)
    }

    async fn delete_by_identity(&self, identity: &str) -> anyhow::Result<bool> {
        let res = delete_by(&self.reminders, |r| r.identity == identity);
        Ok(res.deleted_count > 0)
    }

    async fn delete_all_notified(&self) -> anyhow::Result<DeleteResult> {
        Ok(delete_by(&self.reminders, |r| r.notified))
    }
}
