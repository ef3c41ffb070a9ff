mod inmemory;
mod postgres;

use crate::repos::shared::repo::DeleteResult;
use chrono::{DateTime, Utc};
pub use inmemory::InMemoryReminderRepo;
use lab_reminders_domain::{Reminder, ID};
pub use postgres::PostgresReminderRepo;

/// Storage contract for `Reminder`s. `identity` is unique across the store.
#[async_trait::async_trait]
pub trait IReminderRepo: Send + Sync {
    /// Compare-and-skip on identity. Returns whether the reminder was stored.
    async fn insert(&self, reminder: &Reminder) -> anyhow::Result<bool>;
    /// Upsert by identity. An existing reminder can only have `notified` raised.
    async fn save(&self, reminder: &Reminder) -> anyhow::Result<()>;
    async fn exists_by_identity(&self, identity: &str) -> anyhow::Result<bool>;
    async fn find(&self, reminder_id: &ID) -> Option<Reminder>;
    async fn find_by_identity(&self, identity: &str) -> Option<Reminder>;
    async fn find_all_ordered_by_due(&self) -> Vec<Reminder>;
    async fn find_pending_ordered_by_due(&self) -> Vec<Reminder>;
    /// Pending reminders with `due` strictly before `now`
    async fn find_overdue(&self, now: DateTime<Utc>) -> Vec<Reminder>;
    async fn find_by_batch(&self, batch: &str) -> Vec<Reminder>;
    /// Case insensitive substring match on the batch code
    async fn search_by_batch(&self, fragment: &str) -> Vec<Reminder>;
    async fn delete(&self, reminder_id: &ID) -> Option<Reminder>;
    async fn delete_by_identity(&self, identity: &str) -> anyhow::Result<bool>;
    async fn delete_all_notified(&self) -> anyhow::Result<DeleteResult>;
}
