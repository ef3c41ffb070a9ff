use super::IReminderRepo;
use crate::repos::shared::repo::DeleteResult;
use chrono::{DateTime, Utc};
use lab_reminders_domain::{Reminder, ID};
use sqlx::{types::Uuid, FromRow, PgPool};
use tracing::error;

pub struct PostgresReminderRepo {
    pool: PgPool,
}

impl PostgresReminderRepo {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct ReminderRaw {
    reminder_uid: Uuid,
    identity: String,
    batch: String,
    interval_label: String,
    due: DateTime<Utc>,
    notified: bool,
    created: DateTime<Utc>,
}

impl From<ReminderRaw> for Reminder {
    fn from(raw: ReminderRaw) -> Self {
        Self {
            id: raw.reminder_uid.into(),
            identity: raw.identity,
            batch: raw.batch,
            interval: raw.interval_label,
            due: raw.due,
            notified: raw.notified,
            created: raw.created,
        }
    }
}

fn into_reminders(res: Result<Vec<ReminderRaw>, sqlx::Error>, query: &str) -> Vec<Reminder> {
    match res {
        Ok(rows) => rows.into_iter().map(|r| r.into()).collect(),
        Err(e) => {
            error!("Reminder query `{}` failed. Error message: {:?}", query, e);
            Vec::new()
        }
    }
}

#[async_trait::async_trait]
impl IReminderRepo for PostgresReminderRepo {
    async fn insert(&self, reminder: &Reminder) -> anyhow::Result<bool> {
        let res = sqlx::query(
            r#"
            INSERT INTO reminders
            (reminder_uid, identity, batch, interval_label, due, notified, created)
            VALUES($1, $2, $3, $4, $5, $6, $7)
            ON CONFLICT (identity) DO NOTHING
            "#,
        )
        .bind(reminder.id.inner_ref())
        .bind(&reminder.identity)
        .bind(&reminder.batch)
        .bind(&reminder.interval)
        .bind(reminder.due)
        .bind(reminder.notified)
        .bind(reminder.created)
        .execute(&self.pool)
        .await?;

        Ok(res.rows_affected() == 1)
    }

    async fn save(&self, reminder: &Reminder) -> anyhow::Result<()> {
        // An existing row keeps its due date, only `notified` can be raised
        sqlx::query(
            r#"
            INSERT INTO reminders
            (reminder_uid, identity, batch, interval_label, due, notified, created)
            VALUES($1, $2, $3, $4, $5, $6, $7)
            ON CONFLICT (identity) DO UPDATE
            SET notified = reminders.notified OR EXCLUDED.notified
            "#,
        )
        .bind(reminder.id.inner_ref())
        .bind(&reminder.identity)
        .bind(&reminder.batch)
        .bind(&reminder.interval)
        .bind(reminder.due)
        .bind(reminder.notified)
        .bind(reminder.created)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn exists_by_identity(&self, identity: &str) -> anyhow::Result<bool> {
        let exists: bool =
            sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM reminders WHERE identity = $1)")
                .bind(identity)
                .fetch_one(&self.pool)
                .await?;
        Ok(exists)
    }

    async fn find(&self, reminder_id: &ID) -> Option<Reminder> {
        sqlx::query_as::<_, ReminderRaw>("SELECT * FROM reminders WHERE reminder_uid = $1")
            .bind(reminder_id.inner_ref())
            .fetch_optional(&self.pool)
            .await
            .unwrap_or_else(|e| {
                error!("Unable to find reminder: {}. Error message: {:?}", reminder_id, e);
                None
            })
            .map(|r| r.into())
    }

    async fn find_by_identity(&self, identity: &str) -> Option<Reminder> {
        sqlx::query_as::<_, ReminderRaw>("SELECT * FROM reminders WHERE identity = $1")
            .bind(identity)
            .fetch_optional(&self.pool)
            .await
            .unwrap_or_else(|e| {
                error!("Unable to find reminder: {}. Error message: {:?}", identity, e);
                None
            })
            .map(|r| r.into())
    }

    async fn find_all_ordered_by_due(&self) -> Vec<Reminder> {
        let query = "SELECT * FROM reminders ORDER BY due ASC";
        let res = sqlx::query_as::<_, ReminderRaw>(query)
            .fetch_all(&self.pool)
            .await;
        into_reminders(res, query)
    }

    async fn find_pending_ordered_by_due(&self) -> Vec<Reminder> {
        let query = "SELECT * FROM reminders WHERE notified = FALSE ORDER BY due ASC";
        let res = sqlx::query_as::<_, ReminderRaw>(query)
            .fetch_all(&self.pool)
            .await;
        into_reminders(res, query)
    }

    async fn find_overdue(&self, now: DateTime<Utc>) -> Vec<Reminder> {
        let query = "SELECT * FROM reminders WHERE notified = FALSE AND due < $1 ORDER BY due ASC";
        let res = sqlx::query_as::<_, ReminderRaw>(query)
            .bind(now)
            .fetch_all(&self.pool)
            .await;
        into_reminders(res, query)
    }

    async fn find_by_batch(&self, batch: &str) -> Vec<Reminder> {
        let query = "SELECT * FROM reminders WHERE batch = $1 ORDER BY due ASC";
        let res = sqlx::query_as::<_, ReminderRaw>(query)
            .bind(batch)
            .fetch_all(&self.pool)
            .await;
        into_reminders(res, query)
    }

    async fn search_by_batch(&self, fragment: &str) -> Vec<Reminder> {
        let query = r#"
            SELECT * FROM reminders
            WHERE position(upper($1) in upper(batch)) > 0
            ORDER BY due ASC
        "#;
        let res = sqlx::query_as::<_, ReminderRaw>(query)
            .bind(fragment)
            .fetch_all(&self.pool)
            .await;
        into_reminders(res, query)
    }

    async fn delete(&self, reminder_id: &ID) -> Option<Reminder> {
        sqlx::query_as::<_, ReminderRaw>(
            r#"
            DELETE FROM reminders
            WHERE reminder_uid = $1
            RETURNING *
            "#,
        )
        .bind(reminder_id.inner_ref())
        .fetch_optional(&self.pool)
        .await
        .unwrap_or_else(|e| {
            error!("Unable to delete reminder: {}. Error message: {:?}", reminder_id, e);
            None
        })
        .map(|r| r.into())
    }

    async fn delete_by_identity(&self, identity: &str) -> anyhow::Result<bool> {
        let res = sqlx::query("DELETE FROM reminders WHERE identity = $1")
            .bind(identity)
            .execute(&self.pool)
            .await?;
        Ok(res.rows_affected() > 0)
    }

    async fn delete_all_notified(&self) -> anyhow::Result<DeleteResult> {
        let res = sqlx::query("DELETE FROM reminders WHERE notified = TRUE")
            .execute(&self.pool)
            .await?;
        Ok(DeleteResult {
            deleted_count: res.rows_affected() as i64,
        })
    }
}
