use crate::shared::usecase::UseCase;
use lab_reminders_infra::LabContext;
use tracing::{error, info, warn};

#[derive(Debug)]
pub enum UseCaseError {}

/// Sweep over overdue reminders. Each one is announced on the default chat
/// and only then marked notified, so a crash in between can only cause a
/// repeated notice.
#[derive(Debug)]
pub struct SendDueRemindersUseCase;

#[async_trait::async_trait(?Send)]
impl UseCase for SendDueRemindersUseCase {
    /// Number of reminders marked notified
    type Response = usize;

    type Error = UseCaseError;

    const NAME: &'static str = "SendDueReminders";

    async fn execute(&mut self, ctx: &LabContext) -> Result<Self::Response, Self::Error> {
        let now = ctx.sys.now();
        let overdue = ctx.repos.reminders.find_overdue(now).await;
        if overdue.is_empty() {
            return Ok(0);
        }
        info!("Found {} due reminders", overdue.len());

        let default_chat = ctx.config.bot.default_chat_id.as_deref();
        if default_chat.is_none() {
            warn!("No default chat configured, due reminders are marked notified without a notice");
        }

        let mut notified = 0;
        for mut reminder in overdue {
            if let Some(chat_id) = default_chat {
                ctx.notifications.send(chat_id, &reminder.due_notice()).await;
            }

            reminder.mark_notified();
            match ctx.repos.reminders.save(&reminder).await {
                Ok(_) => notified += 1,
                Err(e) => error!(
                    "Unable to mark reminder {} notified: {:?}",
                    reminder.identity, e
                ),
            }
        }

        Ok(notified)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::test_context::{setup, DEFAULT_CHAT};
    use crate::shared::usecase::execute;
    use chrono::{DateTime, Duration, TimeZone, Utc};
    use lab_reminders_domain::Reminder;

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 3, 5, 19, 30, 0).unwrap()
    }

    #[actix_web::test]
    async fn it_notifies_and_marks_overdue_reminders() {
        let (ctx, channel) = setup(now());
        let overdue = Reminder::new("AB1234", "48h", now() - Duration::hours(1), now());
        let on_time = Reminder::new("AB1234", "7d", now(), now());
        let upcoming = Reminder::new("AB1234", "3m", now() + Duration::days(1), now());
        for reminder in [&overdue, &on_time, &upcoming] {
            ctx.repos.reminders.insert(reminder).await.unwrap();
        }

        let overdue_ids: Vec<_> = ctx
            .repos
            .reminders
            .find_overdue(now())
            .await
            .into_iter()
            .map(|r| r.id)
            .collect();
        assert_eq!(overdue_ids, vec![overdue.id.clone()]);

        assert_eq!(execute(SendDueRemindersUseCase, &ctx).await.unwrap(), 1);
        assert_eq!(
            channel.sent_messages(),
            vec![(
                DEFAULT_CHAT.to_string(),
                "Batch AB1234 - 48h check is due!".to_string()
            )]
        );
        let stored = ctx.repos.reminders.find(&overdue.id).await.unwrap();
        assert!(stored.notified);
        assert_eq!(stored.due, overdue.due);
        assert!(ctx.repos.reminders.find_overdue(now()).await.is_empty());

        // Next sweep has nothing left to do
        assert_eq!(execute(SendDueRemindersUseCase, &ctx).await.unwrap(), 0);
        assert_eq!(channel.sent_messages().len(), 1);
        assert!(!ctx.repos.reminders.find(&on_time.id).await.unwrap().notified);
        assert!(!ctx.repos.reminders.find(&upcoming.id).await.unwrap().notified);
    }

    #[actix_web::test]
    async fn it_marks_reminders_even_without_a_default_chat() {
        let (mut ctx, channel) = setup(now());
        ctx.config.bot.default_chat_id = None;
        let overdue = Reminder::new("AB1234", "48h", now() - Duration::days(1), now());
        ctx.repos.reminders.insert(&overdue).await.unwrap();

        assert_eq!(execute(SendDueRemindersUseCase, &ctx).await.unwrap(), 1);
        assert!(channel.sent_messages().is_empty());
        assert!(ctx.repos.reminders.find(&overdue.id).await.unwrap().notified);
    }
}
