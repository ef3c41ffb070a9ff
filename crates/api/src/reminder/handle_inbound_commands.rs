use super::create_batch_reminders::CreateBatchRemindersUseCase;
use crate::shared::usecase::{execute, UseCase};
use lab_reminders_domain::BatchCommand;
use lab_reminders_infra::LabContext;
use tracing::{debug, info};

#[derive(Debug)]
pub enum UseCaseError {}

/// Polls the chat for batch commands and plans every batch it recognizes.
/// Text that is not a batch command is ignored.
#[derive(Debug)]
pub struct HandleInboundCommandsUseCase;

#[async_trait::async_trait(?Send)]
impl UseCase for HandleInboundCommandsUseCase {
    /// Number of reminders created
    type Response = usize;

    type Error = UseCaseError;

    const NAME: &'static str = "HandleInboundCommands";

    async fn execute(&mut self, ctx: &LabContext) -> Result<Self::Response, Self::Error> {
        let mut created = 0;
        for message in ctx.notifications.poll_inbound().await {
            let command = match BatchCommand::parse(&message.text) {
                Some(command) => command,
                None => {
                    debug!("Ignoring message from chat {}", message.chat_id);
                    continue;
                }
            };
            info!(
                "Received batch {} with day offset {} from chat {}",
                command.batch, command.day_offset, message.chat_id
            );

            let usecase = CreateBatchRemindersUseCase {
                batch: command.batch,
                day_offset: command.day_offset,
                reply_to: Some(message.chat_id),
            };
            // Failures are logged by `execute`, the next command still runs
            if let Ok(reminders) = execute(usecase, ctx).await {
                created += reminders.len();
            }
        }

        Ok(created)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::test_context::{setup, DEFAULT_CHAT};
    use chrono::{DateTime, TimeZone, Utc};

    #[actix_web::test]
    async fn it_plans_batches_received_on_the_chat() {
        let now = Utc.with_ymd_and_hms(2024, 3, 1, 10, 30, 0).unwrap();
        let (ctx, channel) = setup(now);
        channel.push_inbound("42", "ab1234c,-2");
        channel.push_inbound("42", "hello there");
        channel.push_inbound("7", "AB12345");
        channel.push_inbound("7", " CD5678 ");

        assert_eq!(execute(HandleInboundCommandsUseCase, &ctx).await.unwrap(), 8);
        assert_eq!(ctx.repos.reminders.find_by_batch("AB1234C").await.len(), 4);
        assert_eq!(ctx.repos.reminders.find_by_batch("CD5678").await.len(), 4);
        assert_eq!(
            channel.sent_messages(),
            vec![
                (
                    "42".to_string(),
                    "Batch *AB1234C* added with *-2 day* offset!".to_string()
                ),
                ("7".to_string(), "Batch *CD5678* added!".to_string()),
            ]
        );

        // Same batch again: nothing planned, no reply
        channel.push_inbound("42", "AB1234C");
        assert_eq!(execute(HandleInboundCommandsUseCase, &ctx).await.unwrap(), 0);
        assert_eq!(channel.sent_messages().len(), 2);
        assert!(channel
            .sent_messages()
            .iter()
            .all(|(chat_id, _)| chat_id != DEFAULT_CHAT));
    }

    #[actix_web::test]
    async fn it_plans_batches_with_extreme_day_offsets() {
        let now = Utc.with_ymd_and_hms(2024, 3, 1, 10, 30, 0).unwrap();
        let (ctx, channel) = setup(now);
        channel.push_inbound("42", "AB1234,2147483647");
        channel.push_inbound("42", "CD5678,-2147483648");

        assert_eq!(execute(HandleInboundCommandsUseCase, &ctx).await.unwrap(), 8);
        let late = ctx.repos.reminders.find_by_batch("AB1234").await;
        assert_eq!(late.len(), 4);
        assert!(late.iter().all(|r| r.due == DateTime::<Utc>::MAX_UTC));
        let early = ctx.repos.reminders.find_by_batch("CD5678").await;
        assert_eq!(early.len(), 4);
        assert!(early.iter().all(|r| r.due == DateTime::<Utc>::MIN_UTC));
        assert_eq!(channel.sent_messages().len(), 2);

        // The poll keeps working afterwards
        channel.push_inbound("42", "EF9012");
        assert_eq!(execute(HandleInboundCommandsUseCase, &ctx).await.unwrap(), 4);
    }

    #[actix_web::test]
    async fn nothing_happens_without_inbound_messages() {
        let (ctx, channel) = setup(Utc::now());
        assert_eq!(execute(HandleInboundCommandsUseCase, &ctx).await.unwrap(), 0);
        assert!(channel.sent_messages().is_empty());
    }
}
