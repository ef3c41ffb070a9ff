use super::create_batch_reminders::CreateBatchRemindersUseCase;
use crate::shared::usecase::Subscriber;
use lab_reminders_domain::{batch_added_message, Reminder};
use lab_reminders_infra::LabContext;
use tracing::debug;

/// Confirms a planned batch on the chat the request came from. Nothing is
/// sent when the batch was already fully planned.
pub struct SendBatchAddedConfirmation;

#[async_trait::async_trait(?Send)]
impl Subscriber<CreateBatchRemindersUseCase> for SendBatchAddedConfirmation {
    async fn notify(
        &self,
        usecase: &CreateBatchRemindersUseCase,
        created: &Vec<Reminder>,
        ctx: &LabContext,
    ) {
        let batch = match created.first() {
            Some(reminder) => &reminder.batch,
            None => return,
        };
        let chat_id = match &usecase.reply_to {
            Some(chat_id) => chat_id,
            None => {
                debug!("No chat to confirm batch {} on", batch);
                return;
            }
        };

        // Sideeffect, best effort
        ctx.notifications
            .send(chat_id, &batch_added_message(batch, usecase.day_offset))
            .await;
    }
}
