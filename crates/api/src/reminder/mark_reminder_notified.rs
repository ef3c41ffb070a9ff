use crate::error::LabError;
use crate::shared::usecase::{execute, UseCase};
use actix_web::{web, HttpResponse};
use lab_reminders_api_structs::mark_reminder_notified::{APIResponse, PathParams};
use lab_reminders_domain::{Reminder, ID};
use lab_reminders_infra::LabContext;
use tracing::error;

pub async fn mark_reminder_notified_controller(
    path: web::Path<PathParams>,
    ctx: web::Data<LabContext>,
) -> Result<HttpResponse, LabError> {
    let usecase = MarkReminderNotifiedUseCase {
        reminder_id: path.into_inner().reminder_id,
    };

    execute(usecase, &ctx)
        .await
        .map(|reminder| HttpResponse::Ok().json(APIResponse::new(reminder)))
        .map_err(LabError::from)
}

#[derive(Debug, PartialEq)]
pub enum UseCaseError {
    NotFound(ID),
    StorageError,
}

impl From<UseCaseError> for LabError {
    fn from(e: UseCaseError) -> Self {
        match e {
            UseCaseError::NotFound(reminder_id) => Self::NotFound(format!(
                "The reminder with id: {}, was not found.",
                reminder_id
            )),
            UseCaseError::StorageError => Self::InternalError,
        }
    }
}

/// Manual acknowledge of a reminder. Acknowledging twice is harmless.
#[derive(Debug)]
pub struct MarkReminderNotifiedUseCase {
    pub reminder_id: ID,
}

#[async_trait::async_trait(?Send)]
impl UseCase for MarkReminderNotifiedUseCase {
    type Response = Reminder;

    type Error = UseCaseError;

    const NAME: &'static str = "MarkReminderNotified";

    async fn execute(&mut self, ctx: &LabContext) -> Result<Self::Response, Self::Error> {
        let mut reminder = match ctx.repos.reminders.find(&self.reminder_id).await {
            Some(reminder) => reminder,
            None => return Err(UseCaseError::NotFound(self.reminder_id.clone())),
        };

        if reminder.mark_notified() {
            if let Err(e) = ctx.repos.reminders.save(&reminder).await {
                error!("Unable to save reminder {}: {:?}", reminder.identity, e);
                return Err(UseCaseError::StorageError);
            }
        }
        Ok(reminder)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::test_context::setup;
    use chrono::{TimeZone, Utc};

    #[actix_web::test]
    async fn it_marks_a_reminder_notified_once_and_for_all() {
        let now = Utc.with_ymd_and_hms(2024, 3, 1, 10, 30, 0).unwrap();
        let (ctx, _) = setup(now);
        let reminder = Reminder::new("AB1234", "48h", now, now);
        ctx.repos.reminders.insert(&reminder).await.unwrap();

        for _ in 0..2 {
            let usecase = MarkReminderNotifiedUseCase {
                reminder_id: reminder.id.clone(),
            };
            let res = execute(usecase, &ctx).await.unwrap();
            assert!(res.notified);
            assert_eq!(res.due, reminder.due);
        }
        assert!(ctx.repos.reminders.find(&reminder.id).await.unwrap().notified);
        assert!(ctx.repos.reminders.find_pending_ordered_by_due().await.is_empty());

        let missing = ID::default();
        let usecase = MarkReminderNotifiedUseCase {
            reminder_id: missing.clone(),
        };
        assert_eq!(
            execute(usecase, &ctx).await.unwrap_err(),
            UseCaseError::NotFound(missing)
        );
    }
}
