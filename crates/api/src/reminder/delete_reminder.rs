use super::get_reminder::ReminderKey;
use crate::error::LabError;
use crate::shared::usecase::{execute, UseCase};
use actix_web::{web, HttpResponse};
use lab_reminders_api_structs::{delete_reminder::*, delete_reminder_by_identity};
use lab_reminders_domain::Reminder;
use lab_reminders_infra::LabContext;
use tracing::error;

pub async fn delete_reminder_controller(
    path: web::Path<PathParams>,
    ctx: web::Data<LabContext>,
) -> Result<HttpResponse, LabError> {
    let usecase = DeleteReminderUseCase {
        key: ReminderKey::Id(path.into_inner().reminder_id),
    };

    execute(usecase, &ctx)
        .await
        .map(|reminder| HttpResponse::Ok().json(APIResponse::new(reminder)))
        .map_err(LabError::from)
}

pub async fn delete_reminder_by_identity_controller(
    path: web::Path<delete_reminder_by_identity::PathParams>,
    ctx: web::Data<LabContext>,
) -> Result<HttpResponse, LabError> {
    let usecase = DeleteReminderUseCase {
        key: ReminderKey::Identity(path.into_inner().identity),
    };

    execute(usecase, &ctx)
        .await
        .map(|reminder| HttpResponse::Ok().json(APIResponse::new(reminder)))
        .map_err(LabError::from)
}

#[derive(Debug, PartialEq)]
pub enum UseCaseError {
    NotFound(ReminderKey),
    StorageError,
}

impl From<UseCaseError> for LabError {
    fn from(e: UseCaseError) -> Self {
        match e {
            UseCaseError::NotFound(key) => {
                Self::NotFound(format!("The reminder with {}, was not found.", key))
            }
            UseCaseError::StorageError => Self::InternalError,
        }
    }
}

#[derive(Debug)]
pub struct DeleteReminderUseCase {
    pub key: ReminderKey,
}

#[async_trait::async_trait(?Send)]
impl UseCase for DeleteReminderUseCase {
    /// The reminder as it was before deletion
    type Response = Reminder;

    type Error = UseCaseError;

    const NAME: &'static str = "DeleteReminder";

    async fn execute(&mut self, ctx: &LabContext) -> Result<Self::Response, Self::Error> {
        let identity = match &self.key {
            ReminderKey::Id(id) => {
                return ctx
                    .repos
                    .reminders
                    .delete(id)
                    .await
                    .ok_or_else(|| UseCaseError::NotFound(self.key.clone()))
            }
            ReminderKey::Identity(identity) => identity,
        };

        let reminder = match ctx.repos.reminders.find_by_identity(identity).await {
            Some(reminder) => reminder,
            None => return Err(UseCaseError::NotFound(self.key.clone())),
        };
        match ctx.repos.reminders.delete_by_identity(identity).await {
            Ok(true) => Ok(reminder),
            // Deleted in between
            Ok(false) => Err(UseCaseError::NotFound(self.key.clone())),
            Err(e) => {
                error!("Unable to delete reminder {}: {:?}", identity, e);
                Err(UseCaseError::StorageError)
            }
        }
    }
}
