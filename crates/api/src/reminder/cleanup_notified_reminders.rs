use crate::error::LabError;
use crate::shared::usecase::{execute, UseCase};
use actix_web::{web, HttpResponse};
use lab_reminders_api_structs::cleanup_notified_reminders::APIResponse;
use lab_reminders_infra::{DeleteResult, LabContext};
use tracing::{error, info};

pub async fn cleanup_notified_reminders_controller(
    ctx: web::Data<LabContext>,
) -> Result<HttpResponse, LabError> {
    execute(CleanupNotifiedRemindersUseCase, &ctx)
        .await
        .map(|res| {
            HttpResponse::Ok().json(APIResponse {
                deleted_count: res.deleted_count,
            })
        })
        .map_err(LabError::from)
}

#[derive(Debug, PartialEq)]
pub enum UseCaseError {
    StorageError,
}

impl From<UseCaseError> for LabError {
    fn from(e: UseCaseError) -> Self {
        match e {
            UseCaseError::StorageError => Self::InternalError,
        }
    }
}

/// Deletes every reminder that was notified. Pending ones are kept.
#[derive(Debug)]
pub struct CleanupNotifiedRemindersUseCase;

#[async_trait::async_trait(?Send)]
impl UseCase for CleanupNotifiedRemindersUseCase {
    type Response = DeleteResult;

    type Error = UseCaseError;

    const NAME: &'static str = "CleanupNotifiedReminders";

    async fn execute(&mut self, ctx: &LabContext) -> Result<Self::Response, Self::Error> {
        match ctx.repos.reminders.delete_all_notified().await {
            Ok(res) => {
                info!("Cleaned up {} notified reminders", res.deleted_count);
                Ok(res)
            }
            Err(e) => {
                error!("Unable to clean up notified reminders: {:?}", e);
                Err(UseCaseError::StorageError)
            }
        }
    }
}
