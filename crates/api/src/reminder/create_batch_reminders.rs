use super::subscribers::SendBatchAddedConfirmation;
use crate::error::LabError;
use crate::shared::usecase::{execute, Subscriber, UseCase};
use actix_web::{web, HttpResponse};
use lab_reminders_api_structs::create_batch_reminders::{APIResponse, RequestBody};
use lab_reminders_domain::{compute_due, daily_anchor, normalize_batch, Reminder, BATCH_INTERVALS};
use lab_reminders_infra::LabContext;
use tracing::{debug, error};

pub async fn create_batch_reminders_controller(
    body: web::Json<RequestBody>,
    ctx: web::Data<LabContext>,
) -> Result<HttpResponse, LabError> {
    let body = body.0;
    let usecase = CreateBatchRemindersUseCase {
        batch: body.batch,
        day_offset: body.day_offset.unwrap_or(0),
        reply_to: ctx.config.bot.default_chat_id.clone(),
    };

    execute(usecase, &ctx)
        .await
        .map(|reminders| HttpResponse::Created().json(APIResponse::new(reminders)))
        .map_err(LabError::from)
}

#[derive(Debug, PartialEq)]
pub enum UseCaseError {
    InvalidBatch,
    StorageError,
}

impl From<UseCaseError> for LabError {
    fn from(e: UseCaseError) -> Self {
        match e {
            UseCaseError::InvalidBatch => {
                Self::BadClientData("The batch code must not be empty.".into())
            }
            UseCaseError::StorageError => Self::InternalError,
        }
    }
}

/// Plans the fixed follow-up checks of a batch. Checks that already exist
/// are skipped, so planning the same batch again is a no-op.
#[derive(Debug)]
pub struct CreateBatchRemindersUseCase {
    pub batch: String,
    pub day_offset: i32,
    /// Chat receiving the confirmation, if any
    pub reply_to: Option<String>,
}

#[async_trait::async_trait(?Send)]
impl UseCase for CreateBatchRemindersUseCase {
    /// The newly created reminders only
    type Response = Vec<Reminder>;

    type Error = UseCaseError;

    const NAME: &'static str = "CreateBatchReminders";

    async fn execute(&mut self, ctx: &LabContext) -> Result<Self::Response, Self::Error> {
        let batch = normalize_batch(&self.batch);
        if batch.is_empty() {
            return Err(UseCaseError::InvalidBatch);
        }

        let now = ctx.sys.now();
        let anchor = daily_anchor(now);

        let mut created = Vec::with_capacity(BATCH_INTERVALS.len());
        for interval in BATCH_INTERVALS {
            let identity = Reminder::identity_for(&batch, interval);
            match ctx.repos.reminders.exists_by_identity(&identity).await {
                Ok(true) => {
                    debug!("Reminder {} already exists, skipping", identity);
                    continue;
                }
                Ok(false) => (),
                Err(e) => {
                    error!("Unable to look up reminder {}: {:?}", identity, e);
                    return Err(UseCaseError::StorageError);
                }
            }

            let due = compute_due(anchor, interval, self.day_offset);
            let reminder = Reminder::new(&batch, interval, due, now);
            match ctx.repos.reminders.insert(&reminder).await {
                Ok(true) => created.push(reminder),
                // Lost the race against a concurrent planner
                Ok(false) => debug!("Reminder {} already exists, skipping", identity),
                Err(e) => {
                    error!("Unable to store reminder {}: {:?}", identity, e);
                    return Err(UseCaseError::StorageError);
                }
            }
        }

        Ok(created)
    }

    fn subscribers() -> Vec<Box<dyn Subscriber<Self>>> {
        vec![Box::new(SendBatchAddedConfirmation)]
    }
}
