use crate::error::LabError;
use crate::shared::usecase::{execute, UseCase};
use actix_web::{web, HttpResponse};
use lab_reminders_api_structs::create_single_reminder::{APIResponse, RequestBody};
use lab_reminders_domain::{compute_due, daily_anchor, normalize_batch, Reminder};
use lab_reminders_infra::LabContext;
use tracing::error;

pub async fn create_single_reminder_controller(
    body: web::Json<RequestBody>,
    ctx: web::Data<LabContext>,
) -> Result<HttpResponse, LabError> {
    let body = body.0;
    let usecase = CreateSingleReminderUseCase {
        batch: body.batch,
        interval: body.interval_type,
        day_offset: body.day_offset.unwrap_or(0),
    };

    execute(usecase, &ctx)
        .await
        .map(|reminder| HttpResponse::Created().json(APIResponse::new(reminder)))
        .map_err(LabError::from)
}

#[derive(Debug, PartialEq)]
pub enum UseCaseError {
    InvalidBatch,
    InvalidInterval,
    Duplicate(String),
    StorageError,
}

impl From<UseCaseError> for LabError {
    fn from(e: UseCaseError) -> Self {
        match e {
            UseCaseError::InvalidBatch => {
                Self::BadClientData("The batch code must not be empty.".into())
            }
            UseCaseError::InvalidInterval => {
                Self::BadClientData("The interval type must not be empty.".into())
            }
            UseCaseError::Duplicate(identity) => Self::Conflict(format!(
                "The reminder with identity: {}, already exists.",
                identity
            )),
            UseCaseError::StorageError => Self::InternalError,
        }
    }
}

/// Plans one check of a batch with any interval label
#[derive(Debug)]
pub struct CreateSingleReminderUseCase {
    pub batch: String,
    pub interval: String,
    pub day_offset: i32,
}

#[async_trait::async_trait(?Send)]
impl UseCase for CreateSingleReminderUseCase {
    type Response = Reminder;

    type Error = UseCaseError;

    const NAME: &'static str = "CreateSingleReminder";

    async fn execute(&mut self, ctx: &LabContext) -> Result<Self::Response, Self::Error> {
        let batch = normalize_batch(&self.batch);
        if batch.is_empty() {
            return Err(UseCaseError::InvalidBatch);
        }
        let interval = self.interval.trim();
        if interval.is_empty() {
            return Err(UseCaseError::InvalidInterval);
        }

        let identity = Reminder::identity_for(&batch, interval);
        match ctx.repos.reminders.exists_by_identity(&identity).await {
            Ok(false) => (),
            Ok(true) => return Err(UseCaseError::Duplicate(identity)),
            Err(e) => {
                error!("Unable to look up reminder {}: {:?}", identity, e);
                return Err(UseCaseError::StorageError);
            }
        }

        let now = ctx.sys.now();
        let due = compute_due(daily_anchor(now), interval, self.day_offset);
        let reminder = Reminder::new(&batch, interval, due, now);
        match ctx.repos.reminders.insert(&reminder).await {
            Ok(true) => Ok(reminder),
            Ok(false) => Err(UseCaseError::Duplicate(identity)),
            Err(e) => {
                error!("Unable to store reminder {}: {:?}", identity, e);
                Err(UseCaseError::StorageError)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::test_context::setup;
    use chrono::{DateTime, Duration, TimeZone, Utc};

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 3, 1, 10, 30, 0).unwrap()
    }

    fn anchor() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 3, 1, 19, 0, 0).unwrap()
    }

    fn usecase(batch: &str, interval: &str, day_offset: i32) -> CreateSingleReminderUseCase {
        CreateSingleReminderUseCase {
            batch: batch.into(),
            interval: interval.into(),
            day_offset,
        }
    }

    #[actix_web::test]
    async fn it_creates_a_reminder_for_any_interval() {
        let (ctx, channel) = setup(now());

        let reminder = execute(usecase("ab1234", "12", 1), &ctx).await.unwrap();
        assert_eq!(reminder.identity, "AB1234-12");
        assert_eq!(reminder.due, anchor() + Duration::hours(12) + Duration::days(1));

        let reminder = execute(usecase("AB1234", "2w", 0), &ctx).await.unwrap();
        assert_eq!(reminder.due, anchor() + Duration::days(7));

        assert_eq!(ctx.repos.reminders.find_by_batch("AB1234").await.len(), 2);
        assert!(channel.sent_messages().is_empty());
    }

    #[actix_web::test]
    async fn duplicates_are_rejected_without_touching_the_existing_one() {
        let (ctx, _) = setup(now());
        let mut existing = execute(usecase("AB1234", "48h", 0), &ctx).await.unwrap();
        existing.mark_notified();
        ctx.repos.reminders.save(&existing).await.unwrap();

        let res = execute(usecase("AB1234", "48h", 10), &ctx).await;
        assert_eq!(
            res.unwrap_err(),
            UseCaseError::Duplicate("AB1234-48h".into())
        );

        let stored = ctx
            .repos
            .reminders
            .find_by_identity("AB1234-48h")
            .await
            .unwrap();
        assert_eq!(stored.due, anchor() + Duration::hours(48));
        assert!(stored.notified);
    }

    #[actix_web::test]
    async fn it_rejects_blank_input() {
        let (ctx, _) = setup(now());
        assert_eq!(
            execute(usecase("", "48h", 0), &ctx).await.unwrap_err(),
            UseCaseError::InvalidBatch
        );
        assert_eq!(
            execute(usecase("AB1234", " ", 0), &ctx).await.unwrap_err(),
            UseCaseError::InvalidInterval
        );
    }
}
