use crate::error::LabError;
use crate::shared::usecase::{execute, UseCase};
use actix_web::{web, HttpResponse};
use lab_reminders_api_structs::{
    get_reminders::APIResponse, get_reminders_by_batch::PathParams,
    search_reminders::QueryParams,
};
use lab_reminders_domain::{normalize_batch, Reminder};
use lab_reminders_infra::LabContext;

async fn list(filter: ReminderFilter, ctx: &LabContext) -> Result<HttpResponse, LabError> {
    let usecase = GetRemindersUseCase { filter };

    execute(usecase, ctx)
        .await
        .map(|reminders| HttpResponse::Ok().json(APIResponse::new(reminders)))
        .map_err(LabError::from)
}

pub async fn get_reminders_controller(ctx: web::Data<LabContext>) -> Result<HttpResponse, LabError> {
    list(ReminderFilter::All, &ctx).await
}

pub async fn get_pending_reminders_controller(
    ctx: web::Data<LabContext>,
) -> Result<HttpResponse, LabError> {
    list(ReminderFilter::Pending, &ctx).await
}

pub async fn get_reminders_by_batch_controller(
    path: web::Path<PathParams>,
    ctx: web::Data<LabContext>,
) -> Result<HttpResponse, LabError> {
    list(ReminderFilter::Batch(path.into_inner().batch), &ctx).await
}

pub async fn search_reminders_controller(
    query: web::Query<QueryParams>,
    ctx: web::Data<LabContext>,
) -> Result<HttpResponse, LabError> {
    list(ReminderFilter::BatchContains(query.into_inner().batch), &ctx).await
}

#[derive(Debug)]
pub enum UseCaseError {}

impl From<UseCaseError> for LabError {
    fn from(e: UseCaseError) -> Self {
        match e {}
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum ReminderFilter {
    All,
    /// Not yet notified
    Pending,
    /// Exact batch code
    Batch(String),
    /// Case insensitive part of a batch code
    BatchContains(String),
}

/// Lists reminders ordered by ascending due
#[derive(Debug)]
pub struct GetRemindersUseCase {
    pub filter: ReminderFilter,
}

#[async_trait::async_trait(?Send)]
impl UseCase for GetRemindersUseCase {
    type Response = Vec<Reminder>;

    type Error = UseCaseError;

    const NAME: &'static str = "GetReminders";

    async fn execute(&mut self, ctx: &LabContext) -> Result<Self::Response, Self::Error> {
        let reminders = match &self.filter {
            ReminderFilter::All => ctx.repos.reminders.find_all_ordered_by_due().await,
            ReminderFilter::Pending => ctx.repos.reminders.find_pending_ordered_by_due().await,
            ReminderFilter::Batch(batch) => {
                ctx.repos
                    .reminders
                    .find_by_batch(&normalize_batch(batch))
                    .await
            }
            ReminderFilter::BatchContains(fragment) => {
                ctx.repos.reminders.search_by_batch(fragment.trim()).await
            }
        };
        Ok(reminders)
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

    async fn seed(ctx: &LabContext) {
        let reminders = vec![
            Reminder::new("CD5678", "7d", now() + Duration::days(7), now()),
            Reminder::new("AB1234", "48h", now() + Duration::days(2), now()),
            Reminder::new("AB1234C", "1y", now() + Duration::days(365), now()),
        ];
        for mut reminder in reminders {
            if reminder.batch == "CD5678" {
                reminder.mark_notified();
            }
            ctx.repos.reminders.insert(&reminder).await.unwrap();
        }
    }

    async fn identities(filter: ReminderFilter, ctx: &LabContext) -> Vec<String> {
        execute(GetRemindersUseCase { filter }, ctx)
            .await
            .unwrap()
            .into_iter()
            .map(|r| r.identity)
            .collect()
    }

    #[actix_web::test]
    async fn it_lists_and_filters_by_ascending_due() {
        let (ctx, _) = setup(now());
        seed(&ctx).await;

        assert_eq!(
            identities(ReminderFilter::All, &ctx).await,
            vec!["AB1234-48h", "CD5678-7d", "AB1234C-1y"]
        );
        assert_eq!(
            identities(ReminderFilter::Pending, &ctx).await,
            vec!["AB1234-48h", "AB1234C-1y"]
        );
        assert_eq!(
            identities(ReminderFilter::Batch("ab1234".into()), &ctx).await,
            vec!["AB1234-48h"]
        );
        assert_eq!(
            identities(ReminderFilter::BatchContains("b12".into()), &ctx).await,
            vec!["AB1234-48h", "AB1234C-1y"]
        );
        assert!(identities(ReminderFilter::BatchContains("ZZ".into()), &ctx)
            .await
            .is_empty());
    }
}
