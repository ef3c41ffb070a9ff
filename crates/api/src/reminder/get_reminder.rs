use crate::error::LabError;
use crate::shared::usecase::{execute, UseCase};
use actix_web::{web, HttpResponse};
use lab_reminders_api_structs::{get_reminder::*, get_reminder_by_identity};
use lab_reminders_domain::{Reminder, ID};
use lab_reminders_infra::LabContext;
use std::fmt::Display;

pub async fn get_reminder_controller(
    path: web::Path<PathParams>,
    ctx: web::Data<LabContext>,
) -> Result<HttpResponse, LabError> {
    let usecase = GetReminderUseCase {
        key: ReminderKey::Id(path.into_inner().reminder_id),
    };

    execute(usecase, &ctx)
        .await
        .map(|reminder| HttpResponse::Ok().json(APIResponse::new(reminder)))
        .map_err(LabError::from)
}

pub async fn get_reminder_by_identity_controller(
    path: web::Path<get_reminder_by_identity::PathParams>,
    ctx: web::Data<LabContext>,
) -> Result<HttpResponse, LabError> {
    let usecase = GetReminderUseCase {
        key: ReminderKey::Identity(path.into_inner().identity),
    };

    execute(usecase, &ctx)
        .await
        .map(|reminder| HttpResponse::Ok().json(APIResponse::new(reminder)))
        .map_err(LabError::from)
}

/// Either of the two keys a reminder can be addressed by
#[derive(Debug, Clone, PartialEq)]
pub enum ReminderKey {
    Id(ID),
    Identity(String),
}

impl Display for ReminderKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Id(id) => write!(f, "id: {}", id),
            Self::Identity(identity) => write!(f, "identity: {}", identity),
        }
    }
}

#[derive(Debug, PartialEq)]
pub enum UseCaseError {
    NotFound(ReminderKey),
}

impl From<UseCaseError> for LabError {
    fn from(e: UseCaseError) -> Self {
        match e {
            UseCaseError::NotFound(key) => {
                Self::NotFound(format!("The reminder with {}, was not found.", key))
            }
        }
    }
}

#[derive(Debug)]
pub struct GetReminderUseCase {
    pub key: ReminderKey,
}

#[async_trait::async_trait(?Send)]
impl UseCase for GetReminderUseCase {
    type Response = Reminder;

    type Error = UseCaseError;

    const NAME: &'static str = "GetReminder";

    async fn execute(&mut self, ctx: &LabContext) -> Result<Self::Response, Self::Error> {
        let reminder = match &self.key {
            ReminderKey::Id(id) => ctx.repos.reminders.find(id).await,
            ReminderKey::Identity(identity) => {
                ctx.repos.reminders.find_by_identity(identity).await
            }
        };
        reminder.ok_or_else(|| UseCaseError::NotFound(self.key.clone()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::test_context::setup;
    use chrono::{TimeZone, Utc};

    #[actix_web::test]
    async fn it_finds_by_either_key() {
        let now = Utc.with_ymd_and_hms(2024, 3, 1, 10, 30, 0).unwrap();
        let (ctx, _) = setup(now);
        let reminder = Reminder::new("AB1234", "48h", now, now);
        ctx.repos.reminders.insert(&reminder).await.unwrap();

        let usecase = GetReminderUseCase {
            key: ReminderKey::Id(reminder.id.clone()),
        };
        assert_eq!(execute(usecase, &ctx).await.unwrap(), reminder);

        let usecase = GetReminderUseCase {
            key: ReminderKey::Identity("AB1234-48h".into()),
        };
        assert_eq!(execute(usecase, &ctx).await.unwrap(), reminder);

        let missing = ReminderKey::Identity("AB1234-7d".into());
        let usecase = GetReminderUseCase {
            key: missing.clone(),
        };
        assert_eq!(
            execute(usecase, &ctx).await.unwrap_err(),
            UseCaseError::NotFound(missing)
        );

        let missing = ReminderKey::Id(ID::default());
        let usecase = GetReminderUseCase {
            key: missing.clone(),
        };
        assert_eq!(
            execute(usecase, &ctx).await.unwrap_err(),
            UseCaseError::NotFound(missing)
        );
    }
}
