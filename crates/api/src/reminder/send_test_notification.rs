use crate::error::LabError;
use crate::shared::usecase::{execute, UseCase};
use actix_web::{web, HttpResponse};
use lab_reminders_api_structs::send_test_notification::{APIResponse, RequestBody};
use lab_reminders_infra::LabContext;

const TEST_MESSAGE: &str = "Test message from the lab reminder service!";

pub async fn send_test_notification_controller(
    body: Option<web::Json<RequestBody>>,
    ctx: web::Data<LabContext>,
) -> Result<HttpResponse, LabError> {
    let body = body.map(|body| body.0).unwrap_or_default();
    let usecase = SendTestNotificationUseCase { text: body.text };

    execute(usecase, &ctx)
        .await
        .map(|(chat_id, text)| HttpResponse::Ok().json(APIResponse { chat_id, text }))
        .map_err(LabError::from)
}

#[derive(Debug, PartialEq)]
pub enum UseCaseError {
    NoDefaultChat,
}

impl From<UseCaseError> for LabError {
    fn from(e: UseCaseError) -> Self {
        match e {
            UseCaseError::NoDefaultChat => Self::BadClientData(
                "No default chat is configured. Set TELEGRAM_CHAT_ID to send notifications."
                    .into(),
            ),
        }
    }
}

/// Sends a message to the default chat to check the bot setup
#[derive(Debug)]
pub struct SendTestNotificationUseCase {
    pub text: Option<String>,
}

#[async_trait::async_trait(?Send)]
impl UseCase for SendTestNotificationUseCase {
    /// Chat and text of the sent message
    type Response = (String, String);

    type Error = UseCaseError;

    const NAME: &'static str = "SendTestNotification";

    async fn execute(&mut self, ctx: &LabContext) -> Result<Self::Response, Self::Error> {
        let chat_id = ctx
            .config
            .bot
            .default_chat_id
            .clone()
            .ok_or(UseCaseError::NoDefaultChat)?;
        let text = self
            .text
            .as_deref()
            .map(str::trim)
            .filter(|text| !text.is_empty())
            .unwrap_or(TEST_MESSAGE)
            .to_string();

        ctx.notifications.send(&chat_id, &text).await;
        Ok((chat_id, text))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::test_context::{setup, DEFAULT_CHAT};
    use chrono::Utc;

    #[actix_web::test]
    async fn it_sends_to_the_default_chat() {
        let (ctx, channel) = setup(Utc::now());

        let usecase = SendTestNotificationUseCase { text: None };
        execute(usecase, &ctx).await.unwrap();
        let usecase = SendTestNotificationUseCase {
            text: Some("ping".into()),
        };
        execute(usecase, &ctx).await.unwrap();

        assert_eq!(
            channel.sent_messages(),
            vec![
                (DEFAULT_CHAT.to_string(), TEST_MESSAGE.to_string()),
                (DEFAULT_CHAT.to_string(), "ping".to_string()),
            ]
        );
    }

    #[actix_web::test]
    async fn it_fails_without_a_default_chat() {
        let (mut ctx, channel) = setup(Utc::now());
        ctx.config.bot.default_chat_id = None;

        let usecase = SendTestNotificationUseCase { text: None };
        assert_eq!(
            execute(usecase, &ctx).await.unwrap_err(),
            UseCaseError::NoDefaultChat
        );
        assert!(channel.sent_messages().is_empty());
    }
}
