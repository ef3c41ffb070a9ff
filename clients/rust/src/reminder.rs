use crate::base::{APIResponse, BaseClient};
use lab_reminders_api_structs::*;
use lab_reminders_domain::ID;
use reqwest::StatusCode;
use std::sync::Arc;

#[derive(Clone)]
pub struct ReminderClient {
    base: Arc<BaseClient>,
}

pub struct CreateBatchRemindersInput {
    pub batch: String,
    pub day_offset: Option<i32>,
}

pub struct CreateSingleReminderInput {
    pub batch: String,
    pub interval_type: String,
    pub day_offset: Option<i32>,
}

impl ReminderClient {
    pub(crate) fn new(base: Arc<BaseClient>) -> Self {
        Self { base }
    }

    pub async fn create_batch(
        &self,
        input: CreateBatchRemindersInput,
    ) -> APIResponse<create_batch_reminders::APIResponse> {
        let body = create_batch_reminders::RequestBody {
            batch: input.batch,
            day_offset: input.day_offset,
        };
        self.base
            .post(body, "reminders".into(), StatusCode::CREATED)
            .await
    }

    pub async fn create_single(
        &self,
        input: CreateSingleReminderInput,
    ) -> APIResponse<create_single_reminder::APIResponse> {
        let body = create_single_reminder::RequestBody {
            batch: input.batch,
            interval_type: input.interval_type,
            day_offset: input.day_offset,
        };
        self.base
            .post(body, "reminders/single".into(), StatusCode::CREATED)
            .await
    }

    pub async fn get_all(&self) -> APIResponse<get_reminders::APIResponse> {
        self.base.get("reminders".into(), StatusCode::OK).await
    }

    pub async fn get_pending(&self) -> APIResponse<get_pending_reminders::APIResponse> {
        self.base
            .get("reminders/pending".into(), StatusCode::OK)
            .await
    }

    pub async fn search(&self, batch: &str) -> APIResponse<search_reminders::APIResponse> {
        self.base
            .get(format!("reminders/search?batch={}", batch), StatusCode::OK)
            .await
    }

    pub async fn get_by_batch(
        &self,
        batch: &str,
    ) -> APIResponse<get_reminders_by_batch::APIResponse> {
        self.base
            .get(format!("reminders/batch/{}", batch), StatusCode::OK)
            .await
    }

    pub async fn get(&self, reminder_id: ID) -> APIResponse<get_reminder::APIResponse> {
        self.base
            .get(format!("reminders/{}", reminder_id), StatusCode::OK)
            .await
    }

    pub async fn get_by_identity(
        &self,
        identity: &str,
    ) -> APIResponse<get_reminder_by_identity::APIResponse> {
        self.base
            .get(format!("reminders/identity/{}", identity), StatusCode::OK)
            .await
    }

    pub async fn mark_notified(
        &self,
        reminder_id: ID,
    ) -> APIResponse<mark_reminder_notified::APIResponse> {
        self.base
            .put(
                (),
                format!("reminders/{}/notified", reminder_id),
                StatusCode::OK,
            )
            .await
    }

    pub async fn delete(&self, reminder_id: ID) -> APIResponse<delete_reminder::APIResponse> {
        self.base
            .delete(format!("reminders/{}", reminder_id), StatusCode::OK)
            .await
    }

    pub async fn delete_by_identity(
        &self,
        identity: &str,
    ) -> APIResponse<delete_reminder_by_identity::APIResponse> {
        self.base
            .delete(format!("reminders/identity/{}", identity), StatusCode::OK)
            .await
    }

    pub async fn cleanup_notified(
        &self,
    ) -> APIResponse<cleanup_notified_reminders::APIResponse> {
        self.base
            .delete("reminders/cleanup".into(), StatusCode::OK)
            .await
    }

    pub async fn send_test_notification(
        &self,
        text: Option<String>,
    ) -> APIResponse<send_test_notification::APIResponse> {
        let body = send_test_notification::RequestBody { text };
        self.base
            .post(
                body,
                "reminders/test-notification".into(),
                StatusCode::OK,
            )
            .await
    }
}
