mod helpers;

use helpers::setup::{spawn_app, DEFAULT_CHAT};
use lab_reminders_sdk::{
    APIErrorVariant, CreateBatchRemindersInput, CreateSingleReminderInput, ID,
};

fn batch(batch: &str, day_offset: Option<i32>) -> CreateBatchRemindersInput {
    CreateBatchRemindersInput {
        batch: batch.into(),
        day_offset,
    }
}

#[actix_web::test]
async fn test_status_ok() {
    let (_, sdk, _) = spawn_app().await;
    let res = sdk.status.check_health().await.expect("Expected to be up");
    assert!(!res.bot_enabled);
}

#[actix_web::test]
async fn test_create_batch_reminders_is_idempotent() {
    let (app, sdk, _) = spawn_app().await;

    let res = sdk
        .reminder
        .create_batch(batch("ab1234", None))
        .await
        .expect("Expected to create reminders");
    let identities: Vec<_> = res.reminders.iter().map(|r| r.identity.as_str()).collect();
    assert_eq!(
        identities,
        vec!["AB1234-48h", "AB1234-7d", "AB1234-3m", "AB1234-1y"]
    );
    assert!(res.reminders.iter().all(|r| !r.notified));

    let res = sdk
        .reminder
        .create_batch(batch("AB1234", Some(3)))
        .await
        .expect("Expected to plan the batch again");
    assert!(res.reminders.is_empty());

    let res = sdk.reminder.get_by_batch("AB1234").await.unwrap();
    assert_eq!(res.reminders.len(), 4);

    assert_eq!(
        app.channel.sent_messages(),
        vec![(DEFAULT_CHAT.to_string(), "Batch *AB1234* added!".to_string())]
    );
}

#[actix_web::test]
async fn test_create_batch_reminders_rejects_empty_batch() {
    let (_, sdk, _) = spawn_app().await;
    let err = sdk.reminder.create_batch(batch(" ", None)).await.unwrap_err();
    assert_eq!(err.variant, APIErrorVariant::BadClientData);
}

#[actix_web::test]
async fn test_duplicate_single_reminder_is_rejected() {
    let (_, sdk, _) = spawn_app().await;

    let created = sdk
        .reminder
        .create_single(CreateSingleReminderInput {
            batch: "cd5678".into(),
            interval_type: "12".into(),
            day_offset: None,
        })
        .await
        .expect("Expected to create reminder")
        .reminder;
    assert_eq!(created.identity, "CD5678-12");
    assert_eq!(created.interval_type, "12");

    let err = sdk
        .reminder
        .create_single(CreateSingleReminderInput {
            batch: "CD5678".into(),
            interval_type: "12".into(),
            day_offset: Some(5),
        })
        .await
        .unwrap_err();
    assert_eq!(err.variant, APIErrorVariant::Conflict);

    let stored = sdk.reminder.get_by_identity("CD5678-12").await.unwrap();
    assert_eq!(stored.reminder, created);
}

#[actix_web::test]
async fn test_get_reminders() {
    let (_, sdk, _) = spawn_app().await;
    sdk.reminder
        .create_batch(batch("AB1234", None))
        .await
        .unwrap();
    sdk.reminder
        .create_batch(batch("AB1234C", Some(-1)))
        .await
        .unwrap();

    let all = sdk.reminder.get_all().await.unwrap().reminders;
    assert_eq!(all.len(), 8);
    assert!(all.windows(2).all(|pair| pair[0].due <= pair[1].due));

    let found = sdk.reminder.search("b1234c").await.unwrap().reminders;
    assert_eq!(found.len(), 4);
    assert!(found.iter().all(|r| r.batch == "AB1234C"));

    let reminder = &all[0];
    let res = sdk.reminder.get(reminder.id.clone()).await.unwrap();
    assert_eq!(&res.reminder, reminder);
    let res = sdk.reminder.get_by_identity(&reminder.identity).await.unwrap();
    assert_eq!(&res.reminder, reminder);

    let err = sdk.reminder.get(ID::default()).await.unwrap_err();
    assert_eq!(err.variant, APIErrorVariant::NotFound);
    let err = sdk.reminder.get_by_identity("XX0000-48h").await.unwrap_err();
    assert_eq!(err.variant, APIErrorVariant::NotFound);
}

#[actix_web::test]
async fn test_get_reminder_with_malformed_id() {
    let (_, _, address) = spawn_app().await;
    let res = reqwest::get(format!("{}/api/v1/reminders/not-a-uuid", address))
        .await
        .unwrap();
    assert_eq!(res.status(), reqwest::StatusCode::NOT_FOUND);
}

#[actix_web::test]
async fn test_mark_notified_and_cleanup() {
    let (_, sdk, _) = spawn_app().await;
    let created = sdk
        .reminder
        .create_batch(batch("AB1234", None))
        .await
        .unwrap()
        .reminders;

    for reminder in &created[..2] {
        for _ in 0..2 {
            let res = sdk.reminder.mark_notified(reminder.id.clone()).await.unwrap();
            assert!(res.reminder.notified);
            assert_eq!(res.reminder.due, reminder.due);
        }
    }

    let pending = sdk.reminder.get_pending().await.unwrap().reminders;
    assert_eq!(pending, created[2..].to_vec());

    let res = sdk.reminder.cleanup_notified().await.unwrap();
    assert_eq!(res.deleted_count, 2);
    let res = sdk.reminder.cleanup_notified().await.unwrap();
    assert_eq!(res.deleted_count, 0);

    let all = sdk.reminder.get_all().await.unwrap().reminders;
    assert_eq!(all, created[2..].to_vec());
}

#[actix_web::test]
async fn test_delete_reminders() {
    let (_, sdk, _) = spawn_app().await;
    let created = sdk
        .reminder
        .create_batch(batch("AB1234", None))
        .await
        .unwrap()
        .reminders;

    let res = sdk.reminder.delete(created[0].id.clone()).await.unwrap();
    assert_eq!(res.reminder, created[0]);
    let err = sdk.reminder.delete(created[0].id.clone()).await.unwrap_err();
    assert_eq!(err.variant, APIErrorVariant::NotFound);

    let res = sdk.reminder.delete_by_identity("AB1234-7d").await.unwrap();
    assert_eq!(res.reminder, created[1]);
    let err = sdk
        .reminder
        .delete_by_identity("AB1234-7d")
        .await
        .unwrap_err();
    assert_eq!(err.variant, APIErrorVariant::NotFound);

    assert_eq!(sdk.reminder.get_all().await.unwrap().reminders.len(), 2);
}

#[actix_web::test]
async fn test_send_test_notification() {
    let (app, sdk, _) = spawn_app().await;
    let res = sdk
        .reminder
        .send_test_notification(Some("ping".into()))
        .await
        .unwrap();
    assert_eq!(res.chat_id, DEFAULT_CHAT);
    assert_eq!(res.text, "ping");
    assert_eq!(
        app.channel.sent_messages(),
        vec![(DEFAULT_CHAT.to_string(), "ping".to_string())]
    );
}
