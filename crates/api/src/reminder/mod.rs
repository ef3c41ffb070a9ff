use actix_web::web;

mod cleanup_notified_reminders;
mod create_batch_reminders;
mod create_single_reminder;
mod delete_reminder;
mod get_reminder;
mod get_reminders;
mod handle_inbound_commands;
mod mark_reminder_notified;
mod send_due_reminders;
mod send_test_notification;
mod subscribers;

use cleanup_notified_reminders::cleanup_notified_reminders_controller;
pub use cleanup_notified_reminders::CleanupNotifiedRemindersUseCase;
use create_batch_reminders::create_batch_reminders_controller;
pub use create_batch_reminders::CreateBatchRemindersUseCase;
use create_single_reminder::create_single_reminder_controller;
use delete_reminder::{delete_reminder_by_identity_controller, delete_reminder_controller};
use get_reminder::{get_reminder_by_identity_controller, get_reminder_controller};
use get_reminders::{
    get_pending_reminders_controller, get_reminders_by_batch_controller,
    get_reminders_controller, search_reminders_controller,
};
pub use handle_inbound_commands::HandleInboundCommandsUseCase;
use mark_reminder_notified::mark_reminder_notified_controller;
pub use send_due_reminders::SendDueRemindersUseCase;
use send_test_notification::send_test_notification_controller;

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route(
        "/reminders",
        web::post().to(create_batch_reminders_controller),
    );
    cfg.route(
        "/reminders/single",
        web::post().to(create_single_reminder_controller),
    );
    cfg.route(
        "/reminders/test-notification",
        web::post().to(send_test_notification_controller),
    );

    cfg.route("/reminders", web::get().to(get_reminders_controller));
    cfg.route(
        "/reminders/pending",
        web::get().to(get_pending_reminders_controller),
    );
    cfg.route(
        "/reminders/search",
        web::get().to(search_reminders_controller),
    );
    cfg.route(
        "/reminders/batch/{batch}",
        web::get().to(get_reminders_by_batch_controller),
    );
    cfg.route(
        "/reminders/identity/{identity}",
        web::get().to(get_reminder_by_identity_controller),
    );

    // Bulk delete must be registered before `{reminder_id}`
    cfg.route(
        "/reminders/cleanup",
        web::delete().to(cleanup_notified_reminders_controller),
    );
    cfg.route(
        "/reminders/identity/{identity}",
        web::delete().to(delete_reminder_by_identity_controller),
    );

    cfg.route(
        "/reminders/{reminder_id}",
        web::get().to(get_reminder_controller),
    );
    cfg.route(
        "/reminders/{reminder_id}/notified",
        web::put().to(mark_reminder_notified_controller),
    );
    cfg.route(
        "/reminders/{reminder_id}",
        web::delete().to(delete_reminder_controller),
    );
}
