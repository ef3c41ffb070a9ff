use actix_web::{web, HttpResponse};
use lab_reminders_api_structs::get_service_health::*;
use lab_reminders_infra::LabContext;

async fn status(ctx: web::Data<LabContext>) -> HttpResponse {
    HttpResponse::Ok().json(APIResponse {
        message: "Yo! We are up!\r\n".into(),
        bot_enabled: ctx.config.bot.is_active(),
    })
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/", web::get().to(status));
}
