mod telemetry;

use lab_reminders_api::Application;
use lab_reminders_infra::setup_context;
use telemetry::{get_subscriber, init_subscriber};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Variables already present in the environment take precedence
    dotenvy::dotenv().ok();
    openssl_probe::init_ssl_cert_env_vars();

    let subscriber = get_subscriber("lab_reminders_server".into(), "info".into());
    init_subscriber(subscriber)?;

    let context = setup_context().await;

    let app = Application::new(context).await?;
    app.start().await
}
