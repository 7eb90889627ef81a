use contact_form::configuration::get_configuration;
use contact_form::startup::Application;
use contact_form::telemetry::{get_subscriber, init_subscriber};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    let subscriber = get_subscriber("contact_form".into(), "info".into(), std::io::stdout);
    init_subscriber(subscriber);

    let configuration = get_configuration().expect("Failed to read configuration");

    let app = Application::build(configuration)?;
    app.run_until_stopped().await
}
