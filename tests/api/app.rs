use contact_form::{
    configuration::get_configuration,
    startup::Application,
    telemetry::{get_subscriber, init_subscriber},
};
use once_cell::sync::Lazy;

// Ensure that we only initialize our subscriber once by wrapping in Lazy
static TRACING: Lazy<()> = Lazy::new(|| {
    let default_filter_level = "debug".into();
    let subscriber_name = "test".into();

    // We use an environment variable to decide whether to swallow logs.
    // Need two separate blocks because the generic types on get_subscriber differ
    if std::env::var("TEST_LOG").is_ok() {
        let subscriber = get_subscriber(subscriber_name, default_filter_level, std::io::stdout);
        init_subscriber(subscriber);
    } else {
        let subscriber = get_subscriber(subscriber_name, default_filter_level, std::io::sink);
        init_subscriber(subscriber);
    }
});

/// Description of a mock app spun up for integration testing
pub struct TestApp {
    /// Address to send requests to the mock app
    pub address: String,
}

impl TestApp {
    /// Send a POST with `body` to the subscribe endpoint of our mocked app
    pub async fn post_subscribe(&self, body: String) -> Result<reqwest::Response, reqwest::Error> {
        reqwest::Client::new()
            .post(&format!("{}/subscribe", self.address))
            .header("Content-type", "application/x-www-form-urlencoded")
            .body(body)
            .send()
            .await
    }

    /// Send a GET request for the contact page of our mocked app
    pub async fn get_contact(&self) -> Result<reqwest::Response, reqwest::Error> {
        reqwest::Client::new()
            .get(&format!("{}/contact", &self.address))
            .send()
            .await
    }

    /// Send a GET to the health_check API of our mocked app
    pub async fn get_health_check(&self) -> Result<reqwest::Response, reqwest::Error> {
        reqwest::Client::new()
            .get(&format!("{}/health_check", &self.address))
            .send()
            .await
    }
}

/// Spins up a testing app to write integration tests against.
/// Returns the address to connect to.
pub async fn spawn_app() -> TestApp {
    // TRACING will only run the first time this function is called.
    Lazy::force(&TRACING);

    let configuration = {
        let mut c = get_configuration().expect("Failed to read configuration");
        // Ask the OS for a random port
        c.application.port = 0;
        c
    };

    let app = Application::build(configuration).expect("Failed to build application");
    let address = format!("http://127.0.0.1:{}", app.port());
    let _ = tokio::spawn(app.run_until_stopped());

    TestApp { address }
}
