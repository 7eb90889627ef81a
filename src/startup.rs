use std::net::TcpListener;

use actix_web::{dev::Server, App, HttpServer};
use tracing_actix_web::TracingLogger;

use crate::{
    configuration::Settings,
    routes::{contact, health_check, subscribe},
};

/// A running application
pub struct Application {
    port: u16,
    server: Server,
}

impl Application {
    /// Build an HTTP server running our app. The behavior of the app is configured
    /// through the `settings` argument.
    pub fn build(settings: Settings) -> std::io::Result<Self> {
        let listener = TcpListener::bind(settings.application.address())?;
        let port = listener.local_addr()?.port();

        let server = run(listener)?;
        Ok(Self { port, server })
    }

    /// The port that the app is listening on
    pub fn port(&self) -> u16 {
        self.port
    }

    /// Listen and handle requests until we receive a stop signal
    pub async fn run_until_stopped(self) -> std::io::Result<()> {
        self.server.await
    }
}

/// Starts a server, listening on `listener`, running in the background and returns it
fn run(listener: TcpListener) -> std::io::Result<Server> {
    let server = HttpServer::new(|| {
        App::new()
            .wrap(TracingLogger::default())
            .service(health_check)
            .service(contact)
            .service(subscribe)
    })
    .listen(listener)?
    .run();

    Ok(server)
}
