use serde::Deserialize;

/// App-wide configuration
#[derive(Clone, Deserialize)]
pub struct Settings {
    pub application: ApplicationSettings,
}

/// Where the HTTP server listens.
#[derive(Clone, Deserialize)]
pub struct ApplicationSettings {
    pub host: String,
    pub port: u16,
}

/// Reads app configuration from the default file location.
///
/// Returns an error if parsing the config file into a `Settings` struct fails. This
/// could be a problem reading from the file or a malformed file.
pub fn get_configuration() -> Result<Settings, config::ConfigError> {
    config::Config::builder()
        .add_source(config::File::with_name("configuration"))
        .build()?
        .try_deserialize()
}

impl ApplicationSettings {
    /// The `host:port` string to bind the listener to.
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
