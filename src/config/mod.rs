// Configuration module entry point
// Layers config.toml, environment variables, and built-in defaults.

mod state;
mod types;

use std::net::SocketAddr;

// Re-export public types
pub use state::AppContext;
pub use types::{Config, FilesConfig, LoggingConfig, ServerConfig};

impl Config {
    /// Load configuration from the default "config.toml" next to the binary.
    pub fn load() -> Result<Self, config::ConfigError> {
        Self::load_from("config")
    }

    /// Load configuration from the specified file path (without extension).
    ///
    /// The file is optional; environment variables with the `SERVEDIR`
    /// prefix override it (`SERVEDIR_SERVER__PORT=8080`,
    /// `SERVEDIR_FILES__ROOT=/srv/site`).
    pub fn load_from(config_path: &str) -> Result<Self, config::ConfigError> {
        let settings = config::Config::builder()
            .add_source(config::File::with_name(config_path).required(false))
            .add_source(
                config::Environment::with_prefix("SERVEDIR")
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            )
            .set_default("server.host", "0.0.0.0")?
            .set_default("server.port", 3000)?
            .set_default("files.root", ".")?
            .set_default("logging.access_log", true)?
            .build()?;

        settings.try_deserialize()
    }

    pub fn socket_addr(&self) -> Result<SocketAddr, String> {
        format!("{}:{}", self.server.host, self.server.port)
            .parse()
            .map_err(|e| {
                format!(
                    "invalid listen address '{}:{}': {e}",
                    self.server.host, self.server.port
                )
            })
    }
}
