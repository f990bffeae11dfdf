// Configuration types
// One struct per config.toml section, deserialized by the config crate.

use serde::Deserialize;

/// Main configuration structure
#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub server: ServerConfig,
    pub files: FilesConfig,
    pub logging: LoggingConfig,
}

/// Listener configuration
#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// Tokio worker thread count; defaults to the number of CPU cores
    #[serde(default)]
    pub workers: Option<usize>,
}

/// File serving configuration
#[derive(Debug, Deserialize, Clone)]
pub struct FilesConfig {
    /// Directory all request paths resolve beneath
    pub root: String,
    /// Files tried, in order, when a request names a directory
    #[serde(default = "default_index_files")]
    pub index_files: Vec<String>,
}

fn default_index_files() -> Vec<String> {
    vec!["index.html".to_string(), "index.htm".to_string()]
}

/// Logging configuration
#[derive(Debug, Deserialize, Clone)]
pub struct LoggingConfig {
    /// Write one log line per GET request
    pub access_log: bool,
    /// Log every accepted connection (noisy, off by default)
    #[serde(default)]
    pub log_connections: bool,
    /// Access log file path (stdout if not set)
    #[serde(default)]
    pub access_log_file: Option<String>,
    /// Error log file path (stderr if not set)
    #[serde(default)]
    pub error_log_file: Option<String>,
}
