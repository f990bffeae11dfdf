//! Logger module
//!
//! Server lifecycle logging, per-request access logging, and error
//! logging. Output goes to stdout/stderr or to files per the `[logging]`
//! configuration.

mod format;
pub mod writer;

use crate::config::Config;
use std::net::SocketAddr;
use std::path::Path;

/// Initialize the logger with configuration
///
/// Should be called once at application startup.
pub fn init(config: &Config) -> std::io::Result<()> {
    writer::init(
        config.logging.access_log_file.as_deref(),
        config.logging.error_log_file.as_deref(),
    )
}

/// Write to info/access log
fn write_info(message: &str) {
    match writer::get() {
        Some(w) => w.write_access(message),
        None => println!("{message}"),
    }
}

/// Write to error log
fn write_error(message: &str) {
    match writer::get() {
        Some(w) => w.write_error(message),
        None => eprintln!("{message}"),
    }
}

/// Startup banner: where we listen, what we serve, how to stop.
pub fn log_server_start(addr: &SocketAddr, root: &Path, config: &Config) {
    write_info("======================================");
    write_info("Static file server started");
    write_info(&format!("Serving directory: {}", root.display()));
    write_info(&format!("Listening on: http://{addr}"));
    write_info("Reachable at:");
    write_info(&format!("  - http://localhost:{}", config.server.port));
    write_info(&format!("  - http://127.0.0.1:{}", config.server.port));
    write_info("Press Ctrl+C to stop");
    write_info("======================================\n");
    write_info("Request log:");
    write_info("--------------------------------------------------");
}

/// One line per GET request: `[<timestamp>] GET <target>`
pub fn log_get_request(target: &str) {
    write_info(&format::request_line("GET", target));
}

pub fn log_connection_accepted(peer_addr: &SocketAddr) {
    write_info(&format!("[Connection] Accepted from: {peer_addr}"));
}

pub fn log_connection_error(err: &impl std::fmt::Debug) {
    write_error(&format!("[ERROR] Failed to serve connection: {err:?}"));
}

/// Shutdown notice, printed before the process exits with status 0.
pub fn log_shutdown() {
    write_info("\nShutdown signal received, server stopped");
}

pub fn log_error(message: &str) {
    write_error(&format!("[ERROR] {message}"));
}

pub fn log_warning(message: &str) {
    write_error(&format!("[WARN] {message}"));
}
