// Server module entry point
// Listener setup, accept loop, connection handling, shutdown signals.

pub mod connection;
pub mod listener;
pub mod signal;

use std::sync::Arc;
use tokio::net::TcpListener;
use tokio::sync::Notify;

use crate::config::AppContext;
use crate::logger;

// Re-export commonly used items
pub use listener::bind_listener;

/// Accept loop: serve connections until a shutdown notification arrives.
///
/// Accept failures are logged and the loop continues; only the shutdown
/// signal ends it. Returns Ok so the process exits with status 0 after a
/// signal-initiated stop.
pub async fn run(
    listener: TcpListener,
    ctx: Arc<AppContext>,
    shutdown: Arc<Notify>,
) -> Result<(), Box<dyn std::error::Error>> {
    loop {
        tokio::select! {
            accept_result = listener.accept() => {
                match accept_result {
                    Ok((stream, peer_addr)) => {
                        connection::spawn_connection(stream, peer_addr, Arc::clone(&ctx));
                    }
                    Err(e) => {
                        logger::log_error(&format!("Failed to accept connection: {e}"));
                    }
                }
            }

            () = shutdown.notified() => {
                logger::log_shutdown();
                return Ok(());
            }
        }
    }
}
