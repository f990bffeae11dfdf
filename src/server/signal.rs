// Signal handling module
//
// SIGINT (Ctrl+C) and SIGTERM both request shutdown; the accept loop
// observes the notification, prints a notice, and the process exits 0.

use std::sync::Arc;
use tokio::sync::Notify;

/// Spawn a background task that waits for a shutdown signal (Unix).
///
/// Returns the notifier the accept loop should wait on.
#[cfg(unix)]
pub fn spawn_shutdown_listener() -> Arc<Notify> {
    use tokio::signal::unix::{signal, SignalKind};

    let notify = Arc::new(Notify::new());
    let shutdown = Arc::clone(&notify);

    tokio::spawn(async move {
        let mut sigterm =
            signal(SignalKind::terminate()).expect("Failed to register SIGTERM handler");
        let mut sigint =
            signal(SignalKind::interrupt()).expect("Failed to register SIGINT handler");

        tokio::select! {
            _ = sigterm.recv() => {}
            _ = sigint.recv() => {}
        }
        shutdown.notify_one();
    });

    notify
}

/// Non-Unix fallback: only Ctrl+C is supported.
#[cfg(not(unix))]
pub fn spawn_shutdown_listener() -> Arc<Notify> {
    let notify = Arc::new(Notify::new());
    let shutdown = Arc::clone(&notify);

    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            shutdown.notify_one();
        }
    });

    notify
}
