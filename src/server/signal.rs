// Signal handling
//
// SIGTERM and SIGINT both trigger a clean exit; nothing else is handled.

use std::sync::Arc;
use tokio::sync::Notify;

/// Spawn the signal listener and return the shutdown notifier.
///
/// The accept loop selects on the returned `Notify` and exits when it
/// fires.
#[cfg(unix)]
pub fn spawn_shutdown_listener() -> Arc<Notify> {
    use tokio::signal::unix::{signal, SignalKind};

    let shutdown = Arc::new(Notify::new());
    let notifier = Arc::clone(&shutdown);

    tokio::spawn(async move {
        let mut sigterm =
            signal(SignalKind::terminate()).expect("Failed to register SIGTERM handler");
        let mut sigint =
            signal(SignalKind::interrupt()).expect("Failed to register SIGINT handler");

        tokio::select! {
            _ = sigterm.recv() => {
                println!("\n[SIGNAL] SIGTERM received, shutting down");
            }
            _ = sigint.recv() => {
                println!("\n[SIGNAL] SIGINT received, shutting down");
            }
        }
        notifier.notify_waiters();
    });

    shutdown
}

/// Windows fallback - only handles Ctrl+C
#[cfg(not(unix))]
pub fn spawn_shutdown_listener() -> Arc<Notify> {
    let shutdown = Arc::new(Notify::new());
    let notifier = Arc::clone(&shutdown);

    tokio::spawn(async move {
        if let Ok(()) = tokio::signal::ctrl_c().await {
            println!("\n[SIGNAL] Ctrl+C received, shutting down");
            notifier.notify_waiters();
        }
    });

    shutdown
}
