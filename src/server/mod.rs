// Server module entry
// Listener construction, accept loop, per-connection serving, signals

pub mod connection;
pub mod listener;
pub mod signal;

pub use listener::create_listener;

use crate::config::AppState;
use crate::logger;
use std::sync::Arc;
use tokio::net::TcpListener;
use tokio::sync::Notify;

/// Accept connections until the shutdown signal fires.
///
/// Accept errors are logged and the loop keeps going; only the signal
/// ends it.
pub async fn run(listener: TcpListener, state: Arc<AppState>, shutdown: Arc<Notify>) {
    loop {
        tokio::select! {
            accept_result = listener.accept() => {
                match accept_result {
                    Ok((stream, peer_addr)) => {
                        connection::accept_connection(stream, peer_addr, Arc::clone(&state));
                    }
                    Err(e) => {
                        logger::log_error(&format!("Failed to accept connection: {e}"));
                    }
                }
            }

            () = shutdown.notified() => {
                logger::log_shutdown();
                return;
            }
        }
    }
}
