// Connection handling
// One spawned task per accepted connection; requests on a connection are
// served sequentially by hyper's HTTP/1 state machine

use hyper::server::conn::http1;
use hyper::service::service_fn;
use hyper_util::rt::TokioIo;
use std::net::SocketAddr;
use std::sync::Arc;

use crate::config::AppState;
use crate::handler;
use crate::logger;

/// Serve one accepted connection on its own task.
///
/// Requests share nothing but the immutable `AppState`, so concurrent
/// connections need no coordination.
pub fn accept_connection(
    stream: tokio::net::TcpStream,
    peer_addr: SocketAddr,
    state: Arc<AppState>,
) {
    tokio::spawn(async move {
        let io = TokioIo::new(stream);

        let conn = http1::Builder::new().serve_connection(
            io,
            service_fn(move |req| {
                let state = Arc::clone(&state);
                async move { handler::handle_request(req, state, peer_addr).await }
            }),
        );

        if let Err(err) = conn.await {
            logger::log_connection_error(&err);
        }
    });
}
