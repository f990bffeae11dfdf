// Connection handling module
// Serves one accepted TCP connection on a spawned task.

use hyper::server::conn::http1;
use hyper::service::service_fn;
use hyper_util::rt::TokioIo;
use std::sync::Arc;

use crate::config::AppContext;
use crate::handler;
use crate::logger;

/// Serve an accepted connection in a spawned task.
///
/// The stream is wrapped in `TokioIo` and served with the request handler
/// over HTTP/1.1 with keep-alive. Connection errors (including clients
/// disconnecting mid-response) are logged and never reach the accept loop.
pub fn spawn_connection(
    stream: tokio::net::TcpStream,
    peer_addr: std::net::SocketAddr,
    ctx: Arc<AppContext>,
) {
    if ctx.config.logging.log_connections {
        logger::log_connection_accepted(&peer_addr);
    }

    tokio::spawn(async move {
        let io = TokioIo::new(stream);

        let mut builder = http1::Builder::new();
        builder.keep_alive(true);

        let conn = builder.serve_connection(
            io,
            service_fn(move |req| {
                let ctx = Arc::clone(&ctx);
                async move { handler::handle_request(req, ctx).await }
            }),
        );

        if let Err(err) = conn.await {
            logger::log_connection_error(&err);
        }
    });
}
