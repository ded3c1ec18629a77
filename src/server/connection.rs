// Connection handling module
// Serves a single accepted TCP connection in its own task

use std::net::SocketAddr;
use std::sync::Arc;

use hyper::server::conn::http1;
use hyper::service::service_fn;
use hyper_util::rt::TokioIo;

use crate::config::AppState;
use crate::handler;
use crate::logger;

/// Accept a connection and hand it to a new task.
///
/// There is no connection limit and no admission control: every accepted
/// stream gets its own task.
///
/// # Arguments
///
/// * `stream` - The TCP stream to handle
/// * `peer_addr` - The peer's socket address, passed to every request
/// * `state` - Shared application state
pub fn accept_connection(
    stream: tokio::net::TcpStream,
    peer_addr: SocketAddr,
    state: &Arc<AppState>,
) {
    if state.access_log() {
        logger::log_action(&format!("[Connection] Accepted from: {peer_addr}"));
    }

    handle_connection(stream, peer_addr, Arc::clone(state));
}

/// Serve HTTP/1.1 with keep-alive on the stream until the client hangs up.
///
/// No read or handler timeout is applied, so a slow shell command holds the
/// connection open for as long as it runs.
fn handle_connection(stream: tokio::net::TcpStream, peer_addr: SocketAddr, state: Arc<AppState>) {
    tokio::spawn(async move {
        let io = TokioIo::new(stream);

        let mut builder = http1::Builder::new();
        builder.keep_alive(true);

        let conn = builder.serve_connection(
            io,
            service_fn(move |req| handler::handle_request(req, Arc::clone(&state), peer_addr)),
        );

        if let Err(err) = conn.await {
            logger::log_connection_error(&err);
        }
    });
}
