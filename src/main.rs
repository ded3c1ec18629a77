//! Deliberately vulnerable HTTP server for exploitation and secure-coding labs.
//!
//! Never expose it to an untrusted network.

use std::sync::Arc;

mod config;
mod error;
mod handler;
mod http;
mod insecure;
mod logger;
mod secrets;
mod server;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Optional first argument: config file path (without extension)
    let cfg = match std::env::args().nth(1) {
        Some(path) => config::Config::load_from(&path)?,
        None => config::Config::load()?,
    };
    logger::init(&cfg)?;

    // Multi-thread runtime, worker count from config when set
    let mut runtime_builder = tokio::runtime::Builder::new_multi_thread();
    runtime_builder.enable_all();
    if let Some(workers) = cfg.server.workers {
        runtime_builder.worker_threads(workers);
    }
    let runtime = runtime_builder.build()?;

    runtime.block_on(async_main(cfg))
}

async fn async_main(cfg: config::Config) -> Result<(), Box<dyn std::error::Error>> {
    let addr = cfg.get_socket_addr()?;
    let state = Arc::new(config::AppState::new(&cfg));

    // Uploads land here; traversal out of it is left open on purpose
    tokio::fs::create_dir_all(&state.storage_dir).await?;

    let listener = server::create_listener(addr)?;
    logger::log_server_start(&addr, &cfg, &state.storage_dir);

    let signals = Arc::new(server::SignalHandler::new());
    server::start_signal_handler(Arc::clone(&signals));

    server::start_server_loop(listener, state, signals).await;
    Ok(())
}
