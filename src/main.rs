//! Binary entry point: load configuration, bind the listener, serve until
//! a shutdown signal arrives.

use std::sync::Arc;

use servedir::config::{AppContext, Config};
use servedir::{logger, server};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cfg = Config::load()?;
    logger::init(&cfg)?;

    // Root is validated and canonicalized before anything listens
    let ctx = Arc::new(AppContext::new(cfg)?);

    let mut runtime_builder = tokio::runtime::Builder::new_multi_thread();
    runtime_builder.enable_all();
    if let Some(workers) = ctx.config.server.workers {
        runtime_builder.worker_threads(workers);
    }
    let runtime = runtime_builder.build()?;

    runtime.block_on(async_main(ctx))
}

async fn async_main(ctx: Arc<AppContext>) -> Result<(), Box<dyn std::error::Error>> {
    let addr = ctx.config.socket_addr()?;
    let listener = server::bind_listener(addr)
        .map_err(|e| format!("failed to bind listen address {addr}: {e}"))?;
    let local_addr = listener.local_addr()?;

    let shutdown = server::signal::spawn_shutdown_listener();
    logger::log_server_start(&local_addr, &ctx.root, &ctx.config);

    server::run(listener, ctx, shutdown).await
}
