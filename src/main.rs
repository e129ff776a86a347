use std::sync::Arc;

mod config;
mod handler;
mod headers;
mod http;
mod logger;
mod server;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cfg = config::Config::load()?;

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()?;

    runtime.block_on(async_main(cfg))
}

async fn async_main(cfg: config::Config) -> Result<(), Box<dyn std::error::Error>> {
    let addr = cfg.socket_addr()?;
    let state = Arc::new(config::AppState::new(&cfg)?);

    // Bind failure (port in use, permission) propagates out of main:
    // non-zero exit with the io error as diagnostic
    let listener = server::create_listener(addr)?;

    logger::log_server_start(&addr, &cfg.display_url(), &state.root);

    let shutdown = server::signal::spawn_shutdown_listener();
    server::run(listener, state, shutdown).await;

    Ok(())
}
