use std::process::ExitCode;
use std::sync::Arc;

mod config;
mod error;
mod files;
mod handler;
mod http;
mod logger;
mod server;

use error::ServerError;

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            logger::log_error(&e.to_string());
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<(), ServerError> {
    let cfg = config::Config::load()?;
    logger::init(&cfg).map_err(ServerError::Logger)?;

    // One runtime thread per pool slot
    let runtime = tokio::runtime::Builder::new_multi_thread()
        .worker_threads(cfg.server.workers)
        .enable_all()
        .build()
        .map_err(ServerError::Runtime)?;

    runtime.block_on(async_main(cfg))
}

async fn async_main(cfg: config::Config) -> Result<(), ServerError> {
    let addr = cfg.get_socket_addr()?;
    let listener = server::create_listener(addr)?;

    let state = Arc::new(config::AppState::new(cfg));
    if !state.root.path().is_dir() {
        logger::log_warning(&format!(
            "Root directory {} is not an accessible directory, every request will 404",
            state.root.path().display()
        ));
    }

    logger::log_server_start(&listener.local_addr().unwrap_or(addr));

    server::serve(listener, state).await;
    Ok(())
}
