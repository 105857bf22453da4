//! Farm Dashboard - operator console for the flag farm
//!
//! Polls the farm server for flags and checkers, renders them, and lets an
//! operator page through flag history and add or remove checkers.

pub mod actions;
pub mod api;
pub mod checkers;
pub mod config;
pub mod console;
pub mod engine;
pub mod error;
pub mod format;
pub mod io;
pub mod pagination;
pub mod sanitize;
pub mod state;
pub mod table;
pub mod validate;

pub use config::{load_config, Config};
pub use error::{DashboardError, Result};

use std::net::SocketAddr;
use std::sync::Arc;

use tokio_util::sync::CancellationToken;

use crate::api::FarmApi;
use crate::engine::Engine;
use crate::io::ReqwestHttpClient;
use crate::pagination::Pagination;
use crate::sanitize::HtmlEscaper;

/// Run the dashboard with the given configuration until Ctrl-C
pub async fn run(config: Config) -> Result<()> {
    let http: Arc<dyn io::HttpClient> = Arc::new(ReqwestHttpClient::new());
    let cancel = CancellationToken::new();

    let api = FarmApi::new(&config.server.base_url, http);
    let pagination = Pagination::new(0, config.sync.rows);
    let state = state::new_state_handle(pagination, config.console.notice_history);
    let engine = Arc::new(Engine::new(
        api,
        Arc::new(HtmlEscaper),
        state,
        cancel.clone(),
    ));

    // Setup shutdown handler
    let cancel_for_signal = cancel.clone();
    tokio::spawn(async move {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to listen for ctrl-c");
        tracing::info!("Shutdown signal received");
        cancel_for_signal.cancel();
    });

    // Start console if enabled
    if config.console.enabled {
        let console_port = config.console.port;
        let console_engine = Arc::clone(&engine);
        let cancel_for_console = cancel.clone();

        tokio::spawn(async move {
            let router = console::build_router(console_engine);
            let addr = SocketAddr::from(([0, 0, 0, 0], console_port));
            tracing::info!("Console listening on http://{}", addr);

            let listener = match tokio::net::TcpListener::bind(addr).await {
                Ok(l) => l,
                Err(e) => {
                    tracing::error!(
                        "Failed to bind console to port {}: {}. Continuing without console.",
                        console_port,
                        e
                    );
                    return;
                }
            };

            axum::serve(listener, router)
                .with_graceful_shutdown(async move {
                    cancel_for_console.cancelled().await;
                })
                .await
                .ok();

            tracing::debug!("Console stopped");
        });
    }

    tracing::info!(
        "Polling {} every {:?}",
        config.server.base_url,
        config.sync.refresh_interval
    );

    // Run the refresh loop (blocks until cancelled)
    engine.run(config.sync.refresh_interval).await;
    tracing::info!("Farm dashboard stopped");

    Ok(())
}
