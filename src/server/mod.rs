pub mod handlers;
pub mod types;

use crate::{
    Result,
    config::Config,
    engine::{
        AnnounceSettings, EngineClient, HttpEngineClient, announce_to_engines,
        withdraw_from_engines,
    },
    inference::HttpInferenceClient,
    service::{ImageToTextService, Service},
};
use axum::{
    Router,
    extract::DefaultBodyLimit,
    routing::{get, post},
};
use std::{net::SocketAddr, sync::Arc, time::Duration};
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::{error, info};

pub fn router(state: handlers::AppState, body_limit: usize) -> Router {
    Router::new()
        .route("/status", get(handlers::status))
        .route("/compute", post(handlers::compute))
        .layer(DefaultBodyLimit::max(body_limit))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

pub async fn run(config: Config) -> Result<()> {
    // Shared HTTP connection pool for the inference API and the engines
    let http = reqwest::Client::new();

    let service: Arc<dyn Service> = Arc::new(ImageToTextService::new(
        config.service.url.clone(),
        Arc::new(HttpInferenceClient::with_client(http.clone())),
    ));
    let engine: Arc<dyn EngineClient> = Arc::new(HttpEngineClient::with_client(http));

    let settings = AnnounceSettings {
        engine_urls: config.engine.urls.clone(),
        retries: config.engine.announce_retries,
        retry_delay: Duration::from_secs(config.engine.announce_retry_delay),
    };

    let announcer = {
        let engine = engine.clone();
        let service = service.clone();
        let settings = settings.clone();
        tokio::spawn(async move {
            let announced =
                announce_to_engines(engine.as_ref(), service.description(), &settings).await;
            info!(
                "Service announced to {}/{} engines",
                announced,
                settings.engine_urls.len()
            );
        })
    };

    let app = router(
        handlers::AppState {
            service: service.clone(),
        },
        config.server.body_limit,
    );

    let addr = SocketAddr::new(config.server.host.parse()?, config.server.port);

    info!("Starting server on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    announcer.abort();
    withdraw_from_engines(engine.as_ref(), service.description(), &settings.engine_urls).await;

    Ok(())
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => info!("Shutting down..."),
        Err(e) => error!("Failed to listen for shutdown signal: {}", e),
    }
}
