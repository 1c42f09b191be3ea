pub mod handlers;
pub mod types;

use crate::{
    Result,
    config::Config,
    llm::OpenAiClient,
    resume::{CompletionGateway, CompletionSettings},
};
use axum::{
    Router,
    routing::{get, post},
};
use handlers::AppState;
use std::{net::SocketAddr, sync::Arc};
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/api/generate-resume", post(handlers::generate_resume))
        .route(
            "/api/suggest-improvements",
            post(handlers::suggest_improvements),
        )
        .route("/api/render-resume", post(handlers::render_resume))
        .route("/health", get(handlers::health))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

pub async fn run(config: Config) -> Result<()> {
    let client = OpenAiClient::new(&config.llm);
    let gateway = CompletionGateway::new(Arc::new(client), CompletionSettings::from(&config.llm));

    info!(
        "Using model {} (temperature {})",
        gateway.settings().model,
        gateway.settings().temperature
    );

    let app = router(AppState {
        gateway: Arc::new(gateway),
    });

    let addr = SocketAddr::new(config.server.host.parse()?, config.server.port);

    info!("Starting server on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
