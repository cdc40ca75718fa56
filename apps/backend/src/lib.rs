pub mod config;
pub mod error;
pub mod models;
pub mod routes;
pub mod services;

use std::sync::Arc;

use anyhow::Context;
use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};
use flashcard_core::{FillerTable, HeuristicCardBuilder};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::Config;
use crate::services::generation::RemoteCardBuilder;
use crate::services::remote::{HuggingFaceClient, TextGenerator};

/// Largest accepted request body (file uploads included).
const MAX_BODY_BYTES: usize = 20 * 1024 * 1024;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub heuristic: Arc<HeuristicCardBuilder>,
    /// Present only when a remote model is configured.
    pub remote: Option<Arc<RemoteCardBuilder>>,
}

impl AppState {
    pub fn new(
        config: Config,
        heuristic: HeuristicCardBuilder,
        generator: Option<Arc<dyn TextGenerator>>,
    ) -> Self {
        let heuristic = Arc::new(heuristic);
        let remote = generator.map(|generator| {
            Arc::new(RemoteCardBuilder::new(
                generator,
                heuristic.clone(),
                config.remote.clone(),
            ))
        });

        Self {
            config: Arc::new(config),
            heuristic,
            remote,
        }
    }
}

/// Build the API router.
pub fn app(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health_check))
        .route("/api/subjects", get(routes::subjects::list))
        .route("/api/samples/:subject", get(routes::subjects::sample))
        .route("/api/extract", post(routes::extract::extract))
        .route("/api/generate", post(routes::generate::generate))
        .route("/api/export/:format", post(routes::export::export))
        .layer(DefaultBodyLimit::max(MAX_BODY_BYTES))
        .with_state(state)
}

pub async fn run() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::from_env()?;

    let filler = match &config.filler_table_path {
        Some(path) => {
            tracing::info!("Loading filler table from {}", path.display());
            let json = tokio::fs::read_to_string(path)
                .await
                .with_context(|| format!("reading filler table {}", path.display()))?;
            FillerTable::from_json(&json)?
        }
        None => FillerTable::builtin(),
    };

    let generator: Option<Arc<dyn TextGenerator>> = match &config.hf_api_token {
        Some(token) => {
            tracing::info!("Remote generation enabled using {}", config.hf_model_url);
            let client: Arc<dyn TextGenerator> = Arc::new(HuggingFaceClient::new(
                config.hf_model_url.clone(),
                token.clone(),
                config.remote.request_timeout,
            ));
            Some(client)
        }
        None => {
            tracing::info!("HF_API_TOKEN not set, only offline generation is available");
            None
        }
    };

    let addr = config.addr();
    let state = AppState::new(config, HeuristicCardBuilder::new(filler), generator);

    let app = app(state)
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http());

    tracing::info!("Starting server on {}", addr);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

async fn health_check() -> &'static str {
    "OK"
}
