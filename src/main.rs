use anyhow::Context;
use axum::Router;
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::EnvFilter;

use cable_validator::config::{gemini::GeminiConfig, server::ServerConfig};
use cable_validator::modules::{self, design::crud::CannedDesignRecords};
use cable_validator::services::{design_validation::DesignValidator, gemini::GeminiClient};
use cable_validator::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let gemini_config = GeminiConfig::from_env().context("GEMINI_API_KEY must be set")?;
    let server_config = ServerConfig::from_env()?;

    let gemini = GeminiClient::new(gemini_config);
    info!(model = gemini.model(), "Gemini client ready");

    let validator = DesignValidator::new(Arc::new(gemini), Arc::new(CannedDesignRecords));
    let state = AppState {
        validator: Arc::new(validator),
    };

    let app = Router::new()
        .merge(modules::design::routes::routes())
        .layer(server_config.cors_layer()?)
        .with_state(state);

    let addr = server_config.bind_address();
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;

    info!("Listening on {}", addr);
    axum::serve(listener, app).await?;

    Ok(())
}
