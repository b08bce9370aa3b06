use std::sync::Arc;

use anyhow::Context;
use tokio::net::TcpListener;
use tracing::info;

use twin_health_chat::{
    config::ServerConfig, routes, services::upstream::OpenAiCompatibleClient, state::AppState,
    telemetry,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    telemetry::init();

    let config = ServerConfig::from_env().context("invalid server configuration")?;

    let upstream = OpenAiCompatibleClient::from_config(&config.upstream);
    info!(url = upstream.url(), model = upstream.model(), "using completion API");

    let state = AppState::shared(Arc::new(upstream));
    let app = routes::create_router(&config.frontend_dir).with_state(state);

    let addr = config.bind_addr();
    let listener = TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;

    info!(%addr, frontend = %config.frontend_dir.display(), "Twin Health chat relay listening");
    axum::serve(listener, app).await?;

    Ok(())
}
