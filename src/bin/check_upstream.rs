use anyhow::{Context, Result};
use tracing::error;

use twin_health_chat::{
    config::UpstreamConfig,
    services::upstream::{ChatCompletion, ChatTurn, OpenAiCompatibleClient},
    telemetry,
};

/// Sends a bare "Hello" to the configured completion API to confirm the key works.
#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    telemetry::init_with_default("warn");

    let config = UpstreamConfig::from_env().context("upstream is not configured")?;
    let client = OpenAiCompatibleClient::from_config(&config);
    println!("Checking {} with model {}", client.url(), client.model());

    match client.complete(&[ChatTurn::user("Hello")]).await {
        Ok(reply) => {
            println!("✅ API key is valid. Reply: {reply}");
            Ok(())
        }
        Err(e) => {
            error!(error = %e, "upstream check failed");
            anyhow::bail!("API key is invalid or the provider is unreachable: {e}")
        }
    }
}
