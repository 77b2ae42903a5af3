use palette::prelude::*;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("palette=info,tower_http=info")),
        )
        .init();

    let config = PaletteConfig::from_env()?;
    let gemini = GeminiClient::from_config(&config.genai)?;

    tracing::info!(model = %config.genai.model, "starting palette");

    ServerBuilder::new()
        .with_config(config)
        .with_catalog(InMemoryCatalog::seeded())
        .with_generative_service(gemini)
        .serve_configured()
        .await
}
