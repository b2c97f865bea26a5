use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use anyhow::Context;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use moveo_api::{app, app_config::Config, state::{AppState, AuthConfig}};
use moveo_catalog::Ledger;
use moveo_core::FixedCredentialVerifier;
use moveo_genai::{DisabledGenerator, GeminiClient, TextGenerator};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "moveo_api=debug,moveo_catalog=info,moveo_genai=info,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::load().context("Failed to load config")?;
    tracing::info!("Starting Moveo API on port {}", config.server.port);

    let ledger = if config.ledger.seed_fleet {
        Ledger::with_fleet()
    } else {
        Ledger::new()
    };
    tracing::info!("Ledger ready with {} trains", ledger.trains().len());

    let generator: Arc<dyn TextGenerator> = match config.genai_api_key() {
        Some(key) => Arc::new(
            GeminiClient::new(key)
                .with_base_url(config.genai.base_url.as_str())
                .with_model(config.genai.model.as_str())
                .with_timeout(Duration::from_secs(config.genai.timeout_seconds))
                .context("Failed to build Gemini client")?,
        ),
        None => {
            tracing::warn!("Gemini API key not found. AI features will be disabled.");
            Arc::new(DisabledGenerator)
        }
    };

    let identity = Arc::new(FixedCredentialVerifier::new(
        config.auth.admin_email.clone(),
        config.auth.admin_password.clone(),
    ));

    let app_state = AppState::new(
        ledger,
        generator,
        identity,
        AuthConfig {
            secret: config.auth.jwt_secret.clone(),
            expiration: config.auth.jwt_expiration_seconds,
        },
    );

    let app = app(app_state);

    let addr = SocketAddr::from(([0, 0, 0, 0], config.server.port));
    tracing::info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;
    axum::serve(listener, app).await.context("Server error")?;

    Ok(())
}
