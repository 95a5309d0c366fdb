use std::sync::Arc;

use auth::TokenCodec;
use identity_service::config::Config;
use identity_service::identity::service::AuthService;
use identity_service::inbound::http::router::create_router;
use identity_service::outbound::directory::InMemoryCredentialDirectory;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "identity_service=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!(
        service = "identity-service",
        version = env!("CARGO_PKG_VERSION"),
        "Service starting"
    );

    let config = Config::load()?;

    tracing::info!(
        http_port = config.server.http_port,
        algorithm = %config.jwt.algorithm,
        access_token_expire_minutes = config.jwt.access_token_expire_minutes,
        refresh_token_expire_days = config.jwt.refresh_token_expire_days,
        "Configuration loaded"
    );

    let codec = Arc::new(TokenCodec::new(config.jwt.token_config()?)?);

    // No production directory backend is wired yet
    let directory = Arc::new(InMemoryCredentialDirectory::new());
    tracing::warn!("Using in-memory credential directory; principals do not survive restarts");

    let auth_service = Arc::new(AuthService::new(directory, codec));

    let router = create_router(auth_service, &config.server.allowed_origins);

    let address = format!("0.0.0.0:{}", config.server.http_port);
    let listener = tokio::net::TcpListener::bind(&address).await?;
    tracing::info!(address = %address, "HTTP server listening");

    axum::serve(listener, router).await?;

    Ok(())
}
