mod routes;

use mindful_app::{AppContext, RelayConfig};

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    tracing::info!("Starting MindfulMe LLM relay...");

    let config = match RelayConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("Invalid configuration: {}", e);
            std::process::exit(1);
        }
    };

    tracing::info!("GROQ_API_KEY: {}", config.masked_api_key());
    if config.api_key.is_none() {
        tracing::warn!("GROQ_API_KEY is not set; chat requests will be rejected by Groq");
    }
    tracing::info!("Relay configured with URL: {}", config.api_url);

    let app_context = match AppContext::new(config) {
        Ok(ctx) => ctx,
        Err(e) => {
            tracing::error!("Failed to initialize relay: {}", e);
            std::process::exit(1);
        }
    };
    let addr = app_context.config.bind_addr();

    let app = routes::router(app_context);

    let listener = match tokio::net::TcpListener::bind(addr).await {
        Ok(listener) => listener,
        Err(e) => {
            tracing::error!("Failed to bind {}: {}", addr, e);
            std::process::exit(1);
        }
    };

    tracing::info!("Listening on http://{}", addr);

    if let Err(e) = axum::serve(listener, app.into_make_service()).await {
        tracing::error!("Server error: {}", e);
        std::process::exit(1);
    }
}
