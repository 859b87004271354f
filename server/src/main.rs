mod api;
mod config;
mod models;

use std::sync::Arc;

use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use utoipa_swagger_ui::SwaggerUi;

use spacely_core::http::{FetchClient, HttpClient};
use spacely_core::llm::{create_provider_from_env, ChatProvider};

use crate::config::ServerConfig;

/// Application state shared across all handlers.
///
/// Everything here is read-only: each request fetches its own catalog and
/// makes its own gateway call, so no cross-request locking is needed.
#[derive(Clone)]
pub struct AppState {
    pub http: Arc<dyn HttpClient>,
    /// None when no AI credential was configured; chat requests then fail
    /// with a configuration error instead of crashing the process.
    pub ai: Option<Arc<dyn ChatProvider>>,
    pub catalog_url: String,
}

fn init_telemetry() {
    let fmt_layer = tracing_subscriber::fmt::layer();
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .init();
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_telemetry();

    let config = ServerConfig::from_env();

    let http: Arc<dyn HttpClient> = Arc::new(FetchClient::new()?);

    let ai: Option<Arc<dyn ChatProvider>> = match create_provider_from_env() {
        Ok(provider) => {
            tracing::info!(
                provider = provider.provider_name(),
                model = provider.model_name(),
                "chat provider configured"
            );
            Some(Arc::from(provider))
        }
        Err(e) => {
            tracing::warn!(error = %e, "starting without a chat provider");
            None
        }
    };

    let state = AppState {
        http,
        ai,
        catalog_url: config.catalog_url.clone(),
    };

    // The chat widget is served from another origin; answer pre-flight
    // requests permissively.
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let app = api::router()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", api::openapi()))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state);

    let listener = tokio::net::TcpListener::bind(&config.bind_addr).await?;
    tracing::info!(addr = %config.bind_addr, "listening");
    axum::serve(listener, app).await?;

    Ok(())
}
