use axum::Router;
use tower_http::{services::ServeDir, trace::TraceLayer};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::server::{
    config::Config, connection::ConnectionProvider, error::AppError, router, state::AppState,
};

/// Installs the global tracing subscriber.
///
/// Reads the filter from `RUST_LOG`, falling back to `info` when it is unset or invalid.
pub fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer())
        .init();
}

/// Builds the connection provider selected by the configuration.
///
/// A pool size of zero selects per-request connections; anything larger opens a shared
/// pool. Either way one connection is acquired, pinged and released so a misconfigured
/// database shows up in the log at startup. A failed check is not fatal: the database may
/// come up later, and each request reports its own connection failure.
///
/// # Arguments
/// - `config` - Application configuration with the database settings
///
/// # Returns
/// - `Ok(ConnectionProvider)` - Provider ready to hand out connections
/// - `Err(AppError::ConnectionErr)` - The driver rejected the pool configuration
pub async fn connection_provider(config: &Config) -> Result<ConnectionProvider, AppError> {
    let descriptor = config.connection_descriptor();

    let provider = if config.database_pool_size > 0 {
        tracing::info!(
            "Opening database pool with {} connections",
            config.database_pool_size
        );
        ConnectionProvider::pooled(&descriptor, config.database_pool_size).await?
    } else {
        tracing::info!("Opening a database connection per request");
        ConnectionProvider::per_request(descriptor)
    };

    match provider.acquire().await {
        Ok(conn) => {
            let ping = conn.ping().await;
            conn.release().await;

            match ping {
                Ok(()) => tracing::info!("Database connection verified"),
                Err(e) => tracing::warn!("Database is not reachable yet: {}", e),
            }
        }
        Err(e) => tracing::warn!("Database is not reachable yet: {}", e),
    }

    Ok(provider)
}

/// Assembles the full application: API routes, static front-end fallback and request
/// tracing.
///
/// Requests that match no API route are served from `static_dir`, with `index.html`
/// answering directory requests.
pub fn app(state: AppState, config: &Config) -> Router {
    router::router()
        .fallback_service(ServeDir::new(&config.static_dir).append_index_html_on_directories(true))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
