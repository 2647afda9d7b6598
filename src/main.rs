mod model;
mod server;

use crate::server::{config::Config, error::AppError, startup, state::AppState};

#[tokio::main]
async fn main() -> Result<(), AppError> {
    dotenvy::dotenv().ok();
    startup::init_tracing();

    let config = Config::from_env()?;

    let connections = startup::connection_provider(&config).await?;
    let app = startup::app(AppState::new(connections), &config);

    let address = config.bind_address();
    let listener = tokio::net::TcpListener::bind(&address).await?;
    tracing::info!("Listening on http://{}", address);

    axum::serve(listener, app).await?;

    Ok(())
}
