use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use parlor_server::config::Config;
use parlor_server::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "parlor_server=info".into()),
        )
        .init();

    let config = Config::from_env()?;
    let addr = format!("127.0.0.1:{}", config.port);
    let app = parlor_server::app_router(AppState::new(config));

    tracing::info!("Parlor server listening on {addr}");

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}
