use std::net::SocketAddr;
use std::sync::Arc;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use items_backend::config::AppConfig;
use items_backend::db::Database;
use items_backend::{app, metrics, AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "items_backend=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    dotenvy::dotenv().ok();
    let config = AppConfig::load()?;

    tracing::info!("Starting items backend v{}", env!("CARGO_PKG_VERSION"));

    // Install Prometheus recorder before the first request arrives
    let metrics_handle = metrics::init_metrics();

    // The pool is lazy, so startup never blocks on the store
    let db = Database::connect(&config.database_url())?;
    match db.init_schema().await {
        Ok(()) => tracing::info!("Database initialized successfully"),
        // Degraded start: keep serving and let each request fail at the
        // gateway rather than refusing to boot.
        Err(e) => tracing::warn!("Database initialization failed: {}", e),
    }

    let state = Arc::new(AppState {
        config: config.clone(),
        db,
        metrics_handle,
    });

    // Start server
    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    tracing::info!("Server listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app(state)).await?;

    Ok(())
}
