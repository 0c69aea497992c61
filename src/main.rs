use role_service::application::RoleService;
use role_service::config::Config;
use role_service::domain::role::RoleRepository;
use role_service::interface::api::{build_router, init_metrics, AppState};
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[cfg(feature = "postgres")]
use role_service::infrastructure::persistence::{create_pool, run_migrations, PgRoleRepository};
#[cfg(not(feature = "postgres"))]
use role_service::infrastructure::persistence::InMemoryRoleRepository;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load configuration
    let config = Config::load()?;

    // Initialize tracing, RUST_LOG overrides the configured level
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.logging.level));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    info!("Starting role service");
    info!("Configuration loaded: {:?}", config.server);

    #[cfg(feature = "postgres")]
    let role_repository: Arc<dyn RoleRepository> = {
        info!("Initializing database connection...");
        let pool = create_pool(&config.database).await?;
        run_migrations(&pool).await?;
        Arc::new(PgRoleRepository::new(pool))
    };

    #[cfg(not(feature = "postgres"))]
    let role_repository: Arc<dyn RoleRepository> = {
        info!("Using in-memory role repository");
        Arc::new(InMemoryRoleRepository::new())
    };

    let state = AppState::new(RoleService::new(role_repository));

    info!("Initializing Prometheus metrics exporter");
    let prometheus_handle = init_metrics()?;

    let app = build_router(state, prometheus_handle);
    let listener = tokio::net::TcpListener::bind(config.bind_address()).await?;
    info!("REST API server listening on {}", config.bind_address());

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Shutting down...");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
    }
}
