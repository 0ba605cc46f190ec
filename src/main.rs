use std::{net::SocketAddr, sync::Arc};
use tokio::net::TcpListener;
use tracing::info;

use pizza_catalog_rs::{
    create_app, init_observability, services::CatalogService, store::SqlitePizzaStore, Config,
    Metrics,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::from_environment()?;

    init_observability(
        &config.observability.service_name,
        &config.observability.service_version,
        &config.observability.log_level,
        config.observability.enable_json_logging,
    )?;

    info!("Starting pizza-catalog-rs service");
    info!(
        "Service: {} v{}",
        config.observability.service_name, config.observability.service_version
    );
    info!("Database: {}", config.database.database_url);

    let metrics = Arc::new(Metrics::new()?);
    info!("Metrics initialized successfully");

    // The store owns the pizzas table; connecting ensures the schema exists
    let store = SqlitePizzaStore::connect(
        &config.database.database_url,
        config.database.max_connections,
    )
    .await?;
    info!("Store initialized successfully");

    let catalog_service = Arc::new(CatalogService::new(Arc::new(store)));
    info!("Services initialized successfully");

    let app = create_app(metrics, catalog_service);

    let addr = SocketAddr::new(config.server.host.parse()?, config.server.port);
    let listener = TcpListener::bind(addr).await?;

    info!("Server listening on {}", addr);

    let shutdown_signal = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install CTRL+C signal handler");
        info!("Shutdown signal received");
    };

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal)
        .await?;

    info!("Server shutdown complete");
    Ok(())
}
