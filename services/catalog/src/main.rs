use std::net::SocketAddr;

use anyhow::Context as _;
use sea_orm::Database;
use tracing::info;

use cinema_catalog::config::CatalogConfig;
use cinema_catalog::router::build_router;
use cinema_catalog::state::AppState;
use cinema_core::tracing::init_tracing;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_tracing();

    let config = CatalogConfig::from_env();

    let db = Database::connect(&config.database_url)
        .await
        .context("failed to connect to database")?;

    let router = build_router(AppState { db });
    let http_addr = format!("0.0.0.0:{}", config.catalog_port);
    let listener = tokio::net::TcpListener::bind(&http_addr)
        .await
        .with_context(|| format!("failed to bind {http_addr}"))?;

    info!("catalog service listening on {http_addr}");
    axum::serve(
        listener,
        router.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .await
    .context("server error")?;
    Ok(())
}
