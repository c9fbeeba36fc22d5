use anyhow::Context;

use restock_api::app::{build_app, services::AppServices};
use restock_api::config::ApiConfig;
use restock_inventory::InventoryTable;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    restock_observability::init();

    let config = ApiConfig::from_env().context("invalid configuration")?;

    // A bad data file is fatal: never start serving a partial table.
    let table = InventoryTable::load_path(&config.data_path).with_context(|| {
        format!("failed to load inventory from {}", config.data_path.display())
    })?;

    let app = build_app(AppServices::new(table, config.policy));

    let listener = tokio::net::TcpListener::bind(config.bind_addr)
        .await
        .with_context(|| format!("failed to bind {}", config.bind_addr))?;

    tracing::info!("listening on {}", listener.local_addr()?);

    axum::serve(listener, app).await?;
    Ok(())
}
