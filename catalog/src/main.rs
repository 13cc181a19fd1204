use std::fs::File;

use catalog::{AppConfig, Cli};
use catalog_axum::{router_with_schema, start_server};
use catalog_sqlite::Db;
use tracing_subscriber::{layer::SubscriberExt as _, util::SubscriberInitExt as _};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // By convention, we leverage `tracing` to instrument and log various
    // operations throughout this project.
    // Accordingly, we likely want to subscribe to these events so we can
    // write them to stdio and possibly some durable location.
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::from_default_env())
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::import()?;

    // Create config with proper layering of CLI args
    let AppConfig { server, database } = AppConfig::load(&cli)?;

    // The database handle is the application state: every request opens its
    // own context from it.
    let db = Db::open(&database).await?;

    // If requested, dump the schema and exit.
    if let Some(path) = cli.schema {
        let (_, schema) = router_with_schema(db);
        serde_json::to_writer_pretty(File::create(&path)?, &schema)?;
        tracing::info!(path = %path.display(), "wrote OpenAPI document");
        return Ok(());
    }

    start_server(server, db).await?;

    Ok(())
}
