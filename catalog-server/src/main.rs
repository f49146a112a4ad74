use std::{path::PathBuf, sync::Arc};

use anyhow::Context;
use clap::Parser;
use tokio::net::TcpListener;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use catalog_server::{
    AppState, config::Config, create_app, seeder,
    store::{CatalogStore, SqliteCatalogStore},
};

/// CLI entry point
#[derive(Parser, Debug)]
#[command(name = "catalog-server")]
#[command(
    about = "Catalog microservice with paginated queries, picture serving, and JSON seeding"
)]
struct Cli {
    /// Server host
    #[arg(long, env = "CATALOG_HOST", default_value = "0.0.0.0")]
    host: String,

    /// Server port
    #[arg(short, long, env = "CATALOG_PORT", default_value_t = 8080)]
    port: u16,

    /// SQLite database URL
    #[arg(
        long,
        env = "CATALOG_DATABASE_URL",
        default_value = "sqlite://catalog.db"
    )]
    database_url: String,

    /// Directory holding the seed fixture (data/catalog.json) and the
    /// product pictures (Pics/)
    #[arg(long, env = "CATALOG_CONTENT_ROOT", default_value = ".")]
    content_root: PathBuf,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| {
                    "catalog_server=info,tower_http=info".into()
                }),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Arc::new(Config {
        host: cli.host,
        port: cli.port,
        database_url: cli.database_url,
        content_root: cli.content_root,
    });

    let store = SqliteCatalogStore::connect(&config.database_url)
        .await
        .context("failed to open the catalog database")?;
    store
        .migrate()
        .await
        .context("failed to apply database migrations")?;
    let store: Arc<dyn CatalogStore> = Arc::new(store);

    // A missing or corrupt fixture must not take the service down.
    seeder::seed_best_effort(store.as_ref(), &config.content_root).await;

    let state = AppState {
        store,
        config: config.clone(),
    };
    let app = create_app(state);

    let addr = format!("{}:{}", config.host, config.port);
    let listener = TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;
    info!(%addr, "catalog server listening");

    axum::serve(listener, app).await.context("server error")?;
    Ok(())
}
