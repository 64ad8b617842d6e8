use folio_server::{AppState, build_router, error, logger};

use std::error::Error;
use std::str::FromStr;

use log::{error, info};
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    // Load .env in development, then load and validate configuration
    let _ = dotenvy::dotenv();
    let config = load_config()?;

    // Initialize logger (before any other logging)
    let log_file = config.logging.file.as_ref().map(std::path::PathBuf::from);
    logger::initialize(config.logging.level, log_file, config.logging.colored)?;

    info!("Starting folio-server v{}", env!("CARGO_PKG_VERSION"));
    config.log_summary();

    // Initialize database pool: opened once here, shared by every handler
    let pool = SqlitePoolOptions::new()
        .max_connections(10)
        .connect_with(
            SqliteConnectOptions::from_str(&config.database.url)?
                .create_if_missing(true)
                .journal_mode(sqlx::sqlite::SqliteJournalMode::Wal)
                .synchronous(sqlx::sqlite::SqliteSynchronous::Normal)
                .busy_timeout(std::time::Duration::from_secs(5)),
        )
        .await?;

    info!("Database connection established");

    // Run migrations
    info!("Running database migrations...");
    sqlx::migrate!("../crates/folio-db/migrations")
        .run(&pool)
        .await?;
    info!("Migrations complete");

    // Build application state and router
    let app_state = AppState {
        pool,
        api: config.api.clone(),
    };
    let app = build_router(app_state);

    // Create TCP listener
    let listener = TcpListener::bind(config.bind_addr()).await?;
    let actual_addr = listener.local_addr()?;
    info!("Server listening on {}", actual_addr);

    // Start server with graceful shutdown on SIGINT
    info!("Server ready to accept connections");
    axum::serve(listener, app)
        .with_graceful_shutdown(async {
            match tokio::signal::ctrl_c().await {
                Ok(()) => info!("Received SIGINT (Ctrl+C), shutting down"),
                Err(e) => error!("Failed to listen for SIGINT: {}", e),
            }
        })
        .await?;

    info!("Graceful shutdown complete");

    Ok(())
}

fn load_config() -> error::Result<folio_config::Config> {
    let config = folio_config::Config::load()?;
    config.validate()?;
    Ok(config)
}
