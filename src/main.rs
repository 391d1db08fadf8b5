use std::process::ExitCode;
use std::sync::Arc;

use axum::Router;
use dotenvy::dotenv;
use tokio::net::TcpListener;
use tracing_subscriber::EnvFilter;

use fundaevento_server::db::{self, PgEventStore};
use fundaevento_server::{create_routes, AppState, Config};

const DEFAULT_LOG_FILTER: &str = "fundaevento_server=info,tower_http=info";

#[tokio::main]
async fn main() -> ExitCode {
    dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER)),
        )
        .init();

    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("{}", e);
            ExitCode::FAILURE
        }
    }
}

async fn run() -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::from_env()?;

    let pool = db::create_pool(&config).await?;
    tracing::info!("Successfully connected to database");

    if config.run_migrations {
        db::run_migrations(&pool).await?;
        tracing::info!("Migrations run successfully");
    }

    tracing::info!(
        error_mode = ?config.error_mode,
        budget_policy = ?config.budget_policy,
        "Response policies"
    );

    let state = AppState::from_config(Arc::new(PgEventStore::new(pool)), &config);
    let app: Router = create_routes(state, &config.allowed_origins);

    let addr = config.bind_addr();
    tracing::info!("🚀 Server running at http://{}", addr);

    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
