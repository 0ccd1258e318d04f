//! HTTP server for tasklist.
//!
//! Reads configuration from the environment (and `.env`), installs the
//! tracing subscriber, opens the configured store, and serves the list and
//! task routes until interrupted.

use actix_web::{App, HttpServer, middleware::Logger, web};
use mockable::DefaultClock;
use std::net::SocketAddr;
use std::sync::Arc;
use tasklist::{
    config::{ConfigError, ServerConfig, StorageBackend},
    http::{self, AppState},
    telemetry::{self, TelemetryError},
    todo::{
        adapters::{memory::InMemoryTodoStore, postgres::PostgresTodoRepository},
        ports::{ListRepository, TaskRepository, TodoRepositoryError},
    },
};
use thiserror::Error;

#[derive(Debug, Error)]
enum StartupError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Telemetry(#[from] TelemetryError),
    #[error("storage setup failed: {0}")]
    Storage(#[from] TodoRepositoryError),
    #[error("template setup failed: {0}")]
    Views(#[from] minijinja::Error),
    #[error("server failed: {0}")]
    Io(#[from] std::io::Error),
}

#[actix_web::main]
async fn main() -> Result<(), StartupError> {
    let config = ServerConfig::from_env()?;
    telemetry::init(None)?;

    match config.storage {
        StorageBackend::Memory => {
            tracing::warn!("DATABASE_URL is not set; lists are kept in memory only");
            serve(config.bind_address, Arc::new(InMemoryTodoStore::new())).await
        }
        StorageBackend::Postgres {
            database_url,
            pool_size,
        } => {
            let repository =
                PostgresTodoRepository::open(database_url, pool_size.get()).await?;
            tracing::info!(pool_size = pool_size.get(), "connected to PostgreSQL");
            serve(config.bind_address, Arc::new(repository)).await
        }
    }
}

async fn serve<S>(bind_address: SocketAddr, store: Arc<S>) -> Result<(), StartupError>
where
    S: ListRepository + TaskRepository + 'static,
{
    let state = web::Data::new(AppState::new(store, Arc::new(DefaultClock))?);
    tracing::info!(%bind_address, "tasklist listening");
    HttpServer::new(move || {
        App::new()
            .app_data(state.clone())
            .configure(http::configure::<S, DefaultClock>)
            .wrap(Logger::default())
    })
    .bind(bind_address)?
    .run()
    .await?;
    Ok(())
}
