//! Application state - shared across all handlers.

use std::sync::Arc;

use blogcraft_core::ports::{PostRepository, UserRepository};
use blogcraft_infra::database::{self, DatabaseConfig};
use blogcraft_infra::{PostgresPostRepository, PostgresUserRepository};

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub posts: Arc<dyn PostRepository>,
    pub users: Arc<dyn UserRepository>,
}

impl AppState {
    /// Connect to the database and build the repository set.
    pub async fn new(config: &DatabaseConfig) -> std::io::Result<Self> {
        let db = database::connect(config)
            .await
            .map_err(std::io::Error::other)?;

        tracing::info!("Application state initialized");

        Ok(Self {
            posts: Arc::new(PostgresPostRepository::new(db.clone())),
            users: Arc::new(PostgresUserRepository::new(db)),
        })
    }
}
