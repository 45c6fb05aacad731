use std::sync::Arc;

use crate::config::ServerConfig;
use crate::services::{MovieService, RatingService};

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// Services are constructed once here and passed explicitly; there is
/// no ambient registry. Cheaply cloneable (inner data is behind `Arc`
/// or is already `Clone`).
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub pool: reelbase_db::DbPool,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
    /// Movie catalog orchestration.
    pub movies: MovieService,
    /// Rating orchestration.
    pub ratings: RatingService,
}

impl AppState {
    /// Build the application state from a pool and config, wiring the
    /// services to the same pool.
    pub fn new(pool: reelbase_db::DbPool, config: ServerConfig) -> Self {
        Self {
            movies: MovieService::new(pool.clone()),
            ratings: RatingService::new(pool.clone()),
            pool,
            config: Arc::new(config),
        }
    }
}
