use std::sync::Arc;

use crate::config::ServerConfig;
use crate::storage::ImageStore;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc` or is already `Clone`).
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub pool: schoolhub_db::DbPool,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
    /// Durable store for uploaded school images.
    pub images: Arc<ImageStore>,
}
