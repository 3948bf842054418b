pub mod health;
pub mod schools;

use axum::Router;

use crate::state::AppState;

/// Build the `/api` route tree.
///
/// ```text
/// /schools    GET  -> list_schools
///             POST -> create_school
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new().nest("/schools", schools::router())
}
