//! Route definitions for the school directory.
//!
//! All routes are mounted under `/schools`.

use axum::extract::DefaultBodyLimit;
use axum::routing::get;
use axum::Router;

use schoolhub_core::intake::MAX_IMAGE_BYTES;

use crate::handlers::schools;
use crate::state::AppState;

/// Request body cap for intake: the 5 MiB image limit plus headroom for the
/// text fields and multipart framing. Payloads past this cap fail at body
/// read (`form_parse`); anything under it with an oversized image still
/// reaches the image-size validator.
const MAX_INTAKE_BODY_BYTES: usize = MAX_IMAGE_BYTES + 1024 * 1024;

/// School routes mounted at `/schools`.
///
/// ```text
/// GET  / -> list_schools
/// POST / -> create_school
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(schools::list_schools).post(schools::create_school))
        .layer(DefaultBodyLimit::max(MAX_INTAKE_BODY_BYTES))
}
