use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;
use schoolhub_core::intake::IntakeError;

/// Application-level error type for HTTP handlers.
///
/// Every variant carries the stage it failed in, so the response envelope's
/// `where` tag is decided here and nowhere else. Implements [`IntoResponse`]
/// to produce the uniform `{ ok: false, where, error }` JSON shape; no raw
/// infrastructure error ever reaches the client unformatted.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// Malformed multipart request body.
    #[error("Invalid multipart/form-data: {0}")]
    FormParse(String),

    /// A validation rejection from the intake validator.
    #[error(transparent)]
    Intake(#[from] IntakeError),

    /// The uploaded image could not be written to disk.
    #[error("Failed to save image to disk")]
    FileWrite(#[source] std::io::Error),

    /// The school row could not be inserted.
    #[error("DB insert failed: {0}")]
    DbInsert(#[source] sqlx::Error),

    /// A listing query failed.
    #[error("DB read failed: {0}")]
    DbRead(#[source] sqlx::Error),

    /// Catch-all for failures outside the known stages.
    #[error("{0}")]
    Unexpected(String),
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

impl AppError {
    /// Stage tag for the response envelope.
    fn stage(&self) -> &'static str {
        match self {
            AppError::FormParse(_) => "form_parse",
            AppError::Intake(err) => err.stage(),
            AppError::FileWrite(_) => "file_write",
            AppError::DbInsert(_) => "db_insert",
            AppError::DbRead(_) => "db_read",
            AppError::Unexpected(_) => "unexpected",
        }
    }

    fn status(&self) -> StatusCode {
        match self {
            AppError::FormParse(_) | AppError::Intake(_) => StatusCode::BAD_REQUEST,
            AppError::FileWrite(_)
            | AppError::DbInsert(_)
            | AppError::DbRead(_)
            | AppError::Unexpected(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        let stage = self.stage();
        let message = self.to_string();

        // Infrastructure failures are logged with their source detail;
        // client-input rejections stay at debug level.
        if status.is_server_error() {
            tracing::error!(stage, error = %message, "Request failed");
        } else {
            tracing::debug!(stage, error = %message, "Request rejected");
        }

        let body = json!({
            "ok": false,
            "where": stage,
            "error": message,
        });

        (status, axum::Json(body)).into_response()
    }
}

/// Panic responder for `CatchPanicLayer::custom`.
///
/// Renders a panic as the `unexpected` stage of the response envelope so
/// even a handler bug keeps the uniform error shape.
pub fn handle_panic(err: Box<dyn std::any::Any + Send + 'static>) -> Response {
    let detail = if let Some(s) = err.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = err.downcast_ref::<&str>() {
        (*s).to_string()
    } else {
        "Server error".to_string()
    };
    AppError::Unexpected(detail).into_response()
}
