use std::path::Path;
use std::sync::Arc;
use std::time::Duration;

use axum::body::Body;
use axum::http::header::{AUTHORIZATION, CONTENT_TYPE};
use axum::http::{HeaderName, Method, Request, StatusCode};
use axum::response::Response;
use axum::Router;
use http_body_util::BodyExt;
use sqlx::PgPool;
use tower::ServiceExt;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::cors::CorsLayer;
use tower_http::request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::services::ServeDir;
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::Level;

use schoolhub_api::config::ServerConfig;
use schoolhub_api::routes;
use schoolhub_api::state::AppState;
use schoolhub_api::storage::{ImageStore, PUBLIC_IMAGE_PREFIX};

/// Multipart boundary used by [`multipart_body`] / [`post_multipart`].
pub const BOUNDARY: &str = "X-SCHOOLHUB-TEST-BOUNDARY";

/// Build a test `ServerConfig` with safe defaults and the given images
/// directory (pass a tempdir so tests stay isolated).
pub fn test_config(images_dir: &Path) -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
        images_dir: images_dir.to_path_buf(),
    }
}

/// Build the full application router with all middleware layers, using the
/// given database pool and images directory.
///
/// This mirrors the router construction in `main.rs` so integration tests
/// exercise the same middleware stack (CORS, request ID, timeout, tracing,
/// panic recovery) and static file service that production uses.
pub fn build_test_app(pool: PgPool, images_dir: &Path) -> Router {
    let config = test_config(images_dir);
    let images = Arc::new(ImageStore::new(config.images_dir.clone()));

    let state = AppState {
        pool,
        config: Arc::new(config),
        images: Arc::clone(&images),
    };

    let cors = CorsLayer::new()
        .allow_origin(["http://localhost:5173".parse().unwrap()])
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([CONTENT_TYPE, AUTHORIZATION])
        .allow_credentials(true)
        .max_age(Duration::from_secs(3600));

    let request_id_header = HeaderName::from_static("x-request-id");

    Router::new()
        .merge(routes::health::router())
        .nest("/api", routes::api_routes())
        .nest_service(PUBLIC_IMAGE_PREFIX, ServeDir::new(images.root()))
        .layer(CatchPanicLayer::custom(schoolhub_api::error::handle_panic))
        .layer(TimeoutLayer::with_status_code(
            StatusCode::REQUEST_TIMEOUT,
            Duration::from_secs(30),
        ))
        .layer(PropagateRequestIdLayer::new(request_id_header.clone()))
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
        .layer(SetRequestIdLayer::new(request_id_header, MakeRequestUuid))
        .layer(cors)
        .with_state(state)
}

/// Send a GET request to the router.
pub async fn get(app: Router, uri: &str) -> Response {
    let request = Request::builder()
        .method(Method::GET)
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    app.oneshot(request).await.unwrap()
}

/// Send a POST with a `multipart/form-data` body built by [`multipart_body`].
pub async fn post_multipart(app: Router, uri: &str, body: Vec<u8>) -> Response {
    let request = Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header(
            CONTENT_TYPE,
            format!("multipart/form-data; boundary={BOUNDARY}"),
        )
        .body(Body::from(body))
        .unwrap();
    app.oneshot(request).await.unwrap()
}

/// Send a POST with a non-multipart body (used to exercise `form_parse`).
pub async fn post_json(app: Router, uri: &str, body: serde_json::Value) -> Response {
    let request = Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header(CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    app.oneshot(request).await.unwrap()
}

/// Collect a response body into JSON.
pub async fn body_json(response: Response) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

/// Collect a response body into raw bytes.
pub async fn body_bytes(response: Response) -> Vec<u8> {
    response
        .into_body()
        .collect()
        .await
        .unwrap()
        .to_bytes()
        .to_vec()
}

/// Build a `multipart/form-data` body with the [`BOUNDARY`] boundary:
/// text `fields` plus an optional `image` part given as
/// `(filename, content_type, bytes)`.
pub fn multipart_body(
    fields: &[(&str, &str)],
    image: Option<(&str, &str, &[u8])>,
) -> Vec<u8> {
    let mut body: Vec<u8> = Vec::new();

    for (name, value) in fields {
        body.extend_from_slice(format!("--{BOUNDARY}\r\n").as_bytes());
        body.extend_from_slice(
            format!("Content-Disposition: form-data; name=\"{name}\"\r\n\r\n").as_bytes(),
        );
        body.extend_from_slice(value.as_bytes());
        body.extend_from_slice(b"\r\n");
    }

    if let Some((filename, content_type, bytes)) = image {
        body.extend_from_slice(format!("--{BOUNDARY}\r\n").as_bytes());
        body.extend_from_slice(
            format!(
                "Content-Disposition: form-data; name=\"image\"; filename=\"{filename}\"\r\n"
            )
            .as_bytes(),
        );
        body.extend_from_slice(format!("Content-Type: {content_type}\r\n\r\n").as_bytes());
        body.extend_from_slice(bytes);
        body.extend_from_slice(b"\r\n");
    }

    body.extend_from_slice(format!("--{BOUNDARY}--\r\n").as_bytes());
    body
}

/// The standard set of valid text fields used across intake tests.
pub fn valid_fields() -> Vec<(&'static str, &'static str)> {
    vec![
        ("name", "Oakwood Elementary"),
        ("address", "12 Elm Street"),
        ("city", "Springfield"),
        ("state", "IL"),
        ("contact", "9998887777"),
        ("email_id", "a@b.com"),
    ]
}
