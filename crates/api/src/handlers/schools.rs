//! Handlers for the school directory endpoints.
//!
//! Intake accepts a multipart submission, validates it, stores the image,
//! and inserts the row; listing serves a filtered, paginated page of
//! records. Both wrap their results in the shared response envelope.

use std::collections::HashMap;

use axum::extract::multipart::MultipartRejection;
use axum::extract::{Multipart, Query, State};
use axum::http::StatusCode;
use axum::Json;
use serde::{Deserialize, Serialize};

use schoolhub_core::intake::{self, IntakeError, UploadedImage};
use schoolhub_core::listing::{page_count, PageRequest};
use schoolhub_core::types::DbId;
use schoolhub_db::models::school::{CreateSchool, SchoolListItem};
use schoolhub_db::repositories::SchoolRepo;

use crate::error::{AppError, AppResult};
use crate::response::Envelope;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Payloads
// ---------------------------------------------------------------------------

/// Success payload for intake.
#[derive(Debug, Serialize)]
pub struct SchoolCreated {
    pub message: &'static str,
    pub id: DbId,
    pub image: String,
}

/// Success payload for listing.
#[derive(Debug, Serialize)]
pub struct SchoolPage {
    pub items: Vec<SchoolListItem>,
    pub total: i64,
    pub page: i64,
    pub pages: i64,
    pub limit: i64,
}

/// Query parameters for listing. `page` and `limit` are accepted as raw
/// text and normalized leniently by `schoolhub_core::listing`.
#[derive(Debug, Deserialize)]
pub struct ListSchoolsParams {
    pub q: Option<String>,
    pub page: Option<String>,
    pub limit: Option<String>,
}

// ---------------------------------------------------------------------------
// Intake
// ---------------------------------------------------------------------------

/// POST /api/schools
///
/// Accepts a multipart form with text fields `name, address, city, state,
/// contact, email_id` and a binary `image` part. On success the image is on
/// disk, the row is inserted, and the response carries the assigned id plus
/// the stored web path.
///
/// The file write and the row insert are an ordered two-phase operation
/// with no wrapping transaction: a failed write inserts nothing, while a
/// failed insert leaves the already-written file orphaned on disk.
pub async fn create_school(
    State(state): State<AppState>,
    multipart: Result<Multipart, MultipartRejection>,
) -> AppResult<(StatusCode, Json<Envelope<SchoolCreated>>)> {
    let mut multipart = multipart.map_err(|e| AppError::FormParse(e.to_string()))?;

    // Collect the untyped form: raw text fields plus at most one image part.
    let mut fields: HashMap<String, String> = HashMap::new();
    let mut image: Option<UploadedImage> = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::FormParse(e.to_string()))?
    {
        let Some(name) = field.name().map(str::to_string) else {
            continue;
        };
        if name == "image" {
            let filename = field.file_name().unwrap_or("image").to_string();
            let content_type = field.content_type().unwrap_or("").to_string();
            let data = field
                .bytes()
                .await
                .map_err(|e| AppError::FormParse(e.to_string()))?;
            image = Some(UploadedImage {
                filename,
                content_type,
                bytes: data.to_vec(),
            });
        } else {
            let text = field
                .text()
                .await
                .map_err(|e| AppError::FormParse(e.to_string()))?;
            fields.insert(name, text);
        }
    }

    // Validation happens before any side effect.
    let submission = intake::validate(&fields, image.as_ref())?;
    let Some(image) = image else {
        return Err(IntakeError::MissingField.into());
    };

    // Phase 1: write the image. On failure no row is inserted.
    let stored_path = state
        .images
        .save(&image.filename, &image.bytes)
        .await
        .map_err(AppError::FileWrite)?;

    // Phase 2: insert the row. The file is not rolled back on failure.
    let input = CreateSchool {
        name: submission.name,
        address: submission.address,
        city: submission.city,
        state: submission.state,
        contact: submission.contact,
        email_id: submission.email_id,
        image: stored_path.clone(),
    };
    let school = SchoolRepo::create(&state.pool, &input).await.map_err(|e| {
        tracing::warn!(image = %stored_path, "Row insert failed; stored image is now orphaned");
        AppError::DbInsert(e)
    })?;

    tracing::info!(school_id = school.id, image = %school.image, "School added");

    Ok((
        StatusCode::CREATED,
        Json(Envelope::ok(SchoolCreated {
            message: "School added successfully.",
            id: school.id,
            image: school.image,
        })),
    ))
}

// ---------------------------------------------------------------------------
// Listing
// ---------------------------------------------------------------------------

/// GET /api/schools
///
/// Supports:
///   q?     -> search in name/city/address
///   page?  -> default 1
///   limit? -> default 9 (max 24)
///
/// Runs two queries over the identical predicate: the page of rows and the
/// total count. A record inserted between the two may leave `total` very
/// slightly stale; accepted.
pub async fn list_schools(
    State(state): State<AppState>,
    Query(params): Query<ListSchoolsParams>,
) -> AppResult<Json<Envelope<SchoolPage>>> {
    let req = PageRequest::from_raw(
        params.q.as_deref(),
        params.page.as_deref(),
        params.limit.as_deref(),
    );

    let items = SchoolRepo::list_page(&state.pool, req.term.as_deref(), req.limit, req.offset())
        .await
        .map_err(AppError::DbRead)?;
    let total = SchoolRepo::count(&state.pool, req.term.as_deref())
        .await
        .map_err(AppError::DbRead)?;

    Ok(Json(Envelope::ok(SchoolPage {
        items,
        total,
        page: req.page,
        pages: page_count(total, req.limit),
        limit: req.limit,
    })))
}
