//! Intake validation for school submissions.
//!
//! The submission arrives at the HTTP boundary as an untyped set of text
//! fields plus one file part. [`validate`] turns that into a normalized
//! [`SchoolSubmission`] or the first applicable [`IntakeError`], in a fixed
//! order: required fields, contact, email, image type, image size. No
//! multi-error aggregation, no disk or database access.

use std::collections::HashMap;
use std::sync::LazyLock;

use regex::Regex;
use validator::ValidateEmail;

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

/// Text fields that must be present and non-empty after trimming.
pub const REQUIRED_FIELDS: &[&str] = &["name", "address", "city", "state", "contact", "email_id"];

/// Declared MIME types accepted for the image part.
pub const ALLOWED_IMAGE_TYPES: &[&str] =
    &["image/png", "image/jpeg", "image/jpg", "image/webp"];

/// Maximum accepted image payload (5 MiB).
pub const MAX_IMAGE_BYTES: usize = 5 * 1024 * 1024;

/// Minimum contact number length.
pub const CONTACT_MIN_LEN: usize = 7;

/// Maximum contact number length.
pub const CONTACT_MAX_LEN: usize = 15;

/// Characters allowed in a contact number: digits, `+`, `-`, parentheses,
/// and whitespace.
static CONTACT_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9+\-()\s]+$").expect("valid regex"));

// ---------------------------------------------------------------------------
// Types
// ---------------------------------------------------------------------------

/// An uploaded image as received from the multipart form, before any
/// persistence. Ownership transfers to the file store once written.
#[derive(Debug, Clone)]
pub struct UploadedImage {
    /// Original filename as declared by the client.
    pub filename: String,
    /// Declared MIME type of the part.
    pub content_type: String,
    /// Full payload bytes.
    pub bytes: Vec<u8>,
}

/// A validated, trimmed school submission ready to be written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SchoolSubmission {
    pub name: String,
    pub address: String,
    pub city: String,
    pub state: String,
    pub contact: String,
    pub email_id: String,
}

/// Rejection kinds for an intake submission.
///
/// Each kind corresponds to one validation stage; [`IntakeError::stage`]
/// yields the stage tag used in the response envelope.
#[derive(Debug, thiserror::Error)]
pub enum IntakeError {
    #[error("Missing required fields")]
    MissingField,

    #[error("Contact must be 7-15 characters of digits, +, -, parentheses, or spaces")]
    InvalidContact,

    #[error("Invalid email address: {0}")]
    InvalidEmail(String),

    #[error("Unsupported image type: {0}")]
    UnsupportedImageType(String),

    #[error("Max image size is 5MB")]
    ImageTooLarge,
}

impl IntakeError {
    /// Stage tag identifying which validation step rejected the submission.
    pub fn stage(&self) -> &'static str {
        match self {
            IntakeError::MissingField => "validate_required",
            IntakeError::InvalidContact => "validate_contact",
            IntakeError::InvalidEmail(_) => "validate_email",
            IntakeError::UnsupportedImageType(_) => "validate_image_type",
            IntakeError::ImageTooLarge => "validate_image_size",
        }
    }
}

// ---------------------------------------------------------------------------
// Validation
// ---------------------------------------------------------------------------

/// Validate an untyped field map plus optional image part.
///
/// Checks run in a fixed order and the first failure wins:
/// 1. every required text field present and non-empty after trimming, and
///    the image part present;
/// 2. contact matches the allowed character set and length bounds;
/// 3. email is syntactically valid;
/// 4. declared image MIME type is on the allow-list;
/// 5. image payload is at most [`MAX_IMAGE_BYTES`].
pub fn validate(
    fields: &HashMap<String, String>,
    image: Option<&UploadedImage>,
) -> Result<SchoolSubmission, IntakeError> {
    let mut trimmed: HashMap<&str, String> = HashMap::new();
    for &field in REQUIRED_FIELDS {
        let value = fields.get(field).map(|v| v.trim()).unwrap_or("");
        if value.is_empty() {
            return Err(IntakeError::MissingField);
        }
        trimmed.insert(field, value.to_string());
    }

    let image = image.ok_or(IntakeError::MissingField)?;

    let contact = &trimmed["contact"];
    if !CONTACT_RE.is_match(contact)
        || contact.chars().count() < CONTACT_MIN_LEN
        || contact.chars().count() > CONTACT_MAX_LEN
    {
        return Err(IntakeError::InvalidContact);
    }

    let email_id = &trimmed["email_id"];
    if !email_id.validate_email() {
        return Err(IntakeError::InvalidEmail(email_id.clone()));
    }

    if !ALLOWED_IMAGE_TYPES.contains(&image.content_type.as_str()) {
        let declared = if image.content_type.is_empty() {
            "unknown".to_string()
        } else {
            image.content_type.clone()
        };
        return Err(IntakeError::UnsupportedImageType(declared));
    }

    if image.bytes.len() > MAX_IMAGE_BYTES {
        return Err(IntakeError::ImageTooLarge);
    }

    Ok(SchoolSubmission {
        name: trimmed.remove("name").unwrap_or_default(),
        address: trimmed.remove("address").unwrap_or_default(),
        city: trimmed.remove("city").unwrap_or_default(),
        state: trimmed.remove("state").unwrap_or_default(),
        contact: trimmed.remove("contact").unwrap_or_default(),
        email_id: trimmed.remove("email_id").unwrap_or_default(),
    })
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
