//! Listing query normalization.
//!
//! Query parameters reach the boundary as raw text. [`PageRequest::from_raw`]
//! parses them leniently (anything unusable falls back to a default) and
//! clamps the page size, so persistence only ever sees bounded, typed values.

// ---------------------------------------------------------------------------
// Pagination defaults
// ---------------------------------------------------------------------------

/// Default number of records per listing page.
pub const DEFAULT_PAGE_SIZE: i64 = 9;

/// Maximum number of records per listing page.
pub const MAX_PAGE_SIZE: i64 = 24;

// ---------------------------------------------------------------------------
// Normalization helpers
// ---------------------------------------------------------------------------

/// Parse a raw page parameter. Anything that is not a positive integer
/// defaults to 1.
pub fn clamp_page(raw: Option<&str>) -> i64 {
    match raw.and_then(|v| v.trim().parse::<i64>().ok()) {
        Some(page) if page > 0 => page,
        _ => 1,
    }
}

/// Parse a raw limit parameter. Unparsable input defaults to
/// [`DEFAULT_PAGE_SIZE`]; the result is always clamped into
/// `[1, MAX_PAGE_SIZE]`.
pub fn clamp_limit(raw: Option<&str>) -> i64 {
    raw.and_then(|v| v.trim().parse::<i64>().ok())
        .unwrap_or(DEFAULT_PAGE_SIZE)
        .clamp(1, MAX_PAGE_SIZE)
}

/// Total page count for a result set: `max(ceil(total / limit), 1)`.
pub fn page_count(total: i64, limit: i64) -> i64 {
    ((total + limit - 1) / limit).max(1)
}

// ---------------------------------------------------------------------------
// PageRequest
// ---------------------------------------------------------------------------

/// A normalized listing query: optional substring filter plus bounded
/// pagination.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageRequest {
    /// Substring filter applied to name, city, and address. `None` when the
    /// raw term was absent or blank.
    pub term: Option<String>,
    /// 1-based page number.
    pub page: i64,
    /// Records per page, always within `[1, MAX_PAGE_SIZE]`.
    pub limit: i64,
}

impl PageRequest {
    /// Build a request from raw query parameter text.
    pub fn from_raw(term: Option<&str>, page: Option<&str>, limit: Option<&str>) -> Self {
        let term = term
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .map(str::to_string);

        Self {
            term,
            page: clamp_page(page),
            limit: clamp_limit(limit),
        }
    }

    /// Row offset for the current page.
    pub fn offset(&self) -> i64 {
        (self.page - 1) * self.limit
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
