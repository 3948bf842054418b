//! School record model.

use serde::Serialize;
use sqlx::FromRow;

use schoolhub_core::types::{DbId, Timestamp};

/// A row from the `schools` table.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct School {
    pub id: DbId,
    pub name: String,
    pub address: String,
    pub city: String,
    pub state: String,
    pub contact: String,
    pub email_id: String,
    /// Relative web path of the stored image, e.g.
    /// `/schoolImages/1700000000000_campus.jpg`.
    pub image: String,
    pub created_at: Timestamp,
}

/// The column subset exposed by the listing endpoint. Contact and email are
/// deliberately not included.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct SchoolListItem {
    pub id: DbId,
    pub name: String,
    pub address: String,
    pub city: String,
    pub image: String,
}

/// DTO for inserting a new school row. Built from a validated submission
/// plus the stored image path; never constructed from raw client input.
#[derive(Debug, Clone)]
pub struct CreateSchool {
    pub name: String,
    pub address: String,
    pub city: String,
    pub state: String,
    pub contact: String,
    pub email_id: String,
    pub image: String,
}
