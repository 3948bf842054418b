//! Repository for the `schools` table.

use sqlx::PgPool;

use schoolhub_core::types::DbId;

use crate::models::school::{CreateSchool, School, SchoolListItem};

/// Column list for full `schools` queries.
const COLUMNS: &str = "id, name, address, city, state, contact, email_id, image, created_at";

/// Column subset served by the listing endpoint.
const LIST_COLUMNS: &str = "id, name, address, city, image";

/// Provides insert and paged-read operations for schools.
pub struct SchoolRepo;

impl SchoolRepo {
    /// Insert a new school row, returning the created record.
    pub async fn create(pool: &PgPool, input: &CreateSchool) -> Result<School, sqlx::Error> {
        let query = format!(
            "INSERT INTO schools (name, address, city, state, contact, email_id, image)
             VALUES ($1, $2, $3, $4, $5, $6, $7)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, School>(&query)
            .bind(&input.name)
            .bind(&input.address)
            .bind(&input.city)
            .bind(&input.state)
            .bind(&input.contact)
            .bind(&input.email_id)
            .bind(&input.image)
            .fetch_one(pool)
            .await
    }

    /// Find a school by its ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<School>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM schools WHERE id = $1");
        sqlx::query_as::<_, School>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Fetch one page of listing rows, newest first.
    ///
    /// A non-empty `term` filters to rows where name, city, or address
    /// contains the term case-insensitively. The pattern is always passed as
    /// a bound parameter. `limit` and `offset` are expected to be normalized
    /// by the caller (`schoolhub_core::listing`).
    pub async fn list_page(
        pool: &PgPool,
        term: Option<&str>,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<SchoolListItem>, sqlx::Error> {
        if let Some(term) = term {
            let pattern = format!("%{term}%");
            let query = format!(
                "SELECT {LIST_COLUMNS} FROM schools
                 WHERE name ILIKE $1 OR city ILIKE $1 OR address ILIKE $1
                 ORDER BY id DESC
                 LIMIT $2 OFFSET $3"
            );
            sqlx::query_as::<_, SchoolListItem>(&query)
                .bind(&pattern)
                .bind(limit)
                .bind(offset)
                .fetch_all(pool)
                .await
        } else {
            let query = format!(
                "SELECT {LIST_COLUMNS} FROM schools
                 ORDER BY id DESC
                 LIMIT $1 OFFSET $2"
            );
            sqlx::query_as::<_, SchoolListItem>(&query)
                .bind(limit)
                .bind(offset)
                .fetch_all(pool)
                .await
        }
    }

    /// Count rows matching the same predicate as [`SchoolRepo::list_page`].
    pub async fn count(pool: &PgPool, term: Option<&str>) -> Result<i64, sqlx::Error> {
        if let Some(term) = term {
            let pattern = format!("%{term}%");
            sqlx::query_scalar(
                "SELECT COUNT(*) FROM schools
                 WHERE name ILIKE $1 OR city ILIKE $1 OR address ILIKE $1",
            )
            .bind(&pattern)
            .fetch_one(pool)
            .await
        } else {
            sqlx::query_scalar("SELECT COUNT(*) FROM schools")
                .fetch_one(pool)
                .await
        }
    }
}
