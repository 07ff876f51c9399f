//! Repository for the `dams` table.
//!
//! Creation and list-all only; dam records are never updated or deleted.
//! Content validation happens before this layer, and there is no uniqueness
//! constraint across dams.

use sqlx::PgPool;

use crate::models::dam::{CreateDam, Dam};

/// Column list for `dams` queries.
const DAM_COLUMNS: &str = "\
    id, name, owner, river, date_built, longitude, latitude, created_at";

/// Provides data access for dam records.
pub struct DamRepo;

impl DamRepo {
    /// Append a new dam record with a freshly generated id.
    pub async fn insert(pool: &PgPool, dto: &CreateDam) -> Result<Dam, sqlx::Error> {
        let query = format!(
            "INSERT INTO dams (name, owner, river, date_built, longitude, latitude) \
             VALUES ($1, $2, $3, $4, $5, $6) \
             RETURNING {DAM_COLUMNS}"
        );
        sqlx::query_as::<_, Dam>(&query)
            .bind(&dto.name)
            .bind(&dto.owner)
            .bind(&dto.river)
            .bind(dto.date_built)
            .bind(dto.longitude)
            .bind(dto.latitude)
            .fetch_one(pool)
            .await
    }

    /// Append a new dam record unless the inventory already holds
    /// `max_dams` rows.
    ///
    /// The cap is checked in the same statement as the insert, so it shares
    /// the statement's atomicity. Returns `None` when the cap is reached.
    pub async fn insert_within_limit(
        pool: &PgPool,
        dto: &CreateDam,
        max_dams: i64,
    ) -> Result<Option<Dam>, sqlx::Error> {
        let query = format!(
            "INSERT INTO dams (name, owner, river, date_built, longitude, latitude) \
             SELECT $1, $2, $3, $4, $5, $6 \
             WHERE (SELECT COUNT(*) FROM dams) < $7 \
             RETURNING {DAM_COLUMNS}"
        );
        sqlx::query_as::<_, Dam>(&query)
            .bind(&dto.name)
            .bind(&dto.owner)
            .bind(&dto.river)
            .bind(dto.date_built)
            .bind(dto.longitude)
            .bind(dto.latitude)
            .bind(max_dams)
            .fetch_optional(pool)
            .await
    }

    /// Every stored dam, in insertion order.
    pub async fn list_all(pool: &PgPool) -> Result<Vec<Dam>, sqlx::Error> {
        let query = format!("SELECT {DAM_COLUMNS} FROM dams ORDER BY id");
        sqlx::query_as::<_, Dam>(&query).fetch_all(pool).await
    }

    /// Number of stored dams.
    pub async fn count(pool: &PgPool) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM dams")
            .fetch_one(pool)
            .await
    }
}
