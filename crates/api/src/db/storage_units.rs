//! Storage unit repository.
//!
//! Catalog reads plus seed-time inserts. The availability counter is
//! decremented by the storage booking repository inside the booking
//! transaction, not here.

use sqlx::PgPool;

use iron_haven_core::StorageUnitId;

use super::RepositoryError;
use crate::models::{NewStorageUnit, StorageUnit};

/// Repository for storage unit database operations.
pub struct StorageUnitRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> StorageUnitRepository<'a> {
    /// Create a new storage unit repository.
    #[must_use]
    pub const fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// List all storage units.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn list(&self) -> Result<Vec<StorageUnit>, RepositoryError> {
        let units = sqlx::query_as::<_, StorageUnit>(
            r"
            SELECT id, name, size, price, features, image_url, popular,
                   total_units, available_units
            FROM storage_units
            ORDER BY price
            ",
        )
        .fetch_all(self.pool)
        .await?;

        Ok(units)
    }

    /// Get a storage unit by its ID.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn get_by_id(
        &self,
        id: StorageUnitId,
    ) -> Result<Option<StorageUnit>, RepositoryError> {
        let unit = sqlx::query_as::<_, StorageUnit>(
            r"
            SELECT id, name, size, price, features, image_url, popular,
                   total_units, available_units
            FROM storage_units
            WHERE id = $1
            ",
        )
        .bind(id)
        .fetch_optional(self.pool)
        .await?;

        Ok(unit)
    }

    /// Create a storage unit (seed/admin tooling only).
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the insert fails.
    pub async fn create(&self, unit: &NewStorageUnit) -> Result<StorageUnit, RepositoryError> {
        let created = sqlx::query_as::<_, StorageUnit>(
            r"
            INSERT INTO storage_units
                (name, size, price, features, image_url, popular, total_units, available_units)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            RETURNING id, name, size, price, features, image_url, popular,
                      total_units, available_units
            ",
        )
        .bind(&unit.name)
        .bind(&unit.size)
        .bind(unit.price)
        .bind(&unit.features)
        .bind(&unit.image_url)
        .bind(unit.popular)
        .bind(unit.total_units)
        .bind(unit.available_units)
        .fetch_one(self.pool)
        .await?;

        Ok(created)
    }
}
