//! Service catalog repository.

use sqlx::PgPool;

use iron_haven_core::ServiceId;

use super::RepositoryError;
use crate::models::{NewService, Service};

/// Repository for service database operations.
pub struct ServiceRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> ServiceRepository<'a> {
    /// Create a new service repository.
    #[must_use]
    pub const fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// List all services.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn list(&self) -> Result<Vec<Service>, RepositoryError> {
        let services = sqlx::query_as::<_, Service>(
            r"
            SELECT id, name, description, price, icon_name, popular
            FROM services
            ORDER BY name
            ",
        )
        .fetch_all(self.pool)
        .await?;

        Ok(services)
    }

    /// Get a service by its ID.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn get_by_id(&self, id: ServiceId) -> Result<Option<Service>, RepositoryError> {
        let service = sqlx::query_as::<_, Service>(
            r"
            SELECT id, name, description, price, icon_name, popular
            FROM services
            WHERE id = $1
            ",
        )
        .bind(id)
        .fetch_optional(self.pool)
        .await?;

        Ok(service)
    }

    /// Create a service (seed/admin tooling only).
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the insert fails.
    pub async fn create(&self, service: &NewService) -> Result<Service, RepositoryError> {
        let created = sqlx::query_as::<_, Service>(
            r"
            INSERT INTO services (name, description, price, icon_name, popular)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id, name, description, price, icon_name, popular
            ",
        )
        .bind(&service.name)
        .bind(&service.description)
        .bind(&service.price)
        .bind(&service.icon_name)
        .bind(service.popular)
        .fetch_one(self.pool)
        .await?;

        Ok(created)
    }
}
