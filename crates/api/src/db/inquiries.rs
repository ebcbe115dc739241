//! Contact inquiry repository.

use sqlx::PgPool;

use super::RepositoryError;
use crate::models::{Inquiry, NewInquiry};

/// Repository for inquiry database operations.
pub struct InquiryRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> InquiryRepository<'a> {
    /// Create a new inquiry repository.
    #[must_use]
    pub const fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// List all inquiries, newest first.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn list(&self) -> Result<Vec<Inquiry>, RepositoryError> {
        let inquiries = sqlx::query_as::<_, Inquiry>(
            r"
            SELECT id, name, email, phone, interest, message, status, created_at
            FROM inquiries
            ORDER BY created_at DESC
            ",
        )
        .fetch_all(self.pool)
        .await?;

        Ok(inquiries)
    }

    /// Insert an inquiry. The store assigns id, `new` status, and timestamp.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the insert fails.
    pub async fn create(&self, inquiry: &NewInquiry) -> Result<Inquiry, RepositoryError> {
        let created = sqlx::query_as::<_, Inquiry>(
            r"
            INSERT INTO inquiries (name, email, phone, interest, message)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id, name, email, phone, interest, message, status, created_at
            ",
        )
        .bind(&inquiry.name)
        .bind(&inquiry.email)
        .bind(&inquiry.phone)
        .bind(&inquiry.interest)
        .bind(&inquiry.message)
        .fetch_one(self.pool)
        .await?;

        Ok(created)
    }
}
