//! Membership tier catalog repository.

use sqlx::PgPool;

use iron_haven_core::MembershipTierId;

use super::RepositoryError;
use crate::models::{MembershipTier, NewMembershipTier};

/// Repository for membership tier database operations.
pub struct MembershipTierRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> MembershipTierRepository<'a> {
    /// Create a new membership tier repository.
    #[must_use]
    pub const fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// List all membership tiers.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn list(&self) -> Result<Vec<MembershipTier>, RepositoryError> {
        let tiers = sqlx::query_as::<_, MembershipTier>(
            r"
            SELECT id, name, price, description, features, popular, cta_text
            FROM membership_tiers
            ORDER BY price
            ",
        )
        .fetch_all(self.pool)
        .await?;

        Ok(tiers)
    }

    /// Get a membership tier by its ID.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn get_by_id(
        &self,
        id: MembershipTierId,
    ) -> Result<Option<MembershipTier>, RepositoryError> {
        let tier = sqlx::query_as::<_, MembershipTier>(
            r"
            SELECT id, name, price, description, features, popular, cta_text
            FROM membership_tiers
            WHERE id = $1
            ",
        )
        .bind(id)
        .fetch_optional(self.pool)
        .await?;

        Ok(tier)
    }

    /// Create a membership tier (seed/admin tooling only).
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the insert fails.
    pub async fn create(
        &self,
        tier: &NewMembershipTier,
    ) -> Result<MembershipTier, RepositoryError> {
        let created = sqlx::query_as::<_, MembershipTier>(
            r"
            INSERT INTO membership_tiers (name, price, description, features, popular, cta_text)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING id, name, price, description, features, popular, cta_text
            ",
        )
        .bind(&tier.name)
        .bind(tier.price)
        .bind(&tier.description)
        .bind(&tier.features)
        .bind(tier.popular)
        .bind(&tier.cta_text)
        .fetch_one(self.pool)
        .await?;

        Ok(created)
    }
}
