//! Database operations for the Iron Haven `PostgreSQL` store.
//!
//! ## Tables
//!
//! - `users` - Account scaffolding (unused by site flows)
//! - `storage_units` - Rentable bays with an availability counter
//! - `services` - Maintenance service catalog
//! - `membership_tiers` - Club membership catalog
//! - `storage_bookings` - Unit reservation requests
//! - `service_bookings` - Service appointment requests
//! - `membership_signups` - Membership requests
//! - `inquiries` - Contact form messages
//!
//! Queries use the runtime `sqlx::query_as`/`query` API with `FromRow`
//! models, so the workspace builds without a live database.
//!
//! # Migrations
//!
//! Migrations are stored in `crates/api/migrations/` and run via:
//! ```bash
//! cargo run -p iron-haven-cli -- migrate
//! ```

pub mod bookings;
pub mod inquiries;
pub mod membership_tiers;
pub mod services;
pub mod storage_units;
pub mod users;

use std::time::Duration;

use secrecy::ExposeSecret;
use sqlx::PgPool;
use sqlx::postgres::PgPoolOptions;
use thiserror::Error;

pub use bookings::{
    MembershipSignupRepository, ServiceBookingRepository, StorageBookingRepository,
};
pub use inquiries::InquiryRepository;
pub use membership_tiers::MembershipTierRepository;
pub use services::ServiceRepository;
pub use storage_units::StorageUnitRepository;
pub use users::UserRepository;

/// Errors that can occur during repository operations.
#[derive(Debug, Error)]
pub enum RepositoryError {
    /// Database error from sqlx.
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Data in the database is corrupted or invalid.
    #[error("data corruption: {0}")]
    DataCorruption(String),

    /// Requested entity was not found.
    #[error("not found")]
    NotFound,

    /// Constraint violation (e.g., unique username, missing foreign key).
    #[error("constraint violation: {0}")]
    Conflict(String),
}

/// Create a `PostgreSQL` connection pool with sensible defaults.
///
/// # Arguments
///
/// * `database_url` - `PostgreSQL` connection string (wrapped in `SecretString`)
///
/// # Errors
///
/// Returns `sqlx::Error` if the connection cannot be established.
pub async fn create_pool(database_url: &secrecy::SecretString) -> Result<PgPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(10)
        .min_connections(2)
        .acquire_timeout(Duration::from_secs(10))
        .connect(database_url.expose_secret())
        .await
}
