//! Booking and signup repositories.
//!
//! Storage bookings, service bookings, and membership signups share a shape:
//! `list` plus a create operation. Rows are inserted with the store-assigned
//! id, `pending` status, and creation timestamp, and the persisted row is
//! returned as stored. Storage bookings additionally own the availability
//! counter: the reservation decrement and the booking insert run in one
//! transaction so neither can land without the other.

use sqlx::PgPool;

use super::RepositoryError;
use crate::models::{
    MembershipSignup, NewMembershipSignup, NewServiceBooking, NewStorageBooking, ServiceBooking,
    StorageBooking,
};

/// Map an insert error, surfacing foreign key violations as `Conflict`.
///
/// Handlers pre-check referenced ids, so this only fires if the referenced
/// row disappeared between the check and the insert.
fn map_insert_error(e: sqlx::Error, fk_message: &str) -> RepositoryError {
    if let sqlx::Error::Database(ref db_err) = e
        && db_err.is_foreign_key_violation()
    {
        return RepositoryError::Conflict(fk_message.to_owned());
    }
    RepositoryError::Database(e)
}

/// Repository for storage booking database operations.
pub struct StorageBookingRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> StorageBookingRepository<'a> {
    /// Create a new storage booking repository.
    #[must_use]
    pub const fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// List all storage bookings, newest first.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn list(&self) -> Result<Vec<StorageBooking>, RepositoryError> {
        let bookings = sqlx::query_as::<_, StorageBooking>(
            r"
            SELECT id, storage_unit_id, customer_name, customer_email, customer_phone,
                   bike_info, start_date, status, created_at
            FROM storage_bookings
            ORDER BY created_at DESC
            ",
        )
        .fetch_all(self.pool)
        .await?;

        Ok(bookings)
    }

    /// Reserve one unit of availability and insert the booking, atomically.
    ///
    /// Runs in a single transaction: a conditional decrement of the unit's
    /// `available_units` followed by the booking insert. Zero rows affected
    /// by the decrement means the last unit was already taken; the
    /// transaction rolls back and `Ok(None)` is returned. An insert failure
    /// also rolls back, so availability is never leaked without a booking
    /// row.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Conflict` if the referenced unit is gone,
    /// `RepositoryError::Database` for other database errors.
    pub async fn create_reserving_unit(
        &self,
        booking: &NewStorageBooking,
    ) -> Result<Option<StorageBooking>, RepositoryError> {
        let mut tx = self.pool.begin().await?;

        let reserved = sqlx::query(
            r"
            UPDATE storage_units
            SET available_units = available_units - 1
            WHERE id = $1 AND available_units > 0
            ",
        )
        .bind(booking.storage_unit_id)
        .execute(&mut *tx)
        .await?;

        if reserved.rows_affected() == 0 {
            return Ok(None);
        }

        let created = sqlx::query_as::<_, StorageBooking>(
            r"
            INSERT INTO storage_bookings
                (storage_unit_id, customer_name, customer_email, customer_phone,
                 bike_info, start_date)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING id, storage_unit_id, customer_name, customer_email, customer_phone,
                      bike_info, start_date, status, created_at
            ",
        )
        .bind(booking.storage_unit_id)
        .bind(&booking.customer_name)
        .bind(&booking.customer_email)
        .bind(&booking.customer_phone)
        .bind(&booking.bike_info)
        .bind(booking.start_date)
        .fetch_one(&mut *tx)
        .await
        .map_err(|e| map_insert_error(e, "storage unit does not exist"))?;

        tx.commit().await?;
        Ok(Some(created))
    }
}

/// Repository for service booking database operations.
pub struct ServiceBookingRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> ServiceBookingRepository<'a> {
    /// Create a new service booking repository.
    #[must_use]
    pub const fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// List all service bookings, newest first.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn list(&self) -> Result<Vec<ServiceBooking>, RepositoryError> {
        let bookings = sqlx::query_as::<_, ServiceBooking>(
            r"
            SELECT id, service_id, customer_name, customer_email, customer_phone,
                   bike_info, preferred_date, preferred_time, notes, status, created_at
            FROM service_bookings
            ORDER BY created_at DESC
            ",
        )
        .fetch_all(self.pool)
        .await?;

        Ok(bookings)
    }

    /// Insert a service booking.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Conflict` if the referenced service is gone,
    /// `RepositoryError::Database` for other database errors.
    pub async fn create(
        &self,
        booking: &NewServiceBooking,
    ) -> Result<ServiceBooking, RepositoryError> {
        let created = sqlx::query_as::<_, ServiceBooking>(
            r"
            INSERT INTO service_bookings
                (service_id, customer_name, customer_email, customer_phone,
                 bike_info, preferred_date, preferred_time, notes)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            RETURNING id, service_id, customer_name, customer_email, customer_phone,
                      bike_info, preferred_date, preferred_time, notes, status, created_at
            ",
        )
        .bind(booking.service_id)
        .bind(&booking.customer_name)
        .bind(&booking.customer_email)
        .bind(&booking.customer_phone)
        .bind(&booking.bike_info)
        .bind(booking.preferred_date)
        .bind(&booking.preferred_time)
        .bind(&booking.notes)
        .fetch_one(self.pool)
        .await
        .map_err(|e| map_insert_error(e, "service does not exist"))?;

        Ok(created)
    }
}

/// Repository for membership signup database operations.
pub struct MembershipSignupRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> MembershipSignupRepository<'a> {
    /// Create a new membership signup repository.
    #[must_use]
    pub const fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// List all membership signups, newest first.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn list(&self) -> Result<Vec<MembershipSignup>, RepositoryError> {
        let signups = sqlx::query_as::<_, MembershipSignup>(
            r"
            SELECT id, tier_id, customer_name, customer_email, customer_phone,
                   bike_info, status, created_at
            FROM membership_signups
            ORDER BY created_at DESC
            ",
        )
        .fetch_all(self.pool)
        .await?;

        Ok(signups)
    }

    /// Insert a membership signup.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Conflict` if the referenced tier is gone,
    /// `RepositoryError::Database` for other database errors.
    pub async fn create(
        &self,
        signup: &NewMembershipSignup,
    ) -> Result<MembershipSignup, RepositoryError> {
        let created = sqlx::query_as::<_, MembershipSignup>(
            r"
            INSERT INTO membership_signups
                (tier_id, customer_name, customer_email, customer_phone, bike_info)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id, tier_id, customer_name, customer_email, customer_phone,
                      bike_info, status, created_at
            ",
        )
        .bind(signup.tier_id)
        .bind(&signup.customer_name)
        .bind(&signup.customer_email)
        .bind(&signup.customer_phone)
        .bind(&signup.bike_info)
        .fetch_one(self.pool)
        .await
        .map_err(|e| map_insert_error(e, "membership tier does not exist"))?;

        Ok(created)
    }
}
