//! Customer-submitted booking and signup records.
//!
//! All three record types reference a catalog row by id, carry the customer's
//! contact details, and are written once with status `pending`. No code here
//! transitions a status after creation.

use chrono::{DateTime, Utc};
use serde::Serialize;
use sqlx::FromRow;

use iron_haven_core::{
    BookingStatus, Email, MembershipSignupId, MembershipTierId, ServiceBookingId, ServiceId,
    StorageBookingId, StorageUnitId,
};

/// A reservation request for a storage unit.
#[derive(Debug, Clone, Serialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct StorageBooking {
    pub id: StorageBookingId,
    pub storage_unit_id: StorageUnitId,
    pub customer_name: String,
    pub customer_email: Email,
    pub customer_phone: Option<String>,
    pub bike_info: Option<String>,
    pub start_date: DateTime<Utc>,
    pub status: BookingStatus,
    pub created_at: DateTime<Utc>,
}

/// Validated fields for creating a storage booking.
#[derive(Debug, Clone)]
pub struct NewStorageBooking {
    pub storage_unit_id: StorageUnitId,
    pub customer_name: String,
    pub customer_email: Email,
    pub customer_phone: Option<String>,
    pub bike_info: Option<String>,
    pub start_date: DateTime<Utc>,
}

/// An appointment request for a maintenance service.
#[derive(Debug, Clone, Serialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct ServiceBooking {
    pub id: ServiceBookingId,
    pub service_id: ServiceId,
    pub customer_name: String,
    pub customer_email: Email,
    pub customer_phone: Option<String>,
    pub bike_info: Option<String>,
    pub preferred_date: DateTime<Utc>,
    pub preferred_time: Option<String>,
    pub notes: Option<String>,
    pub status: BookingStatus,
    pub created_at: DateTime<Utc>,
}

/// Validated fields for creating a service booking.
#[derive(Debug, Clone)]
pub struct NewServiceBooking {
    pub service_id: ServiceId,
    pub customer_name: String,
    pub customer_email: Email,
    pub customer_phone: Option<String>,
    pub bike_info: Option<String>,
    pub preferred_date: DateTime<Utc>,
    pub preferred_time: Option<String>,
    pub notes: Option<String>,
}

/// A membership request for a club tier.
#[derive(Debug, Clone, Serialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct MembershipSignup {
    pub id: MembershipSignupId,
    pub tier_id: MembershipTierId,
    pub customer_name: String,
    pub customer_email: Email,
    pub customer_phone: Option<String>,
    pub bike_info: Option<String>,
    pub status: BookingStatus,
    pub created_at: DateTime<Utc>,
}

/// Validated fields for creating a membership signup.
#[derive(Debug, Clone)]
pub struct NewMembershipSignup {
    pub tier_id: MembershipTierId,
    pub customer_name: String,
    pub customer_email: Email,
    pub customer_phone: Option<String>,
    pub bike_info: Option<String>,
}
