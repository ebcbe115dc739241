//! HTTP route handlers for the public API.
//!
//! # Route Structure
//!
//! ```text
//! GET  /api/storage-units          - List storage units
//! GET  /api/storage-units/{id}     - Storage unit detail
//! GET  /api/services               - List services
//! GET  /api/services/{id}          - Service detail
//! GET  /api/membership-tiers       - List membership tiers
//! POST /api/storage-bookings       - Reserve a storage unit
//! POST /api/service-bookings       - Book a maintenance service
//! POST /api/membership-signups     - Sign up for a membership tier
//! POST /api/inquiries              - Submit a contact inquiry
//! ```
//!
//! All bodies and responses are JSON with camelCase field names. Reads
//! return the catalog as stored; writes validate, check referenced ids, and
//! return the persisted row with a 201.

pub mod inquiries;
pub mod membership_signups;
pub mod membership_tiers;
pub mod service_bookings;
pub mod services;
pub mod storage_bookings;
pub mod storage_units;

use axum::{
    Router,
    routing::{get, post},
};

use crate::state::AppState;

/// Create the `/api` router.
pub fn routes() -> Router<AppState> {
    Router::new()
        // Catalog reads
        .route("/storage-units", get(storage_units::index))
        .route("/storage-units/{id}", get(storage_units::show))
        .route("/services", get(services::index))
        .route("/services/{id}", get(services::show))
        .route("/membership-tiers", get(membership_tiers::index))
        // Customer writes
        .route("/storage-bookings", post(storage_bookings::create))
        .route("/service-bookings", post(service_bookings::create))
        .route("/membership-signups", post(membership_signups::create))
        .route("/inquiries", post(inquiries::create))
}
