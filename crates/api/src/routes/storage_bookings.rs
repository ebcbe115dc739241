//! Storage booking route handlers.

use axum::{Json, extract::State, http::StatusCode};
use tracing::instrument;

use crate::db::{StorageBookingRepository, StorageUnitRepository};
use crate::error::{AppError, Result};
use crate::models::StorageBooking;
use crate::state::AppState;
use crate::validate::{StorageBookingPayload, parse_body};

/// Reserve a storage unit.
///
/// POST /api/storage-bookings
///
/// The multi-step write: validate the payload, confirm the unit exists
/// (404 otherwise), then reserve a unit and insert the booking in one
/// transaction - a conditional decrement that affects zero rows means the
/// last unit was already taken and the request fails with the capacity
/// error, rolling the transaction back.
#[instrument(skip(state, body))]
pub async fn create(
    State(state): State<AppState>,
    Json(body): Json<serde_json::Value>,
) -> Result<(StatusCode, Json<StorageBooking>)> {
    let payload: StorageBookingPayload = parse_body(body).map_err(AppError::Validation)?;
    let new_booking = payload.validate().map_err(AppError::Validation)?;

    let unit = StorageUnitRepository::new(state.pool())
        .get_by_id(new_booking.storage_unit_id)
        .await?
        .ok_or_else(|| AppError::NotFound("Storage unit not found".to_owned()))?;

    let booking = StorageBookingRepository::new(state.pool())
        .create_reserving_unit(&new_booking)
        .await?
        .ok_or(AppError::Capacity)?;

    tracing::info!(
        booking_id = %booking.id,
        unit = %unit.name,
        "Storage booking created"
    );

    Ok((StatusCode::CREATED, Json(booking)))
}
