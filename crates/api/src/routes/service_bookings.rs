//! Service booking route handlers.

use axum::{Json, extract::State, http::StatusCode};
use tracing::instrument;

use crate::db::{ServiceBookingRepository, ServiceRepository};
use crate::error::{AppError, Result};
use crate::models::ServiceBooking;
use crate::state::AppState;
use crate::validate::{ServiceBookingPayload, parse_body};

/// Book a maintenance service appointment.
///
/// POST /api/service-bookings
#[instrument(skip(state, body))]
pub async fn create(
    State(state): State<AppState>,
    Json(body): Json<serde_json::Value>,
) -> Result<(StatusCode, Json<ServiceBooking>)> {
    let payload: ServiceBookingPayload = parse_body(body).map_err(AppError::Validation)?;
    let new_booking = payload.validate().map_err(AppError::Validation)?;

    // Verify the service exists before accepting the booking
    ServiceRepository::new(state.pool())
        .get_by_id(new_booking.service_id)
        .await?
        .ok_or_else(|| AppError::NotFound("Service not found".to_owned()))?;

    let booking = ServiceBookingRepository::new(state.pool())
        .create(&new_booking)
        .await?;

    tracing::info!(booking_id = %booking.id, "Service booking created");

    Ok((StatusCode::CREATED, Json(booking)))
}
