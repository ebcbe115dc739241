//! Contact inquiry route handlers.

use axum::{Json, extract::State, http::StatusCode};
use tracing::instrument;

use crate::db::InquiryRepository;
use crate::error::{AppError, Result};
use crate::models::Inquiry;
use crate::state::AppState;
use crate::validate::{InquiryPayload, parse_body};

/// Submit a contact inquiry.
///
/// POST /api/inquiries
#[instrument(skip(state, body))]
pub async fn create(
    State(state): State<AppState>,
    Json(body): Json<serde_json::Value>,
) -> Result<(StatusCode, Json<Inquiry>)> {
    let payload: InquiryPayload = parse_body(body).map_err(AppError::Validation)?;
    let new_inquiry = payload.validate().map_err(AppError::Validation)?;

    let inquiry = InquiryRepository::new(state.pool())
        .create(&new_inquiry)
        .await?;

    tracing::info!(inquiry_id = %inquiry.id, "Inquiry created");

    Ok((StatusCode::CREATED, Json(inquiry)))
}
