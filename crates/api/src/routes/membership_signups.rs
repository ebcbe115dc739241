//! Membership signup route handlers.

use axum::{Json, extract::State, http::StatusCode};
use tracing::instrument;

use crate::db::{MembershipSignupRepository, MembershipTierRepository};
use crate::error::{AppError, Result};
use crate::models::MembershipSignup;
use crate::state::AppState;
use crate::validate::{MembershipSignupPayload, parse_body};

/// Sign up for a membership tier.
///
/// POST /api/membership-signups
#[instrument(skip(state, body))]
pub async fn create(
    State(state): State<AppState>,
    Json(body): Json<serde_json::Value>,
) -> Result<(StatusCode, Json<MembershipSignup>)> {
    let payload: MembershipSignupPayload = parse_body(body).map_err(AppError::Validation)?;
    let new_signup = payload.validate().map_err(AppError::Validation)?;

    // Verify the tier exists before accepting the signup
    MembershipTierRepository::new(state.pool())
        .get_by_id(new_signup.tier_id)
        .await?
        .ok_or_else(|| AppError::NotFound("Membership tier not found".to_owned()))?;

    let signup = MembershipSignupRepository::new(state.pool())
        .create(&new_signup)
        .await?;

    tracing::info!(signup_id = %signup.id, "Membership signup created");

    Ok((StatusCode::CREATED, Json(signup)))
}
