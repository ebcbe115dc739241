//! Membership tier catalog route handlers.

use axum::{Json, extract::State};

use crate::db::MembershipTierRepository;
use crate::error::Result;
use crate::models::MembershipTier;
use crate::state::AppState;

/// List all membership tiers.
///
/// GET /api/membership-tiers
pub async fn index(State(state): State<AppState>) -> Result<Json<Vec<MembershipTier>>> {
    let tiers = MembershipTierRepository::new(state.pool()).list().await?;
    Ok(Json(tiers))
}
