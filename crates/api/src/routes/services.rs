//! Service catalog route handlers.

use axum::{
    Json,
    extract::{Path, State},
};

use iron_haven_core::ServiceId;

use crate::db::ServiceRepository;
use crate::error::{AppError, Result};
use crate::models::Service;
use crate::state::AppState;

/// List all services.
///
/// GET /api/services
pub async fn index(State(state): State<AppState>) -> Result<Json<Vec<Service>>> {
    let services = ServiceRepository::new(state.pool()).list().await?;
    Ok(Json(services))
}

/// Get a single service.
///
/// GET /api/services/{id}
pub async fn show(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Service>> {
    let Ok(id) = ServiceId::parse(&id) else {
        return Err(AppError::NotFound("Service not found".to_owned()));
    };

    let service = ServiceRepository::new(state.pool())
        .get_by_id(id)
        .await?
        .ok_or_else(|| AppError::NotFound("Service not found".to_owned()))?;

    Ok(Json(service))
}
