//! Storage unit catalog route handlers.

use axum::{
    Json,
    extract::{Path, State},
};

use iron_haven_core::StorageUnitId;

use crate::db::StorageUnitRepository;
use crate::error::{AppError, Result};
use crate::models::StorageUnit;
use crate::state::AppState;

/// List all storage units.
///
/// GET /api/storage-units
pub async fn index(State(state): State<AppState>) -> Result<Json<Vec<StorageUnit>>> {
    let units = StorageUnitRepository::new(state.pool()).list().await?;
    Ok(Json(units))
}

/// Get a single storage unit.
///
/// GET /api/storage-units/{id}
///
/// An id that does not parse as a UUID matches no row and is a 404, not a
/// server error.
pub async fn show(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<StorageUnit>> {
    let Ok(id) = StorageUnitId::parse(&id) else {
        return Err(AppError::NotFound("Storage unit not found".to_owned()));
    };

    let unit = StorageUnitRepository::new(state.pool())
        .get_by_id(id)
        .await?
        .ok_or_else(|| AppError::NotFound("Storage unit not found".to_owned()))?;

    Ok(Json(unit))
}
