//! Asset holding handlers

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    Extension, Json,
};

use crate::{AppError, AppState, AuthUser, SuccessResponse};
use balanza_core::models::{AssetRecord, NewAsset};

/// GET /api/assets - List the user's asset holdings
pub async fn list_assets(
    State(state): State<Arc<AppState>>,
    Extension(AuthUser(user_id)): Extension<AuthUser>,
) -> Result<Json<Vec<AssetRecord>>, AppError> {
    Ok(Json(state.db.list_assets(user_id)?))
}

/// POST /api/assets - Record an asset holding
pub async fn create_asset(
    State(state): State<Arc<AppState>>,
    Extension(AuthUser(user_id)): Extension<AuthUser>,
    Json(req): Json<NewAsset>,
) -> Result<Json<AssetRecord>, AppError> {
    let id = state.db.insert_asset(user_id, &req)?;
    let record = state
        .db
        .get_asset(user_id, id)?
        .ok_or_else(|| AppError::internal("Asset not found after creation"))?;
    Ok(Json(record))
}

/// GET /api/assets/:id - Get a single asset holding
pub async fn get_asset(
    State(state): State<Arc<AppState>>,
    Extension(AuthUser(user_id)): Extension<AuthUser>,
    Path(id): Path<i64>,
) -> Result<Json<AssetRecord>, AppError> {
    let record = state
        .db
        .get_asset(user_id, id)?
        .ok_or_else(|| AppError::not_found(&format!("Asset {} not found", id)))?;
    Ok(Json(record))
}

/// PUT /api/assets/:id - Update an asset holding
pub async fn update_asset(
    State(state): State<Arc<AppState>>,
    Extension(AuthUser(user_id)): Extension<AuthUser>,
    Path(id): Path<i64>,
    Json(req): Json<NewAsset>,
) -> Result<Json<AssetRecord>, AppError> {
    state.db.update_asset(user_id, id, &req)?;
    let record = state
        .db
        .get_asset(user_id, id)?
        .ok_or_else(|| AppError::internal("Asset not found after update"))?;
    Ok(Json(record))
}

/// DELETE /api/assets/:id - Delete an asset holding
pub async fn delete_asset(
    State(state): State<Arc<AppState>>,
    Extension(AuthUser(user_id)): Extension<AuthUser>,
    Path(id): Path<i64>,
) -> Result<Json<SuccessResponse>, AppError> {
    state.db.delete_asset(user_id, id)?;
    Ok(Json(SuccessResponse { success: true }))
}
