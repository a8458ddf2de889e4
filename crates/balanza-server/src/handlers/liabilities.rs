//! Liability handlers

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    Extension, Json,
};

use crate::{AppError, AppState, AuthUser, SuccessResponse};
use balanza_core::models::{LiabilityRecord, NewLiability};

/// GET /api/liabilities - List the user's liabilities
pub async fn list_liabilities(
    State(state): State<Arc<AppState>>,
    Extension(AuthUser(user_id)): Extension<AuthUser>,
) -> Result<Json<Vec<LiabilityRecord>>, AppError> {
    Ok(Json(state.db.list_liabilities(user_id)?))
}

/// POST /api/liabilities - Record a liability
pub async fn create_liability(
    State(state): State<Arc<AppState>>,
    Extension(AuthUser(user_id)): Extension<AuthUser>,
    Json(req): Json<NewLiability>,
) -> Result<Json<LiabilityRecord>, AppError> {
    let id = state.db.insert_liability(user_id, &req)?;
    let record = state
        .db
        .get_liability(user_id, id)?
        .ok_or_else(|| AppError::internal("Liability not found after creation"))?;
    Ok(Json(record))
}

/// GET /api/liabilities/:id - Get a single liability
pub async fn get_liability(
    State(state): State<Arc<AppState>>,
    Extension(AuthUser(user_id)): Extension<AuthUser>,
    Path(id): Path<i64>,
) -> Result<Json<LiabilityRecord>, AppError> {
    let record = state
        .db
        .get_liability(user_id, id)?
        .ok_or_else(|| AppError::not_found(&format!("Liability {} not found", id)))?;
    Ok(Json(record))
}

/// PUT /api/liabilities/:id - Update a liability
pub async fn update_liability(
    State(state): State<Arc<AppState>>,
    Extension(AuthUser(user_id)): Extension<AuthUser>,
    Path(id): Path<i64>,
    Json(req): Json<NewLiability>,
) -> Result<Json<LiabilityRecord>, AppError> {
    state.db.update_liability(user_id, id, &req)?;
    let record = state
        .db
        .get_liability(user_id, id)?
        .ok_or_else(|| AppError::internal("Liability not found after update"))?;
    Ok(Json(record))
}

/// DELETE /api/liabilities/:id - Delete a liability
pub async fn delete_liability(
    State(state): State<Arc<AppState>>,
    Extension(AuthUser(user_id)): Extension<AuthUser>,
    Path(id): Path<i64>,
) -> Result<Json<SuccessResponse>, AppError> {
    state.db.delete_liability(user_id, id)?;
    Ok(Json(SuccessResponse { success: true }))
}
