//! Income record handlers

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    Extension, Json,
};

use crate::{AppError, AppState, AuthUser, SuccessResponse};
use balanza_core::models::{IncomeRecord, NewFlowRecord};

/// GET /api/incomes - List the user's income records, newest first
pub async fn list_incomes(
    State(state): State<Arc<AppState>>,
    Extension(AuthUser(user_id)): Extension<AuthUser>,
) -> Result<Json<Vec<IncomeRecord>>, AppError> {
    Ok(Json(state.db.list_incomes(user_id)?))
}

/// POST /api/incomes - Record an income
pub async fn create_income(
    State(state): State<Arc<AppState>>,
    Extension(AuthUser(user_id)): Extension<AuthUser>,
    Json(req): Json<NewFlowRecord>,
) -> Result<Json<IncomeRecord>, AppError> {
    let id = state.db.insert_income(user_id, &req)?;
    let record = state
        .db
        .get_income(user_id, id)?
        .ok_or_else(|| AppError::internal("Income not found after creation"))?;
    Ok(Json(record))
}

/// GET /api/incomes/:id - Get a single income record
pub async fn get_income(
    State(state): State<Arc<AppState>>,
    Extension(AuthUser(user_id)): Extension<AuthUser>,
    Path(id): Path<i64>,
) -> Result<Json<IncomeRecord>, AppError> {
    let record = state
        .db
        .get_income(user_id, id)?
        .ok_or_else(|| AppError::not_found(&format!("Income {} not found", id)))?;
    Ok(Json(record))
}

/// PUT /api/incomes/:id - Update an income record
pub async fn update_income(
    State(state): State<Arc<AppState>>,
    Extension(AuthUser(user_id)): Extension<AuthUser>,
    Path(id): Path<i64>,
    Json(req): Json<NewFlowRecord>,
) -> Result<Json<IncomeRecord>, AppError> {
    state.db.update_income(user_id, id, &req)?;
    let record = state
        .db
        .get_income(user_id, id)?
        .ok_or_else(|| AppError::internal("Income not found after update"))?;
    Ok(Json(record))
}

/// DELETE /api/incomes/:id - Delete an income record
pub async fn delete_income(
    State(state): State<Arc<AppState>>,
    Extension(AuthUser(user_id)): Extension<AuthUser>,
    Path(id): Path<i64>,
) -> Result<Json<SuccessResponse>, AppError> {
    state.db.delete_income(user_id, id)?;
    Ok(Json(SuccessResponse { success: true }))
}
