//! Expense record handlers

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    Extension, Json,
};

use crate::{AppError, AppState, AuthUser, SuccessResponse};
use balanza_core::models::{ExpenseRecord, NewFlowRecord};

/// GET /api/expenses - List the user's expense records, newest first
pub async fn list_expenses(
    State(state): State<Arc<AppState>>,
    Extension(AuthUser(user_id)): Extension<AuthUser>,
) -> Result<Json<Vec<ExpenseRecord>>, AppError> {
    Ok(Json(state.db.list_expenses(user_id)?))
}

/// POST /api/expenses - Record an expense
pub async fn create_expense(
    State(state): State<Arc<AppState>>,
    Extension(AuthUser(user_id)): Extension<AuthUser>,
    Json(req): Json<NewFlowRecord>,
) -> Result<Json<ExpenseRecord>, AppError> {
    let id = state.db.insert_expense(user_id, &req)?;
    let record = state
        .db
        .get_expense(user_id, id)?
        .ok_or_else(|| AppError::internal("Expense not found after creation"))?;
    Ok(Json(record))
}

/// GET /api/expenses/:id - Get a single expense record
pub async fn get_expense(
    State(state): State<Arc<AppState>>,
    Extension(AuthUser(user_id)): Extension<AuthUser>,
    Path(id): Path<i64>,
) -> Result<Json<ExpenseRecord>, AppError> {
    let record = state
        .db
        .get_expense(user_id, id)?
        .ok_or_else(|| AppError::not_found(&format!("Expense {} not found", id)))?;
    Ok(Json(record))
}

/// PUT /api/expenses/:id - Update an expense record
pub async fn update_expense(
    State(state): State<Arc<AppState>>,
    Extension(AuthUser(user_id)): Extension<AuthUser>,
    Path(id): Path<i64>,
    Json(req): Json<NewFlowRecord>,
) -> Result<Json<ExpenseRecord>, AppError> {
    state.db.update_expense(user_id, id, &req)?;
    let record = state
        .db
        .get_expense(user_id, id)?
        .ok_or_else(|| AppError::internal("Expense not found after update"))?;
    Ok(Json(record))
}

/// DELETE /api/expenses/:id - Delete an expense record
pub async fn delete_expense(
    State(state): State<Arc<AppState>>,
    Extension(AuthUser(user_id)): Extension<AuthUser>,
    Path(id): Path<i64>,
) -> Result<Json<SuccessResponse>, AppError> {
    state.db.delete_expense(user_id, id)?;
    Ok(Json(SuccessResponse { success: true }))
}
