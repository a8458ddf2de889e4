//! Authentication and session handlers

use std::sync::Arc;

use axum::{extract::State, Extension, Json};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::{create_token, AppError, AppState, AuthUser, SuccessResponse};
use balanza_core::models::{NewUser, User};

/// Request body for logging in
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Response for a successful login
#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub token: String,
    pub usuario: User,
}

/// Request body for changing the password
#[derive(Debug, Deserialize)]
pub struct ChangePasswordRequest {
    pub current_password: String,
    pub new_password: String,
}

/// POST /api/auth/register - Create a new user account
pub async fn register(
    State(state): State<Arc<AppState>>,
    Json(req): Json<NewUser>,
) -> Result<Json<User>, AppError> {
    let id = state.db.create_user(&req)?;
    let user = state
        .db
        .get_user(id)?
        .ok_or_else(|| AppError::internal("User not found after creation"))?;

    info!(user_id = id, "Registered new user");
    Ok(Json(user))
}

/// POST /api/auth/login - Verify credentials and issue a session token
pub async fn login(
    State(state): State<Arc<AppState>>,
    Json(req): Json<LoginRequest>,
) -> Result<Json<LoginResponse>, AppError> {
    // Collapse "no such user" and "bad password" into one response so the
    // endpoint doesn't leak which emails are registered
    let user = state
        .db
        .authenticate_user(&req.email, &req.password)
        .map_err(|_| AppError::unauthorized("Invalid credentials"))?;

    let token = create_token(user.id, &state.config.jwt_secret)
        .map_err(|e| AppError::internal(&format!("Failed to issue token: {}", e)))?;

    info!(user_id = user.id, "User logged in");
    Ok(Json(LoginResponse {
        token,
        usuario: user,
    }))
}

/// POST /api/auth/change-password - Change the authenticated user's password
pub async fn change_password(
    State(state): State<Arc<AppState>>,
    Extension(AuthUser(user_id)): Extension<AuthUser>,
    Json(req): Json<ChangePasswordRequest>,
) -> Result<Json<SuccessResponse>, AppError> {
    state
        .db
        .change_password(user_id, &req.current_password, &req.new_password)?;

    info!(user_id, "Password changed");
    Ok(Json(SuccessResponse { success: true }))
}

/// GET /api/me - The authenticated user's profile
pub async fn get_me(
    State(state): State<Arc<AppState>>,
    Extension(AuthUser(user_id)): Extension<AuthUser>,
) -> Result<Json<User>, AppError> {
    let user = state
        .db
        .get_user(user_id)?
        .ok_or_else(|| AppError::not_found("User not found"))?;
    Ok(Json(user))
}
