//! Financial health evaluation handlers

use std::sync::Arc;

use axum::{
    extract::{Query, State},
    Extension, Json,
};
use serde::{Deserialize, Serialize};

use crate::{AppError, AppState, AuthUser};
use balanza_core::health::{self, HealthReport, RuleInfo, RULES};

/// Default evaluation window when the client doesn't specify one
const DEFAULT_WINDOW_DAYS: u32 = 30;

/// Query parameters for the health evaluation
#[derive(Debug, Deserialize)]
pub struct HealthParams {
    pub window_days: Option<u32>,
}

/// GET /api/health - Evaluate the authenticated user's financial health
pub async fn get_health(
    State(state): State<Arc<AppState>>,
    Extension(AuthUser(user_id)): Extension<AuthUser>,
    Query(params): Query<HealthParams>,
) -> Result<Json<HealthReport>, AppError> {
    let window_days = params.window_days.unwrap_or(DEFAULT_WINDOW_DAYS);
    let report = health::evaluate(&state.db, user_id, window_days)?;
    Ok(Json(report))
}

/// One rule's presentation metadata, with its wire key
#[derive(Debug, Serialize)]
pub struct RuleInfoEntry {
    pub clave: &'static str,
    #[serde(flatten)]
    pub info: RuleInfo,
}

/// GET /api/health/rules - Static presentation metadata for the rules,
/// in evaluation order
pub async fn get_health_rules() -> Json<Vec<RuleInfoEntry>> {
    let entries = RULES
        .iter()
        .map(|(key, _)| RuleInfoEntry {
            clave: key.as_str(),
            info: health::rule_metadata(*key),
        })
        .collect();
    Json(entries)
}
