//! Balanza Web Server
//!
//! Axum-based REST API for the Balanza personal finance tracker.
//!
//! Security features:
//! - JWT bearer authentication (secure by default, use --no-auth for local dev)
//! - Restrictive CORS policy
//! - Per-user data scoping on every record route
//! - Sanitized error responses

use std::sync::Arc;

use axum::{
    extract::{Request, State},
    http::{header, HeaderValue, Method, StatusCode},
    middleware::{self, Next},
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::{error, info, warn};

use balanza_core::db::Database;
use balanza_core::Error as CoreError;

mod handlers;

/// Session token lifetime
pub const TOKEN_LIFETIME_MINUTES: i64 = 30;

/// Environment variable holding the JWT signing secret
pub const JWT_SECRET_ENV: &str = "BALANZA_JWT_SECRET";

/// Server configuration
#[derive(Clone)]
pub struct ServerConfig {
    /// Whether authentication is required (secure by default)
    pub require_auth: bool,
    /// HS256 secret for signing and validating session tokens
    pub jwt_secret: String,
    /// Allowed CORS origins (empty = same-origin only in production)
    pub allowed_origins: Vec<String>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            require_auth: true,
            jwt_secret: "balanza-dev-secret".to_string(),
            allowed_origins: vec![],
        }
    }
}

impl ServerConfig {
    /// Build a config from the environment.
    ///
    /// Fails when auth is required but no secret is configured, so a
    /// production server can never silently run on the dev secret.
    pub fn from_env(require_auth: bool) -> anyhow::Result<Self> {
        let jwt_secret = match std::env::var(JWT_SECRET_ENV) {
            Ok(secret) if !secret.is_empty() => secret,
            _ if require_auth => {
                anyhow::bail!("{} must be set when authentication is enabled", JWT_SECRET_ENV)
            }
            _ => {
                warn!("{} not set, using dev secret", JWT_SECRET_ENV);
                "balanza-dev-secret".to_string()
            }
        };

        Ok(Self {
            require_auth,
            jwt_secret,
            allowed_origins: vec![],
        })
    }
}

/// Shared application state
pub struct AppState {
    pub db: Database,
    pub config: ServerConfig,
}

/// Authenticated user, inserted into request extensions by the middleware
#[derive(Debug, Clone, Copy)]
pub struct AuthUser(pub i64);

#[derive(Debug, Serialize, Deserialize)]
struct Claims {
    /// User id
    sub: String,
    /// Expiry, unix seconds
    exp: usize,
}

/// Issue a session token for a user
pub fn create_token(user_id: i64, secret: &str) -> Result<String, jsonwebtoken::errors::Error> {
    let exp = chrono::Utc::now() + chrono::Duration::minutes(TOKEN_LIFETIME_MINUTES);
    let claims = Claims {
        sub: user_id.to_string(),
        exp: exp.timestamp() as usize,
    };
    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(secret.as_bytes()),
    )
}

/// Validate a session token and extract the user id
fn decode_user_id(token: &str, secret: &str) -> Result<i64, String> {
    let data = decode::<Claims>(
        token,
        &DecodingKey::from_secret(secret.as_bytes()),
        &Validation::default(),
    )
    .map_err(|e| format!("Invalid token: {}", e))?;

    data.claims
        .sub
        .parse()
        .map_err(|_| "Invalid token subject".to_string())
}

/// Authentication middleware - validates the bearer token and attaches the
/// user id to the request.
///
/// With `require_auth` disabled (local dev), requests without a token act as
/// user 1; a token, when present, is still validated.
async fn auth_middleware(
    State(state): State<Arc<AppState>>,
    mut request: Request,
    next: Next,
) -> Response {
    let token = request
        .headers()
        .get(header::AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .and_then(|auth| auth.strip_prefix("Bearer "));

    match token {
        Some(token) => match decode_user_id(token, &state.config.jwt_secret) {
            Ok(user_id) => {
                request.extensions_mut().insert(AuthUser(user_id));
                next.run(request).await
            }
            Err(e) => {
                warn!(error = %e, path = %request.uri().path(), "Rejected invalid token");
                unauthorized_response()
            }
        },
        None if state.config.require_auth => {
            warn!(path = %request.uri().path(), "Unauthorized request - no token");
            unauthorized_response()
        }
        None => {
            request.extensions_mut().insert(AuthUser(1));
            next.run(request).await
        }
    }
}

fn unauthorized_response() -> Response {
    (
        StatusCode::UNAUTHORIZED,
        Json(serde_json::json!({
            "error": "Authentication required"
        })),
    )
        .into_response()
}

/// Success response
#[derive(Serialize)]
pub struct SuccessResponse {
    pub success: bool,
}

/// Create the application router
pub fn create_router(db: Database, config: ServerConfig) -> Router {
    let state = Arc::new(AppState {
        db,
        config: config.clone(),
    });

    // Register and login are the only unauthenticated routes
    let public_routes = Router::new()
        .route("/auth/register", post(handlers::register))
        .route("/auth/login", post(handlers::login));

    let protected_routes = Router::new()
        // Session
        .route("/me", get(handlers::get_me))
        .route("/auth/change-password", post(handlers::change_password))
        // Incomes
        .route(
            "/incomes",
            get(handlers::list_incomes).post(handlers::create_income),
        )
        .route(
            "/incomes/:id",
            get(handlers::get_income)
                .put(handlers::update_income)
                .delete(handlers::delete_income),
        )
        // Expenses
        .route(
            "/expenses",
            get(handlers::list_expenses).post(handlers::create_expense),
        )
        .route(
            "/expenses/:id",
            get(handlers::get_expense)
                .put(handlers::update_expense)
                .delete(handlers::delete_expense),
        )
        // Assets
        .route(
            "/assets",
            get(handlers::list_assets).post(handlers::create_asset),
        )
        .route(
            "/assets/:id",
            get(handlers::get_asset)
                .put(handlers::update_asset)
                .delete(handlers::delete_asset),
        )
        // Liabilities
        .route(
            "/liabilities",
            get(handlers::list_liabilities).post(handlers::create_liability),
        )
        .route(
            "/liabilities/:id",
            get(handlers::get_liability)
                .put(handlers::update_liability)
                .delete(handlers::delete_liability),
        )
        // Health evaluation
        .route("/health", get(handlers::get_health))
        .route("/health/rules", get(handlers::get_health_rules))
        .layer(middleware::from_fn_with_state(
            state.clone(),
            auth_middleware,
        ));

    let api_routes = public_routes.merge(protected_routes);

    // Build CORS layer
    let cors = if config.allowed_origins.is_empty() {
        // Restrictive default: only allow same-origin
        CorsLayer::new()
            .allow_methods([
                Method::GET,
                Method::POST,
                Method::PUT,
                Method::DELETE,
                Method::OPTIONS,
            ])
            .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION])
    } else {
        let origins: Vec<HeaderValue> = config
            .allowed_origins
            .iter()
            .filter_map(|o| o.parse().ok())
            .collect();
        CorsLayer::new()
            .allow_origin(origins)
            .allow_methods([
                Method::GET,
                Method::POST,
                Method::PUT,
                Method::DELETE,
                Method::OPTIONS,
            ])
            .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION])
    };

    Router::new()
        .nest("/api", api_routes)
        .with_state(state)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
}

/// Start the server
pub async fn serve(db: Database, host: &str, port: u16) -> anyhow::Result<()> {
    serve_with_config(db, host, port, ServerConfig::default()).await
}

/// Start the server with custom configuration
pub async fn serve_with_config(
    db: Database,
    host: &str,
    port: u16,
    config: ServerConfig,
) -> anyhow::Result<()> {
    if !config.require_auth {
        warn!("⚠️  Authentication disabled - do not expose to network!");
    }

    let app = create_router(db, config);
    let addr = format!("{}:{}", host, port);

    info!("Starting server at http://{}", addr);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

// ============================================================================
// Error Handling
// ============================================================================

/// Application error type with proper HTTP status codes
pub struct AppError {
    status: StatusCode,
    message: String,
    internal: Option<anyhow::Error>,
}

impl AppError {
    pub fn bad_request(msg: &str) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            message: msg.to_string(),
            internal: None,
        }
    }

    pub fn unauthorized(msg: &str) -> Self {
        Self {
            status: StatusCode::UNAUTHORIZED,
            message: msg.to_string(),
            internal: None,
        }
    }

    pub fn not_found(msg: &str) -> Self {
        Self {
            status: StatusCode::NOT_FOUND,
            message: msg.to_string(),
            internal: None,
        }
    }

    pub fn internal(msg: &str) -> Self {
        Self {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            message: msg.to_string(),
            internal: None,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        // Log the full internal error if present
        if let Some(err) = &self.internal {
            error!(error = %err, "Internal error");
        }

        let body = Json(serde_json::json!({
            "error": self.message
        }));

        (self.status, body).into_response()
    }
}

impl From<CoreError> for AppError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::Validation(msg) | CoreError::InvalidData(msg) => Self {
                status: StatusCode::BAD_REQUEST,
                message: msg,
                internal: None,
            },
            CoreError::NotFound(msg) => Self {
                status: StatusCode::NOT_FOUND,
                message: msg,
                internal: None,
            },
            CoreError::Auth(msg) => Self {
                status: StatusCode::UNAUTHORIZED,
                message: msg,
                internal: None,
            },
            CoreError::NoData => Self {
                status: StatusCode::NOT_FOUND,
                message: "No records found".to_string(),
                internal: None,
            },
            // Storage and serialization failures stay opaque to the client
            other => Self {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                message: "An internal error occurred".to_string(),
                internal: Some(anyhow::Error::new(other)),
            },
        }
    }
}
