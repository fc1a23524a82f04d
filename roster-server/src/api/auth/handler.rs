//! Authentication Handlers

use axum::{Json, extract::State};

use crate::api::extract::ValidatedJson;
use crate::core::ServerState;
use crate::security_log;
use crate::{AppError, AppResult};
use shared::client::{LoginRequest, LoginResponse};

/// Login handler
///
/// Checks the request against the configured admin credential and returns a
/// signed access token.
pub async fn login(
    State(state): State<ServerState>,
    ValidatedJson(req): ValidatedJson<LoginRequest>,
) -> AppResult<Json<LoginResponse>> {
    let admin = &state.config.admin;
    if req.email != admin.email || req.password != admin.password {
        security_log!("WARN", "login_failed", email = req.email.clone());
        return Err(AppError::invalid_credentials());
    }

    let access_token = state
        .get_jwt_service()
        .generate_token(&req.email)
        .map_err(|e| AppError::internal(format!("Failed to generate token: {e}")))?;

    tracing::info!(email = %req.email, "Admin logged in");
    Ok(Json(LoginResponse { access_token }))
}
