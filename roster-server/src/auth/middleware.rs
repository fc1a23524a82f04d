//! Authentication middleware

use axum::{
    extract::{Request, State},
    middleware::Next,
    response::Response,
};

use crate::AppError;
use crate::auth::{ADMIN_SUBJECT, CurrentUser, JwtError, JwtService};
use crate::core::ServerState;
use crate::security_log;

/// Require a valid admin bearer token
///
/// Reads `Authorization: Bearer <token>`, validates it and inserts
/// [`CurrentUser`] into the request extensions. Runs before any handler.
///
/// | Failure | Error code |
/// |---------|------------|
/// | no Authorization header | NotAuthenticated (401) |
/// | malformed header, bad signature or claims | TokenInvalid (401) |
/// | expired token | TokenExpired (401) |
pub async fn require_auth(
    State(state): State<ServerState>,
    mut req: Request,
    next: Next,
) -> Result<Response, AppError> {
    let auth_header = req
        .headers()
        .get(http::header::AUTHORIZATION)
        .and_then(|h| h.to_str().ok());

    let token = match auth_header {
        Some(header) => match JwtService::extract_from_header(header) {
            Some(token) => token,
            None => {
                security_log!("WARN", "auth_malformed", uri = req.uri().to_string());
                return Err(AppError::invalid_token("Invalid authorization header"));
            }
        },
        None => {
            security_log!("WARN", "auth_missing", uri = req.uri().to_string());
            return Err(AppError::unauthorized());
        }
    };

    let claims = match state.get_jwt_service().validate_token(token) {
        Ok(claims) => claims,
        Err(e) => {
            security_log!(
                "WARN",
                "auth_failed",
                error = e.to_string(),
                uri = req.uri().to_string()
            );
            return match e {
                JwtError::ExpiredToken => Err(AppError::token_expired()),
                _ => Err(AppError::invalid_token("Invalid token")),
            };
        }
    };

    if claims.sub != ADMIN_SUBJECT || claims.email != state.config.admin.email {
        security_log!(
            "WARN",
            "auth_unknown_subject",
            subject = claims.sub.clone(),
            email = claims.email.clone()
        );
        return Err(AppError::invalid_token("Invalid token"));
    }

    req.extensions_mut().insert(CurrentUser::from(claims));
    Ok(next.run(req).await)
}
