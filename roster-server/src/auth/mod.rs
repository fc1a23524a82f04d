//! Authentication
//!
//! - [`JwtService`] - token issue and validation
//! - [`CurrentUser`] - authenticated caller context
//! - [`require_auth`] - middleware guarding the employee routes

pub mod jwt;
pub mod middleware;

pub use jwt::{ADMIN_SUBJECT, Claims, CurrentUser, JwtConfig, JwtError, JwtService};
pub use middleware::require_auth;
