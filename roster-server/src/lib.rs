//! Roster Server - employee directory REST service
//!
//! # Module layout
//!
//! ```text
//! roster-server/src/
//! ├── core/          # config, state, server, startup errors
//! ├── auth/          # JWT service and auth middleware
//! ├── api/           # HTTP routes and handlers
//! ├── db/            # SQLite pool, list query builder, repository, seed data
//! └── utils/         # logging, error re-exports
//! ```
//!
//! # Endpoints
//!
//! | Method | Path | Auth |
//! |--------|------|------|
//! | GET | /health | no |
//! | POST | /auth/login | no |
//! | GET, POST | /employees | bearer |
//! | GET, PATCH, DELETE | /employees/{id} | bearer |

pub mod api;
pub mod auth;
pub mod core;
pub mod db;
pub mod utils;

// Re-export public types
pub use api::build_app;
pub use auth::{CurrentUser, JwtService};
pub use core::{Config, Server, ServerState};
pub use utils::{AppError, AppResult};

// Re-export logger functions
pub use utils::logger::init_logger;

// Security logging macro
#[macro_export]
macro_rules! security_log {
    ($level:expr, $event:expr, $($key:ident = $value:expr),*) => {
        tracing::info!(
            target: "security",
            level = $level,
            event = $event,
            $($key = $value),*
        );
    };
}
