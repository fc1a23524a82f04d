//! Employee API Module
//!
//! | Path | Method | Handler |
//! |------|--------|---------|
//! | /employees | GET | paginated, filtered list |
//! | /employees | POST | create (201) |
//! | /employees/{id} | GET | fetch one |
//! | /employees/{id} | PATCH | partial update |
//! | /employees/{id} | DELETE | permanent delete (204) |
//!
//! Every route requires a bearer token.

mod handler;

use axum::{Router, middleware, routing::get};

use crate::auth::require_auth;
use crate::core::ServerState;

pub fn router(state: ServerState) -> Router<ServerState> {
    Router::new()
        .route("/employees", get(handler::list).post(handler::create))
        .route(
            "/employees/{id}",
            get(handler::get_by_id)
                .patch(handler::update)
                .delete(handler::delete),
        )
        .route_layer(middleware::from_fn_with_state(state, require_auth))
}
