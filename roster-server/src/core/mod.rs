//! Core server infrastructure: configuration, shared state, startup

pub mod config;
pub mod error;
pub mod server;
pub mod state;

pub use config::{AdminCredentials, Config};
pub use error::{Result, ServerError};
pub use server::Server;
pub use state::ServerState;
