//! Data models
//!
//! Shared between roster-server and roster-client (via the JSON API).

pub mod employee;

pub use employee::*;
