//! Shared types for the roster service
//!
//! Wire types, the list query contract, the employee match predicate and the
//! unified error system, used by both roster-server and roster-client.

pub mod client;
pub mod error;
pub mod filter;
pub mod models;
pub mod query;
pub mod util;

// Re-exports
pub use error::{ApiResponse, AppError, AppResult, ErrorCategory, ErrorCode};
pub use filter::EmployeeFilter;
pub use models::{Department, Employee, EmployeeCreate, EmployeeUpdate};
pub use query::{EmployeeQuery, ListParams, PageMeta, Paginated};
