//! Roster Client - HTTP client and list-view controller for the roster API
//!
//! - [`HttpClient`] talks to `roster-server` over reqwest
//! - [`OfflineDirectory`] is an in-memory stand-in with identical semantics
//! - [`EmployeeListView`] drives a searchable, filterable, paginated table on
//!   top of either one

pub mod api;
pub mod config;
pub mod error;
pub mod http;
pub mod list_view;
pub mod offline;
pub mod route;
pub mod session;

pub use api::EmployeeApi;
pub use config::ClientConfig;
pub use error::{ClientError, ClientResult};
pub use http::HttpClient;
pub use list_view::{
    DepartmentFilter, EmployeeForm, EmployeeListView, EmptyState, FormErrors, ListViewState,
    Modal, Notification, NotificationKind,
};
pub use offline::OfflineDirectory;
pub use route::{RouteDecision, guard};
pub use session::Session;

// Re-export shared types for convenience
pub use shared::client::{LoginRequest, LoginResponse};
pub use shared::models::{Department, Employee, EmployeeCreate, EmployeeUpdate};
pub use shared::query::{EmployeeQuery, PageMeta, Paginated};
