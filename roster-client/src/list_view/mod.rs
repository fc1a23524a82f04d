//! Employee list-view controller
//!
//! Owns the search/department/page state of the employee table, fetches
//! pages through an [`EmployeeApi`] and re-fetches after every successful
//! mutation without leaving the current page or filters.
//!
//! Methods take `&self`, so calls may overlap (a fast typist, a click during
//! a load). Every fetch takes a generation ticket and only the latest ticket
//! may write results back; older responses are dropped.

pub mod form;
pub mod notification;
pub mod pagination;
pub mod state;

pub use form::{EmployeeForm, FormErrors};
pub use notification::{NOTIFICATION_TTL, Notification, NotificationKind, Notifier};
pub use pagination::{PageItem, can_go_next, can_go_previous, range_label, visible_pages};
pub use state::{DepartmentFilter, EmptyState, ListViewState, Modal};

use parking_lot::Mutex;
use shared::models::Employee;

use crate::{ClientConfig, EmployeeApi, Session};

pub const MSG_ADDED: &str = "Employee added successfully";
pub const MSG_UPDATED: &str = "Employee updated successfully";
pub const MSG_DELETED: &str = "Employee deleted successfully";
pub const MSG_ADD_FAILED: &str = "Failed to add employee";
pub const MSG_UPDATE_FAILED: &str = "Failed to update employee";
pub const MSG_DELETE_FAILED: &str = "Failed to delete employee";
pub const MSG_LOAD_FAILED: &str = "Failed to load employees";

/// Result of one list fetch
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchOutcome {
    /// Rows and metadata were written to the state
    Applied,
    /// A newer fetch was issued meanwhile; the response was dropped
    Stale,
    /// The request failed and an error notification was shown
    Failed,
}

/// Result of a submitted mutation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MutationOutcome {
    /// Saved; dialog closed, success shown, list refreshed
    Succeeded,
    /// Rejected by the server or transport; dialog left open, error shown
    Failed,
    /// No matching dialog was open, nothing sent
    Ignored,
}

struct Inner {
    state: ListViewState,
    generation: u64,
    notifier: Notifier,
}

pub struct EmployeeListView<A> {
    api: A,
    session: Session,
    page_size: u32,
    inner: Mutex<Inner>,
}

impl<A: EmployeeApi> EmployeeListView<A> {
    pub fn new(api: A, session: Session, config: &ClientConfig) -> Self {
        Self {
            api,
            session,
            page_size: config.page_size,
            inner: Mutex::new(Inner {
                state: ListViewState::default(),
                generation: 0,
                notifier: Notifier::default(),
            }),
        }
    }

    pub fn api(&self) -> &A {
        &self.api
    }

    pub fn page_size(&self) -> u32 {
        self.page_size
    }

    pub fn snapshot(&self) -> ListViewState {
        self.inner.lock().state.clone()
    }

    pub fn notification(&self) -> Option<Notification> {
        self.inner.lock().notifier.current().cloned()
    }

    pub fn dismiss_notification(&self) {
        self.inner.lock().notifier.dismiss();
    }

    pub fn empty_state(&self) -> Option<EmptyState> {
        self.inner.lock().state.empty_state()
    }

    /// Initial fetch
    pub async fn load(&self) -> FetchOutcome {
        self.fetch().await
    }

    // ========== Filters and paging ==========

    /// Change the search term; resets to page 1. Same term is a no-op.
    pub async fn set_search(&self, term: impl Into<String>) -> Option<FetchOutcome> {
        let term = term.into();
        {
            let mut inner = self.inner.lock();
            if inner.state.search_term == term {
                return None;
            }
            inner.state.search_term = term;
            inner.state.current_page = 1;
        }
        Some(self.fetch().await)
    }

    /// Change the department filter; resets to page 1. Same value is a no-op.
    pub async fn set_department(&self, filter: DepartmentFilter) -> Option<FetchOutcome> {
        {
            let mut inner = self.inner.lock();
            if inner.state.department_filter == filter {
                return None;
            }
            inner.state.department_filter = filter;
            inner.state.current_page = 1;
        }
        Some(self.fetch().await)
    }

    /// Jump to `page`, clamped to the known page range
    pub async fn go_to_page(&self, page: u32) -> Option<FetchOutcome> {
        {
            let mut inner = self.inner.lock();
            let page = page.clamp(1, inner.state.last_page());
            if page == inner.state.current_page {
                return None;
            }
            inner.state.current_page = page;
        }
        Some(self.fetch().await)
    }

    pub async fn next_page(&self) -> Option<FetchOutcome> {
        let (current, total) = {
            let inner = self.inner.lock();
            (inner.state.current_page, inner.state.total_pages)
        };
        if !can_go_next(current, total) {
            return None;
        }
        self.go_to_page(current + 1).await
    }

    pub async fn previous_page(&self) -> Option<FetchOutcome> {
        let current = self.inner.lock().state.current_page;
        if !can_go_previous(current) {
            return None;
        }
        self.go_to_page(current - 1).await
    }

    // ========== Dialogs ==========

    pub fn open_add(&self) {
        self.inner.lock().state.modal = Modal::Adding;
    }

    pub fn open_edit(&self, employee: Employee) {
        self.inner.lock().state.modal = Modal::Editing(employee);
    }

    pub fn request_delete(&self, employee: Employee) {
        self.inner.lock().state.modal = Modal::ConfirmingDelete(employee);
    }

    /// Close any dialog without sending anything
    pub fn cancel(&self) {
        self.inner.lock().state.modal = Modal::Closed;
    }

    // ========== Mutations ==========

    /// Validate and create; the add dialog closes only on success
    pub async fn submit_create(&self, form: &EmployeeForm) -> Result<MutationOutcome, FormErrors> {
        if self.inner.lock().state.modal != Modal::Adding {
            return Ok(MutationOutcome::Ignored);
        }
        let payload = form.to_create()?;

        match self.api.create_employee(&self.session, &payload).await {
            Ok(employee) => {
                tracing::debug!(id = %employee.id, "Employee created");
                self.finish_mutation(MSG_ADDED, &Modal::Adding).await;
                Ok(MutationOutcome::Succeeded)
            }
            Err(e) => {
                tracing::warn!(error = %e, "Create employee failed");
                self.inner.lock().notifier.error(e.message_or(MSG_ADD_FAILED));
                Ok(MutationOutcome::Failed)
            }
        }
    }

    /// Validate and update the employee open in the edit dialog
    pub async fn submit_update(&self, form: &EmployeeForm) -> Result<MutationOutcome, FormErrors> {
        let started = self.inner.lock().state.modal.clone();
        let id = match &started {
            Modal::Editing(employee) => employee.id.clone(),
            _ => return Ok(MutationOutcome::Ignored),
        };
        let payload = form.to_update()?;

        match self.api.update_employee(&self.session, &id, &payload).await {
            Ok(_) => {
                tracing::debug!(id = %id, "Employee updated");
                self.finish_mutation(MSG_UPDATED, &started).await;
                Ok(MutationOutcome::Succeeded)
            }
            Err(e) => {
                tracing::warn!(id = %id, error = %e, "Update employee failed");
                self.inner.lock().notifier.error(e.message_or(MSG_UPDATE_FAILED));
                Ok(MutationOutcome::Failed)
            }
        }
    }

    /// Delete the employee awaiting confirmation
    pub async fn confirm_delete(&self) -> MutationOutcome {
        let started = self.inner.lock().state.modal.clone();
        let id = match &started {
            Modal::ConfirmingDelete(employee) => employee.id.clone(),
            _ => return MutationOutcome::Ignored,
        };

        match self.api.delete_employee(&self.session, &id).await {
            Ok(()) => {
                tracing::debug!(id = %id, "Employee deleted");
                self.finish_mutation(MSG_DELETED, &started).await;
                MutationOutcome::Succeeded
            }
            Err(e) => {
                tracing::warn!(id = %id, error = %e, "Delete employee failed");
                self.inner.lock().notifier.error(e.message_or(MSG_DELETE_FAILED));
                MutationOutcome::Failed
            }
        }
    }

    /// Close the dialog that issued the mutation; one opened or cancelled
    /// while the request was in flight is left as it is
    async fn finish_mutation(&self, message: &str, started: &Modal) {
        {
            let mut inner = self.inner.lock();
            if inner.state.modal == *started {
                inner.state.modal = Modal::Closed;
            }
            inner.notifier.success(message);
        }
        self.refresh_after_mutation().await;
    }

    /// Re-fetch the current page and filters; if the page no longer exists
    /// (last row on the last page deleted), move to the new last page
    async fn refresh_after_mutation(&self) {
        if self.fetch().await != FetchOutcome::Applied {
            return;
        }

        let last_page = {
            let mut inner = self.inner.lock();
            let total_pages = inner.state.total_pages;
            if total_pages == 0 || inner.state.current_page <= total_pages {
                return;
            }
            inner.state.current_page = total_pages;
            total_pages
        };
        tracing::debug!(page = last_page, "Current page emptied, moving to last page");
        self.fetch().await;
    }

    // ========== Fetching ==========

    async fn fetch(&self) -> FetchOutcome {
        let (ticket, query) = {
            let mut inner = self.inner.lock();
            inner.generation += 1;
            inner.state.is_loading = true;
            (inner.generation, inner.state.query(self.page_size))
        };
        tracing::debug!(ticket, page = query.page, "Fetching employees");

        let result = self.api.list_employees(&self.session, &query).await;

        let mut inner = self.inner.lock();
        if inner.generation != ticket {
            tracing::debug!(ticket, latest = inner.generation, "Discarding stale response");
            return FetchOutcome::Stale;
        }

        inner.state.is_loading = false;
        match result {
            Ok(page) => {
                tracing::debug!(ticket, total = page.meta.total, "Applying employee page");
                inner.state.employees = page.data;
                inner.state.total_pages = page.meta.total_pages;
                inner.state.total_items = page.meta.total;
                FetchOutcome::Applied
            }
            Err(e) => {
                tracing::warn!(error = %e, "Failed to load employees");
                inner.notifier.error(e.message_or(MSG_LOAD_FAILED));
                FetchOutcome::Failed
            }
        }
    }
}
