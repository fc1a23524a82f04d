//! List view state

use std::fmt;
use std::str::FromStr;

use shared::filter::EmployeeFilter;
use shared::models::{Department, Employee, UnknownDepartment};
use shared::query::EmployeeQuery;

/// Department dropdown value
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DepartmentFilter {
    #[default]
    All,
    Only(Department),
}

impl DepartmentFilter {
    pub fn department(self) -> Option<Department> {
        match self {
            DepartmentFilter::All => None,
            DepartmentFilter::Only(department) => Some(department),
        }
    }
}

impl From<Option<Department>> for DepartmentFilter {
    fn from(department: Option<Department>) -> Self {
        department.map_or(DepartmentFilter::All, DepartmentFilter::Only)
    }
}

/// `"all"` or an exact department name
impl FromStr for DepartmentFilter {
    type Err = UnknownDepartment;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == "all" {
            return Ok(DepartmentFilter::All);
        }
        s.parse().map(DepartmentFilter::Only)
    }
}

impl fmt::Display for DepartmentFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DepartmentFilter::All => f.write_str("all"),
            DepartmentFilter::Only(department) => department.fmt(f),
        }
    }
}

/// Which dialog is open
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Modal {
    #[default]
    Closed,
    Adding,
    Editing(Employee),
    ConfirmingDelete(Employee),
}

/// Why the table is empty
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EmptyState {
    /// Filters are active and nothing matches them
    NoMatches { search_term: Option<String> },
    /// The directory itself is empty
    NoEmployees,
}

impl fmt::Display for EmptyState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EmptyState::NoMatches {
                search_term: Some(term),
            } => write!(f, "No employees match \"{term}\"."),
            EmptyState::NoMatches { search_term: None } => {
                f.write_str("No employees match the current filters.")
            }
            EmptyState::NoEmployees => f.write_str("No employees found."),
        }
    }
}

/// Snapshot of everything the table renders
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListViewState {
    pub employees: Vec<Employee>,
    pub search_term: String,
    pub department_filter: DepartmentFilter,
    pub current_page: u32,
    pub total_pages: u32,
    pub total_items: u64,
    pub is_loading: bool,
    pub modal: Modal,
}

impl Default for ListViewState {
    fn default() -> Self {
        Self {
            employees: Vec::new(),
            search_term: String::new(),
            department_filter: DepartmentFilter::All,
            current_page: 1,
            total_pages: 1,
            total_items: 0,
            is_loading: true,
            modal: Modal::Closed,
        }
    }
}

impl ListViewState {
    pub fn filter(&self) -> EmployeeFilter {
        let search = (!self.search_term.is_empty()).then(|| self.search_term.clone());
        EmployeeFilter::new(search, self.department_filter.department())
    }

    /// List request for the current filters and page
    pub fn query(&self, page_size: u32) -> EmployeeQuery {
        EmployeeQuery::new(self.filter(), self.current_page, page_size)
    }

    pub fn is_filtering(&self) -> bool {
        self.filter().is_active()
    }

    /// Highest page the controls allow
    pub fn last_page(&self) -> u32 {
        self.total_pages.max(1)
    }

    /// Present only when a loaded result has no rows at all
    pub fn empty_state(&self) -> Option<EmptyState> {
        if self.is_loading || !self.employees.is_empty() || self.total_items > 0 {
            return None;
        }
        if self.is_filtering() {
            Some(EmptyState::NoMatches {
                search_term: (!self.search_term.is_empty()).then(|| self.search_term.clone()),
            })
        } else {
            Some(EmptyState::NoEmployees)
        }
    }
}
