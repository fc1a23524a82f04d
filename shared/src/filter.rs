//! Employee match predicate
//!
//! One definition of "does this employee match the list filter", used by
//! the server's SQL translation and by the client's offline directory.
//! The server stores [`fold`]ed copies of the searchable columns and looks
//! for the folded term with `instr`, which is the same test as
//! [`EmployeeFilter::matches`] performs in memory.

use crate::models::{Department, Employee};

/// Case folding applied to both the searchable fields and the search term
pub fn fold(value: &str) -> String {
    value.to_lowercase()
}

/// Search + department filter for the employee list
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EmployeeFilter {
    search: Option<String>,
    pub department: Option<Department>,
}

impl EmployeeFilter {
    /// An empty search string means "no search".
    pub fn new(search: Option<String>, department: Option<Department>) -> Self {
        Self {
            search: search.filter(|s| !s.is_empty()),
            department,
        }
    }

    /// Raw search term as entered
    pub fn search(&self) -> Option<&str> {
        self.search.as_deref()
    }

    /// Folded search term, ready to compare against folded fields
    pub fn search_key(&self) -> Option<String> {
        self.search.as_deref().map(fold)
    }

    /// True when either a search or a department restriction is active
    pub fn is_active(&self) -> bool {
        self.search.is_some() || self.department.is_some()
    }

    pub fn matches(&self, employee: &Employee) -> bool {
        if let Some(department) = self.department
            && employee.department != department
        {
            return false;
        }

        match self.search_key() {
            None => true,
            Some(term) => search_fields(employee)
                .iter()
                .any(|field| fold(field).contains(&term)),
        }
    }
}

/// Fields the search term is matched against, in column order
pub fn search_fields(employee: &Employee) -> [&str; 3] {
    [&employee.first_name, &employee.last_name, &employee.email]
}
