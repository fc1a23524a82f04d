//! In-memory employee directory
//!
//! Stand-in for the server when no backend is reachable, and a fixture for
//! tests. It filters with the same [`EmployeeFilter::matches`] predicate the
//! server's SQL is built from, orders newest first and reports errors with
//! the same status codes and messages.
//!
//! [`EmployeeFilter::matches`]: shared::filter::EmployeeFilter::matches

use async_trait::async_trait;
use chrono::Utc;
use parking_lot::Mutex;
use shared::error::AppError;
use shared::models::{Employee, EmployeeCreate, EmployeeUpdate};
use shared::query::{EmployeeQuery, PageMeta, Paginated};
use shared::util::new_id;
use validator::Validate;

use crate::{ClientResult, EmployeeApi, Session};

/// In-memory store; records are kept newest first
#[derive(Debug, Default)]
pub struct OfflineDirectory {
    records: Mutex<Vec<Employee>>,
}

impl OfflineDirectory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from `employees`, given in insertion order
    ///
    /// Later entries win ties on `created_at`, like rows inserted later on
    /// the server.
    pub fn with_employees(employees: Vec<Employee>) -> Self {
        let mut records = employees;
        records.reverse();
        records.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Self {
            records: Mutex::new(records),
        }
    }

    pub fn len(&self) -> usize {
        self.records.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.lock().is_empty()
    }

    /// Copy of all records, newest first
    pub fn snapshot(&self) -> Vec<Employee> {
        self.records.lock().clone()
    }

    fn email_taken(records: &[Employee], email: &str, except_id: Option<&str>) -> bool {
        records
            .iter()
            .any(|e| e.email == email && Some(e.id.as_str()) != except_id)
    }
}

#[async_trait]
impl EmployeeApi for OfflineDirectory {
    async fn list_employees(
        &self,
        _session: &Session,
        query: &EmployeeQuery,
    ) -> ClientResult<Paginated<Employee>> {
        let records = self.records.lock();
        let matching: Vec<&Employee> = records
            .iter()
            .filter(|e| query.filter.matches(e))
            .collect();

        let offset = usize::try_from(query.offset()).unwrap_or(usize::MAX);
        let data = matching
            .iter()
            .skip(offset)
            .take(query.limit as usize)
            .map(|e| (*e).clone())
            .collect();

        Ok(Paginated {
            data,
            meta: PageMeta::new(matching.len() as u64, query.page, query.limit),
        })
    }

    async fn get_employee(&self, _session: &Session, id: &str) -> ClientResult<Employee> {
        self.records
            .lock()
            .iter()
            .find(|e| e.id == id)
            .cloned()
            .ok_or_else(|| AppError::employee_not_found(id).into())
    }

    async fn create_employee(
        &self,
        _session: &Session,
        data: &EmployeeCreate,
    ) -> ClientResult<Employee> {
        data.validate().map_err(AppError::from)?;

        let mut records = self.records.lock();
        if Self::email_taken(&records, &data.email, None) {
            return Err(AppError::email_taken(&data.email).into());
        }

        let now = Utc::now();
        let employee = Employee {
            id: new_id(),
            first_name: data.first_name.clone(),
            last_name: data.last_name.clone(),
            email: data.email.clone(),
            department: data.department,
            phone: data.phone.clone(),
            created_at: now,
            updated_at: now,
        };
        records.insert(0, employee.clone());
        Ok(employee)
    }

    async fn update_employee(
        &self,
        _session: &Session,
        id: &str,
        data: &EmployeeUpdate,
    ) -> ClientResult<Employee> {
        data.validate().map_err(AppError::from)?;

        let mut records = self.records.lock();
        let index = records
            .iter()
            .position(|e| e.id == id)
            .ok_or_else(|| AppError::employee_not_found(id))?;

        if let Some(email) = &data.email
            && Self::email_taken(&records, email, Some(id))
        {
            return Err(AppError::email_taken(email).into());
        }

        let employee = &mut records[index];

        if !data.is_empty() {
            data.clone().apply_to(employee);
            employee.updated_at = Utc::now();
        }
        Ok(employee.clone())
    }

    async fn delete_employee(&self, _session: &Session, id: &str) -> ClientResult<()> {
        let mut records = self.records.lock();
        let before = records.len();
        records.retain(|e| e.id != id);
        if records.len() == before {
            return Err(AppError::employee_not_found(id).into());
        }
        Ok(())
    }
}
