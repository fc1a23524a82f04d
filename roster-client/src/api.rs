//! Employee API abstraction
//!
//! Implemented by [`HttpClient`](crate::HttpClient) and
//! [`OfflineDirectory`](crate::OfflineDirectory). The list view is generic
//! over it.

use std::sync::Arc;

use async_trait::async_trait;
use shared::models::{Employee, EmployeeCreate, EmployeeUpdate};
use shared::query::{EmployeeQuery, Paginated};

use crate::{ClientResult, Session};

#[async_trait]
pub trait EmployeeApi: Send + Sync {
    async fn list_employees(
        &self,
        session: &Session,
        query: &EmployeeQuery,
    ) -> ClientResult<Paginated<Employee>>;

    async fn get_employee(&self, session: &Session, id: &str) -> ClientResult<Employee>;

    async fn create_employee(
        &self,
        session: &Session,
        data: &EmployeeCreate,
    ) -> ClientResult<Employee>;

    async fn update_employee(
        &self,
        session: &Session,
        id: &str,
        data: &EmployeeUpdate,
    ) -> ClientResult<Employee>;

    async fn delete_employee(&self, session: &Session, id: &str) -> ClientResult<()>;
}

#[async_trait]
impl<A: EmployeeApi + ?Sized> EmployeeApi for Arc<A> {
    async fn list_employees(
        &self,
        session: &Session,
        query: &EmployeeQuery,
    ) -> ClientResult<Paginated<Employee>> {
        (**self).list_employees(session, query).await
    }

    async fn get_employee(&self, session: &Session, id: &str) -> ClientResult<Employee> {
        (**self).get_employee(session, id).await
    }

    async fn create_employee(
        &self,
        session: &Session,
        data: &EmployeeCreate,
    ) -> ClientResult<Employee> {
        (**self).create_employee(session, data).await
    }

    async fn update_employee(
        &self,
        session: &Session,
        id: &str,
        data: &EmployeeUpdate,
    ) -> ClientResult<Employee> {
        (**self).update_employee(session, id, data).await
    }

    async fn delete_employee(&self, session: &Session, id: &str) -> ClientResult<()> {
        (**self).delete_employee(session, id).await
    }
}
