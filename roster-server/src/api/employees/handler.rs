//! Employee API Handlers

use axum::{
    Extension, Json,
    extract::{Path, State},
};
use http::StatusCode;

use crate::api::extract::{ListQuery, ValidatedJson};
use crate::auth::CurrentUser;
use crate::core::ServerState;
use crate::db::repository::employee as repo;
use crate::{AppError, AppResult};
use shared::models::{Employee, EmployeeCreate, EmployeeUpdate};
use shared::query::Paginated;

/// List employees matching the query, newest first
pub async fn list(
    State(state): State<ServerState>,
    ListQuery(query): ListQuery,
) -> AppResult<Json<Paginated<Employee>>> {
    let page = repo::find_page(state.pool(), &query).await?;
    Ok(Json(page))
}

pub async fn get_by_id(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<Employee>> {
    let employee = repo::find_by_id(state.pool(), &id)
        .await?
        .ok_or_else(|| AppError::employee_not_found(&id))?;
    Ok(Json(employee))
}

pub async fn create(
    State(state): State<ServerState>,
    Extension(user): Extension<CurrentUser>,
    ValidatedJson(payload): ValidatedJson<EmployeeCreate>,
) -> AppResult<(StatusCode, Json<Employee>)> {
    let employee = repo::create(state.pool(), payload).await?;
    tracing::info!(actor = %user.email, id = %employee.id, "Employee created");
    Ok((StatusCode::CREATED, Json(employee)))
}

/// Apply a partial update; absent fields keep their stored value
pub async fn update(
    State(state): State<ServerState>,
    Extension(user): Extension<CurrentUser>,
    Path(id): Path<String>,
    ValidatedJson(payload): ValidatedJson<EmployeeUpdate>,
) -> AppResult<Json<Employee>> {
    let employee = repo::update(state.pool(), &id, payload).await?;
    tracing::info!(actor = %user.email, id = %employee.id, "Employee updated");
    Ok(Json(employee))
}

pub async fn delete(
    State(state): State<ServerState>,
    Extension(user): Extension<CurrentUser>,
    Path(id): Path<String>,
) -> AppResult<StatusCode> {
    repo::delete(state.pool(), &id).await?;
    tracing::info!(actor = %user.email, id = %id, "Employee deleted");
    Ok(StatusCode::NO_CONTENT)
}
