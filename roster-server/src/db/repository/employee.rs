//! Employee Repository

use super::{RepoError, RepoResult};
use crate::db::query_builder::QueryBuilder;
use shared::filter::{EmployeeFilter, fold};
use shared::models::{Department, Employee, EmployeeCreate, EmployeeUpdate};
use shared::query::{EmployeeQuery, PageMeta, Paginated};
use shared::util::{from_millis, new_id, now_millis};
use sqlx::SqlitePool;

const EMPLOYEE_COLUMNS: &str =
    "id, first_name, last_name, email, department, phone, created_at, updated_at";

/// Folded copies of the searchable fields, same order as
/// [`shared::filter::search_fields`]
const SEARCH_KEY_COLUMNS: [&str; 3] = ["first_name_key", "last_name_key", "email_key"];

/// Newest first; `seq` makes the order total
const LIST_ORDER: &str = "ORDER BY created_at DESC, seq DESC";

#[derive(Debug, sqlx::FromRow)]
struct EmployeeRow {
    id: String,
    first_name: String,
    last_name: String,
    email: String,
    department: String,
    phone: Option<String>,
    created_at: i64,
    updated_at: i64,
}

impl TryFrom<EmployeeRow> for Employee {
    type Error = RepoError;

    fn try_from(row: EmployeeRow) -> RepoResult<Self> {
        let department = row
            .department
            .parse::<Department>()
            .map_err(|e| RepoError::Database(e.to_string()))?;

        Ok(Employee {
            id: row.id,
            first_name: row.first_name,
            last_name: row.last_name,
            email: row.email,
            department,
            phone: row.phone,
            created_at: from_millis(row.created_at),
            updated_at: from_millis(row.updated_at),
        })
    }
}

/// Translate the shared filter into WHERE conditions
fn filter_conditions(filter: &EmployeeFilter) -> QueryBuilder {
    let mut builder = QueryBuilder::new();
    if let Some(term) = filter.search_key() {
        builder.add_search_condition(&SEARCH_KEY_COLUMNS, &term);
    }
    if let Some(department) = filter.department {
        builder
            .add_condition("department = ?")
            .bind_text(department.as_str());
    }
    builder
}

/// Unique violations on a write carrying `email` become `Duplicate(email)`
fn map_write_error(err: sqlx::Error, email: Option<&str>) -> RepoError {
    match (&err, email) {
        (sqlx::Error::Database(db), Some(email)) if db.is_unique_violation() => {
            RepoError::Duplicate(email.to_string())
        }
        _ => err.into(),
    }
}

/// One page of employees matching `query.filter`, plus metadata
///
/// Count and page are read in one transaction so both describe the same
/// snapshot.
pub async fn find_page(pool: &SqlitePool, query: &EmployeeQuery) -> RepoResult<Paginated<Employee>> {
    let builder = filter_conditions(&query.filter);
    let where_clause = builder.build_where_clause();

    let count_sql = format!("SELECT COUNT(*) FROM employee{where_clause}");
    let page_sql =
        format!("SELECT {EMPLOYEE_COLUMNS} FROM employee{where_clause} {LIST_ORDER} LIMIT ? OFFSET ?");
    let offset = i64::try_from(query.offset()).unwrap_or(i64::MAX);

    let mut tx = pool.begin().await?;

    let total: i64 = builder
        .apply_bindings_scalar(sqlx::query_scalar(&count_sql))
        .fetch_one(&mut *tx)
        .await?;

    let rows: Vec<EmployeeRow> = builder
        .apply_bindings_as(sqlx::query_as(&page_sql))
        .bind(i64::from(query.limit))
        .bind(offset)
        .fetch_all(&mut *tx)
        .await?;

    tx.commit().await?;

    let data = rows
        .into_iter()
        .map(Employee::try_from)
        .collect::<RepoResult<Vec<_>>>()?;

    Ok(Paginated {
        data,
        meta: PageMeta::new(
            u64::try_from(total).unwrap_or_default(),
            query.page,
            query.limit,
        ),
    })
}

pub async fn find_by_id(pool: &SqlitePool, id: &str) -> RepoResult<Option<Employee>> {
    let sql = format!("SELECT {EMPLOYEE_COLUMNS} FROM employee WHERE id = ?");
    let row = sqlx::query_as::<_, EmployeeRow>(&sql)
        .bind(id)
        .fetch_optional(pool)
        .await?;
    row.map(Employee::try_from).transpose()
}

/// Total number of stored employees
pub async fn count(pool: &SqlitePool) -> RepoResult<u64> {
    let total: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM employee")
        .fetch_one(pool)
        .await?;
    Ok(u64::try_from(total).unwrap_or_default())
}

pub async fn create(pool: &SqlitePool, data: EmployeeCreate) -> RepoResult<Employee> {
    let now = now_millis();
    let id = new_id();

    sqlx::query(
        "INSERT INTO employee (id, first_name, last_name, email, department, phone, first_name_key, last_name_key, email_key, created_at, updated_at) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?10)",
    )
    .bind(&id)
    .bind(&data.first_name)
    .bind(&data.last_name)
    .bind(&data.email)
    .bind(data.department.as_str())
    .bind(&data.phone)
    .bind(fold(&data.first_name))
    .bind(fold(&data.last_name))
    .bind(fold(&data.email))
    .bind(now)
    .execute(pool)
    .await
    .map_err(|e| map_write_error(e, Some(&data.email)))?;

    let created_at = from_millis(now);
    Ok(Employee {
        id,
        first_name: data.first_name,
        last_name: data.last_name,
        email: data.email,
        department: data.department,
        phone: data.phone,
        created_at,
        updated_at: created_at,
    })
}

/// Apply a partial update in a single statement
///
/// An empty update returns the stored record untouched. A missing row,
/// including one deleted concurrently, is `NotFound`.
pub async fn update(pool: &SqlitePool, id: &str, data: EmployeeUpdate) -> RepoResult<Employee> {
    if data.is_empty() {
        return find_by_id(pool, id)
            .await?
            .ok_or_else(|| RepoError::NotFound(id.to_string()));
    }

    let (phone_set, phone) = match &data.phone {
        Some(phone) => (true, phone.clone()),
        None => (false, None),
    };

    let sql = format!(
        "UPDATE employee SET first_name = COALESCE(?1, first_name), last_name = COALESCE(?2, last_name), email = COALESCE(?3, email), department = COALESCE(?4, department), phone = CASE WHEN ?5 THEN ?6 ELSE phone END, first_name_key = COALESCE(?7, first_name_key), last_name_key = COALESCE(?8, last_name_key), email_key = COALESCE(?9, email_key), updated_at = ?10 WHERE id = ?11 RETURNING {EMPLOYEE_COLUMNS}"
    );

    let row = sqlx::query_as::<_, EmployeeRow>(&sql)
        .bind(&data.first_name)
        .bind(&data.last_name)
        .bind(&data.email)
        .bind(data.department.map(|d| d.as_str()))
        .bind(phone_set)
        .bind(phone)
        .bind(data.first_name.as_deref().map(fold))
        .bind(data.last_name.as_deref().map(fold))
        .bind(data.email.as_deref().map(fold))
        .bind(now_millis())
        .bind(id)
        .fetch_optional(pool)
        .await
        .map_err(|e| map_write_error(e, data.email.as_deref()))?;

    row.map(Employee::try_from)
        .transpose()?
        .ok_or_else(|| RepoError::NotFound(id.to_string()))
}

/// Permanently remove a record
pub async fn delete(pool: &SqlitePool, id: &str) -> RepoResult<()> {
    let rows = sqlx::query("DELETE FROM employee WHERE id = ?")
        .bind(id)
        .execute(pool)
        .await?;
    if rows.rows_affected() == 0 {
        return Err(RepoError::NotFound(id.to_string()));
    }
    Ok(())
}
