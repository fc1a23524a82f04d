//! Demo employee data

use shared::filter::fold;
use shared::models::Department;
use shared::util::{new_id, now_millis};
use sqlx::SqlitePool;

/// `(first_name, last_name, department, phone)`; email is `<first>@company.com`
pub const DEMO_EMPLOYEES: [(&str, &str, Department, Option<&str>); 24] = [
    ("Alice", "Chen", Department::Engineering, Some("+1-555-0101")),
    ("Bob", "Smith", Department::Sales, Some("+1-555-0102")),
    ("Carol", "Wu", Department::Design, Some("+1-555-0103")),
    ("David", "Park", Department::Engineering, Some("+1-555-0104")),
    ("Emma", "Jones", Department::Hr, None),
    ("Frank", "Martinez", Department::Marketing, Some("+1-555-0106")),
    ("Grace", "Lee", Department::Finance, Some("+1-555-0107")),
    ("Henry", "Taylor", Department::Engineering, Some("+1-555-0108")),
    ("Iris", "Anderson", Department::Sales, None),
    ("Jack", "Wilson", Department::Design, Some("+1-555-0110")),
    ("Karen", "Brown", Department::Engineering, Some("+1-555-0111")),
    ("Leo", "Garcia", Department::Marketing, None),
    ("Maya", "Rodriguez", Department::Hr, Some("+1-555-0113")),
    ("Nathan", "Kim", Department::Finance, Some("+1-555-0114")),
    ("Olivia", "Nguyen", Department::Engineering, None),
    ("Peter", "Johnson", Department::Sales, Some("+1-555-0116")),
    ("Quinn", "Davis", Department::Design, Some("+1-555-0117")),
    ("Rachel", "Miller", Department::Marketing, None),
    ("Sam", "White", Department::Engineering, Some("+1-555-0119")),
    ("Tina", "Lopez", Department::Hr, Some("+1-555-0120")),
    ("Uma", "Patel", Department::Finance, None),
    ("Victor", "Chang", Department::Sales, Some("+1-555-0122")),
    ("Wendy", "Thompson", Department::Engineering, Some("+1-555-0123")),
    ("Xavier", "Harris", Department::Design, None),
];

pub fn demo_email(first_name: &str) -> String {
    format!("{}@company.com", first_name.to_lowercase())
}

/// Upsert the demo employees by email, returning how many were written
///
/// Existing rows keep their id and creation time.
pub async fn seed_demo_employees(pool: &SqlitePool) -> Result<usize, sqlx::Error> {
    let mut tx = pool.begin().await?;

    for (first_name, last_name, department, phone) in DEMO_EMPLOYEES {
        let email = demo_email(first_name);
        let now = now_millis();

        sqlx::query(
            "INSERT INTO employee (id, first_name, last_name, email, department, phone, first_name_key, last_name_key, email_key, created_at, updated_at) \
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?10) \
             ON CONFLICT(email) DO UPDATE SET first_name = excluded.first_name, last_name = excluded.last_name, department = excluded.department, phone = excluded.phone, first_name_key = excluded.first_name_key, last_name_key = excluded.last_name_key, updated_at = excluded.updated_at",
        )
        .bind(new_id())
        .bind(first_name)
        .bind(last_name)
        .bind(&email)
        .bind(department.as_str())
        .bind(phone)
        .bind(fold(first_name))
        .bind(fold(last_name))
        .bind(fold(&email))
        .bind(now)
        .execute(&mut *tx)
        .await?;
    }

    tx.commit().await?;
    tracing::debug!(count = DEMO_EMPLOYEES.len(), "Demo employees upserted");
    Ok(DEMO_EMPLOYEES.len())
}
