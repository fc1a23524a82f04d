//! Employee endpoints driven through the full router

mod common;

use std::collections::HashSet;

use common::{TestApp, setup, setup_seeded};
use http::StatusCode;
use serde_json::{Value, json};

fn john_doe() -> Value {
    json!({
        "firstName": "John",
        "lastName": "Doe",
        "email": "john.doe@company.com",
        "department": "Engineering",
        "phone": "+1-555-9999"
    })
}

fn data(body: &Value) -> &Vec<Value> {
    body["data"].as_array().unwrap()
}

#[tokio::test]
async fn test_department_filter_with_paging() {
    let app = TestApp::new(setup_seeded().await);

    let (status, body) = app
        .get("/employees?department=Engineering&limit=5&page=1")
        .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(data(&body).len(), 5);
    assert!(data(&body).iter().all(|e| e["department"] == "Engineering"));
    assert_eq!(body["meta"]["total"], 7);
    assert_eq!(body["meta"]["totalPages"], 2);
    assert_eq!(body["meta"]["page"], 1);
    assert_eq!(body["meta"]["limit"], 5);
}

#[tokio::test]
async fn test_search_finds_single_match() {
    let app = TestApp::new(setup_seeded().await);

    let (status, body) = app.get("/employees?search=alice&limit=10&page=1").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(data(&body).len(), 1);
    assert_eq!(body["meta"]["total"], 1);
    assert_eq!(data(&body)[0]["lastName"], "Chen");
}

#[tokio::test]
async fn test_search_is_case_insensitive_across_fields() {
    let app = TestApp::new(setup_seeded().await);

    let (_, by_last_name) = app.get("/employees?search=CHEN").await;
    assert_eq!(by_last_name["meta"]["total"], 1);

    let (_, by_domain) = app.get("/employees?search=company.com").await;
    assert_eq!(by_domain["meta"]["total"], 24);

    let (_, combined) = app
        .get("/employees?search=company.com&department=Finance")
        .await;
    assert_eq!(combined["meta"]["total"], 3);
}

#[tokio::test]
async fn test_search_wildcards_are_literal() {
    let app = TestApp::new(setup_seeded().await);

    let (status, body) = app.get("/employees?search=%25").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["meta"]["total"], 0);
    assert_eq!(body["meta"]["totalPages"], 0);

    let (_, body) = app.get("/employees?search=a_i").await;
    assert_eq!(body["meta"]["total"], 0);
}

#[tokio::test]
async fn test_update_department_keeps_other_fields() {
    let app = TestApp::new(setup_seeded().await);
    let id = app.id_of("Bob").await;

    let (status, updated) = app
        .patch(&format!("/employees/{id}"), json!({ "department": "Marketing" }))
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(updated["department"], "Marketing");

    let (status, fetched) = app.get(&format!("/employees/{id}")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(fetched["department"], "Marketing");
    assert_eq!(fetched["firstName"], "Bob");
    assert_eq!(fetched["lastName"], "Smith");
    assert_eq!(fetched["email"], "bob@company.com");
    assert_eq!(fetched["phone"], "+1-555-0102");
}

#[tokio::test]
async fn test_pages_cover_every_match_exactly_once() {
    let app = TestApp::new(setup_seeded().await);

    for filter in ["", "department=Engineering&", "search=an&", "search=e&department=Sales&"] {
        let (_, first) = app.get(&format!("/employees?{filter}limit=3&page=1")).await;
        let total = first["meta"]["total"].as_u64().unwrap();
        let total_pages = first["meta"]["totalPages"].as_u64().unwrap();
        assert_eq!(total_pages, total.div_ceil(3), "{filter}");

        let mut seen = HashSet::new();
        for page in 1..=total_pages {
            let (_, body) = app
                .get(&format!("/employees?{filter}limit=3&page={page}"))
                .await;
            for employee in data(&body) {
                let id = employee["id"].as_str().unwrap().to_string();
                assert!(seen.insert(id), "duplicate on page {page} for {filter}");
            }
        }
        assert_eq!(seen.len() as u64, total, "{filter}");

        let (_, all) = app.get(&format!("/employees?{filter}limit=100")).await;
        let expected: HashSet<String> = data(&all)
            .iter()
            .map(|e| e["id"].as_str().unwrap().to_string())
            .collect();
        assert_eq!(seen, expected, "{filter}");
    }
}

#[tokio::test]
async fn test_page_past_the_end_is_empty() {
    let app = TestApp::new(setup_seeded().await);

    let (status, body) = app.get("/employees?page=9&limit=10").await;
    assert_eq!(status, StatusCode::OK);
    assert!(data(&body).is_empty());
    assert_eq!(body["meta"]["total"], 24);
    assert_eq!(body["meta"]["totalPages"], 3);
}

#[tokio::test]
async fn test_empty_directory_has_zero_pages() {
    let app = TestApp::new(setup().await);

    let (status, body) = app.get("/employees").await;
    assert_eq!(status, StatusCode::OK);
    assert!(data(&body).is_empty());
    assert_eq!(body["meta"]["total"], 0);
    assert_eq!(body["meta"]["totalPages"], 0);
}

#[tokio::test]
async fn test_newest_first() {
    let app = TestApp::new(setup_seeded().await);
    app.post("/employees", john_doe()).await;

    let (_, body) = app.get("/employees?limit=2").await;
    assert_eq!(data(&body)[0]["email"], "john.doe@company.com");
    assert_eq!(data(&body)[1]["firstName"], "Xavier");
}

#[tokio::test]
async fn test_create_then_fetch_round_trip() {
    let app = TestApp::new(setup().await);

    let (status, created) = app.post("/employees", john_doe()).await;
    assert_eq!(status, StatusCode::CREATED);
    let id = created["id"].as_str().unwrap();
    assert_eq!(created["createdAt"], created["updatedAt"]);

    let (status, fetched) = app.get(&format!("/employees/{id}")).await;
    assert_eq!(status, StatusCode::OK);
    for field in ["firstName", "lastName", "email", "department", "phone"] {
        assert_eq!(fetched[field], john_doe()[field], "{field}");
    }
}

#[tokio::test]
async fn test_create_without_phone_stores_null() {
    let app = TestApp::new(setup().await);
    let mut body = john_doe();
    body.as_object_mut().unwrap().remove("phone");

    let (status, created) = app.post("/employees", body).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(created["phone"], Value::Null);
}

#[tokio::test]
async fn test_duplicate_email_is_conflict() {
    let app = TestApp::new(setup().await);

    let (status, _) = app.post("/employees", john_doe()).await;
    assert_eq!(status, StatusCode::CREATED);

    let mut second = john_doe();
    second["firstName"] = json!("Johnny");
    let (status, body) = app.post("/employees", second).await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["code"], 8002);
    assert!(body["message"].as_str().unwrap().contains("john.doe@company.com"));

    assert_eq!(app.total().await, 1);
}

#[tokio::test]
async fn test_update_to_taken_email_is_conflict() {
    let app = TestApp::new(setup_seeded().await);
    let id = app.id_of("Bob").await;

    let (status, _) = app
        .patch(&format!("/employees/{id}"), json!({ "email": "alice@company.com" }))
        .await;
    assert_eq!(status, StatusCode::CONFLICT);

    let (_, bob) = app.get(&format!("/employees/{id}")).await;
    assert_eq!(bob["email"], "bob@company.com");
}

#[tokio::test]
async fn test_update_keeping_own_email_is_allowed() {
    let app = TestApp::new(setup_seeded().await);
    let id = app.id_of("Bob").await;

    let (status, body) = app
        .patch(
            &format!("/employees/{id}"),
            json!({ "email": "bob@company.com", "lastName": "Smythe" }),
        )
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["lastName"], "Smythe");
}

#[tokio::test]
async fn test_update_phone_null_clears_it() {
    let app = TestApp::new(setup_seeded().await);
    let id = app.id_of("Alice").await;

    let (status, body) = app
        .patch(&format!("/employees/{id}"), json!({ "phone": null }))
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["phone"], Value::Null);

    let (_, body) = app
        .patch(&format!("/employees/{id}"), json!({ "firstName": "Alicia" }))
        .await;
    assert_eq!(body["phone"], Value::Null);
    assert_eq!(body["firstName"], "Alicia");
}

#[tokio::test]
async fn test_empty_update_returns_current_record() {
    let app = TestApp::new(setup_seeded().await);
    let id = app.id_of("Carol").await;
    let (_, before) = app.get(&format!("/employees/{id}")).await;

    let (status, after) = app.patch(&format!("/employees/{id}"), json!({})).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(after, before);
}

#[tokio::test]
async fn test_update_missing_employee_is_not_found() {
    let app = TestApp::new(setup().await);

    let (status, body) = app
        .patch("/employees/missing", json!({ "firstName": "X" }))
        .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["message"], "Employee with ID missing not found");

    let (status, _) = app.patch("/employees/missing", json!({})).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_delete_then_delete_again() {
    let app = TestApp::new(setup_seeded().await);
    let id = app.id_of("Emma").await;

    let (status, body) = app.delete(&format!("/employees/{id}")).await;
    assert_eq!(status, StatusCode::NO_CONTENT);
    assert_eq!(body, Value::Null);
    assert_eq!(app.total().await, 23);

    let (status, body) = app.delete(&format!("/employees/{id}")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["code"], 8001);
    assert_eq!(app.total().await, 23);

    let (status, _) = app.get(&format!("/employees/{id}")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_create_validation_errors() {
    let app = TestApp::new(setup().await);

    let cases = [
        ("firstName", json!(""), "firstName"),
        ("email", json!("not-an-email"), "email"),
        ("department", json!("Legal"), "department"),
    ];
    for (field, value, mentioned) in cases {
        let mut body = john_doe();
        body[field] = value;
        let (status, error) = app.post("/employees", body).await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "{field}");
        assert_eq!(error["code"], 2, "{field}");
        assert!(
            error["message"].as_str().unwrap().contains(mentioned),
            "{field}: {}",
            error["message"]
        );
    }

    let mut missing = john_doe();
    missing.as_object_mut().unwrap().remove("lastName");
    let (status, _) = app.post("/employees", missing).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    assert_eq!(app.total().await, 0);
}

#[tokio::test]
async fn test_unknown_body_fields_are_rejected() {
    let app = TestApp::new(setup_seeded().await);

    let mut body = john_doe();
    body["salary"] = json!(100);
    let (status, _) = app.post("/employees", body).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let id = app.id_of("Bob").await;
    let (status, _) = app
        .patch(&format!("/employees/{id}"), json!({ "id": "other" }))
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_list_query_validation() {
    let app = TestApp::new(setup_seeded().await);

    for uri in [
        "/employees?page=0",
        "/employees?page=abc",
        "/employees?limit=0",
        "/employees?limit=101",
        "/employees?department=all",
        "/employees?sort=name",
    ] {
        let (status, body) = app.get(uri).await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "{uri}");
        assert_eq!(body["code"], 2, "{uri}");
    }

    let (_, body) = app.get("/employees?limit=101").await;
    assert_eq!(body["message"], "limit must not be greater than 100");
    let (status, _) = app.get("/employees?limit=100").await;
    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn test_empty_search_is_ignored() {
    let app = TestApp::new(setup_seeded().await);

    let (status, body) = app.get("/employees?search=").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["meta"]["total"], 24);
}
