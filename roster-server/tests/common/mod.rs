//! Shared helpers for the API integration tests
#![allow(dead_code)]

use axum::Router;
use axum::body::{Body, to_bytes};
use http::{Method, Request, StatusCode, header};
use roster_server::db::{DbService, IN_MEMORY, seed};
use roster_server::{Config, ServerState, build_app};
use serde_json::Value;
use tower::ServiceExt;

pub const ADMIN_EMAIL: &str = "admin@demo.com";
pub const ADMIN_PASSWORD: &str = "admin123";

/// Fresh state over a private in-memory database
pub async fn setup() -> ServerState {
    let db = DbService::new(IN_MEMORY).await.unwrap();
    ServerState::new(Config::in_memory(), db)
}

/// State with the 24 demo employees loaded
pub async fn setup_seeded() -> ServerState {
    let state = setup().await;
    seed::seed_demo_employees(state.pool()).await.unwrap();
    state
}

pub fn token(state: &ServerState) -> String {
    state.get_jwt_service().generate_token(ADMIN_EMAIL).unwrap()
}

/// In-process client for the full router
pub struct TestApp {
    router: Router,
    token: String,
}

impl TestApp {
    pub fn new(state: ServerState) -> Self {
        let token = token(&state);
        Self {
            router: build_app(state),
            token,
        }
    }

    pub async fn request(
        &self,
        method: Method,
        uri: &str,
        bearer: Option<&str>,
        body: Option<Value>,
    ) -> (StatusCode, Value) {
        let mut builder = Request::builder().method(method).uri(uri);
        if let Some(token) = bearer {
            builder = builder.header(header::AUTHORIZATION, format!("Bearer {token}"));
        }
        let body = match body {
            Some(json) => {
                builder = builder.header(header::CONTENT_TYPE, "application/json");
                Body::from(json.to_string())
            }
            None => Body::empty(),
        };

        let response = self
            .router
            .clone()
            .oneshot(builder.body(body).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let json = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap()
        };
        (status, json)
    }

    /// Authenticated request with the admin token
    pub async fn send(&self, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
        self.request(method, uri, Some(&self.token), body).await
    }

    pub async fn get(&self, uri: &str) -> (StatusCode, Value) {
        self.send(Method::GET, uri, None).await
    }

    pub async fn post(&self, uri: &str, body: Value) -> (StatusCode, Value) {
        self.send(Method::POST, uri, Some(body)).await
    }

    pub async fn patch(&self, uri: &str, body: Value) -> (StatusCode, Value) {
        self.send(Method::PATCH, uri, Some(body)).await
    }

    pub async fn delete(&self, uri: &str) -> (StatusCode, Value) {
        self.send(Method::DELETE, uri, None).await
    }

    /// `meta.total` of an unfiltered list
    pub async fn total(&self) -> u64 {
        let (_, body) = self.get("/employees").await;
        body["meta"]["total"].as_u64().unwrap()
    }

    /// Id of the seeded employee with this first name
    pub async fn id_of(&self, first_name: &str) -> String {
        let (_, body) = self
            .get(&format!("/employees?search={}&limit=100", first_name.to_lowercase()))
            .await;
        body["data"]
            .as_array()
            .unwrap()
            .iter()
            .find(|e| e["firstName"] == first_name)
            .map(|e| e["id"].as_str().unwrap().to_string())
            .unwrap()
    }
}
