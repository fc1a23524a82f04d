//! HTTP client for the roster REST API

use async_trait::async_trait;
use reqwest::{Client, RequestBuilder, Response, StatusCode, Url};
use serde::de::DeserializeOwned;
use shared::client::{LoginRequest, LoginResponse};
use shared::error::{ApiResponse, ErrorCode};
use shared::models::{Employee, EmployeeCreate, EmployeeUpdate};
use shared::query::{EmployeeQuery, Paginated};

use crate::{ClientConfig, ClientError, ClientResult, EmployeeApi, Session};

/// HTTP client for making requests to roster-server
#[derive(Debug, Clone)]
pub struct HttpClient {
    client: Client,
    base_url: String,
}

impl HttpClient {
    /// Create a new HTTP client from configuration
    pub fn new(config: &ClientConfig) -> ClientResult<Self> {
        let client = Client::builder().timeout(config.timeout).build()?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// `/employees/{id}` with the id percent-encoded as a single path segment
    fn employee_url(&self, id: &str) -> ClientResult<Url> {
        let mut url = Url::parse(&self.url("/employees"))
            .map_err(|e| ClientError::InvalidUrl(e.to_string()))?;
        url.path_segments_mut()
            .map_err(|_| ClientError::InvalidUrl(self.base_url.clone()))?
            .push(id);
        Ok(url)
    }

    fn authorize(request: RequestBuilder, session: &Session) -> RequestBuilder {
        match session.bearer() {
            Some(auth) => request.header(reqwest::header::AUTHORIZATION, auth),
            None => request,
        }
    }

    async fn send<T: DeserializeOwned>(
        &self,
        request: RequestBuilder,
        session: &Session,
    ) -> ClientResult<T> {
        let response = Self::authorize(request, session).send().await?;
        Self::handle_response(response).await
    }

    async fn send_no_content(&self, request: RequestBuilder, session: &Session) -> ClientResult<()> {
        let response = Self::authorize(request, session).send().await?;
        if !response.status().is_success() {
            return Err(Self::error_from(response).await);
        }
        Ok(())
    }

    /// Handle the HTTP response
    async fn handle_response<T: DeserializeOwned>(response: Response) -> ClientResult<T> {
        if !response.status().is_success() {
            return Err(Self::error_from(response).await);
        }

        let bytes = response.bytes().await?;
        serde_json::from_slice(&bytes).map_err(|e| ClientError::InvalidResponse(e.to_string()))
    }

    /// Build an `Api` error from a failing response
    ///
    /// Non-JSON bodies and bodies without a message fall back to
    /// "Request failed with status N".
    async fn error_from(response: Response) -> ClientError {
        let status = response.status();
        let body = response.text().await.unwrap_or_default();
        let parsed = serde_json::from_str::<ApiResponse<serde_json::Value>>(&body).ok();

        let code = parsed
            .as_ref()
            .and_then(|r| r.code)
            .and_then(|c| ErrorCode::try_from(c).ok());
        let message = parsed
            .map(|r| r.message)
            .filter(|m| !m.is_empty())
            .unwrap_or_else(|| format!("Request failed with status {}", status.as_u16()));

        if status == StatusCode::UNAUTHORIZED {
            tracing::warn!(%message, "Request rejected: not authenticated");
        }

        ClientError::Api {
            status: status.as_u16(),
            code,
            message,
        }
    }

    // ========== Auth API ==========

    /// Exchange the admin credential for a session
    pub async fn login(&self, email: &str, password: &str) -> ClientResult<Session> {
        let request = LoginRequest {
            email: email.to_string(),
            password: password.to_string(),
        };

        let response: LoginResponse = self
            .send(
                self.client.post(self.url("/auth/login")).json(&request),
                &Session::anonymous(),
            )
            .await?;

        Ok(Session::with_token(response.access_token))
    }
}

#[async_trait]
impl EmployeeApi for HttpClient {
    async fn list_employees(
        &self,
        session: &Session,
        query: &EmployeeQuery,
    ) -> ClientResult<Paginated<Employee>> {
        let request = self
            .client
            .get(self.url("/employees"))
            .query(&query.to_params());
        self.send(request, session).await
    }

    async fn get_employee(&self, session: &Session, id: &str) -> ClientResult<Employee> {
        let request = self.client.get(self.employee_url(id)?);
        self.send(request, session).await
    }

    async fn create_employee(
        &self,
        session: &Session,
        data: &EmployeeCreate,
    ) -> ClientResult<Employee> {
        let request = self.client.post(self.url("/employees")).json(data);
        self.send(request, session).await
    }

    async fn update_employee(
        &self,
        session: &Session,
        id: &str,
        data: &EmployeeUpdate,
    ) -> ClientResult<Employee> {
        let request = self
            .client
            .patch(self.employee_url(id)?)
            .json(data);
        self.send(request, session).await
    }

    async fn delete_employee(&self, session: &Session, id: &str) -> ClientResult<()> {
        let request = self.client.delete(self.employee_url(id)?);
        self.send_no_content(request, session).await
    }
}
