//! HTTP gateway for the upstream employee API
//!
//! Wraps every upstream call in one classification rule: 429 becomes
//! [`AppError::RateLimited`], 404 becomes [`AppError::NotFound`], and any
//! other non-success status, transport failure, or undecodable body
//! becomes [`AppError::Upstream`]. Nothing above this module inspects
//! status codes again.

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;

use shared::envelope::Envelope;
use shared::error::{AppError, AppResult, param};
use shared::models::{Employee, EmployeeCreate, EmployeeDelete};

use crate::GatewayConfig;

/// Canonical message for upstream failures that carry an HTTP status.
const UPSTREAM_ERROR_MESSAGE: &str =
    "Error occurred while processing employee details. Check your request or try again later.";

/// Canonical message for transport and decode failures.
const UNEXPECTED_ERROR_MESSAGE: &str =
    "An unexpected error occurred while processing the request.";

/// The four primitive employee operations the upstream offers
///
/// The aggregation service depends on this trait rather than on
/// [`UpstreamClient`] so tests can substitute a canned gateway.
#[async_trait]
pub trait EmployeeGateway: Send + Sync {
    /// Create an employee upstream; returns the stored record with its
    /// upstream-assigned id and email
    async fn create(&self, input: &EmployeeCreate) -> AppResult<Employee>;

    /// Fetch the full employee collection in one call
    async fn list_all(&self) -> AppResult<Vec<Employee>>;

    /// Fetch a single employee; only an upstream 404 maps to
    /// [`AppError::NotFound`], every other failure shape is upstream breakage
    async fn get_by_id(&self, id: &str) -> AppResult<Employee>;

    /// Delete by name (the upstream delete endpoint is name-keyed);
    /// succeeds only when the upstream confirms the deletion
    async fn delete_by_name(&self, name: &str) -> AppResult<bool>;
}

/// HTTP client for making requests to the upstream employee API
#[derive(Debug, Clone)]
pub struct UpstreamClient {
    client: Client,
    base_url: String,
}

impl UpstreamClient {
    /// Create a new upstream client from configuration
    pub fn new(config: &GatewayConfig) -> Self {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout))
            .build()
            .expect("Failed to build HTTP client");

        Self {
            client,
            base_url: config.base_url.clone(),
        }
    }

    fn url(&self, path: &str) -> String {
        let base = self.base_url.trim_end_matches('/');
        if path.is_empty() {
            base.to_string()
        } else {
            format!("{}/{}", base, path.trim_start_matches('/'))
        }
    }

    /// Send a request and decode the envelope, classifying every failure
    async fn send<T: DeserializeOwned>(
        &self,
        request: reqwest::RequestBuilder,
        ident: &str,
    ) -> AppResult<Envelope<T>> {
        let response = match request.send().await {
            Ok(response) => response,
            Err(err) => return Err(Self::classify_transport(&err, ident)),
        };
        Self::handle_response(response, ident).await
    }

    /// Handle the HTTP response
    async fn handle_response<T: DeserializeOwned>(
        response: reqwest::Response,
        ident: &str,
    ) -> AppResult<Envelope<T>> {
        let status = response.status();

        if !status.is_success() {
            return Err(Self::classify_status(status, ident));
        }

        response
            .json::<Envelope<T>>()
            .await
            .map_err(|err| Self::classify_transport(&err, ident))
    }

    /// Map a non-success upstream status to its failure kind. Total: every
    /// status lands in exactly one kind.
    fn classify_status(status: StatusCode, ident: &str) -> AppError {
        match status {
            StatusCode::TOO_MANY_REQUESTS => {
                tracing::warn!(param = ident, "upstream rate limit exceeded");
                AppError::rate_limited(ident)
            }
            StatusCode::NOT_FOUND => {
                tracing::warn!(param = ident, "employee not found upstream");
                AppError::not_found("Employee not found", ident)
            }
            other => {
                tracing::error!(status = %other, param = ident, "upstream request failed");
                AppError::upstream(UPSTREAM_ERROR_MESSAGE)
            }
        }
    }

    /// Map a transport or decode failure; the original cause goes to the
    /// log, never to the caller
    fn classify_transport(err: &reqwest::Error, ident: &str) -> AppError {
        tracing::error!(error = %err, param = ident, "upstream transport error");
        AppError::upstream(UNEXPECTED_ERROR_MESSAGE)
    }
}

#[async_trait]
impl EmployeeGateway for UpstreamClient {
    async fn create(&self, input: &EmployeeCreate) -> AppResult<Employee> {
        tracing::debug!(name = %input.name, "creating employee upstream");

        let envelope: Envelope<Employee> = self
            .send(self.client.post(self.url("")).json(input), param::NA)
            .await?;
        let employee = envelope
            .data
            .ok_or_else(|| AppError::upstream(UPSTREAM_ERROR_MESSAGE))?;

        tracing::info!(id = %employee.id, name = %employee.name, "employee created upstream");
        Ok(employee)
    }

    async fn list_all(&self) -> AppResult<Vec<Employee>> {
        let envelope: Envelope<Vec<Employee>> =
            self.send(self.client.get(self.url("")), param::NA).await?;
        let employees = envelope
            .data
            .ok_or_else(|| AppError::upstream(UPSTREAM_ERROR_MESSAGE))?;

        tracing::debug!(count = employees.len(), "fetched employee list");
        Ok(employees)
    }

    async fn get_by_id(&self, id: &str) -> AppResult<Employee> {
        tracing::debug!(id, "fetching employee by id");

        let envelope: Envelope<Employee> =
            self.send(self.client.get(self.url(id)), param::ID).await?;
        envelope
            .data
            .ok_or_else(|| AppError::upstream(UPSTREAM_ERROR_MESSAGE))
    }

    async fn delete_by_name(&self, name: &str) -> AppResult<bool> {
        tracing::debug!(name, "deleting employee by name");

        let input = EmployeeDelete {
            name: name.to_string(),
        };
        let envelope: Envelope<bool> = self
            .send(self.client.delete(self.url("")).json(&input), param::NAME)
            .await?;

        // Upstream reports data:false when nothing matched the name; only
        // an explicit true counts as a confirmed deletion.
        match envelope.data {
            Some(true) => {
                tracing::info!(name, "employee deleted upstream");
                Ok(true)
            }
            _ => Err(AppError::upstream(format!(
                "Failed to delete employee with name: {name}"
            ))),
        }
    }
}
