//! Service client for the Statefold platform.
//!
//! This module defines the `FunctionServiceClient` trait and provides an
//! HTTP implementation that talks to the hosted deploy/write/state REST
//! APIs with bearer-token authentication.

use std::sync::Arc;

use async_trait::async_trait;
use reqwest::StatusCode;
use serde::Deserialize;
use serde_json::Value;
use tracing::debug;

use crate::config::ClientConfig;
use crate::error::{Error, Result};
use crate::function::{DeployRequest, DeployResponse, WriteRequest, WriteResponse};

/// Trait for communicating with the Statefold service.
///
/// This trait abstracts the communication layer, allowing for different
/// implementations (e.g., HTTP client, mock client for testing).
#[async_trait]
pub trait FunctionServiceClient: Send + Sync {
    /// Registers handler source and initial state with the service.
    ///
    /// # Returns
    ///
    /// The opaque deployment identifier assigned by the service.
    async fn deploy(&self, request: DeployRequest) -> Result<DeployResponse>;

    /// Submits a batch of operation records against a deployment.
    ///
    /// # Arguments
    ///
    /// * `function_id` - The deployment identifier returned by `deploy`
    /// * `inputs` - The serialized operation records, applied in order
    async fn write(&self, function_id: &str, inputs: Vec<Value>) -> Result<WriteResponse>;

    /// Fetches the current state snapshot of a deployment.
    async fn read_state(&self, function_id: &str) -> Result<Value>;
}

/// Type alias for a shared FunctionServiceClient.
pub type SharedFunctionServiceClient = Arc<dyn FunctionServiceClient>;

/// HTTP implementation of the FunctionServiceClient.
///
/// Authenticates every request with the configured API token as a bearer
/// credential. Deployment identifiers are URL-encoded into request paths.
pub struct HttpFunctionServiceClient {
    /// HTTP client for making requests
    http_client: reqwest::Client,
    /// Configuration for the client
    config: ClientConfig,
    /// Bearer credential, validated at construction
    token: String,
}

impl HttpFunctionServiceClient {
    /// Creates a new HttpFunctionServiceClient.
    ///
    /// Fails with a Config error when the API token is not set.
    pub fn new(config: ClientConfig) -> Result<Self> {
        let token = config.require_token()?.to_string();
        Ok(Self {
            http_client: reqwest::Client::new(),
            config,
            token,
        })
    }

    fn base_url(&self) -> &str {
        self.config.endpoint.trim_end_matches('/')
    }

    /// Returns the URL for a function-scoped API path.
    fn function_url(&self, function_id: &str, suffix: &str) -> String {
        let encoded = urlencoding::encode(function_id);
        format!("{}/v1/functions/{}{}", self.base_url(), encoded, suffix)
    }

    async fn post_json(
        &self,
        uri: &str,
        body: Vec<u8>,
        function_id: Option<&str>,
    ) -> Result<Vec<u8>> {
        let response = self
            .http_client
            .post(uri)
            .header("Content-Type", "application/json")
            .bearer_auth(&self.token)
            .body(body)
            .send()
            .await?;
        Self::collect_response(response, function_id).await
    }

    async fn collect_response(
        response: reqwest::Response,
        function_id: Option<&str>,
    ) -> Result<Vec<u8>> {
        let status = response.status();
        let body = response.bytes().await?;
        if status.is_success() {
            return Ok(body.to_vec());
        }
        Err(error_for_status(status, &body, function_id))
    }
}

/// Error body shape returned by the service on failures.
#[derive(Debug, Default, Deserialize)]
struct ApiErrorBody {
    #[serde(rename = "code", default)]
    code: Option<String>,
    #[serde(rename = "message", default)]
    message: Option<String>,
    #[serde(rename = "retryAfterMs", default)]
    retry_after_ms: Option<u64>,
}

/// Maps a non-success HTTP response to the SDK error taxonomy.
///
/// 404 means the addressed deployment does not exist, 429 is throttling,
/// and server errors are retriable. Everything else is a terminal
/// service rejection.
fn error_for_status(status: StatusCode, body: &[u8], function_id: Option<&str>) -> Error {
    let detail: ApiErrorBody = serde_json::from_slice(body).unwrap_or_default();
    let message = detail
        .message
        .unwrap_or_else(|| String::from_utf8_lossy(body).into_owned());

    if status == StatusCode::NOT_FOUND {
        return Error::NotFound {
            message,
            function_id: function_id.map(str::to_string),
        };
    }

    if status == StatusCode::TOO_MANY_REQUESTS {
        return Error::Throttling {
            message,
            retry_after_ms: detail.retry_after_ms,
        };
    }

    Error::Api {
        status: status.as_u16(),
        code: detail.code,
        message,
        is_retriable: status.is_server_error(),
    }
}

#[async_trait]
impl FunctionServiceClient for HttpFunctionServiceClient {
    async fn deploy(&self, request: DeployRequest) -> Result<DeployResponse> {
        let body = serde_json::to_vec(&request)?;
        let uri = format!("{}/v1/functions", self.base_url());

        debug!(
            function_type = %request.function_type,
            body_bytes = body.len(),
            "registering handler source"
        );
        let response_body = self.post_json(&uri, body, None).await?;

        let response: DeployResponse = serde_json::from_slice(&response_body)?;
        debug!(function_id = %response.id, "handler source registered");
        Ok(response)
    }

    async fn write(&self, function_id: &str, inputs: Vec<Value>) -> Result<WriteResponse> {
        let request = WriteRequest::new(inputs);
        let body = serde_json::to_vec(&request)?;
        let uri = self.function_url(function_id, "/write");

        debug!(%function_id, inputs = request.inputs.len(), "submitting write batch");
        let response_body = self.post_json(&uri, body, Some(function_id)).await?;

        Ok(serde_json::from_slice(&response_body)?)
    }

    async fn read_state(&self, function_id: &str) -> Result<Value> {
        let uri = self.function_url(function_id, "/state");

        debug!(%function_id, "fetching state snapshot");
        let response = self
            .http_client
            .get(&uri)
            .bearer_auth(&self.token)
            .send()
            .await?;
        let response_body = Self::collect_response(response, Some(function_id)).await?;

        Ok(serde_json::from_slice(&response_body)?)
    }
}
