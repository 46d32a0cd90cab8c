//! Mock implementation of FunctionServiceClient for testing.
//!
//! This module provides a mock service client that can be used for unit
//! testing client code without a running service.
//!
//! # Examples
//!
//! ```
//! use statefold_testkit::MockFunctionServiceClient;
//! use statefold_sdk::DeployResponse;
//!
//! // Mock with default responses
//! let client = MockFunctionServiceClient::new();
//!
//! // Mock with queued deploy responses
//! let client = MockFunctionServiceClient::new()
//!     .with_deploy_response(Ok(DeployResponse::new("fn-1")))
//!     .with_deploy_response(Ok(DeployResponse::new("fn-2")));
//! ```

use std::collections::VecDeque;
use std::sync::Mutex;

use async_trait::async_trait;
use serde_json::Value;

use statefold_sdk::{
    DeployRequest, DeployResponse, Error, FunctionServiceClient, Result, WriteResponse,
};

/// Record of a deploy call made to the mock client.
#[derive(Debug, Clone)]
pub struct DeployCall {
    /// The request passed to the deploy call
    pub request: DeployRequest,
}

/// Record of a write call made to the mock client.
#[derive(Debug, Clone)]
pub struct WriteCall {
    /// The function id the batch was addressed to
    pub function_id: String,
    /// The serialized operation records
    pub inputs: Vec<Value>,
}

/// Record of a read_state call made to the mock client.
#[derive(Debug, Clone)]
pub struct ReadCall {
    /// The function id that was read
    pub function_id: String,
}

/// Mock implementation of FunctionServiceClient for testing.
///
/// This mock client allows you to:
/// - Queue responses for deploy, write, and read_state calls
/// - Record all calls made for verification in tests
/// - Simulate error conditions
///
/// When no response is queued, a benign default is returned: a fixed
/// deployment id, a successful write with no state fragment, and an
/// empty-object state snapshot.
#[derive(Default)]
pub struct MockFunctionServiceClient {
    deploy_responses: Mutex<VecDeque<Result<DeployResponse>>>,
    write_responses: Mutex<VecDeque<Result<WriteResponse>>>,
    read_responses: Mutex<VecDeque<Result<Value>>>,
    deploy_calls: Mutex<Vec<DeployCall>>,
    write_calls: Mutex<Vec<WriteCall>>,
    read_calls: Mutex<Vec<ReadCall>>,
}

impl MockFunctionServiceClient {
    /// Creates a new mock client with default responses.
    pub fn new() -> Self {
        Self::default()
    }

    /// Queues a deploy response.
    pub fn with_deploy_response(self, response: Result<DeployResponse>) -> Self {
        self.deploy_responses.lock().unwrap().push_back(response);
        self
    }

    /// Queues a write response.
    pub fn with_write_response(self, response: Result<WriteResponse>) -> Self {
        self.write_responses.lock().unwrap().push_back(response);
        self
    }

    /// Queues a read_state response.
    pub fn with_read_response(self, response: Result<Value>) -> Self {
        self.read_responses.lock().unwrap().push_back(response);
        self
    }

    /// Returns the recorded deploy calls.
    pub fn deploy_calls(&self) -> Vec<DeployCall> {
        self.deploy_calls.lock().unwrap().clone()
    }

    /// Returns the recorded write calls.
    pub fn write_calls(&self) -> Vec<WriteCall> {
        self.write_calls.lock().unwrap().clone()
    }

    /// Returns the recorded read_state calls.
    pub fn read_calls(&self) -> Vec<ReadCall> {
        self.read_calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl FunctionServiceClient for MockFunctionServiceClient {
    async fn deploy(&self, request: DeployRequest) -> Result<DeployResponse> {
        self.deploy_calls
            .lock()
            .unwrap()
            .push(DeployCall { request });

        match self.deploy_responses.lock().unwrap().pop_front() {
            Some(response) => response,
            None => Ok(DeployResponse::new("mock-function-id")),
        }
    }

    async fn write(&self, function_id: &str, inputs: Vec<Value>) -> Result<WriteResponse> {
        self.write_calls.lock().unwrap().push(WriteCall {
            function_id: function_id.to_string(),
            inputs,
        });

        match self.write_responses.lock().unwrap().pop_front() {
            Some(response) => response,
            None => Ok(WriteResponse::success(None)),
        }
    }

    async fn read_state(&self, function_id: &str) -> Result<Value> {
        self.read_calls.lock().unwrap().push(ReadCall {
            function_id: function_id.to_string(),
        });

        match self.read_responses.lock().unwrap().pop_front() {
            Some(response) => response,
            None => Ok(serde_json::json!({})),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use statefold_sdk::FunctionType;

    #[tokio::test]
    async fn test_default_responses() {
        let client = MockFunctionServiceClient::new();

        let deployed = client
            .deploy(DeployRequest::new(
                b"source",
                Value::Null,
                FunctionType::JavaScript,
            ))
            .await
            .unwrap();
        assert_eq!(deployed.id, "mock-function-id");

        let response = client.write("fn-1", vec![]).await.unwrap();
        assert!(response.is_success());

        let state = client.read_state("fn-1").await.unwrap();
        assert!(state.is_object());
    }

    #[tokio::test]
    async fn test_queued_responses_drain_in_order() {
        let client = MockFunctionServiceClient::new()
            .with_deploy_response(Ok(DeployResponse::new("fn-first")))
            .with_deploy_response(Err(Error::api(503, "unavailable", true)));

        let request = DeployRequest::new(b"source", Value::Null, FunctionType::JavaScript);

        let first = client.deploy(request.clone()).await.unwrap();
        assert_eq!(first.id, "fn-first");

        let second = client.deploy(request.clone()).await.unwrap_err();
        assert!(second.is_retriable());

        // Queue exhausted, back to the default.
        let third = client.deploy(request).await.unwrap();
        assert_eq!(third.id, "mock-function-id");
    }

    #[tokio::test]
    async fn test_calls_are_recorded() {
        let client = MockFunctionServiceClient::new();

        client
            .write("fn-1", vec![serde_json::json!({"type": "createPost"})])
            .await
            .unwrap();
        client.read_state("fn-1").await.unwrap();

        let writes = client.write_calls();
        assert_eq!(writes.len(), 1);
        assert_eq!(writes[0].function_id, "fn-1");
        assert_eq!(writes[0].inputs[0]["type"], "createPost");

        let reads = client.read_calls();
        assert_eq!(reads.len(), 1);
        assert_eq!(reads[0].function_id, "fn-1");

        assert!(client.deploy_calls().is_empty());
    }

    #[tokio::test]
    async fn test_deploy_call_preserves_source() {
        let client = MockFunctionServiceClient::new();
        client
            .deploy(DeployRequest::new(
                b"export handle",
                serde_json::json!({"posts": {}}),
                FunctionType::JavaScript,
            ))
            .await
            .unwrap();

        let calls = client.deploy_calls();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].request.source_bytes().unwrap(), b"export handle");
    }
}
