//! Wire records and the high-level `functions()` surface.
//!
//! The record shapes here pin the service's JSON wire format; field names
//! are renamed explicitly rather than relying on struct field casing.

use std::fmt;
use std::sync::Arc;

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine as _;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::client::{FunctionServiceClient, HttpFunctionServiceClient, SharedFunctionServiceClient};
use crate::config::ClientConfig;
use crate::error::{Error, Result};

/// Runtime of a deployed handler source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FunctionType {
    /// JavaScript source interpreted by the service
    #[serde(rename = "js")]
    JavaScript,
    /// A compiled WebAssembly module
    #[serde(rename = "wasm")]
    Wasm,
}

impl fmt::Display for FunctionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::JavaScript => write!(f, "js"),
            Self::Wasm => write!(f, "wasm"),
        }
    }
}

/// Request body registering handler source with the service.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeployRequest {
    /// Base64-encoded handler source bytes
    #[serde(rename = "source")]
    pub source: String,

    /// Initial state installed with the deployment
    #[serde(rename = "initState")]
    pub init_state: Value,

    /// Runtime the source targets
    #[serde(rename = "functionType")]
    pub function_type: FunctionType,
}

impl DeployRequest {
    /// Creates a new DeployRequest from raw source bytes.
    pub fn new(source: &[u8], init_state: Value, function_type: FunctionType) -> Self {
        Self {
            source: BASE64.encode(source),
            init_state,
            function_type,
        }
    }

    /// Decodes the source field back into raw bytes.
    pub fn source_bytes(&self) -> Result<Vec<u8>> {
        BASE64
            .decode(&self.source)
            .map_err(|e| Error::serde(format!("invalid base64 source: {e}")))
    }
}

/// Response from a deploy operation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeployResponse {
    /// The opaque deployment identifier assigned by the service
    #[serde(rename = "id")]
    pub id: String,
}

impl DeployResponse {
    /// Creates a new DeployResponse.
    pub fn new(id: impl Into<String>) -> Self {
        Self { id: id.into() }
    }
}

/// Request body submitting a write batch.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WriteRequest {
    /// Operation records, applied by the service in order
    #[serde(rename = "inputs")]
    pub inputs: Vec<Value>,
}

impl WriteRequest {
    /// Creates a new WriteRequest.
    pub fn new(inputs: Vec<Value>) -> Self {
        Self { inputs }
    }
}

/// Outcome of a write batch as reported by the service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum WriteStatus {
    /// The batch was applied
    #[serde(rename = "SUCCESS")]
    Success,
    /// The batch was rejected or the handler failed
    #[serde(rename = "FAILURE")]
    Failure,
}

impl fmt::Display for WriteStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Success => write!(f, "SUCCESS"),
            Self::Failure => write!(f, "FAILURE"),
        }
    }
}

/// Response from a write operation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WriteResponse {
    /// Outcome reported by the service
    #[serde(rename = "status")]
    pub status: WriteStatus,

    /// Resulting state fragment, when the service returns one
    #[serde(rename = "state", skip_serializing_if = "Option::is_none", default)]
    pub state: Option<Value>,
}

impl WriteResponse {
    /// Creates a successful WriteResponse.
    pub fn success(state: Option<Value>) -> Self {
        Self {
            status: WriteStatus::Success,
            state,
        }
    }

    /// Returns true if the batch was applied.
    pub fn is_success(&self) -> bool {
        self.status == WriteStatus::Success
    }
}

/// Entry point to the Statefold service.
///
/// # Examples
///
/// ```rust,ignore
/// use statefold_sdk::{ClientConfig, FunctionType, Statefold};
///
/// let client = Statefold::new(ClientConfig::from_env())?;
/// let deployed = client
///     .functions()
///     .deploy(&source, &init_state, FunctionType::JavaScript)
///     .await?;
/// ```
pub struct Statefold {
    client: SharedFunctionServiceClient,
}

impl Statefold {
    /// Creates a new Statefold client over HTTP.
    pub fn new(config: ClientConfig) -> Result<Self> {
        Ok(Self {
            client: Arc::new(HttpFunctionServiceClient::new(config)?),
        })
    }

    /// Creates a new Statefold client over a caller-supplied service
    /// client, e.g. a mock in tests.
    pub fn with_client(client: SharedFunctionServiceClient) -> Self {
        Self { client }
    }

    /// Function lifecycle operations.
    pub fn functions(&self) -> Functions<'_> {
        Functions {
            client: &self.client,
        }
    }
}

/// Function lifecycle operations, scoped under [`Statefold::functions`].
pub struct Functions<'a> {
    client: &'a SharedFunctionServiceClient,
}

impl Functions<'_> {
    /// Registers handler source and initial state, returning the
    /// deployment identifier.
    pub async fn deploy<S: Serialize>(
        &self,
        source: &[u8],
        init_state: &S,
        function_type: FunctionType,
    ) -> Result<DeployResponse> {
        let init_state = serde_json::to_value(init_state)?;
        self.client
            .deploy(DeployRequest::new(source, init_state, function_type))
            .await
    }

    /// Submits a batch of operation records against a deployment.
    pub async fn write<I: Serialize>(
        &self,
        function_id: &str,
        inputs: &[I],
    ) -> Result<WriteResponse> {
        let inputs = inputs
            .iter()
            .map(serde_json::to_value)
            .collect::<Result<Vec<_>, _>>()?;
        self.client.write(function_id, inputs).await
    }

    /// Fetches the current state snapshot of a deployment.
    pub async fn read<S: DeserializeOwned>(&self, function_id: &str) -> Result<S> {
        let state = self.client.read_state(function_id).await?;
        Ok(serde_json::from_value(state)?)
    }
}
