//! # Statefold SDK for Rust
//!
//! Client SDK for the Statefold platform: a hosted service that runs
//! deployed handler functions against durable state. A handler is a
//! state-transition function; clients register its source once, then
//! submit batches of operation records ("writes") that the service folds
//! into the deployment's state.
//!
//! This crate owns the client side only. The remote engine that
//! interprets deployed source and stores state is an opaque collaborator
//! reached over HTTP.
//!
//! ## Getting started
//!
//! ```rust,ignore
//! use statefold_sdk::{ClientConfig, FunctionType, Statefold};
//!
//! let client = Statefold::new(ClientConfig::from_env())?;
//!
//! // Register handler source and initial state; keep the returned id.
//! let deployed = client
//!     .functions()
//!     .deploy(&source_bytes, &initial_state, FunctionType::JavaScript)
//!     .await?;
//!
//! // Submit a batch of operation records against the deployment.
//! let response = client.functions().write(&deployed.id, &operations).await?;
//! assert!(response.is_success());
//! ```
//!
//! ## Deployment records
//!
//! The deployment identifier is an opaque string owned by the service.
//! [`DeploymentRecord`] persists it as a small JSON file so that separate
//! processes can address the same deployment without re-deploying:
//!
//! ```rust,ignore
//! use statefold_sdk::DeploymentRecord;
//!
//! DeploymentRecord::new(deployed.id).save("deployment.json")?;
//! // ...later, in another process:
//! let record = DeploymentRecord::load("deployment.json")?;
//! ```
//!
//! ## Testing
//!
//! The companion `statefold-testkit` crate runs [`Handler`]
//! implementations in-process against an initial state and a write batch,
//! without a real deployment, and provides a recording mock of
//! [`FunctionServiceClient`].
//!
//! ## Module organization
//!
//! - [`client`]: service client trait and HTTP implementation
//! - [`config`]: endpoint and credential configuration
//! - [`deployment`]: deployment-record persistence
//! - [`error`]: error types and predicates
//! - [`function`]: wire records and the high-level `functions()` surface
//! - [`handler`]: the state-transition contract applied to deployments

pub mod client;
pub mod config;
pub mod deployment;
pub mod error;
pub mod function;
pub mod handler;

pub use client::{FunctionServiceClient, HttpFunctionServiceClient, SharedFunctionServiceClient};
pub use config::{ClientConfig, DEFAULT_ENDPOINT, ENDPOINT_ENV, TOKEN_ENV};
pub use deployment::{DeploymentRecord, DEFAULT_DEPLOYMENT_PATH};
pub use error::{Error, Result};
pub use function::{
    DeployRequest, DeployResponse, FunctionType, Functions, Statefold, WriteRequest,
    WriteResponse, WriteStatus,
};
pub use handler::Handler;
