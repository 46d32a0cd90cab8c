//! Testing utilities for the Statefold SDK
//!
//! This crate provides tools for exercising handlers and client code
//! without a real deployment.
//!
//! # Features
//!
//! - **LocalFunctionRunner** / **test_function**: fold a write batch over
//!   an initial state through a [`Handler`](statefold_sdk::Handler),
//!   returning the post-execution state snapshot
//! - **MockFunctionServiceClient**: queued-response service client that
//!   records every call for verification
//!
//! # Example
//!
//! ```ignore
//! use statefold_testkit::{create_write, test_function, TestFunctionInput};
//!
//! #[test]
//! fn test_create() {
//!     let attempt = test_function(TestFunctionInput {
//!         handler: PostHandler,
//!         init_state: PostState::default(),
//!         writes: vec![create_write(action)],
//!     })
//!     .unwrap();
//!
//!     assert!(attempt.state.posts.contains_key(&id));
//! }
//! ```

pub mod error;
pub mod mock_client;
pub mod runner;

pub use error::{TestError, TestResult};
pub use mock_client::{DeployCall, MockFunctionServiceClient, ReadCall, WriteCall};
pub use runner::{create_write, test_function, LocalFunctionRunner, TestAttempt, TestFunctionInput, Write};

// Re-export key types from the SDK for convenience
pub use statefold_sdk::{
    DeployRequest, DeployResponse, Error, FunctionServiceClient, Handler,
    SharedFunctionServiceClient, WriteRequest, WriteResponse, WriteStatus,
};
