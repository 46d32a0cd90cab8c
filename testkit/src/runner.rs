//! Local test runner for deployed-function handlers.
//!
//! This module simulates the service's write pipeline in-process: a
//! handler is applied to an initial state and a batch of writes, and the
//! resulting state snapshot is returned. No deployment is performed and
//! no network is touched.
//!
//! # Examples
//!
//! ```ignore
//! use statefold_testkit::{create_write, LocalFunctionRunner};
//!
//! let runner = LocalFunctionRunner::new(PostHandler);
//! let attempt = runner
//!     .run(PostState::default(), vec![create_write(action)])
//!     .unwrap();
//! assert_eq!(attempt.writes_applied, 1);
//! ```

use serde::{Deserialize, Serialize};
use tracing::debug;

use statefold_sdk::Handler;

use crate::error::{TestError, TestResult};

/// A single write in a simulated batch.
///
/// Wraps the raw operation record the way the service wraps submitted
/// inputs before handing them to the handler.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Write<I> {
    /// The operation record
    pub input: I,
}

/// Wraps a raw operation record into a [`Write`].
pub fn create_write<I>(input: I) -> Write<I> {
    Write { input }
}

/// State snapshot returned by a simulated execution.
#[derive(Debug, Clone)]
pub struct TestAttempt<S> {
    /// State after every write was applied
    pub state: S,
    /// How many writes were applied
    pub writes_applied: usize,
}

impl<S: Serialize> TestAttempt<S> {
    /// Returns the state snapshot in its wire form, for assertions
    /// against the JSON shape.
    pub fn state_value(&self) -> TestResult<serde_json::Value> {
        Ok(serde_json::to_value(&self.state)?)
    }
}

/// Input record for [`test_function`]: handler, initial state, and the
/// write batch to simulate.
pub struct TestFunctionInput<H: Handler> {
    /// The handler under test
    pub handler: H,
    /// State the deployment would start from
    pub init_state: H::State,
    /// Writes applied in order
    pub writes: Vec<Write<H::Input>>,
}

/// Simulates executing a handler against a write batch, returning the
/// post-execution state snapshot without performing a real deployment.
pub fn test_function<H: Handler>(input: TestFunctionInput<H>) -> TestResult<TestAttempt<H::State>> {
    LocalFunctionRunner::new(input.handler).run(input.init_state, input.writes)
}

/// Local test runner for handlers.
///
/// Applies writes sequentially, the way the service applies a batch. The
/// first handler error aborts the run and reports the failing write's
/// position.
pub struct LocalFunctionRunner<H: Handler> {
    handler: H,
}

impl<H: Handler> LocalFunctionRunner<H> {
    /// Creates a new LocalFunctionRunner around a handler.
    pub fn new(handler: H) -> Self {
        Self { handler }
    }

    /// Runs the handler over a write batch.
    pub fn run(
        &self,
        init_state: H::State,
        writes: Vec<Write<H::Input>>,
    ) -> TestResult<TestAttempt<H::State>> {
        let mut state = init_state;
        let mut writes_applied = 0;

        for (index, write) in writes.into_iter().enumerate() {
            state = self
                .handler
                .handle(state, write.input)
                .map_err(|source| TestError::handler_failed(index, source))?;
            writes_applied += 1;
            debug!(index, "write applied");
        }

        Ok(TestAttempt {
            state,
            writes_applied,
        })
    }
}
