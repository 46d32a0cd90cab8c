//! The state-transition contract applied to deployed functions.

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::error::Result;

/// A state-transition function in the shape the platform applies to
/// deployments: fold one operation record into the current state and
/// return the next state.
///
/// The remote engine applies this contract to deployed source. The local
/// test harness in `statefold-testkit` applies it directly to Rust
/// implementations, which is how handler semantics are exercised without
/// a deployment.
pub trait Handler {
    /// Durable state owned by the deployment.
    type State: Serialize + DeserializeOwned;

    /// One operation record from a write batch.
    type Input: Serialize + DeserializeOwned;

    /// Applies a single operation record to the state.
    ///
    /// An error fails the whole write batch; records after the failing
    /// one are not applied.
    fn handle(&self, state: Self::State, input: Self::Input) -> Result<Self::State>;
}
