//! Demo domain for the Statefold platform: a tiny post store.
//!
//! The binaries under `src/bin/` mirror the platform's getting-started
//! flow: deploy the handler once (`deploy`), then drive writes against
//! the recorded deployment (`create-post`, `update-post`, `delete-post`)
//! and inspect the result (`read-posts`). Each binary is one sequential
//! flow: build an operation record, one awaited call, print the result.
//!
//! The deployable source lives in `handler.js`; [`PostHandler`] is the
//! Rust implementation of the same semantics, used by the local test
//! harness.

pub mod handler;
pub mod model;

pub use handler::PostHandler;
pub use model::{Post, PostAction, PostState};
