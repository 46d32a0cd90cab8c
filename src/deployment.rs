//! Persistence of the deployment identifier between script runs.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Default location of the deployment record.
pub const DEFAULT_DEPLOYMENT_PATH: &str = "deployment.json";

/// Locally persisted handle to a deployed function.
///
/// Written once after a deploy and read by every subsequent operation.
/// The record addresses the remote deployment; it does not manage its
/// lifetime.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeploymentRecord {
    /// The opaque deployment identifier returned by the service
    #[serde(rename = "functionId")]
    pub function_id: String,
}

impl DeploymentRecord {
    /// Creates a new DeploymentRecord.
    pub fn new(function_id: impl Into<String>) -> Self {
        Self {
            function_id: function_id.into(),
        }
    }

    /// Writes the record as pretty-printed JSON.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json)
            .map_err(|e| Error::io(format!("failed to write {}: {e}", path.display())))
    }

    /// Reads a record written by [`DeploymentRecord::save`].
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let raw = fs::read_to_string(path)
            .map_err(|e| Error::io(format!("failed to read {}: {e}", path.display())))?;
        Ok(serde_json::from_str(&raw)?)
    }
}
