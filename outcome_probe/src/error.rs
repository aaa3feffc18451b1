//! Error type for the probe binary.
use thiserror::Error;

/// Failures of the probe itself; a failed scenario is not one of them.
#[derive(Error, Debug)]
pub enum ProbeError {
    /// Failure while encoding the outcome as JSON.
    #[error("JSON serialization error: {0}")]
    SerdeJson(#[from] serde_json::Error),
}
