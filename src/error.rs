use std::path::PathBuf;

use thiserror::Error;

/// Violations of the agent data-model invariants.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum AgentError {
    #[error("neuron id {0} appears more than once")]
    DuplicateNeuron(i64),
    #[error("connection id {0} appears more than once")]
    DuplicateConnection(i64),
    #[error("connection {connection} references unknown neuron {neuron}")]
    DanglingEndpoint { connection: i64, neuron: i64 },
}

#[derive(Debug, Error)]
pub enum Error {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("invalid agent: {0}")]
    Agent(#[from] AgentError),
    #[error("viewport must be positive and finite, got {width}x{height}")]
    InvalidViewport { width: f32, height: f32 },
    #[error("graphical shell failed: {0}")]
    Gui(String),
}

pub type Result<T> = std::result::Result<T, Error>;
