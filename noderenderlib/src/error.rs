//! Error types for noderenderlib

use thiserror::Error;

/// Errors that can occur while decoding input or writing rendered output
#[derive(Error, Debug)]
pub enum RenderError {
    /// Failed to write to the output sink, or to read from the input
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON encoding failed
    #[error("failed to encode JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// YAML encoding failed
    #[error("failed to encode YAML: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// An input line could not be decoded into a record
    #[error("failed to decode record on line {line}: {source}")]
    Decode {
        line: usize,
        source: serde_json::Error,
    },
}
