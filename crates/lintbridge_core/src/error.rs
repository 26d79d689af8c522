//! Adapter error types.

use thiserror::Error;

/// Errors that can occur while invoking the external engine.
#[derive(Debug, Error)]
pub enum EngineError {
    /// The engine process could not be started.
    #[error("Failed to start engine '{program}': {source}")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },

    /// The engine rejected its invocation or died before finishing the report.
    #[error("Engine '{program}' failed: {details}")]
    Usage { program: String, details: String },

    /// The captured report was not valid UTF-8.
    #[error("Engine report is not valid UTF-8: {0}")]
    OutputDecode(#[from] std::string::FromUtf8Error),
}

/// Errors that can occur while parsing the captured report.
#[derive(Debug, Error)]
pub enum ReportError {
    /// The buffer was not a JSON array of diagnostics.
    #[error("Malformed engine report: {0}")]
    Json(#[from] serde_json::Error),
}

/// Errors that can occur across the bridge pipeline.
#[derive(Debug, Error)]
pub enum BridgeError {
    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Engine invocation error.
    #[error("Engine error: {0}")]
    Engine(#[from] EngineError),

    /// Report parsing error.
    #[error("Report error: {0}")]
    Report(#[from] ReportError),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl BridgeError {
    /// Creates a configuration error.
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }
}
