//! Captured engine report parsing.

use serde::Deserialize;

use crate::error::ReportError;

/// One issue as reported by the engine's JSON reporter.
///
/// Field defaults match what the downstream mapping expects: an
/// unattributed line is 0, text fields fall back to the empty string, and
/// a missing category stays observable as `None`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct RawDiagnostic {
    /// 1-based line number, 0 when the engine could not attribute one.
    #[serde(default)]
    pub line: u32,

    /// Human-readable description of the issue.
    #[serde(default)]
    pub message: String,

    /// Engine category ("convention", "warning", "error", ...).
    #[serde(rename = "type")]
    pub kind: Option<String>,

    /// Short rule code, e.g. "line-too-long".
    #[serde(default)]
    pub symbol: String,

    /// 0-based column, when attributed.
    #[serde(default)]
    pub column: u32,

    /// Path as echoed by the engine.
    pub path: Option<String>,

    /// Module the issue was found in.
    pub module: Option<String>,

    /// Enclosing object (function/class), when any.
    pub obj: Option<String>,

    /// Numeric rule id, e.g. "C0301".
    #[serde(rename = "message-id")]
    pub message_id: Option<String>,
}

/// Parses the captured report buffer into raw diagnostics.
///
/// An empty buffer is treated as an empty report: the engine emits `[]`
/// for a clean file, but an interrupted run can leave nothing behind.
pub fn parse_report(buffer: &str) -> Result<Vec<RawDiagnostic>, ReportError> {
    let trimmed = buffer.trim();
    if trimmed.is_empty() {
        return Ok(Vec::new());
    }

    Ok(serde_json::from_str(trimmed)?)
}
