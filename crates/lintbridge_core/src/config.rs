//! Engine configuration.

use std::ffi::OsString;
use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::BridgeError;

/// Report options that are always passed: machine-readable output with
/// every available check enabled. Not overridable from `extra_args`.
const REPORT_ARGS: &[&str] = &["--output-format=json", "--enable=all"];

/// Configuration for the external static-analysis engine.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Engine executable to invoke. A bare name is resolved via PATH.
    #[serde(default = "default_program")]
    pub program: String,

    /// Extra arguments appended after the fixed report options.
    #[serde(default)]
    pub extra_args: Vec<String>,
}

fn default_program() -> String {
    "pylint".to_string()
}

impl EngineConfig {
    /// Conventional config file names, in discovery order.
    pub const CONFIG_FILES: &'static [&'static str] = &[".lintbridge.jsonc", ".lintbridge.json"];

    /// Creates the default configuration.
    pub fn new() -> Self {
        Self {
            program: default_program(),
            extra_args: Vec::new(),
        }
    }

    /// Loads configuration from a file.
    ///
    /// Supports `.lintbridge.jsonc`, `.lintbridge.json`.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, BridgeError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)
            .map_err(|e| BridgeError::config(format!("Failed to read config: {}", e)))?;
        Self::from_json(&content)
    }

    /// Parses configuration from a JSONC string.
    pub fn from_json(content: &str) -> Result<Self, BridgeError> {
        let parse_options = jsonc_parser::ParseOptions::default();
        let value = jsonc_parser::parse_to_serde_value(content, &parse_options)
            .map_err(|e| BridgeError::config(format!("Failed to parse config: {}", e)))?
            .unwrap_or(serde_json::Value::Object(serde_json::Map::new()));

        serde_json::from_value(value)
            .map_err(|e| BridgeError::config(format!("Invalid config: {}", e)))
    }

    /// Searches `dir` for a conventional config file.
    pub fn discover(dir: impl AsRef<Path>) -> Option<PathBuf> {
        let dir = dir.as_ref();
        Self::CONFIG_FILES
            .iter()
            .map(|name| dir.join(name))
            .find(|path| path.exists())
    }

    /// Engine name as stamped into suggestion records.
    ///
    /// The executable stem, so an absolute `program` path still yields
    /// "pylint" on the wire.
    pub fn tool_name(&self) -> &str {
        Path::new(&self.program)
            .file_stem()
            .and_then(|stem| stem.to_str())
            .unwrap_or(&self.program)
    }

    /// Full argument vector for analyzing `target`.
    ///
    /// `extra_args` may not switch the report away from the machine-readable
    /// format the parser expects.
    pub fn args_for(&self, target: &Path) -> Vec<OsString> {
        let mut args: Vec<OsString> = REPORT_ARGS.iter().map(OsString::from).collect();
        args.extend(
            self.extra_args
                .iter()
                .filter(|arg| !arg.starts_with("--output-format"))
                .map(OsString::from),
        );
        args.push(target.as_os_str().to_os_string());
        args
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self::new()
    }
}
