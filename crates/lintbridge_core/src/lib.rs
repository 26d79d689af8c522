//! # lintbridge_core
//!
//! Engine invocation and suggestion normalization for lintbridge.
//!
//! This crate provides:
//! - `EngineConfig` — the explicit option set for the external engine
//! - `Engine` — subprocess invocation with a captured report buffer
//! - `parse_report` — captured-buffer parsing into raw diagnostics
//! - `Bridge` — the file-to-suggestions pipeline
//!
//! ## Example
//!
//! ```rust,ignore
//! use lintbridge_core::{Bridge, EngineConfig};
//!
//! let bridge = Bridge::new(EngineConfig::new());
//! let suggestions = bridge.suggestions("app.py".as_ref())?;
//! println!("{}", serde_json::to_string(&suggestions)?);
//! ```

mod bridge;
mod config;
mod engine;
mod error;
mod report;
mod suggestion;

pub use bridge::Bridge;
pub use config::EngineConfig;
pub use engine::{Engine, EngineReport};
pub use error::{BridgeError, EngineError, ReportError};
pub use report::{RawDiagnostic, parse_report};
pub use suggestion::Suggestion;
