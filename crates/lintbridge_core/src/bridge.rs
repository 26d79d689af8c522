//! Bridge orchestration: engine run, report parse, suggestion mapping.

use std::fs;
use std::path::Path;

use tracing::debug;

use crate::config::EngineConfig;
use crate::engine::Engine;
use crate::error::BridgeError;
use crate::report::parse_report;
use crate::suggestion::Suggestion;

/// Runs the external engine over a single file and normalizes its report.
pub struct Bridge {
    engine: Engine,
    tool: String,
}

impl Bridge {
    /// Creates a bridge with the given engine configuration.
    pub fn new(config: EngineConfig) -> Self {
        let tool = config.tool_name().to_string();
        Self {
            engine: Engine::new(config),
            tool,
        }
    }

    /// Analyzes one file and returns the ordered suggestion list.
    ///
    /// The target is read up front so an unreadable path fails before the
    /// engine is spawned; the engine re-reads the file by path itself.
    pub fn suggestions(&self, target: &Path) -> Result<Vec<Suggestion>, BridgeError> {
        let source = fs::read_to_string(target)?;
        debug!("Read {} bytes from {}", source.len(), target.display());

        let report = self.engine.run(target)?;
        if !report.stderr.trim().is_empty() {
            debug!("Engine stderr: {}", report.stderr.trim_end());
        }

        let raw = parse_report(&report.buffer)?;
        Ok(raw
            .iter()
            .map(|diag| Suggestion::from_raw(diag, &self.tool))
            .collect())
    }
}
