//! External engine invocation.

use std::path::Path;
use std::process::{Command, Stdio};

use tracing::debug;

use crate::config::EngineConfig;
use crate::error::EngineError;

/// Exit status with which pylint signals a usage error. All other statuses
/// encode message categories in a bitmask and come with a valid report.
const USAGE_EXIT_CODE: i32 = 32;

/// Handle for running the external static-analysis engine.
pub struct Engine {
    config: EngineConfig,
}

/// Captured output of one engine run.
#[derive(Debug)]
pub struct EngineReport {
    /// The engine's structured report, captured from its stdout.
    pub buffer: String,

    /// Diagnostic text the engine wrote to its stderr.
    pub stderr: String,
}

impl Engine {
    /// Creates an engine handle with the given configuration.
    pub fn new(config: EngineConfig) -> Self {
        Self { config }
    }

    /// Runs the engine against `target`, capturing its full report.
    ///
    /// Blocks until the engine exits. Both engine streams are captured;
    /// nothing the engine prints reaches this process's stdout.
    pub fn run(&self, target: &Path) -> Result<EngineReport, EngineError> {
        let args = self.config.args_for(target);
        debug!("Running {} with {:?}", self.config.program, args);

        let output = Command::new(&self.config.program)
            .args(&args)
            .stdin(Stdio::null())
            .output()
            .map_err(|source| EngineError::Spawn {
                program: self.config.program.clone(),
                source,
            })?;

        let stderr = String::from_utf8_lossy(&output.stderr).into_owned();

        match output.status.code() {
            Some(USAGE_EXIT_CODE) => {
                let details = if stderr.trim().is_empty() {
                    format!("exit status {}", USAGE_EXIT_CODE)
                } else {
                    stderr.trim().to_string()
                };
                return Err(EngineError::Usage {
                    program: self.config.program.clone(),
                    details,
                });
            }
            Some(code) => {
                debug!("Engine exited with status {}", code);
            }
            None => {
                return Err(EngineError::Usage {
                    program: self.config.program.clone(),
                    details: "terminated by signal".to_string(),
                });
            }
        }

        let buffer = String::from_utf8(output.stdout)?;
        Ok(EngineReport { buffer, stderr })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[cfg(unix)]
    fn script_engine(dir: &tempfile::TempDir, body: &str) -> EngineConfig {
        use std::os::unix::fs::PermissionsExt;

        let path = dir.path().join("pylint");
        std::fs::write(&path, format!("#!/bin/sh\n{}\n", body)).unwrap();
        std::fs::set_permissions(&path, std::fs::Permissions::from_mode(0o755)).unwrap();

        EngineConfig {
            program: path.to_str().unwrap().to_string(),
            extra_args: Vec::new(),
        }
    }

    #[test]
    fn test_spawn_failure_for_missing_program() {
        let config = EngineConfig {
            program: "definitely-not-a-linter".to_string(),
            extra_args: Vec::new(),
        };
        let engine = Engine::new(config);

        let result = engine.run(Path::new("app.py"));

        assert!(matches!(result, Err(EngineError::Spawn { .. })));
    }

    #[cfg(unix)]
    #[test]
    fn test_captures_report_from_stdout() {
        let dir = tempfile::tempdir().unwrap();
        let config = script_engine(&dir, r#"echo '[]'; exit 0"#);
        let engine = Engine::new(config);

        let report = engine.run(Path::new("app.py")).unwrap();

        assert_eq!(report.buffer.trim(), "[]");
        assert!(report.stderr.is_empty());
    }

    #[cfg(unix)]
    #[test]
    fn test_message_exit_codes_are_not_failures() {
        // Exit 20 = warning (4) + refactor (16) bits set.
        let dir = tempfile::tempdir().unwrap();
        let config = script_engine(&dir, r#"echo '[]'; exit 20"#);
        let engine = Engine::new(config);

        let report = engine.run(Path::new("app.py")).unwrap();

        assert_eq!(report.buffer.trim(), "[]");
    }

    #[cfg(unix)]
    #[test]
    fn test_usage_exit_is_a_failure() {
        let dir = tempfile::tempdir().unwrap();
        let config = script_engine(&dir, r#"echo 'usage: pylint ...' >&2; exit 32"#);
        let engine = Engine::new(config);

        let result = engine.run(Path::new("app.py"));

        match result {
            Err(EngineError::Usage { details, .. }) => {
                assert!(details.contains("usage: pylint"));
            }
            other => panic!("expected usage error, got {:?}", other.map(|r| r.buffer)),
        }
    }

    #[cfg(unix)]
    #[test]
    fn test_engine_stderr_is_captured() {
        let dir = tempfile::tempdir().unwrap();
        let config = script_engine(&dir, r#"echo 'loading plugins' >&2; echo '[]'"#);
        let engine = Engine::new(config);

        let report = engine.run(Path::new("app.py")).unwrap();

        assert_eq!(report.stderr.trim(), "loading plugins");
    }
}
