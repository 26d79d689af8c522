//! Analyze command implementation

use miette::{IntoDiagnostic, Result};
use tracing::{debug, error};

use lintbridge_core::{Bridge, BridgeError, EngineConfig};

use crate::cli::Cli;
use crate::output::output_suggestions;

/// Runs the full analyze pipeline for one file.
///
/// Returns `true` when the run degraded to an empty suggestion list
/// because the engine or its report failed. Callers must not read an
/// empty list as "file is clean" on that path.
pub fn run(cli: &Cli) -> Result<bool> {
    let mut config = load_config(cli)?;

    if let Some(program) = &cli.engine {
        config.program = program.clone();
    }

    let bridge = Bridge::new(config);

    match bridge.suggestions(&cli.file) {
        Ok(suggestions) => {
            output_suggestions(&cli.file, &suggestions, cli.format)?;
            Ok(false)
        }
        Err(err @ (BridgeError::Engine(_) | BridgeError::Io(_))) => {
            error!("Engine run failed for {}: {}", cli.file.display(), err);
            println!("[]");
            Ok(true)
        }
        Err(err @ BridgeError::Report(_)) => {
            error!(
                "Could not parse engine report for {}: {}",
                cli.file.display(),
                err
            );
            println!("[]");
            Ok(true)
        }
        Err(err) => Err(err).into_diagnostic(),
    }
}

fn load_config(cli: &Cli) -> Result<EngineConfig> {
    if let Some(path) = &cli.config {
        return EngineConfig::from_file(path).into_diagnostic();
    }

    if let Some(path) = EngineConfig::discover(".") {
        debug!("Using config: {}", path.display());
        return EngineConfig::from_file(&path).into_diagnostic();
    }

    debug!("No config file found, using defaults");
    Ok(EngineConfig::new())
}
