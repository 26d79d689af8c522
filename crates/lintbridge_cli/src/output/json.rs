//! JSON output formatter

use miette::{IntoDiagnostic, Result};

use lintbridge_core::Suggestion;

/// Prints the full suggestion list as one compact JSON line.
pub fn output_json(suggestions: &[Suggestion]) -> Result<()> {
    println!("{}", serde_json::to_string(suggestions).into_diagnostic()?);
    Ok(())
}
