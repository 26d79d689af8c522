//! Output formatting module

mod json;
mod text;

use std::path::Path;

use miette::Result;

use lintbridge_core::Suggestion;

use crate::cli::OutputFormat;

pub fn output_suggestions(
    target: &Path,
    suggestions: &[Suggestion],
    format: OutputFormat,
) -> Result<()> {
    match format {
        OutputFormat::Json => json::output_json(suggestions)?,
        OutputFormat::Text => text::output_text(target, suggestions),
    }

    Ok(())
}
