//! Text output formatter

use std::path::Path;

use lintbridge_core::Suggestion;

pub fn output_text(target: &Path, suggestions: &[Suggestion]) {
    if !suggestions.is_empty() {
        println!("{}:", target.display());
        for suggestion in suggestions {
            println!(
                "  {} {} [{}]: {}",
                suggestion.line, suggestion.severity, suggestion.suggestion, suggestion.issue
            );
        }
        println!();
    }

    println!(
        "Checked {}, found {} issues",
        target.display(),
        suggestions.len()
    );
}
