//! Normalized suggestion records.

use serde::{Deserialize, Serialize};

use crate::report::RawDiagnostic;

/// Severity stamped on diagnostics whose category the engine left out.
const DEFAULT_SEVERITY: &str = "Low";

/// A normalized, caller-facing suggestion derived from one engine diagnostic.
///
/// Serializes with exactly these five fields, in declaration order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Suggestion {
    /// 1-based source line, 0 when the engine reported none.
    pub line: u32,

    /// Name of the engine that produced the finding.
    pub tool: String,

    /// Issue description, verbatim from the engine.
    pub issue: String,

    /// Engine category with its first character upper-cased.
    pub severity: String,

    /// Short rule code usable as a lookup key.
    pub suggestion: String,
}

impl Suggestion {
    /// Maps one raw diagnostic into a suggestion.
    ///
    /// Values are carried over verbatim apart from the severity
    /// capitalization; a diagnostic with no category becomes "Low".
    pub fn from_raw(raw: &RawDiagnostic, tool: &str) -> Self {
        let severity = match &raw.kind {
            Some(kind) => capitalize_first(kind),
            None => DEFAULT_SEVERITY.to_string(),
        };

        Self {
            line: raw.line,
            tool: tool.to_string(),
            issue: raw.message.clone(),
            severity,
            suggestion: raw.symbol.clone(),
        }
    }
}

/// Upper-cases the first character, leaving the rest untouched.
fn capitalize_first(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    fn raw(line: u32, kind: Option<&str>, message: &str, symbol: &str) -> RawDiagnostic {
        RawDiagnostic {
            line,
            message: message.to_string(),
            kind: kind.map(String::from),
            symbol: symbol.to_string(),
            ..RawDiagnostic::default()
        }
    }

    #[test]
    fn test_mapping_copies_fields_verbatim() {
        let diag = raw(5, Some("convention"), "Line too long", "line-too-long");

        let suggestion = Suggestion::from_raw(&diag, "pylint");

        assert_eq!(
            suggestion,
            Suggestion {
                line: 5,
                tool: "pylint".to_string(),
                issue: "Line too long".to_string(),
                severity: "Convention".to_string(),
                suggestion: "line-too-long".to_string(),
            }
        );
    }

    #[rstest]
    #[case("warning", "Warning")]
    #[case("error", "Error")]
    #[case("convention", "Convention")]
    #[case("refactor", "Refactor")]
    #[case("Error", "Error")]
    #[case("fATAL", "FATAL")]
    #[case("", "")]
    fn test_severity_capitalizes_first_char_only(#[case] kind: &str, #[case] expected: &str) {
        let diag = raw(1, Some(kind), "m", "s");

        assert_eq!(Suggestion::from_raw(&diag, "pylint").severity, expected);
    }

    #[test]
    fn test_missing_category_defaults_to_low() {
        let diag = raw(1, None, "m", "s");

        assert_eq!(Suggestion::from_raw(&diag, "pylint").severity, "Low");
    }

    #[test]
    fn test_missing_fields_default_to_empty() {
        let diag = RawDiagnostic::default();

        let suggestion = Suggestion::from_raw(&diag, "pylint");

        assert_eq!(suggestion.line, 0);
        assert_eq!(suggestion.issue, "");
        assert_eq!(suggestion.suggestion, "");
        assert_eq!(suggestion.severity, "Low");
    }

    #[test]
    fn test_serialization_field_order() {
        let diag = raw(5, Some("convention"), "Line too long", "line-too-long");
        let suggestion = Suggestion::from_raw(&diag, "pylint");

        let json = serde_json::to_string(&suggestion).unwrap();

        assert_eq!(
            json,
            r#"{"line":5,"tool":"pylint","issue":"Line too long","severity":"Convention","suggestion":"line-too-long"}"#
        );
    }
}
