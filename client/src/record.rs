//! Serde types for the analyzer's per-line JSON records.

use serde::Deserialize;

use lintwire_types::{Diagnostic, Position, Range, Severity, VariableInfo};

use crate::comment;

/// One line of analyzer output, classified by its `type` discriminator.
///
/// Unknown discriminators deserialize to [`RawRecord::Other`] and are
/// dropped by the decoder.
#[derive(Debug, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub(crate) enum RawRecord {
    Error(RawDiagnostic),
    Warning(RawDiagnostic),
    Variable(RawVariable),
    #[serde(other)]
    Other,
}

#[derive(Debug, Deserialize)]
pub(crate) struct RawDiagnostic {
    error: Option<String>,
    message: Option<String>,
    line: Option<[u32; 2]>,
    column: Option<[u32; 2]>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct RawVariable {
    variable: String,
    #[serde(default)]
    comment: String,
    #[serde(default)]
    definitions: Vec<RawSpan>,
    #[serde(default)]
    usage: Vec<RawSpan>,
}

/// Raw position pair: one-based `[start, end]` lines and columns, with
/// inclusive ends.
#[derive(Debug, Deserialize)]
pub(crate) struct RawSpan {
    line: [u32; 2],
    column: [u32; 2],
}

impl RawSpan {
    /// Map to a zero-based, half-open [`Range`].
    ///
    /// The end character keeps the raw value: skipping the usual `-1` turns
    /// the inclusive raw end column into an exclusive one. Subtraction
    /// saturates so a malformed zero coordinate cannot underflow.
    pub fn to_range(&self) -> Range {
        Range::new(
            Position::new(
                self.line[0].saturating_sub(1),
                self.column[0].saturating_sub(1),
            ),
            Position::new(self.line[1].saturating_sub(1), self.column[1]),
        )
    }
}

impl RawDiagnostic {
    /// Build a [`Diagnostic`], preferring the `error` text over `message`.
    /// The range is attached only when both line and column are present.
    pub fn into_diagnostic(self, severity: Severity) -> Diagnostic {
        let message = self.error.or(self.message).unwrap_or_default();
        let range = match (self.line, self.column) {
            (Some(line), Some(column)) => Some(RawSpan { line, column }.to_range()),
            _ => None,
        };
        Diagnostic::new(severity, message, range)
    }
}

impl RawVariable {
    pub fn into_variable(self) -> VariableInfo {
        VariableInfo::new(
            self.variable,
            comment::normalize(&self.comment),
            self.definitions.iter().map(RawSpan::to_range).collect(),
            self.usage.iter().map(RawSpan::to_range).collect(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ── Position mapping ───────────────────────────────────────────────

    #[test]
    fn test_to_range_decrements_all_but_end_character() {
        let span = RawSpan {
            line: [3, 3],
            column: [5, 8],
        };
        let range = span.to_range();
        assert_eq!(range.start, Position::new(2, 4));
        assert_eq!(range.end, Position::new(2, 8));
    }

    #[test]
    fn test_to_range_multi_line() {
        let span = RawSpan {
            line: [1, 4],
            column: [2, 7],
        };
        let range = span.to_range();
        assert_eq!(range.start, Position::new(0, 1));
        assert_eq!(range.end, Position::new(3, 7));
    }

    #[test]
    fn test_to_range_saturates_on_zero_coordinates() {
        let span = RawSpan {
            line: [0, 0],
            column: [0, 0],
        };
        let range = span.to_range();
        assert_eq!(range.start, Position::new(0, 0));
        assert_eq!(range.end, Position::new(0, 0));
    }

    // ── Diagnostic records ─────────────────────────────────────────────

    #[test]
    fn test_error_text_preferred_over_message() {
        let raw: RawRecord = serde_json::from_str(
            r#"{"type":"error","error":"bad op","message":"ignored"}"#,
        )
        .unwrap();
        let RawRecord::Error(raw) = raw else {
            panic!("expected error record");
        };
        let diag = raw.into_diagnostic(Severity::Error);
        assert_eq!(diag.message(), "bad op");
    }

    #[test]
    fn test_message_is_fallback_text() {
        let raw: RawRecord =
            serde_json::from_str(r#"{"type":"warning","message":"spare me"}"#).unwrap();
        let RawRecord::Warning(raw) = raw else {
            panic!("expected warning record");
        };
        let diag = raw.into_diagnostic(Severity::Warning);
        assert_eq!(diag.message(), "spare me");
    }

    #[test]
    fn test_missing_position_yields_no_range() {
        let raw: RawRecord =
            serde_json::from_str(r#"{"type":"error","error":"nope","line":[1,1]}"#).unwrap();
        let RawRecord::Error(raw) = raw else {
            panic!("expected error record");
        };
        // line present but column missing — still unlocated
        assert!(raw.into_diagnostic(Severity::Error).range().is_none());
    }

    #[test]
    fn test_no_text_fields_yields_empty_message() {
        let raw: RawRecord = serde_json::from_str(r#"{"type":"error"}"#).unwrap();
        let RawRecord::Error(raw) = raw else {
            panic!("expected error record");
        };
        assert_eq!(raw.into_diagnostic(Severity::Error).message(), "");
    }

    // ── Variable records ───────────────────────────────────────────────

    #[test]
    fn test_variable_record_maps_spans_in_order() {
        let raw: RawRecord = serde_json::from_str(
            r#"{
                "type": "variable",
                "variable": "_x",
                "comment": "// note",
                "definitions": [{"line":[1,1],"column":[1,2]}],
                "usage": [{"line":[2,2],"column":[3,4]}, {"line":[5,5],"column":[1,2]}]
            }"#,
        )
        .unwrap();
        let RawRecord::Variable(raw) = raw else {
            panic!("expected variable record");
        };
        let var = raw.into_variable();
        assert_eq!(var.name(), "_x");
        assert_eq!(var.comment(), "note");
        assert!(var.is_local());
        assert_eq!(
            var.definitions(),
            [Range::new(Position::new(0, 0), Position::new(0, 2))]
        );
        assert_eq!(
            var.usage(),
            [
                Range::new(Position::new(1, 2), Position::new(1, 4)),
                Range::new(Position::new(4, 0), Position::new(4, 2)),
            ]
        );
    }

    #[test]
    fn test_variable_optional_fields_default() {
        let raw: RawRecord =
            serde_json::from_str(r#"{"type":"variable","variable":"Count"}"#).unwrap();
        let RawRecord::Variable(raw) = raw else {
            panic!("expected variable record");
        };
        let var = raw.into_variable();
        assert_eq!(var.comment(), "");
        assert!(var.definitions().is_empty());
        assert!(var.usage().is_empty());
        assert!(!var.is_local());
    }

    // ── Classification ─────────────────────────────────────────────────

    #[test]
    fn test_unknown_discriminator_is_other() {
        let raw: RawRecord =
            serde_json::from_str(r#"{"type":"timing","elapsed_ms":12}"#).unwrap();
        assert!(matches!(raw, RawRecord::Other));
    }

    #[test]
    fn test_missing_discriminator_is_rejected() {
        let result: Result<RawRecord, _> = serde_json::from_str(r#"{"error":"untyped"}"#);
        assert!(result.is_err());
    }
}
