//! Diagnostics reported by the analyzer.

use serde::{Deserialize, Serialize};

use crate::position::Range;

/// Severity level for a diagnostic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Error,
    Warning,
}

impl Severity {
    #[must_use]
    pub fn is_error(self) -> bool {
        self == Self::Error
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Error => "error",
            Self::Warning => "warning",
        }
    }
}

/// A single diagnostic from an analyzer run.
///
/// Fields are private; construction happens at the decoding boundary and
/// consumers read via accessors. A diagnostic has no range when the raw
/// record omitted its line/column fields — downstream consumers must not
/// assume every diagnostic is locatable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Diagnostic {
    severity: Severity,
    message: String,
    range: Option<Range>,
}

impl Diagnostic {
    #[must_use]
    pub fn new(severity: Severity, message: String, range: Option<Range>) -> Self {
        Self {
            severity,
            message,
            range,
        }
    }

    #[must_use]
    pub fn severity(&self) -> Severity {
        self.severity
    }

    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    #[must_use]
    pub fn range(&self) -> Option<Range> {
        self.range
    }

    /// Format as `line:col: severity: message` (1-indexed for display).
    /// Unlocated diagnostics render without the position prefix.
    #[must_use]
    pub fn display(&self) -> String {
        match self.range {
            Some(range) => format!(
                "{}:{}: {}: {}",
                range.start.line + 1,
                range.start.character + 1,
                self.severity.label(),
                self.message,
            ),
            None => format!("{}: {}", self.severity.label(), self.message),
        }
    }
}
