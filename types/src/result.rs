//! Aggregate result of one analyzer run.

use serde::{Deserialize, Serialize};

use crate::diagnostic::{Diagnostic, Severity};
use crate::variable::VariableInfo;

/// Everything one analyzer run produced.
///
/// The sequences grow append-only, in arrival order, while the run streams
/// records. Ownership moves to the caller when the run settles, so a
/// settled result is frozen.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParseResult {
    errors: Vec<Diagnostic>,
    warnings: Vec<Diagnostic>,
    variables: Vec<VariableInfo>,
}

impl ParseResult {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a diagnostic to the sequence matching its severity.
    pub fn push_diagnostic(&mut self, diagnostic: Diagnostic) {
        match diagnostic.severity() {
            Severity::Error => self.errors.push(diagnostic),
            Severity::Warning => self.warnings.push(diagnostic),
        }
    }

    pub fn push_variable(&mut self, variable: VariableInfo) {
        self.variables.push(variable);
    }

    /// Error diagnostics in arrival order.
    #[must_use]
    pub fn errors(&self) -> &[Diagnostic] {
        &self.errors
    }

    /// Warning diagnostics in arrival order.
    #[must_use]
    pub fn warnings(&self) -> &[Diagnostic] {
        &self.warnings
    }

    /// Variable records in arrival order.
    #[must_use]
    pub fn variables(&self) -> &[VariableInfo] {
        &self.variables
    }

    #[must_use]
    pub fn error_count(&self) -> usize {
        self.errors.len()
    }

    #[must_use]
    pub fn warning_count(&self) -> usize {
        self.warnings.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty() && self.warnings.is_empty() && self.variables.is_empty()
    }

    /// Format a compact status string like "E:3 W:5".
    #[must_use]
    pub fn status_string(&self) -> String {
        if self.errors.is_empty() && self.warnings.is_empty() {
            return String::new();
        }
        format!("E:{} W:{}", self.error_count(), self.warning_count())
    }
}
