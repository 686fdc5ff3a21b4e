//! Symbol-usage records aggregated per identifier.

use serde::{Deserialize, Serialize};

use crate::position::Range;

/// Definition and usage data for one identifier across a document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VariableInfo {
    name: String,
    comment: String,
    definitions: Vec<Range>,
    usage: Vec<Range>,
}

impl VariableInfo {
    #[must_use]
    pub fn new(
        name: String,
        comment: String,
        definitions: Vec<Range>,
        usage: Vec<Range>,
    ) -> Self {
        Self {
            name,
            comment,
            definitions,
            usage,
        }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Normalized doc comment attached to the identifier; empty when the
    /// analyzer reported none.
    #[must_use]
    pub fn comment(&self) -> &str {
        &self.comment
    }

    /// Definition sites in source order.
    #[must_use]
    pub fn definitions(&self) -> &[Range] {
        &self.definitions
    }

    /// Usage sites in source order.
    #[must_use]
    pub fn usage(&self) -> &[Range] {
        &self.usage
    }

    /// Whether the identifier follows the analyzed language's convention of
    /// a leading underscore for local-scope names.
    #[must_use]
    pub fn is_local(&self) -> bool {
        self.name.starts_with('_')
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_var(name: &str) -> VariableInfo {
        VariableInfo::new(name.to_string(), String::new(), vec![], vec![])
    }

    #[test]
    fn test_underscore_prefix_is_local() {
        assert!(make_var("_x").is_local());
        assert!(make_var("_").is_local());
    }

    #[test]
    fn test_plain_name_is_not_local() {
        assert!(!make_var("counter").is_local());
        assert!(!make_var("x_").is_local());
        assert!(!make_var("").is_local());
    }
}
