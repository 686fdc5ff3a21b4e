//! Analyzer invocation settings.

use std::time::Duration;

use serde::Deserialize;

/// Debounce window applied between a submission and the analyzer launch.
const DEFAULT_DEBOUNCE_MS: u64 = 200;

fn default_args() -> Vec<String> {
    vec!["--json".to_string(), "--verbose".to_string()]
}

fn default_debounce_ms() -> u64 {
    DEFAULT_DEBOUNCE_MS
}

/// Configuration for the analyzer subprocess.
#[derive(Debug, Clone, Deserialize)]
pub struct AnalyzerConfig {
    /// Executable command, resolved on `PATH` at launch.
    command: String,
    /// Arguments to pass to the command. The defaults request structured,
    /// verbose JSON output.
    #[serde(default = "default_args")]
    args: Vec<String>,
    /// Debounce window in milliseconds.
    #[serde(default = "default_debounce_ms")]
    debounce_ms: u64,
}

impl AnalyzerConfig {
    #[must_use]
    pub fn new(command: impl Into<String>) -> Self {
        Self {
            command: command.into(),
            args: default_args(),
            debounce_ms: DEFAULT_DEBOUNCE_MS,
        }
    }

    /// Replace the argument list entirely.
    #[must_use]
    pub fn with_args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.args = args.into_iter().map(Into::into).collect();
        self
    }

    #[must_use]
    pub fn with_debounce_ms(mut self, debounce_ms: u64) -> Self {
        self.debounce_ms = debounce_ms;
        self
    }

    #[must_use]
    pub fn command(&self) -> &str {
        &self.command
    }

    #[must_use]
    pub fn args(&self) -> &[String] {
        &self.args
    }

    #[must_use]
    pub fn debounce(&self) -> Duration {
        Duration::from_millis(self.debounce_ms)
    }
}
