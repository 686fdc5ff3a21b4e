//! Typed failures for one analysis request.

use std::io;

use thiserror::Error;

/// Why an [`analyze`](crate::Analyzer::analyze) call settled without a
/// result.
///
/// Per-line decode failures never surface here — they are logged and
/// absorbed inside the stream decoder. There is no retry policy anywhere in
/// the client; a fresh `analyze` call is the only recovery path.
#[derive(Debug, Error)]
pub enum AnalyzeError {
    /// The request was replaced by a newer one before its debounce window
    /// elapsed. Callers coalescing keystrokes can drop this silently.
    #[error("superseded by a newer analysis request")]
    Superseded,

    /// The analyzer executable was not found on `PATH`.
    #[error("analyzer `{command}` not found in PATH")]
    NotFound {
        command: String,
        #[source]
        source: which::Error,
    },

    /// The analyzer process could not be started.
    #[error("failed to spawn analyzer `{command}`")]
    Spawn {
        command: String,
        #[source]
        source: io::Error,
    },

    /// The source text could not be delivered to the analyzer's stdin.
    /// The subprocess is killed before this surfaces.
    #[error("failed to write source text to analyzer stdin")]
    Write(#[source] io::Error),

    /// The analyzer's stdout stream failed mid-run.
    #[error("failed to read analyzer output")]
    Read(#[source] io::Error),

    /// The analyzer's exit status could not be collected.
    #[error("failed to wait for analyzer exit")]
    Wait(#[source] io::Error),

    /// The run task stopped before reporting a result, e.g. because the
    /// runtime is shutting down.
    #[error("analysis task stopped before reporting a result")]
    TaskStopped,
}

impl AnalyzeError {
    /// Whether this is the benign supersede signal rather than a failure.
    #[must_use]
    pub fn is_superseded(&self) -> bool {
        matches!(self, Self::Superseded)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_superseded() {
        assert!(AnalyzeError::Superseded.is_superseded());
        assert!(!AnalyzeError::TaskStopped.is_superseded());
        assert!(
            !AnalyzeError::Write(io::Error::other("broken pipe")).is_superseded()
        );
    }

    #[test]
    fn test_messages_name_the_command() {
        let err = AnalyzeError::Spawn {
            command: "analyzer".to_string(),
            source: io::Error::other("boom"),
        };
        assert!(err.to_string().contains("analyzer"));
    }
}
