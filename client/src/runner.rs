//! Analyzer subprocess lifecycle: spawn, feed stdin, drain stdout, reap.

use std::io;
use std::process::Stdio;

use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::process::Command;

use lintwire_types::ParseResult;

use crate::config::AnalyzerConfig;
use crate::decode::LineDecoder;
use crate::error::AnalyzeError;

/// Read buffer size for draining analyzer stdout.
const READ_BUF_BYTES: usize = 8192;

/// Run the analyzer once over `source` and collect everything it reports.
///
/// The full source text is written to the child's stdin, which is then
/// closed to signal end-of-input. Launch and stdin failures are fatal for
/// the run; a non-zero exit status is logged but still yields the
/// accumulated (possibly partial) result.
pub(crate) async fn run(
    config: &AnalyzerConfig,
    source: String,
) -> Result<ParseResult, AnalyzeError> {
    let resolved = which::which(config.command()).map_err(|source| AnalyzeError::NotFound {
        command: config.command().to_string(),
        source,
    })?;

    let mut child = Command::new(&resolved)
        .args(config.args())
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::null())
        .kill_on_drop(true)
        .spawn()
        .map_err(|source| AnalyzeError::Spawn {
            command: config.command().to_string(),
            source,
        })?;

    tracing::debug!(command = %config.command(), "analyzer started");

    let mut stdin = child.stdin.take().ok_or_else(|| AnalyzeError::Spawn {
        command: config.command().to_string(),
        source: io::Error::other("analyzer stdin was not captured"),
    })?;
    let mut stdout = child.stdout.take().ok_or_else(|| AnalyzeError::Spawn {
        command: config.command().to_string(),
        source: io::Error::other("analyzer stdout was not captured"),
    })?;

    // Writing and reading must overlap or a child that fills its stdout
    // pipe before draining stdin deadlocks against us.
    let writer = tokio::spawn(async move {
        stdin.write_all(source.as_bytes()).await?;
        stdin.shutdown().await
    });

    let mut result = ParseResult::new();
    let mut decoder = LineDecoder::new();
    let mut chunk = [0u8; READ_BUF_BYTES];
    loop {
        match stdout.read(&mut chunk).await {
            Ok(0) => break,
            Ok(n) => decoder.feed(&chunk[..n], &mut result),
            Err(error) => {
                let _ = child.kill().await;
                return Err(AnalyzeError::Read(error));
            }
        }
    }
    decoder.finish(&mut result);

    match writer.await {
        Ok(Ok(())) => {}
        Ok(Err(error)) => {
            let _ = child.kill().await;
            return Err(AnalyzeError::Write(error));
        }
        Err(_) => {
            let _ = child.kill().await;
            return Err(AnalyzeError::TaskStopped);
        }
    }

    let status = child.wait().await.map_err(AnalyzeError::Wait)?;
    if !status.success() {
        tracing::warn!(%status, "analyzer exited with failure status, keeping partial result");
    }
    Ok(result)
}
