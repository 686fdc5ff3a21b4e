//! Debounced scheduler — the public entry point.
//!
//! Holds at most one pending request. A new submission within the debounce
//! window supersedes the previous one; once the window elapses undisturbed
//! the request is detached from the slot and handed to the process runner.
//! Runs are serialized behind a gate so at most one analyzer subprocess is
//! alive per instance, and a started run is never cancelled.

use std::sync::Arc;

use tokio::sync::{Mutex, oneshot};
use tokio::time::sleep;

use lintwire_types::ParseResult;

use crate::config::AnalyzerConfig;
use crate::error::AnalyzeError;
use crate::runner;

type Reply = oneshot::Sender<Result<ParseResult, AnalyzeError>>;

/// The single pending request, owned exclusively by the scheduler slot.
struct PendingTask {
    seq: u64,
    source: String,
    reply: Reply,
}

#[derive(Default)]
struct Slot {
    /// Monotonic submission counter; the pending task carries the value it
    /// was installed under.
    seq: u64,
    pending: Option<PendingTask>,
}

/// Coalescing front-end for the external analyzer.
///
/// The analyzer is slow relative to keystroke cadence; debouncing keeps a
/// burst of edits from flooding it while guaranteeing the latest text is
/// eventually analyzed exactly once.
pub struct Analyzer {
    config: Arc<AnalyzerConfig>,
    slot: Arc<Mutex<Slot>>,
    run_gate: Arc<Mutex<()>>,
}

impl Analyzer {
    #[must_use]
    pub fn new(config: AnalyzerConfig) -> Self {
        Self {
            config: Arc::new(config),
            slot: Arc::new(Mutex::new(Slot::default())),
            run_gate: Arc::new(Mutex::new(())),
        }
    }

    /// Submit `source` for analysis.
    ///
    /// Settles with the run's [`ParseResult`] once the debounce window has
    /// elapsed and the analyzer has exited, or with
    /// [`AnalyzeError::Superseded`] if a newer submission arrives before
    /// the window elapses.
    pub async fn analyze(&self, source: impl Into<String>) -> Result<ParseResult, AnalyzeError> {
        let rx = self.submit(source.into()).await;
        match rx.await {
            Ok(outcome) => outcome,
            Err(_) => Err(AnalyzeError::TaskStopped),
        }
    }

    /// Install the sole pending task, superseding any previous one, and arm
    /// its debounce timer.
    async fn submit(
        &self,
        source: String,
    ) -> oneshot::Receiver<Result<ParseResult, AnalyzeError>> {
        let (reply, rx) = oneshot::channel();

        let seq = {
            let mut slot = self.slot.lock().await;
            slot.seq += 1;
            if let Some(prev) = slot.pending.take() {
                tracing::debug!("superseding pending analysis request");
                let _ = prev.reply.send(Err(AnalyzeError::Superseded));
            }
            slot.pending = Some(PendingTask {
                seq: slot.seq,
                source,
                reply,
            });
            slot.seq
        };

        let config = Arc::clone(&self.config);
        let slot = Arc::clone(&self.slot);
        let run_gate = Arc::clone(&self.run_gate);
        tokio::spawn(async move {
            sleep(config.debounce()).await;

            // A stale timer (superseded while sleeping) finds a newer
            // sequence in the slot and exits without side effects.
            let task = slot.lock().await.pending.take_if(|pending| pending.seq == seq);
            let Some(task) = task else { return };

            // One run at a time; a submission that debounced during an
            // active run waits here instead of overlapping it.
            let _running = run_gate.lock().await;
            let outcome = runner::run(&config, task.source).await;
            if let Err(error) = &outcome {
                tracing::warn!(%error, "analysis run failed");
            }
            let _ = task.reply.send(outcome);
        });

        rx
    }
}
