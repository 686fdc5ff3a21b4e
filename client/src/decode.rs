//! Streaming line decoder for analyzer stdout.
//!
//! The analyzer emits one JSON record per physical line, but the chunks the
//! pipe delivers may split a record anywhere, including mid-UTF-8-sequence.
//! [`LineDecoder`] reassembles complete lines and parses each one
//! independently: a malformed line is logged and dropped without touching
//! its neighbours or aborting the run.

use std::mem;

use lintwire_types::{ParseResult, Severity};

use crate::record::RawRecord;

/// Maximum bytes buffered for a single unterminated line (4 MiB).
const MAX_LINE_BYTES: usize = 4 * 1024 * 1024;

/// Splits raw stdout chunks into lines and folds each parsed record into
/// the run's [`ParseResult`], in arrival order.
#[derive(Debug, Default)]
pub(crate) struct LineDecoder {
    buf: Vec<u8>,
    /// Set after an oversized unterminated line was discarded; the rest of
    /// that line (up to the next newline) must be dropped too.
    skipping: bool,
}

impl LineDecoder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Consume one raw output chunk, decoding every line it completes.
    pub fn feed(&mut self, chunk: &[u8], out: &mut ParseResult) {
        self.buf.extend_from_slice(chunk);
        while let Some(newline) = self.buf.iter().position(|&b| b == b'\n') {
            let line: Vec<u8> = self.buf.drain(..=newline).collect();
            if self.skipping {
                self.skipping = false;
                continue;
            }
            decode_line(&line[..newline], out);
        }
        if self.buf.len() > MAX_LINE_BYTES {
            tracing::warn!(
                bytes = self.buf.len(),
                "discarding oversized analyzer output line"
            );
            self.buf.clear();
            self.skipping = true;
        }
    }

    /// Flush a trailing line that arrived without a final newline.
    pub fn finish(&mut self, out: &mut ParseResult) {
        if self.skipping {
            self.skipping = false;
            self.buf.clear();
            return;
        }
        if !self.buf.is_empty() {
            let line = mem::take(&mut self.buf);
            decode_line(&line, out);
        }
    }
}

/// Parse one line (without its `\n`) and apply it to the result.
fn decode_line(line: &[u8], out: &mut ParseResult) {
    let line = match line.last() {
        Some(b'\r') => &line[..line.len() - 1],
        _ => line,
    };
    if line.is_empty() {
        return;
    }
    match serde_json::from_slice::<RawRecord>(line) {
        Ok(record) => apply(record, out),
        Err(error) => {
            tracing::debug!(
                %error,
                line = %String::from_utf8_lossy(line),
                "discarding malformed analyzer record"
            );
        }
    }
}

fn apply(record: RawRecord, out: &mut ParseResult) {
    match record {
        RawRecord::Error(raw) => out.push_diagnostic(raw.into_diagnostic(Severity::Error)),
        RawRecord::Warning(raw) => out.push_diagnostic(raw.into_diagnostic(Severity::Warning)),
        RawRecord::Variable(raw) => out.push_variable(raw.into_variable()),
        RawRecord::Other => {}
    }
}
