// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use std::io;
use std::sync::Arc;
use std::time::Duration;

use chrono::Utc;

use crate::config::consts::DEFAULT_SLOW_OP_DELAY_MS;
use crate::observability::messages::processor::{OperationLogged, SinkAppendFailed};
use crate::observability::messages::StructuredLog;
use crate::observability::LogSink;
use crate::scratch::ScratchBuffer;
use crate::traits::ProcessorKind;

/// Shared support for processor variants: logging, error formatting, and
/// the artificial slow admission check.
///
/// Each variant holds a context instead of inheriting base behavior; the
/// sink and scratch collaborators are injected and only borrowed for the
/// duration of a call.
pub struct ProcessorContext {
    sink: Arc<dyn LogSink>,
    scratch: Arc<dyn ScratchBuffer>,
    slow_op_delay: Duration,
}

impl ProcessorContext {
    pub fn new(sink: Arc<dyn LogSink>, scratch: Arc<dyn ScratchBuffer>) -> Self {
        Self {
            sink,
            scratch,
            slow_op_delay: Duration::from_millis(DEFAULT_SLOW_OP_DELAY_MS),
        }
    }

    /// Override the artificial delay; tests set this to zero.
    pub fn with_slow_op_delay(mut self, delay: Duration) -> Self {
        self.slow_op_delay = delay;
        self
    }

    pub fn slow_op_delay(&self) -> Duration {
        self.slow_op_delay
    }

    /// Append `[timestamp][kind] message` to the sink and mirror it to the
    /// console.
    ///
    /// Sink failures are swallowed; validate/process never fail because of
    /// logging.
    pub async fn log_operation(&self, kind: ProcessorKind, message: &str) {
        let timestamp = Utc::now().format("%Y-%m-%dT%H:%M:%S%.3fZ");
        let line = format!("[{}][{}] {}", timestamp, kind, message);

        let msg = OperationLogged {
            kind: kind.as_str(),
            message,
        };
        let span = msg.span("log_operation");
        let _guard = span.enter();

        if let Err(error) = self.sink.append(&line) {
            SinkAppendFailed {
                kind: kind.as_str(),
                error: &error,
            }
            .log();
        }

        msg.log();
    }

    /// Uniform error string for variants that need one.
    pub fn format_error(&self, error: &str) -> String {
        format!("ERROR: {}", error)
    }

    /// Fixed-delay admission check followed by a scratch-storage probe.
    ///
    /// The probe result is ignored; no verdict ever depends on this step.
    pub async fn perform_slow_operation(&self) {
        if !self.slow_op_delay.is_zero() {
            tokio::time::sleep(self.slow_op_delay).await;
        }
        let _ = self.scratch.entry_count();
    }

    /// Write `bytes` to scratch, read them back with their byte length,
    /// then discard the entry.
    ///
    /// The discard runs before any error propagates, so no entry outlives
    /// its round-trip.
    pub fn scratch_round_trip(&self, bytes: &[u8]) -> io::Result<(Vec<u8>, u64)> {
        let handle = self.scratch.write(bytes)?;
        let content = self.scratch.read_all(&handle);
        let len = self.scratch.len(&handle);
        self.scratch.discard(handle);
        Ok((content?, len?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::observability::MemoryLogSink;
    use crate::scratch::MemoryScratch;

    fn quiet_context() -> (ProcessorContext, Arc<MemoryLogSink>, Arc<MemoryScratch>) {
        let sink = Arc::new(MemoryLogSink::new());
        let scratch = Arc::new(MemoryScratch::new());
        let ctx = ProcessorContext::new(sink.clone(), scratch.clone())
            .with_slow_op_delay(Duration::ZERO);
        (ctx, sink, scratch)
    }

    struct FailingSink;

    impl LogSink for FailingSink {
        fn append(&self, _line: &str) -> io::Result<()> {
            Err(io::Error::new(io::ErrorKind::Other, "sink unavailable"))
        }
    }

    #[tokio::test]
    async fn log_operation_writes_tagged_line() {
        let (ctx, sink, _) = quiet_context();

        ctx.log_operation(ProcessorKind::Text, "Validating text data")
            .await;

        let lines = sink.lines();
        assert_eq!(lines.len(), 1);
        assert!(lines[0].starts_with('['));
        assert!(lines[0].contains("][text] Validating text data"));
    }

    #[tokio::test]
    async fn log_failures_are_swallowed() {
        let scratch = Arc::new(MemoryScratch::new());
        let ctx = ProcessorContext::new(Arc::new(FailingSink), scratch)
            .with_slow_op_delay(Duration::ZERO);

        // Must return normally despite the sink refusing every append.
        ctx.log_operation(ProcessorKind::File, "Processing file data")
            .await;
    }

    #[test]
    fn format_error_prefixes_uniformly() {
        let (ctx, _, _) = quiet_context();
        assert_eq!(ctx.format_error("bad input"), "ERROR: bad input");
    }

    #[tokio::test]
    async fn slow_operation_leaves_scratch_untouched() {
        let (ctx, _, scratch) = quiet_context();

        ctx.perform_slow_operation().await;
        assert_eq!(scratch.entry_count(), 0);
    }

    #[test]
    fn round_trip_returns_content_and_length() {
        let (ctx, _, scratch) = quiet_context();

        let (content, len) = ctx.scratch_round_trip(b"payload").unwrap();
        assert_eq!(content, b"payload");
        assert_eq!(len, 7);
        assert_eq!(scratch.entry_count(), 0);
    }
}
