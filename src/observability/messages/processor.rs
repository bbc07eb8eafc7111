// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Message types for processor operation events.

use std::fmt::{Display, Formatter};

use tracing::Span;

use super::StructuredLog;

/// A processor operation wrote its log line.
///
/// This is the console mirror of the durable sink line.
///
/// # Log Level
/// `info!` - Important operational event
///
/// # Example
/// ```
/// use dataproc::observability::messages::processor::OperationLogged;
///
/// let msg = OperationLogged {
///     kind: "text",
///     message: "Validating text data",
/// };
///
/// tracing::info!("{}", msg);
/// ```
pub struct OperationLogged<'a> {
    pub kind: &'a str,
    pub message: &'a str,
}

impl Display for OperationLogged<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(f, "[{}] {}", self.kind, self.message)
    }
}

impl StructuredLog for OperationLogged<'_> {
    fn log(&self) {
        tracing::info!(kind = self.kind, message = self.message, "{}", self);
    }

    fn span(&self, name: &str) -> Span {
        tracing::info_span!("operation", span_name = name, kind = self.kind)
    }
}

/// The durable log sink rejected an append.
///
/// The failure is swallowed by the caller; this event is its only trace.
///
/// # Log Level
/// `warn!` - Potential issue or degraded behavior
///
/// # Example
/// ```
/// use dataproc::observability::messages::processor::SinkAppendFailed;
///
/// let error = std::io::Error::new(std::io::ErrorKind::Other, "disk full");
/// let msg = SinkAppendFailed {
///     kind: "file",
///     error: &error,
/// };
///
/// tracing::warn!("{}", msg);
/// ```
pub struct SinkAppendFailed<'a> {
    pub kind: &'a str,
    pub error: &'a dyn std::error::Error,
}

impl Display for SinkAppendFailed<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Log sink append failed for '{}' processor: {}",
            self.kind, self.error
        )
    }
}

impl StructuredLog for SinkAppendFailed<'_> {
    fn log(&self) {
        tracing::warn!(kind = self.kind, error = %self.error, "{}", self);
    }

    fn span(&self, name: &str) -> Span {
        tracing::warn_span!("sink_append_failed", span_name = name, kind = self.kind)
    }
}
