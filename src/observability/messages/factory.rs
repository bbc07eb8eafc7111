// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Message types for processor instantiation events.

use std::fmt::{Display, Formatter};

use tracing::Span;

use super::StructuredLog;

/// A processor was created for a requested kind.
///
/// # Log Level
/// `info!` - Important operational event
///
/// # Example
/// ```
/// use dataproc::observability::messages::factory::ProcessorCreated;
///
/// let msg = ProcessorCreated { kind: "text" };
///
/// tracing::info!("{}", msg);
/// ```
pub struct ProcessorCreated<'a> {
    pub kind: &'a str,
}

impl Display for ProcessorCreated<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(f, "Created '{}' processor", self.kind)
    }
}

impl StructuredLog for ProcessorCreated<'_> {
    fn log(&self) {
        tracing::info!(kind = self.kind, "{}", self);
    }

    fn span(&self, name: &str) -> Span {
        tracing::info_span!("processor_created", span_name = name, kind = self.kind)
    }
}

/// A kind name failed to resolve to a processor.
///
/// # Log Level
/// `warn!` - Potential issue or degraded behavior
///
/// # Example
/// ```
/// use dataproc::observability::messages::factory::UnknownKindRequested;
///
/// let msg = UnknownKindRequested { kind: "image" };
///
/// tracing::warn!("{}", msg);
/// ```
pub struct UnknownKindRequested<'a> {
    pub kind: &'a str,
}

impl Display for UnknownKindRequested<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(f, "Unknown processor kind requested: '{}'", self.kind)
    }
}

impl StructuredLog for UnknownKindRequested<'_> {
    fn log(&self) {
        tracing::warn!(kind = self.kind, "{}", self);
    }

    fn span(&self, name: &str) -> Span {
        tracing::warn_span!("unknown_kind", span_name = name, kind = self.kind)
    }
}
