// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Centralized message types for structured logging.
//!
//! Each diagnostic event is a struct implementing `Display` (for a
//! human-readable line) and `StructuredLog` (for a tracing event with the
//! fields attached). This keeps magic strings out of the processors and
//! keeps log output consistent.
//!
//! Messages are organized by subsystem:
//! * `processor` - processor operation and sink events
//! * `factory` - processor instantiation events

pub mod factory;
pub mod processor;

use tracing::Span;

/// Structured logging surface shared by all message types.
pub trait StructuredLog {
    /// Emit the message as a tracing event with its fields attached.
    fn log(&self);

    /// Open a span carrying the message's fields.
    fn span(&self, name: &str) -> Span;
}
