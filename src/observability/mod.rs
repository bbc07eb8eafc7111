// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Observability module for the durable log sink and structured messages.
//!
//! Processor log lines have two destinations: the durable `LogSink`
//! (an append-only file in production, an in-memory recorder in tests)
//! and the console, mirrored through `tracing` via the message types in
//! `messages`. Sink failures are swallowed by the processor support code;
//! validate/process never fail because of logging.

pub mod messages;

mod sink;

pub use sink::{FileLogSink, LogSink, MemoryLogSink};

use tracing_subscriber::EnvFilter;

/// Install the global fmt subscriber with env-filter support.
///
/// Idempotent; later calls are ignored so tests can call it freely.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .try_init();
}
