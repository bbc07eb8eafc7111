// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use std::io;
use std::sync::Arc;

use crate::config::{Config, ScratchBackend};
use crate::observability::FileLogSink;
use crate::processors::ProcessorContext;
use crate::scratch::{MemoryScratch, ScratchBuffer, TempDirScratch};

/// Builds runtime components from a loaded configuration
pub struct RuntimeBuilder;

impl RuntimeBuilder {
    /// Wire a processor support context from configuration.
    ///
    /// Fails only if the temp-dir scratch backend cannot create its
    /// backing directory.
    pub fn from_config(config: &Config) -> io::Result<Arc<ProcessorContext>> {
        let scratch: Arc<dyn ScratchBuffer> = match config.scratch.backend {
            ScratchBackend::Memory => Arc::new(MemoryScratch::new()),
            ScratchBackend::TempDir => Arc::new(TempDirScratch::new()?),
        };
        let sink = Arc::new(FileLogSink::new(config.logging.log_file_path()));

        Ok(Arc::new(
            ProcessorContext::new(sink, scratch)
                .with_slow_op_delay(config.runtime.slow_op_delay()),
        ))
    }
}
