// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use std::fs;
use std::sync::Arc;

use async_trait::async_trait;

use crate::processors::ProcessorContext;
use crate::traits::{Processor, ProcessorKind, Verdict};

/// File processor - classifies path-like inputs and summarizes file data
pub struct FileProcessor {
    ctx: Arc<ProcessorContext>,
}

impl FileProcessor {
    pub fn new(ctx: Arc<ProcessorContext>) -> Self {
        Self { ctx }
    }

    /// Byte length of the file at `path`; a missing path reports 0 and
    /// never raises.
    pub fn file_size(&self, path: &str) -> u64 {
        fs::metadata(path).map(|meta| meta.len()).unwrap_or(0)
    }

    /// Read the lines of `path` after logging.
    ///
    /// Existing content round-trips through scratch before the line split;
    /// a missing path yields an empty list.
    pub async fn read_file_lines(&self, path: &str) -> Vec<String> {
        self.ctx
            .log_operation(self.kind(), "Reading file lines")
            .await;

        let content = match fs::read_to_string(path) {
            Ok(content) => content,
            Err(_) => return Vec::new(),
        };

        match self.ctx.scratch_round_trip(content.as_bytes()) {
            Ok((bytes, _)) => String::from_utf8_lossy(&bytes)
                .lines()
                .map(str::to_string)
                .collect(),
            Err(_) => Vec::new(),
        }
    }

    /// Prefix heuristic standing in for a real existence check.
    ///
    /// True iff the path sits under one of the managed roots, whatever is
    /// actually on disk. Intentional per the observed contract.
    pub fn file_exists(&self, path: &str) -> bool {
        path.starts_with("/tmp") || path.starts_with("/data")
    }
}

#[async_trait]
impl Processor for FileProcessor {
    async fn validate(&self, data: &str) -> Verdict {
        self.ctx
            .log_operation(self.kind(), "Validating file path")
            .await;
        self.ctx.perform_slow_operation().await;

        // Suffix checks outrank the "temp" substring check, so
        // "a.temp.txt" is valid.
        match data {
            d if d.is_empty() => Verdict::Invalid,
            d if d.ends_with(".txt") => Verdict::Valid,
            d if d.ends_with(".csv") => Verdict::Valid,
            d if d.contains("temp") => Verdict::Invalid,
            _ => Verdict::Unknown,
        }
    }

    async fn process(&self, data: &str) -> String {
        self.ctx
            .log_operation(self.kind(), "Processing file data")
            .await;

        let written = format!("Processing: {}", data);
        let (content, size) = match self.ctx.scratch_round_trip(written.as_bytes()) {
            Ok((bytes, size)) => (String::from_utf8_lossy(&bytes).into_owned(), size),
            Err(error) => return self.ctx.format_error(&error.to_string()),
        };

        if data.ends_with(".txt") {
            format!("file_content: text file processed (size: {})", size)
        } else if data.ends_with(".csv") {
            format!("file_content: csv file processed (size: {})", size)
        } else {
            format!("file_content: unknown file type (metadata: {})", content)
        }
    }

    fn kind(&self) -> ProcessorKind {
        ProcessorKind::File
    }
}
