// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use std::fs;
use std::io;
use std::path::PathBuf;
use std::sync::atomic::{AtomicU64, Ordering};

use tempfile::TempDir;

use super::{ScratchBuffer, ScratchHandle};

/// Temp-dir backed scratch storage.
///
/// Each entry is one file under a private temporary directory, removed on
/// discard. The directory itself is removed when this value drops, so
/// nothing leaks even if a caller forgets an entry.
pub struct TempDirScratch {
    dir: TempDir,
    next_id: AtomicU64,
}

impl TempDirScratch {
    pub fn new() -> io::Result<Self> {
        Ok(Self {
            dir: tempfile::tempdir()?,
            next_id: AtomicU64::new(0),
        })
    }

    fn entry_path(&self, id: u64) -> PathBuf {
        self.dir.path().join(format!("scratch_{}.tmp", id))
    }
}

impl ScratchBuffer for TempDirScratch {
    fn write(&self, bytes: &[u8]) -> io::Result<ScratchHandle> {
        let id = self.next_id.fetch_add(1, Ordering::Relaxed);
        fs::write(self.entry_path(id), bytes)?;
        Ok(ScratchHandle(id))
    }

    fn read_all(&self, handle: &ScratchHandle) -> io::Result<Vec<u8>> {
        fs::read(self.entry_path(handle.0))
    }

    fn len(&self, handle: &ScratchHandle) -> io::Result<u64> {
        fs::metadata(self.entry_path(handle.0)).map(|meta| meta.len())
    }

    fn discard(&self, handle: ScratchHandle) {
        let _ = fs::remove_file(self.entry_path(handle.0));
    }

    fn entry_count(&self) -> usize {
        fs::read_dir(self.dir.path())
            .map(|entries| entries.count())
            .unwrap_or(0)
    }
}
