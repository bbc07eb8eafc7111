// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use std::collections::HashMap;
use std::io;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Mutex, PoisonError};

use super::{ScratchBuffer, ScratchHandle};

/// In-memory scratch storage.
///
/// Deterministic and isolated; the default choice for tests.
#[derive(Default)]
pub struct MemoryScratch {
    entries: Mutex<HashMap<u64, Vec<u8>>>,
    next_id: AtomicU64,
}

impl MemoryScratch {
    pub fn new() -> Self {
        Self::default()
    }

    fn entries(&self) -> std::sync::MutexGuard<'_, HashMap<u64, Vec<u8>>> {
        self.entries.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl ScratchBuffer for MemoryScratch {
    fn write(&self, bytes: &[u8]) -> io::Result<ScratchHandle> {
        let id = self.next_id.fetch_add(1, Ordering::Relaxed);
        self.entries().insert(id, bytes.to_vec());
        Ok(ScratchHandle(id))
    }

    fn read_all(&self, handle: &ScratchHandle) -> io::Result<Vec<u8>> {
        self.entries()
            .get(&handle.0)
            .cloned()
            .ok_or_else(|| io::Error::new(io::ErrorKind::NotFound, "scratch entry discarded"))
    }

    fn len(&self, handle: &ScratchHandle) -> io::Result<u64> {
        self.entries()
            .get(&handle.0)
            .map(|bytes| bytes.len() as u64)
            .ok_or_else(|| io::Error::new(io::ErrorKind::NotFound, "scratch entry discarded"))
    }

    fn discard(&self, handle: ScratchHandle) {
        self.entries().remove(&handle.0);
    }

    fn entry_count(&self) -> usize {
        self.entries().len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_trip_preserves_content() {
        let scratch = MemoryScratch::new();
        let handle = scratch.write(b"hello scratch").unwrap();

        assert_eq!(scratch.read_all(&handle).unwrap(), b"hello scratch");
        assert_eq!(scratch.len(&handle).unwrap(), 13);
    }

    #[test]
    fn discard_removes_entry() {
        let scratch = MemoryScratch::new();
        let handle = scratch.write(b"gone soon").unwrap();
        assert_eq!(scratch.entry_count(), 1);

        scratch.discard(handle);
        assert_eq!(scratch.entry_count(), 0);
        assert!(scratch.read_all(&handle).is_err());
    }

    #[test]
    fn entries_are_independent() {
        let scratch = MemoryScratch::new();
        let first = scratch.write(b"first").unwrap();
        let second = scratch.write(b"second").unwrap();

        scratch.discard(first);
        assert_eq!(scratch.read_all(&second).unwrap(), b"second");
    }
}
