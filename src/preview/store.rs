// SPDX-License-Identifier: MPL-2.0
//! Temp-file backed preview store.
//!
//! The store owns a scratch directory (removed on drop, so process exit never
//! leaks copies) and writes one file per acquired preview. Acquisition runs
//! on a blocking task because payloads can be large; the staged map lets that
//! task park the finished handle until the UI thread claims it, keeping
//! [`PreviewHandle`] move-only end to end.

use super::{PreviewHandle, PreviewStore};
use crate::error::Result;
use crate::media::SelectedFile;
use std::collections::{HashMap, HashSet};
use std::fs;
use std::sync::{Arc, Mutex};
use tempfile::TempDir;

/// Store shared between the UI thread and blocking acquisition tasks.
pub type SharedPreviewStore = Arc<Mutex<ScratchStore>>;

/// Creates a shared scratch store.
///
/// # Errors
///
/// Returns an I/O error if the scratch directory cannot be created.
pub fn create_store() -> Result<SharedPreviewStore> {
    Ok(Arc::new(Mutex::new(ScratchStore::new()?)))
}

/// Preview store writing playable copies into a private temp directory.
#[derive(Debug)]
pub struct ScratchStore {
    scratch: TempDir,
    next_id: u64,
    live: HashSet<u64>,
    staged: HashMap<u64, PreviewHandle>,
}

impl ScratchStore {
    /// Creates a store with a fresh scratch directory.
    ///
    /// # Errors
    ///
    /// Returns an I/O error if the directory cannot be created.
    pub fn new() -> Result<Self> {
        Ok(Self {
            scratch: tempfile::tempdir()?,
            next_id: 0,
            live: HashSet::new(),
            staged: HashMap::new(),
        })
    }

    /// Acquires a copy and parks the handle under `generation` until the
    /// manager claims it.
    ///
    /// # Errors
    ///
    /// Returns an I/O error if the copy cannot be written.
    pub fn stage(&mut self, generation: u64, file: &SelectedFile) -> Result<()> {
        let handle = self.acquire(file)?;
        self.staged.insert(generation, handle);
        Ok(())
    }

    /// Takes the handle staged under `generation`, if any.
    pub fn claim(&mut self, generation: u64) -> Option<PreviewHandle> {
        self.staged.remove(&generation)
    }
}

impl PreviewStore for ScratchStore {
    fn acquire(&mut self, file: &SelectedFile) -> Result<PreviewHandle> {
        let id = self.next_id;
        self.next_id += 1;

        // File names come from the user; keep only the final component.
        let safe_name = file
            .name()
            .rsplit(['/', '\\'])
            .next()
            .unwrap_or("video")
            .to_string();
        let path = self.scratch.path().join(format!("{id:04}-{safe_name}"));
        fs::write(&path, file.payload())?;

        self.live.insert(id);
        Ok(PreviewHandle::new(id, path))
    }

    fn release(&mut self, handle: PreviewHandle) {
        self.live.remove(&handle.id());
        // The scratch dir may already be gone during shutdown.
        let _ = fs::remove_file(handle.path());
    }

    fn live_count(&self) -> usize {
        self.live.len()
    }
}
