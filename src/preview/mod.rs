// SPDX-License-Identifier: MPL-2.0
//! Local preview resources.
//!
//! A preview is a short-lived playable copy of the selected file's bytes,
//! represented by an opaque [`PreviewHandle`]. Handles are deliberately not
//! `Clone`: whoever holds one owns the underlying resource, and giving it
//! back to the store is the only way to destroy it, so a double release is
//! unrepresentable.

pub mod manager;
pub mod store;

pub use manager::{BindAction, Manager, PreviewState};
pub use store::{create_store, ScratchStore, SharedPreviewStore};

use crate::error::Result;
use crate::media::SelectedFile;
use std::path::{Path, PathBuf};

/// Opaque, time-bounded reference to a playable local copy of a selection.
///
/// The handle carries the filesystem path a renderer can play from; it says
/// nothing about how the copy came to exist.
#[derive(Debug)]
pub struct PreviewHandle {
    id: u64,
    path: PathBuf,
}

impl PreviewHandle {
    #[must_use]
    pub fn new(id: u64, path: PathBuf) -> Self {
        Self { id, path }
    }

    #[must_use]
    pub fn id(&self) -> u64 {
        self.id
    }

    /// Path a renderer can play the copy from.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

/// Port for preview resource stores.
///
/// `acquire` materializes a playable copy of the selection and `release`
/// destroys it. Implementations must tolerate `release` for a handle whose
/// backing file already vanished, but callers guarantee each handle is
/// released at most once because handles move.
pub trait PreviewStore: Send {
    /// Creates a playable copy of the selection's bytes.
    ///
    /// # Errors
    ///
    /// Returns an I/O error if the copy cannot be written.
    fn acquire(&mut self, file: &SelectedFile) -> Result<PreviewHandle>;

    /// Destroys the copy behind the handle.
    fn release(&mut self, handle: PreviewHandle);

    /// Number of copies currently alive.
    fn live_count(&self) -> usize;
}
