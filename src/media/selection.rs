// SPDX-License-Identifier: MPL-2.0
//! The selected-file value type.
//!
//! A [`SelectedFile`] is produced once per user selection and never mutated
//! afterwards; picking a new file replaces the value wholesale. The app root
//! owns it behind an `Arc` so the upload controller and preview manager can
//! reference the same bytes without taking ownership.

use crate::error::Result;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicU64, Ordering};

/// File extensions offered by the picker. The filter is advisory only: the
/// backend receives whatever bytes the user chose, unvalidated.
pub const VIDEO_EXTENSIONS: &[&str] = &["mp4", "m4v", "mov", "mkv", "webm", "avi"];

const FALLBACK_MIME: &str = "application/octet-stream";

/// Process-unique identity of one selection.
///
/// Two selections of the same path still get distinct IDs; equality means
/// "the same act of choosing", which is what the preview manager compares to
/// avoid churning its resource on a redundant bind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SelectionId(u64);

impl SelectionId {
    /// Creates a new unique selection ID.
    pub fn new() -> Self {
        static COUNTER: AtomicU64 = AtomicU64::new(0);
        Self(COUNTER.fetch_add(1, Ordering::Relaxed))
    }
}

impl Default for SelectionId {
    fn default() -> Self {
        Self::new()
    }
}

/// The user's chosen local file: payload plus the metadata the form and the
/// multipart request need.
#[derive(Debug, Clone)]
pub struct SelectedFile {
    id: SelectionId,
    name: String,
    size: u64,
    mime: String,
    payload: Vec<u8>,
}

impl SelectedFile {
    /// Builds a selection from an in-memory payload.
    #[must_use]
    pub fn new(name: impl Into<String>, payload: Vec<u8>) -> Self {
        let name = name.into();
        let mime = mime_for_path(Path::new(&name)).to_string();
        Self {
            id: SelectionId::new(),
            size: payload.len() as u64,
            name,
            mime,
            payload,
        }
    }

    /// Reads a file from disk into a fresh selection.
    ///
    /// # Errors
    ///
    /// Returns an I/O error if the file cannot be read.
    pub async fn load(path: PathBuf) -> Result<Self> {
        let payload = tokio::fs::read(&path).await?;
        let name = path
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or("video")
            .to_string();
        Ok(Self::new(name, payload))
    }

    #[must_use]
    pub fn id(&self) -> SelectionId {
        self.id
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Payload size in bytes.
    #[must_use]
    pub fn size(&self) -> u64 {
        self.size
    }

    #[must_use]
    pub fn mime(&self) -> &str {
        &self.mime
    }

    #[must_use]
    pub fn payload(&self) -> &[u8] {
        &self.payload
    }

    /// Human-readable size in binary megabytes, e.g. `"10.00 MB"`.
    #[must_use]
    pub fn size_display(&self) -> String {
        format!("{:.2} MB", self.size as f64 / (1024.0 * 1024.0))
    }
}

/// Returns whether the path carries one of the picker's video extensions.
/// Used to filter window file-drop events.
#[must_use]
pub fn is_video_path(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .map(|ext| {
            let ext = ext.to_ascii_lowercase();
            VIDEO_EXTENSIONS.contains(&ext.as_str())
        })
        .unwrap_or(false)
}

/// Guesses a MIME type from the file extension.
fn mime_for_path(path: &Path) -> &'static str {
    match path
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_ascii_lowercase)
        .as_deref()
    {
        Some("mp4") | Some("m4v") => "video/mp4",
        Some("mov") => "video/quicktime",
        Some("mkv") => "video/x-matroska",
        Some("webm") => "video/webm",
        Some("avi") => "video/x-msvideo",
        _ => FALLBACK_MIME,
    }
}
