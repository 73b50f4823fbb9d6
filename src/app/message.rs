// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::error::Error;
use crate::media::SelectedFile;
use crate::ui::notifications;
use crate::ui::upload_form;
use crate::upload::{UploadError, UploadReceipt, UploadTicket};
use std::path::PathBuf;
use std::time::Instant;

/// Top-level messages consumed by `App::update`. The variants forward
/// component messages and deliver the results of asynchronous tasks.
#[derive(Debug, Clone)]
pub enum Message {
    /// Upload form interactions (pick, submit).
    UploadForm(upload_form::Message),
    /// Toast dismissals.
    Notification(notifications::Message),
    /// Result from the open file dialog; `None` means cancelled.
    FileDialogResult(Option<PathBuf>),
    /// A file was dropped on the window.
    FileDropped(PathBuf),
    /// The chosen file finished loading from disk.
    FileLoaded(Result<SelectedFile, Error>),
    /// A preview copy finished being written; the handle waits in the store
    /// under `generation` until claimed.
    PreviewStaged {
        generation: u64,
        result: Result<(), Error>,
    },
    /// The upload attempt identified by `ticket` finished.
    UploadFinished {
        ticket: UploadTicket,
        result: Result<UploadReceipt, UploadError>,
    },
    /// Window close was requested; release the preview before closing.
    WindowCloseRequested(iced::window::Id),
    /// Periodic tick for notification auto-dismiss.
    Tick(Instant),
}

/// Runtime flags passed in from the CLI to tweak startup behavior.
#[derive(Debug, Default)]
pub struct Flags {
    /// Optional upload backend base URL, overriding the config file.
    pub server_url: Option<String>,
    /// Optional video path to preselect on startup.
    pub file_path: Option<String>,
}
