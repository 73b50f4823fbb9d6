// SPDX-License-Identifier: MPL-2.0
//! Update logic and message handlers for the application.
//!
//! Wiring discipline: selection is the only event that touches more than one
//! component. It resets the upload status, replaces the container's file and
//! rebinds the preview, in that order, so a later submit can never observe a
//! stale outcome and two selections' previews are never live together.

use super::Message;
use crate::error::Error;
use crate::media::{self, SelectedFile};
use crate::preview::{self, BindAction, PreviewHandle, PreviewStore, SharedPreviewStore};
use crate::ui::notifications::{self, Notification};
use crate::ui::upload_form;
use crate::upload::{self, SubmitError, UploadClient, UploadError, UploadReceipt, UploadTicket};
use iced::Task;
use std::path::PathBuf;
use std::sync::{Arc, PoisonError};

/// Alert shown when submit is pressed with nothing selected.
pub const NO_FILE_SELECTED_MESSAGE: &str = "Please select a file first!";

/// Context for update operations containing references to app state.
pub struct UpdateContext<'a> {
    pub selected: &'a mut Option<Arc<SelectedFile>>,
    pub uploader: &'a mut upload::Controller,
    pub preview: &'a mut preview::Manager,
    pub preview_store: &'a Option<SharedPreviewStore>,
    pub client: &'a UploadClient,
    pub notifications: &'a mut notifications::Manager,
}

/// Handles upload form component messages.
pub fn handle_form_message(
    ctx: &mut UpdateContext<'_>,
    message: upload_form::Message,
) -> Task<Message> {
    match message {
        upload_form::Message::FilePickRequested => handle_open_file_dialog(),
        upload_form::Message::SubmitRequested => handle_submit(ctx),
    }
}

/// Opens the system file dialog, filtered to video extensions. The filter is
/// advisory; nothing validates the content.
pub fn handle_open_file_dialog() -> Task<Message> {
    Task::perform(
        async move {
            rfd::AsyncFileDialog::new()
                .add_filter("Video", media::VIDEO_EXTENSIONS)
                .pick_file()
                .await
                .map(|h| h.path().to_path_buf())
        },
        Message::FileDialogResult,
    )
}

/// Handles the dialog result. A cancelled dialog changes nothing.
pub fn handle_file_dialog_result(path: Option<PathBuf>) -> Task<Message> {
    match path {
        Some(path) => Task::perform(SelectedFile::load(path), Message::FileLoaded),
        None => Task::none(),
    }
}

/// Handles a file dropped on the window; same selection path as the picker.
pub fn handle_file_dropped(ctx: &mut UpdateContext<'_>, path: PathBuf) -> Task<Message> {
    if media::selection::is_video_path(&path) {
        Task::perform(SelectedFile::load(path), Message::FileLoaded)
    } else {
        ctx.notifications
            .push(Notification::warning("Only video files can be uploaded"));
        Task::none()
    }
}

/// Publishes a freshly loaded selection: reset status, replace the file,
/// rebind the preview.
pub fn handle_file_loaded(
    ctx: &mut UpdateContext<'_>,
    result: Result<SelectedFile, Error>,
) -> Task<Message> {
    match result {
        Ok(file) => {
            let file = Arc::new(file);
            ctx.uploader.reset();
            *ctx.selected = Some(Arc::clone(&file));

            if ctx.preview_store.is_none() {
                // Degraded mode, warned about at boot: upload still works.
                return Task::none();
            }
            match ctx.preview.begin_bind(&file) {
                BindAction::AlreadyBound => Task::none(),
                BindAction::Acquire {
                    generation,
                    superseded,
                } => {
                    if let Some(stale) = superseded {
                        release_now(ctx.preview_store, stale);
                    }
                    stage_preview(ctx.preview_store, &file, generation)
                }
            }
        }
        Err(error) => {
            ctx.notifications
                .push(Notification::error(format!("Could not read file: {error}")));
            Task::none()
        }
    }
}

/// Submits the current selection through the upload client.
pub fn handle_submit(ctx: &mut UpdateContext<'_>) -> Task<Message> {
    match ctx.uploader.begin_submit(ctx.selected.as_ref()) {
        Ok(ticket) => {
            let Some(file) = ctx.selected.clone() else {
                // begin_submit only succeeds with a selection bound
                return Task::none();
            };
            let client = ctx.client.clone();
            Task::perform(
                async move { client.upload(file).await },
                move |result| Message::UploadFinished { ticket, result },
            )
        }
        Err(SubmitError::NoFileSelected) => {
            ctx.notifications
                .push(Notification::error(NO_FILE_SELECTED_MESSAGE));
            Task::none()
        }
        // Uploading is a blocking state; a second submit is a documented
        // no-op at the controller boundary.
        Err(SubmitError::UploadInFlight) => Task::none(),
    }
}

/// Records the outcome of an upload attempt. Stale tickets are dropped by
/// the controller.
pub fn handle_upload_finished(
    ctx: &mut UpdateContext<'_>,
    ticket: UploadTicket,
    result: Result<UploadReceipt, UploadError>,
) -> Task<Message> {
    ctx.uploader.finish(ticket, result);
    Task::none()
}

/// Claims a staged preview copy and exposes it, unless it went stale while
/// being written.
pub fn handle_preview_staged(
    ctx: &mut UpdateContext<'_>,
    generation: u64,
    result: Result<(), Error>,
) -> Task<Message> {
    match result {
        Ok(()) => {
            let Some(store) = ctx.preview_store else {
                return Task::none();
            };
            let claimed = store
                .lock()
                .unwrap_or_else(PoisonError::into_inner)
                .claim(generation);
            if let Some(handle) = claimed {
                if let Some(stale) = ctx.preview.bind_ready(generation, handle) {
                    release_now(ctx.preview_store, stale);
                }
            }
            Task::none()
        }
        Err(error) => {
            ctx.preview.bind_failed(generation);
            ctx.notifications.push(Notification::error(format!(
                "Could not prepare preview: {error}"
            )));
            Task::none()
        }
    }
}

/// Releases the preview exactly once, then closes the window.
pub fn handle_close_requested(
    ctx: &mut UpdateContext<'_>,
    id: iced::window::Id,
) -> Task<Message> {
    if let Some(handle) = ctx.preview.unbind() {
        release_now(ctx.preview_store, handle);
    }
    iced::window::close(id)
}

/// Writes the preview copy on a blocking task and parks the handle in the
/// store under `generation`.
fn stage_preview(
    store: &Option<SharedPreviewStore>,
    file: &Arc<SelectedFile>,
    generation: u64,
) -> Task<Message> {
    let Some(store) = store else {
        return Task::none();
    };
    let store = Arc::clone(store);
    let file = Arc::clone(file);

    Task::perform(
        async move {
            tokio::task::spawn_blocking(move || {
                let mut store = store.lock().unwrap_or_else(PoisonError::into_inner);
                store.stage(generation, &file)
            })
            .await
            .map_err(|e| Error::Io(e.to_string()))?
        },
        move |result| Message::PreviewStaged { generation, result },
    )
}

/// Destroys a handle's backing copy synchronously. Removing one scratch file
/// is cheap enough for the UI thread.
fn release_now(store: &Option<SharedPreviewStore>, handle: PreviewHandle) {
    if let Some(store) = store {
        store
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .release(handle);
    }
}
