// SPDX-License-Identifier: MPL-2.0
//! Integration tests for the upload lifecycle as the user sees it: status
//! transitions through the controller and the exact strings the form renders
//! for each outcome.

use iced_courier::media::SelectedFile;
use iced_courier::ui::upload_form;
use iced_courier::upload::{
    Controller, SubmitError, UploadError, UploadReceipt, UploadStatus, UPLOAD_FAILED_FALLBACK,
};
use std::sync::Arc;

fn selection() -> Arc<SelectedFile> {
    Arc::new(SelectedFile::new("lecture.mp4", vec![0u8; 1024]))
}

#[test]
fn test_submit_without_selection_never_leaves_idle() {
    let mut controller = Controller::new();

    assert_eq!(controller.begin_submit(None), Err(SubmitError::NoFileSelected));
    assert_eq!(controller.status(), &UploadStatus::Idle);
    assert_eq!(upload_form::status_line(controller.status()), None);
}

#[test]
fn test_successful_upload_renders_the_video_id() {
    let mut controller = Controller::new();
    let file = selection();
    let ticket = controller
        .begin_submit(Some(&file))
        .expect("submit should be accepted");

    assert_eq!(
        upload_form::status_line(controller.status()),
        Some("Uploading...".to_string())
    );

    controller.finish(
        ticket,
        Ok(UploadReceipt {
            video_id: "abc123".to_string(),
        }),
    );
    assert_eq!(
        upload_form::status_line(controller.status()),
        Some("Uploaded successfully! Video ID: abc123".to_string())
    );
}

#[test]
fn test_structured_rejection_renders_the_server_message() {
    let mut controller = Controller::new();
    let file = selection();
    let ticket = controller
        .begin_submit(Some(&file))
        .expect("submit should be accepted");

    controller.finish(
        ticket,
        Err(UploadError::Server {
            message: "File too large".to_string(),
        }),
    );
    assert_eq!(
        upload_form::status_line(controller.status()),
        Some("File too large".to_string())
    );
}

#[test]
fn test_unreachable_backend_renders_the_fallback() {
    let mut controller = Controller::new();
    let file = selection();
    let ticket = controller
        .begin_submit(Some(&file))
        .expect("submit should be accepted");

    controller.finish(
        ticket,
        Err(UploadError::Transport("connection refused".to_string())),
    );
    assert_eq!(
        upload_form::status_line(controller.status()),
        Some(UPLOAD_FAILED_FALLBACK.to_string())
    );
}

#[test]
fn test_double_submit_is_refused_while_in_flight() {
    let mut controller = Controller::new();
    let file = selection();
    controller
        .begin_submit(Some(&file))
        .expect("first submit should be accepted");

    assert_eq!(
        controller.begin_submit(Some(&file)),
        Err(SubmitError::UploadInFlight)
    );
    assert!(controller.is_uploading());
}

#[test]
fn test_reset_invalidates_the_outstanding_attempt() {
    let mut controller = Controller::new();
    let file = selection();
    let ticket = controller
        .begin_submit(Some(&file))
        .expect("submit should be accepted");

    controller.reset();
    let applied = controller.finish(
        ticket,
        Ok(UploadReceipt {
            video_id: "stale".to_string(),
        }),
    );

    assert!(!applied);
    assert_eq!(controller.status(), &UploadStatus::Idle);
}

#[test]
fn test_selected_caption_includes_name_and_size() {
    let file = SelectedFile::new("lecture.mp4", vec![0u8; 10 * 1024 * 1024]);
    assert_eq!(
        upload_form::selected_caption(&file),
        "Selected: lecture.mp4 (10.00 MB)"
    );
}
