// SPDX-License-Identifier: MPL-2.0
//! Upload form component: file picker trigger, submit button, status line.
//!
//! Stateless; everything it shows comes from the app root through
//! [`ViewContext`]. Selecting and submitting are separate acts: the picker
//! button only publishes a selection, the upload button only submits the
//! current one.

use crate::media::SelectedFile;
use crate::ui::design_tokens::{palette, spacing, typography};
use crate::ui::styles;
use iced::widget::{button, Column, Container, Text};
use iced::{alignment, Element, Length};

/// Contextual data needed to render the form.
pub struct ViewContext<'a> {
    pub selected: Option<&'a SelectedFile>,
    pub status: &'a crate::upload::UploadStatus,
}

/// Messages emitted by the form.
#[derive(Debug, Clone)]
pub enum Message {
    /// Open the system file dialog.
    FilePickRequested,
    /// Submit the current selection.
    SubmitRequested,
}

/// Human-readable status line for the current upload status, or `None` when
/// idle. Each non-idle status maps to a distinct message and failures are
/// never empty.
#[must_use]
pub fn status_line(status: &crate::upload::UploadStatus) -> Option<String> {
    use crate::upload::UploadStatus;

    match status {
        UploadStatus::Idle => None,
        UploadStatus::Uploading => Some("Uploading...".to_string()),
        UploadStatus::Success { video_id } => {
            Some(format!("Uploaded successfully! Video ID: {video_id}"))
        }
        UploadStatus::Failure { message } => Some(message.clone()),
    }
}

/// Caption under the picker, e.g. `"Selected: lecture.mp4 (10.00 MB)"`.
#[must_use]
pub fn selected_caption(file: &SelectedFile) -> String {
    format!("Selected: {} ({})", file.name(), file.size_display())
}

/// Renders the upload form card.
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let uploading = ctx.status == &crate::upload::UploadStatus::Uploading;

    let title = Text::new("Upload Lecture Video")
        .size(typography::TITLE)
        .color(palette::PRIMARY_700);

    let pick_button = button(Text::new("Choose Video..."))
        .padding([spacing::SM, spacing::LG])
        .style(styles::buttons::primary)
        .on_press(Message::FilePickRequested);

    let mut content = Column::new()
        .spacing(spacing::MD)
        .align_x(alignment::Horizontal::Center)
        .push(title)
        .push(pick_button);

    if let Some(file) = ctx.selected {
        content = content.push(
            Text::new(selected_caption(file))
                .size(typography::BODY)
                .color(palette::GRAY_700),
        );
    }

    let upload_label = if uploading {
        "Uploading..."
    } else {
        "Upload to Server"
    };
    let upload_button = if uploading {
        button(Text::new(upload_label))
            .padding([spacing::SM, spacing::LG])
            .style(styles::buttons::disabled())
    } else {
        button(Text::new(upload_label))
            .padding([spacing::SM, spacing::LG])
            .style(styles::buttons::primary)
            .on_press(Message::SubmitRequested)
    };
    content = content.push(upload_button);

    if let Some(line) = status_line(ctx.status) {
        content = content.push(
            Text::new(line)
                .size(typography::BODY)
                .color(palette::GRAY_700),
        );
    }

    Container::new(content)
        .padding(spacing::LG)
        .width(Length::Fill)
        .style(styles::containers::card)
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::upload::UploadStatus;

    #[test]
    fn idle_has_no_status_line() {
        assert_eq!(status_line(&UploadStatus::Idle), None);
    }

    #[test]
    fn uploading_status_line() {
        assert_eq!(
            status_line(&UploadStatus::Uploading),
            Some("Uploading...".to_string())
        );
    }

    #[test]
    fn success_status_line_includes_video_id() {
        let status = UploadStatus::Success {
            video_id: "v-42".to_string(),
        };
        assert_eq!(
            status_line(&status),
            Some("Uploaded successfully! Video ID: v-42".to_string())
        );
    }

    #[test]
    fn failure_status_line_shows_the_message_verbatim() {
        let status = UploadStatus::Failure {
            message: "File too large".to_string(),
        };
        assert_eq!(status_line(&status), Some("File too large".to_string()));
    }

    #[test]
    fn selected_caption_shows_name_and_size() {
        let file = SelectedFile::new("lecture.mp4", vec![0u8; 10_485_760]);
        assert_eq!(selected_caption(&file), "Selected: lecture.mp4 (10.00 MB)");
    }

    #[test]
    fn form_renders_without_selection() {
        let ctx = ViewContext {
            selected: None,
            status: &UploadStatus::Idle,
        };
        let _element = view(ctx);
    }

    #[test]
    fn form_renders_while_uploading() {
        let file = SelectedFile::new("lecture.mp4", vec![0u8; 64]);
        let ctx = ViewContext {
            selected: Some(&file),
            status: &UploadStatus::Uploading,
        };
        let _element = view(ctx);
    }
}
