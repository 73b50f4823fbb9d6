// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.
//!
//! One column: toasts, the upload form, and (once a file is selected) the
//! preview pane, centered in the window.

use super::Message;
use crate::media::SelectedFile;
use crate::preview::PreviewState;
use crate::ui::design_tokens::spacing;
use crate::ui::{notifications, preview_pane, upload_form};
use crate::upload::UploadStatus;
use iced::widget::{Column, Container};
use iced::{alignment, Element, Length};

const CONTENT_MAX_WIDTH: f32 = 560.0;

/// Context required to render the application view.
pub struct ViewContext<'a> {
    pub selected: Option<&'a SelectedFile>,
    pub status: &'a UploadStatus,
    pub preview_state: &'a PreviewState,
    pub notifications: &'a notifications::Manager,
}

/// Renders the application view.
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let mut column = Column::new().spacing(spacing::LG).width(Length::Fill);

    if ctx.notifications.has_notifications() {
        column = column.push(notifications::view(ctx.notifications).map(Message::Notification));
    }

    column = column.push(
        upload_form::view(upload_form::ViewContext {
            selected: ctx.selected,
            status: ctx.status,
        })
        .map(Message::UploadForm),
    );

    if let Some(file) = ctx.selected {
        column = column.push(preview_pane::view(preview_pane::ViewContext {
            file,
            state: ctx.preview_state,
        }));
    }

    let content = Container::new(column)
        .max_width(CONTENT_MAX_WIDTH)
        .padding(spacing::LG);

    Container::new(content)
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(alignment::Horizontal::Center)
        .align_y(alignment::Vertical::Top)
        .into()
}
