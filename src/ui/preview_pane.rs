// SPDX-License-Identifier: MPL-2.0
//! Preview pane: shows the state of the local playable copy.
//!
//! The pane is hidden entirely while nothing is selected (the app root skips
//! it); with a selection it shows a loading line until the copy is ready,
//! then the playable source. Rendering the actual video stream is the
//! player's job, not this component's; the pane exposes where to play from.

use crate::media::SelectedFile;
use crate::preview::PreviewState;
use crate::ui::design_tokens::{palette, spacing, typography};
use crate::ui::styles;
use iced::widget::{Column, Container, Text};
use iced::{alignment, Element, Length};

/// Contextual data needed to render the pane.
pub struct ViewContext<'a> {
    pub file: &'a SelectedFile,
    pub state: &'a PreviewState,
}

/// Renders the preview card. Emits no messages of its own.
pub fn view<'a, Message: 'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let title = Text::new("Video Preview")
        .size(typography::TITLE)
        .color(palette::PRIMARY_700);

    let body: Element<'a, Message> = match ctx.state {
        PreviewState::Ready { handle, .. } => Column::new()
            .spacing(spacing::XS)
            .align_x(alignment::Horizontal::Center)
            .push(
                Text::new(format!("{} ({})", ctx.file.name(), ctx.file.size_display()))
                    .size(typography::BODY_LG),
            )
            .push(
                Text::new(format!("Playing from {}", handle.path().display()))
                    .size(typography::CAPTION)
                    .color(palette::GRAY_400),
            )
            .into(),
        PreviewState::Pending { .. } | PreviewState::Empty => Text::new("Loading video...")
            .size(typography::BODY)
            .color(palette::GRAY_400)
            .into(),
    };

    let content = Column::new()
        .spacing(spacing::MD)
        .align_x(alignment::Horizontal::Center)
        .push(title)
        .push(body);

    Container::new(content)
        .padding(spacing::LG)
        .width(Length::Fill)
        .style(styles::containers::card)
        .into()
}
