// SPDX-License-Identifier: MPL-2.0
//! Centralized widget styles.

use crate::ui::design_tokens::{palette, radius};
use iced::widget::{button, container};
use iced::{Background, Border, Theme};

pub mod buttons {
    use super::*;

    /// Style for the primary action button.
    pub fn primary(_theme: &Theme, status: button::Status) -> button::Style {
        match status {
            button::Status::Active | button::Status::Pressed => button::Style {
                background: Some(Background::Color(palette::PRIMARY_500)),
                text_color: palette::WHITE,
                border: Border {
                    color: palette::PRIMARY_600,
                    width: 1.0,
                    radius: radius::SM.into(),
                },
                ..Default::default()
            },
            button::Status::Hovered => button::Style {
                background: Some(Background::Color(palette::PRIMARY_400)),
                text_color: palette::WHITE,
                border: Border {
                    color: palette::PRIMARY_500,
                    width: 1.0,
                    radius: radius::SM.into(),
                },
                ..Default::default()
            },
            button::Status::Disabled => disabled_style(),
        }
    }

    /// Style for a disabled button (upload in flight, nothing selected).
    pub fn disabled() -> impl Fn(&Theme, button::Status) -> button::Style {
        |_theme, _status| disabled_style()
    }

    fn disabled_style() -> button::Style {
        button::Style {
            background: Some(Background::Color(palette::GRAY_200)),
            text_color: palette::GRAY_400,
            border: Border {
                radius: radius::SM.into(),
                ..Default::default()
            },
            ..Default::default()
        }
    }
}

pub mod containers {
    use super::*;

    /// Card style shared by the upload form and the preview pane.
    pub fn card(theme: &Theme) -> container::Style {
        let extended = theme.extended_palette();
        container::Style {
            background: Some(extended.background.weak.color.into()),
            border: Border {
                radius: radius::MD.into(),
                width: 1.0,
                color: extended.background.strong.color,
            },
            ..Default::default()
        }
    }

    /// Toast background tinted by the severity color.
    pub fn toast(color: iced::Color) -> impl Fn(&Theme) -> container::Style {
        move |_theme| container::Style {
            background: Some(Background::Color(iced::Color { a: 0.9, ..color })),
            text_color: Some(palette::WHITE),
            border: Border {
                radius: radius::SM.into(),
                ..Default::default()
            },
            ..Default::default()
        }
    }
}
