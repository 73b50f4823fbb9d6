// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the application.

use super::Message;
use iced::{event, time, Subscription};
use std::time::Duration;

/// Routes native window events: close requests (for preview cleanup) and
/// file drops (alternate selection path).
pub fn create_event_subscription() -> Subscription<Message> {
    event::listen_with(|event, _status, window_id| match event {
        event::Event::Window(iced::window::Event::CloseRequested) => {
            Some(Message::WindowCloseRequested(window_id))
        }
        event::Event::Window(iced::window::Event::FileDropped(path)) => {
            Some(Message::FileDropped(path))
        }
        _ => None,
    })
}

/// Periodic tick driving notification auto-dismiss; idle when there is
/// nothing to dismiss.
pub fn create_tick_subscription(has_notifications: bool) -> Subscription<Message> {
    if has_notifications {
        time::every(Duration::from_millis(250)).map(Message::Tick)
    } else {
        Subscription::none()
    }
}
