// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration between selection, preview and
//! upload.
//!
//! The `App` struct wires together the domains (selection container, preview
//! manager, upload controller) and translates messages into side effects like
//! file loading, preview staging or the upload call. Cross-component policy
//! (selection resets the upload status, close releases the preview) lives in
//! `update` so user-facing behavior is easy to audit in one place.

mod message;
mod subscription;
mod update;
mod view;

pub use message::{Flags, Message};
pub use update::NO_FILE_SELECTED_MESSAGE;

use crate::config;
use crate::media::SelectedFile;
use crate::preview::{self, create_store, SharedPreviewStore};
use crate::ui::notifications;
use crate::upload::{self, UploadClient};
use iced::{window, Element, Subscription, Task, Theme};
use std::fmt;
use std::sync::Arc;

/// Root Iced application state bridging the UI components and the domains
/// they observe.
pub struct App {
    /// The one selection slot; components borrow it, never own it.
    selected: Option<Arc<SelectedFile>>,
    uploader: upload::Controller,
    preview: preview::Manager,
    /// Scratch-file store backing previews. `None` when the scratch
    /// directory could not be created; the app then runs without previews.
    preview_store: Option<SharedPreviewStore>,
    client: UploadClient,
    /// Toast notification manager for user feedback.
    notifications: notifications::Manager,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("selected", &self.selected.as_ref().map(|f| f.name()))
            .field("status", self.uploader.status())
            .finish()
    }
}

pub const WINDOW_DEFAULT_HEIGHT: u32 = 720;
pub const WINDOW_DEFAULT_WIDTH: u32 = 640;
pub const MIN_WINDOW_HEIGHT: u32 = 560;
pub const MIN_WINDOW_WIDTH: u32 = 480;

/// Builds the window settings. Close requests are intercepted so the preview
/// can be released before the window goes away.
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        min_size: Some(iced::Size::new(
            MIN_WINDOW_WIDTH as f32,
            MIN_WINDOW_HEIGHT as f32,
        )),
        exit_on_close_request: false,
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // Wrap flags in RefCell<Option<_>> to satisfy the Fn trait requirement
    // while only consuming flags once (iced 0.14 requires Fn, not FnOnce)
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state
            .borrow_mut()
            .take()
            .expect("Boot function called more than once");
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl Default for App {
    fn default() -> Self {
        Self {
            selected: None,
            uploader: upload::Controller::new(),
            preview: preview::Manager::new(),
            preview_store: create_store().ok(),
            client: UploadClient::new(config::DEFAULT_SERVER_URL),
            notifications: notifications::Manager::new(),
        }
    }
}

impl App {
    /// Initializes application state and optionally kicks off asynchronous
    /// file loading based on `Flags` received from the launcher.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let mut app = Self::default();

        let server_url = match config::load() {
            Ok(config) => flags
                .server_url
                .unwrap_or_else(|| config.server_url().to_string()),
            Err(error) => {
                app.notifications.push(notifications::Notification::warning(
                    format!("Could not load settings: {error}"),
                ));
                flags
                    .server_url
                    .unwrap_or_else(|| config::DEFAULT_SERVER_URL.to_string())
            }
        };
        app.client = UploadClient::new(server_url);

        if app.preview_store.is_none() {
            app.notifications.push(notifications::Notification::warning(
                "Previews are unavailable: no scratch directory",
            ));
        }

        let task = match flags.file_path {
            Some(path_str) => {
                let path = std::path::PathBuf::from(path_str);
                Task::perform(SelectedFile::load(path), Message::FileLoaded)
            }
            None => Task::none(),
        };

        (app, task)
    }

    fn title(&self) -> String {
        match &self.selected {
            Some(file) => format!("{} - IcedCourier", file.name()),
            None => "IcedCourier".to_string(),
        }
    }

    fn theme(&self) -> Theme {
        Theme::Light
    }

    fn subscription(&self) -> Subscription<Message> {
        let event_sub = subscription::create_event_subscription();
        let tick_sub =
            subscription::create_tick_subscription(self.notifications.has_notifications());

        Subscription::batch([event_sub, tick_sub])
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        let mut ctx = update::UpdateContext {
            selected: &mut self.selected,
            uploader: &mut self.uploader,
            preview: &mut self.preview,
            preview_store: &self.preview_store,
            client: &self.client,
            notifications: &mut self.notifications,
        };

        match message {
            Message::UploadForm(form_message) => {
                update::handle_form_message(&mut ctx, form_message)
            }
            Message::FileDialogResult(path) => update::handle_file_dialog_result(path),
            Message::FileDropped(path) => update::handle_file_dropped(&mut ctx, path),
            Message::FileLoaded(result) => update::handle_file_loaded(&mut ctx, result),
            Message::PreviewStaged { generation, result } => {
                update::handle_preview_staged(&mut ctx, generation, result)
            }
            Message::UploadFinished { ticket, result } => {
                update::handle_upload_finished(&mut ctx, ticket, result)
            }
            Message::WindowCloseRequested(id) => update::handle_close_requested(&mut ctx, id),
            Message::Notification(notification_message) => {
                self.notifications.handle_message(&notification_message);
                Task::none()
            }
            Message::Tick(_) => {
                self.notifications.tick();
                Task::none()
            }
        }
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            selected: self.selected.as_deref(),
            status: self.uploader.status(),
            preview_state: self.preview.state(),
            notifications: &self.notifications,
        })
    }
}
