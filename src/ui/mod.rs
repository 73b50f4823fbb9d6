// SPDX-License-Identifier: MPL-2.0
//! UI components: stateless view functions plus the toast notification
//! manager. Components emit their own `Message` type; the app root maps them
//! into top-level messages.

pub mod design_tokens;
pub mod notifications;
pub mod preview_pane;
pub mod styles;
pub mod upload_form;
