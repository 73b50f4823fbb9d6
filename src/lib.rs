// SPDX-License-Identifier: MPL-2.0
//! `iced_courier` is a desktop client for uploading lecture videos, built with
//! the Iced GUI framework.
//!
//! The user picks a local video file, the app keeps a playable scratch copy
//! for immediate preview, and a single multipart POST sends the file to the
//! configured backend. The interesting parts are the upload status state
//! machine ([`upload::Controller`]) and the preview resource lifecycle
//! ([`preview::Manager`]); everything else is layout.

pub mod app;
pub mod config;
pub mod error;
pub mod media;
pub mod preview;
pub mod ui;
pub mod upload;
