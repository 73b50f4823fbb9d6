// SPDX-License-Identifier: MPL-2.0
//! Upload pipeline: the HTTP client performing the multipart request and the
//! controller owning the status state machine around it.

pub mod client;
pub mod controller;

pub use client::{UploadClient, UploadError, UploadReceipt, UPLOAD_FAILED_FALLBACK};
pub use controller::{Controller, SubmitError, UploadStatus, UploadTicket};
