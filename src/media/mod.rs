// SPDX-License-Identifier: MPL-2.0
//! Media value types shared between the upload and preview sides.

pub mod selection;

pub use selection::{SelectedFile, SelectionId, VIDEO_EXTENSIONS};
