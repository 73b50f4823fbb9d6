// SPDX-License-Identifier: MPL-2.0
//! Upload status state machine.
//!
//! The controller owns [`UploadStatus`] exclusively; the app mutates it only
//! through `begin_submit`, `finish` and `reset`. `Uploading` is a blocking
//! state at this boundary: a second submit while one is in flight is
//! rejected here, not merely discouraged by a disabled button. Tickets stamp
//! each attempt so a result that lands after a reset (new selection, view
//! teardown) is ignored instead of resurrecting stale state.

use super::client::{UploadError, UploadReceipt};
use crate::media::SelectedFile;
use std::fmt;
use std::sync::Arc;

/// Status of the one upload slot.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum UploadStatus {
    /// Nothing submitted since the last selection.
    #[default]
    Idle,
    /// A request is in flight.
    Uploading,
    /// The backend accepted the file and assigned it an identifier.
    Success { video_id: String },
    /// The attempt failed; `message` is always non-empty.
    Failure { message: String },
}

/// Proof that one specific submit was accepted. Only the matching ticket can
/// finish the attempt it started.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UploadTicket {
    generation: u64,
}

/// Why a submit was refused. No network call happens in either case.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitError {
    /// No file is currently selected; the caller must surface this to the
    /// user rather than swallow it.
    NoFileSelected,
    /// An upload is already in flight; the submit is a documented no-op.
    UploadInFlight,
}

impl fmt::Display for SubmitError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SubmitError::NoFileSelected => write!(f, "no file selected"),
            SubmitError::UploadInFlight => write!(f, "an upload is already in flight"),
        }
    }
}

/// Drives the status state machine around one call to the upload client.
#[derive(Debug, Default)]
pub struct Controller {
    status: UploadStatus,
    generation: u64,
}

impl Controller {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn status(&self) -> &UploadStatus {
        &self.status
    }

    #[must_use]
    pub fn is_uploading(&self) -> bool {
        self.status == UploadStatus::Uploading
    }

    /// Starts an attempt. The returned ticket must accompany the result of
    /// the one upload call the caller now performs.
    ///
    /// # Errors
    ///
    /// [`SubmitError::NoFileSelected`] without a selection,
    /// [`SubmitError::UploadInFlight`] while a previous attempt is pending;
    /// status is left unchanged in both cases.
    pub fn begin_submit(
        &mut self,
        selection: Option<&Arc<SelectedFile>>,
    ) -> Result<UploadTicket, SubmitError> {
        if self.is_uploading() {
            return Err(SubmitError::UploadInFlight);
        }
        if selection.is_none() {
            return Err(SubmitError::NoFileSelected);
        }

        self.generation += 1;
        self.status = UploadStatus::Uploading;
        Ok(UploadTicket {
            generation: self.generation,
        })
    }

    /// Records the outcome of an attempt. Returns whether the result was
    /// applied; a stale ticket (reset since the attempt started) is ignored.
    pub fn finish(
        &mut self,
        ticket: UploadTicket,
        result: Result<UploadReceipt, UploadError>,
    ) -> bool {
        if ticket.generation != self.generation || !self.is_uploading() {
            return false;
        }

        self.status = match result {
            Ok(receipt) => UploadStatus::Success {
                video_id: receipt.video_id,
            },
            Err(error) => UploadStatus::Failure {
                message: error.message(),
            },
        };
        true
    }

    /// Returns to `Idle` from any state and invalidates outstanding tickets.
    /// Called whenever a new file is selected.
    pub fn reset(&mut self) {
        self.generation += 1;
        self.status = UploadStatus::Idle;
    }

    /// The ticket of the in-flight attempt, for tests that need to deliver
    /// its result by hand.
    #[cfg(test)]
    pub(crate) fn current_ticket(&self) -> UploadTicket {
        UploadTicket {
            generation: self.generation,
        }
    }
}
