// SPDX-License-Identifier: MPL-2.0
//! HTTP upload client.
//!
//! The only network collaborator in the app: one multipart `POST
//! {base}/videos` per submit, single field `file`. The base URL is injected
//! at construction; there is no global endpoint configuration. Retries,
//! timeouts and chunking are deliberately absent.

use crate::media::SelectedFile;
use serde::Deserialize;
use std::fmt;
use std::sync::Arc;

/// Message shown when the server gave us nothing better.
pub const UPLOAD_FAILED_FALLBACK: &str = "Upload failed";

/// Failures from one upload attempt. Never propagated past the controller
/// boundary; converted to `UploadStatus::Failure` instead.
#[derive(Debug, Clone)]
pub enum UploadError {
    /// The server answered with a structured `{"error": ...}` body.
    Server { message: String },
    /// The server answered an error status without a structured body.
    Http { status: u16 },
    /// Connection-level failure before any response arrived.
    Transport(String),
    /// A success status whose body was not the expected shape.
    MalformedResponse(String),
}

impl UploadError {
    /// Best available user-facing message: the structured server message if
    /// the failure carries a non-empty one, else the fixed fallback.
    #[must_use]
    pub fn message(&self) -> String {
        match self {
            UploadError::Server { message } if !message.is_empty() => message.clone(),
            _ => UPLOAD_FAILED_FALLBACK.to_string(),
        }
    }
}

impl fmt::Display for UploadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UploadError::Server { message } => write!(f, "Server error: {}", message),
            UploadError::Http { status } => write!(f, "HTTP error status: {}", status),
            UploadError::Transport(msg) => write!(f, "Transport error: {}", msg),
            UploadError::MalformedResponse(msg) => write!(f, "Malformed response: {}", msg),
        }
    }
}

impl std::error::Error for UploadError {}

/// Successful upload outcome.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadReceipt {
    /// Identifier assigned by the backend.
    pub video_id: String,
}

#[derive(Debug, Deserialize)]
struct UploadResponse {
    id: String,
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    error: String,
}

/// Client bound to one backend base URL.
#[derive(Debug, Clone)]
pub struct UploadClient {
    http: reqwest::Client,
    base_url: String,
}

impl UploadClient {
    /// Creates a client for the given base URL (trailing slashes ignored).
    #[must_use]
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            http: reqwest::Client::new(),
            base_url,
        }
    }

    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    #[must_use]
    pub fn endpoint(&self) -> String {
        format!("{}/videos", self.base_url)
    }

    /// Performs the single multipart upload.
    ///
    /// # Errors
    ///
    /// Returns an [`UploadError`] for transport failures, error statuses and
    /// malformed success bodies.
    pub async fn upload(&self, file: Arc<SelectedFile>) -> Result<UploadReceipt, UploadError> {
        let part = reqwest::multipart::Part::bytes(file.payload().to_vec())
            .file_name(file.name().to_string())
            .mime_str(file.mime())
            .map_err(|e| UploadError::Transport(e.to_string()))?;
        let form = reqwest::multipart::Form::new().part("file", part);

        let response = self
            .http
            .post(self.endpoint())
            .multipart(form)
            .send()
            .await
            .map_err(|e| UploadError::Transport(e.to_string()))?;

        let status = response.status().as_u16();
        let success = response.status().is_success();
        let body = response
            .bytes()
            .await
            .map_err(|e| UploadError::Transport(e.to_string()))?;

        if success {
            receipt_from_body(&body)
        } else {
            Err(error_from_body(status, &body))
        }
    }
}

/// Parses a success body into a receipt.
fn receipt_from_body(body: &[u8]) -> Result<UploadReceipt, UploadError> {
    serde_json::from_slice::<UploadResponse>(body)
        .map(|response| UploadReceipt {
            video_id: response.id,
        })
        .map_err(|e| UploadError::MalformedResponse(e.to_string()))
}

/// Normalizes an error response: structured `{"error": ...}` bodies are
/// carried through, anything else degrades to a bare status.
fn error_from_body(status: u16, body: &[u8]) -> UploadError {
    match serde_json::from_slice::<ErrorBody>(body) {
        Ok(parsed) => UploadError::Server {
            message: parsed.error,
        },
        Err(_) => UploadError::Http { status },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoint_appends_videos_path() {
        let client = UploadClient::new("http://localhost:5000");
        assert_eq!(client.endpoint(), "http://localhost:5000/videos");
    }

    #[test]
    fn trailing_slash_is_trimmed() {
        let client = UploadClient::new("http://localhost:5000/");
        assert_eq!(client.base_url(), "http://localhost:5000");
        assert_eq!(client.endpoint(), "http://localhost:5000/videos");
    }

    #[test]
    fn success_body_yields_receipt() {
        let receipt = receipt_from_body(br#"{"id": "v-42"}"#).expect("body should parse");
        assert_eq!(receipt.video_id, "v-42");
    }

    #[test]
    fn success_body_with_extra_fields_still_parses() {
        let receipt = receipt_from_body(br#"{"id": "abc123", "duration": 90}"#)
            .expect("body should parse");
        assert_eq!(receipt.video_id, "abc123");
    }

    #[test]
    fn malformed_success_body_is_an_error() {
        let result = receipt_from_body(b"<html>oops</html>");
        assert!(matches!(result, Err(UploadError::MalformedResponse(_))));
    }

    #[test]
    fn structured_error_body_is_carried_through() {
        let err = error_from_body(413, br#"{"error": "File too large"}"#);
        assert_eq!(err.message(), "File too large");
    }

    #[test]
    fn unstructured_error_body_falls_back() {
        let err = error_from_body(500, b"Internal Server Error");
        assert!(matches!(err, UploadError::Http { status: 500 }));
        assert_eq!(err.message(), UPLOAD_FAILED_FALLBACK);
    }

    #[test]
    fn empty_structured_message_falls_back() {
        let err = error_from_body(400, br#"{"error": ""}"#);
        assert_eq!(err.message(), UPLOAD_FAILED_FALLBACK);
    }

    #[test]
    fn transport_error_message_falls_back() {
        let err = UploadError::Transport("connection refused".to_string());
        assert_eq!(err.message(), UPLOAD_FAILED_FALLBACK);
    }
}
