//! Errors returned by the Figma API client.

use std::io;

use serde::Deserialize;
use thiserror::Error;

/// Errors that can occur while fetching a file from the Figma API.
///
/// There is no retry policy: every failure is reported to the caller as is.
#[derive(Debug, Error)]
pub enum Error {
    /// The API rejected the access token (HTTP 403).
    #[error("access denied by the Figma API: {message}")]
    Unauthorized { message: String },

    /// The file key does not name a file visible to the token (HTTP 404).
    #[error("Figma file `{file_key}` was not found")]
    NotFound { file_key: String },

    /// Any other non-success HTTP status.
    #[error("Figma API returned status {code}: {message}")]
    Status { code: u16, message: String },

    /// The request never produced an HTTP response (DNS, TLS, connection, timeout).
    #[error("failed to reach the Figma API: {0}")]
    Transport(String),

    /// The response body could not be read.
    #[error("failed to read the Figma API response: {0}")]
    Body(#[from] io::Error),
}

/// Error body sent by the Figma API, e.g. `{"status": 403, "err": "Invalid token"}`.
#[derive(Debug, Deserialize)]
struct ErrorBody {
    err: String,
}

impl Error {
    /// Builds the error for a non-success status.
    ///
    /// The API's own `err` message is preferred; when the body is not the
    /// usual JSON error object the HTTP status text is used instead.
    pub(crate) fn from_status(code: u16, status_text: &str, body: &str, file_key: &str) -> Self {
        let message = serde_json::from_str::<ErrorBody>(body)
            .map(|body| body.err)
            .unwrap_or_else(|_| status_text.to_string());

        match code {
            403 => Self::Unauthorized { message },
            404 => Self::NotFound {
                file_key: file_key.to_string(),
            },
            _ => Self::Status { code, message },
        }
    }

    /// Returns the HTTP status code for errors that carry one.
    pub fn status_code(&self) -> Option<u16> {
        match self {
            Self::Unauthorized { .. } => Some(403),
            Self::NotFound { .. } => Some(404),
            Self::Status { code, .. } => Some(*code),
            Self::Transport(_) | Self::Body(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_forbidden_uses_api_message() {
        let err = Error::from_status(
            403,
            "Forbidden",
            r#"{"status": 403, "err": "Invalid token"}"#,
            "key",
        );

        assert!(matches!(&err, Error::Unauthorized { message } if message == "Invalid token"));
        assert_eq!(err.status_code(), Some(403));
    }

    #[test]
    fn test_not_found_keeps_file_key() {
        let err = Error::from_status(404, "Not Found", r#"{"status": 404, "err": "Not found"}"#, "AbC");

        assert_eq!(err.to_string(), "Figma file `AbC` was not found");
    }

    #[test]
    fn test_non_json_body_falls_back_to_status_text() {
        let err = Error::from_status(502, "Bad Gateway", "<html>oops</html>", "key");

        assert_eq!(err.to_string(), "Figma API returned status 502: Bad Gateway");
        assert_eq!(err.status_code(), Some(502));
    }

    #[test]
    fn test_transport_has_no_status() {
        let err = Error::Transport("connection refused".to_string());
        assert_eq!(err.status_code(), None);
    }
}
