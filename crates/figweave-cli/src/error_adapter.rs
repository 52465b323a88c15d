//! Error adapter for converting FigweaveError to miette diagnostics.
//!
//! This module provides the bridge between the library's standard error types
//! and miette's rich diagnostic formatting used in the CLI.
//!
//! Decode errors point into the JSON document that failed to decode; every
//! other error is rendered with a code and, where the user can act on it, a
//! help message.

use std::fmt;

use miette::{Diagnostic as MietteDiagnostic, LabeledSpan, SourceSpan};

use figweave::{
    FigweaveError,
    config::{ACCESS_TOKEN_VAR, ConfigError, FILE_KEY_VAR},
};

/// Adapter for a JSON decode failure.
///
/// Wraps the [`serde_json::Error`] together with the document it was raised
/// for, so the failing position can be shown in context.
pub struct DecodeAdapter<'a> {
    err: &'a serde_json::Error,
    src: &'a str,
}

impl<'a> DecodeAdapter<'a> {
    /// Create a new decode adapter.
    pub fn new(err: &'a serde_json::Error, src: &'a str) -> Self {
        Self { err, src }
    }

    fn span(&self) -> Option<SourceSpan> {
        let offset = byte_offset(self.src, self.err.line(), self.err.column())?;
        let len = self.src[offset..].chars().next().map_or(0, char::len_utf8);
        Some(SourceSpan::new(offset.into(), len))
    }
}

impl fmt::Debug for DecodeAdapter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DecodeAdapter")
            .field("err", &self.err)
            .finish()
    }
}

impl fmt::Display for DecodeAdapter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Invalid Figma document")
    }
}

impl std::error::Error for DecodeAdapter<'_> {}

impl MietteDiagnostic for DecodeAdapter<'_> {
    fn code<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        Some(Box::new("figweave::decode"))
    }

    fn help<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        Some(Box::new(
            "expected the JSON body of a Figma `GET /v1/files/:key` response",
        ))
    }

    fn source_code(&self) -> Option<&dyn miette::SourceCode> {
        Some(&self.src as &dyn miette::SourceCode)
    }

    fn labels(&self) -> Option<Box<dyn Iterator<Item = LabeledSpan> + '_>> {
        let span = self.span()?;
        let label = LabeledSpan::new_primary_with_span(Some(self.err.to_string()), span);
        Some(Box::new(std::iter::once(label)))
    }
}

/// Adapter for non-decode [`FigweaveError`] variants.
///
/// This adapter handles errors that don't point into a document, such as
/// I/O errors, configuration errors, API errors, and render errors.
pub struct ErrorAdapter<'a>(pub &'a FigweaveError);

impl fmt::Debug for ErrorAdapter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&self.0, f)
    }
}

impl fmt::Display for ErrorAdapter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl std::error::Error for ErrorAdapter<'_> {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.0.source()
    }
}

impl MietteDiagnostic for ErrorAdapter<'_> {
    fn code<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        let code = match &self.0 {
            FigweaveError::Io(_) => "figweave::io",
            FigweaveError::Config(_) => "figweave::config",
            FigweaveError::Api(_) => "figweave::api",
            FigweaveError::Decode { .. } => "figweave::decode",
            FigweaveError::Render(_) => "figweave::render",
        };
        Some(Box::new(code))
    }

    fn help<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        let help = match &self.0 {
            FigweaveError::Config(ConfigError::MissingAccessToken) => format!(
                "set {ACCESS_TOKEN_VAR} in the environment or in a .env file, \
                 or add `access_token` to the [figma] section of the config"
            ),
            FigweaveError::Config(ConfigError::MissingFileKey) => format!(
                "pass --file-key, set {FILE_KEY_VAR}, or add `file_key` to the \
                 [figma] section of the config"
            ),
            FigweaveError::Api(figweave_api::Error::Unauthorized { .. }) => {
                format!("check that {ACCESS_TOKEN_VAR} holds a valid personal access token")
            }
            FigweaveError::Api(figweave_api::Error::NotFound { .. }) => {
                "the file key is the part of the file URL after `/file/` or `/design/`"
                    .to_string()
            }
            FigweaveError::Api(figweave_api::Error::Transport(_)) => {
                "check the network connection and the configured `api_base_url`".to_string()
            }
            _ => return None,
        };
        Some(Box::new(help))
    }

    fn source_code(&self) -> Option<&dyn miette::SourceCode> {
        None
    }

    fn labels(&self) -> Option<Box<dyn Iterator<Item = LabeledSpan> + '_>> {
        None
    }
}

/// A reportable error that can be rendered by miette.
///
/// This enum wraps either a decode failure with its document or any other
/// error, providing a uniform interface for error rendering.
#[derive(Debug)]
pub enum Reportable<'a> {
    /// A decode failure with source location information.
    Decode(DecodeAdapter<'a>),
    /// A simple error without source location.
    Error(ErrorAdapter<'a>),
}

impl fmt::Display for Reportable<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Reportable::Decode(d) => fmt::Display::fmt(d, f),
            Reportable::Error(e) => fmt::Display::fmt(e, f),
        }
    }
}

impl std::error::Error for Reportable<'_> {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Reportable::Decode(_) => None,
            Reportable::Error(e) => e.source(),
        }
    }
}

impl MietteDiagnostic for Reportable<'_> {
    fn code<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        match self {
            Reportable::Decode(d) => d.code(),
            Reportable::Error(e) => e.code(),
        }
    }

    fn help<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        match self {
            Reportable::Decode(d) => d.help(),
            Reportable::Error(e) => e.help(),
        }
    }

    fn source_code(&self) -> Option<&dyn miette::SourceCode> {
        match self {
            Reportable::Decode(d) => d.source_code(),
            Reportable::Error(e) => e.source_code(),
        }
    }

    fn labels(&self) -> Option<Box<dyn Iterator<Item = LabeledSpan> + '_>> {
        match self {
            Reportable::Decode(d) => d.labels(),
            Reportable::Error(e) => e.labels(),
        }
    }
}

/// Convert a 1-based line and column from serde_json into a byte offset.
///
/// serde_json counts columns in bytes and reports column 0 when the error
/// sits before the first character of a line. Positions past the end of the
/// source are clamped to its end.
fn byte_offset(src: &str, line: usize, column: usize) -> Option<usize> {
    if line == 0 {
        return None;
    }

    let line_start = if line == 1 {
        0
    } else {
        src.match_indices('\n').nth(line - 2).map(|(idx, _)| idx + 1)?
    };

    let mut offset = (line_start + column.saturating_sub(1)).min(src.len());
    while !src.is_char_boundary(offset) {
        offset -= 1;
    }
    Some(offset)
}

/// Convert a [`FigweaveError`] into a reportable error.
pub fn to_reportable(err: &FigweaveError) -> Reportable<'_> {
    match err {
        FigweaveError::Decode { err, src } => Reportable::Decode(DecodeAdapter::new(err, src)),
        _ => Reportable::Error(ErrorAdapter(err)),
    }
}
