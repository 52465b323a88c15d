//! Error types for figweave operations.
//!
//! This module provides the main error type [`FigweaveError`] which wraps
//! the error conditions of every pipeline stage: configuration, fetching,
//! decoding, rendering and writing.

use std::io;

use thiserror::Error;

use crate::config::ConfigError;

/// The main error type for figweave operations.
///
/// # Source Variants
///
/// The `Decode` variant keeps the JSON text next to the [`serde_json::Error`],
/// whose line and column point into it, so callers can show the offending
/// part of the document.
#[derive(Debug, Error)]
pub enum FigweaveError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Figma API error: {0}")]
    Api(#[from] figweave_api::Error),

    #[error("Invalid Figma document: {err}")]
    Decode { err: serde_json::Error, src: String },

    #[error("Render error: {0}")]
    Render(String),
}

impl FigweaveError {
    /// Create a new `Decode` error with the associated JSON source.
    pub fn new_decode_error(err: serde_json::Error, src: impl Into<String>) -> Self {
        Self::Decode {
            err,
            src: src.into(),
        }
    }
}
