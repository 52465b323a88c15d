//! Configuration types for figweave.
//!
//! This module provides configuration structures that control where the
//! Figma file comes from, where the output goes and how the page is styled.
//! All types implement [`serde::Deserialize`] for flexible loading from
//! external sources.
//!
//! # Overview
//!
//! - [`AppConfig`] - Top-level application configuration combining all sections.
//! - [`FigmaConfig`] - API credentials, file key and request settings.
//! - [`OutputConfig`] - Output directory.
//! - [`StyleConfig`] - Page title, background color and stylesheet placement.
//!
//! # Credentials
//!
//! The access token and file key are usually not written into the config
//! file. [`FigmaConfig::with_env`] overlays the `FIGMA_ACCESS_TOKEN` and
//! `FIGMA_FILE_KEY` variables on top of whatever the file provided.
//!
//! # Example
//!
//! ```
//! # use figweave::config::AppConfig;
//! // Use default configuration
//! let config = AppConfig::default();
//! assert!(config.validate().is_ok());
//! assert_eq!(config.output().directory().to_str(), Some("output"));
//! ```

use std::{
    fmt,
    path::{Path, PathBuf},
    time::Duration,
};

use serde::Deserialize;
use thiserror::Error;

use figweave_api::{ClientConfig, DEFAULT_BASE_URL, FetchOptions};
use figweave_core::color::Color;

/// Environment variable holding the Figma personal access token.
pub const ACCESS_TOKEN_VAR: &str = "FIGMA_ACCESS_TOKEN";

/// Environment variable holding the key of the Figma file to convert.
pub const FILE_KEY_VAR: &str = "FIGMA_FILE_KEY";

const DEFAULT_BACKGROUND_COLOR: &str = "#ffffff";

/// Configuration-related errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to parse configuration: {0}")]
    Parse(String),

    #[error("Missing configuration file: {0}")]
    MissingFile(PathBuf),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Figma access token is not set")]
    MissingAccessToken,

    #[error("Figma file key is not set")]
    MissingFileKey,
}

/// Top-level application configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Figma API section.
    #[serde(default)]
    figma: FigmaConfig,

    /// Output section.
    #[serde(default)]
    output: OutputConfig,

    /// Style section.
    #[serde(default)]
    style: StyleConfig,
}

impl AppConfig {
    /// Creates a new [`AppConfig`] from its sections.
    pub fn new(figma: FigmaConfig, output: OutputConfig, style: StyleConfig) -> Self {
        Self {
            figma,
            output,
            style,
        }
    }

    /// Returns the Figma API configuration.
    pub fn figma(&self) -> &FigmaConfig {
        &self.figma
    }

    /// Returns the output configuration.
    pub fn output(&self) -> &OutputConfig {
        &self.output
    }

    /// Returns the style configuration.
    pub fn style(&self) -> &StyleConfig {
        &self.style
    }

    /// Replaces the Figma API section.
    pub fn with_figma(mut self, figma: FigmaConfig) -> Self {
        self.figma = figma;
        self
    }

    /// Replaces the output section.
    pub fn with_output(mut self, output: OutputConfig) -> Self {
        self.output = output;
        self
    }

    /// Replaces the style section.
    pub fn with_style(mut self, style: StyleConfig) -> Self {
        self.style = style;
        self
    }

    /// Checks values that deserialization alone cannot validate.
    ///
    /// Credentials are not checked here; offline rendering needs none.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Validation`] for an unparsable background color,
    /// a non-HTTP API base URL or a zero timeout.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.style
            .background_color()
            .map_err(ConfigError::Validation)?;

        let base_url = self.figma.api_base_url();
        if !(base_url.starts_with("http://") || base_url.starts_with("https://")) {
            return Err(ConfigError::Validation(format!(
                "API base URL must be an http(s) URL, got `{base_url}`"
            )));
        }

        if self.figma.timeout_secs == 0 {
            return Err(ConfigError::Validation(
                "request timeout must be at least one second".to_string(),
            ));
        }

        Ok(())
    }
}

/// Figma API settings.
///
/// `Debug` output never includes the access token.
#[derive(Clone, Deserialize)]
pub struct FigmaConfig {
    #[serde(default)]
    access_token: Option<String>,

    #[serde(default)]
    file_key: Option<String>,

    #[serde(default = "default_api_base_url")]
    api_base_url: String,

    #[serde(default = "default_timeout_secs")]
    timeout_secs: u64,

    #[serde(default)]
    depth: Option<u32>,
}

fn default_api_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

fn default_timeout_secs() -> u64 {
    30
}

impl Default for FigmaConfig {
    fn default() -> Self {
        Self {
            access_token: None,
            file_key: None,
            api_base_url: default_api_base_url(),
            timeout_secs: default_timeout_secs(),
            depth: None,
        }
    }
}

impl fmt::Debug for FigmaConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FigmaConfig")
            .field(
                "access_token",
                &self.access_token.as_ref().map(|_| "<redacted>"),
            )
            .field("file_key", &self.file_key)
            .field("api_base_url", &self.api_base_url)
            .field("timeout_secs", &self.timeout_secs)
            .field("depth", &self.depth)
            .finish()
    }
}

impl FigmaConfig {
    /// Overlays credentials found through `lookup` on top of this config.
    ///
    /// `lookup` is queried for [`ACCESS_TOKEN_VAR`] and [`FILE_KEY_VAR`];
    /// non-empty values replace the configured ones.
    ///
    /// # Examples
    ///
    /// ```
    /// # use figweave::config::FigmaConfig;
    /// let config = FigmaConfig::default().with_env(|name| match name {
    ///     "FIGMA_ACCESS_TOKEN" => Some("token".to_string()),
    ///     _ => None,
    /// });
    ///
    /// assert_eq!(config.access_token().unwrap(), "token");
    /// assert!(config.file_key().is_err());
    /// ```
    pub fn with_env(mut self, lookup: impl Fn(&str) -> Option<String>) -> Self {
        let non_empty = |name: &str| lookup(name).filter(|value| !value.trim().is_empty());

        if let Some(token) = non_empty(ACCESS_TOKEN_VAR) {
            self.access_token = Some(token);
        }
        if let Some(file_key) = non_empty(FILE_KEY_VAR) {
            self.file_key = Some(file_key);
        }
        self
    }

    /// Sets the file key, overriding the configured one.
    pub fn with_file_key(mut self, file_key: impl Into<String>) -> Self {
        self.file_key = Some(file_key.into());
        self
    }

    /// Sets the document traversal depth.
    pub fn with_depth(mut self, depth: u32) -> Self {
        self.depth = Some(depth);
        self
    }

    /// Points requests at another API root.
    pub fn with_api_base_url(mut self, api_base_url: impl Into<String>) -> Self {
        self.api_base_url = api_base_url.into();
        self
    }

    /// Returns the access token.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingAccessToken`] when no token is configured.
    pub fn access_token(&self) -> Result<&str, ConfigError> {
        self.access_token
            .as_deref()
            .map(str::trim)
            .filter(|token| !token.is_empty())
            .ok_or(ConfigError::MissingAccessToken)
    }

    /// Returns the file key.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingFileKey`] when no file key is configured.
    pub fn file_key(&self) -> Result<&str, ConfigError> {
        self.file_key
            .as_deref()
            .map(str::trim)
            .filter(|key| !key.is_empty())
            .ok_or(ConfigError::MissingFileKey)
    }

    pub fn api_base_url(&self) -> &str {
        &self.api_base_url
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    pub fn depth(&self) -> Option<u32> {
        self.depth
    }

    /// Builds the HTTP client settings.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingAccessToken`] when no token is configured.
    pub fn client_config(&self) -> Result<ClientConfig, ConfigError> {
        Ok(ClientConfig::new(self.access_token()?)
            .with_base_url(self.api_base_url.as_str())
            .with_timeout(self.timeout()))
    }

    /// Builds the query options of the file request.
    pub fn fetch_options(&self) -> FetchOptions {
        FetchOptions {
            depth: self.depth,
            version: None,
        }
    }
}

/// Output location settings.
#[derive(Debug, Clone, Deserialize)]
pub struct OutputConfig {
    #[serde(default = "default_output_directory")]
    directory: PathBuf,
}

fn default_output_directory() -> PathBuf {
    PathBuf::from("output")
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            directory: default_output_directory(),
        }
    }
}

impl OutputConfig {
    /// Creates an output configuration writing into `directory`.
    pub fn new(directory: impl Into<PathBuf>) -> Self {
        Self {
            directory: directory.into(),
        }
    }

    /// Returns the directory receiving `index.html` and `styles.css`.
    pub fn directory(&self) -> &Path {
        &self.directory
    }
}

/// Page styling settings.
#[derive(Debug, Clone, Deserialize)]
pub struct StyleConfig {
    /// Page title; the Figma file name is used when unset.
    #[serde(default)]
    title: Option<String>,

    /// Page background as a CSS color string.
    #[serde(default)]
    background_color: Option<String>,

    /// Embed the node styles in the page instead of linking `styles.css`.
    #[serde(default = "embed_styles")]
    embed_styles: bool,
}

fn embed_styles() -> bool {
    true
}

impl Default for StyleConfig {
    fn default() -> Self {
        Self {
            title: None,
            background_color: None,
            embed_styles: embed_styles(),
        }
    }
}

impl StyleConfig {
    /// Creates a style configuration.
    pub fn new(title: Option<String>, background_color: Option<String>, embed_styles: bool) -> Self {
        Self {
            title,
            background_color,
            embed_styles,
        }
    }

    /// Returns the configured page title.
    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    /// Returns the parsed background [`Color`], white when none is configured.
    ///
    /// # Errors
    ///
    /// Returns an error if the configured color string cannot be parsed
    /// into a valid [`Color`].
    pub fn background_color(&self) -> Result<Color, String> {
        Color::new(
            self.background_color
                .as_deref()
                .unwrap_or(DEFAULT_BACKGROUND_COLOR),
        )
        .map_err(|err| format!("Invalid background color in config: {err}"))
    }

    /// Returns `true` when node styles are embedded in the page.
    pub fn embed_styles(&self) -> bool {
        self.embed_styles
    }
}
