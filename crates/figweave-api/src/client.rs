//! The Figma file endpoint client.

use std::{io::Read, time::Duration};

use log::{debug, info};

use crate::Error;

/// Base URL of the public Figma REST API.
pub const DEFAULT_BASE_URL: &str = "https://api.figma.com/v1";

const TOKEN_HEADER: &str = "X-Figma-Token";
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Connection settings for [`FigmaClient`].
#[derive(Clone)]
pub struct ClientConfig {
    base_url: String,
    access_token: String,
    timeout: Duration,
}

impl ClientConfig {
    /// Creates a config for the public API with the default timeout.
    pub fn new(access_token: impl Into<String>) -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            access_token: access_token.into(),
            timeout: DEFAULT_TIMEOUT,
        }
    }

    /// Points the client at another API root; a trailing slash is ignored.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    /// Sets the overall request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }
}

// The token is a credential and must not end up in logs.
impl std::fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ClientConfig")
            .field("base_url", &self.base_url)
            .field("access_token", &"<redacted>")
            .field("timeout", &self.timeout)
            .finish()
    }
}

/// Optional query parameters of the file endpoint.
#[derive(Debug, Clone, Default)]
pub struct FetchOptions {
    /// Limits how deep into the document tree the API traverses.
    pub depth: Option<u32>,
    /// Fetches a specific version of the file instead of the latest.
    pub version: Option<String>,
}

impl FetchOptions {
    fn query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();
        if let Some(depth) = self.depth {
            pairs.push(("depth", depth.to_string()));
        }
        if let Some(version) = &self.version {
            pairs.push(("version", version.clone()));
        }
        pairs
    }
}

/// Blocking client for `GET /v1/files/:key`.
pub struct FigmaClient {
    config: ClientConfig,
    agent: ureq::Agent,
}

impl std::fmt::Debug for FigmaClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FigmaClient")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

impl FigmaClient {
    /// Creates a client; no request is made until [`FigmaClient::fetch_file`].
    pub fn new(config: ClientConfig) -> Self {
        let agent = ureq::AgentBuilder::new()
            .timeout(config.timeout)
            .user_agent(concat!("figweave/", env!("CARGO_PKG_VERSION")))
            .build();

        Self { config, agent }
    }

    /// Returns the endpoint URL for `file_key`, without query parameters.
    ///
    /// # Examples
    ///
    /// ```
    /// use figweave_api::{ClientConfig, FigmaClient};
    ///
    /// let client = FigmaClient::new(ClientConfig::new("token"));
    /// assert_eq!(client.file_url("AbC"), "https://api.figma.com/v1/files/AbC");
    /// ```
    pub fn file_url(&self, file_key: &str) -> String {
        format!("{}/files/{}", self.config.base_url, file_key)
    }

    /// Fetches the file and returns the raw JSON body.
    ///
    /// The body is read through a reader, so large files are not truncated.
    ///
    /// # Errors
    ///
    /// Returns [`Error`] for non-success statuses, transport failures and
    /// unreadable bodies.
    pub fn fetch_file(&self, file_key: &str, options: &FetchOptions) -> Result<String, Error> {
        let url = self.file_url(file_key);
        info!(url = url.as_str(), depth:? = options.depth; "Fetching Figma file");

        let mut request = self
            .agent
            .get(&url)
            .set(TOKEN_HEADER, &self.config.access_token);
        for (name, value) in options.query_pairs() {
            request = request.query(name, &value);
        }

        let response = match request.call() {
            Ok(response) => response,
            Err(ureq::Error::Status(code, response)) => {
                let status_text = response.status_text().to_string();
                let body = response.into_string().unwrap_or_default();
                debug!(code, body = body.as_str(); "Figma API returned an error status");
                return Err(Error::from_status(code, &status_text, &body, file_key));
            }
            Err(ureq::Error::Transport(transport)) => {
                return Err(Error::Transport(transport.to_string()));
            }
        };

        let mut body = String::new();
        response.into_reader().read_to_string(&mut body)?;

        info!(bytes = body.len(); "Figma file fetched");
        Ok(body)
    }
}
