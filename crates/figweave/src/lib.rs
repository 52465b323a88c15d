//! Figweave - Convert Figma documents into static HTML and CSS.
//!
//! Fetching through the Figma REST API, decoding of the file document, and
//! generation of a standalone page with one CSS class per visible node.

pub mod config;
pub mod export;
pub mod style;

mod error;

pub use figweave_core::{color, document, geometry};

pub use error::FigweaveError;

use log::{debug, info, trace};

use figweave_api::FigmaClient;

use config::AppConfig;
use document::FileResponse;
use export::{Site, css::StyleSheet, html::render_markup, page::PageTemplate};

/// Indentation level of the top-level node inside the page container.
const MARKUP_DEPTH: usize = 2;

/// Converter running the figweave pipeline.
///
/// The three stages can be used on their own: [`Converter::fetch`] downloads
/// the raw file JSON, [`Converter::parse`] decodes it and
/// [`Converter::render`] turns the document into a [`Site`].
///
/// # Examples
///
/// ```rust
/// use figweave::{Converter, config::AppConfig};
///
/// let json = r#"{
///     "name": "Landing",
///     "document": {"id": "0:0", "type": "DOCUMENT", "children": [
///         {"id": "1:2", "type": "TEXT", "characters": "Hello"}
///     ]}
/// }"#;
///
/// let converter = Converter::new(AppConfig::default());
/// let file = converter.parse(json).expect("Failed to parse");
/// let site = converter.render(&file).expect("Failed to render");
///
/// assert!(site.html().contains("<title>Landing</title>"));
/// assert!(site.html().contains("<p class=\"figma-text-1-2\">Hello</p>"));
/// ```
#[derive(Debug, Default)]
pub struct Converter {
    config: AppConfig,
}

impl Converter {
    /// Create a new converter with the given configuration.
    pub fn new(config: AppConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Download the configured file from the Figma API.
    ///
    /// Returns the response body unparsed, so it can be saved as is.
    ///
    /// # Errors
    ///
    /// Returns `FigweaveError::Config` when the access token or file key is
    /// missing and `FigweaveError::Api` when the request fails.
    pub fn fetch(&self) -> Result<String, FigweaveError> {
        let figma = self.config.figma();
        let client = FigmaClient::new(figma.client_config()?);
        let file_key = figma.file_key()?;

        info!(file_key; "Fetching Figma file");
        let body = client.fetch_file(file_key, &figma.fetch_options())?;
        debug!(bytes = body.len(); "Figma file fetched");

        Ok(body)
    }

    /// Decode a Figma file response.
    ///
    /// # Errors
    ///
    /// Returns `FigweaveError::Decode` carrying `json` when it is not a valid
    /// file response.
    pub fn parse(&self, json: &str) -> Result<FileResponse, FigweaveError> {
        info!("Parsing Figma document");

        let file = FileResponse::from_json(json)
            .map_err(|err| FigweaveError::new_decode_error(err, json))?;

        debug!(name = file.name(); "Figma document parsed");
        trace!(file:?; "Parsed document");

        Ok(file)
    }

    /// Generate the page and stylesheet of a decoded file.
    ///
    /// # Errors
    ///
    /// Returns `FigweaveError::Render` when the configured background color
    /// is invalid.
    pub fn render(&self, file: &FileResponse) -> Result<Site, FigweaveError> {
        let style = self.config.style();
        let background = style.background_color().map_err(FigweaveError::Render)?;

        let stylesheet = StyleSheet::from_document(file.document());
        info!(rules = stylesheet.len(); "Stylesheet generated");

        let markup = render_markup(file.document(), MARKUP_DEPTH);
        let css = stylesheet.to_string();

        let template = PageTemplate::new(
            page_title(style.title(), file),
            background,
            style.embed_styles(),
        );
        debug!(
            title = template.title(),
            embed_styles = template.embeds_styles();
            "Rendering page"
        );

        Ok(Site::new(template.render(&css, &markup), css))
    }
}

fn page_title(configured: Option<&str>, file: &FileResponse) -> String {
    [configured, Some(file.name())]
        .into_iter()
        .flatten()
        .map(str::trim)
        .find(|title| !title.is_empty())
        .unwrap_or(export::page::DEFAULT_TITLE)
        .to_string()
}
