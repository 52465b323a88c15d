//! The standalone HTML document around the generated markup.

use figweave_core::color::{Color, Rgba};

use super::{STYLESHEET_FILE, html::escape_text};

/// Title used when neither the configuration nor the file provides one.
pub const DEFAULT_TITLE: &str = "Figma Design";

/// Settings of the page wrapping the node markup.
#[derive(Debug, Clone)]
pub struct PageTemplate {
    title: String,
    background: Color,
    embed_styles: bool,
}

impl Default for PageTemplate {
    fn default() -> Self {
        Self {
            title: DEFAULT_TITLE.to_string(),
            background: Color::from(Rgba::new(1.0, 1.0, 1.0, 1.0)),
            embed_styles: true,
        }
    }
}

impl PageTemplate {
    pub fn new(title: impl Into<String>, background: Color, embed_styles: bool) -> Self {
        Self {
            title: title.into(),
            background,
            embed_styles,
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn background(&self) -> Color {
        self.background
    }

    /// Returns `true` if node styles go into the page's `<style>` element.
    pub fn embeds_styles(&self) -> bool {
        self.embed_styles
    }

    /// Renders the full document.
    ///
    /// `css` is the node stylesheet, embedded or linked depending on the
    /// template. `markup` is the pre-indented element tree placed inside the
    /// page container.
    pub fn render(&self, css: &str, markup: &str) -> String {
        let mut page = String::with_capacity(BASE_STYLES.len() + css.len() + markup.len() + 512);

        page.push_str("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n");
        page.push_str("    <meta charset=\"UTF-8\">\n");
        page.push_str(
            "    <meta name=\"viewport\" content=\"width=device-width, initial-scale=1.0\">\n",
        );
        page.push_str(&format!(
            "    <title>{}</title>\n",
            escape_text(&self.title)
        ));

        page.push_str("    <style>\n");
        page.push_str(BASE_STYLES);
        page.push_str(&format!(
            "        body {{\n            font-family: {FONT_STACK};\n            background-color: {};\n        }}\n",
            self.background
        ));
        page.push_str(CONTAINER_STYLES);
        if self.embed_styles {
            page.push_str(css);
        }
        page.push_str("    </style>\n");
        if !self.embed_styles {
            page.push_str(&format!(
                "    <link rel=\"stylesheet\" href=\"{STYLESHEET_FILE}\">\n"
            ));
        }
        page.push_str("</head>\n<body>\n");

        page.push_str("    <div class=\"figma-container\">\n");
        page.push_str(markup);
        page.push_str("    </div>\n</body>\n</html>\n");

        page
    }
}

const FONT_STACK: &str = "-apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, sans-serif";

const BASE_STYLES: &str = "        * {
            margin: 0;
            padding: 0;
            box-sizing: border-box;
        }
";

const CONTAINER_STYLES: &str = "        .figma-container {
            position: relative;
            width: 100%;
            min-height: 100vh;
        }
";
