use std::{
    fs, io,
    path::{Path, PathBuf},
};

use log::info;

/// Name of the generated page.
pub const INDEX_FILE: &str = "index.html";

/// Name of the generated node stylesheet.
pub const STYLESHEET_FILE: &str = "styles.css";

/// The files generated from one document.
///
/// `css` holds only the node rules; the base page styles live in the page
/// itself.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Site {
    html: String,
    css: String,
}

impl Site {
    pub fn new(html: String, css: String) -> Self {
        Self { html, css }
    }

    /// Returns the contents of [`INDEX_FILE`].
    pub fn html(&self) -> &str {
        &self.html
    }

    /// Returns the contents of [`STYLESHEET_FILE`].
    pub fn css(&self) -> &str {
        &self.css
    }

    /// Writes both files into `dir`, creating it when needed.
    ///
    /// Existing files are overwritten. Returns the written paths, page first.
    ///
    /// # Errors
    ///
    /// Returns any I/O error raised while creating the directory or writing.
    pub fn write_to(&self, dir: impl AsRef<Path>) -> io::Result<Vec<PathBuf>> {
        let dir = dir.as_ref();
        fs::create_dir_all(dir)?;

        let index = dir.join(INDEX_FILE);
        fs::write(&index, &self.html)?;

        let stylesheet = dir.join(STYLESHEET_FILE);
        fs::write(&stylesheet, &self.css)?;

        info!(dir:? = dir; "Output written");
        Ok(vec![index, stylesheet])
    }
}
