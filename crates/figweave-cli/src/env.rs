//! Credential lookup from the environment and `.env` files.
//!
//! Values from a `.env` file are kept in memory and never exported into the
//! process environment. Variables already set in the environment win over
//! the file.

use std::{
    collections::HashMap,
    path::{Path, PathBuf},
};

use log::{debug, info};

use figweave::{FigweaveError, config::ConfigError};

const DEFAULT_ENV_FILE: &str = ".env";

/// Variables read from a `.env` file.
#[derive(Debug, Default)]
pub struct DotEnv {
    vars: HashMap<String, String>,
}

impl DotEnv {
    /// Loads `.env` variables.
    ///
    /// With an explicit `path` the file must exist. Without one, `./.env` is
    /// read when present and an empty set is returned otherwise.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::MissingFile` for a missing explicit file and
    /// `ConfigError::Parse` for a malformed one.
    pub fn load(path: Option<&Path>) -> Result<Self, FigweaveError> {
        let (path, required) = match path {
            Some(path) => (path.to_path_buf(), true),
            None => (PathBuf::from(DEFAULT_ENV_FILE), false),
        };

        let iter = match dotenvy::from_path_iter(&path) {
            Ok(iter) => iter,
            Err(err) if err.not_found() && !required => {
                debug!(path = path.display().to_string(); "No .env file found");
                return Ok(Self::default());
            }
            Err(err) if err.not_found() => return Err(ConfigError::MissingFile(path).into()),
            Err(err) => return Err(parse_error(&path, err)),
        };

        let mut vars = HashMap::new();
        for item in iter {
            let (key, value) = item.map_err(|err| parse_error(&path, err))?;
            vars.insert(key, value);
        }

        info!(path = path.display().to_string(), vars = vars.len(); "Loaded .env file");
        Ok(Self { vars })
    }

    /// Returns a variable from the file.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.vars.get(name).map(String::as_str)
    }

    /// Looks `name` up in `env` first and in the file second.
    pub fn lookup_with(
        &self,
        name: &str,
        env: impl Fn(&str) -> Option<String>,
    ) -> Option<String> {
        env(name)
            .filter(|value| !value.trim().is_empty())
            .or_else(|| self.get(name).map(str::to_string))
    }
}

fn parse_error(path: &Path, err: dotenvy::Error) -> FigweaveError {
    ConfigError::Parse(format!("{}: {err}", path.display())).into()
}
