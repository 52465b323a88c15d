//! CLI logic for the figweave converter.
//!
//! This module resolves configuration and credentials, then drives the
//! [`Converter`] from the fetched or saved document to the written files.

pub mod error_adapter;

mod args;
mod config;
mod env;

pub use args::Args;

use std::{env as process_env, fs};

use log::info;

use figweave::{
    Converter, FigweaveError,
    config::{AppConfig, OutputConfig},
};

use env::DotEnv;

/// Run the figweave CLI application
///
/// This function loads the document, either from `--input` or from the
/// Figma API, converts it and writes `index.html` and `styles.css` into the
/// output directory.
///
/// # Errors
///
/// Returns `FigweaveError` for:
/// - File I/O errors
/// - Configuration loading errors and missing credentials
/// - Figma API errors
/// - Document decoding errors
/// - Rendering errors
pub fn run(args: &Args) -> Result<(), FigweaveError> {
    let app_config = resolve_config(args, |name| process_env::var(name).ok())?;
    let converter = Converter::new(app_config);

    let json = match &args.input {
        Some(input) => {
            info!(input_path = input.display().to_string(); "Reading saved Figma document");
            fs::read_to_string(input)?
        }
        None => {
            let json = converter.fetch()?;
            if let Some(path) = &args.save_json {
                fs::write(path, &json)?;
                info!(path = path.display().to_string(); "Saved raw Figma document");
            }
            json
        }
    };

    let file = converter.parse(&json)?;
    let site = converter.render(&file)?;

    let output_dir = converter.config().output().directory();
    let written = site.write_to(output_dir)?;
    for path in &written {
        info!(output_file = path.display().to_string(); "File written");
    }

    Ok(())
}

/// Builds the effective configuration from the config file, the `.env`
/// file, the environment looked up through `env` and the arguments.
fn resolve_config(
    args: &Args,
    env: impl Fn(&str) -> Option<String>,
) -> Result<AppConfig, FigweaveError> {
    let app_config = config::load_config(args.config.as_ref())?;

    // A saved document needs no credentials, so a broken .env must not block it.
    let dotenv = if args.input.is_some() && args.env_file.is_none() {
        DotEnv::default()
    } else {
        DotEnv::load(args.env_file.as_deref())?
    };

    let mut figma = app_config
        .figma()
        .clone()
        .with_env(|name| dotenv.lookup_with(name, &env));
    if let Some(file_key) = &args.file_key {
        figma = figma.with_file_key(file_key.as_str());
    }
    if let Some(depth) = args.depth {
        figma = figma.with_depth(depth);
    }

    let mut app_config = app_config.with_figma(figma);
    if let Some(output) = &args.output {
        app_config = app_config.with_output(OutputConfig::new(output));
    }

    Ok(app_config)
}

#[cfg(test)]
mod tests {
    use std::path::Path;

    use super::*;

    fn write(path: &Path, content: &str) {
        fs::write(path, content).unwrap();
    }

    #[test]
    fn test_arguments_override_config() {
        let dir = tempfile::tempdir().unwrap();
        let config_path = dir.path().join("config.toml");
        let env_path = dir.path().join(".env");
        write(
            &config_path,
            "[figma]\nfile_key = \"from-config\"\naccess_token = \"config-token\"\n[output]\ndirectory = \"configured\"\n",
        );
        write(&env_path, "");

        let args = Args {
            file_key: Some("from-args".to_string()),
            output: Some(dir.path().join("out")),
            config: Some(config_path),
            env_file: Some(env_path),
            depth: Some(3),
            ..Default::default()
        };

        let config = resolve_config(&args, |_: &str| None).unwrap();

        assert_eq!(config.figma().file_key().unwrap(), "from-args");
        assert_eq!(config.figma().access_token().unwrap(), "config-token");
        assert_eq!(config.figma().depth(), Some(3));
        assert_eq!(config.output().directory(), dir.path().join("out"));
    }

    #[test]
    fn test_credential_precedence() {
        let dir = tempfile::tempdir().unwrap();
        let config_path = dir.path().join("config.toml");
        let env_path = dir.path().join(".env");
        write(
            &config_path,
            "[figma]\nfile_key = \"config-key\"\naccess_token = \"config-token\"\n",
        );
        write(
            &env_path,
            "FIGMA_ACCESS_TOKEN=dotenv-token\nFIGMA_FILE_KEY=dotenv-key\n",
        );

        let args = Args {
            config: Some(config_path),
            env_file: Some(env_path),
            ..Default::default()
        };

        let config = resolve_config(&args, |name: &str| {
            (name == "FIGMA_ACCESS_TOKEN").then(|| "process-token".to_string())
        })
        .unwrap();

        assert_eq!(config.figma().access_token().unwrap(), "process-token");
        assert_eq!(config.figma().file_key().unwrap(), "dotenv-key");
    }

    #[test]
    fn test_file_key_argument_beats_environment() {
        let dir = tempfile::tempdir().unwrap();
        let config_path = dir.path().join("config.toml");
        let env_path = dir.path().join(".env");
        write(&config_path, "[figma]\nfile_key = \"config-key\"\n");
        write(&env_path, "FIGMA_FILE_KEY=dotenv-key\n");

        let args = Args {
            file_key: Some("arg-key".to_string()),
            config: Some(config_path),
            env_file: Some(env_path),
            ..Default::default()
        };

        let config = resolve_config(&args, |name: &str| {
            (name == "FIGMA_FILE_KEY").then(|| "env-key".to_string())
        })
        .unwrap();

        assert_eq!(config.figma().file_key().unwrap(), "arg-key");
    }

    #[test]
    fn test_missing_explicit_env_file() {
        let dir = tempfile::tempdir().unwrap();
        let config_path = dir.path().join("config.toml");
        write(&config_path, "");

        let args = Args {
            config: Some(config_path),
            env_file: Some(dir.path().join("missing.env")),
            ..Default::default()
        };

        assert!(matches!(
            resolve_config(&args, |_: &str| None),
            Err(FigweaveError::Config(_))
        ));
    }

    #[test]
    fn test_offline_run_without_credentials() {
        let dir = tempfile::tempdir().unwrap();
        let config_path = dir.path().join("config.toml");
        let input = dir.path().join("design.json");
        let output = dir.path().join("site");
        write(&config_path, "[style]\nembed_styles = false\n");
        write(
            &input,
            r#"{"name": "Offline", "document": {"id": "0:0", "type": "DOCUMENT", "children": [
                {"id": "1:1", "type": "FRAME",
                 "absoluteBoundingBox": {"x": 0, "y": 0, "width": 100, "height": 50}}
            ]}}"#,
        );

        let args = Args {
            input: Some(input),
            output: Some(output.clone()),
            config: Some(config_path),
            log_level: "off".to_string(),
            ..Default::default()
        };

        run(&args).unwrap();

        let html = fs::read_to_string(output.join("index.html")).unwrap();
        let css = fs::read_to_string(output.join("styles.css")).unwrap();
        assert!(html.contains("<title>Offline</title>"));
        assert!(html.contains("<link rel=\"stylesheet\" href=\"styles.css\">"));
        assert!(css.contains(".figma-frame-1-1 {"));
    }

    #[test]
    fn test_fetch_without_token_fails() {
        let dir = tempfile::tempdir().unwrap();
        let config_path = dir.path().join("config.toml");
        let env_path = dir.path().join(".env");
        write(&config_path, "[figma]\nfile_key = \"key\"\n");
        write(&env_path, "");

        let args = Args {
            config: Some(config_path),
            env_file: Some(env_path),
            output: Some(dir.path().join("site")),
            ..Default::default()
        };
        let config = resolve_config(&args, |_: &str| None).unwrap();

        assert!(matches!(
            Converter::new(config).fetch(),
            Err(FigweaveError::Config(
                figweave::config::ConfigError::MissingAccessToken
            ))
        ));
    }
}
