//! Application configuration.
//!
//! [`AppConfig`] is loaded once at startup and passed down by value.  The
//! CLI layer owns config; the core crate only receives the plain values it
//! needs.
//!
//! # Resolution order (highest priority first)
//!
//! 1. CLI flags (handled at the call-site, not here)
//! 2. The `--config` file, or the platform config file if it exists
//! 3. Built-in defaults (always present)

use std::path::{Path, PathBuf};

use config::{Config, File, FileFormat};
use serde::{Deserialize, Serialize};
use sprout_core::application::{DEFAULT_DESTINATION, DEFAULT_MAX_NAME_ATTEMPTS};
use tracing::debug;

use crate::error::{CliError, CliResult};

/// Application configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Prompt defaults.
    pub defaults: Defaults,
    /// Output settings.
    pub output: OutputConfig,
    /// Template location override.
    #[serde(default)]
    pub templates: TemplateConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Defaults {
    /// Value pre-filled at the destination prompt.
    pub destination: String,
    pub max_name_attempts: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    pub no_color: bool,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TemplateConfig {
    /// Directory holding the template trees instead of the bundled one.
    pub root: Option<PathBuf>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            defaults: Defaults {
                destination: DEFAULT_DESTINATION.into(),
                max_name_attempts: DEFAULT_MAX_NAME_ATTEMPTS,
            },
            output: OutputConfig { no_color: false },
            templates: TemplateConfig::default(),
        }
    }
}

impl AppConfig {
    /// Load configuration on top of the built-in defaults.
    ///
    /// `config_file` is the path passed via `--config` and must exist.
    /// Without it the platform config file is read if present.
    pub fn load(config_file: Option<&Path>) -> CliResult<Self> {
        match config_file {
            Some(path) => Self::build(Some((path, true))),
            None => {
                let fallback = Self::config_path();
                Self::build(fallback.as_deref().map(|p| (p, false)))
            }
        }
    }

    /// Platform config file, e.g. `~/.config/sprout/config.toml`.
    pub fn config_path() -> Option<PathBuf> {
        directories::ProjectDirs::from("com", "sprout", "sprout")
            .map(|d| d.config_dir().join("config.toml"))
    }

    fn build(file: Option<(&Path, bool)>) -> CliResult<Self> {
        let mut builder = Config::builder()
            .set_default("defaults.destination", DEFAULT_DESTINATION)
            .and_then(|b| {
                b.set_default(
                    "defaults.max_name_attempts",
                    i64::from(DEFAULT_MAX_NAME_ATTEMPTS),
                )
            })
            .and_then(|b| b.set_default("output.no_color", false))
            .map_err(config_error)?;

        if let Some((path, required)) = file {
            debug!(path = %path.display(), required, "config file source");
            builder = builder.add_source(
                File::from(path)
                    .format(FileFormat::Toml)
                    .required(required),
            );
        }

        builder
            .build()
            .and_then(|config| config.try_deserialize())
            .map_err(config_error)
    }
}

fn config_error(err: config::ConfigError) -> CliError {
    CliError::ConfigError {
        message: err.to_string(),
        source: Some(Box::new(err)),
    }
}
