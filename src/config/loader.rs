//! Configuration loading from disk.

use std::fs;
use std::path::{Path, PathBuf};

use crate::config::schema::{AppConfig, TranslateConfig, TranslateMode};
use crate::config::validation::{validate_config, ValidationError};

/// Error type for configuration loading.
#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(toml::de::Error),
    Validation(Vec<ValidationError>),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "IO error: {}", e),
            ConfigError::Parse(e) => write!(f, "Parse error: {}", e),
            ConfigError::Validation(errors) => {
                write!(f, "Validation failed: ")?;
                for (i, err) in errors.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}", err)?;
                }
                Ok(())
            }
        }
    }
}

impl std::error::Error for ConfigError {}

/// Load and validate configuration from a TOML file.
pub fn load_config(path: &Path) -> Result<AppConfig, ConfigError> {
    let content = fs::read_to_string(path).map_err(ConfigError::Io)?;
    parse_config(&content)
}

/// Parse and validate configuration from TOML text.
pub fn parse_config(content: &str) -> Result<AppConfig, ConfigError> {
    let config: AppConfig = toml::from_str(content).map_err(ConfigError::Parse)?;

    validate_config(&config).map_err(ConfigError::Validation)?;

    Ok(config)
}

/// Load the file when a path is given, otherwise fall back to defaults.
pub fn load_or_default(path: Option<&Path>) -> Result<AppConfig, ConfigError> {
    match path {
        Some(path) => {
            let config = load_config(path)?;
            tracing::debug!(path = %path.display(), "Configuration loaded");
            Ok(config)
        }
        None => Ok(AppConfig::default()),
    }
}

/// Command-line values that take precedence over the file.
#[derive(Debug, Clone, Default)]
pub struct TranslateOverrides {
    pub mode: Option<TranslateMode>,
    pub max_chunk_bytes: Option<usize>,
    pub output_dir: Option<PathBuf>,
    pub region: Option<String>,
}

impl TranslateOverrides {
    fn apply(self, translate: &mut TranslateConfig) {
        if let Some(mode) = self.mode {
            translate.mode = mode;
        }
        if let Some(max_chunk_bytes) = self.max_chunk_bytes {
            translate.max_chunk_bytes = max_chunk_bytes;
        }
        if self.output_dir.is_some() {
            translate.output_dir = self.output_dir;
        }
        if self.region.is_some() {
            translate.region = self.region;
        }
    }
}

/// Load (or default) the config, apply overrides, then validate the result.
pub fn load_with_overrides(
    path: Option<&Path>,
    overrides: TranslateOverrides,
) -> Result<AppConfig, ConfigError> {
    let mut config = load_or_default(path)?;
    overrides.apply(&mut config.translate);

    validate_config(&config).map_err(ConfigError::Validation)?;

    Ok(config)
}
