//! Configuration schema definitions.
//!
//! This module defines the complete configuration structure for both tools.
//! All types derive Serde traits for deserialization from config files.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Alternate origin used for Spanish-speaking viewers.
pub const SPANISH_ASSETS_DOMAIN: &str = "my-spanish-assets-bucket.s3.us-east-1.amazonaws.com";

/// Per-request payload ceiling of the translation API, in UTF-8 bytes.
pub const DEFAULT_MAX_CHUNK_BYTES: usize = 10_000;

/// Root configuration.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct AppConfig {
    /// Edge router rules.
    pub edge: EdgeConfig,

    /// Translation client settings.
    pub translate: TranslateConfig,

    /// Observability settings.
    pub observability: ObservabilityConfig,
}

/// Edge router configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct EdgeConfig {
    /// Locale rules, checked in order. First match wins.
    pub rules: Vec<LocaleRuleConfig>,
}

impl Default for EdgeConfig {
    fn default() -> Self {
        Self {
            rules: vec![LocaleRuleConfig::default()],
        }
    }
}

/// Maps an `accept-language` prefix to an alternate S3 origin.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct LocaleRuleConfig {
    /// Prefix the first `accept-language` value must start with (case-sensitive).
    pub locale_prefix: String,

    /// S3 domain the origin is rewritten to.
    pub domain_name: String,
}

impl Default for LocaleRuleConfig {
    fn default() -> Self {
        Self {
            locale_prefix: "es".to_string(),
            domain_name: SPANISH_ASSETS_DOMAIN.to_string(),
        }
    }
}

/// How text is submitted to the translation API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum TranslateMode {
    /// Split into byte-bounded chunks, one request per chunk.
    #[default]
    Chunked,
    /// Submit the whole text in one request.
    Whole,
}

/// Translation client configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct TranslateConfig {
    /// Region override. Falls back to the ambient AWS configuration.
    pub region: Option<String>,

    /// Text submission mode.
    pub mode: TranslateMode,

    /// Maximum UTF-8 bytes per request in chunked mode.
    pub max_chunk_bytes: usize,

    /// Directory for output files. Defaults to the input file's directory.
    pub output_dir: Option<PathBuf>,

    /// File name prefix for translated text output.
    pub text_prefix: String,
}

impl Default for TranslateConfig {
    fn default() -> Self {
        Self {
            region: None,
            mode: TranslateMode::Chunked,
            max_chunk_bytes: DEFAULT_MAX_CHUNK_BYTES,
            output_dir: None,
            text_prefix: "translated-".to_string(),
        }
    }
}

/// Observability configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// Log level (trace, debug, info, warn, error).
    pub log_level: String,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
        }
    }
}
