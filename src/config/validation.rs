//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Validate value ranges (chunk budget > 0, wide enough for any character)
//! - Reject empty locale prefixes and domains
//!
//! # Design Decisions
//! - Returns all validation errors, not just first
//! - Validation is pure function: AppConfig → Result<(), Vec<ValidationError>>
//! - Runs before config is accepted into the system

use thiserror::Error;

use crate::config::schema::AppConfig;

/// Widest UTF-8 encoded character, in bytes.
const MAX_CHAR_BYTES: usize = 4;

/// A single semantic problem in a loaded configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("edge rule {index}: locale_prefix must not be empty")]
    EmptyLocalePrefix { index: usize },

    #[error("edge rule {index}: domain_name must not be empty")]
    EmptyDomain { index: usize },

    #[error("translate.max_chunk_bytes must be at least 4, got {0}")]
    ChunkBudgetTooSmall(usize),

    #[error("translate.text_prefix must not be empty")]
    EmptyTextPrefix,

    #[error("unknown log level '{0}'")]
    UnknownLogLevel(String),
}

/// Check a configuration, collecting every problem found.
pub fn validate_config(config: &AppConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    for (index, rule) in config.edge.rules.iter().enumerate() {
        if rule.locale_prefix.is_empty() {
            errors.push(ValidationError::EmptyLocalePrefix { index });
        }
        if rule.domain_name.trim().is_empty() {
            errors.push(ValidationError::EmptyDomain { index });
        }
    }

    if config.translate.max_chunk_bytes < MAX_CHAR_BYTES {
        errors.push(ValidationError::ChunkBudgetTooSmall(
            config.translate.max_chunk_bytes,
        ));
    }

    if config.translate.text_prefix.is_empty() {
        errors.push(ValidationError::EmptyTextPrefix);
    }

    let level = config.observability.log_level.to_ascii_lowercase();
    if !matches!(level.as_str(), "trace" | "debug" | "info" | "warn" | "error") {
        errors.push(ValidationError::UnknownLogLevel(
            config.observability.log_level.clone(),
        ));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
