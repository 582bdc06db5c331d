//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! config file (TOML, optional)
//!     → loader.rs (parse & deserialize)
//!     → validation.rs (semantic checks)
//!     → AppConfig (validated, immutable)
//!     → CLI flags override individual fields
//! ```
//!
//! # Design Decisions
//! - Config is immutable once loaded
//! - All fields have defaults to allow minimal configs (or none at all)
//! - Validation separates syntactic (serde) from semantic checks

pub mod loader;
pub mod schema;
pub mod validation;

pub use loader::{
    load_config, load_or_default, load_with_overrides, ConfigError, TranslateOverrides,
};
pub use schema::{
    AppConfig, EdgeConfig, LocaleRuleConfig, ObservabilityConfig, TranslateConfig,
    TranslateMode, DEFAULT_MAX_CHUNK_BYTES, SPANISH_ASSETS_DOMAIN,
};
