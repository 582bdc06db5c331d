//! Locale edge routing and translation tooling.
//!
//! - [`routing`]: CloudFront origin-request rewriter keyed on `accept-language`
//! - [`translation`]: chunking client over Amazon Translate for the CLIs
//! - [`config`]: TOML configuration shared by both
//! - [`observability`]: tracing subscriber setup

pub mod config;
pub mod observability;
pub mod routing;
pub mod translation;

pub use config::AppConfig;
pub use routing::EdgeRouter;
pub use translation::{AwsTranslator, Translator};
