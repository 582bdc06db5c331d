//! Edge routing subsystem.
//!
//! # Data Flow
//! ```text
//! CloudFront origin-request event
//!     → event.rs (typed decode, unknown fields kept)
//!     → router.rs (rule lookup)
//!     → matcher.rs (evaluate accept-language)
//!     → origin.s3.domainName + host rewritten, or request untouched
//! ```
//!
//! # Design Decisions
//! - Rules compiled once, immutable at runtime
//! - No regex (prefix matching only)
//! - Deterministic: same input always produces the same request
//! - First match wins (configuration order)

pub mod event;
pub mod matcher;
pub mod router;

pub use event::{
    CloudFrontEvent, CloudFrontRequest, HeaderEntry, HeaderValues, Origin, S3Origin,
};
pub use router::{EdgeRouter, LocaleRoute, RouteOutcome, RoutingError};
