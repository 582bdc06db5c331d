//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! routing + translation
//!     → tracing events with structured fields
//!     → logging.rs subscriber (stderr for the CLI, stdout for Lambda)
//! ```

pub mod logging;

pub use logging::{init_logging, LogTarget};
