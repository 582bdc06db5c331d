//! Translation subsystem.
//!
//! # Data Flow
//! ```text
//! input file
//!     → job.rs (read, derive output path)
//!     → pipeline.rs (whole or chunked)
//!     → chunker.rs (byte-budget split)
//!     → client.rs (Translator, one call per chunk)
//!     → job.rs (write output only after every call succeeded)
//! ```

pub mod chunker;
pub mod client;
pub mod error;
pub mod job;
pub mod pipeline;

pub use chunker::{split_text, ChunkError};
pub use client::{AwsTranslator, Translator};
pub use error::{TranslateError, TranslateResult};
pub use job::{translate_document_file, translate_text_file, JobOptions};
pub use pipeline::{LanguagePair, TextMode};
