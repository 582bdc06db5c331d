//! In-memory translation pipeline.
//!
//! # Data Flow
//! ```text
//! text
//!     → chunker.rs (Chunked mode only)
//!     → Translator::translate_text, once per chunk, in order
//!     → concatenated result
//! ```
//!
//! The first failing call aborts the whole run.

use std::time::Instant;

use crate::config::{TranslateConfig, TranslateMode};
use crate::translation::chunker::split_text;
use crate::translation::client::Translator;
use crate::translation::error::TranslateResult;

/// Source and target language codes for one run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LanguagePair {
    pub source: String,
    pub target: String,
}

impl LanguagePair {
    pub fn new(source: impl Into<String>, target: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            target: target.into(),
        }
    }
}

/// How text is submitted to the service.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextMode {
    /// One request with the entire text.
    Whole,
    /// One request per chunk of at most `max_bytes` UTF-8 bytes.
    Chunked { max_bytes: usize },
}

impl From<&TranslateConfig> for TextMode {
    fn from(config: &TranslateConfig) -> Self {
        match config.mode {
            TranslateMode::Whole => TextMode::Whole,
            TranslateMode::Chunked => TextMode::Chunked {
                max_bytes: config.max_chunk_bytes,
            },
        }
    }
}

/// Translate `text`, splitting it first when `mode` asks for it.
pub async fn translate_text<T>(
    translator: &T,
    text: &str,
    languages: &LanguagePair,
    mode: TextMode,
) -> TranslateResult<String>
where
    T: Translator + ?Sized,
{
    let chunks = match mode {
        TextMode::Whole => vec![text],
        TextMode::Chunked { max_bytes } => split_text(text, max_bytes)?,
    };

    let total = chunks.len();
    let mut translated = String::with_capacity(text.len());

    for (index, chunk) in chunks.into_iter().enumerate() {
        let started = Instant::now();
        let piece = translator
            .translate_text(chunk, &languages.source, &languages.target)
            .await?;

        tracing::debug!(
            chunk = index + 1,
            total,
            bytes_in = chunk.len(),
            bytes_out = piece.len(),
            elapsed_ms = started.elapsed().as_millis() as u64,
            "Chunk translated"
        );

        translated.push_str(&piece);
    }

    Ok(translated)
}

/// Translate a whole document through the document API.
pub async fn translate_document<T>(
    translator: &T,
    content: Vec<u8>,
    content_type: &str,
    languages: &LanguagePair,
) -> TranslateResult<Vec<u8>>
where
    T: Translator + ?Sized,
{
    let bytes_in = content.len();
    let translated = translator
        .translate_document(content, content_type, &languages.source, &languages.target)
        .await?;

    tracing::debug!(
        content_type,
        bytes_in,
        bytes_out = translated.len(),
        "Document translated"
    );

    Ok(translated)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::translation::error::TranslateError;
    use async_trait::async_trait;
    use std::sync::Mutex;

    /// Upper-cases text and records every call.
    #[derive(Default)]
    struct Shouting {
        calls: Mutex<Vec<String>>,
        fail_on: Option<usize>,
    }

    #[async_trait]
    impl Translator for Shouting {
        async fn translate_text(
            &self,
            text: &str,
            _source: &str,
            _target: &str,
        ) -> TranslateResult<String> {
            let mut calls = self.calls.lock().unwrap();
            if self.fail_on == Some(calls.len()) {
                return Err(TranslateError::Api("quota exceeded".into()));
            }
            calls.push(text.to_string());
            Ok(text.to_uppercase())
        }

        async fn translate_document(
            &self,
            content: Vec<u8>,
            _content_type: &str,
            _source: &str,
            _target: &str,
        ) -> TranslateResult<Vec<u8>> {
            Ok(content.to_ascii_uppercase())
        }
    }

    fn pair() -> LanguagePair {
        LanguagePair::new("en", "es")
    }

    #[tokio::test]
    async fn test_whole_mode_single_call() {
        let translator = Shouting::default();
        let out = translate_text(&translator, "hello world", &pair(), TextMode::Whole)
            .await
            .unwrap();

        assert_eq!(out, "HELLO WORLD");
        assert_eq!(translator.calls.lock().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_chunked_mode_preserves_order() {
        let translator = Shouting::default();
        let out = translate_text(
            &translator,
            "abcdefghij",
            &pair(),
            TextMode::Chunked { max_bytes: 4 },
        )
        .await
        .unwrap();

        assert_eq!(out, "ABCDEFGHIJ");
        assert_eq!(
            *translator.calls.lock().unwrap(),
            vec!["abcd", "efgh", "ij"]
        );
    }

    #[tokio::test]
    async fn test_failure_aborts_run() {
        let translator = Shouting {
            fail_on: Some(1),
            ..Default::default()
        };
        let err = translate_text(
            &translator,
            "abcdefghij",
            &pair(),
            TextMode::Chunked { max_bytes: 4 },
        )
        .await
        .unwrap_err();

        assert!(matches!(err, TranslateError::Api(_)));
        assert_eq!(translator.calls.lock().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_chunk_error_before_any_call() {
        let translator = Shouting::default();
        let err = translate_text(&translator, "€€", &pair(), TextMode::Chunked { max_bytes: 2 })
            .await
            .unwrap_err();

        assert!(matches!(err, TranslateError::Chunk(_)));
        assert!(translator.calls.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_document_passthrough() {
        let translator = Shouting::default();
        let out = translate_document(&translator, b"<p>hi</p>".to_vec(), "text/html", &pair())
            .await
            .unwrap();
        assert_eq!(out, b"<P>HI</P>");
    }

    #[test]
    fn test_mode_from_config() {
        let mut config = TranslateConfig::default();
        assert_eq!(TextMode::from(&config), TextMode::Chunked { max_bytes: 10_000 });

        config.mode = TranslateMode::Whole;
        assert_eq!(TextMode::from(&config), TextMode::Whole);
    }
}
