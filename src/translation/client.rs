//! Translation service client.
//!
//! # Responsibilities
//! - Define the `Translator` seam the pipeline talks to
//! - Wrap the AWS Translate SDK client behind it
//!
//! # Design Decisions
//! - The client is built explicitly and passed in; there is no global handle
//! - Credentials and region come from the ambient AWS configuration
//! - One call per request, no retries

use async_trait::async_trait;
use aws_config::BehaviorVersion;
use aws_sdk_translate::config::Region;
use aws_sdk_translate::error::DisplayErrorContext;
use aws_sdk_translate::primitives::Blob;
use aws_sdk_translate::types::Document;

use crate::translation::error::{TranslateError, TranslateResult};

/// A remote translation service.
#[async_trait]
pub trait Translator: Send + Sync {
    /// Translate plain text between two language codes.
    async fn translate_text(&self, text: &str, source: &str, target: &str)
        -> TranslateResult<String>;

    /// Translate a whole document, returning the translated bytes.
    async fn translate_document(
        &self,
        content: Vec<u8>,
        content_type: &str,
        source: &str,
        target: &str,
    ) -> TranslateResult<Vec<u8>>;
}

/// `Translator` backed by Amazon Translate.
#[derive(Clone, Debug)]
pub struct AwsTranslator {
    client: aws_sdk_translate::Client,
}

impl AwsTranslator {
    /// Wrap an already configured SDK client.
    pub fn new(client: aws_sdk_translate::Client) -> Self {
        Self { client }
    }

    /// Build a client from the ambient AWS configuration.
    ///
    /// # Arguments
    /// * `region` - Overrides the region resolved from the environment
    pub async fn from_env(region: Option<String>) -> Self {
        let mut loader = aws_config::defaults(BehaviorVersion::latest());
        if let Some(region) = region {
            loader = loader.region(Region::new(region));
        }
        let sdk_config = loader.load().await;

        tracing::debug!(
            region = ?sdk_config.region(),
            "Translate client initialized"
        );

        Self::new(aws_sdk_translate::Client::new(&sdk_config))
    }
}

#[async_trait]
impl Translator for AwsTranslator {
    async fn translate_text(
        &self,
        text: &str,
        source: &str,
        target: &str,
    ) -> TranslateResult<String> {
        let output = self
            .client
            .translate_text()
            .text(text)
            .source_language_code(source)
            .target_language_code(target)
            .send()
            .await
            .map_err(|e| TranslateError::Api(DisplayErrorContext(&e).to_string()))?;

        Ok(output.translated_text().to_string())
    }

    async fn translate_document(
        &self,
        content: Vec<u8>,
        content_type: &str,
        source: &str,
        target: &str,
    ) -> TranslateResult<Vec<u8>> {
        let document = Document::builder()
            .content(Blob::new(content))
            .content_type(content_type)
            .build()
            .map_err(|e| TranslateError::InvalidRequest(e.to_string()))?;

        let output = self
            .client
            .translate_document()
            .document(document)
            .source_language_code(source)
            .target_language_code(target)
            .send()
            .await
            .map_err(|e| TranslateError::Api(DisplayErrorContext(&e).to_string()))?;

        let translated = output
            .translated_document()
            .ok_or(TranslateError::MissingDocument)?;

        Ok(translated.content().as_ref().to_vec())
    }
}
