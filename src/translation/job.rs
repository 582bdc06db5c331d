//! File-level translation jobs.
//!
//! # Responsibilities
//! - Read the input file
//! - Run the pipeline
//! - Derive the output path and write the result
//!
//! # Design Decisions
//! - Output is written only after every request succeeded
//! - Output lands next to the input unless an output directory is given,
//!   which is created on demand

use std::path::{Path, PathBuf};

use crate::config::TranslateConfig;
use crate::translation::client::Translator;
use crate::translation::error::{TranslateError, TranslateResult};
use crate::translation::pipeline::{self, LanguagePair, TextMode};

pub const CONTENT_TYPE_PLAIN: &str = "text/plain";
pub const CONTENT_TYPE_HTML: &str = "text/html";
pub const CONTENT_TYPE_DOCX: &str =
    "application/vnd.openxmlformats-officedocument.wordprocessingml.document";

/// Settings shared by text and document jobs.
#[derive(Debug, Clone)]
pub struct JobOptions {
    pub mode: TextMode,
    pub output_dir: Option<PathBuf>,
    pub text_prefix: String,
}

impl From<&TranslateConfig> for JobOptions {
    fn from(config: &TranslateConfig) -> Self {
        Self {
            mode: TextMode::from(config),
            output_dir: config.output_dir.clone(),
            text_prefix: config.text_prefix.clone(),
        }
    }
}

/// Guess a document content type from the file extension.
pub fn infer_content_type(path: &Path) -> &'static str {
    let extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.to_ascii_lowercase());

    match extension.as_deref() {
        Some("html") | Some("htm") => CONTENT_TYPE_HTML,
        Some("docx") => CONTENT_TYPE_DOCX,
        _ => CONTENT_TYPE_PLAIN,
    }
}

/// `<dir>/<prefix><file name>`, where `dir` is `output_dir` or the input's parent.
pub fn prefixed_output_path(input: &Path, prefix: &str, output_dir: Option<&Path>) -> PathBuf {
    let file_name = input
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default();
    let dir = output_dir
        .map(Path::to_path_buf)
        .or_else(|| input.parent().map(Path::to_path_buf))
        .unwrap_or_default();

    dir.join(format!("{prefix}{file_name}"))
}

async fn write_output(path: &Path, contents: &[u8]) -> TranslateResult<()> {
    if let Some(dir) = path.parent().filter(|dir| !dir.as_os_str().is_empty()) {
        tokio::fs::create_dir_all(dir)
            .await
            .map_err(|e| TranslateError::io(dir, e))?;
    }
    tokio::fs::write(path, contents)
        .await
        .map_err(|e| TranslateError::io(path, e))
}

/// Translate a UTF-8 text file, returning the path written.
pub async fn translate_text_file<T>(
    translator: &T,
    input: &Path,
    languages: &LanguagePair,
    options: &JobOptions,
) -> TranslateResult<PathBuf>
where
    T: Translator + ?Sized,
{
    let text = tokio::fs::read_to_string(input)
        .await
        .map_err(|e| TranslateError::io(input, e))?;

    tracing::info!(
        input = %input.display(),
        source = %languages.source,
        target = %languages.target,
        bytes = text.len(),
        mode = ?options.mode,
        "Translating text file"
    );

    let translated = pipeline::translate_text(translator, &text, languages, options.mode).await?;

    let output = prefixed_output_path(input, &options.text_prefix, options.output_dir.as_deref());
    write_output(&output, translated.as_bytes()).await?;

    tracing::info!(output = %output.display(), "Translated text written");
    Ok(output)
}

/// Translate a document through the document API, returning the path written.
///
/// The output file is named `<target>-<file name>`.
pub async fn translate_document_file<T>(
    translator: &T,
    input: &Path,
    content_type: Option<&str>,
    languages: &LanguagePair,
    options: &JobOptions,
) -> TranslateResult<PathBuf>
where
    T: Translator + ?Sized,
{
    let content = tokio::fs::read(input)
        .await
        .map_err(|e| TranslateError::io(input, e))?;
    let content_type = content_type.unwrap_or_else(|| infer_content_type(input));

    tracing::info!(
        input = %input.display(),
        source = %languages.source,
        target = %languages.target,
        content_type,
        bytes = content.len(),
        "Translating document"
    );

    let translated =
        pipeline::translate_document(translator, content, content_type, languages).await?;

    let prefix = format!("{}-", languages.target);
    let output = prefixed_output_path(input, &prefix, options.output_dir.as_deref());
    write_output(&output, &translated).await?;

    tracing::info!(output = %output.display(), "Translated document written");
    Ok(output)
}
