//! File-level translation runs against an in-process translator.

use std::path::PathBuf;

use locale_edge::translation::job::CONTENT_TYPE_HTML;
use locale_edge::translation::{
    translate_document_file, translate_text_file, JobOptions, LanguagePair, TextMode,
    TranslateError,
};

mod common;
use common::MockTranslator;

fn options(mode: TextMode, output_dir: Option<PathBuf>) -> JobOptions {
    JobOptions {
        mode,
        output_dir,
        text_prefix: "translated-".into(),
    }
}

#[tokio::test]
async fn test_chunked_file_translation() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("story.txt");
    let text = "Érase una vez 🦀. ".repeat(1_000);
    std::fs::write(&input, &text).unwrap();

    let translator = MockTranslator::new();
    let languages = LanguagePair::new("es", "en");
    let output = translate_text_file(
        &translator,
        &input,
        &languages,
        &options(TextMode::Chunked { max_bytes: 10_000 }, None),
    )
    .await
    .unwrap();

    assert_eq!(output, dir.path().join("translated-story.txt"));

    let calls = translator.calls();
    assert!(calls.len() >= 2);
    assert!(calls.iter().all(|c| c.text.len() <= 10_000));
    assert!(calls.iter().all(|c| c.source == "es" && c.target == "en"));
    let rejoined: String = calls.iter().map(|c| c.text.as_str()).collect();
    assert_eq!(rejoined, text);

    let written = std::fs::read_to_string(&output).unwrap();
    let expected: String = calls.iter().map(|c| format!("[en]{}", c.text)).collect();
    assert_eq!(written, expected);
}

#[tokio::test]
async fn test_whole_mode_sends_one_request() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("short.txt");
    std::fs::write(&input, "hello").unwrap();

    let translator = MockTranslator::new();
    let output = translate_text_file(
        &translator,
        &input,
        &LanguagePair::new("en", "fr"),
        &options(TextMode::Whole, None),
    )
    .await
    .unwrap();

    assert_eq!(translator.calls().len(), 1);
    assert_eq!(std::fs::read_to_string(output).unwrap(), "[fr]hello");
}

#[tokio::test]
async fn test_failure_writes_nothing() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("long.txt");
    std::fs::write(&input, "a".repeat(25)).unwrap();

    let translator = MockTranslator::failing_after(1);
    let err = translate_text_file(
        &translator,
        &input,
        &LanguagePair::new("en", "de"),
        &options(TextMode::Chunked { max_bytes: 10 }, None),
    )
    .await
    .unwrap_err();

    assert!(matches!(err, TranslateError::Api(_)));
    assert!(!dir.path().join("translated-long.txt").exists());
}

#[tokio::test]
async fn test_missing_input_is_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let translator = MockTranslator::new();

    let err = translate_text_file(
        &translator,
        &dir.path().join("nope.txt"),
        &LanguagePair::new("en", "es"),
        &options(TextMode::Whole, None),
    )
    .await
    .unwrap_err();

    assert!(matches!(err, TranslateError::Io { .. }));
    assert!(translator.calls().is_empty());
}

#[tokio::test]
async fn test_document_goes_to_created_output_dir() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("index.html");
    std::fs::write(&input, "<p>hello</p>").unwrap();
    let out_dir = dir.path().join("out").join("es");

    let translator = MockTranslator::new();
    let output = translate_document_file(
        &translator,
        &input,
        None,
        &LanguagePair::new("en", "es"),
        &options(TextMode::Whole, Some(out_dir.clone())),
    )
    .await
    .unwrap();

    assert_eq!(output, out_dir.join("es-index.html"));
    assert_eq!(std::fs::read_to_string(&output).unwrap(), "[es]<p>hello</p>");
    assert_eq!(
        translator.calls()[0].text,
        format!("{CONTENT_TYPE_HTML}:<p>hello</p>")
    );
}

#[tokio::test]
async fn test_document_content_type_override() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("page.txt");
    std::fs::write(&input, "hi").unwrap();

    let translator = MockTranslator::new();
    translate_document_file(
        &translator,
        &input,
        Some("text/html"),
        &LanguagePair::new("en", "it"),
        &options(TextMode::Whole, None),
    )
    .await
    .unwrap();

    assert!(translator.calls()[0].text.starts_with("text/html:"));
    assert!(dir.path().join("it-page.txt").exists());
}
