//! Shared utilities for integration tests.

use std::sync::Mutex;

use async_trait::async_trait;
use serde_json::{json, Value};

use locale_edge::translation::{TranslateError, TranslateResult, Translator};

/// One recorded call to the mock service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Call {
    pub text: String,
    pub source: String,
    pub target: String,
}

/// In-process `Translator` that tags text with the target language.
#[derive(Default)]
pub struct MockTranslator {
    calls: Mutex<Vec<Call>>,
    fail_after: Option<usize>,
}

impl MockTranslator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fail every call once `n` calls have succeeded.
    #[allow(dead_code)]
    pub fn failing_after(n: usize) -> Self {
        Self {
            fail_after: Some(n),
            ..Self::default()
        }
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl Translator for MockTranslator {
    async fn translate_text(
        &self,
        text: &str,
        source: &str,
        target: &str,
    ) -> TranslateResult<String> {
        let mut calls = self.calls.lock().unwrap();
        if self.fail_after.is_some_and(|n| calls.len() >= n) {
            return Err(TranslateError::Api("ThrottlingException: rate exceeded".into()));
        }
        calls.push(Call {
            text: text.to_string(),
            source: source.to_string(),
            target: target.to_string(),
        });
        Ok(format!("[{target}]{text}"))
    }

    async fn translate_document(
        &self,
        content: Vec<u8>,
        content_type: &str,
        source: &str,
        target: &str,
    ) -> TranslateResult<Vec<u8>> {
        let text = String::from_utf8_lossy(&content).into_owned();
        let mut calls = self.calls.lock().unwrap();
        if self.fail_after.is_some_and(|n| calls.len() >= n) {
            return Err(TranslateError::Api("UnsupportedLanguagePairException".into()));
        }
        calls.push(Call {
            text: format!("{content_type}:{text}"),
            source: source.to_string(),
            target: target.to_string(),
        });
        Ok(format!("[{target}]{text}").into_bytes())
    }
}

/// An origin-request event as CloudFront delivers it.
#[allow(dead_code)]
pub fn origin_request_event(accept_language: Option<&str>) -> Value {
    let mut headers = json!({
        "host": [{ "key": "Host", "value": "default-assets.s3.us-east-1.amazonaws.com" }],
        "user-agent": [{ "key": "User-Agent", "value": "Amazon CloudFront" }],
        "via": [{ "key": "Via", "value": "2.0 2afae0d44e2540f472c0635ab62c232b.cloudfront.net (CloudFront)" }]
    });
    if let Some(value) = accept_language {
        headers["accept-language"] = json!([{ "key": "Accept-Language", "value": value }]);
    }

    json!({
        "Records": [{
            "cf": {
                "config": {
                    "distributionDomainName": "d111111abcdef8.cloudfront.net",
                    "distributionId": "EDFDVBD6EXAMPLE",
                    "eventType": "origin-request",
                    "requestId": "4TyzHTaYWb1GX1qTfsHhEqV6HUDd_BzoBZnwfnvQc_1oF26ClkoUSEQ=="
                },
                "request": {
                    "clientIp": "203.0.113.178",
                    "headers": headers,
                    "method": "GET",
                    "origin": {
                        "s3": {
                            "authMethod": "origin-access-identity",
                            "customHeaders": {},
                            "domainName": "default-assets.s3.us-east-1.amazonaws.com",
                            "path": "",
                            "region": "us-east-1"
                        }
                    },
                    "querystring": "",
                    "uri": "/index.html"
                }
            }
        }]
    })
}
