//! Request matching logic.
//!
//! # Responsibilities
//! - Match the viewer's preferred locale (first `accept-language` value)
//!
//! # Design Decisions
//! - Locale matching is case-sensitive and anchored at the start
//! - Absent, empty or malformed header never matches
//! - No regex: a prefix check is all the rule needs

use crate::routing::event::CloudFrontRequest;

/// Header carrying the viewer's language preference.
pub const ACCEPT_LANGUAGE: &str = "accept-language";

/// Trait for matching requests against conditions.
pub trait Matcher: Send + Sync + std::fmt::Debug {
    /// Returns true if the request matches this condition.
    fn matches(&self, req: &CloudFrontRequest) -> bool;
}

/// Matches the first `accept-language` value against a prefix.
#[derive(Debug, Clone)]
pub struct LocalePrefixMatcher {
    prefix: String,
}

impl LocalePrefixMatcher {
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
        }
    }
}

impl Matcher for LocalePrefixMatcher {
    fn matches(&self, req: &CloudFrontRequest) -> bool {
        req.first_header_value(ACCEPT_LANGUAGE)
            .map(|value| value.starts_with(&self.prefix))
            .unwrap_or(false)
    }
}
