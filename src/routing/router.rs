//! Locale-based origin rewriting.
//!
//! # Responsibilities
//! - Store compiled locale rules
//! - Find the first rule matching a request
//! - Point the S3 origin and `host` header at the rule's domain
//!
//! # Design Decisions
//! - Immutable after construction
//! - First match wins, in configuration order
//! - Never fails: requests that match nothing come back untouched

use thiserror::Error;

use crate::config::{EdgeConfig, LocaleRuleConfig};
use crate::routing::event::{CloudFrontEvent, CloudFrontRequest};
use crate::routing::matcher::{LocalePrefixMatcher, Matcher, ACCEPT_LANGUAGE};

/// A compiled locale rule.
#[derive(Debug)]
pub struct LocaleRoute {
    matcher: Box<dyn Matcher>,
    domain_name: String,
}

impl LocaleRoute {
    pub fn new(matcher: Box<dyn Matcher>, domain_name: impl Into<String>) -> Self {
        Self {
            matcher,
            domain_name: domain_name.into(),
        }
    }
}

impl From<&LocaleRuleConfig> for LocaleRoute {
    fn from(rule: &LocaleRuleConfig) -> Self {
        Self::new(
            Box::new(LocalePrefixMatcher::new(rule.locale_prefix.clone())),
            rule.domain_name.clone(),
        )
    }
}

/// What the router did with a request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RouteOutcome {
    /// Origin and host now point at this domain.
    Rewritten(String),
    /// A rule matched but the request has no S3 origin to rewrite.
    NoS3Origin,
    /// No rule matched.
    NoMatch,
}

/// Errors from decoding the shape of an edge event.
#[derive(Debug, Error)]
pub enum RoutingError {
    #[error("CloudFront event carries no records")]
    NoRecords,
}

/// Rewrites request origins based on the viewer's locale.
#[derive(Debug)]
pub struct EdgeRouter {
    routes: Vec<LocaleRoute>,
}

impl Default for EdgeRouter {
    fn default() -> Self {
        Self::from_config(&EdgeConfig::default())
    }
}

impl EdgeRouter {
    pub fn new(routes: Vec<LocaleRoute>) -> Self {
        Self { routes }
    }

    pub fn from_config(config: &EdgeConfig) -> Self {
        Self::new(config.rules.iter().map(LocaleRoute::from).collect())
    }

    /// First route whose matcher accepts the request.
    pub fn find(&self, req: &CloudFrontRequest) -> Option<&LocaleRoute> {
        self.routes.iter().find(|route| route.matcher.matches(req))
    }

    /// Rewrite a request in place.
    pub fn apply(&self, req: &mut CloudFrontRequest) -> RouteOutcome {
        let Some(route) = self.find(req) else {
            return RouteOutcome::NoMatch;
        };

        let Some(s3) = req.origin.as_mut().and_then(|origin| origin.s3.as_mut()) else {
            return RouteOutcome::NoS3Origin;
        };

        s3.domain_name = route.domain_name.clone();
        req.set_header("host", route.domain_name.clone());

        RouteOutcome::Rewritten(route.domain_name.clone())
    }

    /// Rewrite a request, returning it.
    pub fn rewrite_request(&self, mut req: CloudFrontRequest) -> CloudFrontRequest {
        let locale = req.first_header_value(ACCEPT_LANGUAGE).map(str::to_owned);

        match self.apply(&mut req) {
            RouteOutcome::Rewritten(domain) => {
                tracing::info!(
                    locale = locale.as_deref().unwrap_or_default(),
                    domain_name = %domain,
                    "Rewrote origin for viewer locale"
                );
            }
            RouteOutcome::NoS3Origin => {
                tracing::warn!(
                    locale = locale.as_deref().unwrap_or_default(),
                    "Locale matched but request has no S3 origin, leaving it unchanged"
                );
            }
            RouteOutcome::NoMatch => {
                tracing::debug!(locale = ?locale, "No locale rule matched");
            }
        }

        req
    }

    /// Rewrite every record of an event.
    pub fn rewrite_event(&self, mut event: CloudFrontEvent) -> CloudFrontEvent {
        for record in &mut event.records {
            let req = std::mem::take(&mut record.cf.request);
            record.cf.request = self.rewrite_request(req);
        }
        event
    }

    /// Lambda@Edge entry: rewrite the first record's request and return it.
    pub fn handle_event(&self, event: CloudFrontEvent) -> Result<CloudFrontRequest, RoutingError> {
        let record = event
            .records
            .into_iter()
            .next()
            .ok_or(RoutingError::NoRecords)?;
        Ok(self.rewrite_request(record.cf.request))
    }
}
