//! CloudFront Lambda@Edge event types.
//!
//! Only the fields the router reads or writes are typed. Everything else is
//! kept in flattened `extra` maps so it serializes back unchanged.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Top-level event delivered to an origin-request trigger.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct CloudFrontEvent {
    #[serde(rename = "Records")]
    pub records: Vec<CloudFrontRecord>,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct CloudFrontRecord {
    pub cf: CloudFrontData,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct CloudFrontData {
    pub request: CloudFrontRequest,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// The viewer request as seen by the edge function.
#[derive(Debug, Clone, PartialEq, Default, Deserialize, Serialize)]
pub struct CloudFrontRequest {
    /// Lowercased header name → values.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub headers: Option<BTreeMap<String, HeaderValues>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub origin: Option<Origin>,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl CloudFrontRequest {
    /// Well-formed entries of a header.
    pub fn header_entries(&self, name: &str) -> Option<&[HeaderEntry]> {
        match self.headers.as_ref()?.get(name)? {
            HeaderValues::Entries(entries) => Some(entries),
            HeaderValues::Malformed(_) => None,
        }
    }

    /// First value of a header. `None` when the header is absent, empty,
    /// malformed, or its first entry carries no string value.
    pub fn first_header_value(&self, name: &str) -> Option<&str> {
        self.header_entries(name)?.first()?.value.as_deref()
    }

    /// Replace every value of a header with a single entry.
    pub fn set_header(&mut self, name: &str, value: impl Into<String>) {
        self.headers.get_or_insert_with(BTreeMap::new).insert(
            name.to_string(),
            HeaderValues::Entries(vec![HeaderEntry {
                key: Some(name.to_string()),
                value: Some(value.into()),
            }]),
        );
    }

    /// Domain of the S3 origin, if the request targets one.
    pub fn s3_domain(&self) -> Option<&str> {
        self.origin
            .as_ref()
            .and_then(|origin| origin.s3.as_ref())
            .map(|s3| s3.domain_name.as_str())
    }
}

/// Values of one header.
///
/// Lists that are not `[{key, value}]` string pairs are kept verbatim in
/// `Malformed` and never match a rule.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(untagged)]
pub enum HeaderValues {
    Entries(Vec<HeaderEntry>),
    Malformed(Value),
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct HeaderEntry {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub key: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
}

/// Origin descriptor. CloudFront sends either `s3` or `custom`.
#[derive(Debug, Clone, PartialEq, Default, Deserialize, Serialize)]
pub struct Origin {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub s3: Option<S3Origin>,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct S3Origin {
    pub domain_name: String,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}
