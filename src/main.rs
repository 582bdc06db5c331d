//! Lambda@Edge origin-request handler.
//!
//! ```text
//!   viewer ──▶ CloudFront ──▶ origin-request trigger ──▶ S3 bucket
//!                                  │
//!                       accept-language starts with "es"?
//!                         yes: origin + host → Spanish assets bucket
//!                         no:  request passes through untouched
//! ```
//!
//! Lambda@Edge functions cannot read environment variables, so the router
//! always runs with the built-in rules.

use std::sync::Arc;

use lambda_runtime::{service_fn, Error, LambdaEvent};

use locale_edge::observability::{init_logging, LogTarget};
use locale_edge::routing::{CloudFrontEvent, CloudFrontRequest};
use locale_edge::EdgeRouter;

async fn handle(
    router: Arc<EdgeRouter>,
    event: LambdaEvent<CloudFrontEvent>,
) -> Result<CloudFrontRequest, Error> {
    tracing::debug!(
        request_id = %event.context.request_id,
        event = ?event.payload,
        "Event received"
    );

    Ok(router.handle_event(event.payload)?)
}

#[tokio::main]
async fn main() -> Result<(), Error> {
    init_logging("info", LogTarget::Lambda);

    let router = Arc::new(EdgeRouter::default());
    tracing::info!(router = ?router, "edge-router starting");

    lambda_runtime::run(service_fn(move |event| {
        let router = Arc::clone(&router);
        async move { handle(router, event).await }
    }))
    .await
}
