use std::time::Duration;

use once_cell::sync::Lazy;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, CONNECTION, USER_AGENT};
use reqwest::Client;

use crate::strategy::ProbeTarget;

/// Transport-level failure classes for a single attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProbeError {
    ConnectionFailure,
    Timeout,
    TransportError,
}

/// Result of a single probe attempt. Any HTTP response counts as live,
/// whatever its status class; filtering by status is the caller's business.
#[derive(Debug, Clone)]
pub struct ProbeOutcome {
    pub target: ProbeTarget,
    pub succeeded: bool,
    pub status: Option<u16>,
    pub error: Option<ProbeError>,
}

/// Browser-like defaults sent with every probe; per-target overrides win.
static DEFAULT_HEADERS: Lazy<HeaderMap> = Lazy::new(|| {
    let mut headers = HeaderMap::new();
    headers.insert(
        USER_AGENT,
        HeaderValue::from_static("Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36"),
    );
    headers.insert(ACCEPT, HeaderValue::from_static("*/*"));
    headers.insert(CONNECTION, HeaderValue::from_static("keep-alive"));
    headers
});

/// Issue one GET for `target` and classify what came back. No retries at
/// this layer; retry policy, if any, belongs to the caller.
pub async fn probe(client: &Client, target: ProbeTarget, timeout: Duration) -> ProbeOutcome {
    let mut request = client.get(&target.url).headers(DEFAULT_HEADERS.clone());
    for (name, value) in &target.header_overrides {
        request = request.header(name.as_str(), value.as_str());
    }

    match tokio::time::timeout(timeout, request.send()).await {
        Ok(Ok(response)) => ProbeOutcome {
            succeeded: true,
            status: Some(response.status().as_u16()),
            error: None,
            target,
        },
        Ok(Err(e)) => {
            tracing::debug!(url = %target.url, error = %e, "probe attempt failed");
            ProbeOutcome {
                succeeded: false,
                status: None,
                error: Some(classify(&e)),
                target,
            }
        }
        Err(_) => {
            tracing::debug!(url = %target.url, "probe attempt timed out");
            ProbeOutcome {
                succeeded: false,
                status: None,
                error: Some(ProbeError::Timeout),
                target,
            }
        }
    }
}

fn classify(e: &reqwest::Error) -> ProbeError {
    if e.is_timeout() {
        ProbeError::Timeout
    } else if e.is_connect() {
        ProbeError::ConnectionFailure
    } else {
        ProbeError::TransportError
    }
}
