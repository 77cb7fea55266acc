//! Asynchronous JSON fetching with a unified error surface.
//!
//! Every outbound request in the application goes through [`fetch_json`]:
//! one GET, the whole body buffered, then parsed as JSON. The outcome is
//! always one of two failures or a parsed [`Value`]:
//!
//! - [`FetchError::Network`]: the transport failed (DNS, refused connection,
//!   TLS, reset, mid-stream disconnect) before a complete body arrived
//! - [`FetchError::Parse`]: a body arrived but is not valid JSON
//!
//! The fetcher holds no state between calls, performs no retries, and
//! configures no timeout beyond the client defaults, so any number of calls
//! may be in flight at once. [`join`] and [`race`] compose multiple fetches
//! for callers that want all results in order or only the first to settle.
//!
//! The HTTP status line is not inspected: the upstream APIs report errors as
//! JSON bodies, and those parse like any other response.

use futures::future::{join_all, select_all};
use once_cell::sync::Lazy;
use reqwest::Client;
use serde_json::Value;
use thiserror::Error;
use tracing::{debug, instrument, warn};

use crate::utils::truncate_for_log;

/// Shared HTTP client, reused across all requests for connection pooling.
static HTTP: Lazy<Client> = Lazy::new(Client::new);

/// The two ways a fetch can fail.
///
/// Both variants are terminal: the caller decides whether to log, substitute
/// a default, or stop a dependent chain. Nothing here is retried or wrapped.
#[derive(Debug, Error)]
pub enum FetchError {
    /// The transport reported a failure before a complete body arrived.
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),
    /// A complete body arrived but could not be parsed as JSON.
    #[error("invalid JSON in response body: {0}")]
    Parse(#[from] serde_json::Error),
}

impl FetchError {
    /// Short class label for structured logs.
    pub fn kind(&self) -> &'static str {
        match self {
            FetchError::Network(_) => "network",
            FetchError::Parse(_) => "parse",
        }
    }
}

/// Fetch a URL and parse the response body as JSON.
///
/// Issues exactly one GET per invocation and buffers the entire body before
/// parsing. Malformed URLs are not validated here; the transport rejects
/// them and the rejection surfaces as [`FetchError::Network`].
///
/// # Arguments
///
/// * `url` - An absolute URL to request
///
/// # Returns
///
/// The parsed JSON value, or a [`FetchError`] describing which stage failed.
#[instrument(level = "debug", skip_all, fields(%url))]
pub async fn fetch_json(url: &str) -> Result<Value, FetchError> {
    let response = HTTP.get(url).send().await?;
    let body = response.bytes().await?;

    match serde_json::from_slice::<Value>(&body) {
        Ok(value) => {
            debug!(bytes = body.len(), "parsed JSON response");
            Ok(value)
        }
        Err(e) => {
            warn!(
                error = %e,
                body_preview = %truncate_for_log(&String::from_utf8_lossy(&body), 120),
                "response body is not valid JSON"
            );
            Err(FetchError::Parse(e))
        }
    }
}

/// Deserialize an already-fetched JSON value into a concrete type.
///
/// A shape mismatch surfaces as [`FetchError::Parse`]: the body was JSON,
/// just not the JSON the caller asked for.
pub fn decode<T: serde::de::DeserializeOwned>(value: Value) -> Result<T, FetchError> {
    Ok(serde_json::from_value(value)?)
}

/// Fetch every URL concurrently and wait for all of them to settle.
///
/// The returned collection preserves input order regardless of which request
/// finishes first: `urls[i]` always produced the outcome at index `i`.
pub async fn join(urls: &[String]) -> Vec<Result<Value, FetchError>> {
    join_all(urls.iter().map(|url| fetch_json(url))).await
}

/// Fetch every URL concurrently and return the first outcome to settle.
///
/// "Settle" means success or failure: if the fastest request fails, that
/// failure is the race outcome even though a slower request might have
/// succeeded. Requests still in flight when the winner settles are dropped.
///
/// Returns the input index of the settled request alongside its outcome.
///
/// # Panics
///
/// Panics if `urls` is empty.
pub async fn race(urls: &[String]) -> (usize, Result<Value, FetchError>) {
    let in_flight = urls
        .iter()
        .map(|url| Box::pin(fetch_json(url)))
        .collect::<Vec<_>>();
    let (outcome, index, _unsettled) = select_all(in_flight).await;
    (index, outcome)
}
