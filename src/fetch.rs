// SPDX-License-Identifier: PMPL-1.0-or-later
//! Fetch-and-parse collaborator.
//!
//! Resolves a URL to a [`PageDocument`] with a single blocking GET.
//! Failures (DNS, connection, TLS, timeout, non-success status) are not
//! retried; the caller decides what a failed run looks like.

use crate::dom::PageDocument;
use std::time::Duration;
use thiserror::Error;
use tracing::debug;

/// Some servers refuse obviously non-browser clients
const USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 \
                          (KHTML, like Gecko) Chrome/91.0.4472.124 Safari/537.36";

/// A fatal fetch failure.
#[derive(Debug, Error)]
pub enum FetchError {
    /// The request could not complete: connection refused, DNS
    /// resolution, TLS verification, or timeout.
    #[error("request to {url} failed: {source}")]
    Request {
        url: String,
        #[source]
        source: reqwest::Error,
    },
    /// The server answered with a non-success status.
    #[error("{url} returned HTTP status {status}")]
    Status {
        url: String,
        status: reqwest::StatusCode,
    },
}

/// Fetch a URL and parse the body into a document.
pub fn fetch_document(url: &str, timeout: Duration) -> Result<PageDocument, FetchError> {
    let request_error = |source| FetchError::Request {
        url: url.to_string(),
        source,
    };

    let client = reqwest::blocking::Client::builder()
        .user_agent(USER_AGENT)
        .timeout(timeout)
        .build()
        .map_err(request_error)?;

    debug!("GET {}", url);
    let response = client.get(url).send().map_err(request_error)?;

    let status = response.status();
    if !status.is_success() {
        return Err(FetchError::Status {
            url: url.to_string(),
            status,
        });
    }

    let body = response.text().map_err(request_error)?;
    Ok(PageDocument::parse(&body))
}
