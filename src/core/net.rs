// src/core/net.rs

// Blocking HTTP GET against the docs site. No retry; callers decide
// whether a failure is fatal or substitutes an empty result.

use std::time::Duration;

use log::debug;
use reqwest::blocking::Client;

use crate::config::consts::{HTTP_TIMEOUT_SECS, USER_AGENT};
use crate::error::PoolError;

/// Fetch a page and return its body text.
/// Non-2xx statuses are transport errors, same as connection failures.
pub fn http_get(url: &str) -> Result<String, PoolError> {
    debug!("GET {url}");

    let client = Client::builder()
        .timeout(Duration::from_secs(HTTP_TIMEOUT_SECS))
        .user_agent(USER_AGENT)
        .build()?;

    let resp = client.get(url).send()?.error_for_status()?;
    Ok(resp.text()?)
}
