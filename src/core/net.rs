// src/core/net.rs
// Blocking HTTP(S) GET. Redirects are followed (the source URL is a short link).

use std::time::Duration;

use crate::config::consts::USER_AGENT;
use crate::error::{ForecastError, Result};

pub fn http_get(url: &str, timeout: Duration) -> Result<String> {
    let client = reqwest::blocking::Client::builder()
        .timeout(timeout)
        .user_agent(USER_AGENT)
        .build()
        .map_err(|e| ForecastError::unavailable(format!("HTTP client setup failed: {e}")))?;

    let resp = client
        .get(url)
        .send()
        .map_err(|e| ForecastError::unavailable(format!("HTTP error: {e} ({url})")))?;

    let status = resp.status();
    if !status.is_success() {
        return Err(ForecastError::unavailable(format!("HTTP {status} ({url})")));
    }

    resp.text()
        .map_err(|e| ForecastError::unavailable(format!("Read error: {e} ({url})")))
}
