//! Transport metadata returned alongside decoded values

use reqwest::header::HeaderMap;
use serde::Serialize;
use std::time::Duration;

/// Rate limit state reported by the API on every response.
///
/// The API sends these as decimal strings (`"598.0"`), so they are parsed as
/// floats and truncated.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct RateLimit {
    /// Requests used in the current window
    pub used: Option<u32>,
    /// Requests left in the current window
    pub remaining: Option<u32>,
    /// Time until the window resets
    pub reset_in: Option<Duration>,
}

impl RateLimit {
    pub fn from_headers(headers: &HeaderMap) -> Self {
        Self {
            used: header_f64(headers, "x-ratelimit-used").map(|v| v as u32),
            remaining: header_f64(headers, "x-ratelimit-remaining").map(|v| v as u32),
            reset_in: header_f64(headers, "x-ratelimit-reset")
                .and_then(|v| Duration::try_from_secs_f64(v).ok()),
        }
    }
}

fn header_f64(headers: &HeaderMap, name: &str) -> Option<f64> {
    headers
        .get(name)
        .and_then(|v| v.to_str().ok())
        .and_then(|s| s.trim().parse::<f64>().ok())
        .filter(|v| v.is_finite() && *v >= 0.0)
}

/// Metadata about the HTTP exchange behind a service call
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Response {
    /// HTTP status code
    pub status: u16,
    pub rate_limit: RateLimit,
}

impl Response {
    pub fn from_parts(status: u16, headers: &HeaderMap) -> Self {
        Self {
            status,
            rate_limit: RateLimit::from_headers(headers),
        }
    }
}
