//! Rate-limit counters reported by the service.

use reqwest::header::HeaderMap;

pub const RATE_LIMIT_LIMIT_HEADER: &str = "X-RateLimit-Limit";
pub const RATE_LIMIT_REMAINING_HEADER: &str = "X-RateLimit-Remaining";
pub const RATE_LIMIT_RESET_HEADER: &str = "X-RateLimit-Reset";

/// The `X-RateLimit-*` headers of the last successful response.
///
/// This is a snapshot of facts only; the client never throttles on it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct RateLimits {
    /// Calls allowed in the current window.
    pub limit: i64,
    /// Calls left in the current window.
    pub remaining: i64,
    /// Unix timestamp (seconds) at which the window resets.
    pub reset: i64,
}

impl RateLimits {
    /// Best-effort parse. A missing or malformed header yields 0 for that counter.
    pub fn from_headers(headers: &HeaderMap) -> Self {
        Self {
            limit: header_int(headers, RATE_LIMIT_LIMIT_HEADER),
            remaining: header_int(headers, RATE_LIMIT_REMAINING_HEADER),
            reset: header_int(headers, RATE_LIMIT_RESET_HEADER),
        }
    }
}

fn header_int(headers: &HeaderMap, name: &str) -> i64 {
    headers
        .get(name)
        .and_then(|v| v.to_str().ok())
        .and_then(|s| s.trim().parse::<i64>().ok())
        .unwrap_or(0)
}
