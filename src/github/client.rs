use crate::Result;
use chrono::{DateTime, Utc};
use core::time::Duration;
use ohno::IntoAppError;
use reqwest::header::{AUTHORIZATION, HeaderMap, HeaderValue};

/// Rate limit information from response headers
#[derive(Debug, Clone, Copy)]
pub struct RateLimitInfo {
    pub remaining: usize,
    pub reset_at: DateTime<Utc>,
}

/// Classified outcome of one GitHub API call
#[derive(Debug)]
pub enum ApiResult<T> {
    /// Request succeeded - contains data and optional rate limit info
    Success(T, Option<RateLimitInfo>),

    /// Rate limited - should retry after reset time
    RateLimited(RateLimitInfo),

    /// The requested resource was not found (404)
    NotFound,

    /// Request failed permanently - should NOT retry
    Failed(ohno::AppError),
}

/// Thin GitHub API client with optional token authentication.
/// The base URL is injectable so tests can point it at a local mock server.
#[derive(Debug, Clone)]
pub struct Client {
    client: reqwest::Client,
    base_url: String,
}

impl Client {
    pub fn new(token: Option<&str>, base_url: impl Into<String>, timeout_secs: u64) -> Result<Self> {
        let mut client_builder = reqwest::Client::builder()
            .user_agent("bounty-board")
            .timeout(Duration::from_secs(timeout_secs));

        if let Some(t) = token {
            let mut auth_val = HeaderValue::from_str(&format!("token {t}")).into_app_err("invalid GitHub token")?;
            auth_val.set_sensitive(true);

            let mut headers = HeaderMap::new();
            let _ = headers.insert(AUTHORIZATION, auth_val);

            client_builder = client_builder.default_headers(headers);
        }

        Ok(Self {
            client: client_builder.build().into_app_err("unable to create GitHub HTTP client")?,
            base_url: base_url.into(),
        })
    }

    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Make an API call and classify the result
    pub async fn get(&self, url: &str) -> ApiResult<reqwest::Response> {
        let resp = match self.client.get(url).send().await {
            Ok(r) => r,
            Err(e) => return ApiResult::Failed(e.into()),
        };

        // Extract rate limit info from response headers before checking status
        let rate_limit = rate_limit_from_headers(resp.headers());

        let status = resp.status();
        if status.is_success() {
            return ApiResult::Success(resp, rate_limit);
        }

        // 429 and 403-with-exhausted-quota both mean rate limited; a 403 with
        // quota still remaining is a plain authorization failure and must not
        // trigger the wait-and-retry loop. Default the reset to an hour out
        // when the header is missing.
        let status_code = status.as_u16();
        let exhausted = status_code == 429
            || (status_code == 403 && rate_limit.is_some_and(|info| info.remaining == 0));
        if exhausted {
            let rate_limit = rate_limit.unwrap_or_else(|| RateLimitInfo {
                remaining: 0,
                reset_at: Utc::now() + chrono::Duration::hours(1),
            });
            return ApiResult::RateLimited(rate_limit);
        }

        if status_code == 404 {
            return ApiResult::NotFound;
        }

        match resp.error_for_status() {
            Ok(_) => ApiResult::Failed(ohno::app_err!("unexpected HTTP status {status}")),
            Err(e) => ApiResult::Failed(e.into()),
        }
    }
}

/// Extract rate limit information from API response headers
fn rate_limit_from_headers(headers: &HeaderMap) -> Option<RateLimitInfo> {
    let remaining = headers.get("x-ratelimit-remaining")?.to_str().ok()?.parse::<usize>().ok()?;

    let reset_timestamp = headers.get("x-ratelimit-reset")?.to_str().ok()?.parse::<i64>().ok()?;

    let reset_at = DateTime::from_timestamp(reset_timestamp, 0)?;

    Some(RateLimitInfo { remaining, reset_at })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rate_limit_headers_parsed() {
        let mut headers = HeaderMap::new();
        let _ = headers.insert("x-ratelimit-remaining", HeaderValue::from_static("42"));
        let _ = headers.insert("x-ratelimit-reset", HeaderValue::from_static("1700000000"));

        let info = rate_limit_from_headers(&headers).unwrap();
        assert_eq!(info.remaining, 42);
        assert_eq!(info.reset_at, DateTime::from_timestamp(1_700_000_000, 0).unwrap());
    }

    #[test]
    fn test_missing_headers_yield_none() {
        assert!(rate_limit_from_headers(&HeaderMap::new()).is_none());

        let mut headers = HeaderMap::new();
        let _ = headers.insert("x-ratelimit-remaining", HeaderValue::from_static("not-a-number"));
        assert!(rate_limit_from_headers(&headers).is_none());
    }
}
