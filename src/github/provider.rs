use crate::Result;
use crate::github::client::{ApiResult, Client};
use crate::github::issue_data::Issue;
use crate::github::provider_result::ProviderResult;
use crate::github::repo_spec::RepoSpec;
use chrono::Utc;
use core::time::Duration;
use ohno::app_err;
use reqwest::header::{HeaderMap, LINK};
use std::sync::Arc;

const LOG_TARGET: &str = "    github";
const ISSUE_PAGE_SIZE: usize = 100;

/// Never sleep longer than this waiting for a rate-limit reset
const MAX_RATE_LIMIT_WAIT_SECS: i64 = 3600;

/// Maximum rate-limit retries for a single page before giving up
const MAX_RATE_LIMIT_RETRIES: u32 = 3;

/// Per-repository open-issue listing with pagination and rate-limit handling
#[derive(Debug, Clone)]
pub struct Provider {
    client: Client,
}

impl Provider {
    pub fn new(token: Option<&str>, base_url: impl Into<String>, timeout_secs: u64) -> Result<Self> {
        Ok(Self {
            client: Client::new(token, base_url, timeout_secs)?,
        })
    }

    /// List all open issues for one repository, excluding pull requests.
    ///
    /// Pages through the listing at `per_page=100`. On rate-limit exhaustion
    /// the same page is retried after sleeping until the advertised reset
    /// time; the request is never dropped. Failures are reported per-repo so
    /// the caller can continue with the remaining repositories.
    pub async fn open_issues(&self, repo: &RepoSpec) -> ProviderResult<Vec<Issue>> {
        let mut issues = Vec::new();
        let mut page: u32 = 1;
        let mut rate_limit_retries: u32 = 0;

        loop {
            let url = format!(
                "{}/repos/{}/{}/issues?state=open&per_page={ISSUE_PAGE_SIZE}&page={page}",
                self.client.base_url(),
                repo.owner(),
                repo.name()
            );

            match self.client.get(&url).await {
                ApiResult::Success(response, _) => {
                    rate_limit_retries = 0;
                    let more = has_next_page(response.headers());

                    let batch: Vec<Issue> = match response.json().await {
                        Ok(batch) => batch,
                        Err(e) => {
                            return ProviderResult::Error(Arc::new(app_err!("malformed issue listing for {repo}: {e}")));
                        }
                    };

                    let batch_len = batch.len();
                    issues.extend(batch.into_iter().filter(|issue| issue.pull_request.is_none()));

                    if more || batch_len == ISSUE_PAGE_SIZE {
                        page += 1;
                    } else {
                        break;
                    }
                }
                ApiResult::RateLimited(info) => {
                    rate_limit_retries += 1;
                    if rate_limit_retries > MAX_RATE_LIMIT_RETRIES {
                        return ProviderResult::Error(Arc::new(app_err!("rate limit persisted after {MAX_RATE_LIMIT_RETRIES} retries for {repo}")));
                    }

                    let wait_secs = (info.reset_at - Utc::now()).num_seconds().clamp(0, MAX_RATE_LIMIT_WAIT_SECS) + 1;
                    log::warn!(
                        target: LOG_TARGET,
                        "rate limited fetching {repo} (remaining {}), sleeping {wait_secs}s until reset",
                        info.remaining
                    );

                    #[expect(clippy::cast_sign_loss, reason = "wait_secs is clamped non-negative")]
                    tokio::time::sleep(Duration::from_secs(wait_secs as u64)).await;
                }
                ApiResult::NotFound => return ProviderResult::RepoNotFound,
                ApiResult::Failed(e) => return ProviderResult::Error(Arc::new(e)),
            }
        }

        log::info!(target: LOG_TARGET, "{repo}: {} open issue(s)", issues.len());
        ProviderResult::Found(issues)
    }
}

/// GitHub advertises further pages through the Link header
fn has_next_page(headers: &HeaderMap) -> bool {
    headers
        .get(LINK)
        .and_then(|link| link.to_str().ok())
        .is_some_and(|link| link.contains("rel=\"next\""))
}

#[cfg(test)]
mod tests {
    use super::*;
    use reqwest::header::HeaderValue;

    #[test]
    fn test_has_next_page() {
        let mut headers = HeaderMap::new();
        let _ = headers.insert(
            LINK,
            HeaderValue::from_static("<https://api.github.com/repos/o/r/issues?page=2>; rel=\"next\", <https://api.github.com/repos/o/r/issues?page=5>; rel=\"last\""),
        );
        assert!(has_next_page(&headers));
    }

    #[test]
    fn test_last_page_has_no_next() {
        let mut headers = HeaderMap::new();
        let _ = headers.insert(
            LINK,
            HeaderValue::from_static("<https://api.github.com/repos/o/r/issues?page=1>; rel=\"prev\""),
        );
        assert!(!has_next_page(&headers));
        assert!(!has_next_page(&HeaderMap::new()));
    }
}
