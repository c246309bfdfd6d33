//! GitHub issue fetching
//!
//! Minimal GitHub API surface: paginated open-issue listings for the
//! configured repositories. Each repository's outcome is wrapped in a
//! [`ProviderResult`] so one unreachable repository never aborts the run;
//! rate-limit exhaustion blocks until the advertised reset time and retries
//! rather than dropping the request.

mod client;
mod issue_data;
mod provider;
mod provider_result;
mod repo_spec;

pub use client::{ApiResult, Client, RateLimitInfo};
pub use issue_data::{Issue, Label, PullRequestMarker};
pub use provider::Provider;
pub use provider_result::ProviderResult;
pub use repo_spec::RepoSpec;

/// Public GitHub API endpoint; overridable for testing
pub const GITHUB_API_URL: &str = "https://api.github.com";
