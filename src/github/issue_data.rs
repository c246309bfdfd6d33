use chrono::{DateTime, Utc};
use serde::Deserialize;

/// Minimal GitHub issue with only the fields the extractor and reports read
#[derive(Debug, Clone, Deserialize)]
pub struct Issue {
    pub number: u64,
    pub title: String,
    #[serde(default)]
    pub body: Option<String>,
    pub html_url: String,
    #[serde(default)]
    pub labels: Vec<Label>,
    /// Present when the "issue" is actually a pull request; those are skipped
    #[serde(default)]
    pub pull_request: Option<PullRequestMarker>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Label {
    pub name: String,
}

/// Marker type to detect if an issue is actually a pull request.
#[derive(Debug, Clone, Deserialize)]
pub struct PullRequestMarker {
    #[serde(default)]
    pub merged_at: Option<DateTime<Utc>>,
}
