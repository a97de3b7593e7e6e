use serde::{Deserialize, Serialize};

use crate::keepalive::KeepAliveToken;

/// Default GitHub REST API base URL
pub const GITHUB_API_BASE: &str = "https://api.github.com";

/// Repository whose releases are tracked by default
pub const DEFAULT_REPO: &str = "la5nta/pat";

/// GitHub release API response (only the fields we consume)
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct GitHubRelease {
    pub tag_name: String,
    #[serde(default)]
    pub html_url: Option<String>,
}

/// Release record printed by `patwatch release`
#[derive(Debug, Serialize, Clone, PartialEq, Eq)]
pub struct Release {
    pub version: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub release_url: Option<String>,
    /// Keeps the scheduled workflow from being disabled for repo inactivity
    #[serde(rename = "_gh_keepalive", skip_serializing_if = "Option::is_none")]
    pub gh_keepalive: Option<KeepAliveToken>,
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ReleaseError {
    #[error("no releases found for {0}")]
    NoReleases(String),
}

/// Build the releases listing URL, paginated to the most recent entry
pub fn releases_url(api_base: &str, repo: &str) -> String {
    format!(
        "{}/repos/{}/releases?per_page=1",
        api_base.trim_end_matches('/'),
        repo
    )
}

/// Parse version tag by removing a single 'v' prefix
///
/// Converts "v1.2.3" to "1.2.3", leaves "1.2.3" unchanged
pub fn normalize_tag(tag: &str) -> &str {
    tag.strip_prefix('v').unwrap_or(tag)
}

/// Pick the most recent release out of a `per_page=1` listing
pub fn latest_release(repo: &str, releases: Vec<GitHubRelease>) -> Result<Release, ReleaseError> {
    let latest = releases
        .into_iter()
        .next()
        .ok_or_else(|| ReleaseError::NoReleases(repo.to_string()))?;

    Ok(Release {
        version: normalize_tag(&latest.tag_name).to_string(),
        release_url: latest.html_url,
        gh_keepalive: None,
    })
}

impl Release {
    pub fn with_keepalive(mut self, token: KeepAliveToken) -> Self {
        self.gh_keepalive = Some(token);
        self
    }
}
