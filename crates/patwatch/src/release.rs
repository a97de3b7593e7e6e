use crate::prelude::*;
use std::time::Duration;

use patwatch_core::release::{
    latest_release, releases_url, GitHubRelease, Release, DEFAULT_REPO, GITHUB_API_BASE,
};
use reqwest::Client;

#[derive(Debug, clap::Args, Clone)]
pub struct ReleaseOptions {
    /// Repository in "owner/repo" format
    #[arg(long, env = "PATWATCH_REPO", default_value = DEFAULT_REPO)]
    pub repo: String,

    /// GitHub REST API base URL
    #[arg(long, env = "PATWATCH_GITHUB_API", default_value = GITHUB_API_BASE)]
    pub api_base: String,

    /// Request timeout in seconds
    #[arg(short, long, default_value = "10")]
    pub timeout: u64,

    /// Leave the _gh_keepalive field out of the output
    #[arg(long)]
    pub no_keepalive: bool,
}

/// Module entry point
pub async fn run(options: ReleaseOptions, _global: crate::Global) -> Result<()> {
    let client = crate::http::client(Duration::from_secs(options.timeout))?;

    let mut release = fetch_latest_release(&client, &options.api_base, &options.repo)
        .await
        .wrap_err_with(|| format!("could not get latest release of {}", options.repo))?;

    if !options.no_keepalive {
        release = release.with_keepalive(crate::keepalive::current_token());
    }

    log::info!("Found version {}", release.version);
    print_json(&release)
}

/// Fetch the most recent release of `repo` from the GitHub API
pub async fn fetch_latest_release(
    client: &Client,
    api_base: &str,
    repo: &str,
) -> Result<Release, Error> {
    let url = releases_url(api_base, repo);
    log::debug!("GET {}", url);

    let response = client
        .get(&url)
        .header("Accept", "application/vnd.github.v3+json")
        .send()
        .await
        .map_err(|e| Error::transport(&url, e))?;
    let response = crate::http::ensure_ok(response)?;

    let releases = response
        .json::<Vec<GitHubRelease>>()
        .await
        .map_err(|e| Error::transport(&url, e))?;

    Ok(latest_release(repo, releases)?)
}
