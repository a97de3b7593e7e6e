mod download;
mod scrape;

use crate::prelude::*;
use std::path::{Path, PathBuf};
use std::time::Duration;

use patwatch_core::forms::{
    archive_filename, archive_url, FormsInfo, DEFAULT_LINK_LABEL, FORMS_INFO_URL,
    PAT_FORMS_API_BASE,
};
use reqwest::Client;

pub use download::{download_archive, save_archive};
pub use scrape::get_latest_forms_url;

#[derive(Debug, clap::Args, Clone)]
pub struct FormsOptions {
    /// Page linking the latest Standard Forms archive
    #[arg(long, env = "PATWATCH_FORMS_PAGE", default_value = FORMS_INFO_URL)]
    pub page_url: String,

    /// Text of the anchor that links the archive
    #[arg(long, env = "PATWATCH_FORMS_LABEL", default_value = DEFAULT_LINK_LABEL)]
    pub link_label: String,

    /// Base URL the archive is re-hosted under
    #[arg(long, env = "PATWATCH_ARCHIVE_BASE", default_value = PAT_FORMS_API_BASE)]
    pub archive_base: String,

    /// Directory the archive is saved to
    #[arg(short, long, env = "PATWATCH_OUTPUT_DIR", default_value = ".")]
    pub output_dir: PathBuf,

    /// Request timeout in seconds
    #[arg(short, long, default_value = "30")]
    pub timeout: u64,

    /// Leave the _gh_keepalive field out of the output
    #[arg(long)]
    pub no_keepalive: bool,

    /// Add a generated_at timestamp to the output
    #[arg(long)]
    pub with_timestamp: bool,
}

#[derive(Debug, Clone)]
pub struct FormsConfig {
    pub page_url: String,
    pub link_label: String,
    pub archive_base: String,
    pub output_dir: PathBuf,
}

impl From<&FormsOptions> for FormsConfig {
    fn from(options: &FormsOptions) -> Self {
        Self {
            page_url: options.page_url.clone(),
            link_label: options.link_label.clone(),
            archive_base: options.archive_base.clone(),
            output_dir: options.output_dir.clone(),
        }
    }
}

/// Module entry point
pub async fn run(options: FormsOptions, _global: crate::Global) -> Result<()> {
    let client = crate::http::client(Duration::from_secs(options.timeout))?;

    let mut info = update_forms(&client, &FormsConfig::from(&options)).await?;

    if !options.no_keepalive {
        info.gh_keepalive = Some(crate::keepalive::current_token());
    }
    if options.with_timestamp {
        let now = chrono::Utc::now();
        info.generated_at = Some(now.to_rfc3339_opts(chrono::SecondsFormat::Secs, true));
    }

    log::info!("Found version {}", info.version);
    print_json(&info)
}

/// Scrape the forms page, then download, validate and save the archive
pub async fn update_forms(client: &Client, config: &FormsConfig) -> Result<FormsInfo> {
    let url = get_latest_forms_url(client, &config.page_url, &config.link_label)
        .await
        .wrap_err("could not get latest forms info")?;
    log::info!("Found URL {}", url);

    fetch_forms_archive(client, &url, &config.archive_base, &config.output_dir)
        .await
        .wrap_err("could not download archive url")
}

/// Download and validate the archive at `zip_url`, then save it to `output_dir`
///
/// Nothing is written unless every entry of the archive decompresses cleanly.
pub async fn fetch_forms_archive(
    client: &Client,
    zip_url: &str,
    archive_base: &str,
    output_dir: &Path,
) -> Result<FormsInfo, Error> {
    let bytes = download_archive(client, zip_url).await?;

    let report = patwatch_core::archive::validate_archive(&bytes)?;
    log::debug!(
        "Validated {} entries, version {}",
        report.entries,
        report.version
    );

    let filename = archive_filename(&report.version);
    let path = save_archive(output_dir, &filename, &bytes)?;
    log::debug!("Saved {} ({} bytes)", path.display(), bytes.len());

    Ok(FormsInfo {
        gh_keepalive: None,
        archive_url: archive_url(archive_base, &filename),
        version: report.version,
        generated_at: None,
    })
}
