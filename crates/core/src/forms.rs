//! Winlink Standard Forms scraping and naming
//!
//! The forms page is third-party HTML that changes without notice. Everything
//! that depends on its markup lives in [`scrape_archive_link`], so a format
//! change means editing one function and its tests.

use regex::Regex;
use serde::Serialize;

use crate::keepalive::KeepAliveToken;

/// Page that links the latest Standard Forms archive
pub const FORMS_INFO_URL: &str =
    "https://www.winlink.org/content/how_manually_update_standard_templates";

/// Text of the anchor pointing at the archive
pub const DEFAULT_LINK_LABEL: &str = "Standard_Forms - Latest Version";

/// Where re-hosted archives are served from
pub const PAT_FORMS_API_BASE: &str = "https://api.getpat.io/v1/forms/standard-templates";

/// Archive entry holding the version string
pub const VERSION_FILE_NAME: &str = "Standard_Forms_Version.dat";

/// Forms record printed by `patwatch forms`
#[derive(Debug, Serialize, Clone, PartialEq, Eq)]
pub struct FormsInfo {
    /// Keeps the scheduled workflow alive when Standard Forms is not updated
    /// for a while (>= 60 days)
    #[serde(rename = "_gh_keepalive", skip_serializing_if = "Option::is_none")]
    pub gh_keepalive: Option<KeepAliveToken>,
    pub version: String,
    pub archive_url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub generated_at: Option<String>,
}

impl std::fmt::Display for FormsInfo {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "version: '{}', url: '{}'", self.version, self.archive_url)
    }
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ScrapeError {
    #[error("can't scrape the version info page, HTML structure may have changed (no link labeled '{0}')")]
    LinkNotFound(String),
}

/// Find the archive link on the forms page
///
/// Looks for `<a href="https://...">LABEL</a>`, tolerating whitespace around
/// the label, and returns the href with HTML entities decoded.
pub fn scrape_archive_link(html: &str, label: &str) -> Result<String, ScrapeError> {
    let pattern = format!(
        r#"<a href="(https://.+)">\s*{}\s*</a>"#,
        regex::escape(label)
    );
    let re = Regex::new(&pattern).map_err(|_| ScrapeError::LinkNotFound(label.to_string()))?;

    let href = re
        .captures(html)
        .and_then(|caps| caps.get(1))
        .ok_or_else(|| ScrapeError::LinkNotFound(label.to_string()))?;

    Ok(html_escape::decode_html_entities(href.as_str()).into_owned())
}

/// Remove every whitespace character, not only leading and trailing ones
///
/// Version 1.1.6.0 was published as `1.1.6\t.0`, so trimming is not enough.
pub fn strip_whitespace(s: &str) -> String {
    s.chars().filter(|c| !c.is_whitespace()).collect()
}

/// Conventional file name for a downloaded archive
pub fn archive_filename(version: &str) -> String {
    format!("Standard_Forms_{version}.zip")
}

/// Public URL of a re-hosted archive
pub fn archive_url(api_base: &str, filename: &str) -> String {
    format!(
        "{}/{}",
        api_base.trim_end_matches('/'),
        urlencoding::encode(filename)
    )
}
