use crate::prelude::*;

use patwatch_core::forms::scrape_archive_link;
use reqwest::Client;

const SCRAPER_USER_AGENT: &str = "pat-forms-scraper";

/// Fetch the forms page and return the archive link it advertises
pub async fn get_latest_forms_url(
    client: &Client,
    page_url: &str,
    label: &str,
) -> Result<String, Error> {
    log::debug!("GET {}", page_url);

    let response = client
        .get(page_url)
        .header("User-Agent", SCRAPER_USER_AGENT)
        .header("Cache-Control", "no-cache")
        .send()
        .await
        .map_err(|e| Error::transport(page_url, e))?;
    let response = crate::http::ensure_ok(response)?;

    let body = response
        .text()
        .await
        .map_err(|e| Error::transport(page_url, e))?;

    Ok(scrape_archive_link(&body, label)?)
}
