use patwatch_core::archive::ArchiveError;
use patwatch_core::forms::ScrapeError;
use patwatch_core::release::ReleaseError;
use reqwest::StatusCode;

#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("Request to {url} failed: {source}")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("Unexpected status code {status} from {url}")]
    UnexpectedStatus { url: String, status: StatusCode },

    #[error(transparent)]
    Release(#[from] ReleaseError),

    #[error(transparent)]
    Scrape(#[from] ScrapeError),

    #[error(transparent)]
    Archive(#[from] ArchiveError),

    #[error("Can't write {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

impl Error {
    pub fn transport(url: &str, source: reqwest::Error) -> Self {
        Error::Transport {
            url: url.to_string(),
            source,
        }
    }
}
