//! Whole-archive validation
//!
//! Every entry of a downloaded zip is decompressed in full before the archive
//! is trusted. The zip reader verifies each entry's CRC32 once it has been read
//! to the end, so reading everything is what catches truncated or corrupt
//! payloads. One entry, the version file, is kept; the rest are discarded.

use std::io::{self, Cursor, Read};

use zip::result::ZipError;
use zip::ZipArchive;

use crate::forms::{strip_whitespace, VERSION_FILE_NAME};

/// Outcome of a successful validation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArchiveReport {
    /// Version declared by the archive, whitespace removed
    pub version: String,
    /// Number of entries checked
    pub entries: usize,
}

#[derive(Debug, thiserror::Error)]
pub enum ArchiveError {
    #[error("not a readable zip archive: {0}")]
    Open(#[source] ZipError),

    #[error("can't open archive entry #{index}: {source}")]
    Entry {
        index: usize,
        #[source]
        source: ZipError,
    },

    #[error("archive entry '{name}' is corrupt: {source}")]
    Corrupt {
        name: String,
        #[source]
        source: io::Error,
    },

    #[error("archive has no {0} entry")]
    MissingVersionFile(&'static str),

    #[error("{0} is empty")]
    EmptyVersion(&'static str),

    #[error("version '{0}' can't be used in a file name")]
    InvalidVersion(String),
}

/// Decompress every entry of `bytes` and return the declared version
pub fn validate_archive(bytes: &[u8]) -> Result<ArchiveReport, ArchiveError> {
    let mut archive = ZipArchive::new(Cursor::new(bytes)).map_err(ArchiveError::Open)?;
    let mut version = None;

    for index in 0..archive.len() {
        let mut entry = archive
            .by_index(index)
            .map_err(|source| ArchiveError::Entry { index, source })?;
        let name = entry.name().to_string();

        if name == VERSION_FILE_NAME {
            let mut contents = Vec::new();
            entry
                .read_to_end(&mut contents)
                .map_err(|source| ArchiveError::Corrupt {
                    name: name.clone(),
                    source,
                })?;
            version = Some(strip_whitespace(&String::from_utf8_lossy(&contents)));
        } else {
            io::copy(&mut entry, &mut io::sink()).map_err(|source| ArchiveError::Corrupt {
                name: name.clone(),
                source,
            })?;
        }
    }

    let version = version.ok_or(ArchiveError::MissingVersionFile(VERSION_FILE_NAME))?;
    check_version(&version)?;

    Ok(ArchiveReport {
        version,
        entries: archive.len(),
    })
}

/// The version ends up in a file name, so it must be a plain path segment
fn check_version(version: &str) -> Result<(), ArchiveError> {
    if version.is_empty() {
        return Err(ArchiveError::EmptyVersion(VERSION_FILE_NAME));
    }
    if version == "." || version == ".." || version.contains(['/', '\\']) {
        return Err(ArchiveError::InvalidVersion(version.to_string()));
    }
    Ok(())
}
