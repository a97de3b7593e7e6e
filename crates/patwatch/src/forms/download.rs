use crate::prelude::*;
use std::fs;
use std::path::{Path, PathBuf};

use reqwest::Client;

/// Download the archive body into memory
pub async fn download_archive(client: &Client, url: &str) -> Result<Vec<u8>, Error> {
    log::debug!("GET {}", url);

    let response = client
        .get(url)
        .send()
        .await
        .map_err(|e| Error::transport(url, e))?;
    let response = crate::http::ensure_ok(response)?;

    let bytes = response
        .bytes()
        .await
        .map_err(|e| Error::transport(url, e))?;

    Ok(bytes.to_vec())
}

/// Write `bytes` to `dir/filename` through a `.download` sibling
///
/// The final name only appears once the whole archive is on disk.
pub fn save_archive(dir: &Path, filename: &str, bytes: &[u8]) -> Result<PathBuf, Error> {
    let path = dir.join(filename);
    let download_path = dir.join(format!("{filename}.download"));

    fs::write(&download_path, bytes).map_err(|source| Error::Io {
        path: download_path.display().to_string(),
        source,
    })?;

    if let Err(source) = fs::rename(&download_path, &path) {
        let _ = fs::remove_file(&download_path);
        return Err(Error::Io {
            path: path.display().to_string(),
            source,
        });
    }

    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_save_archive_writes_final_name() {
        let dir = tempfile::tempdir().unwrap();

        let path = save_archive(dir.path(), "Standard_Forms_1.0.zip", b"PK\x05\x06").unwrap();

        assert_eq!(path, dir.path().join("Standard_Forms_1.0.zip"));
        assert_eq!(fs::read(&path).unwrap(), b"PK\x05\x06");
        assert!(!dir.path().join("Standard_Forms_1.0.zip.download").exists());
    }

    #[test]
    fn test_save_archive_overwrites_existing() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("a.zip"), b"old").unwrap();

        save_archive(dir.path(), "a.zip", b"new").unwrap();

        assert_eq!(fs::read(dir.path().join("a.zip")).unwrap(), b"new");
    }

    #[test]
    fn test_save_archive_missing_directory() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("does-not-exist");

        let err = save_archive(&missing, "a.zip", b"data").unwrap_err();

        assert!(matches!(err, Error::Io { .. }));
        assert!(err.to_string().contains("a.zip.download"));
    }
}
