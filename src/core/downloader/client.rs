use std::path::{Path, PathBuf};

use futures_util::StreamExt;
use reqwest::Client;
use tokio::io::AsyncWriteExt;
use tracing::{debug, warn};
use uuid::Uuid;

use crate::core::error::{LauncherError, LauncherResult};

/// Streams remote artifacts and metadata blobs onto disk.
///
/// Every write goes to a sibling temp file first and is then renamed over the
/// destination, so a reader never observes a half-written artifact. Two
/// concurrent writers of the same destination both succeed; the last rename wins.
#[derive(Debug, Clone)]
pub struct Downloader {
    client: Client,
}

impl Downloader {
    pub fn new(client: Client) -> Self {
        Self { client }
    }

    pub fn client(&self) -> &Client {
        &self.client
    }

    // ── Single file download ────────────────────────────

    /// Stream the body at `url` into `dest`, creating parent directories.
    /// Nothing is created on disk unless the server answers with success.
    pub async fn download_file(&self, url: &str, dest: &Path) -> LauncherResult<()> {
        let response = self.client.get(url).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(LauncherError::DownloadFailed {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        ensure_parent(dest).await?;
        let tmp = temp_path_for(dest);
        let written = async {
            let mut file = tokio::fs::File::create(&tmp)
                .await
                .map_err(|e| io_at(&tmp, e))?;

            let mut total = 0usize;
            let mut body = response.bytes_stream();
            while let Some(chunk) = body.next().await {
                let chunk = chunk?;
                total += chunk.len();
                file.write_all(&chunk).await.map_err(|e| io_at(&tmp, e))?;
            }
            file.flush().await.map_err(|e| io_at(&tmp, e))?;
            Ok::<_, LauncherError>(total)
        }
        .await;

        let total = match written {
            Ok(total) => total,
            Err(e) => {
                discard(&tmp).await;
                return Err(e);
            }
        };

        commit(&tmp, dest).await?;
        debug!("Downloaded: {} -> {:?} ({} bytes)", url, dest, total);
        Ok(())
    }

    // ── In-memory payloads ──────────────────────────────

    /// Persist an already-fetched payload at `dest`, creating parent directories.
    pub async fn write_bytes(&self, dest: &Path, bytes: &[u8]) -> LauncherResult<()> {
        ensure_parent(dest).await?;

        let tmp = temp_path_for(dest);
        if let Err(e) = tokio::fs::write(&tmp, bytes).await {
            discard(&tmp).await;
            return Err(io_at(&tmp, e));
        }

        commit(&tmp, dest).await?;
        debug!("Wrote {} bytes to {:?}", bytes.len(), dest);
        Ok(())
    }
}

async fn ensure_parent(dest: &Path) -> LauncherResult<()> {
    if let Some(parent) = dest.parent() {
        tokio::fs::create_dir_all(parent)
            .await
            .map_err(|e| io_at(parent, e))?;
    }
    Ok(())
}

fn temp_path_for(dest: &Path) -> PathBuf {
    let name = dest
        .file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_default();
    dest.with_file_name(format!(".{}.{}.part", name, Uuid::new_v4()))
}

async fn commit(tmp: &Path, dest: &Path) -> LauncherResult<()> {
    if let Err(e) = tokio::fs::rename(tmp, dest).await {
        discard(tmp).await;
        return Err(io_at(dest, e));
    }
    Ok(())
}

async fn discard(tmp: &Path) {
    if let Err(e) = tokio::fs::remove_file(tmp).await {
        if e.kind() != std::io::ErrorKind::NotFound {
            warn!("Failed to remove temp file {:?}: {}", tmp, e);
        }
    }
}

fn io_at(path: &Path, source: std::io::Error) -> LauncherError {
    LauncherError::Io {
        path: path.to_path_buf(),
        source,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockito::Server;
    use tempfile::TempDir;

    #[tokio::test]
    async fn download_creates_parents_and_overwrites() {
        let mut server = Server::new_async().await;
        let _jar = server
            .mock("GET", "/artifact.jar")
            .with_status(200)
            .with_body(b"PK\x03\x04fresh")
            .create_async()
            .await;

        let dir = TempDir::new().unwrap();
        let dest = dir.path().join("versions").join("forge-1.20.1-47.2.0").join("forge.jar");
        std::fs::create_dir_all(dest.parent().unwrap()).unwrap();
        std::fs::write(&dest, b"stale").unwrap();

        let downloader = Downloader::new(Client::new());
        downloader
            .download_file(&format!("{}/artifact.jar", server.url()), &dest)
            .await
            .unwrap();

        assert_eq!(std::fs::read(&dest).unwrap(), b"PK\x03\x04fresh");
        let leftovers: Vec<_> = std::fs::read_dir(dest.parent().unwrap())
            .unwrap()
            .filter_map(Result::ok)
            .filter(|e| e.file_name().to_string_lossy().ends_with(".part"))
            .collect();
        assert!(leftovers.is_empty());
    }

    #[tokio::test]
    async fn non_success_status_is_reported() {
        let mut server = Server::new_async().await;
        let _missing = server
            .mock("GET", "/missing.jar")
            .with_status(500)
            .create_async()
            .await;

        let dir = TempDir::new().unwrap();
        let dest = dir.path().join("missing.jar");
        let url = format!("{}/missing.jar", server.url());

        let err = Downloader::new(Client::new())
            .download_file(&url, &dest)
            .await
            .unwrap_err();

        match err {
            LauncherError::DownloadFailed { status, url: failed } => {
                assert_eq!(status, 500);
                assert_eq!(failed, url);
            }
            other => panic!("unexpected error: {other}"),
        }
        assert!(!dest.exists());
    }

    #[tokio::test]
    async fn failed_download_creates_no_directories() {
        let mut server = Server::new_async().await;
        let _gone = server
            .mock("GET", "/gone.jar")
            .with_status(404)
            .create_async()
            .await;

        let dir = TempDir::new().unwrap();
        let version_dir = dir.path().join("versions").join("forge-1.20.1-47.2.0");
        let err = Downloader::new(Client::new())
            .download_file(&format!("{}/gone.jar", server.url()), &version_dir.join("forge.jar"))
            .await
            .unwrap_err();

        assert!(matches!(err, LauncherError::DownloadFailed { status: 404, .. }));
        assert!(!dir.path().join("versions").exists());
    }

    #[tokio::test]
    async fn write_bytes_replaces_content() {
        let dir = TempDir::new().unwrap();
        let dest = dir.path().join("a").join("b.json");
        let downloader = Downloader::new(Client::new());

        downloader.write_bytes(&dest, br#"{"id":1}"#).await.unwrap();
        downloader.write_bytes(&dest, br#"{"id":2}"#).await.unwrap();

        assert_eq!(std::fs::read_to_string(&dest).unwrap(), r#"{"id":2}"#);
    }
}
