// ─── Fabric-style Meta API ───
// Fabric (v2) and Quilt (v3) expose the same three endpoints:
//   /versions/game
//   /versions/loader
//   /versions/loader/{game}/{loader}/profile/json

use std::path::PathBuf;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use super::context::ProvisionContext;
use super::loader_type::LoaderType;
use crate::core::config::join_url;
use crate::core::downloader::Downloader;
use crate::core::error::{LauncherError, LauncherResult};
use crate::core::version::GameVersion;

/// A loader build as listed by `/versions/loader`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoaderVersion {
    pub separator: String,
    pub build: u32,
    pub maven: String,
    pub version: String,
    /// Quilt does not publish a stability flag.
    #[serde(default)]
    pub stable: Option<bool>,
}

#[derive(Debug, Deserialize)]
struct MetaGameVersion {
    version: String,
    stable: bool,
}

pub(crate) struct MetaApi {
    loader: LoaderType,
    base_url: String,
    downloader: Downloader,
}

impl MetaApi {
    pub fn new(loader: LoaderType, base_url: &str, client: reqwest::Client) -> Self {
        Self {
            loader,
            base_url: base_url.to_string(),
            downloader: Downloader::new(client),
        }
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> LauncherResult<T> {
        let url = join_url(&self.base_url, path);
        let response = self.downloader.client().get(&url).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(LauncherError::DownloadFailed {
                url,
                status: status.as_u16(),
            });
        }

        Ok(response.json().await?)
    }

    pub async fn list_game_versions(&self) -> LauncherResult<Vec<GameVersion>> {
        let versions: Vec<MetaGameVersion> = self.get_json("versions/game").await?;
        if versions.is_empty() {
            return Err(LauncherError::MetadataEmpty(self.loader.to_string()));
        }

        Ok(versions
            .into_iter()
            .map(|v| GameVersion::new(v.version, v.stable))
            .collect())
    }

    pub async fn list_loaders(&self) -> LauncherResult<Vec<LoaderVersion>> {
        let loaders: Vec<LoaderVersion> = self.get_json("versions/loader").await?;
        if loaders.is_empty() {
            return Err(LauncherError::MetadataEmpty(self.loader.to_string()));
        }
        Ok(loaders)
    }

    /// Fetch the launcher profile for `ctx` and store it, byte for byte, at
    /// `versions/<id>/<id>.json`.
    pub async fn provision_profile(&self, ctx: ProvisionContext<'_>) -> LauncherResult<PathBuf> {
        let url = join_url(
            &self.base_url,
            &format!(
                "versions/loader/{}/{}/profile/json",
                ctx.game_version, ctx.loader_version
            ),
        );
        info!("Fetching {} profile from {}", self.loader, url);

        let response = self.downloader.client().get(&url).send().await?;
        let status = response.status();
        if status.is_client_error() {
            warn!("{} Meta returned {} for {}", self.loader, status, url);
            return Err(LauncherError::InvalidVersion(ctx.game_version.to_string()));
        }
        if !status.is_success() {
            return Err(LauncherError::DownloadFailed {
                url,
                status: status.as_u16(),
            });
        }

        let body = response.bytes().await?;
        serde_json::from_slice::<serde_json::Value>(&body)?;

        let id = ctx.version_id(self.loader);
        let path = ctx.version_dir(self.loader).join(format!("{}.json", id));
        self.downloader.write_bytes(&path, &body).await?;

        info!("{} profile {} saved to {:?}", self.loader, id, path);
        Ok(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quilt_loader_entry_has_no_stability() {
        let json = r#"{
            "separator": "+build.",
            "build": 7,
            "maven": "org.quiltmc:quilt-loader:0.26.4",
            "version": "0.26.4"
        }"#;
        let loader: LoaderVersion = serde_json::from_str(json).unwrap();
        assert_eq!(loader.version, "0.26.4");
        assert_eq!(loader.stable, None);
    }

    #[test]
    fn fabric_loader_entry_keeps_stability() {
        let json = r#"{
            "separator": ".",
            "build": 11,
            "maven": "net.fabricmc:fabric-loader:0.15.11",
            "version": "0.15.11",
            "stable": true
        }"#;
        let loader: LoaderVersion = serde_json::from_str(json).unwrap();
        assert_eq!(loader.stable, Some(true));
        assert_eq!(loader.build, 11);
    }
}
