// ─── Version Manifest ───
// Handles fetching and parsing the Mojang version manifest v2.

use serde::Deserialize;
use tracing::info;

use crate::core::error::{LauncherError, LauncherResult};

/// The part of the Mojang version manifest the Vanilla backend lists.
#[derive(Debug, Deserialize)]
pub struct VersionManifest {
    pub versions: Vec<VersionEntry>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct VersionEntry {
    pub id: String,
    #[serde(rename = "type")]
    pub version_type: String,
}

impl VersionEntry {
    pub fn is_release(&self) -> bool {
        self.version_type == "release"
    }
}

impl VersionManifest {
    /// Fetch the version manifest from `url` using a shared HTTP client.
    pub async fn fetch(client: &reqwest::Client, url: &str) -> LauncherResult<Self> {
        info!("Fetching Minecraft version manifest...");

        let response = client.get(url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(LauncherError::DownloadFailed {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        let manifest: VersionManifest = response.json().await?;

        info!("Loaded {} versions from manifest", manifest.versions.len());
        Ok(manifest)
    }
}
