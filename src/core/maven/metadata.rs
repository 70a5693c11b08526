use quick_xml::de::from_str;
use serde::Deserialize;
use tracing::info;

use crate::core::error::{LauncherError, LauncherResult};

/// Minimal `maven-metadata.xml` model: only the version list is needed.
#[derive(Debug, Deserialize, Default)]
pub struct MavenMetadata {
    #[serde(default)]
    pub versioning: MavenVersioning,
}

#[derive(Debug, Deserialize, Default)]
pub struct MavenVersioning {
    #[serde(default)]
    pub versions: MavenVersions,
}

#[derive(Debug, Deserialize, Default)]
pub struct MavenVersions {
    #[serde(rename = "version", default)]
    pub version: Vec<String>,
}

impl MavenMetadata {
    pub fn parse(xml: &str) -> LauncherResult<Self> {
        Ok(from_str(xml)?)
    }

    /// Fetch and parse the metadata document at `url`.
    pub async fn fetch(client: &reqwest::Client, url: &str) -> LauncherResult<Self> {
        info!("Fetching Maven metadata from {}", url);

        let response = client.get(url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(LauncherError::DownloadFailed {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        let xml = response.text().await?;
        let metadata = Self::parse(&xml)?;

        info!(
            "Loaded {} versions from {}",
            metadata.versioning.versions.version.len(),
            url
        );
        Ok(metadata)
    }

    /// Versions in the repository's native order.
    pub fn into_versions(self) -> Vec<String> {
        self.versioning.versions.version
    }
}
