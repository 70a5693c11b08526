use async_trait::async_trait;
use tracing::info;

use super::compat::CompatibilityDescriptor;
use super::context::ProvisionContext;
use super::loader::{ModLoader, ProvisionedArtifact};
use super::loader_type::LoaderType;
use crate::core::config::LoaderEndpoints;
use crate::core::error::{LauncherError, LauncherResult};
use crate::core::launch::{LaunchConfig, LaunchRequest};
use crate::core::version::{GameVersion, VersionManifest};

/// The unmodded game. Nothing to resolve or fetch: the launcher downloads the
/// game itself from the version named in the config.
pub struct VanillaLoader {
    client: reqwest::Client,
    manifest_url: String,
}

impl VanillaLoader {
    pub fn new(client: reqwest::Client, endpoints: &LoaderEndpoints) -> Self {
        Self {
            client,
            manifest_url: endpoints.vanilla_manifest.clone(),
        }
    }

    pub async fn manifest(&self) -> LauncherResult<VersionManifest> {
        VersionManifest::fetch(&self.client, &self.manifest_url).await
    }
}

#[async_trait]
impl ModLoader for VanillaLoader {
    fn loader_type(&self) -> LoaderType {
        LoaderType::Vanilla
    }

    fn compatibility(&self) -> Option<&'static CompatibilityDescriptor> {
        None
    }

    async fn list_supported_game_versions(&self) -> LauncherResult<Vec<GameVersion>> {
        let manifest = self.manifest().await?;
        if manifest.versions.is_empty() {
            return Err(LauncherError::MetadataEmpty(LoaderType::Vanilla.to_string()));
        }

        Ok(manifest
            .versions
            .into_iter()
            .map(|entry| {
                let stable = entry.is_release();
                GameVersion::new(entry.id, stable)
            })
            .collect())
    }

    async fn list_all_loader_versions(&self) -> LauncherResult<Vec<String>> {
        Ok(Vec::new())
    }

    async fn list_loader_versions(&self, _game_version: &str) -> LauncherResult<Vec<String>> {
        Ok(Vec::new())
    }

    async fn provision(&self, _ctx: ProvisionContext<'_>) -> LauncherResult<ProvisionedArtifact> {
        Ok(ProvisionedArtifact::None)
    }

    fn synthesize_launch_config(&self, ctx: ProvisionContext<'_>) -> LaunchConfig {
        LaunchConfig::new(ctx.root, ctx.game_version)
    }

    async fn launch_config(&self, request: &LaunchRequest) -> LauncherResult<LaunchConfig> {
        info!("Preparing Vanilla {}", request.game_version());
        let ctx = ProvisionContext::new(
            request.root_path(),
            request.game_version(),
            request.loader_version().unwrap_or_default(),
        );
        Ok(self.synthesize_launch_config(ctx))
    }
}
