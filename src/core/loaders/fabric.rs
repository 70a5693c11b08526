use async_trait::async_trait;
use tracing::info;

use super::compat::{self, CompatibilityDescriptor};
use super::context::ProvisionContext;
use super::loader::{ModLoader, ProvisionedArtifact};
use super::loader_type::LoaderType;
use super::meta::{LoaderVersion, MetaApi};
use crate::core::config::LoaderEndpoints;
use crate::core::error::LauncherResult;
use crate::core::launch::LaunchConfig;
use crate::core::version::GameVersion;

/// Fabric via the Fabric Meta API. Loader versions are not scoped to a game
/// version: any loader build runs on any supported game version.
pub struct FabricLoader {
    meta: MetaApi,
}

impl FabricLoader {
    pub fn new(client: reqwest::Client, endpoints: &LoaderEndpoints) -> Self {
        Self {
            meta: MetaApi::new(LoaderType::Fabric, &endpoints.fabric_meta, client),
        }
    }

    /// Full loader records, latest first.
    pub async fn list_loaders(&self) -> LauncherResult<Vec<LoaderVersion>> {
        self.meta.list_loaders().await
    }
}

#[async_trait]
impl ModLoader for FabricLoader {
    fn loader_type(&self) -> LoaderType {
        LoaderType::Fabric
    }

    fn compatibility(&self) -> Option<&'static CompatibilityDescriptor> {
        Some(&compat::FABRIC)
    }

    async fn list_supported_game_versions(&self) -> LauncherResult<Vec<GameVersion>> {
        self.meta.list_game_versions().await
    }

    async fn list_all_loader_versions(&self) -> LauncherResult<Vec<String>> {
        let loaders = self.list_loaders().await?;
        Ok(loaders.into_iter().map(|l| l.version).collect())
    }

    async fn list_loader_versions(&self, _game_version: &str) -> LauncherResult<Vec<String>> {
        self.list_all_loader_versions().await
    }

    async fn provision(&self, ctx: ProvisionContext<'_>) -> LauncherResult<ProvisionedArtifact> {
        info!(
            "Installing Fabric {} for Minecraft {}",
            ctx.loader_version, ctx.game_version
        );
        let path = self.meta.provision_profile(ctx).await?;
        Ok(ProvisionedArtifact::Descriptor(path))
    }

    fn synthesize_launch_config(&self, ctx: ProvisionContext<'_>) -> LaunchConfig {
        LaunchConfig::new(ctx.root, ctx.game_version).with_custom(ctx.version_id(LoaderType::Fabric))
    }
}
