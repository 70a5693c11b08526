use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tracing::info;

use super::compat::CompatibilityDescriptor;
use super::context::ProvisionContext;
use super::loader_type::LoaderType;
use crate::core::error::{LauncherError, LauncherResult};
use crate::core::launch::{LaunchConfig, LaunchRequest};
use crate::core::version::GameVersion;

/// What a backend left on disk for a launch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProvisionedArtifact {
    /// Nothing to fetch (vanilla).
    None,
    /// A JSON profile persisted verbatim from the metadata service.
    Descriptor(PathBuf),
    /// An installer or universal jar streamed from a Maven repository.
    Binary(PathBuf),
}

impl ProvisionedArtifact {
    pub fn path(&self) -> Option<&Path> {
        match self {
            ProvisionedArtifact::None => None,
            ProvisionedArtifact::Descriptor(path) | ProvisionedArtifact::Binary(path) => {
                Some(path)
            }
        }
    }
}

/// One ecosystem's discovery, resolution and provisioning.
///
/// Every listing call goes to the remote source; nothing is cached between
/// calls. Orderings are the ecosystem's own, latest first where it matters.
#[async_trait]
pub trait ModLoader: Send + Sync {
    fn loader_type(&self) -> LoaderType;

    /// Static mod-compatibility data, `None` for ecosystems without mods.
    fn compatibility(&self) -> Option<&'static CompatibilityDescriptor>;

    /// Game versions this ecosystem can target.
    async fn list_supported_game_versions(&self) -> LauncherResult<Vec<GameVersion>>;

    /// Every loader version, whether or not it fits a given game version.
    async fn list_all_loader_versions(&self) -> LauncherResult<Vec<String>>;

    /// Loader versions usable with `game_version`, latest first.
    async fn list_loader_versions(&self, game_version: &str) -> LauncherResult<Vec<String>>;

    async fn resolve_default_loader_version(&self, game_version: &str) -> LauncherResult<String> {
        self.list_loader_versions(game_version)
            .await?
            .into_iter()
            .next()
            .ok_or_else(|| LauncherError::InvalidVersion(game_version.to_string()))
    }

    /// Fetch and persist whatever the launcher needs for `ctx`.
    async fn provision(&self, ctx: ProvisionContext<'_>) -> LauncherResult<ProvisionedArtifact>;

    fn synthesize_launch_config(&self, ctx: ProvisionContext<'_>) -> LaunchConfig;

    /// Resolve (unless pinned), provision, and describe the launch.
    async fn launch_config(&self, request: &LaunchRequest) -> LauncherResult<LaunchConfig> {
        let loader_version = match request.loader_version() {
            Some(pinned) => pinned.to_string(),
            None => {
                let resolved = self
                    .resolve_default_loader_version(request.game_version())
                    .await?;
                info!(
                    "Resolved {} {} for Minecraft {}",
                    self.loader_type(),
                    resolved,
                    request.game_version()
                );
                resolved
            }
        };

        let ctx = ProvisionContext::new(
            request.root_path(),
            request.game_version(),
            &loader_version,
        );
        self.provision(ctx).await?;
        Ok(self.synthesize_launch_config(ctx))
    }
}
