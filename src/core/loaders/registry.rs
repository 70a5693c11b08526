use std::path::Path;
use std::sync::OnceLock;

use async_trait::async_trait;
use tracing::debug;

use super::compat::CompatibilityDescriptor;
use super::context::ProvisionContext;
use super::fabric::FabricLoader;
use super::forge::ForgeLoader;
use super::loader::{ModLoader, ProvisionedArtifact};
use super::loader_type::LoaderType;
use super::neoforge::NeoForgeLoader;
use super::quilt::QuiltLoader;
use super::vanilla::VanillaLoader;
use crate::core::config::LoaderEndpoints;
use crate::core::error::LauncherResult;
use crate::core::http::build_http_client;
use crate::core::launch::{LaunchConfig, LaunchRequest};
use crate::core::version::GameVersion;

/// Dispatcher without `Box<dyn>`: one variant per ecosystem.
pub enum Backend {
    Vanilla(VanillaLoader),
    Fabric(FabricLoader),
    Quilt(QuiltLoader),
    Forge(ForgeLoader),
    NeoForge(NeoForgeLoader),
}

macro_rules! dispatch {
    ($self:expr, $loader:ident => $body:expr) => {
        match $self {
            Backend::Vanilla($loader) => $body,
            Backend::Fabric($loader) => $body,
            Backend::Quilt($loader) => $body,
            Backend::Forge($loader) => $body,
            Backend::NeoForge($loader) => $body,
        }
    };
}

impl Backend {
    pub fn new(loader: LoaderType, client: reqwest::Client, endpoints: &LoaderEndpoints) -> Self {
        match loader {
            LoaderType::Vanilla => Self::Vanilla(VanillaLoader::new(client, endpoints)),
            LoaderType::Fabric => Self::Fabric(FabricLoader::new(client, endpoints)),
            LoaderType::Quilt => Self::Quilt(QuiltLoader::new(client, endpoints)),
            LoaderType::Forge => Self::Forge(ForgeLoader::new(client, endpoints)),
            LoaderType::NeoForge => Self::NeoForge(NeoForgeLoader::new(client, endpoints)),
        }
    }

    pub fn as_dyn(&self) -> &dyn ModLoader {
        dispatch!(self, l => l as &dyn ModLoader)
    }
}

#[async_trait]
impl ModLoader for Backend {
    fn loader_type(&self) -> LoaderType {
        dispatch!(self, l => l.loader_type())
    }

    fn compatibility(&self) -> Option<&'static CompatibilityDescriptor> {
        dispatch!(self, l => l.compatibility())
    }

    async fn list_supported_game_versions(&self) -> LauncherResult<Vec<GameVersion>> {
        dispatch!(self, l => l.list_supported_game_versions().await)
    }

    async fn list_all_loader_versions(&self) -> LauncherResult<Vec<String>> {
        dispatch!(self, l => l.list_all_loader_versions().await)
    }

    async fn list_loader_versions(&self, game_version: &str) -> LauncherResult<Vec<String>> {
        dispatch!(self, l => l.list_loader_versions(game_version).await)
    }

    async fn resolve_default_loader_version(&self, game_version: &str) -> LauncherResult<String> {
        dispatch!(self, l => l.resolve_default_loader_version(game_version).await)
    }

    async fn provision(&self, ctx: ProvisionContext<'_>) -> LauncherResult<ProvisionedArtifact> {
        dispatch!(self, l => l.provision(ctx).await)
    }

    fn synthesize_launch_config(&self, ctx: ProvisionContext<'_>) -> LaunchConfig {
        dispatch!(self, l => l.synthesize_launch_config(ctx))
    }

    async fn launch_config(&self, request: &LaunchRequest) -> LauncherResult<LaunchConfig> {
        dispatch!(self, l => l.launch_config(request).await)
    }
}

/// Every backend, built once and shared read-only.
pub struct LoaderRegistry {
    backends: [Backend; 5],
}

impl LoaderRegistry {
    pub fn new(client: reqwest::Client, endpoints: &LoaderEndpoints) -> Self {
        debug!("Building loader registry: {:?}", endpoints);
        Self {
            backends: LoaderType::ALL.map(|loader| Backend::new(loader, client.clone(), endpoints)),
        }
    }

    /// Production endpoints and the crate's HTTP client.
    pub fn with_defaults() -> LauncherResult<Self> {
        Self::from_endpoints(&LoaderEndpoints::default())
    }

    /// Build the shared client from `endpoints.user_agent`.
    pub fn from_endpoints(endpoints: &LoaderEndpoints) -> LauncherResult<Self> {
        Ok(Self::new(build_http_client(&endpoints.user_agent)?, endpoints))
    }

    /// Endpoints from `<root>/loader_endpoints.json`, defaults where absent.
    pub fn from_root(root: &Path) -> LauncherResult<Self> {
        let endpoints = LoaderEndpoints::load_from_root(root)?;
        Self::from_endpoints(&endpoints)
    }

    pub fn get(&self, loader: LoaderType) -> &Backend {
        &self.backends[loader.index()]
    }

    /// Look a backend up by its identifier (`"fabric"`, `"neoforge"`, ...).
    pub fn resolve(&self, id: &str) -> LauncherResult<&Backend> {
        let loader: LoaderType = id.parse()?;
        Ok(self.get(loader))
    }

    pub fn iter(&self) -> impl Iterator<Item = &Backend> {
        self.backends.iter()
    }

    pub async fn launch_config(
        &self,
        loader: LoaderType,
        request: &LaunchRequest,
    ) -> LauncherResult<LaunchConfig> {
        self.get(loader).launch_config(request).await
    }
}

static GLOBAL_REGISTRY: OnceLock<LoaderRegistry> = OnceLock::new();

/// Process-wide registry with production endpoints, built on first use.
pub fn global() -> LauncherResult<&'static LoaderRegistry> {
    if let Some(registry) = GLOBAL_REGISTRY.get() {
        return Ok(registry);
    }

    let registry = LoaderRegistry::with_defaults()?;
    Ok(GLOBAL_REGISTRY.get_or_init(|| registry))
}
