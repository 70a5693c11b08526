use std::collections::HashSet;
use std::path::PathBuf;

use async_trait::async_trait;
use tracing::{debug, info};

use super::compat::{self, CompatibilityDescriptor};
use super::context::ProvisionContext;
use super::loader::{ModLoader, ProvisionedArtifact};
use super::loader_type::LoaderType;
use crate::core::config::LoaderEndpoints;
use crate::core::downloader::Downloader;
use crate::core::error::{LauncherError, LauncherResult};
use crate::core::launch::LaunchConfig;
use crate::core::maven::{MavenArtifact, MavenMetadata};
use crate::core::version::GameVersion;

const NEOFORGE_GROUP: &str = "net.neoforged";
const NEOFORGE_ARTIFACT: &str = "neoforge";
/// NeoForge for 1.20.1 was published under the old artifact name.
const LEGACY_ARTIFACT: &str = "forge";

/// A NeoForge version such as `20.4.237` or `21.0.0-beta`.
///
/// The first two components encode the game version: `20.4.x` targets
/// 1.20.4, `21.0.x` targets 1.21.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NeoForgeVersion {
    pub major: u32,
    pub minor: u32,
    pub build: String,
    pub beta: bool,
}

impl NeoForgeVersion {
    pub fn parse(version: &str) -> Option<Self> {
        let beta = version.contains("-beta");
        let core = version.split('-').next()?;
        let mut parts = core.splitn(3, '.');
        let major = parts.next()?.parse().ok()?;
        let minor = parts.next()?.parse().ok()?;
        let build = parts.next().unwrap_or_default().to_string();
        Some(Self {
            major,
            minor,
            build,
            beta,
        })
    }

    /// The game version this release targets.
    pub fn game_version(&self) -> String {
        if self.minor == 0 {
            format!("1.{}", self.major)
        } else {
            format!("1.{}.{}", self.major, self.minor)
        }
    }

    /// Whether this release targets `game_version` (`1.<major>[.<minor>]`).
    pub fn targets(&self, game_version: &str) -> bool {
        game_components(game_version) == Some((self.major, self.minor))
    }
}

/// `1.20.4` -> `(20, 4)`, `1.21` -> `(21, 0)`.
fn game_components(game_version: &str) -> Option<(u32, u32)> {
    let mut parts = game_version.split('.').skip(1);
    let major = parts.next()?.parse().ok()?;
    let minor = match parts.next() {
        Some(minor) => minor.parse().ok()?,
        None => 0,
    };
    Some((major, minor))
}

/// NeoForge via its Maven repository.
pub struct NeoForgeLoader {
    downloader: Downloader,
    maven_url: String,
}

impl NeoForgeLoader {
    pub fn new(client: reqwest::Client, endpoints: &LoaderEndpoints) -> Self {
        Self {
            downloader: Downloader::new(client),
            maven_url: endpoints.neoforge_maven.clone(),
        }
    }

    /// Every NeoForge Maven version, oldest first.
    async fn fetch_versions(&self) -> LauncherResult<Vec<String>> {
        let url =
            MavenArtifact::metadata_url(NEOFORGE_GROUP, NEOFORGE_ARTIFACT, &self.maven_url);
        let versions = MavenMetadata::fetch(self.downloader.client(), &url)
            .await?
            .into_versions();
        if versions.is_empty() {
            return Err(LauncherError::MetadataEmpty(
                LoaderType::NeoForge.to_string(),
            ));
        }
        Ok(versions)
    }
}

fn jar_path(ctx: &ProvisionContext<'_>) -> PathBuf {
    ctx.version_dir(LoaderType::NeoForge).join("neoforge.jar")
}

#[async_trait]
impl ModLoader for NeoForgeLoader {
    fn loader_type(&self) -> LoaderType {
        LoaderType::NeoForge
    }

    fn compatibility(&self) -> Option<&'static CompatibilityDescriptor> {
        Some(&compat::NEOFORGE)
    }

    async fn list_supported_game_versions(&self) -> LauncherResult<Vec<GameVersion>> {
        let versions = self.fetch_versions().await?;

        let mut seen = HashSet::new();
        let mut supported = Vec::new();
        for raw in &versions {
            let Some(version) = NeoForgeVersion::parse(raw) else {
                debug!("Skipping unrecognised NeoForge version {}", raw);
                continue;
            };
            if version.beta {
                continue;
            }
            let game = version.game_version();
            if seen.insert(game.clone()) {
                supported.push(GameVersion::new(game, true));
            }
        }

        Ok(supported)
    }

    async fn list_all_loader_versions(&self) -> LauncherResult<Vec<String>> {
        self.fetch_versions().await
    }

    async fn list_loader_versions(&self, game_version: &str) -> LauncherResult<Vec<String>> {
        let versions = self.fetch_versions().await?;
        let mut matching: Vec<String> = versions
            .into_iter()
            .filter(|raw| {
                NeoForgeVersion::parse(raw).is_some_and(|v| !v.beta && v.targets(game_version))
            })
            .collect();
        // Maven lists NeoForge oldest first
        matching.reverse();

        debug!(
            "{} NeoForge versions for Minecraft {}",
            matching.len(),
            game_version
        );
        Ok(matching)
    }

    async fn provision(&self, ctx: ProvisionContext<'_>) -> LauncherResult<ProvisionedArtifact> {
        info!(
            "Installing NeoForge {} for Minecraft {}",
            ctx.loader_version, ctx.game_version
        );

        let dest = jar_path(&ctx);
        let installer_url = MavenArtifact::new(NEOFORGE_GROUP, NEOFORGE_ARTIFACT, ctx.loader_version)
            .with_classifier("installer")
            .url(&self.maven_url);

        match self.downloader.download_file(&installer_url, &dest).await {
            Ok(()) => {}
            Err(primary_err @ LauncherError::DownloadFailed { status: 404, .. }) => {
                let legacy_version = if ctx.loader_version.starts_with(ctx.game_version) {
                    ctx.loader_version.to_string()
                } else {
                    format!("{}-{}", ctx.game_version, ctx.loader_version)
                };
                let legacy_url =
                    MavenArtifact::new(NEOFORGE_GROUP, LEGACY_ARTIFACT, &legacy_version)
                        .with_classifier("installer")
                        .url(&self.maven_url);
                info!(
                    "Primary NeoForge route failed, trying legacy route: {}",
                    legacy_url
                );
                self.downloader
                    .download_file(&legacy_url, &dest)
                    .await
                    .map_err(|_| primary_err)?;
            }
            Err(e) => return Err(e),
        }

        info!("NeoForge {} saved to {:?}", ctx.loader_version, dest);
        Ok(ProvisionedArtifact::Binary(dest))
    }

    fn synthesize_launch_config(&self, ctx: ProvisionContext<'_>) -> LaunchConfig {
        LaunchConfig::new(ctx.root, ctx.game_version)
            .with_custom(ctx.version_id(LoaderType::NeoForge))
            .with_forge(jar_path(&ctx))
    }
}
