use std::collections::HashSet;
use std::fmt;
use std::path::PathBuf;
use std::sync::OnceLock;

use async_trait::async_trait;
use regex::Regex;
use tracing::{debug, info, warn};

use super::compat::{self, CompatibilityDescriptor};
use super::context::{version_id, ProvisionContext};
use super::loader::{ModLoader, ProvisionedArtifact};
use super::loader_type::LoaderType;
use crate::core::config::{join_url, LoaderEndpoints};
use crate::core::downloader::Downloader;
use crate::core::error::{LauncherError, LauncherResult};
use crate::core::launch::LaunchConfig;
use crate::core::maven::{MavenArtifact, MavenMetadata};
use crate::core::version::GameVersion;

const FORGE_GROUP: &str = "net.minecraftforge";
const FORGE_ARTIFACT: &str = "forge";

/// Last 1.12.2 build published with a `universal` jar.
const LAST_UNIVERSAL_1_12_2_BUILD: u32 = 2847;

const INSTALLER_LINK: &str = r#"<a href="([^"]+installer\.jar)">"#;

static INSTALLER_LINK_RE: OnceLock<Regex> = OnceLock::new();

fn installer_link_re() -> &'static Regex {
    INSTALLER_LINK_RE
        .get_or_init(|| Regex::new(INSTALLER_LINK).expect("installer link pattern is valid"))
}

/// A Forge Maven version such as `1.20.1-47.2.0`: the game version, then the
/// Forge version proper. Old releases carry a trailing game suffix on the
/// loader part (`1.7.10-10.13.4.1614-1.7.10`), kept as-is.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ForgeVersion {
    pub game: String,
    pub loader: String,
}

impl ForgeVersion {
    /// Split a Maven version at the first `-`.
    pub fn parse(maven_version: &str) -> Option<Self> {
        let (game, loader) = maven_version.split_once('-')?;
        if game.is_empty() || loader.is_empty() {
            return None;
        }
        Some(Self {
            game: game.to_string(),
            loader: loader.to_string(),
        })
    }

    /// Build from a game version and a loader version that may or may not
    /// already carry the `<game>-` prefix.
    pub fn resolve(game: &str, loader: &str) -> Self {
        let loader = loader
            .strip_prefix(game)
            .and_then(|rest| rest.strip_prefix('-'))
            .unwrap_or(loader);
        Self {
            game: game.to_string(),
            loader: loader.to_string(),
        }
    }

    pub fn maven_version(&self) -> String {
        format!("{}-{}", self.game, self.loader)
    }

    fn game_minor(&self) -> Option<u32> {
        self.game.split('.').nth(1)?.parse().ok()
    }

    fn build_number(&self) -> Option<u32> {
        self.loader.split(['.', '-']).nth(3)?.parse().ok()
    }

    /// Forge switched from `universal` to `installer` jars during 1.12.2.
    pub fn uses_universal_jar(&self) -> bool {
        match self.game_minor() {
            Some(minor) if minor < 12 => true,
            Some(12) if self.game == "1.12.2" => self
                .build_number()
                .is_some_and(|build| build <= LAST_UNIVERSAL_1_12_2_BUILD),
            Some(12) => true,
            _ => false,
        }
    }

    pub fn classifier(&self) -> &'static str {
        if self.uses_universal_jar() {
            "universal"
        } else {
            "installer"
        }
    }

    fn artifact(&self) -> MavenArtifact {
        MavenArtifact::new(FORGE_GROUP, FORGE_ARTIFACT, &self.maven_version())
            .with_classifier(self.classifier())
    }
}

impl fmt::Display for ForgeVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.game, self.loader)
    }
}

/// Forge via its Maven repository. The jar is only downloaded; running the
/// installer is the launcher's job.
pub struct ForgeLoader {
    downloader: Downloader,
    maven_url: String,
    files_url: String,
}

impl ForgeLoader {
    pub fn new(client: reqwest::Client, endpoints: &LoaderEndpoints) -> Self {
        Self {
            downloader: Downloader::new(client),
            maven_url: endpoints.forge_maven.clone(),
            files_url: endpoints.forge_files.clone(),
        }
    }

    /// Every Forge Maven version, newest first.
    async fn fetch_versions(&self) -> LauncherResult<Vec<String>> {
        let url = MavenArtifact::metadata_url(FORGE_GROUP, FORGE_ARTIFACT, &self.maven_url);
        let versions = MavenMetadata::fetch(self.downloader.client(), &url)
            .await?
            .into_versions();
        if versions.is_empty() {
            return Err(LauncherError::MetadataEmpty(LoaderType::Forge.to_string()));
        }
        Ok(versions)
    }

    /// Scrape the files.minecraftforge.net index page for `version`'s installer.
    async fn find_installer_link(&self, version: &ForgeVersion) -> LauncherResult<String> {
        let url = join_url(
            &self.files_url,
            &format!("net/minecraftforge/forge/index_{}.html", version.game),
        );
        info!("Looking up Forge installer link on {}", url);

        let response = self.downloader.client().get(&url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(LauncherError::DownloadFailed {
                url,
                status: status.as_u16(),
            });
        }
        let html = response.text().await?;

        let links = installer_links(&html);
        let maven_version = version.maven_version();
        links
            .iter()
            .find(|link| link.contains(&maven_version))
            .or_else(|| links.first())
            .cloned()
            .ok_or_else(|| LauncherError::InstallerLinkNotFound(version.game.clone()))
    }
}

/// Installer links on a Forge index page, ad-redirect wrappers removed.
fn installer_links(html: &str) -> Vec<String> {
    installer_link_re()
        .captures_iter(html)
        .filter_map(|caps| caps.get(1))
        .map(|m| {
            let link = m.as_str();
            match link.rsplit_once("url=") {
                Some((_, target)) => target.to_string(),
                None => link.to_string(),
            }
        })
        .collect()
}

/// `versions/forge-<game>-<loader>/forge.jar`
fn jar_path(ctx: &ProvisionContext<'_>) -> PathBuf {
    let version = ForgeVersion::resolve(ctx.game_version, ctx.loader_version);
    ctx.root
        .join("versions")
        .join(version_id(LoaderType::Forge, &version.game, &version.loader))
        .join("forge.jar")
}

#[async_trait]
impl ModLoader for ForgeLoader {
    fn loader_type(&self) -> LoaderType {
        LoaderType::Forge
    }

    fn compatibility(&self) -> Option<&'static CompatibilityDescriptor> {
        Some(&compat::FORGE)
    }

    async fn list_supported_game_versions(&self) -> LauncherResult<Vec<GameVersion>> {
        let versions = self.fetch_versions().await?;

        let mut seen = HashSet::new();
        let supported: Vec<GameVersion> = versions
            .iter()
            .map(|v| v.split('-').next().unwrap_or(v))
            .filter(|game| seen.insert(*game))
            .map(|game| GameVersion::new(game, true))
            .collect();

        debug!("Forge supports {} game versions", supported.len());
        Ok(supported)
    }

    async fn list_all_loader_versions(&self) -> LauncherResult<Vec<String>> {
        self.fetch_versions().await
    }

    async fn list_loader_versions(&self, game_version: &str) -> LauncherResult<Vec<String>> {
        let versions = self.fetch_versions().await?;
        let matching: Vec<String> = versions
            .into_iter()
            .filter(|v| ForgeVersion::parse(v).is_some_and(|fv| fv.game == game_version))
            .collect();

        debug!(
            "{} Forge versions for Minecraft {}",
            matching.len(),
            game_version
        );
        Ok(matching)
    }

    async fn provision(&self, ctx: ProvisionContext<'_>) -> LauncherResult<ProvisionedArtifact> {
        let version = ForgeVersion::resolve(ctx.game_version, ctx.loader_version);
        let dest = jar_path(&ctx);
        let url = version.artifact().url(&self.maven_url);
        info!("Downloading Forge {} from {}", version, url);

        match self.downloader.download_file(&url, &dest).await {
            Ok(()) => {}
            Err(LauncherError::DownloadFailed { status: 404, .. }) => {
                warn!("Forge {} not on Maven, falling back to files index", version);
                let link = self.find_installer_link(&version).await?;
                info!("Downloading Forge installer from {}", link);
                self.downloader.download_file(&link, &dest).await?;
            }
            Err(e) => return Err(e),
        }

        info!("Forge {} saved to {:?}", version, dest);
        Ok(ProvisionedArtifact::Binary(dest))
    }

    fn synthesize_launch_config(&self, ctx: ProvisionContext<'_>) -> LaunchConfig {
        LaunchConfig::new(ctx.root, ctx.game_version).with_forge(jar_path(&ctx))
    }
}
