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

/// Quilt via the Quilt Meta API (same shape as Fabric's, v3 instead of v2).
pub struct QuiltLoader {
    meta: MetaApi,
}

impl QuiltLoader {
    pub fn new(client: reqwest::Client, endpoints: &LoaderEndpoints) -> Self {
        Self {
            meta: MetaApi::new(LoaderType::Quilt, &endpoints.quilt_meta, client),
        }
    }

    pub async fn list_loaders(&self) -> LauncherResult<Vec<LoaderVersion>> {
        self.meta.list_loaders().await
    }
}

#[async_trait]
impl ModLoader for QuiltLoader {
    fn loader_type(&self) -> LoaderType {
        LoaderType::Quilt
    }

    fn compatibility(&self) -> Option<&'static CompatibilityDescriptor> {
        Some(&compat::QUILT)
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
            "Installing Quilt loader {} for Minecraft {}",
            ctx.loader_version, ctx.game_version
        );
        let path = self.meta.provision_profile(ctx).await?;
        Ok(ProvisionedArtifact::Descriptor(path))
    }

    fn synthesize_launch_config(&self, ctx: ProvisionContext<'_>) -> LaunchConfig {
        LaunchConfig::new(ctx.root, ctx.game_version).with_custom(ctx.version_id(LoaderType::Quilt))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::error::LauncherError;
    use crate::core::launch::LaunchRequest;
    use mockito::Server;
    use tempfile::TempDir;

    fn loader_for(server: &Server) -> QuiltLoader {
        QuiltLoader::new(
            reqwest::Client::new(),
            &LoaderEndpoints::with_base(&server.url()),
        )
    }

    #[tokio::test]
    async fn loaders_without_stability_flag_parse() {
        let mut server = Server::new_async().await;
        let _loaders = server
            .mock("GET", "/quilt/v3/versions/loader")
            .with_header("content-type", "application/json")
            .with_body(
                r#"[
                    {"separator": "+build.", "build": 7, "maven": "org.quiltmc:quilt-loader:0.26.4", "version": "0.26.4"},
                    {"separator": "+build.", "build": 6, "maven": "org.quiltmc:quilt-loader:0.26.4-beta.1", "version": "0.26.4-beta.1"}
                ]"#,
            )
            .create_async()
            .await;

        let quilt = loader_for(&server);
        let loaders = quilt.list_loaders().await.unwrap();
        assert!(loaders.iter().all(|l| l.stable.is_none()));

        let versions = quilt.list_loader_versions("1.20.1").await.unwrap();
        assert_eq!(versions, vec!["0.26.4", "0.26.4-beta.1"]);
    }

    #[tokio::test]
    async fn empty_game_listing_is_metadata_empty() {
        let mut server = Server::new_async().await;
        let _game = server
            .mock("GET", "/quilt/v3/versions/game")
            .with_header("content-type", "application/json")
            .with_body("[]")
            .create_async()
            .await;

        let err = loader_for(&server)
            .list_supported_game_versions()
            .await
            .unwrap_err();
        assert!(matches!(err, LauncherError::MetadataEmpty(ref l) if l == "quilt"));
    }

    #[tokio::test]
    async fn provisions_profile_under_quilt_id() {
        let mut server = Server::new_async().await;
        let body = r#"{"id":"quilt-loader-0.26.4-1.20.1","inheritsFrom":"1.20.1"}"#;
        let _profile = server
            .mock("GET", "/quilt/v3/versions/loader/1.20.1/0.26.4/profile/json")
            .with_header("content-type", "application/json")
            .with_body(body)
            .create_async()
            .await;

        let root = TempDir::new().unwrap();
        let request = LaunchRequest::new(root.path(), "1.20.1")
            .unwrap()
            .with_loader_version("0.26.4");
        let config = loader_for(&server).launch_config(&request).await.unwrap();

        assert_eq!(config.version.custom.as_deref(), Some("quilt-1.20.1-0.26.4"));
        let saved = root
            .path()
            .join("versions/quilt-1.20.1-0.26.4/quilt-1.20.1-0.26.4.json");
        assert_eq!(std::fs::read_to_string(saved).unwrap(), body);
    }

    #[tokio::test]
    async fn not_found_profile_is_invalid_version() {
        let mut server = Server::new_async().await;
        let _profile = server
            .mock("GET", "/quilt/v3/versions/loader/9.9.9/0.26.4/profile/json")
            .with_status(404)
            .create_async()
            .await;

        let root = TempDir::new().unwrap();
        let ctx = ProvisionContext::new(root.path(), "9.9.9", "0.26.4");
        let err = loader_for(&server).provision(ctx).await.unwrap_err();
        assert!(matches!(err, LauncherError::InvalidVersion(v) if v == "9.9.9"));
    }

    #[tokio::test]
    async fn malformed_profile_is_rejected_before_writing() {
        let mut server = Server::new_async().await;
        let _profile = server
            .mock("GET", "/quilt/v3/versions/loader/1.20.1/0.26.4/profile/json")
            .with_body("<html>maintenance</html>")
            .create_async()
            .await;

        let root = TempDir::new().unwrap();
        let ctx = ProvisionContext::new(root.path(), "1.20.1", "0.26.4");
        let err = loader_for(&server).provision(ctx).await.unwrap_err();
        assert!(matches!(err, LauncherError::Json(_)));
        assert!(!ctx.version_dir(LoaderType::Quilt).exists());
    }
}
