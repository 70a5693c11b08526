use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core::error::{LauncherError, LauncherResult};
use crate::core::http::DEFAULT_USER_AGENT;

const ENDPOINTS_FILE: &str = "loader_endpoints.json";

/// Remote endpoints every backend talks to.
///
/// Missing fields in a config file fall back to the production URL, so a file
/// only needs to list the hosts it overrides (mirrors, local proxies).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "snake_case")]
pub struct LoaderEndpoints {
    /// Full URL of the Mojang version manifest v2.
    pub vanilla_manifest: String,
    pub fabric_meta: String,
    pub quilt_meta: String,
    pub forge_maven: String,
    /// Human-facing Forge download index, used when the Maven installer is missing.
    pub forge_files: String,
    pub neoforge_maven: String,
    /// `User-Agent` sent to every endpoint above.
    pub user_agent: String,
}

impl Default for LoaderEndpoints {
    fn default() -> Self {
        Self {
            vanilla_manifest: "https://piston-meta.mojang.com/mc/game/version_manifest_v2.json"
                .to_string(),
            fabric_meta: "https://meta.fabricmc.net/v2".to_string(),
            quilt_meta: "https://meta.quiltmc.org/v3".to_string(),
            forge_maven: "https://maven.minecraftforge.net".to_string(),
            forge_files: "https://files.minecraftforge.net".to_string(),
            neoforge_maven: "https://maven.neoforged.net/releases".to_string(),
            user_agent: DEFAULT_USER_AGENT.to_string(),
        }
    }
}

impl LoaderEndpoints {
    /// Point every endpoint at a single host, each ecosystem under its own prefix.
    pub fn with_base(base: &str) -> Self {
        let base = base.trim_end_matches('/');
        Self {
            vanilla_manifest: format!("{base}/mc/game/version_manifest_v2.json"),
            fabric_meta: format!("{base}/fabric/v2"),
            quilt_meta: format!("{base}/quilt/v3"),
            forge_maven: format!("{base}/forge-maven"),
            forge_files: format!("{base}/forge-files"),
            neoforge_maven: format!("{base}/neoforge-maven"),
            user_agent: DEFAULT_USER_AGENT.to_string(),
        }
    }

    /// Load endpoints from a JSON file. A missing file yields the defaults.
    pub fn load(path: &Path) -> LauncherResult<Self> {
        let raw = match std::fs::read_to_string(path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                debug!("No endpoint config at {:?}, using defaults", path);
                return Ok(Self::default());
            }
            Err(source) => {
                return Err(LauncherError::Io {
                    path: path.to_path_buf(),
                    source,
                })
            }
        };

        serde_json::from_str(&raw)
            .map_err(|e| LauncherError::Config(format!("{}: {}", path.display(), e)))
    }

    /// Load `loader_endpoints.json` from a root directory.
    pub fn load_from_root(root: &Path) -> LauncherResult<Self> {
        Self::load(&root.join(ENDPOINTS_FILE))
    }
}

/// Join a base URL and a path without doubling or dropping the slash.
pub(crate) fn join_url(base: &str, path: &str) -> String {
    format!(
        "{}/{}",
        base.trim_end_matches('/'),
        path.trim_start_matches('/')
    )
}

/// The conventional game directory for the current platform.
pub fn default_root_dir() -> PathBuf {
    if cfg!(target_os = "linux") {
        return dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".minecraft");
    }

    let base = dirs::data_dir().unwrap_or_else(|| PathBuf::from("."));
    if cfg!(target_os = "macos") {
        base.join("minecraft")
    } else {
        base.join(".minecraft")
    }
}
