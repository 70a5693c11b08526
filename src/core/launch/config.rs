use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

const RELEASE: &str = "release";

/// Partial launcher configuration produced by a backend.
///
/// The launcher that consumes this owns every other option (memory, auth,
/// java path); callers merge this fragment into their own config.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LaunchConfig {
    pub root: PathBuf,
    pub version: LaunchVersion,
    /// Installer or universal jar for Forge-family loaders.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub forge: Option<PathBuf>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LaunchVersion {
    pub number: String,
    #[serde(rename = "type")]
    pub version_type: String,
    /// Name of a `versions/<custom>/<custom>.json` profile to launch instead of `number`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub custom: Option<String>,
}

impl LaunchConfig {
    pub fn new(root: &Path, game_version: &str) -> Self {
        Self {
            root: root.to_path_buf(),
            version: LaunchVersion {
                number: game_version.to_string(),
                version_type: RELEASE.to_string(),
                custom: None,
            },
            forge: None,
        }
    }

    pub fn with_custom(mut self, custom: impl Into<String>) -> Self {
        self.version.custom = Some(custom.into());
        self
    }

    pub fn with_forge(mut self, artifact: PathBuf) -> Self {
        self.forge = Some(artifact);
        self
    }
}
