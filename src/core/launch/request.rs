use std::path::{Path, PathBuf};

use crate::core::error::{LauncherError, LauncherResult};

/// What the caller wants launched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LaunchRequest {
    root_path: PathBuf,
    game_version: String,
    loader_version: Option<String>,
}

impl LaunchRequest {
    /// Fails with `InvalidVersion` when `game_version` is blank.
    pub fn new(root_path: impl Into<PathBuf>, game_version: impl Into<String>) -> LauncherResult<Self> {
        let game_version = game_version.into();
        if game_version.trim().is_empty() {
            return Err(LauncherError::InvalidVersion(game_version));
        }

        Ok(Self {
            root_path: root_path.into(),
            game_version,
            loader_version: None,
        })
    }

    /// Pin a loader version. It is used as-is, without any remote lookup.
    pub fn with_loader_version(mut self, loader_version: impl Into<String>) -> Self {
        self.loader_version = Some(loader_version.into());
        self
    }

    pub fn root_path(&self) -> &Path {
        &self.root_path
    }

    pub fn game_version(&self) -> &str {
        &self.game_version
    }

    pub fn loader_version(&self) -> Option<&str> {
        self.loader_version.as_deref()
    }
}
