use std::path::{Path, PathBuf};

use super::loader_type::LoaderType;

/// The resolved `(root, game, loader)` tuple a backend provisions for.
/// Grouped so the trait signatures don't grow with every new field.
#[derive(Debug, Clone, Copy)]
pub struct ProvisionContext<'a> {
    pub root: &'a Path,
    pub game_version: &'a str,
    pub loader_version: &'a str,
}

impl<'a> ProvisionContext<'a> {
    pub fn new(root: &'a Path, game_version: &'a str, loader_version: &'a str) -> Self {
        Self {
            root,
            game_version,
            loader_version,
        }
    }

    /// `<loader>-<game>-<loader version>`
    pub fn version_id(&self, loader: LoaderType) -> String {
        version_id(loader, self.game_version, self.loader_version)
    }

    /// `<root>/versions/<version id>`
    pub fn version_dir(&self, loader: LoaderType) -> PathBuf {
        self.root.join("versions").join(self.version_id(loader))
    }
}

pub fn version_id(loader: LoaderType, game_version: &str, loader_version: &str) -> String {
    format!("{}-{}-{}", loader, game_version, loader_version)
}
