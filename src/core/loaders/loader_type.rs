use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::core::error::LauncherError;

/// Supported ecosystems — strongly typed, no magic strings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LoaderType {
    Vanilla,
    Fabric,
    Quilt,
    Forge,
    NeoForge,
}

impl LoaderType {
    /// Every variant, in discriminant order.
    pub const ALL: [LoaderType; 5] = [
        LoaderType::Vanilla,
        LoaderType::Fabric,
        LoaderType::Quilt,
        LoaderType::Forge,
        LoaderType::NeoForge,
    ];

    pub fn id(self) -> &'static str {
        match self {
            LoaderType::Vanilla => "vanilla",
            LoaderType::Fabric => "fabric",
            LoaderType::Quilt => "quilt",
            LoaderType::Forge => "forge",
            LoaderType::NeoForge => "neoforge",
        }
    }

    pub(crate) fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for LoaderType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for LoaderType {
    type Err = LauncherError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        LoaderType::ALL
            .into_iter()
            .find(|loader| loader.id() == s)
            .ok_or_else(|| LauncherError::LoaderNotFound(s.to_string()))
    }
}
