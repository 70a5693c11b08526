pub mod manifest;

use serde::{Deserialize, Serialize};

pub use manifest::{VersionEntry, VersionManifest};

/// A base game version as reported by an ecosystem.
///
/// Lists of these keep the ecosystem's own ordering; nothing here sorts them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameVersion {
    pub version: String,
    pub stable: bool,
}

impl GameVersion {
    pub fn new(version: impl Into<String>, stable: bool) -> Self {
        Self {
            version: version.into(),
            stable,
        }
    }
}
