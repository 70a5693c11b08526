use std::path::PathBuf;
use thiserror::Error;

/// Central error type for loader resolution and provisioning.
/// Every module returns `Result<T, LauncherError>`.
#[derive(Debug, Error)]
pub enum LauncherError {
    // ── Resolution ──────────────────────────────────────
    #[error("Error while fetching {0} metadata; listing is empty")]
    MetadataEmpty(String),

    #[error("Version \"{0}\" could not be found or is not supported by the loader")]
    InvalidVersion(String),

    #[error("Could not find an installer download link for {0}")]
    InstallerLinkNotFound(String),

    #[error("Loader \"{0}\" could not be found")]
    LoaderNotFound(String),

    // ── IO ──────────────────────────────────────────────
    #[error("IO error at {path:?}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    // ── Network ─────────────────────────────────────────
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Download failed for {url}: HTTP {status}")]
    DownloadFailed { url: String, status: u16 },

    // ── XML ─────────────────────────────────────────────
    #[error("XML parse error: {0}")]
    Xml(#[from] quick_xml::DeError),

    // ── JSON ────────────────────────────────────────────
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    // ── Config ──────────────────────────────────────────
    #[error("Invalid endpoint configuration: {0}")]
    Config(String),
}

/// Convenience alias used throughout the crate.
pub type LauncherResult<T> = Result<T, LauncherError>;

impl LauncherError {
    /// Errors caused by the caller's input rather than remote or local state.
    pub fn is_user_actionable(&self) -> bool {
        matches!(
            self,
            LauncherError::InvalidVersion(_) | LauncherError::LoaderNotFound(_)
        )
    }
}

impl From<std::io::Error> for LauncherError {
    fn from(source: std::io::Error) -> Self {
        LauncherError::Io {
            path: PathBuf::new(),
            source,
        }
    }
}

// ── Serialization for IPC consumers ─────────────────────
// Frontends receiving a launch-config failure only need the message.
impl serde::Serialize for LauncherError {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}
