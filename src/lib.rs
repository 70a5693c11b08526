pub mod core;

use tracing_subscriber::EnvFilter;

pub use crate::core::config::{default_root_dir, LoaderEndpoints};
pub use crate::core::error::{LauncherError, LauncherResult};
pub use crate::core::http::{build_http_client, DEFAULT_USER_AGENT};
pub use crate::core::launch::{LaunchConfig, LaunchRequest};
pub use crate::core::liner::{pipe_lines, Liner};
pub use crate::core::loaders::{
    registry, Backend, CompatibilityDescriptor, LoaderRegistry, LoaderType, ModLoader,
    ProvisionedArtifact,
};
pub use crate::core::version::GameVersion;

/// Install a `fmt` subscriber filtered by `RUST_LOG`, falling back to
/// `info,modloader_core=debug`. Does nothing if a subscriber is already set.
pub fn init_tracing() {
    let installed = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info,modloader_core=debug")),
        )
        .try_init()
        .is_ok();

    if installed {
        tracing::info!("modloader-core {} logging initialised", env!("CARGO_PKG_VERSION"));
    }
}
