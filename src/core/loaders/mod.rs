pub mod compat;
pub mod context;
pub mod fabric;
pub mod forge;
pub mod loader;
pub mod loader_type;
mod meta;
pub mod neoforge;
pub mod quilt;
pub mod registry;
pub mod vanilla;

pub use compat::CompatibilityDescriptor;
pub use context::ProvisionContext;
pub use forge::ForgeVersion;
pub use loader::{ModLoader, ProvisionedArtifact};
pub use loader_type::LoaderType;
pub use meta::LoaderVersion;
pub use neoforge::NeoForgeVersion;
pub use registry::{Backend, LoaderRegistry};
