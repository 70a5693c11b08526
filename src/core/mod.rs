// ─── modloader-core ───
// Version discovery, resolution and provisioning for the five ecosystems.
//
// Architecture:
//   core/
//     config      — Remote endpoints + default game directory
//     http        — Shared reqwest client
//     liner       — Line splitting for streamed process output
//     version/    — Mojang manifest + game version records
//     maven/      — Artifact coordinates + maven-metadata.xml
//     downloader/ — Streaming downloads with atomic writes
//     loaders/    — Vanilla, Fabric, Quilt, Forge, NeoForge + registry
//     launch/     — Launch request + launch config fragment

pub mod config;
pub mod downloader;
pub mod error;
pub mod http;
pub mod launch;
pub mod liner;
pub mod loaders;
pub mod maven;
pub mod version;
