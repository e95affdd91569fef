//! Minecraft version catalog
//!
//! Version data comes from a base file plus optional per-minecraft-version
//! overlays. The resolver picks the best overlay for a requested version
//! and merges it onto the base; the emitter renders the result as a
//! Gradle version catalog.

pub mod data;
pub mod emit;
pub mod resolve;
pub mod source;
pub mod store;

pub use data::{LibraryDef, PluginDef, VersionData};
pub use emit::render_catalog;
pub use resolve::VersionResolver;
pub use source::{open_source, BuiltinSource, DirSource, MemorySource, VersionSource};
pub use store::{ResolutionCache, VersionStore};
