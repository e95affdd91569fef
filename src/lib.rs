//! Modding Tools - build helpers for multi-loader Minecraft mods
//!
//! Resolves per-Minecraft-version library data into Gradle version
//! catalogs, tracks mod dependencies per build unit and writes them into
//! the loader metadata of built jars.

pub mod catalog;
pub mod cli;
pub mod config;
pub mod deps;
pub mod error;
pub mod platform;
pub mod project;
pub mod properties;
pub mod repositories;
pub mod rewrite;
pub mod ui;

pub use error::{ModToolsError, ModToolsResult};
