//! Jar metadata rewriting
//!
//! Streams every entry of a built mod jar into a new archive. Loader
//! metadata entries for the target platform are rewritten to declare the
//! tracked dependencies; every other entry is copied raw, so its
//! compressed bytes are unchanged.
//!
//! The new archive is written next to the original as
//! `{stem}-temp.{ext}` and only replaces the original once complete.

pub mod metadata;

pub use metadata::MetadataFormat;

use crate::deps::ModDependency;
use crate::error::{ModToolsError, ModToolsResult};
use crate::platform::Platform;
use std::fs::{self, File};
use std::io::{BufReader, BufWriter, Read, Write};
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};
use zip::write::SimpleFileOptions;
use zip::{ZipArchive, ZipWriter};

/// Why a rewrite did nothing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    NoDependencies,
    MissingArchive,
}

/// Result of a rewrite request
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RewriteOutcome {
    /// The jar was replaced
    Rewritten {
        /// Metadata entries that were modified
        modified_entries: Vec<String>,
        /// Total entries in the archive
        total_entries: usize,
    },
    Skipped(SkipReason),
}

/// Rewrite the loader metadata inside `jar` to declare `deps`.
///
/// Missing jars and empty dependency lists are skipped; any IO or archive
/// failure during the rewrite is an error and leaves the original intact.
pub fn rewrite_jar(
    jar: &Path,
    platform: Platform,
    mod_id: &str,
    deps: &[ModDependency],
) -> ModToolsResult<RewriteOutcome> {
    if deps.is_empty() {
        info!("No mod dependencies to add to {}", jar.display());
        return Ok(RewriteOutcome::Skipped(SkipReason::NoDependencies));
    }

    if !jar.is_file() {
        warn!("Jar file does not exist: {}", jar.display());
        return Ok(RewriteOutcome::Skipped(SkipReason::MissingArchive));
    }

    let temp = temp_path(jar);
    let written = write_rewritten(jar, &temp, platform, mod_id, deps);
    let (modified_entries, total_entries) = match written {
        Ok(counts) => counts,
        Err(e) => {
            if let Err(cleanup) = fs::remove_file(&temp) {
                debug!("Could not remove {}: {}", temp.display(), cleanup);
            }
            return Err(e);
        }
    };

    fs::rename(&temp, jar).map_err(|e| {
        ModToolsError::io(
            format!("replacing {} with {}", jar.display(), temp.display()),
            e,
        )
    })?;

    if modified_entries.is_empty() {
        warn!(
            "No {} metadata found in {}, jar copied unchanged",
            platform,
            jar.display()
        );
    } else {
        info!(
            "Modified mod metadata with {} dependencies for {}",
            deps.len(),
            platform
        );
    }

    Ok(RewriteOutcome::Rewritten {
        modified_entries,
        total_entries,
    })
}

/// `dir/name-temp.ext` for `dir/name.ext`
pub fn temp_path(jar: &Path) -> PathBuf {
    let stem = jar
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();
    let name = match jar.extension() {
        Some(ext) => format!("{}-temp.{}", stem, ext.to_string_lossy()),
        None => format!("{}-temp", stem),
    };
    jar.with_file_name(name)
}

/// Largest preallocation made from an entry's declared size; the header
/// value is untrusted and the buffer still grows past this if needed
const MAX_CAPACITY_HINT: u64 = 1 << 20;

fn capacity_hint(declared_size: u64) -> usize {
    declared_size.min(MAX_CAPACITY_HINT) as usize
}

fn write_rewritten(
    jar: &Path,
    temp: &Path,
    platform: Platform,
    mod_id: &str,
    deps: &[ModDependency],
) -> ModToolsResult<(Vec<String>, usize)> {
    let input = File::open(jar)
        .map_err(|e| ModToolsError::io(format!("opening {}", jar.display()), e))?;
    let mut archive =
        ZipArchive::new(BufReader::new(input)).map_err(|e| ModToolsError::archive(jar, e))?;

    let output = File::create(temp)
        .map_err(|e| ModToolsError::io(format!("creating {}", temp.display()), e))?;
    let mut writer = ZipWriter::new(BufWriter::new(output));

    let mut modified = Vec::new();
    for index in 0..archive.len() {
        let name = archive
            .by_index_raw(index)
            .map_err(|e| ModToolsError::archive(jar, e))?
            .name()
            .to_string();

        let Some(format) = MetadataFormat::for_entry(platform, &name) else {
            let entry = archive
                .by_index_raw(index)
                .map_err(|e| ModToolsError::archive(jar, e))?;
            writer
                .raw_copy_file(entry)
                .map_err(|e| ModToolsError::archive(temp, e))?;
            continue;
        };

        let mut entry = archive
            .by_index(index)
            .map_err(|e| ModToolsError::archive(jar, e))?;
        let mut content = Vec::with_capacity(capacity_hint(entry.size()));
        entry
            .read_to_end(&mut content)
            .map_err(|e| ModToolsError::io(format!("reading {} from {}", name, jar.display()), e))?;

        let mut options = SimpleFileOptions::default().compression_method(entry.compression());
        if let Some(modified_at) = entry.last_modified() {
            options = options.last_modified_time(modified_at);
        }
        if let Some(mode) = entry.unix_mode() {
            options = options.unix_permissions(mode);
        }
        drop(entry);

        let rewritten = format.apply(&name, &content, mod_id, deps)?;
        debug!("Rewrote {} ({} -> {} bytes)", name, content.len(), rewritten.len());

        writer
            .start_file(name.as_str(), options)
            .map_err(|e| ModToolsError::archive(temp, e))?;
        writer
            .write_all(&rewritten)
            .map_err(|e| ModToolsError::io(format!("writing {} to {}", name, temp.display()), e))?;
        modified.push(name);
    }

    let total = archive.len();
    let mut output = writer.finish().map_err(|e| ModToolsError::archive(temp, e))?;
    output
        .flush()
        .map_err(|e| ModToolsError::io(format!("flushing {}", temp.display()), e))?;

    Ok((modified, total))
}
