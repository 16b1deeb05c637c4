//! Pack generation.
//!
//! A build writes three independent trees under the output root:
//!
//! - `resource_pack/` - Bedrock manifest, item atlas, icons, armor overlays and
//!   attachables
//! - `custom_mappings/auto_mapping.json` - Geyser custom item mappings
//! - `source_pack/` - Oraxen item definitions and textures (optional)
//!
//! Failures tied to a single entry are recorded in [`BuildReport::issues`] and
//! the build carries on; only failures writing shared files abort it.

mod mapping;
mod resource_pack;
mod source_pack;

pub use mapping::{mapping_document, MappingDocument, MappingRecord, MAPPING_FORMAT_VERSION};
pub use source_pack::render_definition;

use crate::entry::PackEntry;
use crate::error::{PackError, Result};
use crate::ids::{IdSource, RandomIds};
use crate::textures::{copy_normalized, find_textures_root};
use std::collections::HashSet;
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

pub const RESOURCE_PACK_DIR: &str = "resource_pack";
pub const SOURCE_PACK_DIR: &str = "source_pack";
pub const MAPPINGS_DIR: &str = "custom_mappings";
pub const MAPPING_FILE: &str = "auto_mapping.json";

/// Knobs for a build
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildOptions {
    /// Leave `source_pack/` untouched
    pub skip_source_pack: bool,
    /// Manifest header name
    pub pack_name: String,
    /// Manifest header description
    pub pack_description: String,
}

impl Default for BuildOptions {
    fn default() -> Self {
        BuildOptions {
            skip_source_pack: false,
            pack_name: "Auto Pack".to_string(),
            pack_description: "Auto Pack".to_string(),
        }
    }
}

/// Which part of the build an issue came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BuildStep {
    ResourcePack,
    SourcePack,
}

impl fmt::Display for BuildStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BuildStep::ResourcePack => f.write_str("resource pack"),
            BuildStep::SourcePack => f.write_str("source pack"),
        }
    }
}

/// A per-entry failure that was skipped over
#[derive(Debug)]
pub struct BuildIssue {
    pub identifier: String,
    pub step: BuildStep,
    pub error: PackError,
}

/// Where a build wrote its output, plus everything it skipped
#[derive(Debug)]
pub struct BuildReport {
    pub resource_pack: PathBuf,
    pub source_pack: Option<PathBuf>,
    pub mapping: PathBuf,
    pub issues: Vec<BuildIssue>,
}

impl BuildReport {
    pub fn is_clean(&self) -> bool {
        self.issues.is_empty()
    }
}

/// Collects per-entry failures, logging each as it happens
#[derive(Debug, Default)]
pub(crate) struct IssueLog {
    issues: Vec<BuildIssue>,
}

impl IssueLog {
    pub(crate) fn record(&mut self, step: BuildStep, entry: &PackEntry, error: PackError) {
        tracing::warn!("{} > {}: {}", step, entry.identifier, error);
        self.issues.push(BuildIssue {
            identifier: entry.identifier.clone(),
            step,
            error,
        });
    }

    fn into_inner(self) -> Vec<BuildIssue> {
        self.issues
    }
}

/// Generates all output trees for a list of entries
pub struct PackBuilder<'a> {
    entries: &'a [PackEntry],
    out: PathBuf,
    options: BuildOptions,
}

impl<'a> PackBuilder<'a> {
    pub fn new(entries: &'a [PackEntry], out: impl Into<PathBuf>) -> Self {
        PackBuilder {
            entries,
            out: out.into(),
            options: BuildOptions::default(),
        }
    }

    pub fn with_options(mut self, options: BuildOptions) -> Self {
        self.options = options;
        self
    }

    /// Write every tree, drawing manifest UUIDs from `ids`
    pub fn build(&self, ids: &mut dyn IdSource) -> Result<BuildReport> {
        fs::create_dir_all(&self.out)?;

        for id in duplicate_identifiers(self.entries) {
            tracing::warn!("identifier '{}' is used more than once; last entry wins", id);
        }

        let mut issues = IssueLog::default();

        let resource_pack = self.dir(RESOURCE_PACK_DIR)?;
        resource_pack::write(&resource_pack, self.entries, &self.options, ids, &mut issues)?;
        tracing::info!("Resource pack written to {}", resource_pack.display());

        let mapping = self.dir(MAPPINGS_DIR)?.join(MAPPING_FILE);
        mapping::write(&mapping, self.entries)?;
        tracing::info!("Mapping written to {}", mapping.display());

        let source_pack = if self.options.skip_source_pack {
            None
        } else {
            let root = self.dir(SOURCE_PACK_DIR)?;
            source_pack::write(&root, self.entries, &mut issues)?;
            tracing::info!("Source pack written to {}", root.display());
            Some(root)
        };

        Ok(BuildReport {
            resource_pack,
            source_pack,
            mapping,
            issues: issues.into_inner(),
        })
    }

    fn dir(&self, name: &str) -> Result<PathBuf> {
        let dir = self.out.join(name);
        fs::create_dir_all(&dir)?;
        Ok(dir)
    }
}

/// Build with default options and random manifest UUIDs
pub fn build(entries: &[PackEntry], out: &Path, skip_source_pack: bool) -> Result<BuildReport> {
    let options = BuildOptions {
        skip_source_pack,
        ..BuildOptions::default()
    };
    PackBuilder::new(entries, out)
        .with_options(options)
        .build(&mut RandomIds)
}

/// Plain copy of an entry icon
fn copy_icon(src: &Path, dst: &Path) -> Result<()> {
    if !src.is_file() {
        return Err(PackError::MissingAsset(src.to_path_buf()));
    }
    fs::copy(src, dst)?;
    Ok(())
}

/// Copy an armor entry's overlays into `dest` as RGBA PNGs
///
/// `file_stem` names each copy from its position in `overlay_paths` (layer 1
/// first) and its relative stem.
fn copy_overlays(
    entry: &PackEntry,
    dest: &Path,
    step: BuildStep,
    issues: &mut IssueLog,
    file_stem: impl Fn(usize, &str) -> String,
) {
    let textures_root = match find_textures_root(&entry.icon) {
        Ok(dir) => dir,
        Err(e) => {
            issues.record(step, entry, e);
            return;
        }
    };

    for (index, rel) in entry.overlay_paths.iter().enumerate() {
        let src = textures_root.join(format!("{}.png", rel));
        let dst = dest.join(format!("{}.png", file_stem(index, rel)));
        if let Err(e) = copy_normalized(&src, &dst) {
            issues.record(step, entry, e);
        }
    }
}

fn basename(rel: &str) -> &str {
    rel.rsplit('/').next().unwrap_or(rel)
}

/// Identifiers appearing more than once, in first-repeat order
pub fn duplicate_identifiers(entries: &[PackEntry]) -> Vec<&str> {
    let mut seen = HashSet::new();
    let mut dupes = Vec::new();
    for entry in entries {
        let id = entry.identifier.as_str();
        if !seen.insert(id) && !dupes.contains(&id) {
            dupes.push(id);
        }
    }
    dupes
}
