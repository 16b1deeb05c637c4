//! Reading an existing Oraxen plugin directory back into entries.
//!
//! Expects the plugin layout:
//!
//! ```text
//! <root>/items/*.yml
//! <root>/pack/textures/**.png
//! ```
//!
//! Every top-level key of a definition file is one item. Items that cannot be
//! understood are logged and counted, never fatal.

use crate::entry::PackEntry;
use crate::error::{PackError, Result};
use crate::extras::Extras;
use crate::kind::{ArmorSlot, ItemKind};
use crate::textures::{infer_armor_layers, relative_stem, strip_layer_suffix};
use serde_yaml::{Mapping, Value};
use std::fs;
use std::path::{Path, PathBuf};

/// Something the importer had to leave behind
#[derive(Debug)]
pub struct ImportIssue {
    pub file: PathBuf,
    /// `None` when the whole file was unusable
    pub identifier: Option<String>,
    pub error: PackError,
}

/// Result of scanning a plugin directory
#[derive(Debug, Default)]
pub struct ImportReport {
    pub entries: Vec<PackEntry>,
    pub skipped: Vec<ImportIssue>,
}

impl ImportReport {
    pub fn added(&self) -> usize {
        self.entries.len()
    }

    pub fn skipped_count(&self) -> usize {
        self.skipped.len()
    }

    fn skip(&mut self, file: &Path, identifier: Option<&str>, error: PackError) {
        match identifier {
            Some(id) => tracing::warn!("{} > {}: {}", file.display(), id, error),
            None => tracing::warn!("{}: {}", file.display(), error),
        }
        self.skipped.push(ImportIssue {
            file: file.to_path_buf(),
            identifier: identifier.map(str::to_string),
            error,
        });
    }
}

/// Import every item definition under `<source_root>/items`
pub fn import(source_root: &Path) -> Result<ImportReport> {
    let items_dir = source_root.join("items");
    if !items_dir.is_dir() {
        return Err(PackError::ItemsDirNotFound(items_dir));
    }
    let textures_dir = source_root.join("pack").join("textures");

    let mut report = ImportReport::default();

    for file in definition_files(&items_dir)? {
        let sections = match read_definitions(&file) {
            Ok(sections) => sections,
            Err(e) => {
                report.skip(&file, None, e);
                continue;
            }
        };

        for (key, section) in &sections {
            let Some(identifier) = key_string(key) else {
                report.skip(
                    &file,
                    None,
                    PackError::Malformed(format!("non-string item key {:?}", key)),
                );
                continue;
            };

            match parse_entry(&identifier, section, &textures_dir) {
                Ok(entry) => {
                    tracing::debug!("imported {}", entry.label());
                    report.entries.push(entry);
                }
                Err(e) => report.skip(&file, Some(identifier.as_str()), e),
            }
        }
    }

    tracing::info!(
        "Imported {} items, skipped {}",
        report.added(),
        report.skipped_count()
    );
    Ok(report)
}

/// `*.yml` / `*.yaml` files directly inside `dir`, sorted by name
fn definition_files(dir: &Path) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    for entry in fs::read_dir(dir)? {
        let path = entry?.path();
        let is_yaml = path
            .extension()
            .and_then(|e| e.to_str())
            .is_some_and(|e| e.eq_ignore_ascii_case("yml") || e.eq_ignore_ascii_case("yaml"));
        if is_yaml && path.is_file() {
            files.push(path);
        }
    }
    files.sort();
    Ok(files)
}

/// Top-level mapping of one definition file; empty files yield no items
fn read_definitions(file: &Path) -> Result<Mapping> {
    let text = fs::read_to_string(file)?;
    match serde_yaml::from_str::<Value>(&text)? {
        Value::Mapping(map) => Ok(map),
        Value::Null => Ok(Mapping::new()),
        _ => Err(PackError::Malformed("top level is not a mapping".to_string())),
    }
}

fn key_string(key: &Value) -> Option<String> {
    match key {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

fn parse_entry(identifier: &str, section: &Value, textures_dir: &Path) -> Result<PackEntry> {
    let section = section
        .as_mapping()
        .ok_or_else(|| PackError::Malformed("item section is not a mapping".to_string()))?;
    let pack = section
        .get("Pack")
        .and_then(Value::as_mapping)
        .ok_or_else(|| PackError::Malformed("missing Pack section".to_string()))?;
    let material = section
        .get("material")
        .and_then(Value::as_str)
        .ok_or_else(|| PackError::Malformed("missing material".to_string()))?;
    let cmd = parse_cmd(pack.get("custom_model_data"))?;

    let texture = first_texture(pack.get("textures"))?;
    let icon = textures_dir.join(texture).with_extension("png");
    if !icon.is_file() {
        return Err(PackError::MissingAsset(icon));
    }

    let is_armor = section.contains_key("armor") || ArmorSlot::from_material(material).is_some();

    let (kind, overlay_paths, tex_base) = if is_armor {
        let slot = armor_slot(section, material)?;
        let overlays = infer_armor_layers(&icon)?.relative_stems(textures_dir);
        let tex_base = strip_layer_suffix(&overlays[0]).to_string();
        (ItemKind::Armor(slot), overlays, tex_base)
    } else {
        let kind = if section.contains_key("block") {
            ItemKind::Block
        } else {
            ItemKind::Item
        };
        let stem = relative_stem(Path::new(texture), Path::new(""));
        (kind, vec![stem.clone()], stem)
    };

    let display_name = section
        .get("displayname")
        .and_then(Value::as_str)
        .unwrap_or(identifier)
        .to_string();

    Ok(PackEntry {
        identifier: identifier.to_string(),
        display_name,
        java_material: material.to_string(),
        cmd,
        kind,
        icon,
        extras: Extras::from_yaml(section),
        tex_base,
        overlay_paths,
    })
}

fn parse_cmd(value: Option<&Value>) -> Result<u32> {
    let parsed = match value {
        Some(Value::Number(n)) => n.as_u64().and_then(|n| u32::try_from(n).ok()),
        Some(Value::String(s)) => s.trim().parse().ok(),
        _ => None,
    };
    parsed.ok_or_else(|| {
        PackError::Malformed(format!("invalid Pack.custom_model_data: {:?}", value))
    })
}

/// First texture reference; a bare string counts as a one-element list
fn first_texture(value: Option<&Value>) -> Result<&str> {
    let texture = match value {
        Some(Value::Sequence(list)) => list.first().and_then(Value::as_str),
        Some(Value::String(s)) => Some(s.as_str()),
        _ => None,
    };
    texture.ok_or_else(|| PackError::Malformed("missing Pack.textures".to_string()))
}

/// Explicit `armor.type`, else the material's last `_` token
fn armor_slot(section: &Mapping, material: &str) -> Result<ArmorSlot> {
    let explicit = section
        .get("armor")
        .and_then(|armor| armor.get("type"))
        .and_then(Value::as_str);

    match explicit {
        Some(name) => name.parse(),
        None => material
            .rsplit('_')
            .next()
            .unwrap_or(material)
            .to_lowercase()
            .parse(),
    }
}
