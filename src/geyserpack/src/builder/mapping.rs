//! Geyser custom item mapping table

use crate::entry::PackEntry;
use crate::error::Result;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

pub const MAPPING_FORMAT_VERSION: u32 = 1;
const ICON_TEXTURE_SIZE: u32 = 16;

/// `auto_mapping.json`, keyed by `minecraft:<base material>`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MappingDocument {
    pub format_version: u32,
    pub items: IndexMap<String, Vec<MappingRecord>>,
}

/// One custom variant of a base material
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MappingRecord {
    pub name: String,
    pub custom_model_data: u32,
    pub display_name: String,
    pub icon: String,
    pub allow_offhand: bool,
    pub texture_size: u32,
}

/// Group entries under their base material, keeping insertion order
pub fn mapping_document(entries: &[PackEntry]) -> MappingDocument {
    let mut items: IndexMap<String, Vec<MappingRecord>> = IndexMap::new();

    for entry in entries {
        let base = format!("minecraft:{}", entry.java_material.to_lowercase());
        items.entry(base).or_default().push(MappingRecord {
            name: entry.identifier.clone(),
            custom_model_data: entry.cmd,
            display_name: entry.display_name.clone(),
            icon: entry.identifier.clone(),
            allow_offhand: false,
            texture_size: ICON_TEXTURE_SIZE,
        });
    }

    MappingDocument {
        format_version: MAPPING_FORMAT_VERSION,
        items,
    }
}

pub(super) fn write(path: &Path, entries: &[PackEntry]) -> Result<()> {
    let doc = mapping_document(entries);
    fs::write(path, serde_json::to_string_pretty(&doc)?)?;
    Ok(())
}
