//! Convertible item records

use crate::error::{PackError, Result};
use crate::extras::Extras;
use crate::kind::{ArmorSlot, ItemKind};
use crate::textures::{find_textures_root, infer_armor_layers, relative_stem, strip_layer_suffix};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// One item to convert
///
/// Built either from an [`EntryDraft`] or by the Oraxen importer. The builder
/// only ever reads these.
#[derive(Debug, Clone, PartialEq)]
pub struct PackEntry {
    /// Lowercase id; filename stem in every output tree
    pub identifier: String,
    pub display_name: String,
    /// Java base material, e.g. `DIAMOND_SWORD`
    pub java_material: String,
    /// Custom model data distinguishing variants of one base material
    pub cmd: u32,
    pub kind: ItemKind,
    pub icon: PathBuf,
    pub extras: Extras,
    /// First overlay stem with any `_layer_N` removed
    pub tex_base: String,
    /// Overlay stems relative to the `textures` root, without extension
    pub overlay_paths: Vec<String>,
}

impl PackEntry {
    /// Validate and normalise user-supplied fields
    pub fn from_draft(draft: EntryDraft) -> Result<Self> {
        let identifier = draft.identifier.trim().to_lowercase();
        if identifier.is_empty() {
            return Err(PackError::MissingField("identifier"));
        }

        if !draft.icon.is_file() {
            return Err(PackError::MissingAsset(draft.icon));
        }

        let java_material = draft.material.trim().to_uppercase();
        if java_material.is_empty() {
            return Err(PackError::MissingField("material"));
        }

        let display_name = draft
            .display_name
            .as_deref()
            .map(str::trim)
            .filter(|name| !name.is_empty())
            .map(str::to_string)
            .unwrap_or_else(|| title_case(&identifier));

        let kind = match draft.kind {
            DraftKind::Item => ItemKind::Item,
            DraftKind::Block => ItemKind::Block,
            DraftKind::Armor => {
                let slot = draft
                    .armor_type
                    .or_else(|| ArmorSlot::from_material(&java_material))
                    .ok_or(PackError::MissingField("armor_type"))?;
                ItemKind::Armor(slot)
            }
        };

        let (tex_base, overlay_paths) = resolve_overlays(&draft.icon, kind)?;

        Ok(PackEntry {
            identifier,
            display_name,
            java_material,
            cmd: draft.cmd,
            kind,
            icon: draft.icon,
            extras: draft.extras,
            tex_base,
            overlay_paths,
        })
    }

    pub fn armor_type(&self) -> Option<ArmorSlot> {
        self.kind.armor_slot()
    }

    /// Single-line summary, e.g. `armor:ruby_helmet (DIAMOND_HELMET)`
    pub fn label(&self) -> String {
        format!("{}:{} ({})", self.kind, self.identifier, self.java_material)
    }
}

/// Overlay stems for an icon: both armor layers, or the icon itself
fn resolve_overlays(icon: &Path, kind: ItemKind) -> Result<(String, Vec<String>)> {
    let root = find_textures_root(icon)
        .ok()
        .or_else(|| icon.parent().map(Path::to_path_buf))
        .unwrap_or_default();

    if kind.is_armor() {
        let overlays = infer_armor_layers(icon)?.relative_stems(&root);
        let tex_base = strip_layer_suffix(&overlays[0]).to_string();
        Ok((tex_base, overlays))
    } else {
        let stem = relative_stem(icon, &root);
        Ok((stem.clone(), vec![stem]))
    }
}

/// `ruby_sword` -> `Ruby Sword`
pub fn title_case(identifier: &str) -> String {
    let mut out = String::with_capacity(identifier.len());
    let mut boundary = true;

    for c in identifier.replace('_', " ").chars() {
        if c.is_alphabetic() {
            if boundary {
                out.extend(c.to_uppercase());
            } else {
                out.extend(c.to_lowercase());
            }
            boundary = false;
        } else {
            out.push(c);
            boundary = true;
        }
    }

    out
}

/// Entry kind as written by a user, before the armor slot is resolved
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DraftKind {
    #[default]
    Item,
    Block,
    Armor,
}

fn default_material() -> String {
    "DIAMOND_SWORD".to_string()
}

fn default_cmd() -> u32 {
    1
}

/// Raw fields for a manually defined entry
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EntryDraft {
    #[serde(default)]
    pub identifier: String,
    #[serde(default)]
    pub display_name: Option<String>,
    #[serde(default = "default_material")]
    pub material: String,
    #[serde(default = "default_cmd")]
    pub cmd: u32,
    #[serde(default)]
    pub kind: DraftKind,
    /// Only read for armor; inferred from the material when absent
    #[serde(default)]
    pub armor_type: Option<ArmorSlot>,
    pub icon: PathBuf,
    #[serde(default)]
    pub extras: Extras,
}

impl EntryDraft {
    pub fn new(identifier: impl Into<String>, icon: impl Into<PathBuf>) -> Self {
        EntryDraft {
            identifier: identifier.into(),
            display_name: None,
            material: default_material(),
            cmd: default_cmd(),
            kind: DraftKind::Item,
            armor_type: None,
            icon: icon.into(),
            extras: Extras::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::textures::test_support::write_png;

    #[test]
    fn test_title_case() {
        assert_eq!(title_case("ruby_sword"), "Ruby Sword");
        assert_eq!(title_case("RUBY_sword"), "Ruby Sword");
        assert_eq!(title_case("gem_2nd"), "Gem 2Nd");
    }

    #[test]
    fn test_from_draft_normalises_fields() {
        let temp_dir = tempfile::tempdir().unwrap();
        let icon = temp_dir.path().join("pack/textures/items/ruby_sword.png");
        write_png(&icon);

        let mut draft = EntryDraft::new("  Ruby_Sword ", &icon);
        draft.material = "diamond_sword".to_string();
        let entry = PackEntry::from_draft(draft).unwrap();

        assert_eq!(entry.identifier, "ruby_sword");
        assert_eq!(entry.display_name, "Ruby Sword");
        assert_eq!(entry.java_material, "DIAMOND_SWORD");
        assert_eq!(entry.kind, ItemKind::Item);
        assert_eq!(entry.overlay_paths, vec!["items/ruby_sword"]);
        assert_eq!(entry.tex_base, "items/ruby_sword");
        assert_eq!(entry.label(), "item:ruby_sword (DIAMOND_SWORD)");
    }

    #[test]
    fn test_from_draft_without_textures_root() {
        let temp_dir = tempfile::tempdir().unwrap();
        let icon = temp_dir.path().join("ruby_block.png");
        write_png(&icon);

        let mut draft = EntryDraft::new("ruby_block", &icon);
        draft.kind = DraftKind::Block;
        draft.display_name = Some("Block of Ruby".to_string());
        let entry = PackEntry::from_draft(draft).unwrap();

        assert_eq!(entry.kind, ItemKind::Block);
        assert_eq!(entry.display_name, "Block of Ruby");
        assert_eq!(entry.overlay_paths, vec!["ruby_block"]);
    }

    #[test]
    fn test_from_draft_armor_layers() {
        let temp_dir = tempfile::tempdir().unwrap();
        let dir = temp_dir.path().join("textures/armor");
        write_png(&dir.join("ruby_chestplate.png"));
        write_png(&dir.join("ruby_layer_1.png"));
        write_png(&dir.join("ruby_layer_2.png"));

        let mut draft = EntryDraft::new("ruby_chestplate", dir.join("ruby_chestplate.png"));
        draft.kind = DraftKind::Armor;
        draft.material = "DIAMOND_CHESTPLATE".to_string();
        let entry = PackEntry::from_draft(draft).unwrap();

        assert_eq!(entry.armor_type(), Some(ArmorSlot::Chestplate));
        assert_eq!(
            entry.overlay_paths,
            vec!["armor/ruby_layer_1", "armor/ruby_layer_2"]
        );
        assert_eq!(entry.tex_base, "armor/ruby");
    }

    #[test]
    fn test_from_draft_rejects_missing_fields() {
        let temp_dir = tempfile::tempdir().unwrap();
        let icon = temp_dir.path().join("icon.png");

        let err = PackEntry::from_draft(EntryDraft::new("ruby", &icon)).unwrap_err();
        assert!(matches!(err, PackError::MissingAsset(_)));

        write_png(&icon);
        let err = PackEntry::from_draft(EntryDraft::new("   ", &icon)).unwrap_err();
        assert!(matches!(err, PackError::MissingField("identifier")));

        let mut draft = EntryDraft::new("ruby", &icon);
        draft.kind = DraftKind::Armor;
        let err = PackEntry::from_draft(draft).unwrap_err();
        assert!(matches!(err, PackError::MissingField("armor_type")));
    }

    #[test]
    fn test_draft_from_yaml_defaults() {
        let draft: EntryDraft =
            serde_yaml::from_str("identifier: ruby\nicon: ruby.png\nkind: armor\narmor_type: boots\n")
                .unwrap();
        assert_eq!(draft.material, "DIAMOND_SWORD");
        assert_eq!(draft.cmd, 1);
        assert_eq!(draft.kind, DraftKind::Armor);
        assert_eq!(draft.armor_type, Some(ArmorSlot::Boots));
        assert!(draft.extras.is_empty());
    }
}
