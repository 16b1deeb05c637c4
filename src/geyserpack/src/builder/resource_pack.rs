//! Bedrock resource pack: manifest, item atlas, icons and armor attachables

use super::{basename, copy_icon, copy_overlays, BuildOptions, BuildStep, IssueLog};
use crate::entry::PackEntry;
use crate::error::Result;
use crate::ids::IdSource;
use crate::kind::{ArmorSlot, ArmorSlotInfo};
use indexmap::IndexMap;
use serde::Serialize;
use std::fs;
use std::path::Path;

const PACK_VERSION: [u32; 3] = [1, 0, 0];
const MIN_ENGINE_VERSION: [u32; 3] = [1, 20, 0];
const ATTACHABLE_FORMAT_VERSION: &str = "1.12.0";
const ENCHANTED_GLINT: &str = "textures/misc/enchanted_actor_glint";
const ARMOR_RENDER_CONTROLLER: &str = "controller.render.armor";
const ARMOR_TEXTURE_DIR: &str = "textures/models/armor";

#[derive(Debug, Serialize)]
struct Manifest<'a> {
    format_version: u32,
    header: ManifestHeader<'a>,
    modules: Vec<ManifestModule>,
}

#[derive(Debug, Serialize)]
struct ManifestHeader<'a> {
    description: &'a str,
    name: &'a str,
    uuid: String,
    version: [u32; 3],
    min_engine_version: [u32; 3],
}

#[derive(Debug, Serialize)]
struct ManifestModule {
    #[serde(rename = "type")]
    kind: &'static str,
    uuid: String,
    version: [u32; 3],
}

#[derive(Debug, Serialize)]
struct ItemAtlas {
    resource_pack_name: &'static str,
    texture_name: &'static str,
    texture_data: IndexMap<String, AtlasTexture>,
}

#[derive(Debug, Serialize)]
struct AtlasTexture {
    textures: String,
}

#[derive(Debug, Serialize)]
struct Attachable {
    format_version: &'static str,
    #[serde(rename = "minecraft:attachable")]
    attachable: AttachableBody,
}

#[derive(Debug, Serialize)]
struct AttachableBody {
    description: AttachableDescription,
}

#[derive(Debug, Serialize)]
struct AttachableDescription {
    identifier: String,
    materials: Variants,
    textures: Variants,
    geometry: Geometry,
    scripts: Scripts,
    render_controllers: Vec<&'static str>,
}

#[derive(Debug, Serialize)]
struct Variants {
    default: String,
    enchanted: String,
}

#[derive(Debug, Serialize)]
struct Geometry {
    default: &'static str,
}

#[derive(Debug, Serialize)]
struct Scripts {
    parent_setup: String,
}

pub(super) fn write(
    root: &Path,
    entries: &[PackEntry],
    options: &BuildOptions,
    ids: &mut dyn IdSource,
    issues: &mut IssueLog,
) -> Result<()> {
    let items_dir = root.join("textures/items");
    fs::create_dir_all(&items_dir)?;

    let manifest = Manifest {
        format_version: 2,
        header: ManifestHeader {
            description: &options.pack_description,
            name: &options.pack_name,
            uuid: ids.next_uuid().to_string(),
            version: PACK_VERSION,
            min_engine_version: MIN_ENGINE_VERSION,
        },
        modules: vec![ManifestModule {
            kind: "resources",
            uuid: ids.next_uuid().to_string(),
            version: PACK_VERSION,
        }],
    };
    fs::write(root.join("manifest.json"), serde_json::to_string_pretty(&manifest)?)?;

    let mut atlas = ItemAtlas {
        resource_pack_name: "auto_generated_pack",
        texture_name: "atlas.items",
        texture_data: IndexMap::new(),
    };

    for entry in entries {
        atlas.texture_data.insert(
            entry.identifier.clone(),
            AtlasTexture {
                textures: format!("textures/items/{}", entry.identifier),
            },
        );

        let icon_dst = items_dir.join(format!("{}.png", entry.identifier));
        if let Err(e) = copy_icon(&entry.icon, &icon_dst) {
            issues.record(BuildStep::ResourcePack, entry, e);
        }

        if let Some(slot) = entry.armor_type() {
            copy_overlays(
                entry,
                &root.join(ARMOR_TEXTURE_DIR),
                BuildStep::ResourcePack,
                issues,
                |_, rel| basename(rel).to_string(),
            );
            if let Err(e) = write_attachable(root, entry, slot) {
                issues.record(BuildStep::ResourcePack, entry, e);
            }
        }
    }

    fs::write(
        root.join("textures/item_texture.json"),
        serde_json::to_string_pretty(&atlas)?,
    )?;

    Ok(())
}

fn write_attachable(root: &Path, entry: &PackEntry, slot: ArmorSlot) -> Result<()> {
    let info = slot.info();
    let data = attachable(entry, info);

    let dir = root.join("attachables").join(&entry.identifier);
    fs::create_dir_all(&dir)?;
    fs::write(
        dir.join(format!("{}.json", info.file_stem)),
        serde_json::to_string_pretty(&data)?,
    )?;
    Ok(())
}

fn attachable(entry: &PackEntry, info: &ArmorSlotInfo) -> Attachable {
    Attachable {
        format_version: ATTACHABLE_FORMAT_VERSION,
        attachable: AttachableBody {
            description: AttachableDescription {
                identifier: format!("geyser_custom:{}", entry.identifier),
                materials: Variants {
                    default: "armor".to_string(),
                    enchanted: "armor_enchanted".to_string(),
                },
                textures: Variants {
                    default: format!("{}/{}", ARMOR_TEXTURE_DIR, layer_texture(entry, info)),
                    enchanted: ENCHANTED_GLINT.to_string(),
                },
                geometry: Geometry {
                    default: info.geometry,
                },
                scripts: Scripts {
                    parent_setup: format!("{} = 0.0;", info.visibility_var),
                },
                render_controllers: vec![ARMOR_RENDER_CONTROLLER],
            },
        },
    }
}

/// File stem of the overlay a slot renders with
///
/// Prefers the overlay that actually ends in the slot's layer; otherwise the
/// name is rebuilt from `tex_base`.
fn layer_texture(entry: &PackEntry, info: &ArmorSlotInfo) -> String {
    let layer = info.layer.suffix();
    let stem = entry
        .overlay_paths
        .iter()
        .find(|p| p.ends_with(layer))
        .cloned()
        .unwrap_or_else(|| format!("{}_{}", entry.tex_base, layer));
    basename(&stem).to_string()
}

#[cfg(test)]
mod tests {
    use super::super::test_support::{armor, item};
    use super::*;
    use crate::error::PackError;
    use crate::ids::SequentialIds;
    use serde_json::Value;

    fn read_json(path: &Path) -> Value {
        serde_json::from_str(&fs::read_to_string(path).unwrap()).unwrap()
    }

    fn build_into(root: &Path, entries: &[PackEntry]) -> IssueLog {
        let mut issues = IssueLog::default();
        write(
            root,
            entries,
            &BuildOptions::default(),
            &mut SequentialIds::new(10),
            &mut issues,
        )
        .unwrap();
        issues
    }

    #[test]
    fn test_manifest_fields() {
        let temp_dir = tempfile::tempdir().unwrap();
        let root = temp_dir.path().join("rp");
        build_into(&root, &[]);

        let manifest = read_json(&root.join("manifest.json"));
        assert_eq!(manifest["format_version"], 2);
        assert_eq!(manifest["header"]["name"], "Auto Pack");
        assert_eq!(
            manifest["header"]["uuid"],
            "00000000-0000-0000-0000-00000000000a"
        );
        assert_eq!(manifest["header"]["version"], serde_json::json!([1, 0, 0]));
        assert_eq!(
            manifest["header"]["min_engine_version"],
            serde_json::json!([1, 20, 0])
        );
        assert_eq!(manifest["modules"][0]["type"], "resources");
        assert_eq!(
            manifest["modules"][0]["uuid"],
            "00000000-0000-0000-0000-00000000000b"
        );
    }

    #[test]
    fn test_manifest_is_reproducible_with_fixed_ids() {
        let temp_dir = tempfile::tempdir().unwrap();
        build_into(&temp_dir.path().join("a"), &[]);
        build_into(&temp_dir.path().join("b"), &[]);

        assert_eq!(
            fs::read_to_string(temp_dir.path().join("a/manifest.json")).unwrap(),
            fs::read_to_string(temp_dir.path().join("b/manifest.json")).unwrap()
        );
    }

    #[test]
    fn test_atlas_lists_every_entry_in_order() {
        let temp_dir = tempfile::tempdir().unwrap();
        let entries = vec![
            item(temp_dir.path(), "zircon", "STICK", 1),
            item(temp_dir.path(), "amber", "STICK", 2),
        ];
        let root = temp_dir.path().join("rp");
        build_into(&root, &entries);

        let raw = fs::read_to_string(root.join("textures/item_texture.json")).unwrap();
        assert!(raw.find("zircon").unwrap() < raw.find("amber").unwrap());

        let atlas = read_json(&root.join("textures/item_texture.json"));
        assert_eq!(atlas["texture_name"], "atlas.items");
        assert_eq!(
            atlas["texture_data"]["amber"]["textures"],
            "textures/items/amber"
        );
    }

    #[test]
    fn test_helmet_attachable() {
        let temp_dir = tempfile::tempdir().unwrap();
        let entries = vec![armor(
            temp_dir.path(),
            "ruby_helmet",
            ArmorSlot::Helmet,
            "DIAMOND_HELMET",
            5,
        )];
        let root = temp_dir.path().join("rp");
        let issues = build_into(&root, &entries);
        assert!(issues.into_inner().is_empty());

        let data = read_json(&root.join("attachables/ruby_helmet/helmet.json"));
        let desc = &data["minecraft:attachable"]["description"];
        assert_eq!(data["format_version"], "1.12.0");
        assert_eq!(desc["identifier"], "geyser_custom:ruby_helmet");
        assert_eq!(desc["geometry"]["default"], "geometry.player.armor.helmet");
        assert_eq!(
            desc["textures"]["default"],
            "textures/models/armor/ruby_layer_1"
        );
        assert_eq!(
            desc["textures"]["enchanted"],
            "textures/misc/enchanted_actor_glint"
        );
        assert_eq!(desc["scripts"]["parent_setup"], "v.helmet_layer_visible = 0.0;");
        assert_eq!(desc["render_controllers"][0], "controller.render.armor");
    }

    #[test]
    fn test_leggings_use_layer_2() {
        let temp_dir = tempfile::tempdir().unwrap();
        let entries = vec![armor(
            temp_dir.path(),
            "ruby_leggings",
            ArmorSlot::Leggings,
            "DIAMOND_LEGGINGS",
            6,
        )];
        let root = temp_dir.path().join("rp");
        build_into(&root, &entries);

        let data = read_json(&root.join("attachables/ruby_leggings/leggings.json"));
        let desc = &data["minecraft:attachable"]["description"];
        assert_eq!(desc["geometry"]["default"], "geometry.player.armor.leggings");
        assert_eq!(
            desc["textures"]["default"],
            "textures/models/armor/ruby_layer_2"
        );
    }

    #[test]
    fn test_layer_texture_falls_back_to_tex_base() {
        let temp_dir = tempfile::tempdir().unwrap();
        let mut entry = armor(
            temp_dir.path(),
            "ruby_boots",
            ArmorSlot::Boots,
            "DIAMOND_BOOTS",
            7,
        );
        entry.overlay_paths.clear();
        assert_eq!(layer_texture(&entry, ArmorSlot::Boots.info()), "ruby_layer_1");
    }

    #[test]
    fn test_armor_without_textures_root() {
        let temp_dir = tempfile::tempdir().unwrap();
        let mut entry = armor(
            temp_dir.path(),
            "ruby_helmet",
            ArmorSlot::Helmet,
            "DIAMOND_HELMET",
            5,
        );
        let loose = temp_dir.path().join("loose.png");
        fs::copy(&entry.icon, &loose).unwrap();
        entry.icon = loose;

        let root = temp_dir.path().join("rp");
        let issues = build_into(&root, &[entry]).into_inner();

        assert_eq!(issues.len(), 1);
        assert!(matches!(
            issues[0].error,
            PackError::TexturesRootNotFound(_)
        ));
        assert!(root.join("textures/items/ruby_helmet.png").is_file());
        assert!(root.join("attachables/ruby_helmet/helmet.json").is_file());
    }
}
