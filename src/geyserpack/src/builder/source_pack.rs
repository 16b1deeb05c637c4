//! Oraxen item definitions and their flat texture directory

use super::{copy_icon, copy_overlays, BuildStep, IssueLog};
use crate::entry::PackEntry;
use crate::error::Result;
use crate::extras::quoted;
use crate::kind::{ArmorLayer, ArmorSlot, ItemKind};
use std::fs;
use std::path::Path;

pub(super) fn write(root: &Path, entries: &[PackEntry], issues: &mut IssueLog) -> Result<()> {
    let textures_dir = root.join("pack/textures");
    let items_dir = root.join("items");
    fs::create_dir_all(&textures_dir)?;
    fs::create_dir_all(&items_dir)?;

    for entry in entries {
        let icon_dst = textures_dir.join(format!("{}.png", entry.identifier));
        if let Err(e) = copy_icon(&entry.icon, &icon_dst) {
            issues.record(BuildStep::SourcePack, entry, e);
        }

        // layers sit beside the icon under its base name so a re-import can find them
        if entry.kind.is_armor() {
            copy_overlays(
                entry,
                &textures_dir,
                BuildStep::SourcePack,
                issues,
                |index, rel| layer_file_stem(&entry.identifier, index, rel),
            );
        }

        let definition = items_dir.join(format!("{}.yml", entry.identifier));
        if let Err(e) = fs::write(&definition, render_definition(entry)) {
            issues.record(BuildStep::SourcePack, entry, e.into());
        }
    }

    Ok(())
}

/// `<id without slot suffix>_layer_N`, the name layer inference looks for
fn layer_file_stem(identifier: &str, index: usize, rel: &str) -> String {
    let layer = if rel.ends_with(ArmorLayer::Layer2.suffix()) {
        ArmorLayer::Layer2
    } else if rel.ends_with(ArmorLayer::Layer1.suffix()) || index == 0 {
        ArmorLayer::Layer1
    } else {
        ArmorLayer::Layer2
    };
    format!(
        "{}_{}",
        ArmorSlot::strip_stem_suffix(identifier),
        layer.suffix()
    )
}

/// Oraxen YAML for one entry
///
/// The texture list always points at `<id>.png` in the flat texture
/// directory this pack writes.
pub fn render_definition(entry: &PackEntry) -> String {
    let mut lines = vec![
        format!("{}:", entry.identifier),
        format!("  displayname: {}", quoted(&entry.display_name)),
        format!("  material: {}", entry.java_material),
    ];

    match entry.kind {
        ItemKind::Armor(slot) => {
            lines.push("  armor:".to_string());
            lines.push(format!("    type: {}", slot));
        }
        ItemKind::Block => {
            lines.push("  block:".to_string());
            lines.push("    hardness: 1.0".to_string());
        }
        ItemKind::Item => {}
    }

    lines.extend(entry.extras.to_yaml_lines());

    lines.extend([
        "  Pack:".to_string(),
        format!("    custom_model_data: {}", entry.cmd),
        "    generate_model: true".to_string(),
        format!("    parent_model: \"{}\"", entry.kind.parent_model()),
        "    textures:".to_string(),
        format!("      - {}.png", entry.identifier),
        String::new(),
    ]);

    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::super::test_support::{armor, item};
    use super::*;
    use crate::kind::ArmorSlot;

    #[test]
    fn test_render_plain_item() {
        let temp_dir = tempfile::tempdir().unwrap();
        let entry = item(temp_dir.path(), "ruby_sword", "DIAMOND_SWORD", 1001);

        assert_eq!(
            render_definition(&entry),
            "ruby_sword:\n\
             \x20 displayname: \"Ruby Sword\"\n\
             \x20 material: DIAMOND_SWORD\n\
             \x20 Pack:\n\
             \x20   custom_model_data: 1001\n\
             \x20   generate_model: true\n\
             \x20   parent_model: \"item/handheld\"\n\
             \x20   textures:\n\
             \x20     - ruby_sword.png\n"
        );
    }

    #[test]
    fn test_render_block_and_extras() {
        let temp_dir = tempfile::tempdir().unwrap();
        let mut entry = item(temp_dir.path(), "ruby_block", "STONE", 3);
        entry.kind = ItemKind::Block;
        entry.extras.unbreakable = true;
        entry.extras.lore.push("Shiny".to_string());

        let yaml = render_definition(&entry);
        assert!(yaml.contains("  block:\n    hardness: 1.0\n  unbreakable: true\n"));
        assert!(yaml.contains("  lore:\n    - \"Shiny\"\n  Pack:\n"));
        assert!(yaml.contains("parent_model: \"item/generated\""));
    }

    #[test]
    fn test_render_armor() {
        let temp_dir = tempfile::tempdir().unwrap();
        let entry = armor(
            temp_dir.path(),
            "ruby_boots",
            ArmorSlot::Boots,
            "DIAMOND_BOOTS",
            4,
        );

        let yaml = render_definition(&entry);
        assert!(yaml.contains("  material: DIAMOND_BOOTS\n  armor:\n    type: boots\n"));
        assert!(yaml.contains("parent_model: \"item/handheld\""));
    }

    #[test]
    fn test_write_copies_icons() {
        let temp_dir = tempfile::tempdir().unwrap();
        let entries = vec![item(temp_dir.path(), "ruby", "EMERALD", 1)];
        let root = temp_dir.path().join("source_pack");
        let mut issues = IssueLog::default();

        write(&root, &entries, &mut issues).unwrap();

        assert!(issues.into_inner().is_empty());
        assert!(root.join("pack/textures/ruby.png").is_file());
        let yaml = fs::read_to_string(root.join("items/ruby.yml")).unwrap();
        assert!(yaml.starts_with("ruby:\n"));
    }

    #[test]
    fn test_render_escapes_quotes() {
        let temp_dir = tempfile::tempdir().unwrap();
        let mut entry = item(temp_dir.path(), "ruby", "EMERALD", 1);
        entry.display_name = r#"The "Red" \ One"#.to_string();

        let yaml = render_definition(&entry);
        assert!(yaml.contains(r#"  displayname: "The \"Red\" \\ One""#));

        let parsed: serde_yaml::Value = serde_yaml::from_str(&yaml).unwrap();
        assert_eq!(parsed["ruby"]["displayname"].as_str(), Some(entry.display_name.as_str()));
    }

    #[test]
    fn test_write_names_layers_after_identifier() {
        let temp_dir = tempfile::tempdir().unwrap();
        let entries = vec![armor(
            temp_dir.path(),
            "crimson_cap",
            ArmorSlot::Helmet,
            "DIAMOND_HELMET",
            2,
        )];
        let root = temp_dir.path().join("source_pack");
        let mut issues = IssueLog::default();

        write(&root, &entries, &mut issues).unwrap();

        assert!(issues.into_inner().is_empty());
        assert!(root.join("pack/textures/crimson_cap_layer_1.png").is_file());
        assert!(root.join("pack/textures/crimson_cap_layer_2.png").is_file());
        assert!(!root.join("pack/textures/ruby_layer_1.png").exists());
    }

    #[test]
    fn test_layer_file_stem() {
        assert_eq!(layer_file_stem("ruby_helmet", 0, "armor/ruby_layer_1"), "ruby_layer_1");
        assert_eq!(layer_file_stem("ruby_leggings", 1, "armor/ruby_layer_2"), "ruby_layer_2");
        assert_eq!(layer_file_stem("crimson_cap", 1, "armor/crimson"), "crimson_cap_layer_2");
    }
}
