//! Item kinds and armor slot reference data

use crate::error::PackError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Armor piece slot
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ArmorSlot {
    Helmet,
    Chestplate,
    Leggings,
    Boots,
}

/// Which overlay texture a slot is drawn with
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArmorLayer {
    Layer1,
    Layer2,
}

impl ArmorLayer {
    pub fn suffix(self) -> &'static str {
        match self {
            ArmorLayer::Layer1 => "layer_1",
            ArmorLayer::Layer2 => "layer_2",
        }
    }
}

/// Bedrock attachable metadata for an armor slot
#[derive(Debug, Clone, PartialEq)]
pub struct ArmorSlotInfo {
    pub slot: ArmorSlot,
    pub name: &'static str,
    pub geometry: &'static str,
    /// Molang variable that hides the vanilla layer while the piece is worn
    pub visibility_var: &'static str,
    pub layer: ArmorLayer,
    /// Attachable filename stem
    pub file_stem: &'static str,
    /// Java material suffix that implies this slot
    pub material_suffix: &'static str,
}

/// All armor slots in equipment order
pub const ARMOR_SLOTS: &[ArmorSlotInfo] = &[
    ArmorSlotInfo {
        slot: ArmorSlot::Helmet,
        name: "helmet",
        geometry: "geometry.player.armor.helmet",
        visibility_var: "v.helmet_layer_visible",
        layer: ArmorLayer::Layer1,
        file_stem: "helmet",
        material_suffix: "_HELMET",
    },
    ArmorSlotInfo {
        slot: ArmorSlot::Chestplate,
        name: "chestplate",
        geometry: "geometry.player.armor.chestplate",
        visibility_var: "v.chest_layer_visible",
        layer: ArmorLayer::Layer1,
        file_stem: "chestplate",
        material_suffix: "_CHESTPLATE",
    },
    ArmorSlotInfo {
        slot: ArmorSlot::Leggings,
        name: "leggings",
        geometry: "geometry.player.armor.leggings",
        visibility_var: "v.leg_layer_visible",
        layer: ArmorLayer::Layer2,
        file_stem: "leggings",
        material_suffix: "_LEGGINGS",
    },
    ArmorSlotInfo {
        slot: ArmorSlot::Boots,
        name: "boots",
        geometry: "geometry.player.armor.boots",
        visibility_var: "v.boot_layer_visible",
        layer: ArmorLayer::Layer1,
        file_stem: "boots",
        material_suffix: "_BOOTS",
    },
];

impl ArmorSlot {
    pub fn info(self) -> &'static ArmorSlotInfo {
        match self {
            ArmorSlot::Helmet => &ARMOR_SLOTS[0],
            ArmorSlot::Chestplate => &ARMOR_SLOTS[1],
            ArmorSlot::Leggings => &ARMOR_SLOTS[2],
            ArmorSlot::Boots => &ARMOR_SLOTS[3],
        }
    }

    pub fn name(self) -> &'static str {
        self.info().name
    }

    /// Slot implied by a Java material name such as `DIAMOND_HELMET`
    pub fn from_material(material: &str) -> Option<Self> {
        let upper = material.to_ascii_uppercase();
        ARMOR_SLOTS
            .iter()
            .find(|info| upper.ends_with(info.material_suffix))
            .map(|info| info.slot)
    }

    /// Strip a trailing `_helmet`/`_chestplate`/... from a texture stem
    pub fn strip_stem_suffix(stem: &str) -> &str {
        ARMOR_SLOTS
            .iter()
            .find_map(|info| {
                stem.strip_suffix(info.name)
                    .and_then(|rest| rest.strip_suffix('_'))
            })
            .unwrap_or(stem)
    }
}

impl FromStr for ArmorSlot {
    type Err = PackError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.trim().to_ascii_lowercase();
        ARMOR_SLOTS
            .iter()
            .find(|info| info.name == lower)
            .map(|info| info.slot)
            .ok_or_else(|| PackError::UnknownArmorSlot(s.to_string()))
    }
}

impl fmt::Display for ArmorSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// What an entry converts into
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ItemKind {
    Item,
    Block,
    Armor(ArmorSlot),
}

impl ItemKind {
    pub fn name(self) -> &'static str {
        match self {
            ItemKind::Item => "item",
            ItemKind::Block => "block",
            ItemKind::Armor(_) => "armor",
        }
    }

    pub fn armor_slot(self) -> Option<ArmorSlot> {
        match self {
            ItemKind::Armor(slot) => Some(slot),
            ItemKind::Item | ItemKind::Block => None,
        }
    }

    pub fn is_armor(self) -> bool {
        matches!(self, ItemKind::Armor(_))
    }

    /// Oraxen parent model used when generating the Java model
    pub fn parent_model(self) -> &'static str {
        match self {
            ItemKind::Item | ItemKind::Armor(_) => "item/handheld",
            ItemKind::Block => "item/generated",
        }
    }
}

impl fmt::Display for ItemKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
