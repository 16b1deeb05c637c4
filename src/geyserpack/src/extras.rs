//! Optional gameplay modifiers and their Oraxen YAML form.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_yaml::{Mapping, Value};

/// Unbreakable flag, attribute bonuses, enchantments and lore for one item
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Extras {
    pub unbreakable: bool,
    pub attributes: IndexMap<String, f64>,
    pub enchants: IndexMap<String, i64>,
    pub lore: Vec<String>,
}

impl Extras {
    /// True when rendering would produce no lines
    pub fn is_empty(&self) -> bool {
        !self.unbreakable
            && self.attributes.is_empty()
            && self.enchants.is_empty()
            && self.lore.is_empty()
    }

    /// Render as lines nested one level under an item section
    ///
    /// Order is fixed: unbreakable, attributes, enchants, lore. Empty
    /// collections emit nothing, not even their header.
    pub fn to_yaml_lines(&self) -> Vec<String> {
        let mut out = Vec::new();

        if self.unbreakable {
            out.push("  unbreakable: true".to_string());
        }

        if !self.attributes.is_empty() {
            out.push("  attributes:".to_string());
            for (name, value) in &self.attributes {
                // Debug keeps the trailing `.0` so the value reads back as a float
                out.push(format!("    {}: {:?}", name, value));
            }
        }

        if !self.enchants.is_empty() {
            out.push("  enchants:".to_string());
            for (name, level) in &self.enchants {
                out.push(format!("    {}: {}", name, level));
            }
        }

        if !self.lore.is_empty() {
            out.push("  lore:".to_string());
            for line in &self.lore {
                out.push(format!("    - {}", quoted(line)));
            }
        }

        out
    }

    /// Read extras back out of a parsed item section
    ///
    /// Values of the wrong shape are dropped individually; this never fails.
    pub fn from_yaml(section: &Mapping) -> Self {
        let mut extras = Extras {
            unbreakable: section
                .get("unbreakable")
                .and_then(Value::as_bool)
                .unwrap_or(false),
            ..Extras::default()
        };

        if let Some(attributes) = section.get("attributes").and_then(Value::as_mapping) {
            for (key, value) in attributes {
                match (key.as_str(), value.as_f64()) {
                    (Some(name), Some(v)) => {
                        extras.attributes.insert(name.to_string(), v);
                    }
                    _ => tracing::debug!("ignoring attribute {:?}: {:?}", key, value),
                }
            }
        }

        if let Some(enchants) = section.get("enchants").and_then(Value::as_mapping) {
            for (key, value) in enchants {
                match (key.as_str(), value.as_i64()) {
                    (Some(name), Some(level)) => {
                        extras.enchants.insert(name.to_string(), level);
                    }
                    _ => tracing::debug!("ignoring enchant {:?}: {:?}", key, value),
                }
            }
        }

        if let Some(lore) = section.get("lore").and_then(Value::as_sequence) {
            extras.lore = lore
                .iter()
                .filter_map(|line| match line {
                    Value::String(s) => Some(s.clone()),
                    other => {
                        tracing::debug!("ignoring lore line {:?}", other);
                        None
                    }
                })
                .collect();
        }

        extras
    }
}

/// Double-quoted YAML scalar with `\` and `"` escaped
pub(crate) fn quoted(text: &str) -> String {
    let mut out = String::with_capacity(text.len() + 2);
    out.push('"');
    for c in text.chars() {
        if matches!(c, '"' | '\\') {
            out.push('\\');
        }
        out.push(c);
    }
    out.push('"');
    out
}
