//! Texture file helpers: RGBA normalisation, `textures` root discovery and
//! armor layer inference.
//!
//! Oraxen keeps every texture below a `textures` directory and names the two
//! worn-armor overlays `<base>..._layer_1.png` / `<base>..._layer_2.png`, next
//! to the inventory icon. Bedrock wants those overlays copied as plain RGBA
//! PNGs; everything here works from those two conventions.

use crate::error::{PackError, Result};
use crate::kind::ArmorSlot;
use std::fs;
use std::path::{Path, PathBuf};

/// Name of the directory every Oraxen texture path is relative to
pub const TEXTURES_DIR: &str = "textures";

/// Copy a PNG, converting it to 8-bit RGBA
///
/// A missing source is reported as [`PackError::MissingAsset`] and nothing is
/// written.
pub fn copy_normalized(src: &Path, dst: &Path) -> Result<()> {
    if !src.is_file() {
        return Err(PackError::MissingAsset(src.to_path_buf()));
    }

    let img = image::open(src)?.into_rgba8();

    if let Some(parent) = dst.parent() {
        fs::create_dir_all(parent)?;
    }
    img.save_with_format(dst, image::ImageFormat::Png)?;

    Ok(())
}

/// Find the nearest ancestor directory named `textures`
pub fn find_textures_root(png: &Path) -> Result<PathBuf> {
    png.ancestors()
        .skip(1)
        .find(|dir| dir.file_name().is_some_and(|name| name == TEXTURES_DIR))
        .map(Path::to_path_buf)
        .ok_or_else(|| PackError::TexturesRootNotFound(png.to_path_buf()))
}

/// Extension-less, `/`-separated path of `path` relative to `root`
///
/// Falls back to the bare file stem when `path` is not under `root`.
pub fn relative_stem(path: &Path, root: &Path) -> String {
    let rel = path.strip_prefix(root).unwrap_or(path);
    let rel = match rel.file_stem() {
        Some(stem) => rel.with_file_name(stem),
        None => rel.to_path_buf(),
    };

    if rel.is_absolute() {
        return rel
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
    }

    rel.components()
        .map(|c| c.as_os_str().to_string_lossy())
        .collect::<Vec<_>>()
        .join("/")
}

/// Drop a trailing `_layer_<N>` from an overlay stem
pub fn strip_layer_suffix(stem: &str) -> &str {
    match stem.rsplit_once("_layer_") {
        Some((base, n)) if !n.is_empty() && n.chars().all(|c| c.is_ascii_digit()) => base,
        _ => stem,
    }
}

/// The two overlay files backing an armor piece
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArmorLayers {
    pub layer_1: PathBuf,
    pub layer_2: PathBuf,
}

impl ArmorLayers {
    /// Both layers as stems relative to `root`, layer 1 first
    pub fn relative_stems(&self, root: &Path) -> Vec<String> {
        vec![
            relative_stem(&self.layer_1, root),
            relative_stem(&self.layer_2, root),
        ]
    }
}

/// Locate the `layer_1`/`layer_2` overlays that sit next to an armor icon
///
/// `ruby_helmet.png` looks for `ruby*layer_1.png` and `ruby*layer_2.png` in
/// the same directory. When several files match, `ruby_layer_1.png` beats
/// `ruby_dark_layer_1.png`; otherwise the shortest name wins.
pub fn infer_armor_layers(icon: &Path) -> Result<ArmorLayers> {
    let dir = icon.parent().unwrap_or_else(|| Path::new("."));
    let stem = icon
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();
    let base = ArmorSlot::strip_stem_suffix(&stem);

    let names: Vec<String> = match fs::read_dir(dir) {
        Ok(entries) => entries
            .filter_map(|e| e.ok())
            .filter(|e| e.file_type().is_ok_and(|t| t.is_file()))
            .map(|e| e.file_name().to_string_lossy().into_owned())
            .filter(|name| name.starts_with(base))
            .collect(),
        Err(_) => Vec::new(),
    };

    // exact `<base>_layer_N.png` first, then the shortest match, then by name
    let find = |suffix: &str| {
        let exact = format!("{}_{}", base, suffix);
        let rank = |name: &str| (name != exact, name.len());
        names
            .iter()
            .filter(|name| name.len() >= base.len() + suffix.len() && name.ends_with(suffix))
            .min_by(|a, b| rank(a).cmp(&rank(b)).then_with(|| a.cmp(b)))
            .map(|name| dir.join(name))
    };

    match (find("layer_1.png"), find("layer_2.png")) {
        (Some(layer_1), Some(layer_2)) => Ok(ArmorLayers { layer_1, layer_2 }),
        _ => Err(PackError::MissingLayers {
            base: base.to_string(),
            dir: dir.to_path_buf(),
        }),
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    use image::{Rgba, RgbaImage};
    use std::path::Path;

    /// Write a small solid PNG, creating parent directories
    pub fn write_png(path: &Path) {
        std::fs::create_dir_all(path.parent().unwrap()).unwrap();
        RgbaImage::from_pixel(16, 16, Rgba([200, 30, 30, 255]))
            .save(path)
            .unwrap();
    }
}
