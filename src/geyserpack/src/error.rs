//! Error types shared by the builder, importer and entry list.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum PackError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Image error: {0}")]
    Image(#[from] image::ImageError),

    #[error("Missing required field: {0}")]
    MissingField(&'static str),

    #[error("Missing asset: {}", .0.display())]
    MissingAsset(PathBuf),

    #[error("Armor layers not found for '{base}' in {}", .dir.display())]
    MissingLayers { base: String, dir: PathBuf },

    #[error("Malformed definition: {0}")]
    Malformed(String),

    #[error("Unknown armor slot: {0}")]
    UnknownArmorSlot(String),

    #[error("No 'textures' directory above {}", .0.display())]
    TexturesRootNotFound(PathBuf),

    #[error("Items directory not found: {}", .0.display())]
    ItemsDirNotFound(PathBuf),
}

/// Coarse failure classes used when summarising skipped work
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// A manually supplied entry is missing something it cannot do without
    FatalInput,
    /// A texture or icon file is absent
    MissingAsset,
    /// A definition file or section could not be understood
    MalformedDefinition,
    /// The on-disk layout lacks an anchor directory
    StructuralError,
    /// Underlying filesystem or encoder failure
    Io,
}

impl PackError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            PackError::MissingField(_) => ErrorCategory::FatalInput,
            PackError::MissingAsset(_) | PackError::MissingLayers { .. } => {
                ErrorCategory::MissingAsset
            }
            PackError::Malformed(_) | PackError::UnknownArmorSlot(_) | PackError::Yaml(_) => {
                ErrorCategory::MalformedDefinition
            }
            PackError::TexturesRootNotFound(_) | PackError::ItemsDirNotFound(_) => {
                ErrorCategory::StructuralError
            }
            PackError::Io(_) | PackError::Json(_) | PackError::Image(_) => ErrorCategory::Io,
        }
    }
}

pub type Result<T> = std::result::Result<T, PackError>;
