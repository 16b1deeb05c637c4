//! # geyserpack
//!
//! Convert Oraxen custom items into a Bedrock resource pack plus the Geyser
//! mapping table that ties the two together.
//!
//! This library provides functionality to:
//! - Describe items, blocks and armor pieces as [`PackEntry`] values
//! - Import entries from an existing Oraxen plugin directory
//! - Generate the Bedrock resource pack (manifest, atlas, attachables)
//! - Generate Oraxen item definitions and the Geyser `auto_mapping.json`
//!
//! ## Example
//!
//! ```no_run
//! use std::path::Path;
//! use geyserpack::{BuildOptions, EntryDraft, EntryList, RandomIds};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let mut entries = EntryList::new();
//!
//! // Pull in everything an existing Oraxen install defines
//! let summary = entries.import(Path::new("plugins/Oraxen"))?;
//! println!("{} imported, {} skipped", summary.added, summary.skipped);
//!
//! // Add one more item by hand
//! let mut draft = EntryDraft::new("ruby_sword", "art/textures/ruby_sword.png");
//! draft.cmd = 1001;
//! entries.add(draft)?;
//!
//! let report = entries.build(Path::new("out"), BuildOptions::default(), &mut RandomIds)?;
//! println!("Resource pack: {}", report.resource_pack.display());
//! # Ok(())
//! # }
//! ```

pub mod builder;
pub mod entries;
pub mod entry;
pub mod error;
pub mod extras;
pub mod ids;
pub mod importer;
pub mod kind;
pub mod textures;

// Re-export commonly used items
#[doc(inline)]
pub use builder::{
    build, BuildIssue, BuildOptions, BuildReport, BuildStep, MappingDocument, MappingRecord,
    PackBuilder,
};
#[doc(inline)]
pub use entries::{EntryList, ImportSummary};
#[doc(inline)]
pub use entry::{DraftKind, EntryDraft, PackEntry};
#[doc(inline)]
pub use error::{ErrorCategory, PackError};
#[doc(inline)]
pub use extras::Extras;
#[doc(inline)]
pub use ids::{IdSource, RandomIds, SequentialIds};
#[doc(inline)]
pub use importer::{import, ImportIssue, ImportReport};
#[doc(inline)]
pub use kind::{ArmorLayer, ArmorSlot, ArmorSlotInfo, ItemKind, ARMOR_SLOTS};
