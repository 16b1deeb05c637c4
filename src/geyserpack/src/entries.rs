//! The working list of entries a front-end accumulates before a build.

use crate::builder::{BuildOptions, BuildReport, PackBuilder};
use crate::entry::{EntryDraft, PackEntry};
use crate::error::Result;
use crate::ids::IdSource;
use crate::importer;
use std::path::Path;

/// Counts from merging an Oraxen import into the list
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ImportSummary {
    pub added: usize,
    pub skipped: usize,
}

#[derive(Debug, Clone, Default)]
pub struct EntryList {
    entries: Vec<PackEntry>,
}

impl EntryList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Validate a draft and append it
    ///
    /// On error the list is left exactly as it was.
    pub fn add(&mut self, draft: EntryDraft) -> Result<&PackEntry> {
        let entry = PackEntry::from_draft(draft)?;
        let index = self.entries.len();
        self.entries.push(entry);
        Ok(&self.entries[index])
    }

    pub fn push(&mut self, entry: PackEntry) {
        self.entries.push(entry);
    }

    pub fn remove(&mut self, index: usize) -> Option<PackEntry> {
        (index < self.entries.len()).then(|| self.entries.remove(index))
    }

    pub fn entries(&self) -> &[PackEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Import an Oraxen plugin directory and append everything that parsed
    pub fn import(&mut self, source_root: &Path) -> Result<ImportSummary> {
        let report = importer::import(source_root)?;
        let summary = ImportSummary {
            added: report.added(),
            skipped: report.skipped_count(),
        };
        self.entries.extend(report.entries);
        Ok(summary)
    }

    pub fn build(
        &self,
        output_root: &Path,
        options: BuildOptions,
        ids: &mut dyn IdSource,
    ) -> Result<BuildReport> {
        PackBuilder::new(&self.entries, output_root)
            .with_options(options)
            .build(ids)
    }
}
