//! Import command handler
//!
//! Lists what an Oraxen plugin directory would contribute to a build.

use anyhow::{Context, Result};
use std::path::Path;

pub fn handle(source: &Path) -> Result<()> {
    let report = geyserpack::import(source)
        .with_context(|| format!("Failed to import {}", source.display()))?;

    for (index, entry) in report.entries.iter().enumerate() {
        println!("{:>4}  {}", index, entry.label());
    }

    if !report.skipped.is_empty() {
        println!();
        println!("Skipped:");
        for issue in &report.skipped {
            match &issue.identifier {
                Some(id) => println!("  {} ({}): {}", id, issue.file.display(), issue.error),
                None => println!("  {}: {}", issue.file.display(), issue.error),
            }
        }
    }

    println!();
    println!(
        "{} entries imported, {} skipped",
        report.added(),
        report.skipped_count()
    );

    Ok(())
}
