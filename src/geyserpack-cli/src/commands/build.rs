//! Build command handler

use crate::cli::BuildArgs;
use crate::config::Config;
use anyhow::{bail, Context, Result};
use geyserpack::{BuildOptions, BuildReport, EntryDraft, EntryList, RandomIds};
use std::fs;
use std::path::{Path, PathBuf};

pub fn handle(args: BuildArgs) -> Result<()> {
    let config = Config::load()?;

    let mut list = collect(&args.import, &args.entries)?;
    exclude(&mut list, &args.exclude);

    if list.is_empty() {
        bail!("Nothing to build: no entries were imported or defined");
    }

    let output = resolve_output(args.output.as_deref(), &config)?;
    let options = build_options(&args, &config);
    tracing::debug!(
        "Pack '{}', source pack {}",
        options.pack_name,
        if options.skip_source_pack { "skipped" } else { "enabled" }
    );

    println!("Building {} entries into {}", list.len(), output.display());
    let report = list
        .build(&output, options, &mut RandomIds)
        .with_context(|| format!("Failed to build into {}", output.display()))?;

    print_report(&report);
    Ok(())
}

/// Gather entries from every import directory, then every entries file
fn collect(import_dirs: &[PathBuf], entry_files: &[PathBuf]) -> Result<EntryList> {
    let mut list = EntryList::new();

    for dir in import_dirs {
        let summary = list
            .import(dir)
            .with_context(|| format!("Failed to import {}", dir.display()))?;
        println!(
            "Imported {} entries from {} ({} skipped)",
            summary.added,
            dir.display(),
            summary.skipped
        );
    }

    for file in entry_files {
        for draft in load_drafts(file)? {
            let identifier = draft.identifier.clone();
            if let Err(e) = list.add(draft) {
                eprintln!("Skipping '{}' from {}: {}", identifier, file.display(), e);
            }
        }
    }

    Ok(list)
}

/// Read a YAML list of drafts; relative icons resolve against the file's directory
fn load_drafts(file: &Path) -> Result<Vec<EntryDraft>> {
    let contents = fs::read_to_string(file)
        .with_context(|| format!("Failed to read entries from {}", file.display()))?;
    let mut drafts: Vec<EntryDraft> = serde_yaml::from_str(&contents)
        .with_context(|| format!("Failed to parse entries in {}", file.display()))?;

    let base = file.parent().unwrap_or_else(|| Path::new(""));
    for draft in &mut drafts {
        if draft.icon.is_relative() {
            draft.icon = base.join(&draft.icon);
        }
    }

    Ok(drafts)
}

/// Remove entries by position in the collected list
fn exclude(list: &mut EntryList, indices: &[usize]) {
    let mut indices = indices.to_vec();
    indices.sort_unstable();
    indices.dedup();

    // highest first so earlier positions stay valid
    for index in indices.into_iter().rev() {
        match list.remove(index) {
            Some(entry) => println!("Excluded {}", entry.label()),
            None => eprintln!("No entry at index {}, nothing excluded", index),
        }
    }
}

fn resolve_output(flag: Option<&Path>, config: &Config) -> Result<PathBuf> {
    if let Some(path) = flag.or(config.output_dir.as_deref()) {
        return Ok(path.to_path_buf());
    }
    std::env::current_dir().context("Could not determine current directory")
}

fn build_options(args: &BuildArgs, config: &Config) -> BuildOptions {
    let mut options = config.build_options();
    if args.source_pack {
        options.skip_source_pack = false;
    }
    if args.skip_source_pack {
        options.skip_source_pack = true;
    }
    if let Some(name) = &args.name {
        options.pack_name = name.clone();
    }
    if let Some(description) = &args.description {
        options.pack_description = description.clone();
    }
    options
}

fn print_report(report: &BuildReport) {
    println!("Resource pack: {}", report.resource_pack.display());
    println!("Geyser mappings: {}", report.mapping.display());
    if let Some(source_pack) = &report.source_pack {
        println!("Oraxen source pack: {}", source_pack.display());
    }

    if report.is_clean() {
        return;
    }

    eprintln!();
    eprintln!("{} problems during build:", report.issues.len());
    for issue in &report.issues {
        eprintln!("  [{}] {}: {}", issue.step, issue.identifier, issue.error);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn write_png(path: &Path) {
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        image::RgbaImage::new(16, 16).save(path).unwrap();
    }

    fn args() -> BuildArgs {
        BuildArgs {
            entries: Vec::new(),
            import: Vec::new(),
            output: None,
            source_pack: false,
            skip_source_pack: false,
            exclude: Vec::new(),
            name: None,
            description: None,
        }
    }

    #[test]
    fn test_load_drafts_resolves_relative_icons() {
        let temp_dir = tempfile::tempdir().unwrap();
        let file = temp_dir.path().join("entries.yml");
        fs::write(
            &file,
            "- identifier: ruby_sword\n  icon: art/ruby_sword.png\n  cmd: 1001\n\
             - identifier: ruby_helmet\n  icon: /abs/helmet.png\n  kind: armor\n  material: DIAMOND_HELMET\n",
        )
        .unwrap();

        let drafts = load_drafts(&file).unwrap();
        assert_eq!(drafts.len(), 2);
        assert_eq!(drafts[0].icon, temp_dir.path().join("art/ruby_sword.png"));
        assert_eq!(drafts[0].cmd, 1001);
        assert_eq!(drafts[0].material, "DIAMOND_SWORD");
        assert_eq!(drafts[1].icon, PathBuf::from("/abs/helmet.png"));
    }

    #[test]
    fn test_collect_skips_bad_drafts() {
        let temp_dir = tempfile::tempdir().unwrap();
        write_png(&temp_dir.path().join("ruby.png"));
        let file = temp_dir.path().join("entries.yml");
        fs::write(
            &file,
            "- identifier: ruby\n  icon: ruby.png\n\
             - identifier: ghost\n  icon: ghost.png\n",
        )
        .unwrap();

        let list = collect(&[], &[file]).unwrap();
        assert_eq!(list.len(), 1);
        assert_eq!(list.entries()[0].identifier, "ruby");
    }

    #[test]
    fn test_exclude_by_index() {
        let temp_dir = tempfile::tempdir().unwrap();
        let icon = temp_dir.path().join("gem.png");
        write_png(&icon);

        let mut list = EntryList::new();
        for id in ["a", "b", "c", "d"] {
            list.add(EntryDraft::new(id, &icon)).unwrap();
        }

        exclude(&mut list, &[1, 3, 3, 9]);

        let ids: Vec<_> = list.entries().iter().map(|e| e.identifier.as_str()).collect();
        assert_eq!(ids, ["a", "c"]);
    }

    #[test]
    fn test_resolve_output_prefers_flag() {
        let config = Config {
            output_dir: Some(PathBuf::from("/configured")),
            ..Config::default()
        };

        assert_eq!(
            resolve_output(Some(Path::new("/flag")), &config).unwrap(),
            PathBuf::from("/flag")
        );
        assert_eq!(
            resolve_output(None, &config).unwrap(),
            PathBuf::from("/configured")
        );
    }

    #[test]
    fn test_build_options_flags_override_config() {
        let config = Config {
            pack_name: Some("Configured".to_string()),
            regenerate_source_pack: false,
            ..Config::default()
        };

        let mut build_args = args();
        build_args.source_pack = true;
        build_args.description = Some("Gems".to_string());
        let options = build_options(&build_args, &config);

        assert!(!options.skip_source_pack);
        assert_eq!(options.pack_name, "Configured");
        assert_eq!(options.pack_description, "Gems");

        let configured = Config {
            regenerate_source_pack: true,
            ..Config::default()
        };
        let mut build_args = args();
        build_args.skip_source_pack = true;
        assert!(build_options(&build_args, &configured).skip_source_pack);
    }
}
