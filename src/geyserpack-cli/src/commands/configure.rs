//! Configuration command handlers
//!
//! Handles the `configure` subcommand for setting up geyserpack defaults.

use crate::config::Config;
use anyhow::Result;
use std::path::PathBuf;

/// Settings passed on the command line; `None` leaves a value alone
#[derive(Debug, Default)]
pub struct Changes {
    pub output_dir: Option<PathBuf>,
    pub pack_name: Option<String>,
    pub pack_description: Option<String>,
    pub regenerate_source_pack: Option<bool>,
}

impl Changes {
    fn is_empty(&self) -> bool {
        self.output_dir.is_none()
            && self.pack_name.is_none()
            && self.pack_description.is_none()
            && self.regenerate_source_pack.is_none()
    }

    fn apply(self, config: &mut Config) {
        if let Some(dir) = self.output_dir {
            config.output_dir = Some(dir);
        }
        if let Some(name) = self.pack_name {
            config.pack_name = Some(name);
        }
        if let Some(description) = self.pack_description {
            config.pack_description = Some(description);
        }
        if let Some(regenerate) = self.regenerate_source_pack {
            config.regenerate_source_pack = regenerate;
        }
    }
}

/// Handle the configure command
///
/// # Arguments
/// * `changes` - Values to store
/// * `show` - If true, show current configuration
pub fn handle(changes: Changes, show: bool) -> Result<()> {
    let mut config = Config::load()?;

    if show {
        show_config(&config);
        return Ok(());
    }

    if changes.is_empty() {
        show_usage();
        return Ok(());
    }

    changes.apply(&mut config);
    config.save()?;

    println!("Configuration updated");
    if let Ok(path) = Config::config_path() {
        println!("Config saved to: {}", path.display());
    }

    Ok(())
}

/// Display current configuration
fn show_config(config: &Config) {
    match &config.output_dir {
        Some(dir) => println!("Output directory: {}", dir.display()),
        None => println!("Output directory: (current directory)"),
    }

    let defaults = config.build_options();
    println!("Pack name: {}", defaults.pack_name);
    println!("Pack description: {}", defaults.pack_description);
    println!("Regenerate source pack: {}", config.regenerate_source_pack);

    if let Ok(path) = Config::config_path() {
        println!("Config file: {}", path.display());
    }
}

/// Show usage help for the configure command
fn show_usage() {
    println!("Usage: geyserpack configure [--output-dir DIR] [--pack-name NAME]");
    println!("                            [--pack-description TEXT] [--regenerate-source-pack BOOL]");
    println!("       geyserpack configure --show");
}
